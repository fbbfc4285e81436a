pub mod email;
pub mod lambda;
pub mod serve;
