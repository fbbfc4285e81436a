/// Assert that an expression matches a pattern, with an optional guard.
///
/// ```rust
/// # use letterbox_utils::assert_matches;
/// let result: Result<u8, ()> = Ok(7);
/// assert_matches!(result, Ok(7));
/// assert_matches!(result, Ok(x) if x > 5);
/// ```
#[macro_export]
macro_rules! assert_matches {
    ($expr:expr, $pat:pat $(if $guard:expr)? $(,)?) => {
        match $expr {
            $pat $(if $guard)? => {}
            ref value => ::core::panic!(
                "assertion failed: `{:?}` does not match `{}`",
                value,
                ::core::stringify!($pat $(if $guard)?),
            ),
        }
    };
}
