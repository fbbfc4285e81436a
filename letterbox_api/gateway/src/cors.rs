use anyhow::Context;
use http::{
    header::{
        ACCESS_CONTROL_ALLOW_HEADERS, ACCESS_CONTROL_ALLOW_METHODS, ACCESS_CONTROL_ALLOW_ORIGIN,
        CONTENT_TYPE,
    },
    HeaderMap, HeaderValue,
};

pub const ALLOW_HEADERS: &str = "Content-Type, X-Requested-With";
pub const ALLOW_METHODS: &str = "POST, OPTIONS";

/// The fixed set of headers attached to every response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CorsHeaders {
    allowed_origin: HeaderValue,
}

impl CorsHeaders {
    pub fn new(allowed_origin: &str) -> anyhow::Result<Self> {
        let allowed_origin = HeaderValue::from_str(allowed_origin)
            .with_context(|| format!("Invalid allowed origin: {allowed_origin:?}"))?;
        Ok(Self { allowed_origin })
    }

    pub fn header_map(&self) -> HeaderMap {
        HeaderMap::from_iter([
            (ACCESS_CONTROL_ALLOW_ORIGIN, self.allowed_origin.clone()),
            (ACCESS_CONTROL_ALLOW_HEADERS, HeaderValue::from_static(ALLOW_HEADERS)),
            (ACCESS_CONTROL_ALLOW_METHODS, HeaderValue::from_static(ALLOW_METHODS)),
            (CONTENT_TYPE, HeaderValue::from_static("application/json")),
        ])
    }
}
