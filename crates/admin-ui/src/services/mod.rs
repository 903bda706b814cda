//! HTTP client services for the issuer gateway.

pub(crate) mod api;
