#![forbid(unsafe_code)]
#![deny(
    warnings,
    dead_code,
    unused,
    unused_imports,
    unused_must_use,
    unreachable_pub,
    clippy::all,
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    rustdoc::broken_intra_doc_links,
    rustdoc::bare_urls,
    missing_docs
)]
//! Shared HTTP DTOs for the issuer-gateway API consumed by the admin console.
//!
//! The gateway treats these types as its public request contract, so the
//! field names and their declaration order are load-bearing: the encoded
//! body must stay byte-stable across console releases.

use serde::{Deserialize, Serialize};

/// Request body for `POST /api/v1/cards`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct IssueCardRequest {
    /// Identifier of the user the card is issued to.
    pub user_id: String,
    /// Card product to issue.
    pub product_id: String,
}

impl IssueCardRequest {
    /// Build a request for the given user and product.
    #[must_use]
    pub fn new(user_id: impl Into<String>, product_id: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
            product_id: product_id.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn issue_card_request_encoding_is_byte_stable() {
        let request = IssueCardRequest::new("u_demo", "p_standard");
        let encoded = serde_json::to_string(&request).expect("encode request");
        assert_eq!(encoded, r#"{"user_id":"u_demo","product_id":"p_standard"}"#);
    }

    #[test]
    fn issue_card_request_round_trips() {
        let request = IssueCardRequest::new("u_1", "p_gold");
        let encoded = serde_json::to_string(&request).expect("encode request");
        let decoded: IssueCardRequest = serde_json::from_str(&encoded).expect("decode request");
        assert_eq!(decoded, request);
    }
}
