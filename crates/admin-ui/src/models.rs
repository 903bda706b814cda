//! Console-side model helpers.

use admin_api_models::IssueCardRequest;

/// Fixed demo issuance payload used by the console's issue button.
///
/// The identifiers are configuration defaults, not user input; the console
/// has no form for editing them.
#[must_use]
pub fn demo_issue_request() -> IssueCardRequest {
    IssueCardRequest::new("u_demo", "p_standard")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn demo_request_matches_gateway_contract() {
        let encoded = serde_json::to_string(&demo_issue_request()).expect("encode request");
        assert_eq!(encoded, r#"{"user_id":"u_demo","product_id":"p_standard"}"#);
    }
}
