//! Pure console state machines, kept outside the wasm gates so they can be
//! unit tested with a native toolchain.
//!
//! Two independent lifecycles: the one-shot gateway health probe and the
//! user-triggered card issuance. They share no state and never interact.

use std::fmt::Display;

/// Lifecycle of the one-shot issuer-gateway health probe.
///
/// The probe settles exactly once; there is no re-polling, so the state never
/// leaves [`HealthState::Reachable`] or [`HealthState::Unreachable`] once it
/// gets there.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum HealthState {
    /// Probe issued but not settled yet.
    Pending,
    /// Gateway answered with a success status; the raw body is kept verbatim.
    Reachable(String),
    /// Network failure or non-success status. No detail is retained.
    Unreachable,
}

impl HealthState {
    /// Collapse the probe outcome into a settled state.
    ///
    /// The mapping is total: every failure, transport or application level,
    /// becomes [`HealthState::Unreachable`].
    #[must_use]
    pub fn settle<E>(outcome: Result<String, E>) -> Self {
        match outcome {
            Ok(body) => Self::Reachable(body),
            Err(_) => Self::Unreachable,
        }
    }

    /// Text rendered next to the health caption.
    #[must_use]
    pub fn label(&self) -> &str {
        match self {
            Self::Pending => "…",
            Self::Reachable(body) => body,
            Self::Unreachable => "down",
        }
    }
}

/// Lifecycle of the user-triggered card issuance action.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum IssuanceState {
    /// Action never triggered.
    Idle,
    /// Request outstanding; the trigger stays disabled until it settles.
    InFlight,
    /// Request settled; the raw response body (or the formatted transport
    /// error) is kept for display until the next trigger replaces it.
    Completed(String),
}

impl IssuanceState {
    /// Start a new issuance if none is outstanding.
    ///
    /// Returns `None` while a request is already in flight; overlapping
    /// triggers are ignored rather than queued. Triggering again after a
    /// completion replaces the previous response.
    #[must_use]
    pub const fn begin(&self) -> Option<Self> {
        match self {
            Self::InFlight => None,
            Self::Idle | Self::Completed(_) => Some(Self::InFlight),
        }
    }

    /// Settle the outstanding request.
    ///
    /// Both the response body and a transport failure map into
    /// [`IssuanceState::Completed`] so every trigger produces an observable
    /// result. Application errors arrive as `Ok` bodies and are displayed
    /// verbatim, indistinguishable from successes.
    #[must_use]
    pub fn settle<E: Display>(outcome: Result<String, E>) -> Self {
        match outcome {
            Ok(body) => Self::Completed(body),
            Err(err) => Self::Completed(format!("request failed: {err}")),
        }
    }

    /// Whether a request is currently outstanding.
    #[must_use]
    pub const fn in_flight(&self) -> bool {
        matches!(self, Self::InFlight)
    }

    /// The settled response text, if the action ever completed.
    #[must_use]
    pub fn response(&self) -> Option<&str> {
        match self {
            Self::Completed(body) => Some(body),
            Self::Idle | Self::InFlight => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn health_pending_renders_ellipsis() {
        assert_eq!(HealthState::Pending.label(), "…");
    }

    #[test]
    fn health_settles_to_body_text() {
        let state = HealthState::settle::<&str>(Ok("ok".to_string()));
        assert_eq!(state, HealthState::Reachable("ok".to_string()));
        assert_eq!(state.label(), "ok");
    }

    #[test]
    fn health_failure_collapses_to_down() {
        let state = HealthState::settle(Err("connection refused"));
        assert_eq!(state, HealthState::Unreachable);
        assert_eq!(state.label(), "down");
    }

    #[test]
    fn issuance_exposes_no_response_before_completion() {
        assert_eq!(IssuanceState::Idle.response(), None);
        assert_eq!(IssuanceState::InFlight.response(), None);
    }

    #[test]
    fn issuance_guard_refuses_overlapping_triggers() {
        assert_eq!(IssuanceState::Idle.begin(), Some(IssuanceState::InFlight));
        assert_eq!(IssuanceState::InFlight.begin(), None);
        assert_eq!(
            IssuanceState::Completed("{}".to_string()).begin(),
            Some(IssuanceState::InFlight)
        );
    }

    #[test]
    fn issuance_keeps_response_body_verbatim() {
        let body = r#"{"id":"card_123"}"#;
        let state = IssuanceState::settle::<&str>(Ok(body.to_string()));
        assert_eq!(state.response(), Some(body));
        assert!(!state.in_flight());
    }

    #[test]
    fn issuance_error_body_is_not_special_cased() {
        let body = r#"{"error":"invalid_product"}"#;
        let state = IssuanceState::settle::<&str>(Ok(body.to_string()));
        assert_eq!(state.response(), Some(body));
    }

    #[test]
    fn issuance_transport_failure_still_settles() {
        let state = IssuanceState::settle(Err("dns lookup failed"));
        assert_eq!(state.response(), Some("request failed: dns lookup failed"));
    }

    #[test]
    fn issuance_resettle_replaces_previous_response() {
        let first = IssuanceState::settle::<&str>(Ok("first".to_string()));
        assert_eq!(first.response(), Some("first"));
        let second = IssuanceState::settle::<&str>(Ok("second".to_string()));
        assert_eq!(second.response(), Some("second"));
    }
}
