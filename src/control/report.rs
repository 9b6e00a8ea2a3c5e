//! Session report builder.
//!
//! Builds the single JSON line written to stdout when a session ends, so a
//! parent process can pick up the decoded message and the session statistics
//! without scraping log output.
//!
//! # Example
//!
//! ```
//! use prt7_decoder::control::build_report_message;
//! use prt7_decoder::session::{SessionSummary, Termination};
//!
//! let summary = SessionSummary {
//!     message: "HI".to_string(),
//!     frames_processed: 2,
//!     parse_failures: 0,
//!     rotor_offset: 0,
//!     termination: Termination::Sentinel,
//! };
//! let json = build_report_message(&summary);
//! assert!(json.contains("PRT-7"));
//! ```

use serde_json::json;

use crate::session::SessionSummary;

/// Name of the wire protocol this decoder speaks.
pub const PROTOCOL_NAME: &str = "PRT-7";

/// Build the session report as a JSON string.
pub fn build_report_message(summary: &SessionSummary) -> String {
    json!({
        "protocol": PROTOCOL_NAME,
        "session": summary,
    })
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::Termination;

    fn sample_summary() -> SessionSummary {
        SessionSummary {
            message: "BC".to_string(),
            frames_processed: 3,
            parse_failures: 1,
            rotor_offset: 1,
            termination: Termination::Sentinel,
        }
    }

    #[test]
    fn test_report_contains_message_and_counters() {
        let json = build_report_message(&sample_summary());

        assert!(json.contains(r#""protocol":"PRT-7""#));
        assert!(json.contains(r#""message":"BC""#));
        assert!(json.contains(r#""frames_processed":3"#));
        assert!(json.contains(r#""parse_failures":1"#));
    }

    #[test]
    fn test_report_is_valid_json() {
        let json = build_report_message(&sample_summary());
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["session"]["message"], "BC");
        assert_eq!(value["session"]["rotor_offset"], 1);
        assert_eq!(value["session"]["termination"], "sentinel");
    }

    #[test]
    fn test_report_is_single_line() {
        let json = build_report_message(&sample_summary());
        assert!(!json.contains('\n'));
    }
}
