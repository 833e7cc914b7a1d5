//! Error kinds of the voucher workflow.
//!
//! Every step of the pipeline fails with exactly one of these kinds. Errors
//! are never retried; they abort the run and are reported verbatim.

use thiserror::Error;

/// Result type alias using the crate [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// Missing credential or malformed command-line input. Raised before any
    /// network call is made.
    #[error("Configuration error: {0}")]
    Config(String),

    /// The token endpoint rejected the credentials or answered with an
    /// unexpected shape.
    #[error("Authentication failed: {0}")]
    Authentication(String),

    /// The configured organization is not accessible with the token.
    #[error("Organization verification failed: {0}")]
    Verification(String),

    /// The remote rejected the manual voucher.
    #[error("Voucher creation failed: {0}")]
    Creation(String),

    /// The voucher was created but could not be booked. It stays behind as a
    /// draft and has to be handled manually.
    #[error(
        "Voucher booking failed for {voucher}: {reason}",
        voucher = voucher_label(.voucher_number, .guid)
    )]
    Booking {
        voucher_number: Option<i64>,
        guid: String,
        reason: String,
    },
}

fn voucher_label(number: &Option<i64>, guid: &str) -> String {
    match number {
        Some(number) => format!("voucher {} (guid {})", number, guid),
        None => format!("voucher <unknown> (guid {})", guid),
    }
}

impl Error {
    /// Describes the created-but-unbooked voucher, if this error left one
    /// behind.
    pub fn orphaned_voucher(&self) -> Option<String> {
        match self {
            Error::Booking {
                voucher_number,
                guid,
                ..
            } => Some(voucher_label(voucher_number, guid)),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn booking_error_names_the_orphaned_voucher() {
        let error = Error::Booking {
            voucher_number: Some(17),
            guid: "g-17".to_string(),
            reason: "HTTP 500".to_string(),
        };

        assert_eq!(
            error.orphaned_voucher().as_deref(),
            Some("voucher 17 (guid g-17)")
        );
        assert_eq!(
            error.to_string(),
            "Voucher booking failed for voucher 17 (guid g-17): HTTP 500"
        );
    }

    #[test]
    fn only_booking_errors_leave_a_voucher_behind() {
        let error = Error::Booking {
            voucher_number: None,
            guid: "g-1".to_string(),
            reason: "HTTP 500".to_string(),
        };
        assert_eq!(
            error.orphaned_voucher().as_deref(),
            Some("voucher <unknown> (guid g-1)")
        );

        assert_eq!(Error::Creation("HTTP 400".to_string()).orphaned_voucher(), None);
    }
}
