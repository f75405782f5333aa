//! Core data types returned by the deep-clean API.

use serde::Serialize;
use std::fmt;
use std::str::FromStr;

use crate::core::error::{ClientError, Result};

/// Classification the deep-clean API assigns to an address.
///
/// Serializes as the exact wire string used by the JSON protocol, so
/// results can be re-emitted by consumers without translation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum EmailStatus {
    /// Still being processed; check back again within 5-10 minutes.
    Processing,
    /// This address is clean.
    Clean,
    /// This address is invalid (fails syntax or RFC checks).
    Invalid,
    /// This address is not expected to receive any reply emails.
    NoReply,
    /// This address has been detected as a spam-trap.
    SpamTrap,
    /// The mail server is not present or is not configured correctly.
    BadMx,
    /// This address does not exist and will bounce back.
    Bounced,
    /// The mail server accepts both fake and real addresses.
    CatchAll,
    /// Rejected or deferred after multiple checks without a confirmed
    /// result. It may bounce.
    Suspicious,
    /// The mail server returns an unexpected result. This address may bounce.
    Unknown,
}

impl EmailStatus {
    /// Every status, in rank order.
    pub const ALL: [EmailStatus; 10] = [
        EmailStatus::Processing,
        EmailStatus::Clean,
        EmailStatus::Invalid,
        EmailStatus::NoReply,
        EmailStatus::SpamTrap,
        EmailStatus::BadMx,
        EmailStatus::Bounced,
        EmailStatus::CatchAll,
        EmailStatus::Suspicious,
        EmailStatus::Unknown,
    ];

    /// The exact string denoting this status in the JSON protocol.
    pub fn as_wire_str(&self) -> &'static str {
        match self {
            EmailStatus::Processing => "processing",
            EmailStatus::Clean => "clean",
            EmailStatus::Invalid => "invalid",
            EmailStatus::NoReply => "no-reply",
            EmailStatus::SpamTrap => "spam-trap",
            EmailStatus::BadMx => "bad-mx",
            EmailStatus::Bounced => "bounced",
            EmailStatus::CatchAll => "catch-all",
            EmailStatus::Suspicious => "suspicious",
            EmailStatus::Unknown => "unknown",
        }
    }

    /// Decodes a protocol status string.
    ///
    /// An unrecognized value is surfaced as [`ClientError::UnknownStatus`]
    /// rather than coerced to a default, so callers can detect when the
    /// remote service starts emitting statuses this client does not know.
    pub fn from_wire_str(value: &str) -> Result<Self> {
        match value {
            "processing" => Ok(EmailStatus::Processing),
            "clean" => Ok(EmailStatus::Clean),
            "invalid" => Ok(EmailStatus::Invalid),
            "no-reply" => Ok(EmailStatus::NoReply),
            "spam-trap" => Ok(EmailStatus::SpamTrap),
            "bad-mx" => Ok(EmailStatus::BadMx),
            "bounced" => Ok(EmailStatus::Bounced),
            "catch-all" => Ok(EmailStatus::CatchAll),
            "suspicious" => Ok(EmailStatus::Suspicious),
            "unknown" => Ok(EmailStatus::Unknown),
            other => Err(ClientError::UnknownStatus(other.to_string())),
        }
    }

    /// The numeric code ListWise assigns to this classification.
    ///
    /// Values are fixed and non-contiguous; they exist for sorting and
    /// comparison by callers and carry no meaning inside the client.
    pub fn rank(&self) -> u8 {
        match self {
            EmailStatus::Processing => 1,
            EmailStatus::Clean => 2,
            EmailStatus::Invalid => 3,
            EmailStatus::NoReply => 5,
            EmailStatus::SpamTrap => 7,
            EmailStatus::BadMx => 9,
            EmailStatus::Bounced => 11,
            EmailStatus::CatchAll => 12,
            EmailStatus::Suspicious => 13,
            EmailStatus::Unknown => 15,
        }
    }

    /// Human-readable explanation of the status, from the ListWise docs.
    pub fn description(&self) -> &'static str {
        match self {
            EmailStatus::Processing => {
                "This address is currently being processed, check back again within 5-10 minutes"
            }
            EmailStatus::Clean => "This address is clean",
            EmailStatus::Invalid => "This address is invalid (fails syntax or RFC checks)",
            EmailStatus::NoReply => "This address is not expected to receive any reply emails",
            EmailStatus::SpamTrap => "This address has been detected as a spam-trap",
            EmailStatus::BadMx => "The mail server is not present or is not configured correctly",
            EmailStatus::Bounced => "This address does not exist and will bounce back",
            EmailStatus::CatchAll => "The mail server accepts both fake and real addresses",
            EmailStatus::Suspicious => {
                "This address has been rejected or deferred after multiple checks \
                 without a confirmed result. It may bounce"
            }
            EmailStatus::Unknown => {
                "The mail server returns an unexpected result. This address may bounce"
            }
        }
    }
}

impl fmt::Display for EmailStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_wire_str())
    }
}

impl FromStr for EmailStatus {
    type Err = ClientError;

    fn from_str(s: &str) -> Result<Self> {
        EmailStatus::from_wire_str(s)
    }
}

/// One validated address as reported by the deep-clean API.
///
/// Immutable once constructed; plain value equality, no identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EmailResult {
    /// The address the verdict applies to. May differ from the submitted
    /// input when the service fixed typos.
    pub email: String,
    /// The classification assigned by the service.
    pub status: EmailStatus,
    /// Whether the address is hosted by a free/public mail provider.
    pub is_free: bool,
    /// Whether the service corrected typos in the submitted input.
    pub typos_fixed: bool,
}

impl EmailResult {
    /// Creates a result from explicit field values.
    pub fn new(
        email: impl Into<String>,
        status: EmailStatus,
        is_free: bool,
        typos_fixed: bool,
    ) -> Self {
        Self {
            email: email.into(),
            status,
            is_free,
            typos_fixed,
        }
    }
}

impl fmt::Display for EmailResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} [status={}, free={}, typos_fixed={}]",
            self.email, self.status, self.is_free, self.typos_fixed
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wire_strings_round_trip() {
        for status in EmailStatus::ALL {
            let decoded = EmailStatus::from_wire_str(status.as_wire_str()).unwrap();
            assert_eq!(decoded, status);
        }
    }

    #[test]
    fn ranks_match_the_listwise_table() {
        let expected = [
            (EmailStatus::Processing, 1),
            (EmailStatus::Clean, 2),
            (EmailStatus::Invalid, 3),
            (EmailStatus::NoReply, 5),
            (EmailStatus::SpamTrap, 7),
            (EmailStatus::BadMx, 9),
            (EmailStatus::Bounced, 11),
            (EmailStatus::CatchAll, 12),
            (EmailStatus::Suspicious, 13),
            (EmailStatus::Unknown, 15),
        ];
        for (status, rank) in expected {
            assert_eq!(status.rank(), rank, "rank mismatch for {status}");
        }
    }

    #[test]
    fn decodes_bad_mx() {
        assert_eq!(
            EmailStatus::from_wire_str("bad-mx").unwrap(),
            EmailStatus::BadMx
        );
    }

    #[test]
    fn unrecognized_status_is_an_error() {
        let err = EmailStatus::from_wire_str("quarantined").unwrap_err();
        assert!(matches!(err, ClientError::UnknownStatus(raw) if raw == "quarantined"));
    }

    #[test]
    fn display_prints_the_wire_string() {
        assert_eq!(EmailStatus::CatchAll.to_string(), "catch-all");
        assert_eq!("no-reply".parse::<EmailStatus>().unwrap(), EmailStatus::NoReply);
    }

    #[test]
    fn serializes_as_wire_string() {
        let json = serde_json::to_string(&EmailStatus::SpamTrap).unwrap();
        assert_eq!(json, "\"spam-trap\"");
    }

    #[test]
    fn result_is_a_plain_value() {
        let a = EmailResult::new("user@example.com", EmailStatus::Clean, false, true);
        let b = EmailResult::new("user@example.com", EmailStatus::Clean, false, true);
        assert_eq!(a, b);
        assert_eq!(
            a.to_string(),
            "user@example.com [status=clean, free=false, typos_fixed=true]"
        );
    }
}
