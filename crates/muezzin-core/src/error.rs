//! Error taxonomy shared across the muezzin crates.

use thiserror::Error;

/// Workspace-wide result alias.
pub type Result<T> = std::result::Result<T, MuezzinError>;

/// Everything that can abort a daily run.
///
/// Parsing and validation failures are fatal by policy: a partial
/// notification is worse than no notification, so nothing downstream
/// of the first error is attempted.
#[derive(Debug, Error)]
pub enum MuezzinError {
    /// Upstream payload was empty, malformed, or missing the day's record.
    #[error("upstream data error: {0}")]
    UpstreamData(String),

    /// Gregorian date or clock string did not parse, or names no valid
    /// wall-clock instant in the civil zone.
    #[error("malformed time input: {0}")]
    MalformedTime(String),

    /// Hijri month ordinal outside 1–12.
    #[error("invalid hijri month: {0}")]
    InvalidHijriMonth(u32),

    /// Hijri date string did not split into three numeric components.
    #[error("malformed hijri date: {0}")]
    MalformedHijri(String),

    /// Canonical record failed validation before wrapping.
    #[error("incomplete record: {0}")]
    IncompleteRecord(String),

    /// Hard outbound failure: network error or a 5xx from the webhook.
    #[error("delivery failed: {0}")]
    Delivery(String),
}
