//! Hijri date parsing and rendering.
//!
//! Upstream sends the Hijri date as numeric `YYYY-MM-DD`. Month names
//! follow the Malay table used on the e-solat portal.

use serde::{Deserialize, Serialize};

use crate::error::{MuezzinError, Result};

/// Malay Hijri month names, month 1 first.
pub const MONTH_NAMES: [&str; 12] = [
    "Muharram",
    "Safar",
    "Rabiulawal",
    "Rabiulakhir",
    "Jamadilawal",
    "Jamadilakhir",
    "Rejab",
    "Sya'aban",
    "Ramadhan",
    "Syawal",
    "Zulkaedah",
    "Zulhijjah",
];

/// Month name for a 1-based ordinal, bounds-checked.
pub fn month_name(month: u32) -> Result<&'static str> {
    month
        .checked_sub(1)
        .and_then(|i| MONTH_NAMES.get(i as usize))
        .copied()
        .ok_or(MuezzinError::InvalidHijriMonth(month))
}

/// Decomposed Hijri date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HijriDate {
    pub year: i32,
    pub month: u32,
    pub day: u32,
}

impl HijriDate {
    /// Split a `YYYY-MM-DD` string into its three numeric components.
    pub fn parse(raw: &str) -> Result<Self> {
        let parts: Vec<&str> = raw.trim().split('-').collect();
        let (y, m, d) = match parts.as_slice() {
            [y, m, d] => (*y, *m, *d),
            _ => {
                return Err(MuezzinError::MalformedHijri(format!(
                    "expected YYYY-MM-DD, got {raw:?}"
                )));
            }
        };

        let year = y
            .parse::<i32>()
            .map_err(|_| MuezzinError::MalformedHijri(format!("bad year in {raw:?}")))?;
        let month = m
            .parse::<u32>()
            .map_err(|_| MuezzinError::MalformedHijri(format!("bad month in {raw:?}")))?;
        let day = d
            .parse::<u32>()
            .map_err(|_| MuezzinError::MalformedHijri(format!("bad day in {raw:?}")))?;

        Ok(Self { year, month, day })
    }

    pub fn month_name(&self) -> Result<&'static str> {
        month_name(self.month)
    }

    /// Day-of-month as the zero-padded form downstream rules match on.
    pub fn day_padded(&self) -> String {
        format!("{:02}", self.day)
    }

    /// Display form `DD-MonthName-YYYY`, e.g. `03-Sya'aban-1447`.
    pub fn display(&self) -> Result<String> {
        Ok(format!("{}-{}-{}", self.day_padded(), self.month_name()?, self.year))
    }
}

/// Rendered Hijri fields as carried in the outbound record.
///
/// `day` and `month` are exposed separately so receiver-side rules can
/// match on them without re-parsing `display`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HijriInfo {
    pub raw: String,
    pub display: String,
    pub day: String,
    pub month: String,
    pub year: i32,
}

impl HijriInfo {
    /// Parse and render in one step.
    pub fn from_raw(raw: &str) -> Result<Self> {
        let date = HijriDate::parse(raw)?;
        Ok(Self {
            raw: raw.trim().to_string(),
            display: date.display()?,
            day: date.day_padded(),
            month: date.month_name()?.to_string(),
            year: date.year,
        })
    }
}
