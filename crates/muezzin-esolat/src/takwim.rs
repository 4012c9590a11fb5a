//! Takwim solat fetching from the e-solat portal.

use muezzin_core::error::{MuezzinError, Result};
use muezzin_core::schedule::RawDayRecord;
use serde::Deserialize;

/// Zone fetched when no other zone is configured (Gombak, Petaling,
/// Sepang, Hulu Langat, Hulu Selangor, Shah Alam).
pub const DEFAULT_ZONE: &str = "SGR01";

const ESOLAT_ENDPOINT: &str = "https://www.e-solat.gov.my/index.php";

/// Thin client over the takwim API.
pub struct EsolatClient {
    endpoint: String,
    client: reqwest::Client,
}

impl EsolatClient {
    pub fn new() -> Self {
        Self::with_endpoint(ESOLAT_ENDPOINT)
    }

    /// Point the client somewhere else, e.g. a local fixture server.
    pub fn with_endpoint(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            client: reqwest::Client::new(),
        }
    }

    /// Fetch today's record for a zone.
    ///
    /// No timeout and no retry here: a fetch that fails is fatal to
    /// the run, and the caller reports it.
    pub async fn fetch_today(&self, zone: &str) -> Result<RawDayRecord> {
        tracing::debug!("fetching takwim for zone {zone} from {}", self.endpoint);

        let response = self
            .client
            .get(&self.endpoint)
            .query(&[
                ("r", "esolatApi/takwimsolat"),
                ("period", "today"),
                ("zone", zone),
            ])
            .send()
            .await
            .map_err(|e| MuezzinError::UpstreamData(format!("e-solat fetch failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            return Err(MuezzinError::UpstreamData(format!(
                "e-solat returned {status}"
            )));
        }

        let body: TakwimResponse = response
            .json()
            .await
            .map_err(|e| MuezzinError::UpstreamData(format!("invalid e-solat response: {e}")))?;

        body.into_today(zone)
    }
}

impl Default for EsolatClient {
    fn default() -> Self {
        Self::new()
    }
}

// --- e-solat API types ---

/// Top-level takwim response. Unmodelled fields (bearing, serverTime,
/// periodType, lang) are ignored on decode.
#[derive(Debug, Deserialize)]
pub struct TakwimResponse {
    #[serde(rename = "prayerTime", default)]
    pub prayer_time: Vec<TakwimDay>,
    #[serde(default)]
    pub zone: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
}

/// One calendar day as the API sends it. The five prayer fields are
/// required; the extras the portal adds are kept optional and unused.
#[derive(Debug, Clone, Deserialize)]
pub struct TakwimDay {
    pub hijri: String,
    pub date: String,
    #[serde(default)]
    pub day: Option<String>,
    #[serde(default)]
    pub imsak: Option<String>,
    #[serde(default)]
    pub syuruk: Option<String>,
    pub fajr: String,
    pub dhuhr: String,
    pub asr: String,
    pub maghrib: String,
    pub isha: String,
}

impl TakwimResponse {
    /// Pull the single record a `period=today` query carries.
    ///
    /// The zone echoed by the API wins over the requested one so the
    /// record always shows the canonical casing.
    pub fn into_today(self, requested_zone: &str) -> Result<RawDayRecord> {
        let zone = self
            .zone
            .filter(|z| !z.is_empty())
            .unwrap_or_else(|| requested_zone.to_string());

        let day = self.prayer_time.into_iter().next().ok_or_else(|| {
            MuezzinError::UpstreamData("no prayer time data for today".into())
        })?;

        Ok(day.into_raw_record(zone))
    }
}

impl TakwimDay {
    /// Convert to the core record, tagging it with the zone.
    pub fn into_raw_record(self, zone: String) -> RawDayRecord {
        RawDayRecord {
            zone,
            date: self.date,
            hijri: self.hijri,
            fajr: self.fajr,
            dhuhr: self.dhuhr,
            asr: self.asr,
            maghrib: self.maghrib,
            isha: self.isha,
        }
    }
}
