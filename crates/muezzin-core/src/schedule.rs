//! Canonical day schedule built from one upstream record.

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

use crate::error::{MuezzinError, Result};
use crate::hijri::HijriInfo;
use crate::prayer::Prayer;
use crate::time;

/// One day of prayer times exactly as upstream shapes them: bare
/// strings, clock times keyed by the API's prayer identifiers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawDayRecord {
    pub zone: String,
    /// Gregorian date, `DD-Mon-YYYY`.
    pub date: String,
    /// Hijri date, `YYYY-MM-DD`.
    pub hijri: String,
    pub fajr: String,
    pub dhuhr: String,
    pub asr: String,
    pub maghrib: String,
    pub isha: String,
}

impl RawDayRecord {
    /// Clock string for one prayer, as sent by upstream.
    pub fn clock_for(&self, prayer: Prayer) -> &str {
        match prayer {
            Prayer::Subuh => &self.fajr,
            Prayer::Zohor => &self.dhuhr,
            Prayer::Asar => &self.asr,
            Prayer::Maghrib => &self.maghrib,
            Prayer::Isyak => &self.isha,
        }
    }
}

/// One normalized prayer entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PrayerEntry {
    /// Malay display name, e.g. `Subuh`.
    pub name: String,
    /// 12-hour display time, e.g. `06:15 AM`.
    pub time: String,
    /// Offset-qualified instant the receiver can delay until.
    pub timestamp: DateTime<FixedOffset>,
    /// Reminder line shown when the entry fires.
    pub message: String,
}

/// The canonical record sent downstream: one zone, one day, five
/// prayers in canonical order. Built fresh per run, never persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DaySchedule {
    pub zone: String,
    pub date: String,
    pub hijri: HijriInfo,
    pub prayers: Vec<PrayerEntry>,
}

impl DaySchedule {
    /// Normalize an upstream record into the canonical schedule.
    ///
    /// Prayers come out in canonical order no matter how the source
    /// ordered its keys. Any malformed field aborts the whole build.
    pub fn from_raw(raw: &RawDayRecord) -> Result<Self> {
        let hijri = HijriInfo::from_raw(&raw.hijri)?;

        let mut prayers = Vec::with_capacity(Prayer::SEQUENCE.len());
        for prayer in Prayer::SEQUENCE {
            let clock = raw.clock_for(prayer);
            let instant = time::civil_instant(&raw.date, clock, time::CIVIL_TZ)?;
            prayers.push(PrayerEntry {
                name: prayer.name().to_string(),
                time: time::display_time(&instant),
                timestamp: instant,
                message: prayer.reminder(clock),
            });
        }

        Ok(Self {
            zone: raw.zone.clone(),
            date: raw.date.clone(),
            hijri,
            prayers,
        })
    }

    /// Completeness check run before any envelope is built. A schedule
    /// that fails here is never sent, not even partially.
    pub fn validate(&self) -> Result<()> {
        if self.zone.trim().is_empty() {
            return Err(MuezzinError::IncompleteRecord("zone is empty".into()));
        }
        if self.date.trim().is_empty() {
            return Err(MuezzinError::IncompleteRecord("date is empty".into()));
        }
        if self.hijri.display.is_empty() {
            return Err(MuezzinError::IncompleteRecord(
                "hijri rendering is empty".into(),
            ));
        }

        let expected: Vec<&str> = Prayer::SEQUENCE.iter().map(|p| p.name()).collect();
        let got: Vec<&str> = self.prayers.iter().map(|e| e.name.as_str()).collect();
        if got != expected {
            return Err(MuezzinError::IncompleteRecord(format!(
                "expected prayers {expected:?}, got {got:?}"
            )));
        }
        if let Some(entry) = self.prayers.iter().find(|e| e.time.trim().is_empty()) {
            return Err(MuezzinError::IncompleteRecord(format!(
                "{} has no display time",
                entry.name
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_raw() -> RawDayRecord {
        RawDayRecord {
            zone: "SGR01".into(),
            date: "21-Jan-2026".into(),
            hijri: "1447-08-03".into(),
            fajr: "06:15:00".into(),
            dhuhr: "13:27:00".into(),
            asr: "16:48:00".into(),
            maghrib: "19:23:00".into(),
            isha: "20:37:00".into(),
        }
    }

    #[test]
    fn builds_five_prayers_in_canonical_order() {
        let schedule = DaySchedule::from_raw(&sample_raw()).unwrap();
        let names: Vec<&str> = schedule.prayers.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, ["Subuh", "Zohor", "Asar", "Maghrib", "Isyak"]);
        schedule.validate().unwrap();
    }

    #[test]
    fn entries_carry_display_and_machine_forms() {
        let schedule = DaySchedule::from_raw(&sample_raw()).unwrap();
        let subuh = &schedule.prayers[0];
        assert_eq!(subuh.time, "06:15 AM");
        assert_eq!(subuh.timestamp.to_rfc3339(), "2026-01-21T06:15:00+08:00");
        assert!(subuh.message.contains("Waktu Solat Subuh"));

        let zohor = &schedule.prayers[1];
        assert_eq!(zohor.time, "01:27 PM");
        assert_eq!(zohor.timestamp.to_rfc3339(), "2026-01-21T13:27:00+08:00");
    }

    #[test]
    fn hijri_fields_are_rendered() {
        let schedule = DaySchedule::from_raw(&sample_raw()).unwrap();
        assert_eq!(schedule.hijri.display, "03-Sya'aban-1447");
        assert_eq!(schedule.hijri.day, "03");
        assert_eq!(schedule.hijri.month, "Sya'aban");
    }

    #[test]
    fn serializes_with_offset_timestamps() {
        let schedule = DaySchedule::from_raw(&sample_raw()).unwrap();
        let json = serde_json::to_value(&schedule).unwrap();
        assert_eq!(
            json["prayers"][0]["timestamp"],
            serde_json::json!("2026-01-21T06:15:00+08:00")
        );
        assert_eq!(json["zone"], serde_json::json!("SGR01"));
    }

    #[test]
    fn malformed_clock_aborts_the_build() {
        let mut raw = sample_raw();
        raw.asr = "late afternoon".into();
        let err = DaySchedule::from_raw(&raw).unwrap_err();
        assert!(matches!(err, MuezzinError::MalformedTime(_)));
    }

    #[test]
    fn malformed_hijri_aborts_the_build() {
        let mut raw = sample_raw();
        raw.hijri = "1447/08/03".into();
        let err = DaySchedule::from_raw(&raw).unwrap_err();
        assert!(matches!(err, MuezzinError::MalformedHijri(_)));
    }

    #[test]
    fn validation_rejects_missing_prayer() {
        let mut schedule = DaySchedule::from_raw(&sample_raw()).unwrap();
        schedule.prayers.pop();
        let err = schedule.validate().unwrap_err();
        assert!(matches!(err, MuezzinError::IncompleteRecord(_)));
    }

    #[test]
    fn validation_rejects_empty_zone() {
        let mut schedule = DaySchedule::from_raw(&sample_raw()).unwrap();
        schedule.zone = "  ".into();
        let err = schedule.validate().unwrap_err();
        assert!(matches!(err, MuezzinError::IncompleteRecord(_)));
    }

    #[test]
    fn validation_rejects_blank_display_time() {
        let mut schedule = DaySchedule::from_raw(&sample_raw()).unwrap();
        schedule.prayers[3].time = String::new();
        let err = schedule.validate().unwrap_err();
        assert!(matches!(err, MuezzinError::IncompleteRecord(_)));
    }
}
