//! Outbound envelope shapes accepted by the webhook trigger.
//!
//! The receiving automation only fires when the posted body looks like
//! a Teams message activity. Which inner shape it accepts depends on
//! how the trigger was configured, so the wrapper is selectable.

use serde_json::{Value, json};

use crate::error::{MuezzinError, Result};
use crate::schedule::DaySchedule;

/// Wrapper shape to put around the canonical record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EnvelopeStyle {
    /// `{type, attachments}` carrying an Adaptive Card with the record
    /// attached as hidden structured data. For triggers that validate
    /// the card schema.
    #[default]
    AdaptiveCard,
    /// `{type, text}` with the record serialized into the text field
    /// as a JSON string. For triggers that only need a minimal shape.
    Text,
    /// `{type, data}` with the record passed as a structured object.
    Data,
}

impl EnvelopeStyle {
    pub fn as_str(&self) -> &'static str {
        match self {
            EnvelopeStyle::AdaptiveCard => "card",
            EnvelopeStyle::Text => "text",
            EnvelopeStyle::Data => "data",
        }
    }

    /// Wrap a validated schedule in this envelope shape.
    ///
    /// Validation runs first: an incomplete schedule produces no
    /// envelope at all rather than a partial one.
    pub fn wrap(&self, schedule: &DaySchedule) -> Result<Value> {
        schedule.validate()?;
        let record = serde_json::to_value(schedule)
            .map_err(|e| MuezzinError::IncompleteRecord(format!("record not serializable: {e}")))?;

        Ok(match self {
            EnvelopeStyle::AdaptiveCard => json!({
                "type": "message",
                "attachments": [{
                    "contentType": "application/vnd.microsoft.card.adaptive",
                    "content": {
                        "$schema": "http://adaptivecards.io/schemas/adaptive-card.json",
                        "type": "AdaptiveCard",
                        "version": "1.2",
                        "body": [
                            {
                                "type": "TextBlock",
                                "text": format!("Daily Prayer Schedule: {}", schedule.date)
                            },
                            {
                                "type": "TextBlock",
                                "text": format!("Hijri: {}", schedule.hijri.display)
                            }
                        ],
                        // The trigger only checks the card shape; the real
                        // payload rides along in this field.
                        "myData": record
                    }
                }]
            }),
            EnvelopeStyle::Text => json!({
                "type": "message",
                "text": record.to_string()
            }),
            EnvelopeStyle::Data => json!({
                "type": "message",
                "data": record
            }),
        })
    }
}

impl std::str::FromStr for EnvelopeStyle {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "card" => Ok(EnvelopeStyle::AdaptiveCard),
            "text" => Ok(EnvelopeStyle::Text),
            "data" => Ok(EnvelopeStyle::Data),
            other => Err(format!(
                "unknown envelope style {other:?} (expected card, text, or data)"
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schedule::RawDayRecord;

    fn sample_schedule() -> DaySchedule {
        let raw = RawDayRecord {
            zone: "SGR01".into(),
            date: "21-Jan-2026".into(),
            hijri: "1447-08-03".into(),
            fajr: "06:15:00".into(),
            dhuhr: "13:27:00".into(),
            asr: "16:48:00".into(),
            maghrib: "19:23:00".into(),
            isha: "20:37:00".into(),
        };
        DaySchedule::from_raw(&raw).unwrap()
    }

    #[test]
    fn card_envelope_has_trigger_shape() {
        let envelope = EnvelopeStyle::AdaptiveCard.wrap(&sample_schedule()).unwrap();
        assert_eq!(envelope["type"], "message");

        let attachment = &envelope["attachments"][0];
        assert_eq!(
            attachment["contentType"],
            "application/vnd.microsoft.card.adaptive"
        );

        let content = &attachment["content"];
        assert_eq!(content["version"], "1.2");
        assert_eq!(
            content["body"][0]["text"],
            "Daily Prayer Schedule: 21-Jan-2026"
        );
        assert_eq!(content["body"][1]["text"], "Hijri: 03-Sya'aban-1447");
        assert_eq!(content["myData"]["zone"], "SGR01");
        assert_eq!(content["myData"]["prayers"].as_array().unwrap().len(), 5);
    }

    #[test]
    fn text_envelope_carries_record_as_json_string() {
        let envelope = EnvelopeStyle::Text.wrap(&sample_schedule()).unwrap();
        assert_eq!(envelope["type"], "message");

        let text = envelope["text"].as_str().unwrap();
        let record: Value = serde_json::from_str(text).unwrap();
        assert_eq!(record["prayers"].as_array().unwrap().len(), 5);
        assert_eq!(record["hijri"]["month"], "Sya'aban");
    }

    #[test]
    fn data_envelope_carries_record_as_object() {
        let envelope = EnvelopeStyle::Data.wrap(&sample_schedule()).unwrap();
        assert_eq!(envelope["type"], "message");
        assert_eq!(envelope["data"]["zone"], "SGR01");
        assert_eq!(envelope["data"]["prayers"].as_array().unwrap().len(), 5);
        assert_eq!(
            envelope["data"]["prayers"][0]["timestamp"],
            "2026-01-21T06:15:00+08:00"
        );
    }

    #[test]
    fn incomplete_schedule_is_never_wrapped() {
        let mut schedule = sample_schedule();
        schedule.prayers.remove(2);
        for style in [
            EnvelopeStyle::AdaptiveCard,
            EnvelopeStyle::Text,
            EnvelopeStyle::Data,
        ] {
            let err = style.wrap(&schedule).unwrap_err();
            assert!(matches!(err, MuezzinError::IncompleteRecord(_)));
        }
    }

    #[test]
    fn style_parses_from_flag_values() {
        assert_eq!("card".parse::<EnvelopeStyle>().unwrap(), EnvelopeStyle::AdaptiveCard);
        assert_eq!("text".parse::<EnvelopeStyle>().unwrap(), EnvelopeStyle::Text);
        assert_eq!("DATA".parse::<EnvelopeStyle>().unwrap(), EnvelopeStyle::Data);
        assert!("xml".parse::<EnvelopeStyle>().is_err());
    }
}
