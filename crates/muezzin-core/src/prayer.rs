//! The five daily prayers and their fixed emission order.

/// One of the five daily prayers carried by the schedule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Prayer {
    Subuh,
    Zohor,
    Asar,
    Maghrib,
    Isyak,
}

impl Prayer {
    /// Canonical order. Every outbound record lists prayers in this
    /// sequence regardless of how the upstream payload ordered its keys.
    pub const SEQUENCE: [Prayer; 5] = [
        Prayer::Subuh,
        Prayer::Zohor,
        Prayer::Asar,
        Prayer::Maghrib,
        Prayer::Isyak,
    ];

    /// Malay display name used in outbound records.
    pub fn name(&self) -> &'static str {
        match self {
            Prayer::Subuh => "Subuh",
            Prayer::Zohor => "Zohor",
            Prayer::Asar => "Asar",
            Prayer::Maghrib => "Maghrib",
            Prayer::Isyak => "Isyak",
        }
    }

    /// Field key the e-solat API uses for this prayer.
    pub fn upstream_key(&self) -> &'static str {
        match self {
            Prayer::Subuh => "fajr",
            Prayer::Zohor => "dhuhr",
            Prayer::Asar => "asr",
            Prayer::Maghrib => "maghrib",
            Prayer::Isyak => "isha",
        }
    }

    /// Reminder line attached to each entry. Keeps the upstream
    /// `HH:MM:SS` clock string so the receiver shows the familiar form.
    pub fn reminder(&self, clock: &str) -> String {
        format!(
            "🕋 Waktu Solat {} ({}). \n\nMarilah kita solat di awal waktu.",
            self.name(),
            clock
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sequence_is_subuh_first_isyak_last() {
        let names: Vec<&str> = Prayer::SEQUENCE.iter().map(|p| p.name()).collect();
        assert_eq!(names, ["Subuh", "Zohor", "Asar", "Maghrib", "Isyak"]);
    }

    #[test]
    fn upstream_keys_match_esolat_fields() {
        let keys: Vec<&str> = Prayer::SEQUENCE.iter().map(|p| p.upstream_key()).collect();
        assert_eq!(keys, ["fajr", "dhuhr", "asr", "maghrib", "isha"]);
    }

    #[test]
    fn reminder_carries_name_and_clock() {
        let msg = Prayer::Subuh.reminder("06:15:00");
        assert!(msg.contains("Waktu Solat Subuh"));
        assert!(msg.contains("(06:15:00)"));
        assert!(msg.contains("Marilah kita solat di awal waktu"));
    }
}
