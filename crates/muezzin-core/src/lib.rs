//! # Muezzin Core
//!
//! Domain types for the daily prayer-time notifier: the canonical
//! prayer table, civil-time normalization, Hijri rendering, and the
//! webhook envelope shapes.
//!
//! ## Pipeline
//! ```text
//! RawDayRecord (upstream strings)
//!   ├── time: date + clock → offset-qualified instant + 12h display
//!   ├── hijri: "YYYY-MM-DD" → "DD-MonthName-YYYY" + decomposed fields
//!   └── DaySchedule::from_raw → 5 ordered PrayerEntry values
//! EnvelopeStyle::wrap → {type: "message", …} ready to POST
//! ```
//!
//! Everything here is pure and run-scoped: no caches, no globals, no
//! state that outlives one invocation.

pub mod envelope;
pub mod error;
pub mod hijri;
pub mod prayer;
pub mod schedule;
pub mod time;

pub use envelope::EnvelopeStyle;
pub use error::{MuezzinError, Result};
pub use hijri::{HijriDate, HijriInfo};
pub use prayer::Prayer;
pub use schedule::{DaySchedule, PrayerEntry, RawDayRecord};
pub use time::CIVIL_TZ;
