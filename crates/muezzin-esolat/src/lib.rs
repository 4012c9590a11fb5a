//! # Muezzin E-Solat
//!
//! Client for the JAKIM e-solat takwim API: fetches the day's prayer
//! timetable for a zone and hands it over as the core raw record.

pub mod takwim;

pub use takwim::{DEFAULT_ZONE, EsolatClient, TakwimDay, TakwimResponse};
