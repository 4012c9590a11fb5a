//! # Muezzin Channels
//!
//! Outbound delivery. One channel today: the Teams-style webhook that
//! fronts the automation flow, with its soft-success quirks modeled
//! explicitly.

pub mod teams;

pub use teams::{DEFAULT_SEND_TIMEOUT, DeliveryOutcome, SendFailure, TeamsWebhook, classify};
