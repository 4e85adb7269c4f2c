//! # nudge-core
//!
//! Core types shared by every nudge crate.
//!
//! - The [`Task`](entities::Task) value object produced from one source record
//! - The raw record model ([`RawRecord`](entities::RawRecord),
//!   [`TypedProperty`](entities::TypedProperty)) in the record store's wire format
//! - Classification enums (lifecycle category, priority tier, urgency)
//! - Vocabulary tables mapping raw status/priority terms to those enums
//! - Reminder settings passed into the pipeline
//! - Cross-cutting error types

pub mod entities;
pub mod enums;
pub mod errors;
pub mod settings;
pub mod vocabulary;
