//! Entity structs for nudge.
//!
//! [`RawRecord`] mirrors a record as the record store returns it; [`Task`] is
//! the normalized value object the pipeline works on. Neither outlives a
//! single reminder run.

mod record;
mod task;

pub use record::{ChoiceOption, DateRange, PersonRef, RawRecord, RichTextRun, TypedProperty};
pub use task::Task;
