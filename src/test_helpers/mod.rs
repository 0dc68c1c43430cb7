//! A set of helpers for testing

mod event;
mod sink;

pub use event::notification_event_json;
pub use sink::{FailingSink, RecordingSink};
