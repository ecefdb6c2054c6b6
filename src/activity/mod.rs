mod record;

pub use record::{ActivityError, ActivityKind, ActivityRecord, Location};
