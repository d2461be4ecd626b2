pub mod builder;
pub mod calendar;
pub mod zone;

pub use builder::{build, TemporalContext, TemporalContextBuilder};
pub use zone::{ResolvedZone, ZoneRequest, ZoneSource};
