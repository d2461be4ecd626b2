use chrono::{DateTime, Utc};
use std::env;

use crate::context::zone::{self, ZoneRequest, ZoneSource};
use crate::context::{ResolvedZone, TemporalContextBuilder};
use crate::error::{Result, TemporalError};

/// Runtime settings merged from flags, environment and host configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// First timezone candidate found, if any
    pub zone_request: Option<ZoneRequest>,
    /// Frozen instant; the wall clock is used when absent
    pub at: Option<DateTime<Utc>>,
}

impl Settings {
    /// Load settings, consulting `TZ` and the host zone after the explicit flag.
    pub fn load(explicit_tz: Option<&str>, at: Option<&str>) -> Result<Self> {
        let env_tz = env::var("TZ").ok();
        let earlier = [explicit_tz, env_tz.as_deref()];
        // Only touch the filesystem when nothing earlier applies
        let system_tz = if earlier.iter().all(|name| non_empty(*name).is_none()) {
            zone::system_zone_name()
        } else {
            None
        };

        Self::from_sources(explicit_tz, env_tz.as_deref(), system_tz.as_deref(), at)
    }

    pub fn from_sources(
        explicit_tz: Option<&str>,
        env_tz: Option<&str>,
        system_tz: Option<&str>,
        at: Option<&str>,
    ) -> Result<Self> {
        let zone_request = [
            (explicit_tz, ZoneSource::Explicit),
            (env_tz, ZoneSource::Environment),
            (system_tz, ZoneSource::System),
        ]
        .into_iter()
        .find_map(|(name, source)| non_empty(name).map(|n| ZoneRequest::new(n, source)));

        let at = at.map(parse_instant).transpose()?;

        Ok(Settings { zone_request, at })
    }

    pub fn zone(&self) -> ResolvedZone {
        zone::resolve_or_utc(self.zone_request.as_ref())
    }

    pub fn builder(&self) -> TemporalContextBuilder {
        TemporalContextBuilder::new(self.zone())
    }

    /// The snapshot instant: the frozen one, or a single wall-clock read.
    pub fn now(&self) -> DateTime<Utc> {
        self.at.unwrap_or_else(Utc::now)
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

/// Parse an RFC 3339 timestamp or integer epoch seconds.
pub fn parse_instant(raw: &str) -> Result<DateTime<Utc>> {
    let trimmed = raw.trim();

    if let Ok(parsed) = DateTime::parse_from_rfc3339(trimmed) {
        return Ok(parsed.with_timezone(&Utc));
    }

    trimmed
        .parse::<i64>()
        .ok()
        .and_then(|secs| DateTime::from_timestamp(secs, 0))
        .ok_or_else(|| TemporalError::InvalidInstant(raw.to_string()))
}
