use chrono_tz::Tz;
use std::fmt;
use std::fs;
use std::path::Path;
use tracing::{debug, warn};

use crate::error::{Result, TemporalError};

/// IANA identifiers that share New York's offset and DST rules.
const US_EASTERN_ZONES: &[&str] = &[
    "America/New_York",
    "US/Eastern",
    "EST5EDT",
    "America/Detroit",
    "US/Michigan",
    "America/Indiana/Indianapolis",
    "America/Indianapolis",
    "America/Fort_Wayne",
    "US/East-Indiana",
    "America/Kentucky/Louisville",
    "America/Louisville",
    "America/Toronto",
    "America/Montreal",
    "America/Nassau",
    "Canada/Eastern",
];

/// Where a timezone name came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ZoneSource {
    /// `--tz` flag or `TEMPORA_TZ`
    Explicit,
    /// `TZ` environment variable
    Environment,
    /// Host configuration (`/etc/localtime`, `/etc/timezone`)
    System,
    /// Nothing usable was found; UTC substituted
    Fallback,
}

impl fmt::Display for ZoneSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ZoneSource::Explicit => "explicit",
            ZoneSource::Environment => "TZ",
            ZoneSource::System => "system",
            ZoneSource::Fallback => "fallback",
        };
        write!(f, "{}", label)
    }
}

/// A timezone name waiting to be resolved, tagged with its origin.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ZoneRequest {
    pub name: String,
    pub source: ZoneSource,
}

impl ZoneRequest {
    pub fn new(name: impl Into<String>, source: ZoneSource) -> Self {
        ZoneRequest {
            name: name.into(),
            source,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedZone {
    pub tz: Tz,
    pub source: ZoneSource,
}

impl ResolvedZone {
    pub fn utc() -> Self {
        ResolvedZone {
            tz: Tz::UTC,
            source: ZoneSource::Fallback,
        }
    }

    pub fn name(&self) -> &'static str {
        self.tz.name()
    }

    pub fn is_fallback(&self) -> bool {
        self.source == ZoneSource::Fallback
    }
}

/// Parse an IANA timezone identifier.
///
/// Accepts the POSIX `:Area/City` form used in `TZ`.
pub fn parse_zone(name: &str) -> Result<Tz> {
    let trimmed = name.trim().trim_start_matches(':');
    if trimmed.is_empty() {
        return Err(TemporalError::TimezoneResolution {
            name: name.to_string(),
            reason: "empty timezone name".to_string(),
        });
    }

    trimmed
        .parse::<Tz>()
        .map_err(|e| TemporalError::TimezoneResolution {
            name: trimmed.to_string(),
            reason: e.to_string(),
        })
}

/// Resolve a request, substituting UTC when it is absent or unparseable.
///
/// Never fails: resolution problems are logged and recovered locally.
pub fn resolve_or_utc(request: Option<&ZoneRequest>) -> ResolvedZone {
    let Some(request) = request else {
        warn!("no timezone configured, using UTC");
        return ResolvedZone::utc();
    };

    match parse_zone(&request.name) {
        Ok(tz) => {
            debug!(zone = tz.name(), source = %request.source, "resolved timezone");
            ResolvedZone {
                tz,
                source: request.source,
            }
        }
        Err(e) => {
            warn!(source = %request.source, "{}, using UTC", e);
            ResolvedZone::utc()
        }
    }
}

/// Whether `tz` follows US Eastern time, the NYSE's home zone.
pub fn is_us_eastern(tz: Tz) -> bool {
    US_EASTERN_ZONES.contains(&tz.name())
}

/// Detect the host's configured zone.
pub fn system_zone_name() -> Option<String> {
    system_zone_name_in(Path::new("/"))
}

fn system_zone_name_in(root: &Path) -> Option<String> {
    let localtime = root.join("etc/localtime");
    if let Ok(target) = fs::read_link(&localtime) {
        let target = target.to_string_lossy();
        if let Some(idx) = target.find("zoneinfo/") {
            let name = &target[idx + "zoneinfo/".len()..];
            // posix/ and right/ trees hold the same zones under a subdirectory
            let name = name
                .strip_prefix("posix/")
                .or_else(|| name.strip_prefix("right/"))
                .unwrap_or(name);
            if !name.is_empty() {
                return Some(name.to_string());
            }
        }
    }

    // Debian-style plain text fallback
    fs::read_to_string(root.join("etc/timezone"))
        .ok()
        .map(|content| content.trim().to_string())
        .filter(|name| !name.is_empty())
}
