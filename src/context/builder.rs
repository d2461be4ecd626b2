use chrono::{DateTime, Datelike, FixedOffset, Offset, TimeZone, Timelike, Utc};
use serde::Serialize;

use super::calendar;
use super::zone::{self, ResolvedZone, ZoneRequest, ZoneSource};

/// Calendar fields and period flags for one instant in one timezone.
///
/// Every field is derived from a single UTC snapshot, so the record is
/// internally consistent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TemporalContext {
    /// Epoch seconds, UTC
    pub utc_instant: i64,
    /// IANA identifier of the resolved zone
    pub timezone: String,
    pub timezone_abbreviation: String,
    pub utc_offset_seconds: i32,
    pub local_instant: DateTime<FixedOffset>,
    pub year: i32,
    pub month: u32,
    pub month_name: String,
    pub day: u32,
    pub hour: u32,
    pub minute: u32,
    pub second: u32,
    pub day_of_week: String,
    /// Monday=1 ... Sunday=7
    pub day_of_week_num: u32,
    pub day_of_year: u32,
    /// ISO-8601 week, 1-53
    pub week_of_year: u32,
    /// ISO year that `week_of_year` belongs to
    pub iso_week_year: i32,
    pub quarter: u32,
    pub is_business_hours: bool,
    pub is_weekend: bool,
    pub is_market_hours: bool,
    pub summary: String,
}

impl TemporalContext {
    pub fn utc_datetime(&self) -> DateTime<Utc> {
        self.local_instant.with_timezone(&Utc)
    }

    /// Local date as `YYYY-MM-DD`
    pub fn date(&self) -> String {
        self.local_instant.format("%Y-%m-%d").to_string()
    }

    /// Local time as `HH:MM:SS`
    pub fn time(&self) -> String {
        self.local_instant.format("%H:%M:%S").to_string()
    }

    /// Offset as `+HH:MM`
    pub fn utc_offset(&self) -> String {
        self.local_instant.offset().to_string()
    }
}

/// Builds [`TemporalContext`] records for a fixed timezone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TemporalContextBuilder {
    zone: ResolvedZone,
}

impl TemporalContextBuilder {
    pub fn new(zone: ResolvedZone) -> Self {
        TemporalContextBuilder { zone }
    }

    /// Resolve `name` as an explicit zone, falling back to UTC.
    pub fn for_timezone(name: Option<&str>) -> Self {
        let request = name.map(|n| ZoneRequest::new(n, ZoneSource::Explicit));
        Self::new(zone::resolve_or_utc(request.as_ref()))
    }

    pub fn zone(&self) -> ResolvedZone {
        self.zone
    }

    /// Sample the wall clock once and build from that snapshot.
    pub fn build_now(&self) -> TemporalContext {
        self.build(Utc::now())
    }

    pub fn build(&self, now: DateTime<Utc>) -> TemporalContext {
        let tz = self.zone.tz;
        // Offset is looked up at `now`, so DST transition days get the right one
        let local = tz.from_utc_datetime(&now.naive_utc());
        let date = local.date_naive();
        let time = local.time();
        let weekday = local.weekday();
        let (week_of_year, iso_week_year) = calendar::iso_week(date);

        let is_market_hours = zone::is_us_eastern(tz) && calendar::is_market_session(time);
        let timezone_abbreviation = local.format("%Z").to_string();
        let summary = local.format("%A, %B %-d, %Y at %H:%M:%S %Z").to_string();
        let offset = local.offset().fix();

        TemporalContext {
            utc_instant: now.timestamp(),
            timezone: tz.name().to_string(),
            timezone_abbreviation,
            utc_offset_seconds: offset.local_minus_utc(),
            local_instant: local.with_timezone(&offset),
            year: local.year(),
            month: local.month(),
            month_name: calendar::month_name(local.month()).to_string(),
            day: local.day(),
            hour: local.hour(),
            minute: local.minute(),
            second: local.second(),
            day_of_week: calendar::weekday_name(weekday).to_string(),
            day_of_week_num: weekday.number_from_monday(),
            day_of_year: local.ordinal(),
            week_of_year,
            iso_week_year,
            quarter: calendar::quarter(local.month()),
            is_business_hours: calendar::is_business_hours(time),
            is_weekend: calendar::is_weekend(weekday),
            is_market_hours,
            summary,
        }
    }
}

/// Build the context for `now` in `tz`, substituting UTC for an unknown zone.
pub fn build(now: DateTime<Utc>, tz: Option<&str>) -> TemporalContext {
    TemporalContextBuilder::for_timezone(tz).build(now)
}
