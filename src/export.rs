use clap::ValueEnum;
use regex::Regex;
use std::fmt;
use std::sync::OnceLock;

use crate::context::TemporalContext;
use crate::error::{Result, TemporalError};

pub const DEFAULT_PREFIX: &str = "TEMPORAL";

/// Field names in export order. Keys are `PREFIX_<FIELD>`.
pub const FIELDS: &[&str] = &[
    "UTC_INSTANT",
    "UTC_TIMESTAMP",
    "TIMEZONE",
    "TIMEZONE_ABBREVIATION",
    "UTC_OFFSET",
    "LOCAL_INSTANT",
    "DATE",
    "TIME",
    "YEAR",
    "MONTH",
    "MONTH_NAME",
    "DAY",
    "HOUR",
    "MINUTE",
    "SECOND",
    "DAY_OF_WEEK",
    "DAY_OF_WEEK_NUM",
    "DAY_OF_YEAR",
    "WEEK_OF_YEAR",
    "ISO_WEEK_YEAR",
    "QUARTER",
    "IS_BUSINESS_HOURS",
    "IS_WEEKEND",
    "IS_MARKET_HOURS",
    "SUMMARY",
];

fn prefix_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^[A-Z][A-Z0-9_]*$").unwrap())
}

/// Validated variable-name prefix, stored without the joining underscore.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prefix(String);

impl Prefix {
    pub fn parse(raw: &str) -> Result<Self> {
        let normalized = raw.trim().to_ascii_uppercase();
        let normalized = normalized.trim_end_matches('_');

        if !prefix_pattern().is_match(normalized) {
            return Err(TemporalError::InvalidPrefix(raw.to_string()));
        }

        Ok(Prefix(normalized.to_string()))
    }

    pub fn key(&self, field: &str) -> String {
        format!("{}_{}", self.0, field)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for Prefix {
    fn default() -> Self {
        Prefix(DEFAULT_PREFIX.to_string())
    }
}

impl fmt::Display for Prefix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ExportFormat {
    /// POSIX shell `export` statements
    #[default]
    Shell,
    /// PowerShell `$env:` assignments
    Powershell,
    /// `.env` file lines
    Dotenv,
    /// A single JSON object
    Json,
}

fn flag(value: bool) -> String {
    let literal = if value { "true" } else { "false" };
    literal.to_string()
}

/// Flatten a context into `(PREFIX_FIELD, value)` pairs in [`FIELDS`] order.
pub fn to_env_vars(ctx: &TemporalContext, prefix: &Prefix) -> Vec<(String, String)> {
    let values = [
        ctx.utc_instant.to_string(),
        ctx.utc_datetime().format("%Y-%m-%dT%H:%M:%SZ").to_string(),
        ctx.timezone.clone(),
        ctx.timezone_abbreviation.clone(),
        ctx.utc_offset(),
        ctx.local_instant.to_rfc3339(),
        ctx.date(),
        ctx.time(),
        ctx.year.to_string(),
        format!("{:02}", ctx.month),
        ctx.month_name.clone(),
        format!("{:02}", ctx.day),
        format!("{:02}", ctx.hour),
        format!("{:02}", ctx.minute),
        format!("{:02}", ctx.second),
        ctx.day_of_week.clone(),
        ctx.day_of_week_num.to_string(),
        ctx.day_of_year.to_string(),
        ctx.week_of_year.to_string(),
        ctx.iso_week_year.to_string(),
        ctx.quarter.to_string(),
        flag(ctx.is_business_hours),
        flag(ctx.is_weekend),
        flag(ctx.is_market_hours),
        ctx.summary.clone(),
    ];

    FIELDS
        .iter()
        .zip(values)
        .map(|(field, value)| (prefix.key(field), value))
        .collect()
}

pub fn render(vars: &[(String, String)], format: ExportFormat) -> Result<String> {
    let rendered = match format {
        ExportFormat::Shell => render_lines(vars, |k, v| {
            format!("export {}='{}'", k, v.replace('\'', r"'\''"))
        }),
        ExportFormat::Powershell => render_lines(vars, |k, v| {
            format!("$env:{} = '{}'", k, v.replace('\'', "''"))
        }),
        ExportFormat::Dotenv => render_lines(vars, |k, v| {
            format!("{}=\"{}\"", k, v.replace('\\', r"\\").replace('"', "\\\""))
        }),
        ExportFormat::Json => {
            let object: serde_json::Map<String, serde_json::Value> = vars
                .iter()
                .map(|(k, v)| (k.clone(), serde_json::Value::String(v.clone())))
                .collect();
            let mut json = serde_json::to_string_pretty(&object)?;
            json.push('\n');
            json
        }
    };
    Ok(rendered)
}

fn render_lines(vars: &[(String, String)], line: impl Fn(&str, &str) -> String) -> String {
    vars.iter().map(|(k, v)| line(k, v) + "\n").collect()
}
