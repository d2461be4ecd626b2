use crate::export::Prefix;

/// `{P}` is replaced with the variable prefix.
pub const DIRECTIVE_TEMPLATE: &str = r#"## 🕒 Temporal Context

Your sessions run with the current date and time exported as environment variables.
Refresh them at any time with:

    eval "$(tempora env --prefix {P})"

### Variables
| Variable | Example | Meaning |
|----------|---------|---------|
| `{P}_SUMMARY` | Thursday, November 20, 2025 at 04:06:25 AEDT | Human-readable local time |
| `{P}_DATE` / `{P}_TIME` | 2025-11-20 / 04:06:25 | Local date and time |
| `{P}_TIMEZONE` | Australia/Sydney | IANA timezone in effect |
| `{P}_UTC_TIMESTAMP` | 2025-11-19T17:06:25Z | Same instant in UTC |
| `{P}_DAY_OF_WEEK` / `{P}_DAY_OF_WEEK_NUM` | Thursday / 4 | Monday=1 ... Sunday=7 |
| `{P}_WEEK_OF_YEAR` | 47 | ISO-8601 week number |
| `{P}_QUARTER` | 4 | Calendar quarter |
| `{P}_IS_BUSINESS_HOURS` | false | Local hour between 09:00 and 17:00 |
| `{P}_IS_WEEKEND` | false | Saturday or Sunday |
| `{P}_IS_MARKET_HOURS` | false | US Eastern zone, 09:30 to 16:00 |

### Rules
- ALWAYS use these values instead of guessing today's date from training data
- `{P}_IS_BUSINESS_HOURS` and `{P}_IS_MARKET_HOURS` only look at the clock; check `{P}_IS_WEEKEND` too
- Market hours ignore exchange holidays
"#;

pub fn render_directive(prefix: &Prefix) -> String {
    DIRECTIVE_TEMPLATE.replace("{P}", prefix.as_str())
}
