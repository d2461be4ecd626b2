use crate::config::Settings;
use crate::context::TemporalContext;
use crate::error::Result;

pub fn run(settings: &Settings, json: bool) -> Result<()> {
    let ctx = settings.builder().build(settings.now());

    if json {
        println!("{}", serde_json::to_string_pretty(&ctx)?);
    } else {
        print!("{}", format_report(&ctx));
    }

    Ok(())
}

fn yes_no(value: bool) -> &'static str {
    if value {
        "yes"
    } else {
        "no"
    }
}

fn format_report(ctx: &TemporalContext) -> String {
    let mut out = String::new();
    out.push_str("Temporal Context\n");
    out.push_str("────────────────\n");
    out.push_str(&format!("Now:     {}\n", ctx.summary));
    out.push_str(&format!(
        "Zone:    {} (UTC{})\n",
        ctx.timezone,
        ctx.utc_offset()
    ));
    out.push_str(&format!(
        "Week:    {} of {} (Q{})\n",
        ctx.week_of_year, ctx.iso_week_year, ctx.quarter
    ));
    out.push_str(&format!(
        "Day:     {} of 7, day {} of the year\n",
        ctx.day_of_week_num, ctx.day_of_year
    ));
    out.push('\n');

    let business = yes_no(ctx.is_business_hours);
    let weekend = yes_no(ctx.is_weekend);
    let market = yes_no(ctx.is_market_hours);
    out.push_str(&format!("Business hours: {}\n", business));
    out.push_str(&format!("Weekend:        {}\n", weekend));
    out.push_str(&format!("Market hours:   {}\n", market));
    out
}
