use crate::config::Settings;
use crate::error::Result;
use crate::export::{self, ExportFormat, Prefix};

pub fn run(settings: &Settings, prefix: &Prefix, format: ExportFormat) -> Result<()> {
    let ctx = settings.builder().build(settings.now());
    let vars = export::to_env_vars(&ctx, prefix);
    print!("{}", export::render(&vars, format)?);
    Ok(())
}
