use std::path::PathBuf;

use crate::error::Result;
use crate::export::Prefix;
use crate::templates::render_directive;
use crate::utils::fs::{fenced_block, upsert_block, BlockOutcome};

#[derive(Debug, Clone)]
pub struct DirectiveOptions {
    pub file: PathBuf,
    pub prefix: Prefix,
    pub dry_run: bool,
}

pub fn run(options: &DirectiveOptions) -> Result<()> {
    let body = render_directive(&options.prefix);

    if options.dry_run {
        print!("{}", fenced_block(&body));
        return Ok(());
    }

    let outcome = apply(options, &body)?;
    println!("{} {}", outcome, options.file.display());
    Ok(())
}

fn apply(options: &DirectiveOptions, body: &str) -> Result<BlockOutcome> {
    upsert_block(&options.file, body)
}
