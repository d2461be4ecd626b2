use regex::Regex;
use std::fmt;
use std::fs;
use std::path::Path;
use std::sync::OnceLock;
use tracing::debug;

use crate::error::Result;
use crate::utils::hash::fingerprint;

const BLOCK_END: &str = "<!-- tempora:end -->";

fn block_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"(?s)<!-- tempora:begin sha256=([a-f0-9]{8}) -->.*?<!-- tempora:end -->\n?")
            .unwrap()
    })
}

/// What [`upsert_block`] did to the file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockOutcome {
    Created,
    Appended,
    Updated,
    Unchanged,
}

impl fmt::Display for BlockOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            BlockOutcome::Created => "Created",
            BlockOutcome::Appended => "Appended to",
            BlockOutcome::Updated => "Updated",
            BlockOutcome::Unchanged => "Already up to date:",
        };
        write!(f, "{}", label)
    }
}

/// Wrap `body` in begin/end markers carrying its fingerprint.
pub fn fenced_block(body: &str) -> String {
    let body = body.trim_end();
    format!(
        "<!-- tempora:begin sha256={} -->\n{}\n{}\n",
        fingerprint(body),
        body,
        BLOCK_END
    )
}

/// Apply a fenced block to existing file content.
///
/// Returns the new content, or `None` when the block is already present.
pub fn apply_block(existing: &str, block: &str) -> (Option<String>, BlockOutcome) {
    let pattern = block_pattern();

    if let Some(caps) = pattern.captures(existing) {
        let found = caps.get(0).expect("group 0 always matches");
        let wanted = pattern.captures(block).map(|c| c[1].to_string());
        if wanted.as_deref() == Some(&caps[1]) {
            return (None, BlockOutcome::Unchanged);
        }

        let mut updated = String::with_capacity(existing.len() + block.len());
        updated.push_str(&existing[..found.start()]);
        updated.push_str(block);
        updated.push_str(&existing[found.end()..]);
        return (Some(updated), BlockOutcome::Updated);
    }

    let mut appended = existing.to_string();
    if !appended.is_empty() {
        if !appended.ends_with('\n') {
            appended.push('\n');
        }
        appended.push('\n');
    }
    appended.push_str(block);
    (Some(appended), BlockOutcome::Appended)
}

/// Idempotently place a fenced block into the file at `path`.
pub fn upsert_block(path: &Path, body: &str) -> Result<BlockOutcome> {
    let block = fenced_block(body);

    if !path.exists() {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, &block)?;
        debug!(path = %path.display(), "created file with block");
        return Ok(BlockOutcome::Created);
    }

    let existing = fs::read_to_string(path)?;
    let (content, outcome) = apply_block(&existing, &block);
    if let Some(content) = content {
        fs::write(path, content)?;
    }
    debug!(path = %path.display(), ?outcome, "applied block");

    Ok(outcome)
}
