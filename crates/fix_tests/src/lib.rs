// crates/fix_tests/src/lib.rs

use anyhow::{Context, Result};
use line_filtered_replacer::{ApplyReport, LineFilteredReplacer, RewriteRisk};

pub mod config;
pub mod file_io;

pub use config::FixupConfig;
pub use file_io::{read_document, write_document_atomic};

/// Reads the configured file, rewrites the keys in its active region, and writes it back.
pub fn run_fixup(config: &FixupConfig) -> Result<ApplyReport> {
    let replacer = LineFilteredReplacer::new(config.replacer.clone())
        .context("Invalid replacer configuration")?;

    for rule in &replacer.config().rules {
        match rule.rewrite_risk() {
            Some(RewriteRisk::ReintroducesTarget) => log::warn!(
                "Replacement '{}' still contains '{}'; running again rewrites it again",
                rule.replacement,
                rule.target
            ),
            Some(RewriteRisk::IntroducesExclusion) => log::warn!(
                "Replacement '{}' contains exclusion '{}'",
                rule.replacement,
                rule.exclusion
            ),
            None => {}
        }
    }

    let content = read_document(&config.path)?;
    log::debug!("Read {} ({} bytes)", config.path.display(), content.len());

    let (new_content, report) = replacer.apply_with_report(&content);
    match report.region_start_line {
        Some(line) => log::info!(
            "Region starts at line {}; {} line(s) changed",
            line,
            report.lines_changed
        ),
        None => log::warn!(
            "No '{}' found in {}; nothing rewritten",
            replacer.config().region_marker,
            config.path.display()
        ),
    }
    for (rule, count) in replacer.config().rules.iter().zip(&report.replacements) {
        log::debug!("{} -> {}: {} line(s)", rule.target, rule.replacement, count);
    }

    write_document_atomic(&config.path, &new_content)?;
    Ok(report)
}
