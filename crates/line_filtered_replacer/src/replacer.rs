// crates/line_filtered_replacer/src/replacer.rs

use anyhow::{bail, Result};

use crate::region::{RegionState, RegionTracker, RegionTrigger};
use crate::rule::Rule;

/// Everything the replacer needs to transform a document.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReplacerConfig {
    pub trigger: RegionTrigger,
    pub region_marker: String,
    pub rules: Vec<Rule>,
}

/// What a single pass did to the document.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ApplyReport {
    /// 1-based line that opened the region, if any line did.
    pub region_start_line: Option<usize>,
    /// Lines whose final text differs from the input.
    pub lines_changed: usize,
    /// Lines rewritten by each rule, in rule order.
    pub replacements: Vec<usize>,
}

/// Applies ordered literal rules to the lines following a region marker.
#[derive(Clone, Debug)]
pub struct LineFilteredReplacer {
    config: ReplacerConfig,
}

impl LineFilteredReplacer {
    /// Builds a replacer after checking the configuration.
    pub fn new(config: ReplacerConfig) -> Result<Self> {
        if config.region_marker.is_empty() {
            bail!("Region marker must not be empty");
        }
        if let RegionTrigger::NthOccurrence { n: 0 } = config.trigger {
            bail!("NthOccurrence trigger counts from 1");
        }
        for rule in &config.rules {
            rule.validate()?;
        }
        Ok(Self { config })
    }

    pub fn config(&self) -> &ReplacerConfig {
        &self.config
    }

    pub fn apply(&self, document_text: &str) -> String {
        self.apply_with_report(document_text).0
    }

    pub fn apply_with_report(&self, document_text: &str) -> (String, ApplyReport) {
        transform(
            document_text,
            self.config.trigger,
            &self.config.region_marker,
            &self.config.rules,
        )
    }
}

pub(crate) fn transform(
    document_text: &str,
    trigger: RegionTrigger,
    region_marker: &str,
    rules: &[Rule],
) -> (String, ApplyReport) {
    let mut tracker = RegionTracker::new(trigger, region_marker);
    let mut report = ApplyReport {
        replacements: vec![0; rules.len()],
        ..ApplyReport::default()
    };
    let mut new_lines = Vec::new();

    for (idx, line) in split_lines(document_text).enumerate() {
        let line_num = idx + 1;
        let was_in_region = tracker.state() == RegionState::InRegion;
        if tracker.observe(line_num, line) == RegionState::BeforeRegion {
            new_lines.push(line.to_string());
            continue;
        }
        if !was_in_region {
            log::debug!("Region starts at line {}", line_num);
            report.region_start_line = Some(line_num);
        }

        let mut current = line.to_string();
        for (rule_idx, rule) in rules.iter().enumerate() {
            if let Some(rewritten) = rule.rewrite(&current) {
                if rewritten != current {
                    report.replacements[rule_idx] += 1;
                    log::trace!("Line {}: '{}' -> '{}'", line_num, rule.target, rule.replacement);
                    current = rewritten;
                }
            }
        }
        if current != line {
            report.lines_changed += 1;
        }
        new_lines.push(current);
    }

    (new_lines.join("\n"), report)
}

/// Splits on `"\r\n"`, a lone `'\r'`, or `'\n'`. Unlike `str::lines`, a
/// trailing terminator yields a final empty line, so rejoining with `'\n'`
/// keeps it.
fn split_lines<'a>(text: &'a str) -> impl Iterator<Item = &'a str> + 'a {
    let mut rest = Some(text);
    std::iter::from_fn(move || {
        let current = rest?;
        match current.find(&['\r', '\n'][..]) {
            Some(pos) => {
                let skip = if current[pos..].starts_with("\r\n") { 2 } else { 1 };
                rest = Some(&current[pos + skip..]);
                Some(&current[..pos])
            }
            None => {
                rest = None;
                Some(current)
            }
        }
    })
}
