// crates/fix_tests/src/config.rs

use std::path::PathBuf;

use fixup_defaults::{EXCLUSION_MARKER, KEY_RENAMES, REGION_LINE_THRESHOLD, REGION_MARKER, TARGET_FILE};
use line_filtered_replacer::{RegionTrigger, ReplacerConfig, Rule};

/// Where to rewrite and how. `Default` yields the admin summaries fixup.
#[derive(Clone, Debug)]
pub struct FixupConfig {
    /// File to rewrite, resolved against the current directory when relative.
    pub path: PathBuf,
    pub replacer: ReplacerConfig,
}

impl Default for FixupConfig {
    fn default() -> Self {
        let rules = KEY_RENAMES
            .iter()
            .map(|(old, new)| Rule::new(*old, EXCLUSION_MARKER, *new))
            .collect();
        Self {
            path: PathBuf::from(TARGET_FILE),
            replacer: ReplacerConfig {
                trigger: RegionTrigger::AfterLine {
                    threshold: REGION_LINE_THRESHOLD,
                },
                region_marker: REGION_MARKER.to_string(),
                rules,
            },
        }
    }
}
