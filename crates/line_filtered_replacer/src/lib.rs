// crates/line_filtered_replacer/src/lib.rs

//! Line-oriented literal substitution restricted to the part of a document
//! that follows a region marker.
//!
//! ```
//! use line_filtered_replacer::{apply, Rule};
//!
//! let rules = [Rule::new("includeInPass:", "exam_attempts", "include_in_pass:")];
//! let out = apply("includeInPass: 1\n// start\nincludeInPass: 2", 0, "// start", &rules);
//! assert_eq!(out, "includeInPass: 1\n// start\ninclude_in_pass: 2");
//! ```

pub mod region;
pub mod replacer;
pub mod rule;

pub use region::{RegionState, RegionTracker, RegionTrigger};
pub use replacer::{ApplyReport, LineFilteredReplacer, ReplacerConfig};
pub use rule::{RewriteRisk, Rule};

/// Rewrites `document_text` line by line.
///
/// The region opens on the first line whose 1-based position exceeds
/// `line_threshold` and which contains `region_marker`. From that line on,
/// each rule in `rules` is applied in order. Lines before the region keep
/// their text. `"\r\n"`, `'\r'` and `'\n'` all end a line, and every line
/// is rejoined with `'\n'`.
pub fn apply(document_text: &str, line_threshold: usize, region_marker: &str, rules: &[Rule]) -> String {
    replacer::transform(
        document_text,
        RegionTrigger::AfterLine { threshold: line_threshold },
        region_marker,
        rules,
    )
    .0
}
