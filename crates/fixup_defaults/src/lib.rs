// crates/fixup_defaults/src/lib.rs

//! Hard-coded inputs of the admin summaries key fixup, shared by the
//! replacer tests and the `fix_tests` binary.

/// Test file rewritten in place, relative to the project root.
pub const TARGET_FILE: &str = "src/__tests__/integration/adminSummariesAPI.integration.test.ts";

/// Opening text of the `describe` block whose second occurrence starts the region.
pub const REGION_MARKER: &str = "describe('Admin Summaries API";

/// The first `describe('Admin Summaries API` block ends before this line,
/// so any marker found past it belongs to the second block.
pub const REGION_LINE_THRESHOLD: usize = 580;

/// Lines mentioning the raw table keep their camelCase keys.
pub const EXCLUSION_MARKER: &str = "exam_attempts";

/// `(old, new)` key renames, applied in this order.
pub const KEY_RENAMES: &[(&str, &str)] = &[
    ("includeInPass:", "include_in_pass:"),
    ("passThreshold:", "pass_threshold:"),
];

/// Printed once the file has been rewritten.
pub const SUCCESS_MESSAGE: &str = "Fixed all exam_attempts in second describe block";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_renames_are_camel_to_snake() {
        for (old, new) in KEY_RENAMES {
            assert!(old.ends_with(':') && new.ends_with(':'));
            assert!(!new.chars().any(|c| c.is_ascii_uppercase()));
            assert!(!new.contains(old));
        }
    }

    #[test]
    fn test_markers_are_not_empty() {
        assert!(!REGION_MARKER.is_empty());
        assert!(!EXCLUSION_MARKER.is_empty());
        assert!(TARGET_FILE.ends_with(".test.ts"));
    }
}
