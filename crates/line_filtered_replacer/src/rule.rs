// crates/line_filtered_replacer/src/rule.rs

use anyhow::{bail, Result};

/// A literal substitution applied to lines inside the active region.
///
/// The rule fires on a line that contains `target` and does not contain
/// `exclusion`; every occurrence of `target` on that line is then replaced.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Rule {
    pub target: String,
    pub exclusion: String,
    pub replacement: String,
}

/// Ways a rule's output can trip the same rule (or its exclusion) on a later run.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RewriteRisk {
    /// The replacement contains the target, so a second run rewrites again.
    ReintroducesTarget,
    /// The replacement contains the exclusion, so the rewritten line would be skipped next time.
    IntroducesExclusion,
}

impl Rule {
    pub fn new(
        target: impl Into<String>,
        exclusion: impl Into<String>,
        replacement: impl Into<String>,
    ) -> Self {
        Self {
            target: target.into(),
            exclusion: exclusion.into(),
            replacement: replacement.into(),
        }
    }

    /// Returns true if this rule would rewrite `line`.
    pub fn matches(&self, line: &str) -> bool {
        line.contains(&self.target) && !line.contains(&self.exclusion)
    }

    /// Applies the rule to a single line. Returns `None` when the rule does not fire.
    pub fn rewrite(&self, line: &str) -> Option<String> {
        if self.matches(line) {
            Some(line.replace(&self.target, &self.replacement))
        } else {
            None
        }
    }

    /// Reports whether re-running this rule over its own output is unsafe.
    /// The rule still applies as written; callers decide what to do with the answer.
    pub fn rewrite_risk(&self) -> Option<RewriteRisk> {
        if self.replacement.contains(&self.target) {
            Some(RewriteRisk::ReintroducesTarget)
        } else if self.replacement.contains(&self.exclusion) {
            Some(RewriteRisk::IntroducesExclusion)
        } else {
            None
        }
    }

    pub(crate) fn validate(&self) -> Result<()> {
        if self.target.is_empty() {
            bail!("Rule target must not be empty");
        }
        if self.exclusion.is_empty() {
            bail!("Rule for '{}' has an empty exclusion", self.target);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn include_rule() -> Rule {
        Rule::new("includeInPass:", "exam_attempts", "include_in_pass:")
    }

    #[test]
    fn test_rewrite_replaces_every_occurrence() {
        let rule = include_rule();
        let line = "{ includeInPass: true, nested: { includeInPass: false } }";
        assert_eq!(
            rule.rewrite(line).as_deref(),
            Some("{ include_in_pass: true, nested: { include_in_pass: false } }")
        );
    }

    #[test]
    fn test_rewrite_skips_excluded_line() {
        let rule = include_rule();
        assert_eq!(rule.rewrite("includeInPass: exam_attempts.include"), None);
    }

    #[test]
    fn test_rewrite_skips_line_without_target() {
        let rule = include_rule();
        assert!(!rule.matches("passThreshold: 70"));
        assert_eq!(rule.rewrite("passThreshold: 70"), None);
    }

    #[test]
    fn test_rewrite_is_not_word_boundary_aware() {
        let rule = include_rule();
        assert_eq!(
            rule.rewrite("xincludeInPass:y").as_deref(),
            Some("xinclude_in_pass:y")
        );
    }

    #[test]
    fn test_rewrite_risk() {
        assert_eq!(include_rule().rewrite_risk(), None);

        let grows = Rule::new("id", "skip", "uuid");
        assert_eq!(grows.rewrite_risk(), Some(RewriteRisk::ReintroducesTarget));

        let hides = Rule::new("count:", "exam_attempts", "exam_attempts_total:");
        assert_eq!(hides.rewrite_risk(), Some(RewriteRisk::IntroducesExclusion));
    }

    #[test]
    fn test_validate_rejects_empty_fields() {
        assert!(Rule::new("", "x", "y").validate().is_err());
        assert!(Rule::new("a", "", "y").validate().is_err());
        assert!(Rule::new("a", "x", "").validate().is_ok());
    }
}
