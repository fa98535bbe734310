// crates/line_filtered_replacer/src/region.rs

/// Decides which line opens the active region.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RegionTrigger {
    /// First line past `threshold` (1-based) that contains the marker.
    AfterLine { threshold: usize },
    /// The `n`-th line (1-based count) that contains the marker.
    NthOccurrence { n: usize },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RegionState {
    BeforeRegion,
    InRegion,
}

/// One-way region cursor: once `InRegion`, it stays there.
#[derive(Debug)]
pub struct RegionTracker<'a> {
    trigger: RegionTrigger,
    marker: &'a str,
    state: RegionState,
    marker_hits: usize,
}

impl<'a> RegionTracker<'a> {
    pub fn new(trigger: RegionTrigger, marker: &'a str) -> Self {
        Self {
            trigger,
            marker,
            state: RegionState::BeforeRegion,
            marker_hits: 0,
        }
    }

    pub fn state(&self) -> RegionState {
        self.state
    }

    /// Feeds the line at 1-based position `line_num` and returns the state that applies to it.
    pub fn observe(&mut self, line_num: usize, line: &str) -> RegionState {
        if self.state == RegionState::InRegion {
            return self.state;
        }
        let fires = match self.trigger {
            RegionTrigger::AfterLine { threshold } => {
                line_num > threshold && line.contains(self.marker)
            }
            RegionTrigger::NthOccurrence { n } => {
                if line.contains(self.marker) {
                    self.marker_hits += 1;
                    self.marker_hits == n
                } else {
                    false
                }
            }
        };
        if fires {
            self.state = RegionState::InRegion;
        }
        self.state
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MARKER: &str = "describe('Admin Summaries API";

    #[test]
    fn test_after_line_ignores_marker_at_or_before_threshold() {
        let mut tracker = RegionTracker::new(RegionTrigger::AfterLine { threshold: 2 }, MARKER);
        assert_eq!(tracker.observe(1, "describe('Admin Summaries API', () => {"), RegionState::BeforeRegion);
        assert_eq!(tracker.observe(2, "describe('Admin Summaries API', () => {"), RegionState::BeforeRegion);
        assert_eq!(tracker.observe(3, "it('works')"), RegionState::BeforeRegion);
        assert_eq!(tracker.observe(4, "describe('Admin Summaries API v2', () => {"), RegionState::InRegion);
    }

    #[test]
    fn test_state_never_reverts() {
        let mut tracker = RegionTracker::new(RegionTrigger::AfterLine { threshold: 0 }, MARKER);
        tracker.observe(1, MARKER);
        for (i, line) in ["", "});", "describe('Other', () => {"].iter().enumerate() {
            assert_eq!(tracker.observe(i + 2, line), RegionState::InRegion);
        }
        assert_eq!(tracker.state(), RegionState::InRegion);
    }

    #[test]
    fn test_nth_occurrence_counts_marker_lines() {
        let mut tracker = RegionTracker::new(RegionTrigger::NthOccurrence { n: 2 }, MARKER);
        assert_eq!(tracker.observe(1, MARKER), RegionState::BeforeRegion);
        assert_eq!(tracker.observe(2, "includeInPass: true"), RegionState::BeforeRegion);
        assert_eq!(tracker.observe(3, MARKER), RegionState::InRegion);
        assert_eq!(tracker.observe(4, MARKER), RegionState::InRegion);
    }

    #[test]
    fn test_nth_occurrence_zero_never_fires() {
        let mut tracker = RegionTracker::new(RegionTrigger::NthOccurrence { n: 0 }, MARKER);
        assert_eq!(tracker.observe(1, MARKER), RegionState::BeforeRegion);
        assert_eq!(tracker.observe(2, MARKER), RegionState::BeforeRegion);
    }
}
