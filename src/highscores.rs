//! Best-score tracking
//!
//! Kept in memory only: the best score lives as long as the process.

use serde::{Deserialize, Serialize};

use crate::format_high_score;

/// Best score seen this process
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HighScore {
    best: u64,
    /// Number of finished runs
    runs: u32,
}

impl HighScore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the score of a finished run.
    /// Returns true if it set a new best.
    pub fn record(&mut self, score: u64) -> bool {
        self.runs += 1;
        if score > self.best {
            self.best = score;
            true
        } else {
            false
        }
    }

    pub fn best(&self) -> u64 {
        self.best
    }

    pub fn runs(&self) -> u32 {
        self.runs
    }

    /// HUD text, `None` until the first run ends
    pub fn display(&self) -> Option<String> {
        (self.runs > 0).then(|| format_high_score(self.best))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_keeps_max() {
        let mut hs = HighScore::new();
        assert!(hs.record(120));
        assert!(!hs.record(80));
        assert_eq!(hs.best(), 120);
        assert_eq!(hs.runs(), 2);
    }

    #[test]
    fn test_zero_score_is_not_a_new_best() {
        let mut hs = HighScore::new();
        assert!(!hs.record(0));
        assert_eq!(hs.best(), 0);
    }

    #[test]
    fn test_display_hidden_until_first_run() {
        let mut hs = HighScore::new();
        assert_eq!(hs.display(), None);
        hs.record(7);
        assert_eq!(hs.display().as_deref(), Some("HI 00007"));
    }
}
