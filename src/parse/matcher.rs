//! Find-all-matches capability used by the composite value grammar.
use regex::Regex;

/// Capture groups of one match; index 0 is the whole match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchRecord {
    groups: Vec<Option<String>>,
}

impl MatchRecord {
    pub fn new(groups: Vec<Option<String>>) -> Self {
        MatchRecord { groups }
    }

    /// Text of capture group `idx`, `None` if it did not participate.
    pub fn group(&self, idx: usize) -> Option<&str> {
        self.groups.get(idx).and_then(|g| g.as_deref())
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}

/// Find every non-overlapping match of `pattern` in `subject`, left to right.
pub trait MatchAll {
    fn match_all(&self, pattern: &Regex, subject: &str) -> Vec<MatchRecord>;
}

impl<T: MatchAll + ?Sized> MatchAll for &T {
    fn match_all(&self, pattern: &Regex, subject: &str) -> Vec<MatchRecord> {
        (**self).match_all(pattern, subject)
    }
}

/// Default matcher backed by `Regex::captures_iter`.
#[derive(Debug, Clone, Copy, Default)]
pub struct RegexMatcher;

impl MatchAll for RegexMatcher {
    fn match_all(&self, pattern: &Regex, subject: &str) -> Vec<MatchRecord> {
        pattern
            .captures_iter(subject)
            .map(|caps| {
                MatchRecord::new(
                    caps.iter()
                        .map(|m| m.map(|m| m.as_str().to_string()))
                        .collect(),
                )
            })
            .collect()
    }
}
