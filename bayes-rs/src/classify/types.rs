//! Classification result types

use serde::Serialize;

use crate::store::HashTable;

/// The verdict label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Label {
    Normal,
    Spam,
}

impl std::fmt::Display for Label {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Normal => f.write_str("NORMAL"),
            Self::Spam => f.write_str("SPAM"),
        }
    }
}

/// Scoring summary for one classified message. The scores are
/// log-domain sums seeded with the corpus log-priors.
#[derive(Debug, Clone, Serialize)]
pub struct Verdict {
    pub label: Label,
    pub normal_score: f64,
    pub spam_score: f64,
    /// `|normal_score - spam_score|`.
    pub difference: f64,
}

impl Verdict {
    /// The status line reported to the user, in mail-header form.
    pub fn status_line(&self) -> String {
        format!(
            "X-Spam-Status: {}, N: {:.2}, S: {:.2}, Diff: {:.2}",
            self.label, self.normal_score, self.spam_score, self.difference
        )
    }
}

/// Per-token diagnostics: how often the token occurred in the
/// unknown message and what it contributed to each running score.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TokenScore {
    pub count: u64,
    pub normal: f64,
    pub spam: f64,
}

/// Full classification output: the verdict plus the working table
/// built during scoring, kept for diagnostics and discarded with it.
pub struct Classification {
    pub verdict: Verdict,
    pub tokens: HashTable<String, TokenScore>,
}
