use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Identifier of a clause within a report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ClauseId(pub u32);

impl fmt::Display for ClauseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskLevel {
    High,
    Medium,
    Low,
}

impl RiskLevel {
    pub const fn label(self) -> &'static str {
        match self {
            Self::High => "High",
            Self::Medium => "Medium",
            Self::Low => "Low",
        }
    }

    /// Badge shown next to a clause title.
    pub const fn badge(self) -> &'static str {
        match self {
            Self::High => "🔴 High",
            Self::Medium => "🟡 Medium",
            Self::Low => "🟢 Low",
        }
    }
}

/// Audience level used when rendering clause explanations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExplanationMode {
    #[default]
    Eli5,
    Simplified,
    Professional,
}

impl ExplanationMode {
    /// Display order of the selector; the first entry is the default.
    pub const fn ordered() -> [Self; 3] {
        [Self::Eli5, Self::Simplified, Self::Professional]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Eli5 => "ELI5",
            Self::Simplified => "Simplified",
            Self::Professional => "Professional",
        }
    }
}

impl fmt::Display for ExplanationMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown explanation mode '{0}' (expected eli5, simplified or professional)")]
pub struct UnknownExplanationMode(pub String);

impl FromStr for ExplanationMode {
    type Err = UnknownExplanationMode;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "eli5" => Ok(Self::Eli5),
            "simplified" => Ok(Self::Simplified),
            "professional" => Ok(Self::Professional),
            _ => Err(UnknownExplanationMode(value.to_string())),
        }
    }
}

/// The three pre-written renderings of a clause.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Explanations {
    pub eli5: &'static str,
    pub simplified: &'static str,
    pub professional: &'static str,
}

impl Explanations {
    pub const fn for_mode(&self, mode: ExplanationMode) -> &'static str {
        match mode {
            ExplanationMode::Eli5 => self.eli5,
            ExplanationMode::Simplified => self.simplified,
            ExplanationMode::Professional => self.professional,
        }
    }
}

/// One contractual provision of the analyzed document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Clause {
    pub id: ClauseId,
    pub title: &'static str,
    pub original: &'static str,
    pub explanations: Explanations,
    pub risk: RiskLevel,
    pub risk_reason: &'static str,
}

impl Clause {
    pub const fn explanation(&self, mode: ExplanationMode) -> &'static str {
        self.explanations.for_mode(mode)
    }
}

/// Named entities pulled from the document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EntitySet {
    pub parties: Vec<&'static str>,
    pub dates: Vec<&'static str>,
    pub monetary: Vec<&'static str>,
    pub terms: Vec<&'static str>,
}

/// Full analysis of a single document.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisReport {
    pub doc_type: &'static str,
    pub risk_score: f32,
    pub complexity_before: u32,
    pub complexity_after: u32,
    /// Published reduction figure. Kept as reported rather than recomputed
    /// from the before/after scores.
    pub complexity_reduction_pct: u8,
    pub entities: EntitySet,
    pub clauses: Vec<Clause>,
    pub red_flags: Vec<&'static str>,
    pub green_flags: Vec<&'static str>,
}

impl AnalysisReport {
    pub fn clause(&self, id: ClauseId) -> Option<&Clause> {
        self.clauses.iter().find(|clause| clause.id == id)
    }

    pub fn clause_count(&self) -> usize {
        self.clauses.len()
    }

    /// Overall risk bucket shown under the score.
    pub fn risk_level(&self) -> RiskLevel {
        if self.risk_score >= 7.0 {
            RiskLevel::High
        } else if self.risk_score >= 4.0 {
            RiskLevel::Medium
        } else {
            RiskLevel::Low
        }
    }
}
