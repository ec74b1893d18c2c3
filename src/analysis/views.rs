use serde::Serialize;

use super::domain::{AnalysisReport, Clause, ClauseId, ExplanationMode, RiskLevel};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MetricView {
    pub label: &'static str,
    pub value: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delta: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardView {
    pub risk_score: MetricView,
    pub complexity: MetricView,
    pub clauses_analyzed: MetricView,
}

impl DashboardView {
    pub fn from_report(report: &AnalysisReport) -> Self {
        Self {
            risk_score: MetricView {
                label: "Overall Risk Score",
                value: format!("{:.1}", report.risk_score),
                delta: Some(report.risk_level().label().to_string()),
            },
            complexity: MetricView {
                label: "Complexity Reduced",
                value: format!("{}%", report.complexity_reduction_pct),
                delta: Some(format!(
                    "{} → {}",
                    report.complexity_before, report.complexity_after
                )),
            },
            clauses_analyzed: MetricView {
                label: "Clauses Analyzed",
                value: report.clause_count().to_string(),
                delta: None,
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClauseCardView {
    pub id: ClauseId,
    pub title: &'static str,
    pub risk: RiskLevel,
    pub risk_badge: &'static str,
    pub risk_reason: &'static str,
    pub original: &'static str,
    pub explanation_heading: String,
    pub explanation: &'static str,
}

impl ClauseCardView {
    pub fn render(clause: &Clause, mode: ExplanationMode) -> Self {
        Self {
            id: clause.id,
            title: clause.title,
            risk: clause.risk,
            risk_badge: clause.risk.badge(),
            risk_reason: clause.risk_reason,
            original: clause.original,
            explanation_heading: format!("{} Explanation", mode.label()),
            explanation: clause.explanation(mode),
        }
    }
}

/// "Clause Analysis" tab.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClauseAnalysisView {
    pub mode: ExplanationMode,
    pub mode_label: &'static str,
    pub available_modes: Vec<&'static str>,
    pub red_flags: Vec<&'static str>,
    pub green_flags: Vec<&'static str>,
    pub clauses: Vec<ClauseCardView>,
}

impl ClauseAnalysisView {
    pub fn render(report: &AnalysisReport, mode: ExplanationMode) -> Self {
        Self {
            mode,
            mode_label: mode.label(),
            available_modes: ExplanationMode::ordered()
                .into_iter()
                .map(ExplanationMode::label)
                .collect(),
            red_flags: report.red_flags.clone(),
            green_flags: report.green_flags.clone(),
            clauses: report
                .clauses
                .iter()
                .map(|clause| ClauseCardView::render(clause, mode))
                .collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EntityGroupView {
    pub heading: &'static str,
    pub summary: String,
}

/// "Key Entities" tab.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EntitiesView {
    pub groups: Vec<EntityGroupView>,
}

impl EntitiesView {
    pub fn from_report(report: &AnalysisReport) -> Self {
        let entities = &report.entities;
        let groups = [
            ("Parties Involved", &entities.parties),
            ("Important Dates", &entities.dates),
            ("Monetary Values", &entities.monetary),
            ("Key Legal Terms", &entities.terms),
        ]
        .into_iter()
        .map(|(heading, values)| EntityGroupView {
            heading,
            summary: values.join(", "),
        })
        .collect();

        Self { groups }
    }
}

/// Everything shown once a document has been "analyzed".
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResultsView {
    pub doc_type: &'static str,
    pub document_caption: String,
    pub dashboard: DashboardView,
    pub clause_analysis: ClauseAnalysisView,
    pub entities: EntitiesView,
}

impl ResultsView {
    pub fn render(report: &AnalysisReport, file_name: Option<&str>, mode: ExplanationMode) -> Self {
        Self {
            doc_type: report.doc_type,
            document_caption: format!("Document: {}", file_name.unwrap_or("(none)")),
            dashboard: DashboardView::from_report(report),
            clause_analysis: ClauseAnalysisView::render(report, mode),
            entities: EntitiesView::from_report(report),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::sample_nda;

    #[test]
    fn dashboard_matches_published_figures() {
        let dashboard = DashboardView::from_report(sample_nda());
        assert_eq!(dashboard.risk_score.value, "7.2");
        assert_eq!(dashboard.risk_score.delta.as_deref(), Some("High"));
        assert_eq!(dashboard.complexity.value, "73%");
        assert_eq!(dashboard.complexity.delta.as_deref(), Some("22 → 8"));
        assert_eq!(dashboard.clauses_analyzed.value, "4");
    }

    #[test]
    fn mode_switch_only_changes_explanations() {
        let report = sample_nda();
        let eli5 = ClauseAnalysisView::render(report, ExplanationMode::Eli5);
        let professional = ClauseAnalysisView::render(report, ExplanationMode::Professional);

        assert_eq!(eli5.red_flags, professional.red_flags);
        for (left, right) in eli5.clauses.iter().zip(&professional.clauses) {
            assert_eq!(left.id, right.id);
            assert_eq!(left.risk_badge, right.risk_badge);
            assert_eq!(left.original, right.original);
            assert_ne!(left.explanation, right.explanation);
        }
        assert_eq!(professional.clauses[2].explanation_heading, "Professional Explanation");
    }

    #[test]
    fn entity_groups_join_values() {
        let entities = EntitiesView::from_report(sample_nda());
        assert_eq!(entities.groups.len(), 4);
        assert_eq!(entities.groups[0].heading, "Parties Involved");
        assert_eq!(entities.groups[0].summary, "Acme Corporation, John Smith");
        assert_eq!(entities.groups[2].summary, "$50,000, $10,000 per violation");
    }
}
