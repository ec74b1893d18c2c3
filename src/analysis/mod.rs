//! Mock contract analysis: the report model, the bundled sample NDA, and the
//! view models the results page is rendered from.

pub mod domain;
mod sample;
pub mod views;

pub use domain::{
    AnalysisReport, Clause, ClauseId, EntitySet, ExplanationMode, Explanations, RiskLevel,
    UnknownExplanationMode,
};
pub use sample::{sample_nda, SAMPLE_FILE_NAME};
pub use views::{
    ClauseAnalysisView, ClauseCardView, DashboardView, EntitiesView, EntityGroupView, MetricView,
    ResultsView,
};
