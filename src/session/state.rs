use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

use crate::analysis::ExplanationMode;
use crate::chat::ChatTranscript;

use super::intake::AnalysisTrigger;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SessionId(pub Uuid);

impl SessionId {
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ViewStage {
    Intake,
    Results,
}

/// Which page a session is on and the document it last "analyzed".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ViewState {
    pub show_results: bool,
    pub file_name: Option<String>,
}

impl ViewState {
    pub fn stage(&self) -> ViewStage {
        if self.show_results {
            ViewStage::Results
        } else {
            ViewStage::Intake
        }
    }

    pub(crate) fn show_results_for(&mut self, file_name: String) {
        self.show_results = true;
        self.file_name = Some(file_name);
    }

    /// Back to intake. The remembered file name is kept.
    pub(crate) fn return_to_intake(&mut self) {
        self.show_results = false;
    }
}

/// All mutable state belonging to one visitor.
#[derive(Debug, Clone)]
pub struct SessionContext {
    pub id: SessionId,
    pub created_at: DateTime<Utc>,
    pub view: ViewState,
    pub mode: ExplanationMode,
    pub transcript: ChatTranscript,
    pub(crate) in_flight: Option<AnalysisTrigger>,
}

impl SessionContext {
    pub fn new(id: SessionId) -> Self {
        Self {
            id,
            created_at: Utc::now(),
            view: ViewState::default(),
            mode: ExplanationMode::default(),
            transcript: ChatTranscript::new(),
            in_flight: None,
        }
    }

    pub fn analysis_in_flight(&self) -> Option<&AnalysisTrigger> {
        self.in_flight.as_ref()
    }
}
