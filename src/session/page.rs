use serde::Serialize;

use crate::analysis::{AnalysisReport, ResultsView};
use crate::chat::{self, ChatMessage};

use super::intake::DocumentKind;
use super::state::{SessionContext, SessionId, ViewStage};

pub const APP_TITLE: &str = "⚖️ ClauseWise";
pub const APP_TAGLINE: &str = "Legal Clarity for Everyone";
pub const FOOTER: &str = "ClauseWise - Legal Clarity for Everyone | ⚠️ Demo Only. Not legal advice.";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IntakeView {
    pub headline: &'static str,
    pub prompt: &'static str,
    pub accepted_extensions: Vec<&'static str>,
    pub sample_action: &'static str,
}

impl IntakeView {
    pub fn new() -> Self {
        Self {
            headline: "Understand Your Legal Documents in Seconds",
            prompt: "Upload any contract to get AI-powered risk and clause insights.",
            accepted_extensions: DocumentKind::accepted()
                .into_iter()
                .map(DocumentKind::extension)
                .collect(),
            sample_action: "📄 Analyze Sample NDA",
        }
    }
}

impl Default for IntakeView {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChatPanelView {
    pub prompt: &'static str,
    pub suggestions: Vec<&'static str>,
    pub messages: Vec<ChatMessage>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "stage", rename_all = "snake_case")]
pub enum PageBody {
    Intake {
        intake: IntakeView,
        #[serde(skip_serializing_if = "Option::is_none")]
        spinner: Option<&'static str>,
    },
    Results {
        back_action: &'static str,
        results: Box<ResultsView>,
        chat: ChatPanelView,
    },
}

/// A full render of what one session currently sees.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PageView {
    pub session_id: SessionId,
    pub title: &'static str,
    pub tagline: &'static str,
    #[serde(flatten)]
    pub body: PageBody,
    pub footer: &'static str,
}

impl PageView {
    pub fn render(session: &SessionContext, report: &AnalysisReport) -> Self {
        let body = match session.view.stage() {
            ViewStage::Intake => PageBody::Intake {
                intake: IntakeView::new(),
                spinner: session
                    .analysis_in_flight()
                    .map(|trigger| trigger.spinner_label()),
            },
            ViewStage::Results => PageBody::Results {
                back_action: "← Upload New Document",
                results: Box::new(ResultsView::render(
                    report,
                    session.view.file_name.as_deref(),
                    session.mode,
                )),
                chat: ChatPanelView {
                    prompt: "💬 Ask questions about your contract:",
                    suggestions: chat::suggested_questions().collect(),
                    messages: session.transcript.messages().to_vec(),
                },
            },
        };

        Self {
            session_id: session.id,
            title: APP_TITLE,
            tagline: APP_TAGLINE,
            body,
            footer: FOOTER,
        }
    }

    pub fn stage(&self) -> ViewStage {
        match self.body {
            PageBody::Intake { .. } => ViewStage::Intake,
            PageBody::Results { .. } => ViewStage::Results,
        }
    }

    pub fn results(&self) -> Option<&ResultsView> {
        match &self.body {
            PageBody::Results { results, .. } => Some(&**results),
            PageBody::Intake { .. } => None,
        }
    }
}
