use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use serde::Serialize;
use tracing::{debug, info, warn};

use crate::analysis::{sample_nda, AnalysisReport, ClauseId, ExplanationMode};
use crate::chat::ChatMessage;
use crate::config::AnalysisConfig;

use super::intake::{AnalysisTrigger, UploadRejected, UploadedDocument};
use super::page::PageView;
use super::state::{SessionContext, SessionId};

/// Error raised by session operations.
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("session {0} not found")]
    NotFound(SessionId),
    #[error("clause {0} not found")]
    UnknownClause(ClauseId),
    #[error(transparent)]
    Rejected(#[from] UploadRejected),
    #[error("analysis task did not finish: {0}")]
    AnalysisInterrupted(String),
}

/// Transient notification produced by the read-aloud action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReadAloudToast {
    pub clause_id: ClauseId,
    pub mode: ExplanationMode,
    pub message: String,
}

/// In-memory home for every live session plus the shared report.
#[derive(Clone)]
pub struct SessionStore {
    sessions: Arc<Mutex<HashMap<SessionId, SessionContext>>>,
    report: &'static AnalysisReport,
    analysis: AnalysisConfig,
}

impl SessionStore {
    pub fn new(analysis: AnalysisConfig) -> Self {
        Self::with_report(sample_nda(), analysis)
    }

    pub fn with_report(report: &'static AnalysisReport, analysis: AnalysisConfig) -> Self {
        Self {
            sessions: Arc::new(Mutex::new(HashMap::new())),
            report,
            analysis,
        }
    }

    pub fn report(&self) -> &'static AnalysisReport {
        self.report
    }

    pub fn create(&self) -> SessionContext {
        let session = SessionContext::new(SessionId::generate());
        let mut guard = self.sessions.lock().expect("session mutex poisoned");
        guard.insert(session.id, session.clone());
        info!(session = %session.id, "session started");
        session
    }

    pub fn get(&self, id: SessionId) -> Result<SessionContext, SessionError> {
        let guard = self.sessions.lock().expect("session mutex poisoned");
        guard.get(&id).cloned().ok_or(SessionError::NotFound(id))
    }

    pub fn end(&self, id: SessionId) -> Result<(), SessionError> {
        let mut guard = self.sessions.lock().expect("session mutex poisoned");
        guard.remove(&id).ok_or(SessionError::NotFound(id))?;
        info!(session = %id, "session ended");
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.sessions.lock().expect("session mutex poisoned").len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn page(&self, id: SessionId) -> Result<PageView, SessionError> {
        let session = self.get(id)?;
        Ok(PageView::render(&session, self.report))
    }

    /// Simulates analyzing an uploaded file. The name must pass the extension
    /// filter; the contents are never looked at.
    pub async fn upload(
        &self,
        id: SessionId,
        file_name: impl Into<String>,
    ) -> Result<SessionContext, SessionError> {
        let document = UploadedDocument::accept(file_name)?;
        self.analyze(id, AnalysisTrigger::upload(document)).await
    }

    pub async fn analyze_sample(&self, id: SessionId) -> Result<SessionContext, SessionError> {
        self.analyze(id, AnalysisTrigger::Sample).await
    }

    /// Waits out the simulated delay, then switches the session to results.
    ///
    /// The wait runs on its own task so that dropping the caller does not
    /// cancel the transition.
    pub async fn analyze(
        &self,
        id: SessionId,
        trigger: AnalysisTrigger,
    ) -> Result<SessionContext, SessionError> {
        self.with_session(id, |session| {
            session.in_flight = Some(trigger.clone());
        })?;
        info!(session = %id, file = trigger.file_name(), "{}", trigger.spinner_label());

        let store = self.clone();
        let delay = self.analysis.simulated_delay;
        let task = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            store.with_session(id, |session| {
                session.in_flight = None;
                session.view.show_results_for(trigger.file_name().to_string());
                session.clone()
            })
        });

        let session = task
            .await
            .map_err(|err| SessionError::AnalysisInterrupted(err.to_string()))?
            .inspect_err(|err| warn!(session = %id, %err, "session vanished during analysis"))?;

        info!(
            session = %id,
            file = session.view.file_name.as_deref().unwrap_or_default(),
            "analysis results ready"
        );
        Ok(session)
    }

    /// "Upload new document": back to intake. The transcript and remembered
    /// file name are left untouched.
    pub fn go_back(&self, id: SessionId) -> Result<SessionContext, SessionError> {
        let session = self.with_session(id, |session| {
            session.view.return_to_intake();
            session.clone()
        })?;
        debug!(session = %id, "returned to intake");
        Ok(session)
    }

    pub fn select_mode(
        &self,
        id: SessionId,
        mode: ExplanationMode,
    ) -> Result<SessionContext, SessionError> {
        let session = self.with_session(id, |session| {
            session.mode = mode;
            session.clone()
        })?;
        debug!(session = %id, %mode, "explanation mode selected");
        Ok(session)
    }

    /// Records a chat question and its canned answer, returning the pair.
    /// Empty questions are ignored and yield an empty list.
    pub fn ask(&self, id: SessionId, question: &str) -> Result<Vec<ChatMessage>, SessionError> {
        let appended = self.with_session(id, |session| {
            session
                .transcript
                .submit(question)
                .map(<[ChatMessage]>::to_vec)
                .unwrap_or_default()
        })?;
        if !appended.is_empty() {
            info!(session = %id, question, "chat question answered");
        }
        Ok(appended)
    }

    pub fn transcript(&self, id: SessionId) -> Result<Vec<ChatMessage>, SessionError> {
        Ok(self.get(id)?.transcript.messages().to_vec())
    }

    pub fn read_aloud(
        &self,
        id: SessionId,
        clause_id: ClauseId,
    ) -> Result<ReadAloudToast, SessionError> {
        let mode = self.get(id)?.mode;
        let clause = self
            .report
            .clause(clause_id)
            .ok_or(SessionError::UnknownClause(clause_id))?;

        Ok(ReadAloudToast {
            clause_id,
            mode,
            message: format!("Reading aloud: {}", clause.explanation(mode)),
        })
    }

    fn with_session<T>(
        &self,
        id: SessionId,
        apply: impl FnOnce(&mut SessionContext) -> T,
    ) -> Result<T, SessionError> {
        let mut guard = self.sessions.lock().expect("session mutex poisoned");
        let session = guard.get_mut(&id).ok_or(SessionError::NotFound(id))?;
        Ok(apply(session))
    }
}
