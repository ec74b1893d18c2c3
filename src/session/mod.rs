//! Per-visitor state: which page is showing, the chosen explanation mode and
//! the chat transcript, kept in an in-memory store keyed by session id.

pub mod intake;
pub mod page;
mod state;
mod store;

pub use intake::{AnalysisTrigger, DocumentKind, UploadRejected, UploadedDocument};
pub use page::{ChatPanelView, IntakeView, PageBody, PageView};
pub use state::{SessionContext, SessionId, ViewStage, ViewState};
pub use store::{ReadAloudToast, SessionError, SessionStore};
