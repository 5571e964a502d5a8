//! Submit Flow
//!
//! Validates a draft, consults the login gate, hands the value to the
//! injected submitter and reports the result through a notifier.

use async_trait::async_trait;
use thiserror::Error;

use crate::draft::ObjectiveDraft;
use crate::model::Objective;
use crate::validation::ValidationError;

pub const FAILURE_MESSAGE: &str = "エラーが発生しました";

/// Failure reported by a submitter
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitError {
    #[error("submission rejected: {0}")]
    Rejected(String),
}

/// Persists an objective (create or update)
#[async_trait(?Send)]
pub trait ObjectiveSubmitter {
    async fn submit(&self, objective: Objective) -> Result<(), SubmitError>;
}

/// Returns true when the current user must sign in first
pub trait LoginGate {
    fn require_login(&self) -> bool;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub kind: NotificationKind,
    pub message: String,
}

impl Notification {
    pub fn success(message: impl Into<String>) -> Self {
        Self { kind: NotificationKind::Success, message: message.into() }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self { kind: NotificationKind::Error, message: message.into() }
    }
}

pub trait Notifier {
    fn notify(&self, notification: Notification);
}

/// Whether the form creates a new objective or updates an existing one
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormMode {
    #[default]
    Create,
    Edit,
}

impl FormMode {
    pub fn from_is_edit(is_edit: bool) -> Self {
        if is_edit { FormMode::Edit } else { FormMode::Create }
    }

    pub fn success_message(self) -> &'static str {
        match self {
            FormMode::Create => "目標を追加しました",
            FormMode::Edit => "目標を更新しました",
        }
    }

    pub fn button_label(self, loading: bool) -> &'static str {
        match (self, loading) {
            (FormMode::Create, false) => "保存",
            (FormMode::Create, true) => "保存中",
            (FormMode::Edit, false) => "更新",
            (FormMode::Edit, true) => "更新中",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    Invalid(ValidationError),
    LoginRequired,
    Submitted,
    Failed(SubmitError),
}

pub async fn submit_draft<G, S, N>(
    draft: &ObjectiveDraft,
    mode: FormMode,
    gate: &G,
    submitter: &S,
    notifier: &N,
) -> SubmitOutcome
where
    G: LoginGate + ?Sized,
    S: ObjectiveSubmitter + ?Sized,
    N: Notifier + ?Sized,
{
    if let Err(err) = draft.validate() {
        return SubmitOutcome::Invalid(err);
    }
    if gate.require_login() {
        log::info!("submit blocked: sign-in required");
        return SubmitOutcome::LoginRequired;
    }

    match submitter.submit(draft.value()).await {
        Ok(()) => {
            notifier.notify(Notification::success(mode.success_message()));
            SubmitOutcome::Submitted
        }
        Err(err) => {
            log::warn!("submit failed: {}", err);
            notifier.notify(Notification::error(FAILURE_MESSAGE));
            SubmitOutcome::Failed(err)
        }
    }
}
