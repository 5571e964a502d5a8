//! Objective Core
//!
//! Form state for objectives and their categorized sub-items.
//! This crate has NO web dependencies so it can be tested natively.

mod model;
mod buckets;
mod validation;
mod draft;
mod submit;

pub use model::{ItemCategory, ItemInfo, Objective, ObjectiveItem, SavedObjective, Session};
pub use buckets::CategoryBuckets;
pub use validation::{validate_title, ValidationError, TITLE_MAX_LEN, TITLE_MIN_LEN};
pub use draft::ObjectiveDraft;
pub use submit::{
    submit_draft, FormMode, LoginGate, Notification, NotificationKind, Notifier,
    ObjectiveSubmitter, SubmitError, SubmitOutcome, FAILURE_MESSAGE,
};
