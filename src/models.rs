//! Frontend Models
//!
//! Data structures matching the host's objective and session payloads.

pub use objective_core::{ItemCategory, Objective, ObjectiveItem, SavedObjective, Session};

use objective_core::NotificationKind;

/// A transient notification shown by the toaster
#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub kind: NotificationKind,
    pub message: String,
}
