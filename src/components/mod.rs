//! UI Components
//!
//! Reusable Leptos components.

mod layout;
mod header;
mod auth_button;
mod objective_form;
mod objective_list;
mod toaster;

pub use layout::Layout;
pub use header::Header;
pub use auth_button::AuthButton;
pub use objective_form::{ObjectiveForm, SubmitFunction};
pub use objective_list::ObjectiveList;
pub use toaster::Toaster;
