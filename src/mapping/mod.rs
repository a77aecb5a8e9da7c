//! Data mapper: backend records to view models
//!
//! Every function here is pure and infallible. Empty inputs give empty
//! outputs, and one output item is produced per input record, in input order.
//! - `tasks`: board cards and task detail panels
//! - `activity`: action log and comment cards
//! - `projects`: dashboard project lists
//! - `payments`: payment request lists and detail panels
//! - `profiles`: user profile detail panel

mod activity;
mod payments;
mod profiles;
mod projects;
mod tasks;

pub use activity::{map_actions_to_columns, map_comments_to_columns};
pub use payments::{map_payment_request_to_details, map_payment_requests_to_list_items};
pub use profiles::{NOT_SET, map_profile_to_details};
pub use projects::{map_client_projects_to_list_items, map_pm_projects_to_list_items};
pub use tasks::{group_tasks_by_status, map_task_to_details, map_tasks_to_columns};

use crate::domain::User;

/// Shown wherever a participant list is empty
pub const NO_PARTICIPANTS: &str = "No participants";

/// Comma-joined user names, or [`NO_PARTICIPANTS`] when nothing remains
pub(crate) fn participant_names(users: &[User]) -> String {
    let joined = users
        .iter()
        .map(|user| user.name.as_str())
        .collect::<Vec<_>>()
        .join(", ");
    let trimmed = joined.trim();
    if trimmed.is_empty() {
        NO_PARTICIPANTS.to_string()
    } else {
        trimmed.to_string()
    }
}
