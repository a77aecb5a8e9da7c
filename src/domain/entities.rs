use super::enums::{PaymentRequestStatus, TaskPriority, TaskStatus, UserType};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A portal account (client, developer or project manager)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: u64,
    pub email: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub user_type: UserType,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A unit of work on a project board
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: u64,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub task_priority: TaskPriority,
    pub task_status: TaskStatus,
    pub project_id: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub developer_id: Option<u64>,
    pub deadline: DateTime<Utc>,
    /// Assigned users, in the order the backend returns them
    #[serde(default)]
    pub users: Vec<User>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// An entry in a task's activity log
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Action {
    pub id: u64,
    pub title: String,
    pub task_id: u64,
    pub user_id: u64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub user: User,
}

/// A comment left on a task
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub id: u64,
    pub text: String,
    pub task_id: u64,
    pub user_id: u64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub user: User,
}

/// A client project
///
/// The participant lists are only populated by the endpoints that join them,
/// so both default to empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: u64,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub deadline: DateTime<Utc>,
    pub client_user_id: u64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(default)]
    pub users: Vec<User>,
    #[serde(default)]
    pub developer_users: Vec<User>,
}

/// A request from a client to pay for a period of work
///
/// Dates are kept exactly as the backend sends them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentRequest {
    pub id: u64,
    pub project_id: u64,
    pub client_user_id: u64,
    #[serde(default)]
    pub comment: String,
    pub usd_amount: f64,
    pub payment_period_start_date: String,
    pub payment_period_end_date: String,
    pub status: PaymentRequestStatus,
    pub created_at: String,
    pub updated_at: String,
}

/// A payment request joined with the project it bills
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentRequestWithProject {
    #[serde(flatten)]
    pub request: PaymentRequest,
    pub project: Project,
}
