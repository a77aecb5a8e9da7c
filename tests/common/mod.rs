//! Common fixtures for integration tests

#![allow(dead_code)]

use chrono::{DateTime, TimeZone, Utc};
use projectboard::{
    Action, Comment, PaymentRequest, PaymentRequestStatus, PaymentRequestWithProject, Project,
    Task, TaskPriority, TaskStatus, User, UserType,
};

/// UTC instant from calendar parts
pub fn at(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, hour, minute, 0).unwrap()
}

/// Create a test user with the given role
pub fn create_test_user(id: u64, name: &str, user_type: UserType) -> User {
    User {
        id,
        email: format!("{}@example.com", name.to_lowercase().replace(' ', ".")),
        name: name.to_string(),
        description: String::new(),
        user_type,
        created_at: at(2024, 1, 1, 0, 0),
        updated_at: at(2024, 1, 1, 0, 0),
    }
}

/// Create a test task with minimal fields
pub fn create_test_task(id: u64, title: &str, project_id: u64, users: Vec<User>) -> Task {
    Task {
        id,
        title: title.to_string(),
        description: String::new(),
        task_priority: TaskPriority::High,
        task_status: TaskStatus::ToDo,
        project_id,
        developer_id: None,
        deadline: at(2024, 2, 1, 0, 0),
        users,
        created_at: at(2024, 1, 1, 0, 0),
        updated_at: at(2024, 1, 1, 0, 0),
    }
}

pub fn create_test_action(id: u64, title: &str, user: User) -> Action {
    Action {
        id,
        title: title.to_string(),
        task_id: 1,
        user_id: user.id,
        created_at: at(2024, 1, 1, 0, 0),
        updated_at: at(2024, 1, 1, 0, 0),
        user,
    }
}

pub fn create_test_comment(id: u64, text: &str, user: User) -> Comment {
    Comment {
        id,
        text: text.to_string(),
        task_id: 1,
        user_id: user.id,
        created_at: at(2024, 1, 1, 0, 0),
        updated_at: at(2024, 1, 1, 0, 0),
        user,
    }
}

pub fn create_test_project(id: u64, title: &str) -> Project {
    Project {
        id,
        title: title.to_string(),
        description: String::new(),
        deadline: at(2024, 2, 1, 0, 0),
        client_user_id: 1,
        created_at: at(2024, 1, 1, 0, 0),
        updated_at: at(2024, 1, 1, 0, 0),
        users: Vec::new(),
        developer_users: Vec::new(),
    }
}

pub fn create_test_payment_request(id: u64, project_id: u64) -> PaymentRequest {
    PaymentRequest {
        id,
        project_id,
        client_user_id: 1,
        comment: String::new(),
        usd_amount: 100.0,
        payment_period_start_date: "2024-01-01".to_string(),
        payment_period_end_date: "2024-02-01".to_string(),
        status: PaymentRequestStatus::Pending,
        created_at: "2024-01-01".to_string(),
        updated_at: "2024-01-01".to_string(),
    }
}

pub fn create_test_request_with_project(
    id: u64,
    project: Project,
) -> PaymentRequestWithProject {
    PaymentRequestWithProject {
        request: create_test_payment_request(id, project.id),
        project,
    }
}
