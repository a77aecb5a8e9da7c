//! Data mapper tests
mod common;

use chrono::{DateTime, Utc};
use common::*;
use pretty_assertions::assert_eq;
use projectboard::mapping::{
    NO_PARTICIPANTS, NOT_SET, group_tasks_by_status, map_actions_to_columns,
    map_client_projects_to_list_items, map_comments_to_columns, map_payment_request_to_details,
    map_payment_requests_to_list_items, map_pm_projects_to_list_items, map_profile_to_details,
    map_task_to_details, map_tasks_to_columns,
};
use projectboard::{
    ColumnItem, ColumnRow, Detail, Icon, ListDatum, TaskPriority, TaskStatus, UserType,
    format_date,
};

#[test]
fn test_map_tasks_to_columns() {
    let john = create_test_user(1, "John Doe", UserType::Developer);
    let tasks = vec![create_test_task(1, "Test Task", 123, vec![john])];

    let result = map_tasks_to_columns(&tasks);

    assert_eq!(
        result[0],
        ColumnItem {
            id: 1,
            title: "Test Task".to_string(),
            rows: vec![
                ColumnRow::new("Participants", "John Doe"),
                ColumnRow::new("Date added", "01/01/2024, 2:00 AM"),
            ],
            priority: Some(TaskPriority::High),
            author: None,
            text: None,
            href: Some("/projects/123/task/1".to_string()),
        }
    );
}

#[test]
fn test_map_tasks_joins_participants_in_order() {
    let users = vec![
        create_test_user(1, "John Doe", UserType::Developer),
        create_test_user(2, "Jane Roe", UserType::Developer),
    ];
    let tasks = vec![create_test_task(1, "Pair work", 5, users)];

    let result = map_tasks_to_columns(&tasks);
    assert_eq!(result[0].rows[0].value, "John Doe, Jane Roe");
}

#[test]
fn test_map_tasks_without_participants() {
    let tasks = vec![create_test_task(1, "Lonely", 5, Vec::new())];

    let result = map_tasks_to_columns(&tasks);
    assert_eq!(result[0].rows[0], ColumnRow::new("Participants", NO_PARTICIPANTS));
}

#[test]
fn test_map_tasks_preserves_length_and_order() {
    let tasks: Vec<_> = (1..=5)
        .rev()
        .map(|id| create_test_task(id, &format!("Task {}", id), 9, Vec::new()))
        .collect();

    let result = map_tasks_to_columns(&tasks);

    assert_eq!(result.len(), tasks.len());
    let ids: Vec<u64> = result.iter().map(|item| item.id).collect();
    assert_eq!(ids, vec![5, 4, 3, 2, 1]);
}

#[test]
fn test_map_tasks_empty_input() {
    assert!(map_tasks_to_columns(&[]).is_empty());
}

#[test]
fn test_map_actions_to_columns() {
    let john = create_test_user(1, "John Doe", UserType::Developer);
    let actions = vec![create_test_action(1, "Test Action", john.clone())];

    let result = map_actions_to_columns(&actions);

    assert_eq!(result.len(), 1);
    assert_eq!(result[0].id, 1);
    assert_eq!(result[0].title, "Test Action");
    assert_eq!(result[0].rows, vec![ColumnRow::new("Date added", "01/01/2024, 2:00 AM")]);
    assert_eq!(result[0].author, Some(john));
    assert_eq!(result[0].href, None);
    assert_eq!(result[0].priority, None);
}

#[test]
fn test_map_comments_to_columns() {
    let jane = create_test_user(2, "Jane Roe", UserType::Pm);
    let comments = vec![create_test_comment(7, "Looks good", jane.clone())];

    let result = map_comments_to_columns(&comments);

    assert_eq!(result[0].title, "Jane Roe");
    assert_eq!(result[0].text.as_deref(), Some("Looks good"));
    assert_eq!(result[0].author, Some(jane));
    assert_eq!(result[0].rows.len(), 1);
}

#[test]
fn test_map_payment_requests_to_list_items() {
    let project = create_test_project(123, "Test Project");
    let requests = vec![create_test_request_with_project(1, project)];

    let result = map_payment_requests_to_list_items(&requests);

    assert_eq!(result[0].title, "Payment Request for Test Project");
    assert_eq!(result[0].right, Some(123));
    assert_eq!(result[0].href.as_deref(), Some("projects/123/payment-request/1"));
    assert_eq!(
        result[0].data,
        vec![
            ListDatum::with_icon(Icon::Sunrise, "01/01/2024, 2:00 AM"),
            ListDatum::with_icon(Icon::Sunset, "02/01/2024, 2:00 AM"),
            ListDatum::with_icon(Icon::Dollar, "$100"),
            ListDatum::with_icon(Icon::Status, "PENDING"),
        ]
    );
}

#[test]
fn test_map_payment_requests_keeps_unparseable_dates() {
    let mut entry = create_test_request_with_project(2, create_test_project(4, "Odd dates"));
    entry.request.payment_period_start_date = "sometime".to_string();

    let result = map_payment_requests_to_list_items(&[entry]);
    assert_eq!(result[0].data[0].text, "sometime");
}

#[test]
fn test_map_client_projects_to_list_items() {
    let mut project = create_test_project(7, "Website");
    project.users = vec![create_test_user(3, "Ann Lee", UserType::Developer)];
    let empty = create_test_project(8, "Empty");

    let result = map_client_projects_to_list_items(&[project, empty]);

    assert_eq!(result[0].title, "Website");
    assert_eq!(result[0].right, Some(7));
    assert_eq!(result[0].href.as_deref(), Some("projects/7"));
    assert_eq!(
        result[0].data,
        vec![
            ListDatum::with_icon(Icon::Sunrise, "01/01/2024, 2:00 AM"),
            ListDatum::with_icon(Icon::Sunset, "02/01/2024, 2:00 AM"),
            ListDatum::with_icon(Icon::People, "Ann Lee"),
        ]
    );
    assert_eq!(result[1].data[2].text, NO_PARTICIPANTS);
}

#[test]
fn test_map_pm_projects_uses_developer_users() {
    let mut project = create_test_project(7, "Website");
    project.users = vec![create_test_user(1, "Client Person", UserType::Client)];
    project.developer_users = vec![
        create_test_user(3, "Ann Lee", UserType::Developer),
        create_test_user(4, "Bob Ray", UserType::Developer),
    ];

    let result = map_pm_projects_to_list_items(&[project]);
    assert_eq!(result[0].data[2].text, "Ann Lee, Bob Ray");
}

#[test]
fn test_map_task_to_details() {
    let task = create_test_task(1, "Test Task", 123, Vec::new());

    assert_eq!(
        map_task_to_details(&task),
        vec![
            Detail::new("Status", "TO_DO"),
            Detail::new("Priority", "HIGH"),
            Detail::new("Deadline", "02/01/2024, 2:00 AM"),
            Detail::new("Participants", NO_PARTICIPANTS),
            Detail::new("Created at", "01/01/2024, 2:00 AM"),
        ]
    );
}

#[test]
fn test_map_payment_request_to_details() {
    let mut request = create_test_payment_request(1, 123);
    request.usd_amount = 250.5;

    let details = map_payment_request_to_details(&request);

    let titles: Vec<&str> = details.iter().map(|d| d.title.as_str()).collect();
    assert_eq!(titles, vec!["Start date", "End date", "Status", "Amount", "Created at"]);
    assert_eq!(details[0].value, format_date("2024-01-01").unwrap());
    assert_eq!(details[3].value, "$250.5");
}

#[test]
fn test_group_tasks_by_status() {
    let mut in_progress = create_test_task(2, "Doing", 1, Vec::new());
    in_progress.task_status = TaskStatus::InProgress;
    let tasks = vec![
        create_test_task(1, "Todo A", 1, Vec::new()),
        in_progress,
        create_test_task(3, "Todo B", 1, Vec::new()),
    ];

    let board = group_tasks_by_status(&tasks);

    let statuses: Vec<TaskStatus> = board.iter().map(|(status, _)| *status).collect();
    assert_eq!(statuses, vec![TaskStatus::ToDo, TaskStatus::InProgress, TaskStatus::Closed]);
    let todo_ids: Vec<u64> = board[0].1.iter().map(|item| item.id).collect();
    assert_eq!(todo_ids, vec![1, 3]);
    assert_eq!(board[1].1.len(), 1);
    assert!(board[2].1.is_empty());
}

#[test]
fn test_map_profile_to_details() {
    let user = create_test_user(42, "Paula Manager", UserType::Pm);

    assert_eq!(
        map_profile_to_details(&user),
        vec![
            Detail::new("Position", "PM"),
            Detail::new("Email", "paula.manager@example.com"),
            Detail::new("ID", "42"),
        ]
    );
}

#[test]
fn test_map_profile_without_id() {
    let user = create_test_user(0, "New Client", UserType::Client);

    let details = map_profile_to_details(&user);
    assert_eq!(details[0].value, "CLIENT");
    assert_eq!(details[2], Detail::new("ID", NOT_SET));
}

#[test]
fn test_mappers_survive_timestamps_at_chrono_max() {
    let mut task = create_test_task(1, "Far future", 1, Vec::new());
    task.created_at = DateTime::<Utc>::MAX_UTC;
    task.deadline = DateTime::<Utc>::MAX_UTC;

    let columns = map_tasks_to_columns(std::slice::from_ref(&task));
    assert_eq!(columns[0].rows[1].value, DateTime::<Utc>::MAX_UTC.to_rfc3339());

    let details = map_task_to_details(&task);
    assert_eq!(details[2].value, DateTime::<Utc>::MAX_UTC.to_rfc3339());
}
