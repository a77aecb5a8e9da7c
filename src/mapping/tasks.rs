use super::participant_names;
use crate::dates::format_instant;
use crate::domain::{Task, TaskStatus};
use crate::routes::task_href;
use crate::view::{ColumnItem, Detail};

/// Build one board card per task
///
/// Rows are "Participants" followed by "Date added". The card links to the
/// task page and carries the task priority unchanged.
pub fn map_tasks_to_columns(tasks: &[Task]) -> Vec<ColumnItem> {
    tasks.iter().map(task_to_column).collect()
}

fn task_to_column(task: &Task) -> ColumnItem {
    let mut item = ColumnItem::new(task.id, task.title.clone())
        .row("Participants", participant_names(&task.users))
        .row("Date added", format_instant(&task.created_at));
    item.priority = Some(task.task_priority);
    item.href = Some(task_href(task.project_id, task.id));
    item
}

/// Split tasks into board columns
///
/// # Returns
/// One entry per `TaskStatus`, in board order, even when a column is empty
pub fn group_tasks_by_status(tasks: &[Task]) -> Vec<(TaskStatus, Vec<ColumnItem>)> {
    TaskStatus::ALL
        .iter()
        .map(|status| {
            let column = tasks
                .iter()
                .filter(|task| task.task_status == *status)
                .map(task_to_column)
                .collect();
            (*status, column)
        })
        .collect()
}

/// Detail panel for the task page
pub fn map_task_to_details(task: &Task) -> Vec<Detail> {
    vec![
        Detail::new("Status", task.task_status.as_str()),
        Detail::new("Priority", task.task_priority.as_str()),
        Detail::new("Deadline", format_instant(&task.deadline)),
        Detail::new("Participants", participant_names(&task.users)),
        Detail::new("Created at", format_instant(&task.created_at)),
    ]
}
