//! Navigation targets produced for the router
//!
//! Project and payment links are relative (no leading slash); task links are
//! absolute. The router depends on both shapes exactly.

/// `projects/{project_id}`
pub fn project_href(project_id: u64) -> String {
    format!("projects/{}", project_id)
}

/// `/projects/{project_id}/task/{task_id}`
pub fn task_href(project_id: u64, task_id: u64) -> String {
    format!("/projects/{}/task/{}", project_id, task_id)
}

/// `projects/{project_id}/payment-request/{request_id}`
pub fn payment_request_href(project_id: u64, request_id: u64) -> String {
    format!("projects/{}/payment-request/{}", project_id, request_id)
}
