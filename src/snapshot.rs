//! Snapshots of already-fetched backend records
//!
//! A snapshot file holds the arrays the portal would receive from its API
//! (`users`, `projects`, `tasks`, `actions`, `comments`, `paymentRequests`),
//! each in the backend's camelCase shape. Files ending in `.json` are read as
//! JSON, everything else as TOML.

use crate::domain::{
    Action, Comment, PaymentRequest, PaymentRequestWithProject, Project, Task, User, UserType,
};
use crate::validation::PmLookup;
use anyhow::{Context, Result, bail};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Snapshot {
    pub users: Vec<User>,
    pub projects: Vec<Project>,
    pub tasks: Vec<Task>,
    pub actions: Vec<Action>,
    pub comments: Vec<Comment>,
    pub payment_requests: Vec<PaymentRequest>,
}

impl Snapshot {
    pub fn user(&self, user_id: u64) -> Option<&User> {
        self.users.iter().find(|u| u.id == user_id)
    }

    pub fn project(&self, project_id: u64) -> Option<&Project> {
        self.projects.iter().find(|p| p.id == project_id)
    }

    pub fn task(&self, task_id: u64) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == task_id)
    }

    pub fn payment_request(&self, request_id: u64) -> Option<&PaymentRequest> {
        self.payment_requests.iter().find(|r| r.id == request_id)
    }

    /// Tasks of one project, in snapshot order
    pub fn project_tasks(&self, project_id: u64) -> Vec<Task> {
        self.tasks
            .iter()
            .filter(|t| t.project_id == project_id)
            .cloned()
            .collect()
    }

    pub fn task_actions(&self, task_id: u64) -> Vec<Action> {
        self.actions
            .iter()
            .filter(|a| a.task_id == task_id)
            .cloned()
            .collect()
    }

    pub fn task_comments(&self, task_id: u64) -> Vec<Comment> {
        self.comments
            .iter()
            .filter(|c| c.task_id == task_id)
            .cloned()
            .collect()
    }

    /// Join payment requests with their projects
    ///
    /// Requests whose project is missing from the snapshot are skipped.
    pub fn payment_requests_with_project(&self) -> Vec<PaymentRequestWithProject> {
        self.payment_requests
            .iter()
            .filter_map(|request| match self.project(request.project_id) {
                Some(project) => Some(PaymentRequestWithProject {
                    request: request.clone(),
                    project: project.clone(),
                }),
                None => {
                    warn!(
                        request_id = request.id,
                        project_id = request.project_id,
                        "payment request references a project missing from the snapshot"
                    );
                    None
                }
            })
            .collect()
    }
}

/// Reads snapshot files from disk
pub struct SnapshotStore {
    file_path: PathBuf,
}

impl SnapshotStore {
    pub fn new(file_path: impl AsRef<Path>) -> Self {
        Self {
            file_path: file_path.as_ref().to_path_buf(),
        }
    }

    /// Load the snapshot; a missing file yields an empty snapshot
    pub fn load(&self) -> Result<Snapshot> {
        if !self.file_path.exists() {
            warn!(path = %self.file_path.display(), "snapshot file not found, starting empty");
            return Ok(Snapshot::default());
        }

        let content = fs::read_to_string(&self.file_path)
            .with_context(|| format!("failed to read {}", self.file_path.display()))?;

        let snapshot: Snapshot = if self.is_json() {
            serde_json::from_str(&content)
                .with_context(|| format!("invalid JSON snapshot {}", self.file_path.display()))?
        } else {
            toml::from_str(&content)
                .with_context(|| format!("invalid TOML snapshot {}", self.file_path.display()))?
        };

        debug!(
            projects = snapshot.projects.len(),
            tasks = snapshot.tasks.len(),
            payment_requests = snapshot.payment_requests.len(),
            "snapshot loaded"
        );
        Ok(snapshot)
    }

    fn is_json(&self) -> bool {
        self.file_path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"))
    }
}

/// PM directory answering from the users of a snapshot
///
/// E-mails are compared case-insensitively.
pub struct SnapshotPmDirectory {
    emails: HashSet<String>,
}

impl SnapshotPmDirectory {
    pub fn from_snapshot(snapshot: &Snapshot) -> Self {
        let emails = snapshot
            .users
            .iter()
            .filter(|user| user.user_type == UserType::Pm)
            .map(|user| user.email.to_lowercase())
            .collect();
        Self { emails }
    }
}

#[async_trait]
impl PmLookup for SnapshotPmDirectory {
    async fn check_pm_email(&self, email: &str) -> Result<()> {
        if !self.emails.contains(&email.to_lowercase()) {
            bail!("No project manager registered with e-mail '{}'", email);
        }
        Ok(())
    }
}
