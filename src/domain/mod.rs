//! Backend records consumed by the mappers and schemas
//!
//! These mirror the shapes the portal's REST API returns. The crate never
//! mutates or persists them.
//! - `entities`: users, tasks, actions, comments, projects, payment requests
//! - `enums`: closed enums with strict parsing

mod entities;
mod enums;

pub use entities::{Action, Comment, PaymentRequest, PaymentRequestWithProject, Project, Task, User};
pub use enums::{InvalidEnumValue, PaymentRequestStatus, TaskPriority, TaskStatus, UserType};
