//! Project Board core library
//!
//! This library holds the presentation core of a project and payment
//! management portal: it turns records fetched from the portal's REST API
//! into view-ready items, and validates the portal's forms before they are
//! submitted.
//!
//! # Architecture
//!
//! - **Domain Layer**: `domain` - Backend records and closed enums (read-only)
//! - **Data Mapper**: `mapping`, `dates`, `text`, `routes` - Pure functions
//!   producing the `view` models
//! - **Validation Layer**: `validation` - Declarative form schemas, including
//!   the asynchronous invite-PM check
//! - **Front end**: `snapshot` and `render` - Load recorded API data and print
//!   views for the `projectboard` command
//!
//! # Example
//!
//! ```
//! use projectboard::validation::{CreateProjectForm, CreateProjectSchema, FormSchema};
//!
//! let schema = CreateProjectSchema::default();
//! let form = CreateProjectForm {
//!     title: String::new(),
//!     description: String::new(),
//!     deadline: String::new(),
//! };
//! let errors = schema.parse(&form).unwrap_err();
//! assert_eq!(
//!     errors.messages(),
//!     vec!["Title is required", "Description is required", "Deadline is required"]
//! );
//! ```

pub mod dates;
pub mod domain;
pub mod mapping;
pub mod render;
pub mod routes;
pub mod snapshot;
pub mod text;
pub mod validation;
pub mod view;

// Re-export commonly used types
pub use dates::{FormatDateError, format_date};
pub use domain::{
    Action, Comment, PaymentRequest, PaymentRequestStatus, PaymentRequestWithProject, Project,
    Task, TaskPriority, TaskStatus, User, UserType,
};
pub use mapping::{
    map_actions_to_columns, map_payment_requests_to_list_items, map_tasks_to_columns,
};
pub use snapshot::{Snapshot, SnapshotPmDirectory, SnapshotStore};
pub use text::{capitalize_first_letter, map_pathname_to_location_array};
pub use validation::{FormSchema, ValidationErrors};
pub use view::{ColumnItem, ColumnRow, Detail, Icon, ListDatum, ListItem};
