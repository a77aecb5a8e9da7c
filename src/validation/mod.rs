//! Validation schema layer for the portal's forms
//!
//! - `schema`: field rules, constraint builders and the issue list
//! - `forms`: create project, task, payment request and comment schemas
//! - `invite`: invite-PM schema with its async existence check

mod forms;
mod invite;
mod schema;

pub use forms::{
    CreateCommentForm, CreateCommentSchema, CreatePaymentRequestForm, CreatePaymentRequestSchema,
    CreatePaymentRequestValues, CreateProjectForm, CreateProjectSchema, CreateTaskForm,
    CreateTaskSchema, CreateTaskValues,
};
pub use invite::{InvitePmForm, InvitePmSchema, PM_DOES_NOT_EXIST, PmLookup};
pub use schema::{
    Constraint, FieldIssue, FormSchema, Schema, ValidationErrors, email, max_chars, required,
};
