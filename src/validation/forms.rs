//! Schemas for the project, task, payment request and comment forms

use super::schema::{FormSchema, Schema, ValidationErrors, max_chars, parse_number, required};
use crate::domain::{TaskPriority, TaskStatus};
use serde::{Deserialize, Serialize};

/// Raw values of the create-project form
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateProjectForm {
    pub title: String,
    pub description: String,
    pub deadline: String,
}

pub struct CreateProjectSchema {
    schema: Schema<CreateProjectForm>,
}

impl Default for CreateProjectSchema {
    fn default() -> Self {
        let schema = Schema::<CreateProjectForm>::new()
            .field(
                "title",
                |f| f.title.as_str(),
                vec![
                    required("Title is required"),
                    max_chars(100, "Title must be 100 characters or less"),
                ],
            )
            .field(
                "description",
                |f| f.description.as_str(),
                vec![
                    required("Description is required"),
                    max_chars(500, "Description must be 500 characters or less"),
                ],
            )
            .field(
                "deadline",
                |f| f.deadline.as_str(),
                vec![required("Deadline is required")],
            );
        Self { schema }
    }
}

impl FormSchema for CreateProjectSchema {
    type Input = CreateProjectForm;
    type Output = CreateProjectForm;

    fn parse(&self, input: &CreateProjectForm) -> Result<CreateProjectForm, ValidationErrors> {
        self.schema.check(input)?;
        Ok(input.clone())
    }
}

/// Raw values of the create-task form; priority and status are unparsed
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTaskForm {
    pub title: String,
    pub description: String,
    pub task_priority: String,
    pub task_status: String,
    pub deadline: String,
}

/// A create-task form that passed validation
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTaskValues {
    pub title: String,
    pub description: String,
    pub task_priority: TaskPriority,
    pub task_status: TaskStatus,
    pub deadline: String,
}

/// Task form validation
///
/// Priority and status are parsed straight into their enums between the
/// text fields, so issues keep the form's field order.
pub struct CreateTaskSchema {
    text: Schema<CreateTaskForm>,
    deadline: Schema<CreateTaskForm>,
}

impl Default for CreateTaskSchema {
    fn default() -> Self {
        let text = Schema::<CreateTaskForm>::new()
            .field("title", |f| f.title.as_str(), vec![required("Title is required")])
            .field(
                "description",
                |f| f.description.as_str(),
                vec![required("Description is required")],
            );
        let deadline = Schema::<CreateTaskForm>::new().field(
            "deadline",
            |f| f.deadline.as_str(),
            vec![required("Deadline is required")],
        );
        Self { text, deadline }
    }
}

impl FormSchema for CreateTaskSchema {
    type Input = CreateTaskForm;
    type Output = CreateTaskValues;

    fn parse(&self, input: &CreateTaskForm) -> Result<CreateTaskValues, ValidationErrors> {
        let mut errors = ValidationErrors::new();
        self.text.collect_into(input, &mut errors);

        let task_priority = input
            .task_priority
            .parse::<TaskPriority>()
            .map_err(|err| errors.push("taskPriority", err.to_string()))
            .ok();
        let task_status = input
            .task_status
            .parse::<TaskStatus>()
            .map_err(|err| errors.push("taskStatus", err.to_string()))
            .ok();

        self.deadline.collect_into(input, &mut errors);

        match (task_priority, task_status) {
            (Some(task_priority), Some(task_status)) if errors.is_empty() => Ok(CreateTaskValues {
                title: input.title.clone(),
                description: input.description.clone(),
                task_priority,
                task_status,
                deadline: input.deadline.clone(),
            }),
            _ => Err(errors),
        }
    }
}

/// Raw values of the create-payment-request form
///
/// Period dates are free text; their format is not checked.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePaymentRequestForm {
    pub usd_amount: String,
    pub comment: String,
    pub start_date: String,
    pub end_date: String,
}

/// A create-payment-request form that passed validation
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePaymentRequestValues {
    pub usd_amount: f64,
    pub comment: String,
    pub start_date: String,
    pub end_date: String,
}

pub struct CreatePaymentRequestSchema {
    schema: Schema<CreatePaymentRequestForm>,
}

const INVALID_NUMBER: &str = "Invalid number";

impl Default for CreatePaymentRequestSchema {
    fn default() -> Self {
        let schema = Schema::<CreatePaymentRequestForm>::new().field(
            "comment",
            |f| f.comment.as_str(),
            vec![required("Comment is required")],
        );
        Self { schema }
    }
}

impl FormSchema for CreatePaymentRequestSchema {
    type Input = CreatePaymentRequestForm;
    type Output = CreatePaymentRequestValues;

    fn parse(
        &self,
        input: &CreatePaymentRequestForm,
    ) -> Result<CreatePaymentRequestValues, ValidationErrors> {
        let mut errors = ValidationErrors::new();
        let usd_amount = parse_number(&input.usd_amount);
        if usd_amount.is_none() {
            errors.push("usdAmount", INVALID_NUMBER);
        }
        self.schema.collect_into(input, &mut errors);

        match usd_amount {
            Some(usd_amount) if errors.is_empty() => Ok(CreatePaymentRequestValues {
                usd_amount,
                comment: input.comment.clone(),
                start_date: input.start_date.clone(),
                end_date: input.end_date.clone(),
            }),
            _ => Err(errors),
        }
    }
}

/// Raw value of the comment input on a task page
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateCommentForm {
    pub comment: String,
}

pub struct CreateCommentSchema {
    schema: Schema<CreateCommentForm>,
}

impl Default for CreateCommentSchema {
    fn default() -> Self {
        let schema = Schema::<CreateCommentForm>::new().field(
            "comment",
            |f| f.comment.as_str(),
            vec![required("Comment is required")],
        );
        Self { schema }
    }
}

impl FormSchema for CreateCommentSchema {
    type Input = CreateCommentForm;
    type Output = CreateCommentForm;

    fn parse(&self, input: &CreateCommentForm) -> Result<CreateCommentForm, ValidationErrors> {
        self.schema.check(input)?;
        Ok(input.clone())
    }
}
