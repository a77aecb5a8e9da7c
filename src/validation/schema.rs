//! Composable field validation
//!
//! A [`Schema`] is an ordered list of fields. Each field reads one string out
//! of the input and runs its constraints in order; the first failing
//! constraint reports that field. Every field is always checked, so a single
//! pass collects the issues of all invalid fields.

use regex::Regex;
use serde::Serialize;
use std::sync::LazyLock;
use thiserror::Error;

/// One violated constraint
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldIssue {
    pub field: &'static str,
    pub message: String,
}

/// All issues found while validating one input, in field order
#[derive(Debug, Clone, Default, PartialEq, Eq, Error)]
#[error("{}", render_issues(.issues))]
pub struct ValidationErrors {
    issues: Vec<FieldIssue>,
}

fn render_issues(issues: &[FieldIssue]) -> String {
    issues
        .iter()
        .map(|issue| format!("{}: {}", issue.field, issue.message))
        .collect::<Vec<_>>()
        .join("; ")
}

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Errors holding a single issue
    pub fn single(field: &'static str, message: impl Into<String>) -> Self {
        let mut errors = Self::new();
        errors.push(field, message);
        errors
    }

    pub fn push(&mut self, field: &'static str, message: impl Into<String>) {
        self.issues.push(FieldIssue {
            field,
            message: message.into(),
        });
    }

    pub fn is_empty(&self) -> bool {
        self.issues.is_empty()
    }

    pub fn issues(&self) -> &[FieldIssue] {
        &self.issues
    }

    pub fn first(&self) -> Option<&FieldIssue> {
        self.issues.first()
    }

    /// Messages in report order
    pub fn messages(&self) -> Vec<&str> {
        self.issues.iter().map(|issue| issue.message.as_str()).collect()
    }

    /// Message reported for `field`, if any
    pub fn message_for(&self, field: &str) -> Option<&str> {
        self.issues
            .iter()
            .find(|issue| issue.field == field)
            .map(|issue| issue.message.as_str())
    }
}

/// A check on a single string value, returning the failure message
pub type Constraint = Box<dyn Fn(&str) -> Option<String> + Send + Sync>;

/// Fails on the empty string
pub fn required(message: &'static str) -> Constraint {
    Box::new(move |value: &str| value.is_empty().then(|| message.to_string()))
}

/// Fails when the value is longer than `limit`
///
/// Length is counted in UTF-16 code units, as browsers count form input, so
/// a character outside the Basic Multilingual Plane counts twice.
pub fn max_chars(limit: usize, message: &'static str) -> Constraint {
    Box::new(move |value: &str| {
        (value.encode_utf16().count() > limit).then(|| message.to_string())
    })
}

// No lookaround in `regex`; leading dots and ".." are rejected separately.
static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?i)[A-Z0-9_'+\-.]*[A-Z0-9_+\-]@([A-Z0-9][A-Z0-9\-]*\.)+[A-Z]{2,}$")
        .expect("static e-mail pattern")
});

/// Fails unless the value looks like an e-mail address
pub fn email(message: &'static str) -> Constraint {
    Box::new(move |value: &str| (!is_email(value)).then(|| message.to_string()))
}

pub(crate) fn is_email(value: &str) -> bool {
    !value.starts_with('.') && !value.contains("..") && EMAIL_PATTERN.is_match(value)
}

pub(crate) fn parse_number(value: &str) -> Option<f64> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<f64>().ok().filter(|n| n.is_finite())
}

struct FieldRule<T> {
    name: &'static str,
    value: fn(&T) -> &str,
    constraints: Vec<Constraint>,
}

/// Ordered field rules over an input type `T`
pub struct Schema<T> {
    fields: Vec<FieldRule<T>>,
}

impl<T> Default for Schema<T> {
    fn default() -> Self {
        Self { fields: Vec::new() }
    }
}

impl<T> Schema<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a field
    ///
    /// # Arguments
    /// * `name` - Field name reported in issues
    /// * `value` - Accessor for the field's raw string
    /// * `constraints` - Checks run in order until one fails
    pub fn field(
        mut self,
        name: &'static str,
        value: fn(&T) -> &str,
        constraints: Vec<Constraint>,
    ) -> Self {
        self.fields.push(FieldRule {
            name,
            value,
            constraints,
        });
        self
    }

    /// Run every field and collect all issues
    pub fn check(&self, input: &T) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        self.collect_into(input, &mut errors);
        if errors.is_empty() { Ok(()) } else { Err(errors) }
    }

    /// Run every field, appending issues to `errors`
    ///
    /// Lets a form interleave its own typed parsing with the schema's
    /// fields while keeping issues in declaration order.
    pub fn collect_into(&self, input: &T, errors: &mut ValidationErrors) {
        for field in &self.fields {
            let raw = (field.value)(input);
            if let Some(message) = field.constraints.iter().find_map(|constraint| constraint(raw)) {
                errors.push(field.name, message);
            }
        }
    }
}

/// A form schema turning raw input into validated values
pub trait FormSchema {
    type Input;
    type Output;

    /// Validate `input`, reporting every invalid field at once
    fn parse(&self, input: &Self::Input) -> Result<Self::Output, ValidationErrors>;
}
