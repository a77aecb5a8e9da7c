//! Invite-PM schema with an asynchronous existence check
//!
//! The e-mail is first checked for syntax. Only a syntactically valid
//! address is sent to the [`PmLookup`] collaborator, and any failure it
//! reports (not found, network, timeout) becomes the same
//! "PM does not exist" issue.

use super::schema::{Schema, ValidationErrors, email};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::debug;

pub const PM_DOES_NOT_EXIST: &str = "PM does not exist";

/// Answers whether an e-mail belongs to a registered project manager
///
/// Implementations return `Ok(())` when it does and any error otherwise.
#[async_trait]
pub trait PmLookup: Send + Sync {
    async fn check_pm_email(&self, email: &str) -> anyhow::Result<()>;
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvitePmForm {
    pub email: String,
}

pub struct InvitePmSchema {
    schema: Schema<InvitePmForm>,
    lookup: Arc<dyn PmLookup>,
}

impl InvitePmSchema {
    pub fn new(lookup: Arc<dyn PmLookup>) -> Self {
        let schema = Schema::<InvitePmForm>::new().field(
            "email",
            |f| f.email.as_str(),
            vec![email("Invalid email address")],
        );
        Self { schema, lookup }
    }

    /// Validate the form, awaiting the existence check when syntax passes
    ///
    /// # Returns
    /// The form unchanged on success, or the issues found. The lookup is
    /// never called for a malformed address.
    pub async fn parse(&self, input: &InvitePmForm) -> Result<InvitePmForm, ValidationErrors> {
        self.schema.check(input)?;

        if let Err(err) = self.lookup.check_pm_email(&input.email).await {
            debug!(email = %input.email, error = %err, "PM lookup failed");
            return Err(ValidationErrors::single("email", PM_DOES_NOT_EXIST));
        }

        Ok(input.clone())
    }
}
