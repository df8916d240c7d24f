//! Collaborator interfaces.
//!
//! The engine owns no persistence or model inference of its own: durable
//! accounts, biodata, results, and LLM completions live behind these traits,
//! injected at construction. Implementations wrap whatever backend the
//! deployment uses (SQL store, HTTP service, in-memory test double).

use async_trait::async_trait;

use psiko_core::models::account::Account;
use psiko_core::models::biodata::Biodata;
use psiko_core::models::health_result::HealthResultRecord;

use crate::error::{AssistantError, StoreError};

/// Durable accounts and their biodata profiles.
#[async_trait]
pub trait AccountStore: Send + Sync {
    async fn find_account_by_email(&self, email: &str) -> Result<Option<Account>, StoreError>;

    /// Create an account keyed by email. Idempotent: re-registering an
    /// existing email returns the existing account id rather than erroring.
    async fn create_account(&self, email: &str) -> Result<i64, StoreError>;

    async fn load_biodata(&self, account_id: i64) -> Result<Option<Biodata>, StoreError>;

    async fn save_biodata(&self, account_id: i64, biodata: &Biodata) -> Result<(), StoreError>;

    /// Prior questionnaire results, most recent first.
    async fn load_result_history(
        &self,
        account_id: i64,
    ) -> Result<Vec<HealthResultRecord>, StoreError>;
}

/// Durable questionnaire results.
#[async_trait]
pub trait ResultStore: Send + Sync {
    /// Persist one completed run; returns the new record id.
    async fn save_result(&self, record: &HealthResultRecord) -> Result<i64, StoreError>;
}

/// The LLM-backed assistant. Only reachable once the respondent's profile is
/// complete (or the account is an admin).
#[async_trait]
pub trait ChatAssistant: Send + Sync {
    /// Answer a free-form question, grounded in the rendered profile context.
    async fn answer(&self, question: &str, profile_context: &str)
    -> Result<String, AssistantError>;
}
