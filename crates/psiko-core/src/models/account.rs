use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// A durable user account, owned by the account store.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Account {
    pub id: i64,
    pub email: String,
    pub role: Role,
}

/// Account role. Admins may use the open chat without completing the
/// questionnaire first.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Role {
    #[default]
    User,
    Admin,
}
