use serde::{Deserialize, Serialize};
use ts_rs::TS;

use psiko_core::models::instrument::InstrumentId;

/// The structural states of one conversation.
///
/// Item position within a state is not part of the state itself: the biodata
/// step derives it from the first still-missing field, and questionnaire
/// steps derive it from the instrument's accumulated answer count. That keeps
/// the enumeration at a handful of states instead of one per item.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum ConversationState {
    /// At rest: no flow in progress. Free text is a chat attempt.
    #[default]
    Idle,
    /// Waiting for the login-or-register choice.
    AskAccount,
    /// Waiting for the login email.
    AwaitLoginEmail,
    /// Waiting for the registration email.
    RegisterEmail,
    /// Collecting biodata; the current field is the first missing one.
    Biodata,
    /// Collecting answers for one instrument; the current item index is the
    /// instrument's answer count so far.
    Questionnaire(InstrumentId),
    /// NAQ-R item 80: bullying-experience rating (recorded, never scored).
    NaqrExperience,
    /// NAQ-R item 81: who did the bullying, free text.
    NaqrActors,
    /// NAQ-R item 82: how many bullies, free text.
    NaqrCount,
    /// Terminal: the run has been scored and summarized (or results were
    /// loaded from history). Free text goes to the assistant.
    Completed,
}
