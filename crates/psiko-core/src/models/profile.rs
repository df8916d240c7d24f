use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::models::account::Role;
use crate::models::biodata::Biodata;
use crate::models::health_result::HealthResultRecord;
use crate::models::instrument::InstrumentId;

/// The mutable per-conversation record accumulated while a respondent works
/// through the biodata form and the questionnaire sequence.
///
/// Created lazily on first interaction, mutated by exactly one conversation,
/// and discarded on cancel/reset/logout. Nothing here is durable until the
/// engine writes biodata and results through the stores.
#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SessionProfile {
    /// Set once login or registration succeeds.
    pub account_id: Option<i64>,
    pub role: Role,
    pub biodata: Biodata,
    pub biodata_completed: bool,
    pub who5_scores: Vec<i32>,
    pub gad7_scores: Vec<i32>,
    pub k10_scores: Vec<i32>,
    pub mbi_scores: Vec<i32>,
    pub naqr_scores: Vec<i32>,
    /// NAQ-R item 80: self-reported bullying experience on a 1–5 scale.
    /// Recorded but never scored.
    pub naqr_experience: Option<i32>,
    /// NAQ-R item 81: who did the bullying, free text.
    pub naqr_bully_actors: Option<String>,
    /// NAQ-R item 82: how many bullies, free text.
    pub naqr_bully_count: Option<String>,
    /// True once the current run has been scored, or the account has at
    /// least one prior result loaded from history.
    pub completed: bool,
    /// Prior results, most recent first. Populated on login; a fresh
    /// completion is pushed to the front.
    pub health_results: Vec<HealthResultRecord>,
}

impl SessionProfile {
    pub fn scores(&self, id: InstrumentId) -> &Vec<i32> {
        match id {
            InstrumentId::Who5 => &self.who5_scores,
            InstrumentId::Gad7 => &self.gad7_scores,
            InstrumentId::K10 => &self.k10_scores,
            InstrumentId::Mbi => &self.mbi_scores,
            InstrumentId::Naqr => &self.naqr_scores,
        }
    }

    pub fn scores_mut(&mut self, id: InstrumentId) -> &mut Vec<i32> {
        match id {
            InstrumentId::Who5 => &mut self.who5_scores,
            InstrumentId::Gad7 => &mut self.gad7_scores,
            InstrumentId::K10 => &mut self.k10_scores,
            InstrumentId::Mbi => &mut self.mbi_scores,
            InstrumentId::Naqr => &mut self.naqr_scores,
        }
    }

    /// Drop all questionnaire answers for a fresh run, keeping the account
    /// linkage and biodata.
    pub fn clear_answers(&mut self) {
        self.who5_scores.clear();
        self.gad7_scores.clear();
        self.k10_scores.clear();
        self.mbi_scores.clear();
        self.naqr_scores.clear();
        self.naqr_experience = None;
        self.naqr_bully_actors = None;
        self.naqr_bully_count = None;
        self.completed = false;
    }

    /// The single place `completed` is derived after a profile load.
    pub fn recompute_completed(&mut self) {
        self.completed = !self.health_results.is_empty();
    }

    /// The most recent result, whether loaded from history or just scored.
    pub fn latest_result(&self) -> Option<&HealthResultRecord> {
        self.health_results.first()
    }
}
