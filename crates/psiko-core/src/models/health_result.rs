use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// One persisted questionnaire run: per-instrument totals for a user.
///
/// MBI and NAQ-R are stored as their subscale totals; the instrument totals
/// are derived sums. WHO-5, GAD-7 and K10 have no subscales.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct HealthResultRecord {
    pub user_id: i64,
    pub who5_total: i32,
    pub gad7_total: i32,
    pub k10_total: i32,
    pub mbi_emosional_total: i32,
    pub mbi_sinis_total: i32,
    pub mbi_pencapaian_total: i32,
    pub naqr_pribadi_total: i32,
    pub naqr_pekerjaan_total: i32,
    pub naqr_intimidasi_total: i32,
    pub created_at: jiff::Timestamp,
}

impl HealthResultRecord {
    /// MBI total score: sum of the three subscale totals.
    pub fn mbi_total(&self) -> i32 {
        self.mbi_emosional_total + self.mbi_sinis_total + self.mbi_pencapaian_total
    }

    /// NAQ-R total score: sum of the three subscale totals.
    pub fn naqr_total(&self) -> i32 {
        self.naqr_pribadi_total + self.naqr_pekerjaan_total + self.naqr_intimidasi_total
    }
}
