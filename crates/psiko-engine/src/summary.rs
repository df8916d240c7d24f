//! Scored-run assembly and human-readable rendering.
//!
//! [`RunScores`] is the bridge between raw answer lists, the persisted
//! [`HealthResultRecord`], and the rendered summary: it can be computed from
//! a live session's answers or reconstructed from a stored record (where
//! only subscale totals survive).

use psiko_core::models::health_result::HealthResultRecord;
use psiko_core::models::instrument::InstrumentId;
use psiko_core::models::profile::SessionProfile;
use psiko_instruments::instruments::naqr;
use psiko_instruments::scoring::{self, InstrumentScore, SubscaleScore, category};
use psiko_instruments::{Instrument, instrument};

/// The five scored instruments of one questionnaire run.
#[derive(Debug, Clone)]
pub struct RunScores {
    pub who5: InstrumentScore,
    pub gad7: InstrumentScore,
    pub k10: InstrumentScore,
    pub mbi: InstrumentScore,
    pub naqr: InstrumentScore,
}

impl RunScores {
    /// Score a session whose answer lists are fully populated.
    ///
    /// Panics if any list is incomplete — the engine only calls this at the
    /// end of the questionnaire sequence.
    pub fn from_profile(profile: &SessionProfile) -> RunScores {
        RunScores {
            who5: scoring::score(InstrumentId::Who5, &profile.who5_scores),
            gad7: scoring::score(InstrumentId::Gad7, &profile.gad7_scores),
            k10: scoring::score(InstrumentId::K10, &profile.k10_scores),
            mbi: scoring::score(InstrumentId::Mbi, &profile.mbi_scores),
            naqr: scoring::score(InstrumentId::Naqr, &profile.naqr_scores),
        }
    }

    /// Reconstruct scores from a persisted record. Raw answers are gone, so
    /// instrument totals are rebuilt from the stored subscale totals.
    pub fn from_record(record: &HealthResultRecord) -> RunScores {
        RunScores {
            who5: from_total(InstrumentId::Who5, record.who5_total),
            gad7: from_total(InstrumentId::Gad7, record.gad7_total),
            k10: from_total(InstrumentId::K10, record.k10_total),
            mbi: from_subtotals(
                InstrumentId::Mbi,
                &[
                    ("emosional", record.mbi_emosional_total),
                    ("sinis", record.mbi_sinis_total),
                    ("pencapaian", record.mbi_pencapaian_total),
                ],
            ),
            naqr: from_subtotals(
                InstrumentId::Naqr,
                &[
                    ("pribadi", record.naqr_pribadi_total),
                    ("pekerjaan", record.naqr_pekerjaan_total),
                    ("intimidasi", record.naqr_intimidasi_total),
                ],
            ),
        }
    }

    /// Assemble the record persisted for this run.
    pub fn to_record(&self, user_id: i64) -> HealthResultRecord {
        let sub = |score: &InstrumentScore, id: &str| {
            score
                .subtotal(id)
                .expect("subscale defined by the instrument catalog")
        };
        HealthResultRecord {
            user_id,
            who5_total: self.who5.total,
            gad7_total: self.gad7.total,
            k10_total: self.k10.total,
            mbi_emosional_total: sub(&self.mbi, "emosional"),
            mbi_sinis_total: sub(&self.mbi, "sinis"),
            mbi_pencapaian_total: sub(&self.mbi, "pencapaian"),
            naqr_pribadi_total: sub(&self.naqr, "pribadi"),
            naqr_pekerjaan_total: sub(&self.naqr, "pekerjaan"),
            naqr_intimidasi_total: sub(&self.naqr, "intimidasi"),
            created_at: jiff::Timestamp::now(),
        }
    }
}

fn from_total(id: InstrumentId, total: i32) -> InstrumentScore {
    InstrumentScore {
        total,
        category: category(instrument(id).bands(), total),
        subscales: Vec::new(),
    }
}

fn from_subtotals(id: InstrumentId, subtotals: &[(&str, i32)]) -> InstrumentScore {
    let def = instrument(id);
    let subscales: Vec<SubscaleScore> = def
        .subscales()
        .iter()
        .map(|s| {
            let total = subtotals
                .iter()
                .find(|(sub_id, _)| *sub_id == s.id)
                .map(|(_, t)| *t)
                .unwrap_or(0);
            SubscaleScore {
                id: s.id,
                name: s.name,
                total,
                category: (!s.bands.is_empty()).then(|| category(s.bands, total)),
            }
        })
        .collect();
    let total: i32 = subscales.iter().map(|s| s.total).sum();
    InstrumentScore {
        total,
        category: category(def.bands(), total),
        subscales,
    }
}

// ── Rendering ────────────────────────────────────────────────────────────────

/// The completion summary shown after the terminal questionnaire step.
pub fn render_summary(scores: &RunScores, profile: &SessionProfile) -> String {
    let mut out = String::from("✨ Survey Selesai!\n\n");
    out.push_str(&instrument_blocks(scores));
    if let Some(extras) = bullying_extras(profile) {
        out.push_str(&extras);
    }
    out.push_str(
        "Sekarang Anda bisa bertanya tentang Psiko.\nKetik /help untuk melihat panduan lengkap.",
    );
    out
}

/// The `/profile` view: biodata plus the latest (or current) scored run.
pub fn render_profile(profile: &SessionProfile, scores: &RunScores) -> String {
    let biodata_text: String = profile
        .biodata
        .iter()
        .map(|(key, val)| format!("*{}:* {}\n", title_case(key), val))
        .collect();

    let mut out = String::from("👤 Profil Anda\n\n");
    out.push_str(&format!("*BIODATA*\n{biodata_text}\n"));
    out.push_str(&instrument_blocks(scores));
    out.push_str("Gunakan /reset untuk mengatur ulang profil.");
    out
}

fn instrument_blocks(scores: &RunScores) -> String {
    let mut out = String::new();
    out.push_str(&total_block(InstrumentId::Who5, &scores.who5));
    out.push_str(&total_block(InstrumentId::Gad7, &scores.gad7));
    out.push_str(&total_block(InstrumentId::K10, &scores.k10));
    out.push_str(&mbi_block(&scores.mbi));
    out.push_str(&naqr_block(&scores.naqr));
    out
}

fn total_block(id: InstrumentId, score: &InstrumentScore) -> String {
    let def = instrument(id);
    format!(
        "*{}*\nSkor: {} dari {}\nKategori: *{}*\n\n",
        def.name(),
        score.total,
        def.max_total(),
        score.category,
    )
}

fn mbi_block(score: &InstrumentScore) -> String {
    let mut out = format!("*{}*\n", instrument(InstrumentId::Mbi).name());
    for sub in &score.subscales {
        out.push_str(&format!(
            "{}: {} ({})\n",
            sub.name,
            sub.total,
            sub.category.unwrap_or("-"),
        ));
    }
    out.push_str(&format!(
        "Total Skor: {} ({})\n\n",
        score.total, score.category
    ));
    out
}

fn naqr_block(score: &InstrumentScore) -> String {
    let mut out = format!("*{}*\n", instrument(InstrumentId::Naqr).name());
    for sub in &score.subscales {
        out.push_str(&format!("{}: {}\n", sub.name, sub.total));
    }
    out.push_str(&format!(
        "Total Skor: {}\nKategori: *{}*\n\n",
        score.total, score.category
    ));
    out
}

/// The unscored NAQ-R trailing items, surfaced only here.
fn bullying_extras(profile: &SessionProfile) -> Option<String> {
    let experience = profile.naqr_experience?;
    let label = naqr::EXPERIENCE_OPTIONS
        .iter()
        .find(|o| o.value == experience)
        .map(|o| o.label)
        .unwrap_or("-");

    let mut out = format!("*Pengalaman Perundungan*\nPengalaman: {label}\n");
    if let Some(actors) = &profile.naqr_bully_actors {
        out.push_str(&format!("Pelaku: {actors}\n"));
    }
    if let Some(count) = &profile.naqr_bully_count {
        out.push_str(&format!("Jumlah pelaku: {count}\n"));
    }
    out.push('\n');
    Some(out)
}

fn title_case(key: &str) -> String {
    key.split('_')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
