//! Profile context builder for chat conversations.
//!
//! Assembles the respondent's biodata, latest questionnaire result, and
//! stress-factor analysis into a structured block prepended to the
//! assistant's prompt, so answers can take the profile into account.

use psiko_core::models::profile::SessionProfile;

use crate::analysis::stress_factors;
use crate::summary::RunScores;

/// Build a structured context block from a session profile.
///
/// Returns an empty string when there is no completed result to ground on.
pub fn build_profile_context(profile: &SessionProfile) -> String {
    let Some(record) = profile.latest_result() else {
        return String::new();
    };
    let scores = RunScores::from_record(record);

    let mut block = String::from("<profil_responden>\n");

    if !profile.biodata.is_empty() {
        block.push_str("<biodata>\n");
        for (key, val) in &profile.biodata {
            block.push_str(&format!("{key}: {val}\n"));
        }
        block.push_str("</biodata>\n");
    }

    block.push_str("<hasil_kuesioner>\n");
    block.push_str(&format!(
        "WHO-5: {} ({})\n",
        scores.who5.total, scores.who5.category
    ));
    block.push_str(&format!(
        "GAD-7: {} ({})\n",
        scores.gad7.total, scores.gad7.category
    ));
    block.push_str(&format!(
        "K10: {} ({})\n",
        scores.k10.total, scores.k10.category
    ));
    for sub in &scores.mbi.subscales {
        block.push_str(&format!(
            "MBI {}: {} ({})\n",
            sub.name,
            sub.total,
            sub.category.unwrap_or("-"),
        ));
    }
    for sub in &scores.naqr.subscales {
        block.push_str(&format!("NAQ-R {}: {}\n", sub.name, sub.total));
    }
    block.push_str(&format!(
        "NAQ-R Total: {} ({})\n",
        scores.naqr.total, scores.naqr.category
    ));
    block.push_str("</hasil_kuesioner>\n");

    block.push_str("<analisis_stres>\n");
    for reason in stress_factors(record) {
        block.push_str(&format!("- {reason}\n"));
    }
    block.push_str("</analisis_stres>\n");

    block.push_str("</profil_responden>");
    block
}
