//! Stress-factor analysis over a scored result.
//!
//! Produces plain-language observations used to enrich the assistant's
//! profile context. Thresholds follow the instruments' interpretation
//! guidance: WHO-5 at or below the moderate-depression band, GAD-7 from the
//! moderate band up, high MBI exhaustion/cynicism or low accomplishment,
//! elevated NAQ-R person-directed or intimidation subtotals, and K10 from
//! the upper-moderate range.

use psiko_core::models::health_result::HealthResultRecord;
use psiko_core::models::instrument::InstrumentId;
use psiko_instruments::scoring::category_from_total;

/// Plain-language stress-contributing factors for a completed result.
/// Never empty: a profile without notable factors gets a neutral line.
pub fn stress_factors(record: &HealthResultRecord) -> Vec<String> {
    let mut reasons = Vec::new();

    if record.who5_total <= 13 {
        reasons.push(
            "Skor WHO-5 Anda menunjukkan gejala depresi atau penurunan kesejahteraan.".to_string(),
        );
    }
    if record.gad7_total >= 10 {
        reasons.push("Skor GAD-7 Anda menunjukkan kecemasan sedang atau berat.".to_string());
    }

    let mbi_cat = |subscale: &str, total: i32| {
        category_from_total(InstrumentId::Mbi, Some(subscale), total).unwrap_or("-")
    };
    if mbi_cat("emosional", record.mbi_emosional_total) == "Tinggi" {
        reasons.push(
            "Kelelahan emosional Anda tinggi, ini bisa menjadi faktor stres.".to_string(),
        );
    }
    if mbi_cat("sinis", record.mbi_sinis_total) == "Tinggi" {
        reasons.push(
            "Sikap sinis terhadap pekerjaan/lingkungan tinggi, bisa memicu stres.".to_string(),
        );
    }
    if mbi_cat("pencapaian", record.mbi_pencapaian_total) == "Rendah" {
        reasons.push(
            "Perasaan pencapaian pribadi rendah, bisa berkontribusi pada stres.".to_string(),
        );
    }

    if record.naqr_pribadi_total > 20 || record.naqr_intimidasi_total > 10 {
        reasons.push("Ada indikasi perundungan atau intimidasi yang cukup tinggi.".to_string());
    }

    if record.k10_total >= 22 {
        let cat = category_from_total(InstrumentId::K10, None, record.k10_total).unwrap_or("-");
        reasons.push(format!(
            "Skor K10 Anda menunjukkan distres psikososial {cat}."
        ));
    }

    if reasons.is_empty() {
        reasons.push(
            "Profil Anda tidak menunjukkan faktor stres yang sangat menonjol, namun faktor lain bisa berperan."
                .to_string(),
        );
    }

    reasons
}
