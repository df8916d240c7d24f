use psiko_core::models::instrument::InstrumentId;
use psiko_instruments::scoring::{category_from_total, score};

#[test]
fn who5_all_best_answers() {
    let result = score(InstrumentId::Who5, &[6, 6, 6, 6, 6]);
    assert_eq!(result.total, 30);
    assert_eq!(result.category, "Tidak ada gejala Depresi");
    assert!(result.subscales.is_empty());
}

#[test]
fn who5_all_worst_answers() {
    let result = score(InstrumentId::Who5, &[1, 1, 1, 1, 1]);
    assert_eq!(result.total, 5);
    assert_eq!(result.category, "Gejala Depresi Berat");
}

#[test]
fn who5_band_boundaries() {
    // 11 is the last severe total, 12 the first moderate one.
    assert_eq!(score(InstrumentId::Who5, &[1, 2, 2, 3, 3]).category, "Gejala Depresi Berat");
    assert_eq!(score(InstrumentId::Who5, &[2, 2, 2, 3, 3]).category, "Gejala Depresi Sedang");
    assert_eq!(score(InstrumentId::Who5, &[2, 2, 3, 3, 4]).category, "Gejala Depresi Ringan");
    assert_eq!(
        score(InstrumentId::Who5, &[2, 3, 3, 4, 4]).category,
        "Tidak ada gejala Depresi"
    );
}

#[test]
fn gad7_minimal_and_severe() {
    assert_eq!(score(InstrumentId::Gad7, &[0; 7]).total, 0);
    assert_eq!(score(InstrumentId::Gad7, &[0; 7]).category, "Minimal");
    assert_eq!(score(InstrumentId::Gad7, &[3; 7]).total, 21);
    assert_eq!(score(InstrumentId::Gad7, &[3; 7]).category, "Berat");
}

#[test]
fn gad7_band_boundaries() {
    assert_eq!(category_from_total(InstrumentId::Gad7, None, 4), Ok("Minimal"));
    assert_eq!(category_from_total(InstrumentId::Gad7, None, 5), Ok("Ringan"));
    assert_eq!(category_from_total(InstrumentId::Gad7, None, 9), Ok("Ringan"));
    assert_eq!(category_from_total(InstrumentId::Gad7, None, 10), Ok("Sedang"));
    assert_eq!(category_from_total(InstrumentId::Gad7, None, 14), Ok("Sedang"));
    assert_eq!(category_from_total(InstrumentId::Gad7, None, 15), Ok("Berat"));
}

#[test]
fn k10_floor_is_ten_not_zero() {
    // K10 answers start at 1, so all-lowest yields 10.
    let result = score(InstrumentId::K10, &[1; 10]);
    assert_eq!(result.total, 10);
    assert_eq!(result.category, "rendah");
}

#[test]
fn k10_band_boundaries() {
    assert_eq!(category_from_total(InstrumentId::K10, None, 15), Ok("rendah"));
    assert_eq!(category_from_total(InstrumentId::K10, None, 16), Ok("sedang"));
    assert_eq!(category_from_total(InstrumentId::K10, None, 21), Ok("sedang"));
    assert_eq!(category_from_total(InstrumentId::K10, None, 22), Ok("tinggi"));
    assert_eq!(category_from_total(InstrumentId::K10, None, 29), Ok("tinggi"));
    assert_eq!(category_from_total(InstrumentId::K10, None, 30), Ok("sangat tinggi"));
}

#[test]
fn mbi_subscale_membership() {
    // Sentinel answers: answer at index i is i, so each subtotal equals the
    // sum of the subscale's index set. A drift in any index set fails here.
    let answers: Vec<i32> = (0..22).collect();
    let result = score(InstrumentId::Mbi, &answers);

    assert_eq!(result.subtotal("emosional"), Some((0..=8).sum()));
    assert_eq!(result.subtotal("pencapaian"), Some((9..=16).sum()));
    assert_eq!(result.subtotal("sinis"), Some((17..=21).sum()));
    assert_eq!(
        result.total,
        result.subtotal("emosional").unwrap()
            + result.subtotal("pencapaian").unwrap()
            + result.subtotal("sinis").unwrap()
    );
}

#[test]
fn mbi_subscale_categories() {
    let all_zero = score(InstrumentId::Mbi, &[0; 22]);
    for sub in &all_zero.subscales {
        assert_eq!(sub.category, Some("Rendah"), "subscale {}", sub.id);
    }
    assert_eq!(all_zero.category, "Rendah");

    let all_max = score(InstrumentId::Mbi, &[6; 22]);
    for sub in &all_max.subscales {
        assert_eq!(sub.category, Some("Tinggi"), "subscale {}", sub.id);
    }
    assert_eq!(all_max.category, "Tinggi");
}

#[test]
fn mbi_subscale_boundary_totals() {
    assert_eq!(category_from_total(InstrumentId::Mbi, Some("emosional"), 14), Ok("Rendah"));
    assert_eq!(category_from_total(InstrumentId::Mbi, Some("emosional"), 15), Ok("Sedang"));
    assert_eq!(category_from_total(InstrumentId::Mbi, Some("emosional"), 24), Ok("Tinggi"));
    assert_eq!(category_from_total(InstrumentId::Mbi, Some("sinis"), 3), Ok("Rendah"));
    assert_eq!(category_from_total(InstrumentId::Mbi, Some("sinis"), 9), Ok("Tinggi"));
    assert_eq!(category_from_total(InstrumentId::Mbi, Some("pencapaian"), 11), Ok("Rendah"));
    assert_eq!(category_from_total(InstrumentId::Mbi, Some("pencapaian"), 19), Ok("Tinggi"));
}

#[test]
fn naqr_all_never_is_low() {
    let result = score(InstrumentId::Naqr, &[1; 22]);
    assert_eq!(result.total, 22);
    assert_eq!(result.category, "Rendah/Tidak ada");
}

#[test]
fn naqr_subscales_partition_all_items() {
    // The three index sets are disjoint and cover all 22 scored items, so
    // sentinel subtotals must sum to the instrument total.
    let answers: Vec<i32> = (1..=22).collect();
    let result = score(InstrumentId::Naqr, &answers);
    let subtotal_sum: i32 = result.subscales.iter().map(|s| s.total).sum();
    assert_eq!(subtotal_sum, result.total);
    assert_eq!(result.total, (1..=22).sum::<i32>());
}

#[test]
fn naqr_subscales_report_bare_totals() {
    let result = score(InstrumentId::Naqr, &[3; 22]);
    for sub in &result.subscales {
        assert_eq!(sub.category, None, "subscale {}", sub.id);
    }
}

#[test]
fn naqr_band_boundaries() {
    assert_eq!(category_from_total(InstrumentId::Naqr, None, 33), Ok("Rendah/Tidak ada"));
    assert_eq!(category_from_total(InstrumentId::Naqr, None, 34), Ok("Sedang"));
    assert_eq!(category_from_total(InstrumentId::Naqr, None, 55), Ok("Sedang"));
    assert_eq!(category_from_total(InstrumentId::Naqr, None, 56), Ok("Tinggi"));
    assert_eq!(category_from_total(InstrumentId::Naqr, None, 78), Ok("Sangat tinggi"));
}

#[test]
fn unknown_subscale_is_an_error() {
    assert!(category_from_total(InstrumentId::Mbi, Some("nope"), 0).is_err());
}

#[test]
fn bare_total_subscale_has_no_bands() {
    assert!(category_from_total(InstrumentId::Naqr, Some("pribadi"), 10).is_err());
}

#[test]
#[should_panic(expected = "expects 5 answers")]
fn incomplete_answer_list_panics() {
    score(InstrumentId::Who5, &[6, 6]);
}
