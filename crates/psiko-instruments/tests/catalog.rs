use psiko_core::models::instrument::InstrumentId;
use psiko_instruments::{all_instruments, catalog, instrument};

#[test]
fn item_counts_match_the_forms() {
    assert_eq!(catalog::item_count(InstrumentId::Who5), 5);
    assert_eq!(catalog::item_count(InstrumentId::Gad7), 7);
    assert_eq!(catalog::item_count(InstrumentId::K10), 10);
    assert_eq!(catalog::item_count(InstrumentId::Mbi), 22);
    assert_eq!(catalog::item_count(InstrumentId::Naqr), 22);
}

#[test]
fn administration_order_is_fixed() {
    let ids: Vec<InstrumentId> = all_instruments().iter().map(|i| i.id()).collect();
    assert_eq!(
        ids,
        vec![
            InstrumentId::Who5,
            InstrumentId::Gad7,
            InstrumentId::K10,
            InstrumentId::Mbi,
            InstrumentId::Naqr,
        ]
    );
}

#[test]
fn question_prepends_recall_header() {
    let q = catalog::question(InstrumentId::Who5, 0).unwrap();
    assert!(q.starts_with("Selama 2 minggu terakhir"));
    assert!(q.contains("14. Saya merasa ceria dan bersemangat"));
}

#[test]
fn question_out_of_range_is_none() {
    assert_eq!(catalog::question(InstrumentId::Who5, 5), None);
    assert_eq!(catalog::question(InstrumentId::Naqr, 22), None);
}

#[test]
fn who5_options_are_reverse_valued() {
    let options = catalog::options(InstrumentId::Who5);
    assert_eq!(options[0].label, "Setiap Saat");
    assert_eq!(options[0].value, 6);
    assert_eq!(options[5].label, "Tidak Pernah");
    assert_eq!(options[5].value, 1);
}

#[test]
fn subscale_indices_are_within_range_and_disjoint() {
    for id in [InstrumentId::Mbi, InstrumentId::Naqr] {
        let def = instrument(id);
        let mut seen = vec![false; def.item_count()];
        for sub in def.subscales() {
            for &i in sub.items {
                assert!(i < def.item_count(), "{id} {} index {i} out of range", sub.id);
                assert!(!seen[i], "{id} index {i} claimed twice");
                seen[i] = true;
            }
        }
        assert!(seen.iter().all(|&s| s), "{id} subscales do not cover all items");
    }
}

#[test]
fn subscale_lookup_by_id() {
    let emosional = catalog::subscale_indices(InstrumentId::Mbi, "emosional").unwrap();
    assert_eq!(emosional, &[0, 1, 2, 3, 4, 5, 6, 7, 8][..]);
    assert!(catalog::subscale_indices(InstrumentId::Mbi, "missing").is_err());
    assert!(catalog::subscale_indices(InstrumentId::Who5, "emosional").is_err());
}

#[test]
fn max_totals() {
    assert_eq!(instrument(InstrumentId::Who5).max_total(), 30);
    assert_eq!(instrument(InstrumentId::Gad7).max_total(), 21);
    assert_eq!(instrument(InstrumentId::K10).max_total(), 50);
    assert_eq!(instrument(InstrumentId::Mbi).max_total(), 132);
    assert_eq!(instrument(InstrumentId::Naqr).max_total(), 110);
}
