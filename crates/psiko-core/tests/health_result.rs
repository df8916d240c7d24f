use psiko_core::models::health_result::HealthResultRecord;

#[test]
fn instrument_totals_are_derived_from_subscales() {
    let record = HealthResultRecord {
        user_id: 1,
        who5_total: 20,
        gad7_total: 7,
        k10_total: 20,
        mbi_emosional_total: 9,
        mbi_sinis_total: 5,
        mbi_pencapaian_total: 8,
        naqr_pribadi_total: 11,
        naqr_pekerjaan_total: 7,
        naqr_intimidasi_total: 4,
        created_at: jiff::Timestamp::now(),
    };
    assert_eq!(record.mbi_total(), 22);
    assert_eq!(record.naqr_total(), 22);
}
