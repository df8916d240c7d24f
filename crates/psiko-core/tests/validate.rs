use psiko_core::error::ValidationError;
use psiko_core::models::biodata::{Biodata, BiodataField};
use psiko_core::validate::{is_valid_email, validate_biodata};

fn complete_biodata() -> Biodata {
    let mut b = Biodata::new();
    b.insert("inisial".into(), "AN".into());
    b.insert("no_wa".into(), "081234567890".into());
    b.insert("usia".into(), "30".into());
    b.insert("jenis_kelamin".into(), "Perempuan".into());
    b.insert("pendidikan".into(), "Ners".into());
    b.insert("lama_bekerja".into(), "5".into());
    b.insert("status_pegawai".into(), "ASN".into());
    b.insert("jabatan".into(), "Perawat Pelaksana".into());
    b.insert("unit_ruangan".into(), "ICU".into());
    b.insert("status_perkawinan".into(), "Menikah".into());
    b.insert("status_kehamilan".into(), "Tidak".into());
    b.insert("jumlah_anak".into(), "2".into());
    b
}

#[test]
fn complete_biodata_passes() {
    assert_eq!(validate_biodata(&complete_biodata()), Ok(()));
}

#[test]
fn missing_field_is_reported_by_key() {
    let mut b = complete_biodata();
    b.remove("unit_ruangan");
    assert_eq!(
        validate_biodata(&b),
        Err(ValidationError::MissingField("unit_ruangan"))
    );
}

#[test]
fn email_is_not_required_by_biodata_validation() {
    // Email is captured at registration, not in the biodata flow.
    let b = complete_biodata();
    assert!(!b.contains_key("email"));
    assert_eq!(validate_biodata(&b), Ok(()));
}

#[test]
fn phone_prefixes_accepted() {
    for no_wa in ["081234567890", "6281234567890", "+6281234567890"] {
        let mut b = complete_biodata();
        b.insert("no_wa".into(), no_wa.into());
        assert_eq!(validate_biodata(&b), Ok(()), "prefix case: {no_wa}");
    }
}

#[test]
fn phone_dashes_and_spaces_are_stripped() {
    let mut b = complete_biodata();
    b.insert("no_wa".into(), "0812-3456 7890".into());
    assert_eq!(validate_biodata(&b), Ok(()));
}

#[test]
fn phone_with_wrong_prefix_rejected() {
    let mut b = complete_biodata();
    b.insert("no_wa".into(), "071234567890".into());
    assert_eq!(validate_biodata(&b), Err(ValidationError::InvalidPhone));
}

#[test]
fn phone_too_short_rejected() {
    let mut b = complete_biodata();
    b.insert("no_wa".into(), "0812345".into());
    assert_eq!(validate_biodata(&b), Err(ValidationError::InvalidPhone));
}

#[test]
fn non_numeric_age_rejected() {
    let mut b = complete_biodata();
    b.insert("usia".into(), "tiga puluh".into());
    assert_eq!(validate_biodata(&b), Err(ValidationError::AgeNotNumeric));
}

#[test]
fn age_bounds_are_inclusive() {
    for usia in ["18", "65"] {
        let mut b = complete_biodata();
        b.insert("usia".into(), usia.into());
        assert_eq!(validate_biodata(&b), Ok(()), "boundary age {usia}");
    }
    for usia in ["17", "66"] {
        let mut b = complete_biodata();
        b.insert("usia".into(), usia.into());
        assert_eq!(
            validate_biodata(&b),
            Err(ValidationError::AgeOutOfRange),
            "out-of-range age {usia}"
        );
    }
}

#[test]
fn male_pregnancy_contradiction_rejected() {
    let mut b = complete_biodata();
    b.insert("jenis_kelamin".into(), "Laki-laki".into());
    b.insert("status_kehamilan".into(), "Ya".into());
    assert_eq!(validate_biodata(&b), Err(ValidationError::MalePregnancy));
}

#[test]
fn jabatan_lain_required_only_for_other_jabatan() {
    let mut b = complete_biodata();
    b.insert("jabatan".into(), "Yang lain".into());
    assert_eq!(
        validate_biodata(&b),
        Err(ValidationError::MissingField("jabatan_lain"))
    );

    b.insert("jabatan_lain".into(), "Perawat IGD".into());
    assert_eq!(validate_biodata(&b), Ok(()));
}

#[test]
fn validation_messages_are_plain_indonesian() {
    let err = ValidationError::MalePregnancy;
    let msg = err.to_string();
    assert!(msg.contains("hamil"), "unexpected message: {msg}");
}

#[test]
fn email_validation() {
    assert!(is_valid_email("nurse@rsup.example.id"));
    assert!(is_valid_email("a.b+tag@example.co"));
    assert!(!is_valid_email("not-an-email"));
    assert!(!is_valid_email("missing@tld"));
    assert!(!is_valid_email("@example.com"));
}

#[test]
fn biodata_field_options_match_choice_fields() {
    assert!(BiodataField::JenisKelamin.is_choice());
    assert!(!BiodataField::Inisial.is_choice());
    assert!(!BiodataField::JabatanLain.is_choice());
}
