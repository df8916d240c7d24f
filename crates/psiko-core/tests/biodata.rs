use psiko_core::models::biodata::{next_missing_field, Biodata, BiodataField, JABATAN_OTHER};

#[test]
fn empty_biodata_starts_at_inisial() {
    // Email is captured at registration, so the flow starts at the second field.
    assert_eq!(next_missing_field(&Biodata::new()), Some(BiodataField::Inisial));
}

#[test]
fn fields_are_asked_in_collection_order() {
    let mut b = Biodata::new();
    b.insert("inisial".into(), "AN".into());
    assert_eq!(next_missing_field(&b), Some(BiodataField::NoWa));
    b.insert("no_wa".into(), "081234567890".into());
    assert_eq!(next_missing_field(&b), Some(BiodataField::Usia));
}

#[test]
fn jabatan_lain_skipped_for_listed_jabatan() {
    let mut b = Biodata::new();
    for field in [
        BiodataField::Inisial,
        BiodataField::NoWa,
        BiodataField::Usia,
        BiodataField::JenisKelamin,
        BiodataField::Pendidikan,
        BiodataField::LamaBekerja,
        BiodataField::StatusPegawai,
    ] {
        b.insert(field.key().into(), "x".into());
    }
    b.insert("jabatan".into(), "Perawat Pelaksana".into());
    assert_eq!(next_missing_field(&b), Some(BiodataField::UnitRuangan));
}

#[test]
fn jabatan_lain_asked_when_jabatan_is_other() {
    let mut b = Biodata::new();
    for field in [
        BiodataField::Inisial,
        BiodataField::NoWa,
        BiodataField::Usia,
        BiodataField::JenisKelamin,
        BiodataField::Pendidikan,
        BiodataField::LamaBekerja,
        BiodataField::StatusPegawai,
    ] {
        b.insert(field.key().into(), "x".into());
    }
    b.insert("jabatan".into(), JABATAN_OTHER.into());
    assert_eq!(next_missing_field(&b), Some(BiodataField::JabatanLain));
}

#[test]
fn resume_lands_on_first_missing_field() {
    // A partially saved profile resumes exactly where it stopped.
    let mut b = Biodata::new();
    for key in ["inisial", "no_wa", "usia", "jenis_kelamin", "pendidikan"] {
        b.insert(key.into(), "x".into());
    }
    assert_eq!(next_missing_field(&b), Some(BiodataField::LamaBekerja));
}

#[test]
fn complete_biodata_has_no_missing_field() {
    let mut b = Biodata::new();
    for field in BiodataField::ALL {
        if field == BiodataField::Email || field == BiodataField::JabatanLain {
            continue;
        }
        b.insert(field.key().into(), "x".into());
    }
    b.insert("jabatan".into(), "Kepala Ruangan".into());
    assert_eq!(next_missing_field(&b), None);
}
