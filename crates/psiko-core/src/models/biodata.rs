//! Biodata field definitions.
//!
//! The demographic/employment profile collected once per account, in a fixed
//! order. Prompts and option labels match the paper questionnaire used at the
//! hospital, which is why they carry their original item numbers.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Sentinel option value that triggers the follow-up free-text field
/// [`BiodataField::JabatanLain`].
pub const JABATAN_OTHER: &str = "Yang lain";

/// Accumulated biodata, keyed by [`BiodataField::key`].
pub type Biodata = BTreeMap<String, String>;

/// One field of the biodata form, in collection order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum BiodataField {
    Email,
    Inisial,
    NoWa,
    Usia,
    JenisKelamin,
    Pendidikan,
    LamaBekerja,
    StatusPegawai,
    Jabatan,
    /// Asked only when `jabatan` is "Yang lain".
    JabatanLain,
    UnitRuangan,
    StatusPerkawinan,
    StatusKehamilan,
    JumlahAnak,
}

impl BiodataField {
    /// All fields in collection order. Email comes first but is captured
    /// during registration, not in the biodata flow itself.
    pub const ALL: [BiodataField; 14] = [
        BiodataField::Email,
        BiodataField::Inisial,
        BiodataField::NoWa,
        BiodataField::Usia,
        BiodataField::JenisKelamin,
        BiodataField::Pendidikan,
        BiodataField::LamaBekerja,
        BiodataField::StatusPegawai,
        BiodataField::Jabatan,
        BiodataField::JabatanLain,
        BiodataField::UnitRuangan,
        BiodataField::StatusPerkawinan,
        BiodataField::StatusKehamilan,
        BiodataField::JumlahAnak,
    ];

    /// Storage key, matching the `profiles` table column name.
    pub fn key(self) -> &'static str {
        match self {
            BiodataField::Email => "email",
            BiodataField::Inisial => "inisial",
            BiodataField::NoWa => "no_wa",
            BiodataField::Usia => "usia",
            BiodataField::JenisKelamin => "jenis_kelamin",
            BiodataField::Pendidikan => "pendidikan",
            BiodataField::LamaBekerja => "lama_bekerja",
            BiodataField::StatusPegawai => "status_pegawai",
            BiodataField::Jabatan => "jabatan",
            BiodataField::JabatanLain => "jabatan_lain",
            BiodataField::UnitRuangan => "unit_ruangan",
            BiodataField::StatusPerkawinan => "status_perkawinan",
            BiodataField::StatusKehamilan => "status_kehamilan",
            BiodataField::JumlahAnak => "jumlah_anak",
        }
    }

    /// The question shown to the respondent for this field.
    pub fn prompt(self) -> &'static str {
        match self {
            BiodataField::Email => "1. Masukkan Email Anda:",
            BiodataField::Inisial => "2. Masukkan Inisial Nama Anda:",
            BiodataField::NoWa => "3. Masukkan Nomor WhatsApp Aktif: (contoh: 081923456789)",
            BiodataField::Usia => "4. Masukkan Usia Anda (dalam tahun):",
            BiodataField::JenisKelamin => "5. Pilih Jenis Kelamin:",
            BiodataField::Pendidikan => "6. Pilih Pendidikan Terakhir:",
            BiodataField::LamaBekerja => {
                "7. Berapa lama Anda bekerja di RSUP M Djamil? (angka dalam tahun):"
            }
            BiodataField::StatusPegawai => "8. Pilih Status Kepegawaian:",
            BiodataField::Jabatan => "9. Pilih Jabatan Anda:",
            BiodataField::JabatanLain => "Jika jabatan Anda 'Yang lain', sebutkan:",
            BiodataField::UnitRuangan => "10. Masukkan Unit/Ruangan tempat Anda bekerja:",
            BiodataField::StatusPerkawinan => "11. Pilih Status Perkawinan:",
            BiodataField::StatusKehamilan => "12. Apakah Anda sedang hamil?",
            BiodataField::JumlahAnak => "13. Masukkan Jumlah Anak (ketik '0' jika belum ada):",
        }
    }

    /// Enumerated options for choice fields; `None` for free-text fields.
    pub fn options(self) -> Option<&'static [&'static str]> {
        match self {
            BiodataField::JenisKelamin => Some(&["Laki-laki", "Perempuan"]),
            BiodataField::Pendidikan => Some(&[
                "D3 Keperawatan",
                "Ners",
                "Magister Keperawatan",
                "Ners Spesialis",
            ]),
            BiodataField::StatusPegawai => Some(&["ASN", "Non ASN", "Yang lain"]),
            BiodataField::Jabatan => Some(&[
                "Kepala Ruangan",
                "Penanggung Jawab Mutu",
                "PPJA",
                "Ketua tim/PJ shift",
                "Perawat Pelaksana",
                "Yang lain",
            ]),
            BiodataField::StatusPerkawinan => Some(&[
                "Belum Menikah",
                "Menikah",
                "Cerai Mati",
                "Cerai Hidup",
            ]),
            BiodataField::StatusKehamilan => Some(&["Ya", "Tidak"]),
            _ => None,
        }
    }

    /// Whether this field is answered by selecting from a fixed option list.
    pub fn is_choice(self) -> bool {
        self.options().is_some()
    }

    /// Whether the field applies given the answers recorded so far.
    /// `jabatan_lain` only applies when `jabatan` is "Yang lain".
    pub fn applies(self, biodata: &Biodata) -> bool {
        match self {
            BiodataField::JabatanLain => {
                biodata.get(BiodataField::Jabatan.key()).map(String::as_str)
                    == Some(JABATAN_OTHER)
            }
            _ => true,
        }
    }
}

/// The next biodata field that still needs an answer, honoring the
/// `jabatan_lain` conditional. Email is excluded — it is captured at
/// registration. Returns `None` when the form is complete.
pub fn next_missing_field(biodata: &Biodata) -> Option<BiodataField> {
    BiodataField::ALL
        .into_iter()
        .filter(|f| *f != BiodataField::Email)
        .find(|f| f.applies(biodata) && !biodata.contains_key(f.key()))
}
