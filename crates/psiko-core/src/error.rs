use thiserror::Error;

/// Biodata validation failures. The messages are shown verbatim to the
/// respondent, so they are written in the language of the channel.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Kolom '{0}' belum diisi.")]
    MissingField(&'static str),

    #[error("Format email tidak valid.")]
    InvalidEmail,

    #[error("Format nomor WhatsApp tidak valid. Contoh: 081234567890 atau +6281234567890.")]
    InvalidPhone,

    #[error("Usia harus berupa angka.")]
    AgeNotNumeric,

    #[error("Usia harus antara 18 dan 65 tahun.")]
    AgeOutOfRange,

    #[error("Laki-laki tidak bisa hamil.")]
    MalePregnancy,
}
