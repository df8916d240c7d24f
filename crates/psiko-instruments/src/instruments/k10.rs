use psiko_core::models::instrument::InstrumentId;
use psiko_core::models::option::AnswerOption;

use crate::scoring::{Band, band};
use crate::Instrument;

/// Kessler K10 psychological distress scale. Ten items, 1–5 each,
/// total 10–50.
pub struct K10;

static QUESTIONS: [&str; 10] = [
    "26. Merasa sangat lelah tanpa alasan yang kuat?",
    "27. Merasa gugup/cemas?",
    "28. Merasa sangat gugup/cemas sampai-sampai tidak ada sesuatupun yang bisa menenangkan Anda?",
    "29. Merasa putus asa/tidak ada harapan?",
    "30. Merasa gelisah atau resah?",
    "31. Merasa sangat gelisah sampai-sampai Anda tidak bisa duduk dengan tenang?",
    "32. Merasa tertekan?",
    "33. Merasa sangat tertekan sampai-sampai tidak ada yang dapat membuat Anda ceria/terhibur?",
    "34. Merasakan bahwa semua yang diinginkan membutuhkan usaha keras?",
    "35. Merasa tidak berguna?",
];

static OPTIONS: [AnswerOption; 5] = [
    AnswerOption::new("Tidak Pernah", 1),
    AnswerOption::new("Jarang", 2),
    AnswerOption::new("Kadang-kadang", 3),
    AnswerOption::new("Hampir setiap saat", 4),
    AnswerOption::new("Setiap saat", 5),
];

static BANDS: [Band; 4] = [
    band(15, "rendah"),
    band(21, "sedang"),
    band(29, "tinggi"),
    band(i32::MAX, "sangat tinggi"),
];

impl Instrument for K10 {
    fn id(&self) -> InstrumentId {
        InstrumentId::K10
    }

    fn name(&self) -> &'static str {
        "Kessler (K10) Skala Gangguan Psikososial"
    }

    fn header(&self) -> &'static str {
        "Selama 30 hari terakhir, seberapa seringkah Anda?"
    }

    fn questions(&self) -> &'static [&'static str] {
        &QUESTIONS
    }

    fn options(&self) -> &'static [AnswerOption] {
        &OPTIONS
    }

    fn bands(&self) -> &'static [Band] {
        &BANDS
    }
}
