use psiko_core::models::instrument::InstrumentId;
use psiko_core::models::option::AnswerOption;

use crate::scoring::{Band, band};
use crate::Instrument;

/// WHO-5 Well-Being Index. Five items on a 1–6 scale, reverse-labeled
/// ("Setiap Saat" = 6 down to "Tidak Pernah" = 1). Total 5–30; lower totals
/// indicate depressive symptoms.
pub struct Who5;

static QUESTIONS: [&str; 5] = [
    "14. Saya merasa ceria dan bersemangat",
    "15. Saya merasa tenang dan rileks",
    "16. Saya merasa aktif dan penuh semangat",
    "17. Saya bangun dengan perasaan segar dan cukup istirahat",
    "18. Kehidupan sehari-hari saya dipenuhi dengan hal-hal yang menarik minat saya",
];

static OPTIONS: [AnswerOption; 6] = [
    AnswerOption::new("Setiap Saat", 6),
    AnswerOption::new("Sering Sekali", 5),
    AnswerOption::new("Sering", 4),
    AnswerOption::new("Cukup Sering", 3),
    AnswerOption::new("Kadang-Kadang", 2),
    AnswerOption::new("Tidak Pernah", 1),
];

static BANDS: [Band; 4] = [
    band(11, "Gejala Depresi Berat"),
    band(13, "Gejala Depresi Sedang"),
    band(15, "Gejala Depresi Ringan"),
    band(i32::MAX, "Tidak ada gejala Depresi"),
];

impl Instrument for Who5 {
    fn id(&self) -> InstrumentId {
        InstrumentId::Who5
    }

    fn name(&self) -> &'static str {
        "WHO-5 WELL-BEING INDEX"
    }

    fn header(&self) -> &'static str {
        "Selama 2 minggu terakhir, seberapa sering Anda mengalami perasaan berikut?"
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
