use psiko_core::models::instrument::InstrumentId;
use psiko_core::models::option::AnswerOption;

use crate::scoring::{Band, band};
use crate::Instrument;

/// GAD-7: Generalized Anxiety Disorder scale. Seven items, 0–3 each,
/// total 0–21.
pub struct Gad7;

static QUESTIONS: [&str; 7] = [
    "19. Merasa gugup, cemas atau gelisah",
    "20. Tidak mampu menghentikan atau mengendalikan kekhawatiran",
    "21. Terlalu khawatir tentang berbagai hal ",
    "22. Kesulitan bersantai",
    "23. Menjadi begitu gelisah sehingga sulit untuk duduk diam ",
    "24. Menjadi mudah tersinggung",
    "25. Merasa takut seolah-olah sesuatu yang buruk akan terjadi",
];

static OPTIONS: [AnswerOption; 4] = [
    AnswerOption::new("Sama sekali tidak", 0),
    AnswerOption::new("Beberapa hari", 1),
    AnswerOption::new("Lebih dari setengah hari", 2),
    AnswerOption::new("Hampir setiap hari", 3),
];

static BANDS: [Band; 4] = [
    band(4, "Minimal"),
    band(9, "Ringan"),
    band(14, "Sedang"),
    band(i32::MAX, "Berat"),
];

impl Instrument for Gad7 {
    fn id(&self) -> InstrumentId {
        InstrumentId::Gad7
    }

    fn name(&self) -> &'static str {
        "GAD-7 (Generalized Anxiety Disorder)"
    }

    fn header(&self) -> &'static str {
        "Selama 2 minggu terakhir, seberapa sering Anda terganggu oleh masalah berikut?"
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
