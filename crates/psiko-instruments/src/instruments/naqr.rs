use psiko_core::models::instrument::InstrumentId;
use psiko_core::models::option::AnswerOption;

use crate::scoring::{Band, Subscale, band};
use crate::Instrument;

/// NAQ-R: Negative Acts Questionnaire-Revised. 22 scored items on a 1–5
/// frequency scale, split into person-related, work-related, and
/// intimidation subscales (reported as bare totals).
///
/// Three supplementary items follow the scored block: a bullying-experience
/// rating (item 80, its own 1–5 label scale) and two free-text items (81
/// and 82). None of the three contribute to any total.
pub struct Naqr;

static QUESTIONS: [&str; 22] = [
    "58. Seseorang menahan informasi yang mempengaruhi ke kinerja Saya",
    "59. Saya dipermalukan atau ditertawakan karena hal yang berkaitan dengan pekerjaan saya",
    "60. Saya diperintahkan untuk melakukan pekerjaan di bawah tingkat kompetensi Saya",
    "61. Tanggung jawab utama Saya dihilangkan atau diganti dengan tugas yang lebih remeh/ tidak penting/ rendah/ tidak menyenangkan",
    "62. Ada yang menyebarkan gosip dan desas desus tentang saya",
    "63. Saya diabaikan atau dikucilkan (dianggap tidak ada) di lingkungan kerja saya",
    "64. Saya dihina atau menerima kata-kata kasar tentang diri saya (misalnya tentang kebiasaan dan latar belakang saya, sikap, atau kehidupan pribadi saya)",
    "65. Saya dibentak atau menjadi target kemarahan spontan (atau amukan spontan)",
    "66. Saya menerima perlakuan yang intimidatif seperti ditunjuk-tunjuk, pelanggaran ruang pribadi/privasi, didorong, dihambat/dihalangi saat berjalan",
    "67. Saya menerima kata-kata sindiran atau tanda-tanda dari rekan lain bahwa saya seharusnya mengundurkan diri dari pekerjaan saya",
    "68. Saya terus menerus diingatkan pada kesalahan dan kelalaian saya",
    "69. Saya diabaikan atau menerima reaksi yang tidak bersahabat ketika saya mendekati seseorang",
    "70. Saya terus menerus menerima kritikan terkait pekerjaan dan usaha saya",
    "71. Pendapat dan pandangan saya tidak didengar",
    "72. Saya menjadi korban lelucon orang-orang yang tidak cocok dengan saya",
    "73. Saya diberi tugas dengan target atau tenggat waktu yang tidak masuk akal",
    "74. Saya pernah dituduh berbuat salah atau ilegal tanpa bukti",
    "75. Saya diawasi secara berlebihan di tempat kerja saya",
    "76. Saya tidak diperbolehkan untuk mengambil apa yang menjadi hak saya di tempat kerja (misalnya cuti sakit, hak libur, biaya perjalanan)",
    "77. Saya menjadi target ejekan dan sindiran kasar (sarcasm)",
    "78. Saya diberi beban kerja yang tidak mungkin dapat saya kelola",
    "79. Saya menerima ancaman kekerasan atau pelecehan secara fisik atau verbal/ ujaran (perkataan)",
];

static OPTIONS: [AnswerOption; 5] = [
    AnswerOption::new("Tidak Pernah", 1),
    AnswerOption::new("Kadang-kadang", 2),
    AnswerOption::new("Setiap Bulan", 3),
    AnswerOption::new("Setiap Minggu", 4),
    AnswerOption::new("Setiap Hari", 5),
];

static BANDS: [Band; 4] = [
    band(33, "Rendah/Tidak ada"),
    band(55, "Sedang"),
    band(77, "Tinggi"),
    band(i32::MAX, "Sangat tinggi"),
];

static SUBSCALES: [Subscale; 3] = [
    Subscale {
        id: "pribadi",
        name: "Perundungan Pribadi",
        items: &[1, 4, 5, 6, 8, 9, 11, 14, 16, 19, 21],
        bands: &[],
    },
    Subscale {
        id: "pekerjaan",
        name: "Perundungan Pekerjaan",
        items: &[0, 2, 3, 13, 15, 18, 20],
        bands: &[],
    },
    Subscale {
        id: "intimidasi",
        name: "Intimidasi",
        items: &[7, 10, 12, 17],
        bands: &[],
    },
];

/// Item 80: bullying experience over the last six months.
pub static EXPERIENCE_QUESTION: &str = "80. Apakah Anda pernah mengalami perundungan di tempat kerja dalam enam bulan terakhir? (Gunakan definisi perundungan sebagaimana dijelaskan)";

/// Label scale for item 80. The numeric values are recorded verbatim and
/// never enter any subscale or total.
pub static EXPERIENCE_OPTIONS: [AnswerOption; 5] = [
    AnswerOption::new("Tidak", 1),
    AnswerOption::new("Ya, tapi jarang", 2),
    AnswerOption::new("Ya, kadang-kadang", 3),
    AnswerOption::new("Ya, beberapa kali per minggu", 4),
    AnswerOption::new("Ya, hampir tiap hari", 5),
];

/// Item 81, free text.
pub static ACTORS_QUESTION: &str = "81. Siapa saja yang melakukan perundungan terhadap Anda? (Boleh lebih dari satu)\n(Sebutkan nama/jabatan, pisahkan dengan koma jika lebih dari satu)";

/// Suggested answer categories for item 81, shown alongside the free-text
/// prompt on channels that support it.
pub static BULLY_ACTORS: [&str; 6] = [
    "Atasan langsung saya",
    "Atasan/manajer lain dalam organisasi",
    "Rekan kerja",
    "Bawahan",
    "Pelanggan/Pasien/Pelajar, dll",
    "Yang lain (tuliskan)",
];

/// Item 82, free text.
pub static COUNT_QUESTION: &str = "82. Sebutkan jumlah pelaku perundungan terhadap Anda (laki-laki dan perempuan)\n(Contoh: 2 laki-laki, 1 perempuan)";

impl Instrument for Naqr {
    fn id(&self) -> InstrumentId {
        InstrumentId::Naqr
    }

    fn name(&self) -> &'static str {
        "NAQ-R (Negative Acts Questionnaire-Revised)"
    }

    fn header(&self) -> &'static str {
        "Selama enam bulan terakhir, seberapa sering Anda mengalami tindakan negatif berikut di tempat kerja?"
    }

    fn questions(&self) -> &'static [&'static str] {
        &QUESTIONS
    }

    fn options(&self) -> &'static [AnswerOption] {
        &OPTIONS
    }

    fn subscales(&self) -> &'static [Subscale] {
        &SUBSCALES
    }

    fn bands(&self) -> &'static [Band] {
        &BANDS
    }
}
