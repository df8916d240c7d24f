use psiko_core::models::instrument::InstrumentId;
use psiko_core::models::option::AnswerOption;

use crate::scoring::{Band, Subscale, band};
use crate::Instrument;

/// Maslach Burnout Inventory. 22 items on a 0–6 frequency scale, scored as
/// three subscales: emotional exhaustion (items 0–8), personal
/// accomplishment (9–16), and cynicism/depersonalization (17–21).
///
/// Two revisions of this form circulated with different Likert ranges and
/// subscale orderings; this is the canonical later revision (the one that
/// also carries the NAQ-R supplementary items).
pub struct Mbi;

static QUESTIONS: [&str; 22] = [
    // Kelelahan Emosional
    "36. Saya merasa emosi saya terkuras karena pekerjaan",
    "37. Menghadapi dan bekerja secara langsung dnegan orang menyebabkan saya stres",
    "38. Saya merasa seakan akan hidup dan karir saya tidak akan berubah ",
    "39. Pekerjaan sebagai pemberi jasa membuat saya merasa frustasi ",
    "40. Saya merasa bekerja terlampau keras dalam pekerjaan saya",
    "41. Menghadapi orang/klien dan bekerja untuk mereka seharian penuh membuat saya 'tertekan'",
    "42. Saya merasa jenuh dan 'burnout' karena pekerjaan saya",
    "43. Saya merasa lesu ketika bangun pagi karena harus menjalani hari di tempat kerja untuk menghadapi klien",
    "44. Saya merasakan kelelahan fisik yang amat sangat di akhir hari kerja",
    // Pencapaian Pribadi
    "45. Saya telah mendapatkan dan mengalami banyak hal yang berharga dalam pekerjaan ini",
    "46. Saya merasa sangat bersemangat dalam melakukan pekerjaan saya dan dalam menghadapi para klien saya",
    "47. Saya dengan mudah dapat memahami bagimana perasaan klien tentang hal hal ingin mereka penuhi dan mereka peroleh dari layanan yang saya berikan",
    "48. Saya bisa menjawab dan melayani klien saya dengan efektif",
    "49. Saya menghadapi masalah-masalah emosional dalam pekerjaan saya dengan tenang dan 'kepala dingin'",
    "50. Saya merasa memberikan pengaruh positif terhadap kehidupan orang lain melalui pekerjaan saya sebagai pemberi jasa",
    "51. Saya dengan mudah bisa menciptakan suasana yang santai/relaks dengan para klien",
    "52. Saya merasa gembira setelah melakukan tugas saya untuk para klien secara langsung",
    // Sikap Sinis
    "53. Saya merasa bahwa saya memperlakukan beberapa klien seolah mereka objek impersonal",
    "54. Saya merasa para pengguna menyalahkan saya atas masalah-masalah yang mereka alami",
    "55. Saya benar-benar tidak peduli pada apa yang terjadi terhadap klien saya",
    "56. Saya menjadi semakin 'kaku' terhadap orang lain sejak saya bekerja sebagai pemberi jasa",
    "57. Saya khawatir pekerjaan ini membuat saya 'dingin' secara emosional",
];

static OPTIONS: [AnswerOption; 7] = [
    AnswerOption::new("Tidak pernah", 0),
    AnswerOption::new("Beberapa kali dalam setahun", 1),
    AnswerOption::new("Sekali dalam sebulan", 2),
    AnswerOption::new("Beberapa Kali dalam sebulan", 3),
    AnswerOption::new("Sekali dalam seminggu", 4),
    AnswerOption::new("Beberapa kali dalam seminggu", 5),
    AnswerOption::new("Setiap hari", 6),
];

static EMOSIONAL_BANDS: [Band; 3] =
    [band(14, "Rendah"), band(23, "Sedang"), band(i32::MAX, "Tinggi")];
static SINIS_BANDS: [Band; 3] =
    [band(3, "Rendah"), band(8, "Sedang"), band(i32::MAX, "Tinggi")];
static PENCAPAIAN_BANDS: [Band; 3] =
    [band(11, "Rendah"), band(18, "Sedang"), band(i32::MAX, "Tinggi")];
static TOTAL_BANDS: [Band; 3] =
    [band(32, "Rendah"), band(49, "Sedang"), band(i32::MAX, "Tinggi")];

static SUBSCALES: [Subscale; 3] = [
    Subscale {
        id: "emosional",
        name: "Kelelahan Emosional",
        items: &[0, 1, 2, 3, 4, 5, 6, 7, 8],
        bands: &EMOSIONAL_BANDS,
    },
    Subscale {
        id: "sinis",
        name: "Sikap Sinis",
        items: &[17, 18, 19, 20, 21],
        bands: &SINIS_BANDS,
    },
    Subscale {
        id: "pencapaian",
        name: "Pencapaian Pribadi",
        items: &[9, 10, 11, 12, 13, 14, 15, 16],
        bands: &PENCAPAIAN_BANDS,
    },
];

impl Instrument for Mbi {
    fn id(&self) -> InstrumentId {
        InstrumentId::Mbi
    }

    fn name(&self) -> &'static str {
        "Maslach Burnout Inventory (MBI)"
    }

    fn header(&self) -> &'static str {
        "Seberapa sering Anda merasakan hal-hal berikut?"
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
        &TOTAL_BANDS
    }
}
