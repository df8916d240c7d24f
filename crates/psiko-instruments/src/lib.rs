//! psiko-instruments
//!
//! Questionnaire instrument definitions and scoring. Pure data — no I/O.
//! Defines the items, Likert options, subscale index sets, and category
//! thresholds for each supported instrument, plus the scoring functions
//! that map raw answer lists to totals and interpretation labels.

pub mod catalog;
pub mod error;
pub mod instruments;
pub mod scoring;

use psiko_core::models::instrument::InstrumentId;
use psiko_core::models::option::AnswerOption;
use scoring::{Band, Subscale};

/// Trait implemented by each questionnaire instrument.
pub trait Instrument: Send + Sync {
    fn id(&self) -> InstrumentId;

    /// Display name, e.g. `"WHO-5 WELL-BEING INDEX"`.
    fn name(&self) -> &'static str;

    /// Recall-period lead-in prepended to every item prompt.
    fn header(&self) -> &'static str;

    /// Scored items, in administration order.
    fn questions(&self) -> &'static [&'static str];

    /// The Likert scale shared by all of this instrument's scored items.
    fn options(&self) -> &'static [AnswerOption];

    /// Named subscales, in display order. Empty for single-total instruments.
    fn subscales(&self) -> &'static [Subscale] {
        &[]
    }

    /// Category thresholds for the instrument total.
    fn bands(&self) -> &'static [Band];

    fn item_count(&self) -> usize {
        self.questions().len()
    }

    /// The maximum attainable total, used in "Skor: X dari Y" summaries.
    fn max_total(&self) -> i32 {
        let max_option = self
            .options()
            .iter()
            .map(|o| o.value)
            .max()
            .unwrap_or(0);
        max_option * self.item_count() as i32
    }
}

/// Look up the static definition for an instrument.
pub fn instrument(id: InstrumentId) -> &'static dyn Instrument {
    match id {
        InstrumentId::Who5 => &instruments::who5::Who5,
        InstrumentId::Gad7 => &instruments::gad7::Gad7,
        InstrumentId::K10 => &instruments::k10::K10,
        InstrumentId::Mbi => &instruments::mbi::Mbi,
        InstrumentId::Naqr => &instruments::naqr::Naqr,
    }
}

/// All instruments in administration order.
pub fn all_instruments() -> [&'static dyn Instrument; 5] {
    InstrumentId::SEQUENCE.map(instrument)
}
