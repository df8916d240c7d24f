//! Scoring primitives and the score calculator.
//!
//! Scoring is pure: the same answer list always yields the same totals.
//! Answer-count preconditions are guaranteed by the conversation engine's
//! sequencing, so violating them here is a programming error and asserts.

use serde::Serialize;
use ts_rs::TS;

use psiko_core::models::instrument::InstrumentId;

use crate::error::InstrumentError;
use crate::instrument;

/// One category band: totals up to and including `upper` map to `label`.
/// Bands are evaluated in ascending order; the last band is open-ended.
#[derive(Debug, Clone, Copy, Serialize, TS)]
#[ts(export)]
pub struct Band {
    pub upper: i32,
    pub label: &'static str,
}

pub const fn band(upper: i32, label: &'static str) -> Band {
    Band { upper, label }
}

/// Map a total to its category label. `bands` must be non-empty; the last
/// band catches everything above the final threshold.
pub fn category(bands: &'static [Band], total: i32) -> &'static str {
    bands
        .iter()
        .find(|b| total <= b.upper)
        .unwrap_or(&bands[bands.len() - 1])
        .label
}

/// A named subset of an instrument's items, summed independently.
/// `items` are 0-based indices into the instrument's question list; only
/// set membership matters, not order.
#[derive(Debug, Clone, Copy, Serialize, TS)]
#[ts(export)]
pub struct Subscale {
    pub id: &'static str,
    pub name: &'static str,
    pub items: &'static [usize],
    /// Per-subscale category thresholds; empty when the subscale is
    /// reported as a bare total.
    pub bands: &'static [Band],
}

/// A scored subscale.
#[derive(Debug, Clone, Serialize, TS)]
#[ts(export)]
pub struct SubscaleScore {
    pub id: &'static str,
    pub name: &'static str,
    pub total: i32,
    pub category: Option<&'static str>,
}

/// The scored outcome of one instrument.
#[derive(Debug, Clone, Serialize, TS)]
#[ts(export)]
pub struct InstrumentScore {
    pub total: i32,
    pub category: &'static str,
    pub subscales: Vec<SubscaleScore>,
}

impl InstrumentScore {
    pub fn subtotal(&self, subscale_id: &str) -> Option<i32> {
        self.subscales
            .iter()
            .find(|s| s.id == subscale_id)
            .map(|s| s.total)
    }
}

/// Score a complete answer list for one instrument.
///
/// Panics if `answers` is not exactly the instrument's item count — the
/// engine only invokes scoring once the list is full.
pub fn score(id: InstrumentId, answers: &[i32]) -> InstrumentScore {
    let def = instrument(id);
    assert_eq!(
        answers.len(),
        def.item_count(),
        "{id} expects {} answers, got {}",
        def.item_count(),
        answers.len(),
    );

    let total: i32 = answers.iter().sum();
    let subscales = def
        .subscales()
        .iter()
        .map(|s| {
            let subtotal: i32 = s.items.iter().map(|i| answers[*i]).sum();
            SubscaleScore {
                id: s.id,
                name: s.name,
                total: subtotal,
                category: (!s.bands.is_empty()).then(|| category(s.bands, subtotal)),
            }
        })
        .collect();

    InstrumentScore {
        total,
        category: category(def.bands(), total),
        subscales,
    }
}

/// Category label for a precomputed total, e.g. when rendering a result
/// loaded from history where raw answers are no longer available.
///
/// `subscale: None` uses the instrument-total bands.
pub fn category_from_total(
    id: InstrumentId,
    subscale: Option<&str>,
    total: i32,
) -> Result<&'static str, InstrumentError> {
    let def = instrument(id);
    match subscale {
        None => Ok(category(def.bands(), total)),
        Some(name) => {
            let sub = def
                .subscales()
                .iter()
                .find(|s| s.id == name)
                .ok_or_else(|| InstrumentError::UnknownSubscale {
                    instrument: id,
                    subscale: name.to_string(),
                })?;
            if sub.bands.is_empty() {
                return Err(InstrumentError::NoCategoryBands {
                    instrument: id,
                    subscale: name.to_string(),
                });
            }
            Ok(category(sub.bands, total))
        }
    }
}
