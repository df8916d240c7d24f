//! Read-only question catalog.
//!
//! Thin accessors over the static instrument definitions. Everything here is
//! immutable after load and safe for concurrent reads.

use psiko_core::models::instrument::InstrumentId;
use psiko_core::models::option::AnswerOption;

use crate::error::InstrumentError;
use crate::instrument;

/// Full prompt for one item: the instrument's recall-period header plus the
/// item text. `None` if `index` is out of range.
pub fn question(id: InstrumentId, index: usize) -> Option<String> {
    let def = instrument(id);
    let text = def.questions().get(index)?;
    Some(format!("{}\n{}", def.header(), text))
}

/// The Likert options shared by all of an instrument's scored items.
pub fn options(id: InstrumentId) -> &'static [AnswerOption] {
    instrument(id).options()
}

/// 0-based item indices contributing to the named subscale.
pub fn subscale_indices(
    id: InstrumentId,
    subscale: &str,
) -> Result<&'static [usize], InstrumentError> {
    instrument(id)
        .subscales()
        .iter()
        .find(|s| s.id == subscale)
        .map(|s| s.items)
        .ok_or_else(|| InstrumentError::UnknownSubscale {
            instrument: id,
            subscale: subscale.to_string(),
        })
}

/// Number of scored items for an instrument.
pub fn item_count(id: InstrumentId) -> usize {
    instrument(id).item_count()
}
