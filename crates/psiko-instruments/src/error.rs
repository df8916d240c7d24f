use thiserror::Error;

use psiko_core::models::instrument::InstrumentId;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InstrumentError {
    #[error("unknown subscale '{subscale}' for instrument '{instrument}'")]
    UnknownSubscale {
        instrument: InstrumentId,
        subscale: String,
    },

    #[error("subscale '{subscale}' of instrument '{instrument}' has no category bands")]
    NoCategoryBands {
        instrument: InstrumentId,
        subscale: String,
    },
}
