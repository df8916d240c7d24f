use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Identifier of one standardized questionnaire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum InstrumentId {
    Who5,
    Gad7,
    K10,
    Mbi,
    Naqr,
}

impl InstrumentId {
    /// The fixed administration order of the questionnaire run.
    pub const SEQUENCE: [InstrumentId; 5] = [
        InstrumentId::Who5,
        InstrumentId::Gad7,
        InstrumentId::K10,
        InstrumentId::Mbi,
        InstrumentId::Naqr,
    ];

    /// The instrument administered after this one, if any.
    pub fn next(self) -> Option<InstrumentId> {
        let pos = Self::SEQUENCE.iter().position(|i| *i == self)?;
        Self::SEQUENCE.get(pos + 1).copied()
    }

    /// Short identifier, e.g. `"who5"`.
    pub fn as_str(self) -> &'static str {
        match self {
            InstrumentId::Who5 => "who5",
            InstrumentId::Gad7 => "gad7",
            InstrumentId::K10 => "k10",
            InstrumentId::Mbi => "mbi",
            InstrumentId::Naqr => "naqr",
        }
    }
}

impl std::fmt::Display for InstrumentId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
