use serde::Serialize;
use ts_rs::TS;

/// One selectable answer on a Likert scale. Display order is the order the
/// options appear in the catalog; `value` is the semantic score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, TS)]
#[ts(export)]
pub struct AnswerOption {
    pub label: &'static str,
    pub value: i32,
}

impl AnswerOption {
    pub const fn new(label: &'static str, value: i32) -> Self {
        AnswerOption { label, value }
    }
}
