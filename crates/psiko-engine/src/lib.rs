//! psiko-engine
//!
//! The questionnaire conversation state machine: account resolution, biodata
//! collection, the five-instrument questionnaire run, scoring, persistence,
//! and the completed-profile chat gate.
//!
//! The engine is channel-agnostic: it consumes commands, free text, and
//! option selections, and emits messages plus an optional prompt. Rendering
//! (inline keyboards, web forms) belongs to the presentation channel.

pub mod analysis;
pub mod context;
pub mod engine;
pub mod error;
pub mod event;
pub mod session;
pub mod state;
pub mod stores;
pub mod summary;

pub use engine::ConversationEngine;
