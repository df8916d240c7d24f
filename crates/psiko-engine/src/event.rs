//! Channel-agnostic inputs and outputs.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Slash-style commands available from any state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Command {
    Start,
    Questionnaire,
    Profile,
    Help,
    Cancel,
    Reset,
    Logout,
}

impl Command {
    /// Parse a `/command` string as sent by a bot channel.
    pub fn parse(text: &str) -> Option<Command> {
        match text.trim() {
            "/start" => Some(Command::Start),
            "/kuesioner" => Some(Command::Questionnaire),
            "/profile" => Some(Command::Profile),
            "/help" => Some(Command::Help),
            "/cancel" => Some(Command::Cancel),
            "/reset" => Some(Command::Reset),
            "/logout" => Some(Command::Logout),
            _ => None,
        }
    }
}

/// One inbound user action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum ConversationInput {
    Command(Command),
    /// Free text typed by the user.
    Text(String),
    /// The value of a selected option (button press, form control).
    Selection(String),
}

/// One selectable option attached to a prompt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Choice {
    pub label: String,
    pub value: String,
}

/// The next question to show, with its options (empty = free text expected).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Prompt {
    pub text: String,
    pub choices: Vec<Choice>,
}

impl Prompt {
    pub fn text_only(text: impl Into<String>) -> Prompt {
        Prompt {
            text: text.into(),
            choices: Vec::new(),
        }
    }
}

/// Everything the engine emits in response to one inbound action.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Reply {
    /// Plain messages, in send order.
    pub messages: Vec<String>,
    /// The next expected input, if the conversation continues.
    pub prompt: Option<Prompt>,
}

impl Reply {
    pub fn message(text: impl Into<String>) -> Reply {
        Reply {
            messages: vec![text.into()],
            prompt: None,
        }
    }

    pub fn with_prompt(mut self, prompt: Prompt) -> Reply {
        self.prompt = Some(prompt);
        self
    }

    pub fn push(&mut self, text: impl Into<String>) {
        self.messages.push(text.into());
    }
}
