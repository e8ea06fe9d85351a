//! Scripted conversation with the selected candidate.
//!
//! DESIGN
//! ======
//! There is no conversational backend. Replies are templates filled with the
//! candidate's own fields, so the transcript is a pure function of the
//! selection and the user's inputs.

#[cfg(test)]
#[path = "chat_test.rs"]
mod chat_test;

use crate::net::types::Candidate;

/// State for the candidate chat panel.
#[derive(Clone, Debug, Default)]
pub struct ChatState {
    pub messages: Vec<ChatMessage>,
    /// Current contents of the message input.
    pub input: String,
}

/// A single transcript entry.
#[derive(Clone, Debug, PartialEq)]
pub struct ChatMessage {
    /// 1-based position in the transcript.
    pub id: usize,
    pub text: String,
    /// `true` for the visitor's messages, `false` for scripted replies.
    pub is_user: bool,
    /// Epoch milliseconds.
    pub timestamp: f64,
}

impl ChatState {
    /// Start a fresh transcript holding only the candidate's greeting.
    pub fn seed(&mut self, candidate: &Candidate, now: f64) {
        self.messages = vec![ChatMessage { id: 1, text: greeting(candidate), is_user: false, timestamp: now }];
    }

    /// Send the current input to `candidate`.
    ///
    /// Appends the input verbatim followed by the scripted reply, then clears
    /// the input. Blank input or a missing candidate leaves everything as is.
    /// Returns whether anything was appended.
    pub fn send(&mut self, candidate: Option<&Candidate>, now: f64) -> bool {
        let Some(candidate) = candidate else {
            return false;
        };
        if self.input.trim().is_empty() {
            return false;
        }

        let text = std::mem::take(&mut self.input);
        let next_id = self.messages.len() + 1;
        let reply = scripted_reply(&text, candidate);
        self.messages.push(ChatMessage { id: next_id, text, is_user: true, timestamp: now });
        self.messages.push(ChatMessage { id: next_id + 1, text: reply, is_user: false, timestamp: now });
        true
    }

    /// Drop the transcript and pending input.
    pub fn clear(&mut self) {
        self.messages.clear();
        self.input.clear();
    }
}

/// Opening line spoken by `candidate`.
pub fn greeting(candidate: &Candidate) -> String {
    format!(
        "¡Hola! Soy {}. {}. ¿En qué puedo ayudarte hoy?",
        candidate.name, candidate.description
    )
}

/// Canned answer to `question`.
pub fn scripted_reply(question: &str, candidate: &Candidate) -> String {
    format!(
        "Gracias por tu pregunta sobre \"{question}\". Como {}, mi posición es trabajar por el bienestar \
         de todos los ciudadanos. ¿Hay algo más específico que te gustaría saber sobre mis propuestas?",
        candidate.name
    )
}
