//! Scripted question answering for the "Ask Questions" tab.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Reply used whenever a question is not one of the canned ones.
pub const FALLBACK_RESPONSE: &str =
    "I can help explain specific clauses. Try asking about duration, risks, or breaking terms.";

/// Canned questions (already lower-cased) and their answers.
const CANNED_RESPONSES: [(&str, &str); 3] = [
    (
        "can i work for competitors",
        "There’s no non-compete clause. You can work for competitors, just don’t share confidential info.",
    ),
    (
        "how long",
        "Confidentiality lasts 5 years, longer than the 2–3 year norm.",
    ),
    (
        "what happens if i break",
        "The company can take you to court (injunction) and seek damages.",
    ),
];

/// Questions the stub knows how to answer, in display order.
pub fn suggested_questions() -> impl Iterator<Item = &'static str> {
    CANNED_RESPONSES.iter().map(|(question, _)| *question)
}

/// Answers a question by exact, case-insensitive lookup.
///
/// Whitespace and punctuation are significant: `"how long?"` and
/// `" how long"` both fall through to [`FALLBACK_RESPONSE`].
pub fn respond(question: &str) -> &'static str {
    let lowered = question.to_lowercase();
    CANNED_RESPONSES
        .iter()
        .find(|(canned, _)| *canned == lowered)
        .map_or(FALLBACK_RESPONSE, |(_, answer)| *answer)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Speaker {
    User,
    Assistant,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChatMessage {
    pub speaker: Speaker,
    pub text: String,
    pub sent_at: DateTime<Utc>,
}

/// Ordered conversation for one session.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ChatTranscript {
    messages: Vec<ChatMessage>,
}

impl ChatTranscript {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a question and the stub's answer.
    ///
    /// Returns the appended pair, or `None` when the question is empty and
    /// nothing was recorded.
    pub fn submit(&mut self, question: &str) -> Option<&[ChatMessage]> {
        if question.is_empty() {
            return None;
        }

        let sent_at = Utc::now();
        let answer = respond(question);
        self.messages.push(ChatMessage {
            speaker: Speaker::User,
            text: question.to_string(),
            sent_at,
        });
        self.messages.push(ChatMessage {
            speaker: Speaker::Assistant,
            text: answer.to_string(),
            sent_at,
        });

        Some(&self.messages[self.messages.len() - 2..])
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_questions_match_case_insensitively() {
        let expected = "Confidentiality lasts 5 years, longer than the 2–3 year norm.";
        assert_eq!(respond("how long"), expected);
        assert_eq!(respond("HOW LONG"), expected);
        assert_eq!(respond("How Long"), expected);
    }

    #[test]
    fn partial_or_padded_questions_fall_back() {
        assert_eq!(respond("how long please"), FALLBACK_RESPONSE);
        assert_eq!(respond("how long?"), FALLBACK_RESPONSE);
        assert_eq!(respond(" how long"), FALLBACK_RESPONSE);
        assert_eq!(respond("long"), FALLBACK_RESPONSE);
    }

    #[test]
    fn every_suggested_question_has_its_own_answer() {
        let answers: Vec<_> = suggested_questions().map(respond).collect();
        assert_eq!(answers.len(), 3);
        assert!(answers.iter().all(|answer| *answer != FALLBACK_RESPONSE));
        assert_eq!(
            respond("What happens if I break"),
            "The company can take you to court (injunction) and seek damages."
        );
    }

    #[test]
    fn submit_appends_question_then_answer() {
        let mut transcript = ChatTranscript::new();
        let pair = transcript.submit("Can I work for competitors").expect("recorded");
        assert_eq!(pair[0].speaker, Speaker::User);
        assert_eq!(pair[0].text, "Can I work for competitors");
        assert_eq!(pair[1].speaker, Speaker::Assistant);
        assert_eq!(pair[1].text, respond("can i work for competitors"));
    }

    #[test]
    fn transcript_grows_by_two_per_submission() {
        let mut transcript = ChatTranscript::new();
        let questions = ["how long", "is this fair?", "what happens if i break"];
        for (index, question) in questions.iter().enumerate() {
            transcript.submit(question);
            assert_eq!(transcript.len(), 2 * (index + 1));
        }
        let speakers: Vec<_> = transcript.messages().iter().map(|m| m.speaker).collect();
        assert!(speakers
            .chunks(2)
            .all(|pair| pair == [Speaker::User, Speaker::Assistant]));
    }

    #[test]
    fn empty_submissions_are_ignored() {
        let mut transcript = ChatTranscript::new();
        assert!(transcript.submit("").is_none());
        assert!(transcript.is_empty());
    }
}
