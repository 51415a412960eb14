use alloc::string::String;
use serde::{Deserialize, Serialize};

/// What a clue cell currently shows. Only ever moves forward.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RevealState {
    Hidden,
    Question,
    Answer,
}

impl RevealState {
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Answer)
    }

    /// The state one click moves to, `None` once the answer is showing.
    pub const fn next(self) -> Option<Self> {
        match self {
            Self::Hidden => Some(Self::Question),
            Self::Question => Some(Self::Answer),
            Self::Answer => None,
        }
    }
}

impl Default for RevealState {
    fn default() -> Self {
        Self::Hidden
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum RevealOutcome {
    NoChange,
    ShowQuestion,
    ShowAnswer,
}

impl RevealOutcome {
    pub const fn has_update(self) -> bool {
        match self {
            Self::NoChange => false,
            Self::ShowQuestion | Self::ShowAnswer => true,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Clue {
    pub question: String,
    pub answer: String,
    showing: RevealState,
}

impl Clue {
    pub fn new(question: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            answer: answer.into(),
            showing: RevealState::Hidden,
        }
    }

    pub fn showing(&self) -> RevealState {
        self.showing
    }

    /// Advances the clue by one click.
    pub fn reveal(&mut self) -> RevealOutcome {
        match self.showing.next() {
            Some(next) => {
                self.showing = next;
                match next {
                    RevealState::Question => RevealOutcome::ShowQuestion,
                    _ => RevealOutcome::ShowAnswer,
                }
            }
            None => RevealOutcome::NoChange,
        }
    }

    /// Text the cell should show, or `None` while the clue is still hidden.
    pub fn displayed_text(&self) -> Option<&str> {
        match self.showing {
            RevealState::Hidden => None,
            RevealState::Question => Some(self.question.as_str()),
            RevealState::Answer => Some(self.answer.as_str()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;

    #[test]
    fn clicks_walk_hidden_question_answer_then_stop() {
        let mut clue = Clue::new("2+2", "4");
        let mut seen = Vec::from([clue.showing()]);

        for _ in 0..5 {
            clue.reveal();
            seen.push(clue.showing());
        }

        use RevealState::*;
        assert_eq!(seen, [Hidden, Question, Answer, Answer, Answer, Answer]);
    }

    #[test]
    fn each_click_emits_the_matching_text() {
        let mut clue = Clue::new("Hamlet Author", "Shakespeare");
        assert_eq!(clue.displayed_text(), None);

        assert_eq!(clue.reveal(), RevealOutcome::ShowQuestion);
        assert_eq!(clue.displayed_text(), Some("Hamlet Author"));

        assert_eq!(clue.reveal(), RevealOutcome::ShowAnswer);
        assert_eq!(clue.displayed_text(), Some("Shakespeare"));
    }

    #[test]
    fn answered_clue_ignores_further_clicks() {
        let mut clue = Clue::new("1+1", "2");
        clue.reveal();
        clue.reveal();
        let before = clue.clone();

        let outcome = clue.reveal();

        assert_eq!(outcome, RevealOutcome::NoChange);
        assert!(!outcome.has_update());
        assert_eq!(clue, before);
        assert!(clue.showing().is_terminal());
    }
}
