use alloc::string::{String, ToString};
use core::fmt::Display;

use crate::*;

/// Token handed out when a rebuild starts. Only the newest one is honoured.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct BuildTicket(u64);

impl BuildTicket {
    pub const fn generation(self) -> u64 {
        self.0
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub enum SessionState {
    /// Nothing requested yet.
    #[default]
    Idle,
    Loading,
    Ready(Board),
    Failed(String),
}

/// Owns the board on screen and arbitrates between overlapping rebuilds.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct Session {
    generation: u64,
    state: SessionState,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn board(&self) -> Option<&Board> {
        match &self.state {
            SessionState::Ready(board) => Some(board),
            _ => None,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.state, SessionState::Loading)
    }

    pub fn error(&self) -> Option<&str> {
        match &self.state {
            SessionState::Failed(message) => Some(message.as_str()),
            _ => None,
        }
    }

    pub fn has_started(&self) -> bool {
        !matches!(self.state, SessionState::Idle)
    }

    /// Drops the current board and starts waiting for a new one.
    pub fn begin_build(&mut self) -> BuildTicket {
        self.generation += 1;
        self.state = SessionState::Loading;
        log::debug!("begin build #{}", self.generation);
        BuildTicket(self.generation)
    }

    /// Installs the result of a rebuild. Results for superseded tickets are
    /// dropped and `false` is returned.
    pub fn finish_build<E: Display>(
        &mut self,
        ticket: BuildTicket,
        result: core::result::Result<Board, E>,
    ) -> bool {
        if ticket.0 != self.generation {
            log::warn!(
                "discarding build #{}, #{} is current",
                ticket.0,
                self.generation
            );
            return false;
        }

        self.state = match result {
            Ok(board) => {
                log::info!(
                    "board #{} ready: {} x {}",
                    ticket.0,
                    board.category_count(),
                    board.clues_per_category()
                );
                SessionState::Ready(board)
            }
            Err(err) => {
                log::error!("board #{} failed: {}", ticket.0, err);
                SessionState::Failed(err.to_string())
            }
        };
        true
    }

    /// Runs one click on the clue at `key` of board `generation`.
    pub fn reveal(&mut self, generation: u64, key: CellKey) -> Result<RevealOutcome> {
        if generation != self.generation {
            return Err(BoardError::StaleBoard);
        }
        match &mut self.state {
            SessionState::Ready(board) => board.reveal(key),
            _ => Err(BoardError::StaleBoard),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{FakeSource, detail, poll_ready};

    fn build(session: &mut Session, source: &FakeSource, seed: u64) -> BuildTicket {
        let ticket = session.begin_build();
        let result = poll_ready(BoardBuilder::new(BoardConfig::new(2, 2), seed).build(source));
        assert!(session.finish_build(ticket, result));
        ticket
    }

    fn source() -> FakeSource {
        FakeSource::new([
            (1, detail("Math", &[("2+2", "4"), ("1+1", "2")])),
            (
                2,
                detail(
                    "Literature",
                    &[("Hamlet Author", "Shakespeare"), ("Bell Jar Author", "Plath")],
                ),
            ),
        ])
    }

    #[test]
    fn restart_walks_a_clue_through_question_and_answer() {
        let source = source();
        let mut session = Session::new();
        assert!(!session.has_started());

        let ticket = build(&mut session, &source, 5);
        let board = session.board().unwrap();
        let math = board
            .categories()
            .iter()
            .position(|category| category.title() == "Math")
            .unwrap();
        let key = CellKey::new(math, 0);
        let question = board.clue_at(key).unwrap().question.clone();
        let answer = board.clue_at(key).unwrap().answer.clone();
        let generation = ticket.generation();

        assert_eq!(session.reveal(generation, key), Ok(RevealOutcome::ShowQuestion));
        let clue = session.board().unwrap().clue_at(key).unwrap();
        assert_eq!(clue.displayed_text(), Some(question.as_str()));

        assert_eq!(session.reveal(generation, key), Ok(RevealOutcome::ShowAnswer));
        let clue = session.board().unwrap().clue_at(key).unwrap();
        assert_eq!(clue.displayed_text(), Some(answer.as_str()));

        assert_eq!(session.reveal(generation, key), Ok(RevealOutcome::NoChange));
        let clue = session.board().unwrap().clue_at(key).unwrap();
        assert_eq!(clue.displayed_text(), Some(answer.as_str()));
    }

    #[test]
    fn begin_build_removes_the_old_board() {
        let source = source();
        let mut session = Session::new();
        build(&mut session, &source, 1);

        session.begin_build();

        assert!(session.is_loading());
        assert!(session.board().is_none());
    }

    #[test]
    fn stale_build_result_is_discarded() {
        let source = source();
        let mut session = Session::new();

        let first = session.begin_build();
        let second = session.begin_build();
        let late = poll_ready(BoardBuilder::new(BoardConfig::new(2, 2), 1).build(&source));
        let fresh = poll_ready(BoardBuilder::new(BoardConfig::new(2, 1), 2).build(&source));

        assert!(session.finish_build(second, fresh.clone()));
        assert!(!session.finish_build(first, late));
        assert_eq!(session.board(), fresh.as_ref().ok());
    }

    #[test]
    fn early_stale_result_keeps_loading() {
        let source = source();
        let mut session = Session::new();

        let first = session.begin_build();
        session.begin_build();
        let late = poll_ready(BoardBuilder::new(BoardConfig::new(2, 2), 1).build(&source));

        assert!(!session.finish_build(first, late));
        assert!(session.is_loading());
    }

    #[test]
    fn click_on_replaced_board_is_rejected() {
        let source = source();
        let mut session = Session::new();
        let old = build(&mut session, &source, 1);
        build(&mut session, &source, 2);
        let before = session.clone();

        let result = session.reveal(old.generation(), CellKey::new(0, 0));

        assert_eq!(result, Err(BoardError::StaleBoard));
        assert_eq!(session, before);
    }

    #[test]
    fn click_while_loading_is_rejected() {
        let mut session = Session::new();
        let ticket = session.begin_build();

        let result = session.reveal(ticket.generation(), CellKey::new(0, 0));

        assert_eq!(result, Err(BoardError::StaleBoard));
    }

    #[test]
    fn failed_build_is_kept_as_visible_error() {
        let mut source = source();
        source.ids.push(3);
        let mut session = Session::new();

        let ticket = session.begin_build();
        let result = poll_ready(BoardBuilder::new(BoardConfig::new(3, 2), 0).build(&source));
        session.finish_build(ticket, result);

        assert_eq!(
            session.error(),
            Some("Could not fetch trivia data: no such category")
        );
        assert!(!session.is_loading());
    }
}
