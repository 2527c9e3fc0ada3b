//! Session state plus change notification: one call per user interaction.
//!
//! Persisting cell and clue edits is the caller's job; these methods record
//! the per-client state and announce the change so every viewer of the
//! puzzle refreshes.

use log::debug;
use xword_core::{ClueKey, Coord, Direction};

use crate::notify::{topic_for, ChangeKind, Notifier};
use crate::state::{ClientKey, SessionState};

/// What one client needs to render its own view of a puzzle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ClientView {
    pub focused: Option<Coord>,
    pub direction: Direction,
    pub editing_clue: Option<ClueKey>,
}

pub struct Collaboration<N> {
    state: SessionState,
    notifier: N,
}

impl<N: Notifier> Collaboration<N> {
    pub fn new(state: SessionState, notifier: N) -> Self {
        Self { state, notifier }
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    /// Announce a change on the puzzle's topic.
    pub fn broadcast(&self, puzzle_id: &str, kind: ChangeKind) {
        let topic = topic_for(puzzle_id);
        debug!("publishing {} -> {}", topic, kind);
        self.notifier.publish(&topic, kind.payload());
    }

    pub fn focus_cell(&self, puzzle_id: &str, client: &ClientKey, at: Coord) {
        self.state.focus(client, at);
        self.broadcast(puzzle_id, ChangeKind::Value);
    }

    pub fn change_direction(&self, puzzle_id: &str, client: &ClientKey, dir: Direction) {
        self.state.set_direction(client, dir);
        self.broadcast(puzzle_id, ChangeKind::Value);
    }

    /// A letter was typed or cleared.
    pub fn letter_entered(&self, puzzle_id: &str) {
        self.broadcast(puzzle_id, ChangeKind::Value);
    }

    pub fn open_clue_editor(&self, puzzle_id: &str, client: &ClientKey, clue: ClueKey) {
        self.state.begin_clue_edit(client, clue);
        self.broadcast(puzzle_id, ChangeKind::Value);
    }

    /// Clue text was saved; the client's editor closes.
    pub fn clue_saved(&self, puzzle_id: &str, client: &ClientKey) {
        self.state.end_clue_edit(client);
        self.broadcast(puzzle_id, ChangeKind::Value);
    }

    pub fn blocks_toggled(&self, puzzle_id: &str) {
        self.broadcast(puzzle_id, ChangeKind::Structural);
    }

    pub fn resized(&self, puzzle_id: &str) {
        self.broadcast(puzzle_id, ChangeKind::Structural);
    }

    pub fn imported(&self, puzzle_id: &str) {
        self.broadcast(puzzle_id, ChangeKind::Structural);
    }

    /// The client's stream went away. Nothing is published: its cursor is
    /// only ever drawn in its own view.
    pub fn disconnect(&self, client: &ClientKey) {
        debug!("forgetting session state for {}", client);
        self.state.forget(client);
    }

    pub fn view(&self, client: &ClientKey) -> ClientView {
        ClientView {
            focused: self.state.focused_cell(client),
            direction: self.state.direction(client),
            editing_clue: self.state.editing_clue(client),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use parking_lot::Mutex;

    #[derive(Default)]
    struct Recorder {
        sent: Mutex<Vec<(String, String)>>,
    }

    impl Notifier for Recorder {
        fn publish(&self, topic: &str, payload: &str) {
            self.sent.lock().push((topic.to_string(), payload.to_string()));
        }
    }

    fn collab() -> Collaboration<Recorder> {
        Collaboration::new(SessionState::new(4), Recorder::default())
    }

    fn sent(c: &Collaboration<Recorder>) -> Vec<(String, String)> {
        c.notifier().sent.lock().clone()
    }

    #[test]
    fn test_value_changes_publish_signal() {
        let c = collab();
        let client = ClientKey::new("tok", "tab");

        c.focus_cell("p1", &client, Coord::new(2, 3));
        c.change_direction("p1", &client, Direction::Down);
        c.letter_entered("p1");

        let expected = vec![("puzzles.p1".to_string(), "signal".to_string()); 3];
        assert_eq!(sent(&c), expected);
        assert_eq!(
            c.view(&client),
            ClientView {
                focused: Some(Coord::new(2, 3)),
                direction: Direction::Down,
                editing_clue: None,
            }
        );
    }

    #[test]
    fn test_structural_changes() {
        let c = collab();
        c.blocks_toggled("p1");
        c.resized("p2");
        c.imported("p3");

        let payloads: Vec<String> = sent(&c).into_iter().map(|(_, p)| p).collect();
        assert_eq!(payloads, vec!["structural"; 3]);
        assert_eq!(sent(&c)[1].0, "puzzles.p2");
    }

    #[test]
    fn test_saving_closes_the_editor() {
        let c = collab();
        let client = ClientKey::new("tok", "tab");
        let clue = ClueKey::new(3, Direction::Down);

        c.open_clue_editor("p1", &client, clue);
        assert_eq!(c.view(&client).editing_clue, Some(clue));

        c.clue_saved("p1", &client);
        assert_eq!(c.view(&client).editing_clue, None);
        assert_eq!(sent(&c).len(), 2);
    }

    #[test]
    fn test_disconnect_forgets_without_publishing() {
        let c = collab();
        let client = ClientKey::new("tok", "tab");
        c.focus_cell("p1", &client, Coord::new(0, 0));

        c.disconnect(&client);

        assert_eq!(c.view(&client), ClientView::default());
        assert_eq!(sent(&c).len(), 1);
    }
}
