// Integration tests for concurrent collaboration: many tabs on many threads,
// notices fanned out through a channel.
// Run with: cargo test -p xword-session --test collab_tests

use std::sync::mpsc;
use std::sync::Arc;
use std::thread;

use xword_core::{ClueKey, Coord, Direction};
use xword_session::{ChangeKind, ChannelNotifier, ClientKey, Collaboration, SessionState};

#[test]
fn concurrent_tabs_keep_their_own_cursor() {
    let (tx, rx) = mpsc::channel();
    let collab = Arc::new(Collaboration::new(SessionState::new(8), ChannelNotifier::with_channel(tx)));

    let handles: Vec<_> = (0..8usize)
        .map(|tab| {
            let collab = Arc::clone(&collab);
            thread::spawn(move || {
                let client = ClientKey::new("shared-login", format!("tab-{}", tab));
                for step in 0..50usize {
                    collab.focus_cell("p1", &client, Coord::new(tab, step % 15));
                }
                collab.change_direction("p1", &client, Direction::Down);
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }

    for tab in 0..8usize {
        let client = ClientKey::new("shared-login", format!("tab-{}", tab));
        let view = collab.view(&client);
        assert_eq!(view.focused, Some(Coord::new(tab, 49 % 15)));
        assert_eq!(view.direction, Direction::Down);
    }
    assert_eq!(collab.state().focused_clients(), 8);

    drop(collab);
    let notices: Vec<_> = rx.iter().collect();
    assert_eq!(notices.len(), 8 * 51);
    assert!(notices.iter().all(|n| n.topic == "puzzles.p1" && n.kind() == Some(ChangeKind::Value)));
}

#[test]
fn editing_state_is_per_tab() {
    let collab = Collaboration::new(SessionState::new(4), ChannelNotifier::new());
    let a = ClientKey::new("tok", "a");
    let b = ClientKey::new("tok", "b");

    collab.open_clue_editor("p1", &a, ClueKey::new(1, Direction::Across));
    collab.open_clue_editor("p1", &b, ClueKey::new(5, Direction::Down));
    collab.clue_saved("p1", &a);

    assert_eq!(collab.view(&a).editing_clue, None);
    assert_eq!(collab.view(&b).editing_clue, Some(ClueKey::new(5, Direction::Down)));
}
