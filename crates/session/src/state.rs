//! Per-client cursor, typing direction and clue-editing state.

use std::fmt;

use xword_core::{ClueKey, Coord, Direction};

use crate::sharded::ShardedMap;

/// One browser tab: the login session token plus a per-tab client id.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ClientKey {
    pub session_token: String,
    pub client_id: String,
}

impl ClientKey {
    pub fn new(session_token: impl Into<String>, client_id: impl Into<String>) -> Self {
        Self {
            session_token: session_token.into(),
            client_id: client_id.into(),
        }
    }
}

impl fmt::Display for ClientKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.session_token, self.client_id)
    }
}

/// Ephemeral collaboration state. Nothing here is persisted; a restart
/// simply forgets every cursor.
pub struct SessionState {
    focus: ShardedMap<ClientKey, Coord>,
    direction: ShardedMap<ClientKey, Direction>,
    editing: ShardedMap<ClientKey, ClueKey>,
}

impl SessionState {
    pub fn new(shards: usize) -> Self {
        Self {
            focus: ShardedMap::new(shards),
            direction: ShardedMap::new(shards),
            editing: ShardedMap::new(shards),
        }
    }

    pub fn focus(&self, client: &ClientKey, at: Coord) {
        self.focus.insert(client.clone(), at);
    }

    pub fn focused_cell(&self, client: &ClientKey) -> Option<Coord> {
        self.focus.get(client)
    }

    pub fn set_direction(&self, client: &ClientKey, dir: Direction) {
        self.direction.insert(client.clone(), dir);
    }

    /// Typing direction; across until the client picks one.
    pub fn direction(&self, client: &ClientKey) -> Direction {
        self.direction.get(client).unwrap_or_default()
    }

    pub fn begin_clue_edit(&self, client: &ClientKey, clue: ClueKey) {
        self.editing.insert(client.clone(), clue);
    }

    pub fn editing_clue(&self, client: &ClientKey) -> Option<ClueKey> {
        self.editing.get(client)
    }

    /// Close the clue editor; returns the clue that was open, if any.
    pub fn end_clue_edit(&self, client: &ClientKey) -> Option<ClueKey> {
        self.editing.remove(client)
    }

    /// Drop everything held for a client, e.g. when its stream disconnects.
    pub fn forget(&self, client: &ClientKey) {
        self.focus.remove(client);
        self.direction.remove(client);
        self.editing.remove(client);
    }

    /// Number of clients with a focused cell.
    pub fn focused_clients(&self) -> usize {
        self.focus.len()
    }
}

impl Default for SessionState {
    fn default() -> Self {
        Self::new(16)
    }
}
