//! Per-client collaboration state for shared puzzles.
//!
//! Each browser tab is a client, addressed by its session token plus a
//! client id, so two tabs of one login keep separate cursors. State lives in
//! striped maps that any request thread can touch without outer locking.
//! Every interaction also publishes a change notice on the puzzle's topic so
//! other viewers know to re-render.

pub mod collab;
pub mod notify;
pub mod sharded;
pub mod state;

pub use collab::{ClientView, Collaboration};
pub use notify::{topic_for, ChangeKind, ChannelNotifier, Notice, Notifier, NullNotifier};
pub use sharded::ShardedMap;
pub use state::{ClientKey, SessionState};
