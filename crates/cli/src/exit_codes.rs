//! CLI Exit Code Registry
//!
//! Exit codes are part of the shell contract; scripts rely on them.
//!
//! | Code | Description                                      |
//! |------|--------------------------------------------------|
//! | 0    | Success                                          |
//! | 1    | Import error (unreadable or out-of-range puzzle) |
//! | 2    | Usage error (bad args, missing file, bad config) |

/// Success - command completed without errors.
pub const EXIT_SUCCESS: u8 = 0;

/// The file was read but is not a puzzle we can import.
pub const EXIT_IMPORT: u8 = 1;

/// Usage error - bad arguments, unreadable file or settings.
/// clap also exits with 2 on argument errors.
pub const EXIT_USAGE: u8 = 2;
