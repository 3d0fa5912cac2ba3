//! DevLingo core: daily phrase selection, daily state and progress
//!
//! Front ends open a [`session::Session`] and work through the trackers it
//! hands out. All state lives in a key-value store shared with display
//! surfaces such as a home-screen widget.

pub mod clock;
pub mod daily;
pub mod phrases;
pub mod progress;
pub mod session;
pub mod settings;
pub mod storage;
pub mod widget;

pub use session::{Completion, Session, SessionError};
