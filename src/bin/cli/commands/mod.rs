pub mod categories;
pub mod complete;
pub mod history;
pub mod language;
pub mod progress;
pub mod saved;
pub mod search;
pub mod today;
pub mod widget;
