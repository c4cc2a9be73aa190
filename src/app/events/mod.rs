//! App-Intent, App-Command und Editor-Event Definitionen.

mod command;
mod intent;
mod notification;

pub use command::AppCommand;
pub use intent::{AppIntent, EditorKey};
pub use notification::{EditorEvent, Notifier, NullNotifier};
