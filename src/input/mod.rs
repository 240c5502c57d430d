mod events;
mod handler;
pub mod keymap;

pub use events::{AppInputEvent, InputHookResult};
pub(crate) use handler::InputEventOutcome;
