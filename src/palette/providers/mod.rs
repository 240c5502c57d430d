mod action;
mod command;
mod profile;

pub use action::ActionPaletteProvider;
pub use command::CommandPaletteProvider;
pub use profile::ProfileFieldPaletteProvider;
