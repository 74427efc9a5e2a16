mod display;
mod script;
mod terminal;

pub use display::{DisplayError, TerminalDisplay};
pub use script::{ClickScript, ParseError};
pub use terminal::run_interactive_terminal;
