//! Terminal front end: input tokenizing, text rendering and the session loop.

pub mod parser;
pub mod render;
pub mod session;

pub use parser::parse_action;
pub use render::{help_text, narrate, render_map};
pub use session::run;
