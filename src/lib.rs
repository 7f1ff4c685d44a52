pub mod config;
pub mod notation;
pub mod render;
pub mod session;

pub use config::{Cli, Colour};
pub use session::{Command, Session};
