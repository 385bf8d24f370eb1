//! VectorInk headless shell
//!
//! Loads a configuration and a recorded input script, replays the script
//! through the interaction engine and reports what the engine emitted.

mod cli;
mod replay;
mod shortcuts;

pub use cli::CliArgs;
pub use replay::{Emitted, ReplayError, ReplayScript, load_config, replay, run_cli};
pub use shortcuts::{Shortcut, ShortcutRegistry};
