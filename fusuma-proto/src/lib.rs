pub mod command;
pub mod config;

pub use command::{Command, Response, ScreenInfo, StateInfo, WindowInfo};
pub use config::{ConfigFile, Rule, TagConfig};
