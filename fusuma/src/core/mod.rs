mod config;
mod rules_engine;
mod screen;
mod state;
mod tag;
mod tag_list;
mod window;

pub use config::*;
pub use rules_engine::*;
pub use screen::*;
pub use state::*;
pub use tag::*;
pub use tag_list::*;
pub use window::*;
