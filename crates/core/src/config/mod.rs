//! Configuration loading and schema definitions
//!
//! Site, map, assistant and logging settings read from `.muralmap.toml`.

mod loader;
mod schema;

pub use loader::Config;
pub use schema::*;
