mod r#impl;
mod structs;

pub use r#impl::{config_path, get_config, init_config, reload_config};
pub use structs::*;
