pub mod config;
pub mod env_overrides;
pub mod filegen_toml;
pub mod logger;

pub use config::*;
pub use env_overrides::{apply_env_to_opts, load_dotenv};
pub use logger::setup_logging;
