//! Engine module: CLI surface, content generation, filesystem and progress helpers

pub mod arg_parser;
pub mod cli;
pub mod content;
pub mod progress;
pub mod tools;

// Re-export commonly used functions
pub use arg_parser::Cli;
pub use cli::{handle_run, resolve_opts};
pub use content::{ALPHABET, ContentGenerator};
pub use tools::{file_path_for, prepare_output_dir};
