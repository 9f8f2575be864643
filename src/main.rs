//! filegen CLI: fill a directory with files of random letters.

use anyhow::Result;
use clap::Parser;
use filegen::engine::arg_parser::Cli;
use filegen::engine::handle_run;

fn main() -> Result<()> {
    let cli = Cli::parse();
    handle_run(&cli)
}
