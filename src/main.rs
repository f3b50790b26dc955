//! CLI entry point for template-driven sprite generation

use clap::Parser;
use spriteforge::io::cli::{Cli, FileProcessor, logger_from_env};

fn main() -> spriteforge::Result<()> {
    logger_from_env("RUST_LOG").init();
    let cli = Cli::parse();
    let processor = FileProcessor::new(cli);
    processor.process()
}
