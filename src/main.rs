//! CLI entry point for the terrain tilemap tool

use citygrid::io::cli::{Cli, CommandRunner, init_tracing};
use clap::Parser;

fn main() -> citygrid::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    CommandRunner::new(cli).run()
}
