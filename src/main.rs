use clap::Parser;
use miette::Result;
use mx::cli::{Cli, Commands};
use mx::output::Printer;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let printer = Printer::new();

    match cli.command {
        Commands::Convert(args) => mx::cli::convert::run(args, &printer)?,
        Commands::Skeleton(args) => mx::cli::skeleton::run(args)?,
        Commands::Init(args) => mx::cli::init::run(args, &printer)?,
        Commands::Completions(args) => mx::cli::completions::run(args)?,
    }

    Ok(())
}
