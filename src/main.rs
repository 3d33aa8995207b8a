use clap::Parser;
use miette::Result;
use pxl::cli::{Cli, Commands};
use pxl::output::Printer;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let printer = Printer::new();

    match cli.command {
        Commands::Pixelate(args) => pxl::cli::pixelate::run(args, &printer)?,
        Commands::Grid(args) => pxl::cli::grid::run(args, &printer)?,
        Commands::Palettes(args) => pxl::cli::palettes::run(args)?,
        Commands::Completions(args) => pxl::cli::completions::run(args)?,
    }

    Ok(())
}
