use clap::{CommandFactory, Parser};
use colored::Colorize;
use seedling::cli::{shadowed_fields, Cli, Command, CreateArgs};
use seedling::{handle, Config, ManifestBuilder, Result};
use std::io;

fn main() {
    let args = Cli::parse();

    let result = match args.command {
        Command::Create(create) => run_create(create),
        Command::Completion { shell } => {
            clap_complete::generate(shell, &mut Cli::command(), "seedling", &mut io::stdout());
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("{} {}", "Error:".red().bold(), e);
        std::process::exit(1);
    }
}

fn run_create(args: CreateArgs) -> Result<()> {
    let quiet = args.quiet;
    let dry_run = args.dry_run;
    let options = args.into_options()?;

    if !quiet {
        for key in shadowed_fields(&options) {
            eprintln!(
                "   {} --field {} ignored (computed by seedling)",
                "Warning".yellow(),
                key
            );
        }
    }

    let config = Config::load()?;

    if dry_run {
        let manifest = ManifestBuilder::new(&config.project).build(&options);
        print!("{}", manifest.to_json()?);
        return Ok(());
    }

    handle(&options, &config, quiet)?;
    Ok(())
}
