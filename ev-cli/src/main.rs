mod completions;
mod crd;

use clap::{
    CommandFactory,
    Parser,
    Subcommand,
    crate_version,
};
use ev_core::logging;
use ev_core::prelude::*;

#[derive(Parser)]
#[command(about = "command-line app for managing evmesh resources", version, propagate_version = true)]
struct EvCommandRoot {
    #[command(subcommand)]
    subcommand: EvSubcommand,

    #[arg(short, long, default_value = "warn")]
    verbosity: String,
}

#[derive(Subcommand)]
enum EvSubcommand {
    #[command(about = "generate shell completions for evctl")]
    Completions(completions::Args),

    #[command(about = "print evmesh CRDs")]
    Crd,

    #[command(about = "evmesh version")]
    Version,
}

fn main() -> EmptyResult {
    let args = EvCommandRoot::parse();
    logging::setup_for_cli(&args.verbosity);

    match &args.subcommand {
        EvSubcommand::Completions(args) => completions::cmd(args, EvCommandRoot::command()),
        EvSubcommand::Crd => crd::cmd(),
        EvSubcommand::Version => {
            println!("evctl {}", crate_version!());
            Ok(())
        },
    }
}

#[cfg(test)]
mod tests;
