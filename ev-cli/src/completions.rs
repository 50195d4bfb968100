use std::io;

use clap::value_parser;
use clap_complete::{
    Shell,
    generate,
};
use ev_core::prelude::*;

#[derive(clap::Args)]
pub struct Args {
    #[arg(
        long_help = "name of the shell to generate completion files for",
        value_parser = value_parser!(clap_complete::Shell),
    )]
    pub shell: Shell,
}

pub fn cmd(args: &Args, mut cmd: clap::Command) -> EmptyResult {
    generate(args.shell, &mut cmd, "evctl", &mut io::stdout());
    Ok(())
}
