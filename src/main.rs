use cliproc::{Cli, ExitCode};
use std::env;
use ugt::commands::ugt::Ugt;

fn main() -> ExitCode {
    Cli::default().parse(env::args()).go::<Ugt>()
}
