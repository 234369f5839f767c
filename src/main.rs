use clap::Parser;
use folioadvisor::cli::{run, Cli};

fn main() -> std::process::ExitCode {
    run(Cli::parse())
}
