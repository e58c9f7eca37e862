use clap::Parser;
use eradicate_tabs::{entry, logging};
use std::env;
use std::process::ExitCode;

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Replace tabs with spaces in the C sources and headers of the sketchy-idea repository",
    long_about = "Searches upward from the current directory for the sketchy-idea repository, \
                  then rewrites every .c and .h file under code/include and code/src so that \
                  each tab becomes four spaces. Prints nothing on success."
)]
struct Args {}

fn main() -> ExitCode {
    let _args = Args::parse();
    logging::init();

    let code = match env::current_dir() {
        Ok(cwd) => entry::run(&cwd),
        Err(err) => {
            entry::print_error(&anyhow::Error::new(err).context("Failed to read current directory"));
            entry::EXIT_FAILURE
        }
    };

    ExitCode::from(code as u8)
}
