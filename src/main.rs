mod args;
mod bearing;
mod error;
mod report;
mod trig;

use args::{program_name, usage, Args};
use error::ArcError;
use report::report;

use clap::Parser;
use std::io::{self, Write};
use std::process;

fn main() {
    if let Err(err) = run() {
        let argv0 = std::env::args_os()
            .next()
            .map(|a| a.to_string_lossy().into_owned())
            .unwrap_or_else(|| "arcgen".to_string());
        println!("{err}");
        println!("{}", usage(program_name(&argv0)));
        process::exit(err.exit_code());
    }
}

fn run() -> Result<(), ArcError> {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(err) => {
            // --help / --version
            if !err.use_stderr() {
                err.exit();
            }
            return Err(ArcError::from_clap(err));
        }
    };
    if args.verbose {
        println!("DEBUG {args:?}");
    }

    let stdout = io::stdout();
    let mut out = stdout.lock();
    report(&mut out, &args)?;
    out.flush()?;
    Ok(())
}
