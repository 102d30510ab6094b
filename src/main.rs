//! Interactive command line driver.

use std::io::{self, BufRead, Write};
use std::process::ExitCode;

use clap::Parser;

use powmag::{estimate, Error, ExtFloat};

/// Estimates base ^ exponent and prints the result in scientific notation.
#[derive(Parser)]
#[command(version, about)]
struct Args {
    /// Number of decimal places in the printed result.
    #[arg(default_value_t = 12)]
    precision: usize,
}

/// Prompts on stdout and parses one line of input as a float.
fn read_value(prompt: &str) -> Result<ExtFloat, Error> {
    print!("{}", prompt);
    io::stdout().flush().map_err(|_| Error::InvalidInput)?;

    let mut line = String::new();
    io::stdin()
        .lock()
        .read_line(&mut line)
        .map_err(|_| Error::InvalidInput)?;

    line.trim().parse::<ExtFloat>().map_err(|_| Error::InvalidInput)
}

fn run(precision: usize) -> Result<(), Error> {
    println!("Precision is set to {} decimal places", precision);

    let base = read_value("Enter base: ")?;
    println!("Base read as:\n{:.*}", precision, base);
    if !(base > 0.0) {
        return Err(Error::InvalidBase);
    }

    let exponent = read_value("\nEnter exponent: ")?;
    println!("Exponent read as:\n{:.*}", precision, exponent);

    let r = estimate(base, exponent)?;
    println!("\nResult:\n{:.*} E {:.0}", precision, r.mantissa, r.exponent);

    Ok(())
}

fn main() -> ExitCode {
    let args = Args::parse();

    match run(args.precision) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
