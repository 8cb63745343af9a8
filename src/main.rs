use std::fs;

use basicalc::get_result;
use clap::Parser;

/// basicalc evaluates a single BASIC-flavored arithmetic or logical
/// statement: optional `alias = value` declarations terminated by `;`,
/// followed by one expression.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells basicalc to read the statement from a file instead of the
    /// command line.
    #[arg(short, long)]
    file: bool,

    statement: String,
}

fn main() {
    let args = Args::parse();

    let statement = if args.file {
        fs::read_to_string(&args.statement).unwrap_or_else(|_| {
            eprintln!("Failed to read the input file '{}'. Perhaps this file does not exist?",
                      &args.statement);
            std::process::exit(1);
        })
    } else {
        args.statement
    };

    println!("{}", get_result(&statement));
}
