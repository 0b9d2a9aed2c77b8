//! Thin stdin driver for the Rabin-Karp searcher: reads one line of text and
//! one line of pattern, then prints the offset of every occurrence.

use std::error::Error;
use std::io::{self, BufRead, Write};
use std::process::ExitCode;

use strsearch::string::{search, DEFAULT_MODULUS};

fn main() -> ExitCode {
    let stdin = io::stdin();
    let stdout = io::stdout();
    match run(&mut stdin.lock(), &mut stdout.lock()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("substring_search: {err}");
            ExitCode::FAILURE
        }
    }
}

/// Runs the search against the given reader and writer. Both lines are read
/// and the search completed before anything is written, so a failure never
/// produces partial output.
fn run<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> Result<(), Box<dyn Error>> {
    let text = read_line(input, "text")?;
    let pattern = read_line(input, "pattern")?;
    let offsets = search(text.as_bytes(), pattern.as_bytes(), DEFAULT_MODULUS)?;
    for i in offsets {
        writeln!(output, "Pattern found at index {i}")?;
    }
    Ok(())
}

/// Reads one line, stripping the trailing newline. Hitting end of input
/// before the line exists is an error, distinct from reading an empty line.
fn read_line<R: BufRead>(input: &mut R, what: &str) -> Result<String, Box<dyn Error>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Err(format!("missing {what} line on standard input").into());
    }
    while line.ends_with('\n') || line.ends_with('\r') {
        line.pop();
    }
    Ok(line)
}
