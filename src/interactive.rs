use crate::check::{write_verdict, OutputFormat};
use crate::error::Result;
use crate::input::parse_number;
use std::io::{BufRead, Write};

const PROMPT: &str = "armcheck> ";

/// Line mode: one number per line, one verdict per line. Bad lines are
/// reported and skipped; `exit` or EOF ends the loop.
pub fn run_interactive<R: BufRead, W: Write>(reader: &mut R, out: &mut W, format: OutputFormat) -> Result<()> {
    let mut line = String::new();

    loop {
        write!(out, "{}", PROMPT)?;
        out.flush()?;

        line.clear();
        if reader.read_line(&mut line)? == 0 {
            writeln!(out)?;
            break;
        }
        let input = line.trim();

        match input {
            "" => continue,
            "exit" => break,
            "help" => {
                writeln!(out, "Enter a number to check it, or:")?;
                writeln!(out, "  help  - Show this help message")?;
                writeln!(out, "  exit  - Leave interactive mode")?;
            }
            _ => match parse_number(input) {
                Ok(n) if n < 0 => writeln!(out, "-")?,
                Ok(n) => {
                    write_verdict(n, format, out)?;
                    writeln!(out)?;
                }
                Err(e) => writeln!(out, "Error: {}", e)?,
            },
        }
    }

    out.flush()?;
    Ok(())
}
