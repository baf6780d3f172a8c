use crate::error::{CheckError, Result};
use log::warn;
use std::io::BufRead;

/// Parses the first whitespace-delimited token of `s` as an `i32`.
///
/// A leading `+` or `-` is accepted. Anything after the first token is ignored.
pub fn parse_number(s: &str) -> Result<i32> {
    let token = s
        .split_whitespace()
        .next()
        .ok_or_else(|| CheckError::InvalidInput("no number given".to_string()))?;

    token.parse::<i32>().map_err(|e| {
        warn!("rejecting token {:?}: {}", token, e);
        CheckError::InvalidInput(format!("{:?} is not a valid integer ({})", token, e))
    })
}

/// Reads lines until one holds a token, then parses it. EOF before any token
/// is an `InvalidInput` error.
pub fn read_number<R: BufRead>(reader: &mut R) -> Result<i32> {
    let mut line = String::new();
    loop {
        line.clear();
        if reader.read_line(&mut line)? == 0 {
            return Err(CheckError::InvalidInput("no number given".to_string()));
        }
        if !line.trim().is_empty() {
            return parse_number(&line);
        }
    }
}
