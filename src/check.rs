use crate::digits::{Digits, Verdict};
use crate::error::{CheckError, Result};
use crate::input::read_number;
use log::{debug, info};
use serde::Serialize;
use std::io::{BufRead, Write};
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

impl FromStr for OutputFormat {
    type Err = CheckError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            other => Err(CheckError::InvalidInput(format!(
                "unknown output format {:?}",
                other
            ))),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Report {
    pub number: u32,
    pub digits: Digits,
    pub cube_sum: u32,
    pub verdict: Verdict,
}

/// Checks `n`. Negative numbers get no report.
pub fn check(n: i32) -> Option<Report> {
    let number = match u32::try_from(n) {
        Ok(number) => number,
        Err(_) => {
            info!("skipping negative input {}", n);
            return None;
        }
    };

    let digits = Digits::of(number);
    let cube_sum = digits.cube_sum();
    debug!(
        "{} -> hundreds={} tens={} ones={} cube_sum={}",
        number, digits.hundreds, digits.tens, digits.ones, cube_sum
    );

    Some(Report {
        number,
        digits,
        cube_sum,
        verdict: Verdict::from(number == cube_sum),
    })
}

/// Writes the report for `n` in `format`, or nothing when `n` is negative.
/// Text output is the bare token with no trailing newline.
pub fn write_verdict<W: Write>(n: i32, format: OutputFormat, out: &mut W) -> Result<()> {
    if let Some(report) = check(n) {
        match format {
            OutputFormat::Text => write!(out, "{}", report.verdict)?,
            OutputFormat::Json => serde_json::to_writer(&mut *out, &report)?,
        }
    }
    out.flush()?;
    Ok(())
}

/// Reads one number from `reader` and writes its verdict to `out`.
pub fn run_once<R: BufRead, W: Write>(reader: &mut R, out: &mut W, format: OutputFormat) -> Result<()> {
    let n = read_number(reader)?;
    write_verdict(n, format, out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;
    use std::io::Cursor;
    use test_log::test;

    fn run_text(input: &str) -> Result<String> {
        let mut out = Vec::new();
        run_once(&mut Cursor::new(input), &mut out, OutputFormat::Text)?;
        Ok(String::from_utf8(out).unwrap())
    }

    #[test]
    fn concrete_verdicts() {
        assert_eq!(run_text("153").unwrap(), "DA");
        assert_eq!(run_text("370\n").unwrap(), "DA");
        assert_eq!(run_text("123").unwrap(), "NE");
        assert_eq!(run_text("5").unwrap(), "NE");
        assert_eq!(run_text("0").unwrap(), "DA");
    }

    #[test]
    fn negative_input_writes_nothing() {
        assert_eq!(run_text("-7").unwrap(), "");
        assert!(check(-153).is_none());
        assert!(check(i32::MIN).is_none());

        let mut rng = rand::thread_rng();
        for _ in 0..500 {
            let n = rng.gen_range(i32::MIN..0);
            assert_eq!(run_text(&n.to_string()).unwrap(), "", "n = {}", n);
        }
    }

    #[test]
    fn invalid_input_writes_nothing() {
        let mut out = Vec::new();
        let result = run_once(&mut Cursor::new("seven"), &mut out, OutputFormat::Text);
        assert!(matches!(result, Err(CheckError::InvalidInput(_))));
        assert!(out.is_empty());
    }

    #[test]
    fn same_input_same_output() {
        for n in ["153", "154", "-1", "999"] {
            assert_eq!(run_text(n).unwrap(), run_text(n).unwrap());
        }
    }

    #[test]
    fn json_report() {
        let mut out = Vec::new();
        write_verdict(370, OutputFormat::Json, &mut out).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "number": 370,
                "digits": { "hundreds": 3, "tens": 7, "ones": 0 },
                "cube_sum": 370,
                "verdict": "DA",
            })
        );
    }

    #[test]
    fn json_skips_negative() {
        let mut out = Vec::new();
        write_verdict(-370, OutputFormat::Json, &mut out).unwrap();
        assert!(out.is_empty());
    }

    #[test]
    fn parses_format_names() {
        assert_eq!("text".parse::<OutputFormat>().unwrap(), OutputFormat::Text);
        assert_eq!("json".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
        assert!("xml".parse::<OutputFormat>().is_err());
    }
}
