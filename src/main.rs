use armcheck::check::{run_once, write_verdict, OutputFormat};
use armcheck::input::parse_number;
use armcheck::interactive::run_interactive;
use clap::{App, Arg};
use log::info;
use std::io;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    // Parse command line arguments
    let matches = App::new("armcheck")
        .version("0.1.0")
        .about("Checks whether a number equals the sum of the cubes of its last three digits")
        .arg(
            Arg::with_name("number")
                .short("n")
                .long("number")
                .value_name("N")
                .help("Number to check instead of reading one from stdin")
                .takes_value(true)
                .allow_hyphen_values(true),
        )
        .arg(
            Arg::with_name("format")
                .short("f")
                .long("format")
                .value_name("FORMAT")
                .help("Output format")
                .takes_value(true)
                .possible_values(&["text", "json"])
                .default_value("text"),
        )
        .arg(
            Arg::with_name("interactive")
                .short("i")
                .long("interactive")
                .help("Check one number per line until EOF or 'exit'")
                .takes_value(false)
                .conflicts_with("number"),
        )
        .get_matches();

    let format: OutputFormat = matches.value_of("format").unwrap_or("text").parse()?;

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut out = stdout.lock();

    if matches.is_present("interactive") {
        info!("starting interactive mode");
        run_interactive(&mut stdin.lock(), &mut out, format)?;
    } else if let Some(number) = matches.value_of("number") {
        let n = parse_number(number)?;
        write_verdict(n, format, &mut out)?;
    } else {
        run_once(&mut stdin.lock(), &mut out, format)?;
    }

    Ok(())
}
