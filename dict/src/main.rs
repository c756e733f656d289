//! Looks up a word or phrase in the Collins English Dictionary and prints the result.

use std::error::Error as _;
use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use argh::{EarlyExit, FromArgs};
use tracing::debug;

use dict::render::Renderer;
use dict::{Config, Error, http, lookup, terminal};

/// The usage line printed after invalid arguments.
const USAGE: &str = "usage: dict <word/phrase>";

/// Look up a word or phrase in the Collins English Dictionary.
#[derive(Debug, FromArgs)]
struct Opts {
    /// path to config file
    #[argh(option, short = 'c')]
    config: Option<PathBuf>,
    /// print the result as JSON
    #[argh(switch)]
    json: bool,
    /// the word or phrase to look up
    #[argh(positional)]
    term: String,
}

/// Parses the command-line arguments, `args` excluding the program name.
fn parse_args(args: &[&str]) -> Result<Opts, EarlyExit> {
    Opts::from_args(&["dict"], args)
}

/// Loads the configuration, looks up the term and writes the result to standard output.
async fn run(opts: Opts) -> Result<(), Error> {
    let config = Config::load(opts.config.as_deref())?;

    dict::tracing::try_init(&config.log)?;

    debug!(?config, "configuration loaded");

    let client = http::build_client(&config.http)?;
    let lookup = lookup::lookup(&client, &opts.term).await?;

    let stdout = io::stdout();
    let mut out = stdout.lock();

    if opts.json {
        serde_json::to_writer_pretty(&mut out, &lookup)?;
        writeln!(out)?;
    } else {
        let width = terminal::width(config.output.fallback_width);

        debug!(%width, "rendering");

        Renderer::new(width)
            .synonyms(config.output.synonyms)
            .render(&mut out, &opts.term, &lookup)?;
    }

    out.flush()?;

    Ok(())
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let args: Vec<&str> = args.iter().map(String::as_str).collect();

    let opts = match parse_args(&args) {
        Ok(opts) => opts,
        Err(EarlyExit { output, status }) => {
            return match status {
                Ok(()) => {
                    println!("{output}");
                    ExitCode::SUCCESS
                }
                Err(()) => {
                    eprintln!("{output}");
                    eprintln!("{USAGE}");
                    ExitCode::FAILURE
                }
            };
        }
    };

    match run(opts).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            match err.source() {
                Some(source) => eprintln!("error: {err}: {source}"),
                None => eprintln!("error: {err}"),
            }

            ExitCode::from(err.exit_code())
        }
    }
}
