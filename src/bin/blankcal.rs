extern crate blankcal as lib;

use flexi_logger::{FileSpec, Logger};
use lib::config::Config;
use lib::error::{Error, ErrorKind};
use lib::render::{self, Destination, LatexRenderer, SystemViewer};
use std::ffi::OsString;
use std::path::PathBuf;
use std::process;
use structopt::clap::{AppSettings, ErrorKind as ClapErrorKind};
use structopt::StructOpt;

const USAGE: &str = "Blank monthly wall calendar

Usage: blankcal YEAR [OUTPUT FILENAME]
If an output filename is omitted, the calendar will be created in a
temporary folder and opened directly in your PDF viewer.";

#[derive(Debug, StructOpt)]
#[structopt(
    name = "blankcal",
    author = "Julian Bigge <j.reedts@gmail.com>",
    about = "Typesets a blank wall calendar, one month per page.",
    setting = AppSettings::AllowNegativeNumbers
)]
pub struct Args {
    #[structopt(name = "YEAR", help = "year to print")]
    pub year: i32,

    #[structopt(
        name = "OUTPUT",
        help = "where to copy the PDF instead of opening it",
        parse(from_os_str)
    )]
    pub output: Option<PathBuf>,

    #[structopt(
        long = "renderer",
        help = "LaTeX program used to render the calendar",
        default_value = "pdflatex",
        parse(from_os_str)
    )]
    pub renderer: OsString,

    #[structopt(long = "log-file", help = "path to log file", parse(from_os_str))]
    pub log_file: Option<PathBuf>,
}

fn usage() -> ! {
    println!("{}", USAGE);
    process::exit(Error::from(ErrorKind::Usage).exit_code());
}

fn start_logger(log_file: Option<PathBuf>) -> Result<(), Box<dyn std::error::Error>> {
    const DEFAULT_LOG_LEVEL: &'static str = if cfg!(debug_assertions) {
        "debug"
    } else {
        "warn"
    };

    let mut logger = Logger::try_with_env_or_str(DEFAULT_LOG_LEVEL)?;

    if let Some(log_file) = log_file {
        logger = logger
            .log_to_file(FileSpec::try_from(log_file)?)
            .print_message();
    }

    logger.start()?;
    Ok(())
}

fn main() {
    let args = match Args::from_args_safe() {
        Ok(args) => args,
        Err(err) => match err.kind {
            ClapErrorKind::HelpDisplayed | ClapErrorKind::VersionDisplayed => err.exit(),
            _ => usage(),
        },
    };

    if let Err(err) = start_logger(args.log_file.clone()) {
        eprintln!("Unable to start logger: {}", err);
    }

    let destination = match args.output {
        Some(path) => Destination::CopyTo(path),
        None => Destination::View,
    };
    let config = Config::default().with_renderer(args.renderer);

    // Everything that needs cleaning up is dropped by the time `generate`
    // returns, so exiting right away is fine.
    if let Err(err) = render::generate(
        args.year,
        &destination,
        &config,
        &LatexRenderer,
        &SystemViewer,
    ) {
        match err.kind {
            ErrorKind::Render(_) | ErrorKind::MissingArtifact => {
                eprintln!("Error executing LaTeX! Please see the error above. ({})", err)
            }
            _ => eprintln!("Error: {}", err),
        }
        process::exit(err.exit_code());
    }
}
