use clap::{ArgAction, Parser};
use std::path::PathBuf;

use anyhow::{anyhow, Result};

use crate::config::{OutputFormat, SummaryGranularity, TimelineOptions};

/// Command-line arguments for rs-mactime.
///
/// The short flags follow The Sleuth Kit's `mactime`, so `-h` selects the
/// session header and help is only available as `--help`.
#[derive(Parser, Debug)]
#[clap(
    name = "rs-mactime",
    version,
    about = "Create an ASCII time line of file activity from a body file",
    disable_help_flag = true
)]
pub struct Args {
    /// Body file location, else STDIN is used
    #[clap(short = 'b', long = "body")]
    pub body: Option<PathBuf>,

    /// Output in comma delimited format
    #[clap(short = 'd', long)]
    pub delimited: bool,

    /// Group file location, else GIDs are used
    #[clap(short = 'g', long = "group-file")]
    pub group_file: Option<PathBuf>,

    /// Password file location, else UIDs are used
    #[clap(short = 'p', long = "passwd-file")]
    pub passwd_file: Option<PathBuf>,

    /// Display a header with session information
    #[clap(short = 'h', long)]
    pub header: bool,

    /// Summary index: bucket type (day or hour) and file
    #[clap(short = 'i', long = "index", num_args = 2, value_names = ["day|hour", "FILE"])]
    pub index: Option<Vec<String>>,

    /// Dates are displayed in ISO 8601 format (UTC)
    #[clap(short = 'y', long)]
    pub iso8601: bool,

    /// Dates have month as number instead of word (does not work with -y)
    #[clap(short = 'm', long = "month-number")]
    pub month_number: bool,

    /// Time zone the data came from, e.g. Europe/Berlin ("list" prints all names)
    #[clap(short = 'z', long)]
    pub timezone: Option<String>,

    /// Path to a YAML file with option defaults
    #[clap(short = 'c', long)]
    pub config: Option<PathBuf>,

    /// Verbose logging
    #[clap(short, long)]
    pub verbose: bool,

    /// Print help
    #[clap(long, action = ArgAction::Help)]
    pub help: Option<bool>,

    /// Starting date (yyyy-mm-dd) or range (yyyy-mm-dd..yyyy-mm-dd); either side may carry a time (yyyy-mm-ddThh:mm:ss)
    pub date: Option<String>,
}

impl Args {
    /// True when `-z list` asked for the zone names
    pub fn wants_zone_list(&self) -> bool {
        self.timezone
            .as_deref()
            .map_or(false, |zone| zone.eq_ignore_ascii_case("list"))
    }

    /// Validated `-i` arguments
    pub fn index_spec(&self) -> Result<Option<(SummaryGranularity, PathBuf)>> {
        match self.index.as_deref() {
            None => Ok(None),
            Some([kind, path]) => Ok(Some((kind.parse()?, PathBuf::from(path)))),
            Some(_) => Err(anyhow!("-i requires a type and a file")),
        }
    }

    /// Overlay the flags given on the command line onto file or default options.
    pub fn apply_to(&self, options: &mut TimelineOptions) {
        if self.delimited {
            options.output_format = OutputFormat::Delimited;
        }
        if self.iso8601 {
            options.iso8601 = true;
        }
        if self.month_number {
            options.numeric_month = true;
        }
        if self.header {
            options.header = true;
        }
        if let Some(zone) = &self.timezone {
            options.timezone = Some(zone.clone());
        }
        if let Some(path) = &self.passwd_file {
            options.passwd_file = Some(path.clone());
        }
        if let Some(path) = &self.group_file {
            options.group_file = Some(path.clone());
        }
    }
}
