use std::env;
use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::Path;
use std::process;

use anyhow::{Context, Result};
use clap::Parser;
use log::{debug, info, LevelFilter};
use simplelog::{ColorChoice, Config, TermLogger, TerminalMode};

use rs_mactime::cli::Args;
use rs_mactime::config::{load_options, write_zone_list, SummaryGranularity, TimelineOptions, TimelineSettings};
use rs_mactime::constants::{ERROR_CANNOT_OPEN, STDIN_SOURCE, TZ_ENV_VAR};
use rs_mactime::timeline::{generate, session_timezone, write_session_header, SessionInfo};
use rs_mactime::utils::names::NameLookup;
use rs_mactime::utils::summary::{write_index_title, PeriodSummarizer};

fn main() {
    let args = Args::parse();

    if let Err(e) = initialize_logging(args.verbose) {
        eprintln!("{:#}", e);
    }

    if let Err(e) = run(&args) {
        eprintln!("{:#}", e);
        process::exit(1);
    }
}

/// Initialize logging with the specified verbosity level.
/// Logs go to stderr so they never mix with the timeline on stdout.
fn initialize_logging(verbose: bool) -> Result<()> {
    let log_level = if verbose { LevelFilter::Debug } else { LevelFilter::Warn };
    TermLogger::init(
        log_level,
        Config::default(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    ).context("Failed to initialize logger")?;
    Ok(())
}

fn run(args: &Args) -> Result<()> {
    if args.wants_zone_list() {
        return print_zone_list();
    }

    let options = load_and_apply_options(args)?;
    let index = args.index_spec()?;
    let settings = TimelineSettings::resolve(
        &options,
        args.date.as_deref(),
        index.as_ref().map(|(granularity, _)| *granularity),
    )?;
    debug!("Resolved settings: {:?}", settings);

    let owners = NameLookup::load_optional(options.passwd_file.as_deref())?;
    let groups = NameLookup::load_optional(options.group_file.as_deref())?;

    let source = source_label(args.body.as_deref());

    // The index file is created before any input is read so a bad path fails fast
    let mut summarizer = match &index {
        Some((granularity, path)) => Some(open_index(path, *granularity, &source, &options)?),
        None => None,
    };

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());

    if options.header {
        let session = SessionInfo {
            source: source.clone(),
            window_arg: args.date.clone(),
            timezone: session_timezone(&settings.zone, env::var(TZ_ENV_VAR).ok()),
            passwd_file: options.passwd_file.as_ref().map(|p| p.display().to_string()),
            group_file: options.group_file.as_ref().map(|p| p.display().to_string()),
        };
        write_session_header(&mut out, &session)?;
    }

    let input = open_body(args.body.as_deref())?;
    info!("Building timeline from {}", source);

    let stats = generate(&settings, owners, groups, input, &mut out, summarizer.as_mut())?;
    out.flush().context("Failed to flush timeline output")?;

    info!(
        "Read {} lines: {} records, {} skipped, {} outside the window; wrote {} rows",
        stats.ingest.lines,
        stats.ingest.records,
        stats.ingest.skipped,
        stats.ingest.outside_window,
        stats.emit.rows
    );
    Ok(())
}

/// Read the YAML defaults (if any) and overlay the command-line flags
fn load_and_apply_options(args: &Args) -> Result<TimelineOptions> {
    let mut options = load_options(args.config.as_deref())?;
    args.apply_to(&mut options);
    Ok(options)
}

fn print_zone_list() -> Result<()> {
    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    write_zone_list(&mut out)?;
    out.flush().context("Failed to write zone list")?;
    Ok(())
}

fn source_label(body: Option<&Path>) -> String {
    match body {
        Some(path) => path.display().to_string(),
        None => STDIN_SOURCE.to_string(),
    }
}

fn open_body(body: Option<&Path>) -> Result<Box<dyn BufRead>> {
    match body {
        Some(path) => {
            let file = File::open(path)
                .with_context(|| format!("{} {}", ERROR_CANNOT_OPEN, path.display()))?;
            Ok(Box::new(BufReader::new(file)))
        }
        None => Ok(Box::new(BufReader::new(io::stdin()))),
    }
}

fn open_index(
    path: &Path,
    granularity: SummaryGranularity,
    source: &str,
    options: &TimelineOptions,
) -> Result<PeriodSummarizer<BufWriter<File>>> {
    let file = File::create(path)
        .with_context(|| format!("{} {}", ERROR_CANNOT_OPEN, path.display()))?;
    let mut writer = BufWriter::new(file);
    write_index_title(&mut writer, granularity, source)?;
    debug!("Writing {} summary to {}", granularity, path.display());

    Ok(PeriodSummarizer::new(
        writer,
        granularity,
        options.numeric_month,
        options.output_format.index_delimiter(),
    ))
}
