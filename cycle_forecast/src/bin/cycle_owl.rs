use cycle_forecast::editor::replace;
use cycle_forecast::gaps::{annotate, group_by_month_descending};
use cycle_forecast::logging::init_tracing;
use cycle_forecast::range::{cycle_day, format_date, parse_date, today};
use cycle_forecast::store::import_text;
use cycle_forecast::{FileRangeStore, ForecastError, MergeEngine, PredictionSettings, RangeStore};
use std::process::ExitCode;

const USAGE: &str = "\
Usage:
  cycle_owl update <store> [settings.toml]
  cycle_owl list <store>
  cycle_owl edit <store> <old_start> <old_end> <new_start> <new_end>
  cycle_owl import <store> <file>

Dates are written as DD.MM.YYYY.";

fn main() -> ExitCode {
    init_tracing();

    let args: Vec<String> = std::env::args().skip(1).collect();
    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(CliError::Usage) => {
            eprintln!("{}", USAGE);
            ExitCode::FAILURE
        }
        Err(CliError::Refused(reason)) => {
            eprintln!("error: {}", reason);
            ExitCode::FAILURE
        }
        Err(CliError::Forecast(e)) => {
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}

enum CliError {
    Usage,
    Refused(String),
    Forecast(ForecastError),
}

impl From<ForecastError> for CliError {
    fn from(err: ForecastError) -> Self {
        CliError::Forecast(err)
    }
}

impl From<std::io::Error> for CliError {
    fn from(err: std::io::Error) -> Self {
        CliError::Forecast(err.into())
    }
}

fn run(args: &[String]) -> Result<(), CliError> {
    let args: Vec<&str> = args.iter().map(String::as_str).collect();
    match args.as_slice() {
        ["update", store] => update(store, None),
        ["update", store, settings] => update(store, Some(*settings)),
        ["list", store] => list(store),
        ["edit", store, old_start, old_end, new_start, new_end] => {
            edit(store, [*old_start, *old_end, *new_start, *new_end])
        }
        ["import", store, file] => import(store, file),
        _ => Err(CliError::Usage),
    }
}

fn update(store_path: &str, settings_path: Option<&str>) -> Result<(), CliError> {
    let settings = match settings_path {
        Some(path) => PredictionSettings::load(path)?,
        None => {
            let mut settings = PredictionSettings::default();
            settings.apply_env_overrides();
            settings
        }
    };

    let mut store = FileRangeStore::new(store_path);
    let merged = MergeEngine::update(&mut store, &settings)?;
    let today = today();
    for range in merged.iter().filter(|range| range.is_future(today)) {
        println!("predicted {} - {}", format_date(range.start), format_date(range.end));
    }
    Ok(())
}

fn list(store_path: &str) -> Result<(), CliError> {
    let store = FileRangeStore::new(store_path);
    let ranges = store.load()?;
    let today = today();

    println!("Cycle day {}", cycle_day(&ranges, today));
    for bucket in group_by_month_descending(&annotate(&ranges)) {
        println!("{}", bucket.month);
        for entry in bucket.entries {
            let marker = if entry.range.is_future(today) { "*" } else { " " };
            println!(
                "  {} {} - {}  (+{} days)",
                marker,
                format_date(entry.range.start),
                format_date(entry.range.end),
                entry.gap_days
            );
        }
    }
    Ok(())
}

fn edit(store_path: &str, dates: [&str; 4]) -> Result<(), CliError> {
    let [old_start, old_end, new_start, new_end] = dates;
    let mut store = FileRangeStore::new(store_path);
    let ranges = store.load()?;

    let old_start = parse_date(old_start)?;
    if old_start > today() {
        return Err(CliError::Refused(
            "predicted ranges are recomputed on every update and cannot be edited".to_string(),
        ));
    }

    let updated = replace(
        &ranges,
        old_start,
        parse_date(old_end)?,
        parse_date(new_start)?,
        parse_date(new_end)?,
    );
    if updated == ranges {
        println!("no matching range");
        return Ok(());
    }
    store.save(&updated)?;
    Ok(())
}

fn import(store_path: &str, file: &str) -> Result<(), CliError> {
    let text = std::fs::read_to_string(file)?;
    let mut store = FileRangeStore::new(store_path);
    let ranges = import_text(&mut store, &text)?;
    println!("imported {} ranges", ranges.len());
    Ok(())
}
