use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::Context as _;
use chrono::{Local, NaiveDate, Utc};
use clap::{Args, Parser, Subcommand};
use log::{info, warn};

use health_assist::algorithm::symptom::{format_match_line, normalize_query, top_matches};
use health_assist::algorithm::vitals::feedback::feedback_message;
use health_assist::utils::logging::{DEFAULT_LOG_FILTER, init_logging};
use health_assist::{
    AssistantConfig, HistoryStore, JsonlHistoryStore, ReadingSource, ReportPeriod,
    SymptomCheckRecord, SymptomMatcher, UserId, VitalReading, VitalStandards, analyze_vitals,
    assess_entry, load_catalog, load_readings, load_standards, parse_symptom_input, render_report,
};

#[derive(Debug, Parser)]
#[command(
    name = "health-assist",
    version,
    about = "Symptom matching and vitals analysis for a personal health tracker"
)]
struct Cli {
    /// JSON configuration file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Match symptoms against the disease catalog
    Check(CheckArgs),
    /// Show recent symptom checks
    History(HistoryArgs),
    /// Check a single day's vitals against the daily ranges
    Entry(EntryArgs),
    /// Print a weekly or monthly vitals report
    Report(ReportArgs),
}

#[derive(Debug, Args)]
struct CheckArgs {
    /// Symptoms, separated by commas or given as separate arguments
    #[arg(required = true)]
    symptoms: Vec<String>,

    /// Symptom catalog file
    #[arg(long)]
    catalog: Option<PathBuf>,

    /// Record the check in this user's history
    #[arg(long)]
    user: Option<UserId>,
}

#[derive(Debug, Args)]
struct HistoryArgs {
    #[arg(long)]
    user: UserId,

    /// Maximum number of records to show
    #[arg(long)]
    limit: Option<usize>,
}

#[derive(Debug, Args)]
struct EntryArgs {
    /// Day of the entry (defaults to today)
    #[arg(long)]
    date: Option<NaiveDate>,

    #[arg(long)]
    sleep: Option<f64>,

    /// Blood pressure as SYSTOLIC/DIASTOLIC, e.g. 120/80
    #[arg(long, value_parser = parse_blood_pressure)]
    bp: Option<(u16, u16)>,

    #[arg(long)]
    sugar: Option<f64>,

    #[arg(long)]
    weight: Option<f64>,

    #[arg(long)]
    pulse: Option<u16>,
}

#[derive(Debug, Args)]
struct ReportArgs {
    #[arg(long)]
    user: UserId,

    /// Name shown in the report header
    #[arg(long, default_value = "User")]
    name: String,

    /// weekly or monthly
    #[arg(long)]
    period: Option<ReportPeriod>,

    /// Last day of the report window (defaults to today)
    #[arg(long)]
    today: Option<NaiveDate>,

    /// Vital readings file
    #[arg(long)]
    readings: Option<PathBuf>,

    /// Standards table file
    #[arg(long)]
    standards: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    init_logging(DEFAULT_LOG_FILTER);
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => AssistantConfig::from_file(path)
            .with_context(|| format!("Failed to load configuration {}", path.display()))?,
        None => AssistantConfig::default(),
    };

    match cli.command {
        Command::Check(args) => run_check(&config, args),
        Command::History(args) => run_history(&config, &args),
        Command::Entry(args) => run_entry(&args),
        Command::Report(args) => run_report(&config, args),
    }
}

fn run_check(config: &AssistantConfig, args: CheckArgs) -> anyhow::Result<()> {
    let catalog_path = args.catalog.unwrap_or_else(|| config.catalog_path.clone());
    let catalog = load_catalog(&catalog_path)?;
    let matcher = SymptomMatcher::new(&catalog, config.matcher.clone());

    let query: Vec<String> = args
        .symptoms
        .iter()
        .map(String::as_str)
        .flat_map(parse_symptom_input)
        .collect();

    let start = Instant::now();
    let matches = matcher.matches(&query)?;
    let normalized = normalize_query(&query);
    info!("Matched {} symptoms in {:?}", normalized.len(), start.elapsed());

    if matches.is_empty() {
        println!("No matching diseases found.");
    }

    for (rank, m) in top_matches(&matches, config.matcher.display_limit)
        .iter()
        .enumerate()
    {
        println!("{}", format_match_line(rank + 1, m, normalized.len()));
        if let Some(details) = matcher.details(&m.disease) {
            if let Some(description) = details.description {
                println!("   {description}");
            }
            if !details.precautions.is_empty() {
                println!("   Precautions: {}", details.precautions.join(", "));
            }
        }
    }

    if let Some(user_id) = args.user {
        let mut store = JsonlHistoryStore::new(&config.history.path);
        let record = SymptomCheckRecord::new(
            user_id,
            Utc::now(),
            &normalized,
            &matches,
            config.matcher.summary_limit,
        );
        store.append(record)?;
        info!("Recorded symptom check for user {user_id}");
    }

    Ok(())
}

fn run_history(config: &AssistantConfig, args: &HistoryArgs) -> anyhow::Result<()> {
    let store = JsonlHistoryStore::new(&config.history.path);
    let limit = args.limit.unwrap_or(config.history.default_limit);
    let records = store.recent(args.user, limit)?;

    if records.is_empty() {
        println!("No symptom checks recorded.");
    }
    for record in records {
        println!(
            "{}  {}\n    {}",
            record.timestamp.format("%Y-%m-%d %H:%M"),
            record.symptoms,
            record.top_matches
        );
    }
    Ok(())
}

fn run_entry(args: &EntryArgs) -> anyhow::Result<()> {
    let date = args.date.unwrap_or_else(|| Local::now().date_naive());
    let mut reading = VitalReading::new(date);
    reading.sleep_hours = args.sleep;
    reading.bp_systolic = args.bp.map(|(systolic, _)| systolic);
    reading.bp_diastolic = args.bp.map(|(_, diastolic)| diastolic);
    reading.sugar = args.sugar;
    reading.weight = args.weight;
    reading.pulse = args.pulse;

    if reading.is_empty() {
        anyhow::bail!("Enter at least one vital value");
    }

    let feedback = assess_entry(&reading, &VitalStandards::daily_entry_defaults());
    println!("{}", feedback_message(&feedback));
    Ok(())
}

fn run_report(config: &AssistantConfig, args: ReportArgs) -> anyhow::Result<()> {
    let readings_path = args.readings.unwrap_or_else(|| config.readings_path.clone());
    let collection = load_readings(&readings_path)?;
    let standards_path = args.standards.as_deref().or(config.standards_path.as_deref());
    let standards = load_standards_or_default(standards_path)?;

    let period = args.period.unwrap_or(config.default_period);
    let today = args.today.unwrap_or_else(|| Local::now().date_naive());
    let window = period.window_ending(today);

    let readings = collection.readings_between(args.user, &window)?;
    let analysis = analyze_vitals(&readings, &standards);
    if analysis.is_none() {
        warn!("No readings for user {} between {window}", args.user);
    }

    print!(
        "{}",
        render_report(&args.name, period, &window, analysis.as_ref(), &standards)
    );
    Ok(())
}

fn load_standards_or_default(path: Option<&Path>) -> anyhow::Result<VitalStandards> {
    match path {
        Some(path) => Ok(load_standards(path)?),
        None => Ok(VitalStandards::report_defaults()),
    }
}

fn parse_blood_pressure(value: &str) -> Result<(u16, u16), String> {
    let (systolic, diastolic) = value
        .split_once('/')
        .ok_or_else(|| format!("expected SYSTOLIC/DIASTOLIC, got {value}"))?;
    let systolic = systolic.trim().parse().map_err(|e| format!("systolic: {e}"))?;
    let diastolic = diastolic.trim().parse().map_err(|e| format!("diastolic: {e}"))?;
    Ok((systolic, diastolic))
}
