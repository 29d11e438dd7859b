mod analysis;
mod api;
mod config;
mod display;
mod error;
mod rate_limit;

use analysis::aggregator::Report;
use analysis::detector::PipelineSettings;
use analysis::scanner::MatchScanner;
use anyhow::{anyhow, Context, Result};
use api::client::RiotApiClient;
use api::models::{QueueType, SummonerDto};
use api::MatchDataSource;
use chrono::Local;
use clap::{Parser, ValueEnum};
use config::Config;
use display::output::{display_error, display_info, display_report, display_success, display_warning};
use display::progress::with_ticker;
use indicatif::ProgressBar;
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum DetectorChoice {
    Boosted,
    Smurf,
    Both,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum QueueChoice {
    Solo,
    Flex,
    All,
}

#[derive(Parser, Debug)]
#[command(name = "League Suspicion")]
#[command(about = "Estimate how many of your ranked games had a smurf or boosted player", long_about = None)]
struct Args {
    /// Summoner name or Riot ID (Name#TAG). Defaults to SUMMONER_NAME from .env
    summoner: Option<String>,

    /// Region (default: euw1)
    #[arg(short, long)]
    region: Option<String>,

    /// Which detector to run
    #[arg(short, long, value_enum, default_value_t = DetectorChoice::Both)]
    detector: DetectorChoice,

    /// Which ranked queue to scan
    #[arg(short, long, value_enum, default_value_t = QueueChoice::All)]
    queue: QueueChoice,

    /// Override the number of your own matches to scan (boosted: 5, smurf: 20)
    #[arg(short, long)]
    matches: Option<usize>,

    /// Seconds between progress lines
    #[arg(long, default_value = "30")]
    progress_interval: u64,

    /// Hide per-match diagnostics (KDA lookups, skipped summoners)
    #[arg(long)]
    quiet: bool,
}

impl Args {
    fn pipelines(&self) -> Vec<PipelineSettings> {
        let selected = match self.detector {
            DetectorChoice::Boosted => vec![PipelineSettings::boosted()],
            DetectorChoice::Smurf => vec![PipelineSettings::smurf()],
            DetectorChoice::Both => vec![PipelineSettings::boosted(), PipelineSettings::smurf()],
        };

        match self.matches {
            Some(count) => selected
                .into_iter()
                .map(|settings| settings.with_match_count(count))
                .collect(),
            None => selected,
        }
    }

    fn queues(&self) -> Vec<QueueType> {
        match self.queue {
            QueueChoice::Solo => vec![QueueType::SoloQ],
            QueueChoice::Flex => vec![QueueType::Flex],
            QueueChoice::All => QueueType::ALL.to_vec(),
        }
    }
}

fn main() {
    let args = Args::parse();

    if let Err(e) = run(args) {
        display_error(&format!("{:#}", e));
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<()> {
    let mut config = Config::from_env().context("Failed to load configuration")?;
    if let Some(region) = &args.region {
        config.region = region.to_lowercase();
    }

    let summoner_name = args
        .summoner
        .clone()
        .or_else(|| config.summoner_name.clone())
        .ok_or_else(|| anyhow!("No summoner given. Pass one or set SUMMONER_NAME in .env"))?;

    display_info(&format!(
        "Fetching data for {} in region {}",
        summoner_name, config.region
    ));

    let client = RiotApiClient::new(config.clone());

    let me = client
        .lookup_summoner(&summoner_name)
        .with_context(|| format!("Could not look up {}", summoner_name))?;
    display_success(&format!("Summoner Level: {}", me.summoner_level));

    let interval = Duration::from_secs(args.progress_interval.max(1));

    for settings in args.pipelines() {
        for queue in args.queues() {
            let report = run_queue(&client, settings, queue, &me, interval, args.quiet)
                .with_context(|| format!("{} scan of {} aborted", settings.kind(), queue))?;
            display_report(&report, &summoner_name);
        }
    }

    client.request_log().display_status();

    Ok(())
}

fn run_queue<S: MatchDataSource>(
    source: &S,
    settings: PipelineSettings,
    queue: QueueType,
    me: &SummonerDto,
    interval: Duration,
    quiet: bool,
) -> Result<Report> {
    display_info(&format!(
        "Running {} detection on {} (last {} matches)...",
        settings.kind(),
        queue,
        settings.match_count
    ));

    let scanner = MatchScanner::new(source, settings, queue, quiet, Local);
    let match_ids = scanner.list_matches(&me.puuid)?;

    if match_ids.is_empty() {
        display_warning(&format!("No {} matches found", queue));
    } else {
        display_success(&format!("Found {} matches to analyze", match_ids.len()));
    }

    let pb = ProgressBar::new(match_ids.len() as u64);
    pb.set_message("Scanning matches");

    let report = with_ticker(&pb, interval, || scanner.scan(&match_ids, &pb))?;

    pb.finish_with_message("✓ Matches scanned");

    Ok(report)
}
