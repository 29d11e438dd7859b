use crate::analysis::aggregator::{weekday_label, Report};
use crate::analysis::detector::DetectorKind;
use crate::analysis::evaluator::Verdict;
use colored::*;
use tabled::{settings::Style, Table, Tabled};

#[derive(Tabled)]
struct FlaggedRow {
    #[tabled(rename = "#")]
    number: String,
    summoner: String,
}

#[derive(Tabled)]
struct WeekdayRow {
    rank: String,
    day: String,
    share: String,
}

fn report_title(kind: DetectorKind) -> &'static str {
    match kind {
        DetectorKind::Boosted => "BOOSTED PLAYER REPORT",
        DetectorKind::Smurf => "SMURF REPORT",
    }
}

pub fn display_report(report: &Report, player_name: &str) {
    println!(
        "\n{}",
        format!("🎮 {} for {} ({})", report_title(report.kind), player_name, report.queue)
            .bold()
            .cyan()
    );
    println!("{}\n", "=".repeat(60).cyan());

    if report.total_matches == 0 {
        println!(
            "{}",
            format!("No {} matches found, nothing to analyze", report.queue).yellow()
        );
        println!();
        return;
    }

    println!(
        "{} {} of {} matches ({:.1}%) had a {} player",
        "📈 Flagged:".bold(),
        report.flagged_matches.to_string().red(),
        report.total_matches,
        report.flagged_percentage,
        report.kind
    );
    println!(
        "{} {} distinct players evaluated\n",
        "🔎 Analyzed:".bold(),
        report.analyzed_players
    );

    if report.flagged.is_empty() {
        println!("{}\n", "No suspicious players found".green());
    } else {
        let rows: Vec<FlaggedRow> = report
            .flagged
            .iter()
            .enumerate()
            .map(|(idx, name)| FlaggedRow {
                number: format!("{}", idx + 1),
                summoner: name.clone(),
            })
            .collect();

        let mut table = Table::new(rows);
        table.with(Style::rounded());
        println!("{}\n", table);
    }

    println!("{}", "Busiest days".bold().yellow());

    let rows: Vec<WeekdayRow> = report
        .weekdays
        .iter()
        .enumerate()
        .map(|(idx, (day, share))| WeekdayRow {
            rank: format!("#{}", idx + 1),
            day: weekday_label(*day).to_string(),
            share: format!("{:.1}%", share),
        })
        .collect();

    let mut table = Table::new(rows);
    table.with(Style::rounded());
    println!("{}", table);

    println!(
        "\n{}",
        "Note: KDA heuristics are approximate, a flag is a hint, not proof.".dimmed()
    );
    println!();
}

pub fn display_verdict(name: &str, verdict: &Verdict) {
    match verdict {
        Verdict::NotFound => {
            display_warning(&format!("Summoner {} not found, skipping", name));
        }
        Verdict::Inconclusive => {
            display_warning(&format!("No recent games found for {}, not flagged", name));
        }
        Verdict::Scored(score) => {
            let baseline = score
                .baseline
                .map(|b| format!(", long-window {:.2}", b))
                .unwrap_or_default();
            let line = format!(
                "{}: recent KDA {:.2}{} (bar {:.2})",
                name, score.recent, baseline, score.bar
            );
            if score.is_suspicious() {
                println!("{} {}", "⚠️".red(), line.red());
            } else {
                println!("{} {}", "✓".green(), line);
            }
        }
    }
}

pub fn display_skip(name: &str) {
    display_detail(&format!("{} already analyzed, skipping", name));
}

pub fn display_error(error: &str) {
    eprintln!("{} {}", "❌ Error:".red().bold(), error);
}

pub fn display_warning(message: &str) {
    println!("{} {}", "⚠".yellow(), message);
}

pub fn display_info(message: &str) {
    println!("{} {}", "ℹ️".cyan(), message);
}

pub fn display_success(message: &str) {
    println!("{} {}", "✓".green(), message);
}

pub fn display_detail(message: &str) {
    println!("  {}", message.dimmed());
}
