//! Display functions for command results

use super::formatters::{classification_codes, colored_row, colored_tile, create_progress_bar};
use crate::commands::{AuditReport, CheckResult};
use crate::game::{GameSession, GameStatus, MAX_ATTEMPTS, Statistics};
use colored::Colorize;

/// Print the classification of one target/guess pair
pub fn print_check_result(result: &CheckResult) {
    println!(
        "\n{}  {}",
        colored_row(&result.guess, &result.classifications),
        classification_codes(&result.classifications).bright_black()
    );
    if result.is_match() {
        println!("{}", "✅ Exact match".green().bold());
    }
}

/// Print the submitted rows of a game, one coloured line each
pub fn print_board(session: &GameSession<'_>) {
    println!();
    for row in session
        .board()
        .iter()
        .take(session.attempts_used().max(1))
    {
        let line: String = row.iter().map(|&tile| colored_tile(tile).to_string()).collect();
        println!("  {line}");
    }
    println!();
}

/// Print the final board, end-of-game banner, score and share grid
pub fn print_game_result(session: &GameSession<'_>) {
    print_board(session);
    println!("{}", "═".repeat(50).bright_cyan());
    match session.status() {
        GameStatus::Won { attempts } => {
            println!(
                "{}",
                format!(
                    "🎉 Solved in {attempts} {}!",
                    if attempts == 1 { "guess" } else { "guesses" }
                )
                .bright_green()
                .bold()
            );
        }
        GameStatus::Lost => {
            println!(
                "{} {}",
                "❌ Out of guesses. The word was".red().bold(),
                session.target().text().bright_yellow().bold()
            );
        }
        GameStatus::Playing => {}
    }
    let score = session.score();
    let score_text = format!("{score:+}");
    println!(
        "  Score: {}",
        if score >= 0 {
            score_text.bright_green().bold()
        } else {
            score_text.red().bold()
        }
    );
    println!("\n{}", session.share_grid());
    println!("{}", "═".repeat(50).bright_cyan());
}

/// Print in-memory statistics for this run
pub fn print_statistics(stats: &Statistics) {
    println!("\n📊 {}", "Statistics".bright_cyan().bold());
    println!("  Played:          {}", stats.played);
    println!("  Win %:           {:.0}", stats.win_percentage());
    println!("  Current streak:  {}", stats.current_streak);
    println!("  Max streak:      {}", stats.max_streak);
    println!("  Total score:     {}", stats.total_score);

    let max_count = stats.guess_distribution.iter().copied().max().unwrap_or(0);
    for (guesses, &count) in stats
        .guess_distribution
        .iter()
        .enumerate()
        .skip(1)
        .take(MAX_ATTEMPTS)
    {
        let bar = create_progress_bar(count as f64, max_count as f64, 20);
        println!("  {guesses}: {} {count}", bar.green());
    }
}

/// Print the evaluator audit summary
pub fn print_audit_report(report: &AuditReport) {
    println!("\n{}", "═".repeat(70));
    println!(" Evaluator Audit ");
    println!("{}", "═".repeat(70));

    println!("\n📊 {}", "Coverage".bright_cyan().bold());
    println!("  Targets:             {}", report.targets);
    println!("  Pairs evaluated:     {}", report.pairs);
    println!(
        "  Total time:          {:.2}s",
        report.duration.as_secs_f64()
    );

    println!("\n🔁 {}", "Repeated Letters".bright_cyan().bold());
    let rate = format!("({:.1}%)", report.disagreement_rate());
    println!(
        "  Naive rule wrong:    {} {}",
        report.disagreements,
        if report.disagreements == 0 {
            rate.green()
        } else {
            rate.yellow()
        }
    );
    println!("  Overcounted tiles:   {}", report.overcounted_tiles);

    if !report.examples.is_empty() {
        println!("\n🔍 {}", "Examples".yellow().bold());
        for example in &report.examples {
            println!(
                "  {} → {}  {}  naive {}",
                example.target.text().bright_white().bold(),
                example.guess.text(),
                example.feedback,
                classification_codes(&example.naive).bright_black()
            );
        }
    }
}
