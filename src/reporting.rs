//! Console output for videos, feed rankings and recalculation reports.

use colored::Colorize;
use std::fmt::Write;

use crate::graph::{InteractionGraph, VideoNode};
use crate::scoring::{Personalization, RankReport};
use crate::types::Recommendation;

const RULE: &str = "========================================";

/// Renders the "now playing" card for one video.
#[must_use]
pub fn format_video(video: &VideoNode) -> String {
    let mut out = String::new();
    let c = video.counters();
    let title = video.title().unwrap_or_else(|| video.id());

    let _ = writeln!(out, "{RULE}");
    let _ = writeln!(out, "{} {}", "Now Playing:".bold(), title.cyan());
    let _ = writeln!(out, "Genre: {}", video.genre());
    let _ = writeln!(out, "Viewers: {}", c.viewers);
    let _ = writeln!(
        out,
        "Likes: {} | Comments: {} | Shares: {} | Saves: {}",
        c.likes, c.comments, c.shares, c.saves
    );
    let _ = writeln!(out, "{RULE}");
    out
}

/// Renders a ranked feed, one card per entry followed by its score.
#[must_use]
pub fn format_ranking(graph: &InteractionGraph, ranked: &[Recommendation]) -> String {
    if ranked.is_empty() {
        return format!("{}\n", "No recommendations.".yellow());
    }

    let mut out = String::new();
    for (position, rec) in ranked.iter().enumerate() {
        let _ = writeln!(out, "{}", format!("#{}", position + 1).bold());
        match graph.video(&rec.video_id) {
            Some(video) => out.push_str(&format_video(video)),
            None => {
                let _ = writeln!(out, "{}", rec.video_id);
            }
        }
        let _ = writeln!(out, "Score: {}\n", format!("{:.4}", rec.score).green());
    }
    out
}

/// One-line summary of a recalculation pass.
#[must_use]
pub fn format_report(report: &RankReport) -> String {
    let status = if report.converged {
        "converged".green()
    } else {
        "not converged".yellow()
    };
    let seed = match report.personalization {
        Personalization::Weighted => "weighted",
        Personalization::Uniform => "uniform",
    };
    format!(
        "rank: {status} after {} iterations (delta {:.2e}, {seed} seed)",
        report.iterations, report.delta
    )
}

pub fn print_ranking(graph: &InteractionGraph, ranked: &[Recommendation]) {
    print!("{}", format_ranking(graph, ranked));
}

pub fn print_video(video: &VideoNode) {
    print!("{}", format_video(video));
}
