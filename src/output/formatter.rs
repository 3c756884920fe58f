use anyhow::{Context, Result};
use owo_colors::OwoColorize;
use std::io::IsTerminal;
use terminal_size::{terminal_size, Width};

use crate::gallery::{RankedEntry, Showcase};
use crate::scoring::{ScoreResult, TierColor};
use crate::thumbnail::{clean_url, DemoProject, Thumbnail};

pub const EMPTY_TITLE: &str = "No Projects Yet";
pub const EMPTY_HINT: &str =
    "Be the first to submit your project and showcase your creation to the community.";
const TOP_SCORE_BADGE: &str = "Top Score";

// Column widths: index fits "99.", score fits "95/100", tier fits "Legendary"
const INDEX_WIDTH: usize = 3;
const SCORE_WIDTH: usize = 6;
const TIER_WIDTH: usize = 9;
const SEPARATOR: &str = "  ";

/// Check if stdout is a TTY (for auto-detecting color support)
pub fn should_use_colors() -> bool {
    std::io::stdout().is_terminal()
}

/// Scores are shown out of 100 even though the ceiling is lower
pub fn format_score(score: u8) -> String {
    format!("{}/100", score)
}

/// Fixed-width bar, filled in proportion to score/100
pub fn format_score_bar(score: u8, width: usize) -> String {
    let filled = ((score.min(100) as usize * width) + 50) / 100;
    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

fn paint(text: &str, color: TierColor) -> String {
    match color {
        TierColor::Green => text.green().to_string(),
        TierColor::Blue => text.blue().to_string(),
        TierColor::Yellow => text.yellow().to_string(),
        TierColor::Orange => text.truecolor(255, 165, 0).to_string(),
        TierColor::Red => text.red().to_string(),
    }
}

/// Get terminal width, defaulting to None for pipes (unlimited)
fn get_terminal_width() -> Option<usize> {
    terminal_size().map(|(Width(w), _)| w as usize)
}

/// Truncate title to fit available width, accounting for Unicode
fn truncate_title(title: &str, max_width: usize) -> String {
    let chars: Vec<char> = title.chars().collect();
    if chars.len() <= max_width {
        title.to_string()
    } else if max_width > 3 {
        format!("{}...", chars[..max_width - 3].iter().collect::<String>())
    } else {
        chars[..max_width].iter().collect()
    }
}

fn format_empty_state(use_colors: bool) -> String {
    if use_colors {
        format!("{}\n{}", EMPTY_TITLE.bold(), EMPTY_HINT.dimmed())
    } else {
        format!("{}\n{}", EMPTY_TITLE, EMPTY_HINT)
    }
}

/// Format the ranked showcase, one project per line:
/// index, score, tier, name, clean URL, and the top-score badge on line one.
/// An empty gallery renders the empty-state message instead.
pub fn format_showcase_table(showcase: &Showcase, use_colors: bool) -> String {
    let entries = match showcase {
        Showcase::Empty => return format_empty_state(use_colors),
        Showcase::Ranked(entries) => entries,
    };

    let term_width = get_terminal_width();

    entries
        .iter()
        .map(|entry| format_entry_line(entry, use_colors, term_width))
        .collect::<Vec<_>>()
        .join("\n")
}

fn format_entry_line(
    entry: &RankedEntry,
    use_colors: bool,
    term_width: Option<usize>,
) -> String {
    let project = entry.project;
    let index_str = format!("{:>width$}.", entry.rank, width = INDEX_WIDTH - 1);
    let score_str = format!("{:>width$}", format_score(project.score()), width = SCORE_WIDTH);
    let tier_str = format!("{:<width$}", entry.tier.label, width = TIER_WIDTH);
    let url = clean_url(project.url());
    let badge = if entry.top_score {
        format!("{}* {}", SEPARATOR, TOP_SCORE_BADGE)
    } else {
        String::new()
    };

    let fixed_width = INDEX_WIDTH
        + 1
        + SCORE_WIDTH
        + TIER_WIDTH
        + SEPARATOR.len() * 3
        + url.chars().count()
        + badge.chars().count();

    let name = match term_width {
        Some(width) if width > fixed_width + 10 => truncate_title(project.name(), width - fixed_width),
        // Very narrow terminal, show truncated
        Some(_) => truncate_title(project.name(), 20),
        // No terminal (pipe), don't truncate
        None => project.name().to_string(),
    };

    if use_colors {
        format!(
            "{} {}{}{}{}{}{}{}{}",
            index_str.dimmed(),
            score_str.bold(),
            SEPARATOR,
            paint(&tier_str, entry.tier.color),
            SEPARATOR,
            name,
            SEPARATOR,
            url.underline(),
            badge.yellow()
        )
    } else {
        format!(
            "{} {}{}{}{}{}{}{}{}",
            index_str, score_str, SEPARATOR, tier_str, SEPARATOR, name, SEPARATOR, url, badge
        )
    }
}

/// Format a score result as a multi-line breakdown (for the `score` command)
pub fn format_breakdown(name: &str, result: &ScoreResult, use_colors: bool) -> String {
    let tier = result.tier().descriptor();
    let mut lines = Vec::new();

    lines.push(if use_colors {
        name.bold().to_string()
    } else {
        name.to_string()
    });
    lines.push(format!("  {:<12} {:>+4}", "Base", result.breakdown.base));
    for factor in &result.breakdown.factors {
        lines.push(format!(
            "  {:<12} {:>+4}  {}",
            factor.label, factor.points, factor.description
        ));
    }

    let clamp_note = if result.raw != result.score as i32 {
        format!(" (raw {}, clamped)", result.raw)
    } else {
        String::new()
    };
    let score_line = format!(
        "  Score: {}{}  {}",
        format_score(result.score),
        clamp_note,
        format_score_bar(result.score, 20)
    );
    lines.push(score_line);

    let tier_line = format!("  Tier: {} ({})", tier.label, tier.icon.key());
    lines.push(if use_colors {
        paint(&tier_line, tier.color)
    } else {
        tier_line
    });

    lines.join("\n")
}

/// Format the showcase as tab-separated values for scripting
/// Columns: score, tier, name, url (no headers, no colors)
pub fn format_tsv(showcase: &Showcase) -> String {
    showcase
        .entries()
        .iter()
        .map(|entry| {
            format!(
                "{}\t{}\t{}\t{}",
                entry.project.score(),
                entry.tier.label,
                entry.project.name(),
                entry.project.url()
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Format the showcase as a JSON array of ranked entries
pub fn format_json(showcase: &Showcase) -> Result<String> {
    serde_json::to_string_pretty(showcase.entries()).context("Failed to serialize showcase")
}

/// Format a demo card with its thumbnail outcome
pub fn format_demo_card(project: &DemoProject, thumbnail: &Thumbnail, use_colors: bool) -> String {
    let image = match thumbnail {
        Thumbnail::Remote { url, size, .. } => format!("{} ({} bytes)", url, size),
        Thumbnail::Placeholder { url } => format!("{} (placeholder)", url),
    };

    if use_colors {
        format!(
            "{}\n  by {}\n  {}\n  {}\n  Image: {}",
            project.title.bold(),
            project.author.yellow(),
            project.description,
            clean_url(project.url).underline(),
            image
        )
    } else {
        format!(
            "{}\n  by {}\n  {}\n  {}\n  Image: {}",
            project.title,
            project.author,
            project.description,
            clean_url(project.url),
            image
        )
    }
}
