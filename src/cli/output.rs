//! Output formatting for CLI commands.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::cli::args::{AgoraArgs, OutputFormat};
use crate::error::Result;
use crate::query::SearchQuery;
use crate::search::{QuestionSummary, SearchPage};

/// Corpus statistics reported by the `stats` command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DataStats {
    pub total_questions: usize,
    pub total_answers: usize,
    pub answered_questions: usize,
    pub questions_with_accepted_answer: usize,
    pub distinct_tags: usize,
    pub distinct_authors: usize,
}

/// Print a page of search results in the requested format.
pub fn output_search_page(page: &SearchPage, args: &AgoraArgs) -> Result<()> {
    match args.output_format {
        OutputFormat::Human => output_search_page_human(page),
        OutputFormat::Json => output_json(page, args),
    }
}

/// Print a parsed query in the requested format.
pub fn output_parsed_query(query: &SearchQuery, args: &AgoraArgs) -> Result<()> {
    match args.output_format {
        OutputFormat::Human => output_parsed_query_human(query),
        OutputFormat::Json => output_json(query, args),
    }
}

/// Print corpus statistics in the requested format.
pub fn output_stats(stats: &DataStats, args: &AgoraArgs) -> Result<()> {
    match args.output_format {
        OutputFormat::Human => output_stats_human(stats),
        OutputFormat::Json => output_json(stats, args),
    }
}

/// Output a serializable result as JSON, pretty-printed on request.
fn output_json<T: Serialize>(result: &T, args: &AgoraArgs) -> Result<()> {
    let json = if args.pretty {
        serde_json::to_string_pretty(result)?
    } else {
        serde_json::to_string(result)?
    };
    println!("{json}");
    Ok(())
}

/// Output search results in human format.
fn output_search_page_human(page: &SearchPage) -> Result<()> {
    println!("Search results:");
    println!("═══════════════");

    let start = page.page.page_index.saturating_mul(page.page.page_size);
    for (i, summary) in page.page.content.iter().enumerate() {
        println!();
        print_summary(start + i + 1, summary);
    }

    println!();
    if page.page.is_empty() {
        println!("No results on this page.");
    }
    let total = page.total_elements();
    println!(
        "Page {} of {} ({} result{})",
        page.page.page_index + 1,
        page.total_pages().max(1),
        total,
        plural(total as u64),
    );
    Ok(())
}

/// Print one result with its rank in the full result list.
fn print_summary(rank: usize, summary: &QuestionSummary) {
    println!("{rank}. {} (score {})", summary.title, summary.score);
    let accepted = if summary.has_accepted_answer {
        ", accepted"
    } else {
        ""
    };
    println!(
        "   asked {} by {} | {} answer{}{accepted} | {} view{}",
        format_date(summary.created_at),
        summary.author,
        summary.answer_count,
        plural(summary.answer_count as u64),
        summary.view_count,
        plural(summary.view_count),
    );
    if !summary.tags.is_empty() {
        println!("   tags: {}", summary.tags.join(", "));
    }
    if !summary.excerpt.is_empty() {
        println!("   {}", summary.excerpt);
    }
}

/// Output a parsed query in human format.
fn output_parsed_query_human(query: &SearchQuery) -> Result<()> {
    println!("Parsed query:");
    println!("═════════════");

    if query.is_empty() {
        println!("(matches everything)");
        return Ok(());
    }

    if !query.keywords().is_empty() {
        let keywords = query
            .keywords()
            .iter()
            .map(|keyword| format!("{keyword:?}"))
            .collect::<Vec<_>>()
            .join(", ");
        println!("keywords: {keywords}");
    }

    // Maps print in key order so repeated runs render identically.
    let mut numeric: Vec<_> = query.numeric_filters().iter().collect();
    numeric.sort_by(|a, b| a.0.cmp(b.0));
    for (key, value) in numeric {
        println!("minimum {key}: {value}");
    }

    let mut strings: Vec<_> = query.string_filters().iter().collect();
    strings.sort_by(|a, b| a.0.cmp(b.0));
    for (key, value) in strings {
        println!("{key}: {value:?}");
    }

    if !query.tags().is_empty() {
        println!("tags: {}", query.tags().join(", "));
    }

    Ok(())
}

/// Output corpus statistics in human format.
fn output_stats_human(stats: &DataStats) -> Result<()> {
    println!("Data statistics:");
    println!("════════════════");
    println!("Total questions: {}", stats.total_questions);
    println!("Total answers: {}", stats.total_answers);
    println!("Answered questions: {}", stats.answered_questions);
    println!(
        "With an accepted answer: {}",
        stats.questions_with_accepted_answer
    );
    println!("Distinct tags: {}", stats.distinct_tags);
    println!("Distinct authors: {}", stats.distinct_authors);
    Ok(())
}

/// Render an optional timestamp as `YYYY-MM-DD`, or a placeholder when the
/// source data carried none.
fn format_date(timestamp: Option<DateTime<Utc>>) -> String {
    match timestamp {
        Some(ts) => ts.format("%Y-%m-%d").to_string(),
        None => "unknown date".to_string(),
    }
}

fn plural(count: u64) -> &'static str {
    if count == 1 { "" } else { "s" }
}
