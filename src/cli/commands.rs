//! Command implementations for the agora CLI.

use std::fs;
use std::path::Path;
use std::time::Instant;

use ahash::AHashSet;
use log::warn;

use crate::cli::args::{AgoraArgs, Command, ParseArgs, SearchArgs, StatsArgs};
use crate::cli::output::{DataStats, output_parsed_query, output_search_page, output_stats};
use crate::error::Result;
use crate::model::Question;
use crate::query::QueryParser;
use crate::search::{CheckboxFilter, PageRequest, SearchEngine, SearchRequest, SortMode};
use crate::store::MemoryQuestionStore;

/// Execute a CLI command.
pub fn execute_command(args: AgoraArgs) -> Result<()> {
    match &args.command {
        Command::Search(search_args) => run_search(search_args.clone(), &args),
        Command::Parse(parse_args) => run_parse(parse_args.clone(), &args),
        Command::Stats(stats_args) => run_stats(stats_args.clone(), &args),
    }
}

/// Search a question collection loaded from disk.
fn run_search(args: SearchArgs, cli_args: &AgoraArgs) -> Result<()> {
    let questions = load_questions(&args.data_file)?;
    if cli_args.verbosity() > 1 {
        println!(
            "Loaded {} questions from {}",
            questions.len(),
            args.data_file.display()
        );
    }

    let store = MemoryQuestionStore::with_questions(questions);
    let engine = SearchEngine::new(store);
    let request = build_search_request(&args);

    let start = Instant::now();
    let page = engine.search(&request)?;
    if cli_args.verbosity() > 1 {
        println!("Search took {}ms", start.elapsed().as_millis());
    }

    output_search_page(&page, cli_args)
}

/// Show how a raw search string splits into keywords, filters and tags.
fn run_parse(args: ParseArgs, cli_args: &AgoraArgs) -> Result<()> {
    let parser = QueryParser::new();
    let query = parser.parse(&args.query);
    output_parsed_query(&query, cli_args)
}

/// Show statistics for a question collection.
fn run_stats(args: StatsArgs, cli_args: &AgoraArgs) -> Result<()> {
    let questions = load_questions(&args.data_file)?;
    if cli_args.verbosity() > 1 {
        println!(
            "Loaded {} questions from {}",
            questions.len(),
            args.data_file.display()
        );
    }

    let stats = compute_stats(&questions);
    output_stats(&stats, cli_args)
}

/// Load a question collection from a JSON array file or a JSON-lines file.
///
/// JSON-lines input is forgiving: rows that fail to parse are logged and
/// skipped, so one bad row does not hide the rest of the collection. A
/// malformed JSON array is an error because no rows can be recovered from it.
pub fn load_questions(path: &Path) -> Result<Vec<Question>> {
    let text = fs::read_to_string(path)?;

    if text.trim_start().starts_with('[') {
        let questions: Vec<Question> = serde_json::from_str(&text)?;
        return Ok(questions);
    }

    let mut questions = Vec::new();
    for (line_number, line) in text.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        match serde_json::from_str::<Question>(line) {
            Ok(question) => questions.push(question),
            Err(e) => warn!("skipping row {}: {e}", line_number + 1),
        }
    }
    Ok(questions)
}

/// Translate CLI flags into a search request.
fn build_search_request(args: &SearchArgs) -> SearchRequest {
    let mut request = SearchRequest::new()
        .tags(args.tags.clone())
        .sort(SortMode::parse(&args.sort));

    if let Some(query) = &args.query {
        request = request.query(query.clone());
    }
    if let Some(days) = args.days_old {
        request = request.min_age_days(days);
    }
    for raw in &args.filters {
        match CheckboxFilter::parse(raw) {
            Some(filter) => request = request.filter(filter),
            None => warn!("unknown filter {raw:?} ignored"),
        }
    }

    if args.all {
        request.unpaged()
    } else {
        request.page(PageRequest::of(args.page, args.size))
    }
}

/// Gather collection-wide counts for the `stats` command.
fn compute_stats(questions: &[Question]) -> DataStats {
    let mut tags: AHashSet<String> = AHashSet::new();
    let mut authors: AHashSet<u64> = AHashSet::new();
    let mut total_answers = 0;
    let mut answered_questions = 0;
    let mut questions_with_accepted_answer = 0;

    for question in questions {
        total_answers += question.answer_count();
        if question.answer_count() > 0 {
            answered_questions += 1;
        }
        if question.has_accepted_answer() {
            questions_with_accepted_answer += 1;
        }
        for tag in &question.tags {
            tags.insert(tag.name.to_lowercase());
        }
        authors.insert(question.author.id);
    }

    DataStats {
        total_questions: questions.len(),
        total_answers,
        answered_questions,
        questions_with_accepted_answer,
        distinct_tags: tags.len(),
        distinct_authors: authors.len(),
    }
}
