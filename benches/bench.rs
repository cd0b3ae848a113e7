//! Criterion benchmarks for agora question search.
//!
//! Covers the major stages of one search call:
//! - Query string parsing
//! - Single searches mixing keywords, filters and tags
//! - End-to-end search over stores of varying size

use std::hint::black_box;

use agora::model::{Answer, Question, Tag};
use agora::query::QueryParser;
use agora::search::{PageRequest, SearchEngine, SearchRequest, SortMode};
use agora::store::MemoryQuestionStore;
use chrono::{Duration, TimeZone, Utc};
use criterion::{Criterion, Throughput, criterion_group, criterion_main};

/// Generate a deterministic question corpus for benchmarking.
fn generate_questions(count: usize) -> Vec<Question> {
    let words = [
        "memory",
        "leak",
        "java",
        "rust",
        "borrow",
        "checker",
        "async",
        "thread",
        "deadlock",
        "null",
        "pointer",
        "exception",
        "query",
        "index",
        "database",
        "transaction",
        "socket",
        "timeout",
        "parse",
        "regex",
        "iterator",
        "closure",
        "lifetime",
        "generic",
        "trait",
        "panic",
        "segfault",
        "compile",
        "linker",
        "cache",
    ];
    let tags = [
        "java",
        "rust",
        "go",
        "python",
        "concurrency",
        "memory",
        "database",
        "networking",
    ];

    let base = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
    let mut questions = Vec::with_capacity(count);

    for i in 0..count {
        let title_len = 5 + (i % 7);
        let mut title_words = Vec::with_capacity(title_len);
        for j in 0..title_len {
            let word_idx = (i * 7 + j * 13) % words.len(); // Pseudo-random distribution
            title_words.push(words[word_idx]);
        }

        let body_len = 30 + (i % 50);
        let mut body_words = Vec::with_capacity(body_len);
        for j in 0..body_len {
            body_words.push(words[(i * 11 + j * 3) % words.len()]);
        }

        let mut builder = Question::builder(i as u64 + 1)
            .author((i % 97) as u64 + 1, format!("user{}", i % 97))
            .title(title_words.join(" "))
            .body(body_words.join(" "))
            .created_at(base + Duration::hours(i as i64))
            .score((i % 21) as i64 - 5)
            .view_count((i * 17 % 1000) as u64)
            .tag(Tag::new((i % tags.len()) as u64 + 1, tags[i % tags.len()]));

        if i % 3 != 0 {
            builder = builder.tag(Tag::new(
                ((i + 1) % tags.len()) as u64 + 1,
                tags[(i + 1) % tags.len()],
            ));
        }
        for a in 0..(i % 4) {
            builder = builder.answer(Answer::new(a as u64 + 1, (a % 3) as i64, a == 2));
        }

        questions.push(builder.build());
    }

    questions
}

/// Benchmark query string parsing.
fn bench_query_parsing(c: &mut Criterion) {
    let mut group = c.benchmark_group("query_parsing");

    let parser = QueryParser::new();

    group.bench_function("parse_simple", |b| {
        b.iter(|| black_box(parser.parse(black_box("memory leak java"))))
    });

    group.bench_function("parse_mixed_filters", |b| {
        b.iter(|| {
            black_box(parser.parse(black_box(
                "\"memory leak\" user:42 score:5 answers:2 tag:java isaccepted:yes",
            )))
        })
    });

    group.throughput(Throughput::Elements(100));
    group.bench_function("parse_batch", |b| {
        let queries: Vec<String> = (0..100)
            .map(|i| format!("\"phrase {i}\" score:{} tag:java keyword{i}", i % 10))
            .collect();
        b.iter(|| {
            for query in &queries {
                black_box(parser.parse(black_box(query)));
            }
        })
    });

    group.finish();
}

/// Benchmark full searches against a mid-sized store.
fn bench_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("search");
    group.sample_size(20); // Reduce sample size for whole-pipeline runs

    let engine = SearchEngine::new(MemoryQuestionStore::with_questions(generate_questions(5000)));

    group.bench_function("keyword_search", |b| {
        let request = SearchRequest::new().query("memory leak");
        b.iter(|| black_box(engine.search(black_box(&request)).unwrap()))
    });

    group.bench_function("tag_and_score_search", |b| {
        let request = SearchRequest::new().query("tag:java score:3");
        b.iter(|| black_box(engine.search(black_box(&request)).unwrap()))
    });

    group.bench_function("sorted_unpaged_search", |b| {
        let request = SearchRequest::new()
            .query("rust")
            .sort(SortMode::HighestScore)
            .unpaged();
        b.iter(|| black_box(engine.search(black_box(&request)).unwrap()))
    });

    group.finish();
}

/// Benchmark the same search across store sizes.
fn bench_scalability(c: &mut Criterion) {
    let mut group = c.benchmark_group("scalability");
    group.sample_size(10);

    for size in [1_000, 10_000].iter() {
        group.bench_with_input(format!("search_{size}_questions"), size, |b, &count| {
            let engine =
                SearchEngine::new(MemoryQuestionStore::with_questions(generate_questions(count)));
            let request = SearchRequest::new()
                .query("memory score:2")
                .page(PageRequest::of(0, 15));
            b.iter(|| black_box(engine.search(black_box(&request)).unwrap()));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_query_parsing, bench_search);
criterion_group!(slow_benches, bench_scalability);

criterion_main!(benches, slow_benches);
