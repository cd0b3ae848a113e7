//! Walkthrough of the agora search-string syntax.

use agora::prelude::*;

fn main() -> Result<()> {
    println!("=== Agora Query Syntax Demo ===\n");

    let parser = QueryParser::new();

    let samples = [
        "\"memory leak\" java score:5",
        "user:42 answers:2",
        "tag:c++ tag:rust views:100",
        "Score:notanumber plain-token",
        "isaccepted:yes go",
    ];

    for (i, raw) in samples.iter().enumerate() {
        println!("{}. {raw}", i + 1);
        describe(&parser.parse(raw));
        println!();
    }

    println!("=== Library Information ===");
    println!("Agora version: {}", agora::VERSION);

    Ok(())
}

fn describe(query: &SearchQuery) {
    if query.is_empty() {
        println!("   (matches everything)");
        return;
    }

    if !query.keywords().is_empty() {
        println!("   keywords:        {:?}", query.keywords());
    }

    let mut numeric: Vec<_> = query.numeric_filters().iter().collect();
    numeric.sort_by(|a, b| a.0.cmp(b.0));
    for (key, value) in numeric {
        println!("   numeric filter:  {key} >= {value}");
    }

    let mut strings: Vec<_> = query.string_filters().iter().collect();
    strings.sort_by(|a, b| a.0.cmp(b.0));
    for (key, value) in strings {
        println!("   string filter:   {key} = {value:?}");
    }

    if !query.tags().is_empty() {
        println!("   tags:            {:?}", query.tags());
    }
}
