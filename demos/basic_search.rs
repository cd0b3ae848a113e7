//! Basic usage example for the agora question search library.

use agora::prelude::*;
use chrono::{Duration, Utc};

fn main() -> Result<()> {
    println!("=== Agora Question Search Demo ===\n");

    let store = MemoryQuestionStore::new();
    let now = Utc::now();

    let questions = vec![
        Question::builder(1)
            .author(42, "alice")
            .title("How do I fix a memory leak in Java?")
            .body("My service's heap keeps growing until the JVM dies.")
            .created_at(now - Duration::days(45))
            .score(6)
            .view_count(312)
            .answer(Answer::new(11, 4, true))
            .answer(Answer::new(12, 1, false))
            .tag(Tag::new(1, "java"))
            .tag(Tag::new(2, "memory"))
            .build(),
        Question::builder(2)
            .author(42, "alice")
            .title("Is the Java garbage collector generational?")
            .body("Curious how the collector decides what to scan.")
            .created_at(now - Duration::days(20))
            .score(3)
            .view_count(88)
            .tag(Tag::new(1, "java"))
            .build(),
        Question::builder(3)
            .author(7, "bob")
            .title("Why does my C program segfault on free?")
            .body("Calling free twice seems to corrupt the allocator.")
            .created_at(now - Duration::days(90))
            .score(9)
            .view_count(540)
            .answer(Answer::new(31, 7, true))
            .tag(Tag::new(3, "c"))
            .build(),
        Question::builder(4)
            .author(8, "carol")
            .title("Goroutine leak when a channel is never closed")
            .body("Workers block forever on receive after the producer exits.")
            .created_at(now - Duration::days(60))
            .score(1)
            .view_count(140)
            .tag(Tag::new(4, "go"))
            .tag(Tag::new(5, "concurrency"))
            .build(),
        Question::builder(5)
            .author(8, "carol")
            .title("Does select fairness matter for worker pools in Go?")
            .body("Two ready channels, which case runs?")
            .created_at(now - Duration::days(35))
            .score(2)
            .view_count(95)
            .tag(Tag::new(4, "go"))
            .tag(Tag::new(5, "concurrency"))
            .build(),
    ];

    println!("Loading {} questions into the store...", questions.len());
    for question in questions {
        store.insert(question);
    }

    let engine = SearchEngine::new(store);
    println!("Search engine ready\n");

    println!("=== Search Examples ===\n");

    // Example 1: quoted phrase with a score floor
    println!("1. Phrase plus score filter (\"memory leak\" java score:5):");
    let page = engine.search_str("\"memory leak\" java score:5")?;
    print_page(&page);

    // Example 2: filter by author id
    println!("\n2. Author filter (user:42):");
    let page = engine.search_str("user:42")?;
    print_page(&page);

    // Example 3: tags, a checkbox filter and an age floor combined
    println!("\n3. Unanswered go+concurrency questions at least 30 days old:");
    let request = SearchRequest::new()
        .tags(["go", "concurrency"])
        .filter(CheckboxFilter::NoAnswers)
        .min_age_days(30)
        .sort(SortMode::MostAnswers);
    let page = engine.search(&request)?;
    print_page(&page);

    // Example 4: sorting and explicit pages
    println!("\n4. Highest score first, two per page:");
    let request = SearchRequest::new()
        .sort(SortMode::HighestScore)
        .page(PageRequest::of(0, 2));
    let page = engine.search(&request)?;
    println!(
        "   Page 1 of {} ({} total)",
        page.total_pages(),
        page.total_elements()
    );
    print_page(&page);

    // Example 5: the store's write path feeds later searches
    println!("\n5. Voting moves a question up the score ordering:");
    engine.store().vote(4, VoteChoice::Up)?;
    engine.store().vote(4, VoteChoice::Up)?;
    engine.store().record_view(4)?;
    let page = engine.search_str("tag:go score:3")?;
    print_page(&page);

    println!("\n=== Library Information ===");
    println!("Agora version: {}", agora::VERSION);

    Ok(())
}

fn print_page(page: &SearchPage) {
    println!("   Found {} results", page.total_elements());
    for (i, summary) in page.page.content.iter().enumerate() {
        println!(
            "   {}. [{}] {} (score {}, {} answers)",
            i + 1,
            summary.id,
            summary.title,
            summary.score,
            summary.answer_count
        );
    }
}
