//! Integration tests for title search and pagination behavior

use questsearch::models::{
    AnagramBlock, AnagramType, McqOption, QuizItemDraft, QuizVariant,
};
use questsearch::search::{SearchParams, SearchQuery, SearchService, DEFAULT_LIMIT};
use questsearch::state::{CatalogStore, InMemoryStore};
use std::sync::Arc;

/// Helper to create a read-along draft
fn read_along_draft(title: &str) -> QuizItemDraft {
    QuizItemDraft {
        title: title.to_string(),
        variant: QuizVariant::ReadAlong,
        sibling_id: None,
    }
}

/// Helper to build a service over a store seeded with read-along titles
async fn seeded_service(titles: &[&str]) -> (Arc<InMemoryStore>, SearchService) {
    let store = Arc::new(InMemoryStore::new());
    for title in titles {
        store.insert_item(read_along_draft(title)).await.unwrap();
    }
    (Arc::clone(&store), SearchService::new(store))
}

#[tokio::test]
async fn test_matching_ignores_query_case() {
    let (_, service) = seeded_service(&[
        "Geography basics",
        "GEOGRAPHY advanced",
        "History",
    ])
    .await;

    let lower = service.search(&SearchQuery::new("geography")).await.unwrap();
    let mixed = service.search(&SearchQuery::new("GeOgRaPhY")).await.unwrap();

    assert_eq!(lower.total_results, 2);
    assert_eq!(lower.results, mixed.results);
    assert_eq!(lower.total_results, mixed.total_results);
}

#[tokio::test]
async fn test_page_size_never_exceeds_limit() {
    let titles: Vec<String> = (0..10).map(|i| format!("Spelling {}", i)).collect();
    let title_refs: Vec<&str> = titles.iter().map(String::as_str).collect();
    let (_, service) = seeded_service(&title_refs).await;

    let query = SearchQuery::new("spelling").with_limit(4);

    let page1 = service.search(&query.clone().with_page(1)).await.unwrap();
    assert_eq!(page1.results.len(), 4);

    // Last partial page
    let page3 = service.search(&query.clone().with_page(3)).await.unwrap();
    assert_eq!(page3.results.len(), 2);

    // Past the end
    let page4 = service.search(&query.with_page(4)).await.unwrap();
    assert!(page4.results.is_empty());
    assert_eq!(page4.total_results, 10);
    assert_eq!(page4.total_pages, 3);
    assert_eq!(page4.current_page, 4);
}

#[tokio::test]
async fn test_pages_union_to_all_matches_without_duplicates() {
    let (store, service) = seeded_service(&[
        "Quiz one",
        "Reading passage",
        "Quiz two",
        "Quiz three",
        "Counting drill",
        "Quiz four",
        "Quiz five",
        "Quiz six",
        "Spelling bee",
        "Quiz seven",
    ])
    .await;

    let first = service
        .search(&SearchQuery::new("quiz").with_limit(3))
        .await
        .unwrap();
    assert_eq!(first.total_results, 7);
    assert_eq!(first.total_pages, 3);

    // Walk every page and collect the ids
    let mut collected = Vec::new();
    for page in 1..=first.total_pages {
        let result = service
            .search(&SearchQuery::new("quiz").with_page(page).with_limit(3))
            .await
            .unwrap();
        collected.extend(result.results.into_iter().map(|item| item.id));
    }

    assert_eq!(collected.len(), 7);
    assert!(collected.windows(2).all(|pair| pair[0] < pair[1]));

    // Every collected id really is a "quiz" title
    for id in collected {
        let item = store.get_item(id).await.unwrap().unwrap();
        assert!(item.title.to_lowercase().contains("quiz"));
    }
}

#[tokio::test]
async fn test_empty_query_with_defaults_returns_first_twenty() {
    let titles: Vec<String> = (0..25).map(|i| format!("Passage {}", i)).collect();
    let title_refs: Vec<&str> = titles.iter().map(String::as_str).collect();
    let (_, service) = seeded_service(&title_refs).await;

    // Raw params the way the HTTP layer receives them
    let query = SearchParams {
        q: Some(String::new()),
        page: None,
        limit: None,
    }
    .into_query()
    .unwrap();

    let page = service.search(&query).await.unwrap();

    assert_eq!(page.results.len(), DEFAULT_LIMIT as usize);
    assert_eq!(page.total_results, 25);
    assert_eq!(page.total_pages, 2);
    assert_eq!(page.current_page, 1);

    // First page holds the first 20 items in insertion order
    for (i, item) in page.results.iter().enumerate() {
        assert_eq!(item.title, format!("Passage {}", i));
    }
}

#[tokio::test]
async fn test_variant_payloads_survive_search() {
    let store = Arc::new(InMemoryStore::new());

    let mcq = store
        .insert_item(QuizItemDraft {
            title: "Capital cities quiz".to_string(),
            variant: QuizVariant::Mcq {
                options: vec![
                    McqOption {
                        text: "Paris".to_string(),
                        is_correct_answer: true,
                    },
                    McqOption {
                        text: "Lyon".to_string(),
                        is_correct_answer: false,
                    },
                ],
                solution: None,
            },
            sibling_id: None,
        })
        .await
        .unwrap();

    let anagram = store
        .insert_item(QuizItemDraft {
            title: "Anagram warmup".to_string(),
            variant: QuizVariant::Anagram {
                anagram_type: AnagramType::Sentence,
                blocks: vec![
                    AnagramBlock {
                        text: "the cat".to_string(),
                        show_in_option: true,
                        is_answer: true,
                    },
                    AnagramBlock {
                        text: "sat down".to_string(),
                        show_in_option: true,
                        is_answer: true,
                    },
                    AnagramBlock {
                        text: "flew away".to_string(),
                        show_in_option: false,
                        is_answer: false,
                    },
                ],
                solution: Some("the cat sat down".to_string()),
            },
            sibling_id: None,
        })
        .await
        .unwrap();

    let service = SearchService::new(store);

    let page = service.search(&SearchQuery::new("capital")).await.unwrap();
    assert_eq!(page.results, vec![mcq]);

    let page = service.search(&SearchQuery::new("warmup")).await.unwrap();
    assert_eq!(page.results, vec![anagram.clone()]);
    match &page.results[0].variant {
        QuizVariant::Anagram { blocks, .. } => {
            // Block order and flags are preserved exactly
            assert_eq!(blocks.len(), 3);
            assert_eq!(blocks[0].text, "the cat");
            assert!(!blocks[2].show_in_option);
        }
        other => panic!("expected anagram, got {}", other.tag()),
    }
}

#[tokio::test]
async fn test_total_pages_tracks_limit() {
    let titles: Vec<String> = (0..7).map(|i| format!("Fraction {}", i)).collect();
    let title_refs: Vec<&str> = titles.iter().map(String::as_str).collect();
    let (_, service) = seeded_service(&title_refs).await;

    for (limit, expected_pages) in [(1, 7), (2, 4), (3, 3), (7, 1), (50, 1)] {
        let page = service
            .search(&SearchQuery::new("fraction").with_limit(limit))
            .await
            .unwrap();
        assert_eq!(page.total_pages, expected_pages, "limit {}", limit);
        assert_eq!(page.total_results, 7);
    }
}
