use sentiment_dashboard::{
    Category, FetchController, FetchState,
    fetch::{FetchCompletion, Resolution},
};

use crate::common::{server_error, tech_articles};

#[test]
fn starts_idle() {
    let fetch = FetchController::new();
    assert_eq!(fetch.state(), &FetchState::Idle);
    assert!(fetch.current().is_none());
}

#[test]
fn begin_enters_loading_with_increasing_tokens() {
    let mut fetch = FetchController::new();
    let a = fetch.begin(Category::Tech);
    let b = fetch.begin(Category::Tech);

    assert!(b.token > a.token);
    assert!(fetch.is_current(&b));
    assert!(!fetch.is_current(&a));
    assert_eq!(fetch.state(), &FetchState::Loading { category: Category::Tech });
}

#[test]
fn success_moves_to_success_and_hands_back_articles() {
    let mut fetch = FetchController::new();
    let ticket = fetch.begin(Category::Tech);

    let res = fetch.resolve(FetchCompletion {
        ticket,
        result: Ok(tech_articles()),
    });
    match res {
        Resolution::Loaded(articles) => assert_eq!(articles.len(), 2),
        other => panic!("expected Loaded, got {other:?}"),
    }
    assert_eq!(
        fetch.state(),
        &FetchState::Success {
            category: Category::Tech,
            count: 2
        }
    );
}

#[test]
fn failure_carries_status_message_and_is_cleared_on_reentry() {
    let mut fetch = FetchController::new();
    let ticket = fetch.begin(Category::Finance);

    let res = fetch.resolve(FetchCompletion {
        ticket,
        result: Err(server_error(500)),
    });
    assert!(matches!(res, Resolution::Failed(_)));
    let message = fetch.state().error().unwrap();
    assert!(message.contains("500"), "message was: {message}");

    fetch.begin(Category::Finance);
    assert!(fetch.state().error().is_none());
    assert!(fetch.state().is_loading());
}

#[test]
fn superseded_ticket_is_stale_even_for_same_category() {
    let mut fetch = FetchController::new();
    let old = fetch.begin(Category::Tech);
    let new = fetch.begin(Category::Tech);

    let res = fetch.resolve(FetchCompletion {
        ticket: old,
        result: Ok(tech_articles()),
    });
    assert!(matches!(res, Resolution::Stale(t) if t == old));
    assert!(fetch.state().is_loading());
    assert!(fetch.is_current(&new));
}

#[test]
fn stale_failure_does_not_replace_success() {
    let mut fetch = FetchController::new();
    let tech = fetch.begin(Category::Tech);
    let finance = fetch.begin(Category::Finance);

    fetch.resolve(FetchCompletion {
        ticket: finance,
        result: Ok(tech_articles()),
    });
    let res = fetch.resolve(FetchCompletion {
        ticket: tech,
        result: Err(server_error(503)),
    });

    assert!(matches!(res, Resolution::Stale(_)));
    assert_eq!(
        fetch.state(),
        &FetchState::Success {
            category: Category::Finance,
            count: 2
        }
    );
}
