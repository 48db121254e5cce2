use sentiment_dashboard::{
    Article, EventFilter, SortOrder,
    articles::{derive_view, event_types, filter_by_event, sort_articles},
};

use crate::common::{article, ids, tech_articles};

fn mixed() -> Vec<Article> {
    vec![
        article(1, 300, false, "earnings", (1.0, 0.0, 0.0)),
        article(2, 100, true, "merger", (1.0, 0.0, 0.0)),
        article(3, 500, false, "merger", (1.0, 0.0, 0.0)),
        article(4, 500, true, "earnings", (1.0, 0.0, 0.0)),
        article(5, 200, false, "lawsuit", (1.0, 0.0, 0.0)),
        article(6, 400, true, "earnings", (1.0, 0.0, 0.0)),
    ]
}

#[test]
fn all_filter_keeps_everything_in_order() {
    let set = mixed();
    let view = filter_by_event(&set, &EventFilter::All);
    assert_eq!(ids(&view), ["1", "2", "3", "4", "5", "6"]);
}

#[test]
fn event_filter_keeps_matching_subset_in_order() {
    let set = mixed();
    let view = filter_by_event(&set, &EventFilter::only("earnings"));
    assert_eq!(ids(&view), ["1", "4", "6"]);

    let view = filter_by_event(&set, &EventFilter::only("dividend"));
    assert!(view.is_empty());
}

#[test]
fn newest_is_non_increasing_in_datetime() {
    let set = mixed();
    let view = derive_view(&set, &EventFilter::All, SortOrder::Newest);
    assert!(view.windows(2).all(|w| w[0].datetime >= w[1].datetime));
    // 3 and 4 tie at 500; server order wins
    assert_eq!(ids(&view), ["3", "4", "6", "1", "5", "2"]);
}

#[test]
fn relevant_puts_trusted_first_and_is_stable() {
    let set = mixed();
    let view = derive_view(&set, &EventFilter::All, SortOrder::Relevant);
    assert!(
        view.windows(2)
            .all(|w| w[0].is_trusted_source >= w[1].is_trusted_source)
    );
    assert_eq!(ids(&view), ["2", "4", "6", "1", "3", "5"]);
}

#[test]
fn sorting_is_applied_after_filtering() {
    let set = mixed();
    let view = derive_view(&set, &EventFilter::only("merger"), SortOrder::Newest);
    assert_eq!(ids(&view), ["3", "2"]);
}

#[test]
fn derivations_always_start_from_the_full_set() {
    let set = mixed();
    let first = derive_view(&set, &EventFilter::only("earnings"), SortOrder::Newest);
    assert_eq!(ids(&first), ["4", "6", "1"]);

    let back = derive_view(&set, &EventFilter::All, SortOrder::Relevant);
    assert_eq!(ids(&back), ["2", "4", "6", "1", "3", "5"]);
}

#[test]
fn sort_in_place_on_borrowed_view() {
    let set = tech_articles();
    let mut view: Vec<&Article> = set.iter().collect();
    sort_articles(&mut view, SortOrder::Newest);
    assert_eq!(ids(&view), ["2", "1"]);
}

#[test]
fn tech_scenario_orders_and_filter() {
    let set = tech_articles();
    assert_eq!(
        ids(&derive_view(&set, &EventFilter::All, SortOrder::Newest)),
        ["2", "1"]
    );
    assert_eq!(
        ids(&derive_view(&set, &EventFilter::All, SortOrder::Relevant)),
        ["2", "1"]
    );
    assert_eq!(
        ids(&derive_view(&set, &EventFilter::only("earnings"), SortOrder::Relevant)),
        ["1"]
    );
}

#[test]
fn event_types_start_with_all_in_first_seen_order() {
    let set = mixed();
    let types: Vec<String> = event_types(&set).iter().map(ToString::to_string).collect();
    assert_eq!(types, ["All", "earnings", "merger", "lawsuit"]);

    assert_eq!(event_types(&[]), [EventFilter::All]);
}

#[test]
fn event_filter_serializes_as_plain_label() {
    assert_eq!(serde_json::to_string(&EventFilter::All).unwrap(), r#""All""#);
    let f: EventFilter = serde_json::from_str(r#""M&A Activity""#).unwrap();
    assert_eq!(f, EventFilter::only("M&A Activity"));
    let f: EventFilter = serde_json::from_str(r#""All""#).unwrap();
    assert_eq!(f, EventFilter::All);
}
