use sentiment_dashboard::{ArticleId, ArticleListModel, EventFilter, SortOrder};

use crate::common::{article, ids, tech_articles};

#[test]
fn replace_rebuilds_event_types() {
    let mut model = ArticleListModel::default();
    assert_eq!(model.event_types(), [EventFilter::All]);

    model.replace(tech_articles());
    assert_eq!(
        model.event_types(),
        [
            EventFilter::All,
            EventFilter::only("earnings"),
            EventFilter::only("merger")
        ]
    );

    model.replace(vec![article(9, 1, false, "lawsuit", (1.0, 0.0, 0.0))]);
    assert_eq!(
        model.event_types(),
        [EventFilter::All, EventFilter::only("lawsuit")]
    );
    assert_eq!(model.len(), 1);
}

#[test]
fn missing_selection_falls_back_to_all() {
    let mut model = ArticleListModel::default();
    model.replace(tech_articles());

    let gone = EventFilter::only("lawsuit");
    assert_eq!(model.effective_filter(&gone), EventFilter::All);
    assert_eq!(ids(&model.view(&gone, SortOrder::Newest)), ["2", "1"]);

    let earnings = EventFilter::only("earnings");
    assert_eq!(model.effective_filter(&earnings), earnings);
    assert_eq!(ids(&model.view(&earnings, SortOrder::Newest)), ["1"]);
}

#[test]
fn clear_empties_the_set() {
    let mut model = ArticleListModel::default();
    model.replace(tech_articles());
    model.clear();

    assert!(model.is_empty());
    assert_eq!(model.event_types(), [EventFilter::All]);
    assert!(model.view(&EventFilter::All, SortOrder::Relevant).is_empty());
}

#[test]
fn anomalies_are_tracked_by_id() {
    let mut set: Vec<_> = (0..6)
        .map(|i| article(i, i, false, "x", (0.6, 0.2, 0.2)))
        .collect();
    set.push(article(42, 42, false, "x", (0.0, 0.0, 1.0)));

    let mut model = ArticleListModel::new(1.5);
    model.replace(set);

    assert!(model.is_anomaly(&ArticleId::from(42)));
    assert!(!model.is_anomaly(&ArticleId::from(0)));
}
