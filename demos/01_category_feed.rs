use std::sync::Arc;
use std::time::Duration;

use futures::future::join_all;
use sentiment_dashboard::{Category, DashClient, EventFilter, SortOrder, ViewController};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    #[cfg(feature = "tracing-subscriber")]
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    // 1. A client for the local news backend, with a short timeout.
    let client = DashClient::builder()
        .timeout(Duration::from_secs(10))
        .build()?;

    // 2. How many articles each category currently has.
    println!("--- Category overview ---");
    let counts = join_all(Category::ALL.into_iter().map(|c| {
        let client = client.clone();
        async move { (c, client.category_news(c).await) }
    }))
    .await;
    for (category, result) in counts {
        match result {
            Ok(articles) => println!("  {category}: {} articles", articles.len()),
            Err(e) => println!("  {category}: {e}"),
        }
    }
    println!();

    // 3. Drive the dashboard controller.
    let mut view = ViewController::new(Arc::new(client));
    view.mount();
    view.settle().await;
    println!("{}", view.render());

    // 4. Newest first, then narrow to the first event type on offer.
    view.select_sort(SortOrder::Newest);
    if let Some(event) = view
        .model()
        .event_types()
        .iter()
        .find(|e| **e != EventFilter::All)
        .cloned()
    {
        view.select_event(event);
    }
    println!("{}", view.render());

    // 5. Switch category twice in a row; only the last one is shown.
    view.select_category(Category::Automobile);
    view.select_category(Category::Finance);
    for applied in view.settle().await {
        println!("{applied:?}");
    }
    println!("{}", view.render());

    Ok(())
}
