//! Pages through a seeded in-memory designs collection the way the explore
//! grid does: mount under the URL's filter, then load more until exhausted.
//!
//! ```sh
//! RUST_LOG=debug cargo run -p lumina-app --example explore_demo
//! ```

use std::sync::Arc;

use chrono::{TimeZone, Utc};
use uuid::Uuid;

use lumina_app::Shell;
use lumina_config::AppConfig;
use lumina_core::InMemoryDocuments;
use lumina_model::{
    Design, DesignCategory, DesignId, Locale, UserId, Visibility,
};

fn seed(n: u64) -> Design {
    let category = if n % 2 == 0 {
        DesignCategory::Pendant
    } else {
        DesignCategory::Chandelier
    };
    Design {
        id: DesignId(Uuid::from_u128(n as u128)),
        owner: UserId(Uuid::from_u128(1)),
        title: format!("Fixture {n}"),
        category,
        visibility: Visibility::Public,
        image_file: format!("fixture-{n}.png"),
        created_at: Utc.timestamp_opt(1_700_000_000 + n as i64, 0).unwrap(),
        views: n * 3,
        favorites_count: n,
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let shell = Shell::new(AppConfig::default());
    let store = Arc::new(InMemoryDocuments::new());
    store.insert_designs((1..=19).map(seed)).await;

    let mut listing = shell.listing(store);
    listing
        .mount(vec![("sort".to_string(), "views".to_string())])
        .await;

    let mut pages = 1;
    while !listing.state().exhausted {
        listing.load_more().await;
        pages += 1;
    }

    for card in shell.listing_cards(listing.state(), Locale::Es) {
        println!(
            "{title:<12} {views:>4} views  {thumb}",
            title = card.design.title,
            views = card.design.views,
            thumb = card.thumb_url,
        );
    }
    println!(
        "{} designs over {pages} pages",
        listing.state().items.len()
    );
}
