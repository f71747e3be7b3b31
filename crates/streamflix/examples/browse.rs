//! Browse the live catalog from the command line.
//!
//! Needs `TMDB_API_TOKEN` (or `TMDB_API_KEY`). Run with
//! `RUST_LOG=streamflix=debug` to see cache hits, misses and fallbacks.

use std::time::Duration;

use streamflix::prelude::*;
use streamflix::{TracingMetrics, age_certification};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_target(false)
        .init();

    let client = TmdbClient::from_env()?;
    let config = CatalogConfig::default()
        .coalesce()
        .ready_timeout(Duration::from_secs(10));
    let metrics = TracingMetrics::new().with_service_name("browse");
    let catalog: CatalogFacade<TmdbClient, TracingMetrics> =
        CatalogFacade::with_metrics(config, metrics);

    catalog.attach(client).await;

    println!("\nFilms populaires");
    let popular = catalog.popular_movies(1).await?;
    for movie in sort_by_rating(&popular.results, SortOrder::Descending).iter().take(5) {
        let card = catalog.format_for_display_as(movie, MediaKind::Movie);
        println!(
            "  {:<40} {:>8}  {}  [{}]",
            card.title.unwrap_or_default(),
            card.formatted_rating,
            card.year,
            card.genres.join(", ")
        );
    }

    println!("\nTendances de la semaine");
    let trending = catalog.trending_movies(TimeWindow::Week, 1).await?;
    for movie in filter_by_rating(&trending.results, 7.0).iter().take(5) {
        let card = catalog.format_for_display(movie);
        println!("  {:<40} {}", card.title.unwrap_or_default(), card.formatted_date);
    }

    println!("\nSéries populaires");
    let shows = catalog.popular_tv_shows(1).await?;
    for show in shows.results.iter().take(5) {
        let card = catalog.format_for_display_as(show, MediaKind::Tv);
        println!("  {:<40} {}", card.title.unwrap_or_default(), card.truncated_overview);
    }

    let query = std::env::args().nth(1).unwrap_or_else(|| "dune".to_string());
    println!("\nRecherche: {query}");
    let hits = catalog.search(&query, 1).await?;
    for hit in hits.movies_only().iter().take(5) {
        println!("  {}", hit.display_title().unwrap_or("?"));
    }

    if let Some(first) = popular.results.first() {
        if let Some(details) = catalog.movie_details(first.id).await? {
            let card = catalog.format_for_display_as(&details, MediaKind::Movie);
            let certification = age_certification(&details);
            println!(
                "\n{} ({}) {} {}",
                card.title.unwrap_or_default(),
                card.formatted_runtime,
                card.formatted_rating,
                if certification.is_empty() { "-".to_string() } else { certification }
            );
        }
    }

    // Second pass is served from cache
    catalog.popular_movies(1).await?;
    let stats = catalog.cache_stats();
    println!(
        "\nCache: {} entrées, {} hits, {} misses ({:.0}% hit ratio)",
        stats.count,
        stats.hits,
        stats.misses,
        stats.hit_ratio() * 100.0
    );

    Ok(())
}
