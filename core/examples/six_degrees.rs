use filmpath_core::{ConnectionSearch, InMemoryCatalog, SearchConfig, SearchOutcome};
use std::time::Duration;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let catalog = InMemoryCatalog::new()
        .with_film(
            "tt0092099",
            "Top Gun",
            &[("nm0000129", "Tom Cruise"), ("nm0000174", "Val Kilmer")],
        )
        .with_film(
            "tt0113277",
            "Heat",
            &[
                ("nm0000199", "Al Pacino"),
                ("nm0000134", "Robert De Niro"),
                ("nm0000174", "Val Kilmer"),
            ],
        );

    let config = SearchConfig {
        request_delay: Duration::ZERO,
        ..SearchConfig::new(6)
    };
    let search = ConnectionSearch::new(catalog, config);
    let report = search.find_connection("Tom Cruise", "Robert De Niro").await?;

    match report.outcome {
        SearchOutcome::Found(path) => {
            println!("🎯 Distance {}", path.len());
            for (step, hop) in path.hops().iter().enumerate() {
                println!("  {}. {} → [{}] → {}", step + 1, hop.from, hop.via, hop.to);
            }
        }
        SearchOutcome::NotFound => println!("❌ No connection found"),
    }

    println!("📊 {} catalog lookups", report.stats.lookups);
    Ok(())
}
