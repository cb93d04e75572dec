use filmpath_core::{ConnectionPath, Hop, SearchError, SearchStats};

use crate::args::Args;
use crate::colors::ColorScheme;
use crate::imdb::title_url;
use crate::search::{SearchRequest, SearchResult};
use crate::utils::format_number;

pub fn display_search_info(request: &SearchRequest, colors: &ColorScheme) {
    println!(
        "🎬 Finding connection from {} to {}",
        colors.person_name(&format!("\"{}\"", request.from_name)),
        colors.person_name(&format!("\"{}\"", request.to_name))
    );

    let config = &request.config;
    println!(
        "⚙️  Up to {} {}, {} films × {} cast members per lookup",
        colors.number(&config.max_depth.to_string()),
        config.depth_unit.as_str(),
        colors.number(&config.film_cap.to_string()),
        colors.number(&config.cast_cap.to_string())
    );

    if request.search_args.match_by_id {
        println!("🪪 Matching people by catalog id");
    }

    if request.search_args.skip_failures {
        println!("⚠️  Failed lookups will be skipped; the result may not be the shortest");
    }

    println!("🔍 Searching...");
}

pub fn display_search_results(result: &SearchResult, base_url: &str, colors: &ColorScheme) {
    let is_verbose = result.display_options.verbose;

    if is_verbose {
        println!("\n---\n");
    }

    match &result.result {
        Ok(report) => {
            match report.path() {
                Some(path) if path.is_empty() => println!(
                    "{} {} and {} are the same person (distance 0)",
                    colors.success("✅"),
                    colors.person_name(&format!("\"{}\"", result.from_name)),
                    colors.person_name(&format!("\"{}\"", result.to_name))
                ),
                Some(path) => {
                    display_successful_path(path, &result.display_options, base_url, colors)
                }
                None => println!(
                    "{} {} and {} within {} {}",
                    colors.error("❌ No connection found between"),
                    colors.person_name(&format!("\"{}\"", result.from_name)),
                    colors.person_name(&format!("\"{}\"", result.to_name)),
                    result.config.max_depth,
                    result.config.depth_unit.as_str()
                ),
            }

            if is_verbose {
                display_search_statistics(&report.stats, colors);
            }
        }
        Err(error) => display_search_error(error, colors),
    }
}

pub fn display_search_error(error: &SearchError, colors: &ColorScheme) {
    match error {
        SearchError::Cancelled => eprintln!("{}", colors.error("⏹️  Search cancelled")),
        other => eprintln!("{} {}", colors.error("❌ Error:"), other),
    }
}

fn display_successful_path(
    path: &ConnectionPath,
    display_options: &Args,
    base_url: &str,
    colors: &ColorScheme,
) {
    if display_options.verbose {
        println!(
            "{} Found connection with {} hops:\n",
            colors.success("✅"),
            colors.number(&path.len().to_string())
        );
    }

    // Show path flow first
    println!("{}", format_path_flow(path, colors));

    // Show detailed list only if not in quiet mode
    if !display_options.quiet {
        println!();
        for (hop_index, hop) in path.hops().iter().enumerate() {
            println!(
                "{}",
                format_hop(hop_index, hop, base_url, display_options.hide_urls, colors)
            );
        }
    }
}

/// `"A" → [Film] → "B" → …`
pub fn format_path_flow(path: &ConnectionPath, colors: &ColorScheme) -> String {
    let Some(first) = path.hops().first() else {
        return String::new();
    };

    let mut flow = colors
        .person_name(&format!("\"{}\"", first.from))
        .to_string();
    for hop in path {
        flow.push_str(&format!(
            " → {} → {}",
            colors.film_title(&format!("[{}]", hop.via)),
            colors.person_name(&format!("\"{}\"", hop.to))
        ));
    }
    flow
}

pub fn format_hop(
    hop_index: usize,
    hop: &Hop,
    base_url: &str,
    hide_urls: bool,
    colors: &ColorScheme,
) -> String {
    let step_number = format!("{}.", hop_index + 1);
    let mut formatted_line = format!(
        "{:3} {} and {} in {}",
        colors.step_number(&step_number),
        colors.person_name(&format!("\"{}\"", hop.from)),
        colors.person_name(&format!("\"{}\"", hop.to)),
        colors.film_title(&hop.via)
    );

    if !hide_urls {
        formatted_line.push_str(&format!(
            " - {}",
            colors.url(&title_url(base_url, &hop.film_id))
        ));
    }

    formatted_line
}

fn display_search_statistics(stats: &SearchStats, colors: &ColorScheme) {
    println!("\n---\n");
    println!(
        "{} Expanded {} people and {} films ({} lookups, {} people discovered) in {} sec",
        colors.stats("📊"),
        colors.number(&format_number(stats.people_expanded)),
        colors.number(&format_number(stats.films_examined)),
        colors.number(&format_number(stats.lookups)),
        colors.number(&format_number(stats.people_discovered)),
        colors.number(&format!("{:.3}", stats.elapsed.as_secs_f64()))
    );
}
