use filmpath_core::{DepthUnit, PersonIdentity, SearchConfig, SearchError, SearchReport};
use serde::{Deserialize, Serialize};

use crate::imdb::{name_url, title_url};

#[derive(Serialize, Deserialize)]
pub struct JsonOutput {
    pub query: JsonQuery,
    pub result: JsonResult,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stats: Option<JsonStats>,
}

#[derive(Serialize, Deserialize)]
pub struct JsonQuery {
    pub from: String,
    pub to: String,
    pub options: JsonOptions,
}

#[derive(Serialize, Deserialize)]
pub struct JsonOptions {
    pub max_depth: usize,
    pub depth_unit: DepthUnit,
    pub film_cap: usize,
    pub cast_cap: usize,
    pub identity: PersonIdentity,
}

#[derive(Serialize, Deserialize)]
pub struct JsonResult {
    pub status: String,
    pub found: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub distance: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<Vec<JsonHop>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[derive(Serialize, Deserialize)]
pub struct JsonHop {
    pub from: String,
    pub film: String,
    pub film_url: String,
    pub to: String,
    pub to_url: String,
}

#[derive(Serialize, Deserialize)]
pub struct JsonStats {
    pub search_time_ms: u64,
    pub people_expanded: usize,
    pub films_examined: usize,
    pub lookups: usize,
    pub people_discovered: usize,
}

fn status_of(result: &Result<SearchReport, SearchError>) -> &'static str {
    match result {
        Ok(report) if report.outcome.is_found() => "found",
        Ok(_) => "not_found",
        Err(SearchError::LookupFailed { .. }) => "lookup_failed",
        Err(SearchError::SourceUnresolvable { .. }) => "source_unresolvable",
        Err(SearchError::Cancelled) => "cancelled",
    }
}

pub fn create_json_output(
    result: &Result<SearchReport, SearchError>,
    from_name: &str,
    to_name: &str,
    config: &SearchConfig,
    base_url: &str,
) -> JsonOutput {
    let report = result.as_ref().ok();
    let path = report.and_then(|report| report.path());

    let json_path = path.map(|path| {
        path.hops()
            .iter()
            .map(|hop| JsonHop {
                from: hop.from.clone(),
                film: hop.via.clone(),
                film_url: title_url(base_url, &hop.film_id),
                to: hop.to.clone(),
                to_url: name_url(base_url, &hop.to_id),
            })
            .collect()
    });

    JsonOutput {
        query: JsonQuery {
            from: from_name.to_string(),
            to: to_name.to_string(),
            options: JsonOptions {
                max_depth: config.max_depth,
                depth_unit: config.depth_unit,
                film_cap: config.film_cap,
                cast_cap: config.cast_cap,
                identity: config.identity,
            },
        },
        result: JsonResult {
            status: status_of(result).to_string(),
            found: path.is_some(),
            distance: path.map(|path| path.len()),
            path: json_path,
            error: result.as_ref().err().map(|error| error.to_string()),
        },
        stats: report.map(|report| JsonStats {
            search_time_ms: report.stats.elapsed.as_millis() as u64,
            people_expanded: report.stats.people_expanded,
            films_examined: report.stats.films_examined,
            lookups: report.stats.lookups,
            people_discovered: report.stats.people_discovered,
        }),
    }
}

pub fn print_json_output(json_output: &JsonOutput) {
    match serde_json::to_string_pretty(json_output) {
        Ok(json_string) => println!("{}", json_string),
        Err(e) => eprintln!("Error serializing to JSON: {}", e),
    }
}
