use filmpath_core::{
    CancellationToken, Catalog, ConnectionSearch, SearchConfig, SearchError, SearchObserver,
    SearchReport,
};

use crate::app::search_config;
use crate::args::Args;

pub const EXIT_FOUND: i32 = 0;
pub const EXIT_NOT_FOUND: i32 = 1;
pub const EXIT_ERROR: i32 = 2;
pub const EXIT_CANCELLED: i32 = 130;

pub struct SearchRequest {
    pub from_name: String,
    pub to_name: String,
    pub config: SearchConfig,
    pub search_args: Args,
}

pub struct SearchResult {
    pub result: Result<SearchReport, SearchError>,
    pub from_name: String,
    pub to_name: String,
    pub config: SearchConfig,
    pub display_options: Args,
}

impl SearchResult {
    pub fn exit_code(&self) -> i32 {
        match &self.result {
            Ok(report) if report.outcome.is_found() => EXIT_FOUND,
            Ok(_) => EXIT_NOT_FOUND,
            Err(SearchError::Cancelled) => EXIT_CANCELLED,
            Err(_) => EXIT_ERROR,
        }
    }
}

pub fn create_search_request(args: Args) -> Result<SearchRequest, String> {
    let from_name = args.from.trim().to_string();
    let to_name = args.to.trim().to_string();

    if from_name.is_empty() || to_name.is_empty() {
        return Err("Both people must be given by a non-empty name".to_string());
    }

    Ok(SearchRequest {
        from_name,
        to_name,
        config: search_config(&args),
        search_args: args,
    })
}

pub async fn execute_search<C: Catalog>(
    request: SearchRequest,
    catalog: C,
    cancel: &CancellationToken,
    observer: &dyn SearchObserver,
) -> SearchResult {
    let search = ConnectionSearch::new(catalog, request.config);
    let result = search
        .find_connection_with(&request.from_name, &request.to_name, cancel, observer)
        .await;

    SearchResult {
        result,
        from_name: request.from_name,
        to_name: request.to_name,
        config: search.config().clone(),
        display_options: request.search_args,
    }
}
