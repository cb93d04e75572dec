use crate::catalog::{CatalogError, FilmRef, PersonRef};
use crate::error::{LookupSubject, SearchError};
use crate::pathfinding::{SearchPhase, SearchReport};
use crate::search_config::SearchConfig;
use tracing::{debug, trace};

/// Hooks invoked at traversal events. All methods default to doing nothing;
/// the search result never depends on them.
pub trait SearchObserver: Send + Sync {
    fn search_started(&self, _source: &str, _target: &str, _config: &SearchConfig) {}

    fn phase_changed(&self, _phase: SearchPhase) {}

    fn node_dequeued(&self, _person: &PersonRef, _depth: usize) {}

    fn depth_limit_reached(&self, _person: &PersonRef, _depth: usize) {}

    fn filmography_fetched(&self, _person: &PersonRef, _films: usize) {}

    fn film_considered(&self, _film: &FilmRef) {}

    fn cast_fetched(&self, _film: &FilmRef, _cast: usize) {}

    fn candidate_considered(&self, _candidate: &PersonRef) {}

    fn person_enqueued(&self, _person: &PersonRef, _depth: usize) {}

    fn lookup_skipped(&self, _subject: &LookupSubject, _error: &CatalogError) {}

    fn search_finished(&self, _result: &Result<SearchReport, SearchError>) {}
}

pub struct NoopObserver;

impl SearchObserver for NoopObserver {}

/// Forwards every traversal event to `tracing`
pub struct TracingObserver;

impl SearchObserver for TracingObserver {
    fn search_started(&self, source: &str, target: &str, config: &SearchConfig) {
        debug!(
            source,
            target,
            max_depth = config.max_depth,
            depth_unit = config.depth_unit.as_str(),
            identity = config.identity.as_str(),
            "search started"
        );
    }

    fn phase_changed(&self, phase: SearchPhase) {
        trace!(?phase, "phase changed");
    }

    fn node_dequeued(&self, person: &PersonRef, depth: usize) {
        debug!(person = %person.name, id = %person.id, depth, "expanding");
    }

    fn depth_limit_reached(&self, person: &PersonRef, depth: usize) {
        trace!(person = %person.name, depth, "depth limit reached");
    }

    fn filmography_fetched(&self, person: &PersonRef, films: usize) {
        debug!(person = %person.name, films, "filmography fetched");
    }

    fn film_considered(&self, film: &FilmRef) {
        trace!(film = %film.title, id = %film.id, "film considered");
    }

    fn cast_fetched(&self, film: &FilmRef, cast: usize) {
        debug!(film = %film.title, cast, "cast fetched");
    }

    fn candidate_considered(&self, candidate: &PersonRef) {
        trace!(candidate = %candidate.name, id = %candidate.id, "candidate");
    }

    fn person_enqueued(&self, person: &PersonRef, depth: usize) {
        trace!(person = %person.name, depth, "enqueued");
    }

    fn lookup_skipped(&self, subject: &LookupSubject, error: &CatalogError) {
        debug!(%subject, %error, "lookup skipped");
    }

    fn search_finished(&self, result: &Result<SearchReport, SearchError>) {
        match result {
            Ok(report) => debug!(
                found = report.outcome.is_found(),
                hops = report.path().map(|path| path.len()),
                lookups = report.stats.lookups,
                "search finished"
            ),
            Err(error) => debug!(%error, "search failed"),
        }
    }
}
