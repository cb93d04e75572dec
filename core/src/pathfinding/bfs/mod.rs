mod state;

use super::utils::{ConnectionPath, Hop, SearchOutcome, SearchPhase, SearchReport, SearchStats};
use crate::catalog::{Catalog, FilmRef, PersonId, PersonRef};
use crate::error::{LookupSubject, SearchError};
use crate::observer::{SearchObserver, TracingObserver};
use crate::search_config::{LookupFailurePolicy, PersonIdentity, SearchConfig};
use futures::stream::{self, StreamExt};
use state::{BfsState, FrontierEntry};
use std::future::Future;
use std::pin::pin;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Instant;
use tokio_util::sync::CancellationToken;
use tracing::{info, warn};

/// Breadth-first connection search over a [`Catalog`].
///
/// The people graph is discovered lazily: a person's filmography is only
/// requested when that person is dequeued, and a film's cast only when the
/// film is reached in that filmography. The first path that reaches the
/// target is the shortest one within the depth bound and the per-lookup caps.
pub struct ConnectionSearch<C> {
    catalog: C,
    config: SearchConfig,
}

impl<C: Catalog> ConnectionSearch<C> {
    pub fn new(catalog: C, config: SearchConfig) -> Self {
        Self { catalog, config }
    }

    pub fn catalog(&self) -> &C {
        &self.catalog
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Runs a search that can't be cancelled, tracing events through `tracing`
    pub async fn find_connection(
        &self,
        source: &str,
        target: &str,
    ) -> Result<SearchReport, SearchError> {
        self.find_connection_with(source, target, &CancellationToken::new(), &TracingObserver)
            .await
    }

    /// Runs a search that stops at the next catalog call or pause once
    /// `cancel` fires or the configured timeout expires.
    pub async fn find_connection_with(
        &self,
        source: &str,
        target: &str,
        cancel: &CancellationToken,
        observer: &dyn SearchObserver,
    ) -> Result<SearchReport, SearchError> {
        observer.search_started(source, target, &self.config);

        let run = SearchRun {
            catalog: &self.catalog,
            config: &self.config,
            cancel,
            observer,
            // A timeout past the clock's range means no deadline
            deadline: self
                .config
                .timeout
                .and_then(|timeout| tokio::time::Instant::now().checked_add(timeout)),
            lookups: AtomicUsize::new(0),
        };
        let result = run.execute(source, target).await;

        match &result {
            Ok(report) => info!(
                source,
                target,
                found = report.outcome.is_found(),
                lookups = report.stats.lookups,
                "connection search finished"
            ),
            Err(error) => warn!(source, target, %error, "connection search failed"),
        }

        observer.phase_changed(SearchPhase::Terminated);
        observer.search_finished(&result);
        result
    }
}

struct SearchRun<'a, C> {
    catalog: &'a C,
    config: &'a SearchConfig,
    cancel: &'a CancellationToken,
    observer: &'a dyn SearchObserver,
    deadline: Option<tokio::time::Instant>,
    lookups: AtomicUsize,
}

impl<C: Catalog> SearchRun<'_, C> {
    async fn execute(&self, source: &str, target: &str) -> Result<SearchReport, SearchError> {
        let search_timer = Instant::now();
        let mut stats = SearchStats::default();
        self.observer.phase_changed(SearchPhase::Initializing);

        if self.config.name_matching.matches(source, target) {
            return Ok(self.report(
                SearchOutcome::Found(ConnectionPath::default()),
                stats,
                search_timer,
            ));
        }

        let source_id = self
            .resolve(source)
            .await?
            .ok_or_else(|| SearchError::SourceUnresolvable {
                name: source.to_string(),
            })?;

        let target_key = match self.config.identity {
            PersonIdentity::DisplayName => self.config.name_matching.key(target),
            PersonIdentity::CatalogId => match self.resolve(target).await? {
                Some(target_id) => target_id.as_str().to_string(),
                None => {
                    warn!(target, "target has no catalog entry");
                    return Ok(self.report(SearchOutcome::NotFound, stats, search_timer));
                }
            },
        };

        let start = PersonRef {
            id: source_id,
            name: source.to_string(),
        };
        let start_key = self.identity_key(&start);
        if start_key == target_key {
            return Ok(self.report(
                SearchOutcome::Found(ConnectionPath::default()),
                stats,
                search_timer,
            ));
        }

        let mut bfs_state = BfsState::new(start_key, start);
        let hop_limit = self.config.hop_limit();
        self.observer.phase_changed(SearchPhase::Expanding);

        while let Some(entry) = bfs_state.next_entry() {
            self.observer.node_dequeued(&entry.person, entry.depth);

            if entry.depth >= hop_limit {
                self.observer.depth_limit_reached(&entry.person, entry.depth);
                continue;
            }

            let found = self
                .expand(&mut bfs_state, &entry, &target_key, &mut stats)
                .await;
            stats.people_discovered = bfs_state.discovered();

            if let Some(path) = found? {
                return Ok(self.report(SearchOutcome::Found(path), stats, search_timer));
            }
        }

        Ok(self.report(SearchOutcome::NotFound, stats, search_timer))
    }

    /// Fetches the filmography of `entry` and the cast of each film in order,
    /// enqueueing unseen people. Returns the path as soon as a cast member
    /// matches the target.
    async fn expand(
        &self,
        bfs_state: &mut BfsState,
        entry: &FrontierEntry,
        target_key: &str,
        stats: &mut SearchStats,
    ) -> Result<Option<ConnectionPath>, SearchError> {
        stats.people_expanded += 1;

        let films = match self.filmography(&entry.person).await {
            Ok(films) => films,
            Err(error) => {
                self.tolerate(error)?;
                return Ok(None);
            }
        };
        self.observer.filmography_fetched(&entry.person, films.len());

        let mut casts = pin!(
            stream::iter(films)
                .map(|film| async move {
                    let cast = self.cast(&film).await;
                    (film, cast)
                })
                .buffered(self.config.prefetch.max(1))
        );

        while let Some((film, cast)) = casts.next().await {
            stats.films_examined += 1;
            self.observer.film_considered(&film);

            let cast = match cast {
                Ok(cast) => cast,
                Err(error) => {
                    self.tolerate(error)?;
                    continue;
                }
            };
            self.observer.cast_fetched(&film, cast.len());

            for member in cast {
                self.observer.candidate_considered(&member);
                let hop = Hop::new(&entry.person, &film, &member);
                let key = self.identity_key(&member);

                if key == target_key {
                    let mut path = bfs_state.path_to(&entry.key);
                    path.push(hop);
                    return Ok(Some(path));
                }

                let depth = entry.depth + 1;
                let enqueued_person = member.clone();
                if bfs_state.visit_neighbor(key, member, entry, hop) {
                    self.observer.person_enqueued(&enqueued_person, depth);
                }
            }
        }

        Ok(None)
    }

    fn identity_key(&self, person: &PersonRef) -> String {
        match self.config.identity {
            PersonIdentity::DisplayName => self.config.name_matching.key(&person.name),
            PersonIdentity::CatalogId => person.id.as_str().to_string(),
        }
    }

    /// Swallows a lookup failure when the skip policy allows it
    fn tolerate(&self, error: SearchError) -> Result<(), SearchError> {
        match (&error, self.config.on_lookup_failure) {
            (SearchError::LookupFailed { subject, source }, LookupFailurePolicy::Skip) => {
                warn!(%subject, error = %source, "lookup failed, skipping");
                self.observer.lookup_skipped(subject, source);
                Ok(())
            }
            _ => Err(error),
        }
    }

    async fn resolve(&self, name: &str) -> Result<Option<PersonId>, SearchError> {
        self.lookups.fetch_add(1, Ordering::Relaxed);
        self.suspend(self.catalog.resolve_person(name))
            .await?
            .map_err(|source| SearchError::LookupFailed {
                subject: LookupSubject::Person(name.to_string()),
                source,
            })
    }

    async fn filmography(&self, person: &PersonRef) -> Result<Vec<FilmRef>, SearchError> {
        let cap = self.config.film_cap;
        self.lookups.fetch_add(1, Ordering::Relaxed);

        let mut films = self
            .suspend(self.catalog.list_filmography(&person.id, cap))
            .await?
            .map_err(|source| SearchError::LookupFailed {
                subject: LookupSubject::Filmography(person.clone()),
                source,
            })?;
        films.truncate(cap);

        self.pause().await?;
        Ok(films)
    }

    async fn cast(&self, film: &FilmRef) -> Result<Vec<PersonRef>, SearchError> {
        let cap = self.config.cast_cap;
        self.lookups.fetch_add(1, Ordering::Relaxed);

        let mut cast = self
            .suspend(self.catalog.list_cast(&film.id, cap))
            .await?
            .map_err(|source| SearchError::LookupFailed {
                subject: LookupSubject::Cast(film.clone()),
                source,
            })?;
        cast.truncate(cap);

        self.pause().await?;
        Ok(cast)
    }

    async fn pause(&self) -> Result<(), SearchError> {
        if self.config.request_delay.is_zero() {
            return Ok(());
        }
        self.suspend(tokio::time::sleep(self.config.request_delay)).await
    }

    /// Races `operation` against cancellation and the deadline
    async fn suspend<F: Future>(&self, operation: F) -> Result<F::Output, SearchError> {
        let deadline = async {
            match self.deadline {
                Some(deadline) => tokio::time::sleep_until(deadline).await,
                None => std::future::pending().await,
            }
        };

        tokio::select! {
            biased;
            _ = self.cancel.cancelled() => Err(SearchError::Cancelled),
            _ = deadline => Err(SearchError::Cancelled),
            output = operation => Ok(output),
        }
    }

    fn report(
        &self,
        outcome: SearchOutcome,
        mut stats: SearchStats,
        search_timer: Instant,
    ) -> SearchReport {
        stats.lookups = self.lookups.load(Ordering::Relaxed);
        stats.elapsed = search_timer.elapsed();
        SearchReport { outcome, stats }
    }
}
