#![allow(dead_code)]

use filmpath_core::{
    Catalog, CatalogError, CancellationToken, FilmId, FilmRef, InMemoryCatalog, LookupSubject,
    PersonId, PersonRef, SearchConfig, SearchObserver, SearchPhase,
};
use std::sync::Mutex;
use std::time::Duration;

/// Default config with the inter-request pause disabled
pub fn fast_config(max_depth: usize) -> SearchConfig {
    SearchConfig {
        request_delay: Duration::ZERO,
        ..SearchConfig::new(max_depth)
    }
}

/// A -X- {C, B}; B -Y- Target; C -Z- D; D -W- Target.
///
/// The shortest connection is A → B → Target (2 hops); the one through C and
/// D takes 3 hops even though C is listed first.
pub fn shortest_path_graph() -> InMemoryCatalog {
    InMemoryCatalog::new()
        .with_film("tt-x", "Film X", &[("nm-a", "A"), ("nm-c", "C"), ("nm-b", "B")])
        .with_film("tt-y", "Film Y", &[("nm-b", "B"), ("nm-t", "Target")])
        .with_film("tt-z", "Film Z", &[("nm-c", "C"), ("nm-d", "D")])
        .with_film("tt-w", "Film W", &[("nm-d", "D"), ("nm-t", "Target")])
}

/// A chain `P0 -F1- P1 -F2- P2 … Pn`
pub fn chain_graph(length: usize) -> InMemoryCatalog {
    let names: Vec<(String, String)> = (0..=length)
        .map(|i| (format!("nm-{i}"), format!("P{i}")))
        .collect();

    (1..=length).fold(InMemoryCatalog::new(), |catalog, i| {
        catalog.with_film(
            &format!("tt-{i}"),
            &format!("F{i}"),
            &[
                (names[i - 1].0.as_str(), names[i - 1].1.as_str()),
                (names[i].0.as_str(), names[i].1.as_str()),
            ],
        )
    })
}

/// Every film shares several people, giving many cycles
pub fn dense_graph() -> InMemoryCatalog {
    let people: Vec<(String, String)> = (0..8)
        .map(|i| (format!("nm-{i}"), format!("Person {i}")))
        .collect();

    (0..8).fold(InMemoryCatalog::new(), |catalog, film| {
        let cast: Vec<(&str, &str)> = (0..4)
            .map(|offset| {
                let (id, name) = &people[(film + offset * 3) % people.len()];
                (id.as_str(), name.as_str())
            })
            .collect();
        catalog.with_film(&format!("tt-{film}"), &format!("Film {film}"), &cast)
    })
}

/// Forwards to an in-memory catalog but fails the cast lookup of the given films
pub struct FaultyCatalog {
    pub inner: InMemoryCatalog,
    pub failing_casts: Vec<FilmId>,
}

impl FaultyCatalog {
    pub fn new(inner: InMemoryCatalog, failing_casts: &[&str]) -> Self {
        Self {
            inner,
            failing_casts: failing_casts.iter().map(|&id| FilmId::new(id)).collect(),
        }
    }
}

impl Catalog for FaultyCatalog {
    async fn resolve_person(&self, name: &str) -> Result<Option<PersonId>, CatalogError> {
        self.inner.resolve_person(name).await
    }

    async fn list_filmography(
        &self,
        person: &PersonId,
        cap: usize,
    ) -> Result<Vec<FilmRef>, CatalogError> {
        self.inner.list_filmography(person, cap).await
    }

    async fn list_cast(&self, film: &FilmId, cap: usize) -> Result<Vec<PersonRef>, CatalogError> {
        if self.failing_casts.contains(film) {
            return Err(CatalogError::Network(format!("connection reset fetching {film}")));
        }
        self.inner.list_cast(film, cap).await
    }
}

/// Ignores the requested cap, returning full lists
pub struct UncappedCatalog(pub InMemoryCatalog);

impl Catalog for UncappedCatalog {
    async fn resolve_person(&self, name: &str) -> Result<Option<PersonId>, CatalogError> {
        self.0.resolve_person(name).await
    }

    async fn list_filmography(
        &self,
        person: &PersonId,
        _cap: usize,
    ) -> Result<Vec<FilmRef>, CatalogError> {
        self.0.list_filmography(person, usize::MAX).await
    }

    async fn list_cast(&self, film: &FilmId, _cap: usize) -> Result<Vec<PersonRef>, CatalogError> {
        self.0.list_cast(film, usize::MAX).await
    }
}

/// Cancels `token` once `after` lookups have been served
pub struct CancellingCatalog {
    pub inner: InMemoryCatalog,
    pub token: CancellationToken,
    pub after: usize,
}

impl CancellingCatalog {
    fn served(&self) {
        if self.inner.lookup_count() >= self.after {
            self.token.cancel();
        }
    }
}

impl Catalog for CancellingCatalog {
    async fn resolve_person(&self, name: &str) -> Result<Option<PersonId>, CatalogError> {
        let result = self.inner.resolve_person(name).await;
        self.served();
        result
    }

    async fn list_filmography(
        &self,
        person: &PersonId,
        cap: usize,
    ) -> Result<Vec<FilmRef>, CatalogError> {
        let result = self.inner.list_filmography(person, cap).await;
        self.served();
        result
    }

    async fn list_cast(&self, film: &FilmId, cap: usize) -> Result<Vec<PersonRef>, CatalogError> {
        let result = self.inner.list_cast(film, cap).await;
        self.served();
        result
    }
}

/// Holds back the cast lookup of one film so later lookups complete first
pub struct DelayedCastCatalog {
    pub inner: InMemoryCatalog,
    pub slow_film: FilmId,
    pub delay: Duration,
}

impl Catalog for DelayedCastCatalog {
    async fn resolve_person(&self, name: &str) -> Result<Option<PersonId>, CatalogError> {
        self.inner.resolve_person(name).await
    }

    async fn list_filmography(
        &self,
        person: &PersonId,
        cap: usize,
    ) -> Result<Vec<FilmRef>, CatalogError> {
        self.inner.list_filmography(person, cap).await
    }

    async fn list_cast(&self, film: &FilmId, cap: usize) -> Result<Vec<PersonRef>, CatalogError> {
        if *film == self.slow_film {
            tokio::time::sleep(self.delay).await;
        }
        self.inner.list_cast(film, cap).await
    }
}

/// A stars in "Earlier" (tt-1) then "Later" (tt-2); both also feature Target
pub fn two_routes_graph() -> InMemoryCatalog {
    InMemoryCatalog::new()
        .with_film("tt-1", "Earlier", &[("nm-a", "A"), ("nm-t", "Target")])
        .with_film("tt-2", "Later", &[("nm-a", "A"), ("nm-t", "Target")])
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    Phase(SearchPhase),
    Dequeued(String, usize),
    DepthLimit(String),
    Film(String),
    Enqueued(String, usize),
    Skipped(String),
    Finished,
}

#[derive(Default)]
pub struct RecordingObserver {
    events: Mutex<Vec<Event>>,
}

impl RecordingObserver {
    pub fn events(&self) -> Vec<Event> {
        self.events.lock().unwrap().clone()
    }

    pub fn enqueued(&self) -> Vec<String> {
        self.events()
            .into_iter()
            .filter_map(|event| match event {
                Event::Enqueued(name, _) => Some(name),
                _ => None,
            })
            .collect()
    }

    pub fn dequeued_depths(&self) -> Vec<usize> {
        self.events()
            .into_iter()
            .filter_map(|event| match event {
                Event::Dequeued(_, depth) => Some(depth),
                _ => None,
            })
            .collect()
    }

    fn push(&self, event: Event) {
        self.events.lock().unwrap().push(event);
    }
}

impl SearchObserver for RecordingObserver {
    fn phase_changed(&self, phase: SearchPhase) {
        self.push(Event::Phase(phase));
    }

    fn node_dequeued(&self, person: &PersonRef, depth: usize) {
        self.push(Event::Dequeued(person.name.clone(), depth));
    }

    fn depth_limit_reached(&self, person: &PersonRef, _depth: usize) {
        self.push(Event::DepthLimit(person.name.clone()));
    }

    fn film_considered(&self, film: &FilmRef) {
        self.push(Event::Film(film.title.clone()));
    }

    fn person_enqueued(&self, person: &PersonRef, depth: usize) {
        self.push(Event::Enqueued(person.name.clone(), depth));
    }

    fn lookup_skipped(&self, subject: &LookupSubject, _error: &CatalogError) {
        self.push(Event::Skipped(subject.to_string()));
    }

    fn search_finished(
        &self,
        _result: &Result<filmpath_core::SearchReport, filmpath_core::SearchError>,
    ) {
        self.push(Event::Finished);
    }
}
