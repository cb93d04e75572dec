use crate::catalog::{FilmId, FilmRef, PersonId, PersonRef};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// One edge of a connection: `from` and `to` both appear in the film `via`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hop {
    pub from: String,
    pub via: String,
    pub to: String,
    pub film_id: FilmId,
    pub to_id: PersonId,
}

impl Hop {
    pub fn new(from: &PersonRef, film: &FilmRef, to: &PersonRef) -> Self {
        Self {
            from: from.name.clone(),
            via: film.title.clone(),
            to: to.name.clone(),
            film_id: film.id.clone(),
            to_id: to.id.clone(),
        }
    }
}

/// Ordered hops from the source person. Length is the graph distance.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ConnectionPath {
    hops: Vec<Hop>,
}

impl ConnectionPath {
    pub fn new(hops: Vec<Hop>) -> Self {
        Self { hops }
    }

    pub fn len(&self) -> usize {
        self.hops.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hops.is_empty()
    }

    pub fn hops(&self) -> &[Hop] {
        &self.hops
    }

    pub fn push(&mut self, hop: Hop) {
        self.hops.push(hop);
    }

    /// Display names along the path, source first
    pub fn people(&self) -> Vec<&str> {
        let mut people = Vec::with_capacity(self.hops.len() + 1);
        if let Some(first) = self.hops.first() {
            people.push(first.from.as_str());
        }
        people.extend(self.hops.iter().map(|hop| hop.to.as_str()));
        people
    }
}

impl<'a> IntoIterator for &'a ConnectionPath {
    type Item = &'a Hop;
    type IntoIter = std::slice::Iter<'a, Hop>;

    fn into_iter(self) -> Self::IntoIter {
        self.hops.iter()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome {
    Found(ConnectionPath),
    /// Frontier exhausted within the depth bound and caps
    NotFound,
}

impl SearchOutcome {
    pub fn path(&self) -> Option<&ConnectionPath> {
        match self {
            SearchOutcome::Found(path) => Some(path),
            SearchOutcome::NotFound => None,
        }
    }

    pub fn is_found(&self) -> bool {
        matches!(self, SearchOutcome::Found(_))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchPhase {
    Initializing,
    Expanding,
    Terminated,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchStats {
    /// Frontier entries whose filmography was requested
    pub people_expanded: usize,
    /// Films whose cast list was consumed
    pub films_examined: usize,
    /// Catalog requests issued, resolutions included
    pub lookups: usize,
    /// Size of the visited set when the search ended
    pub people_discovered: usize,
    pub elapsed: Duration,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SearchReport {
    pub outcome: SearchOutcome,
    pub stats: SearchStats,
}

impl SearchReport {
    pub fn path(&self) -> Option<&ConnectionPath> {
        self.outcome.path()
    }
}
