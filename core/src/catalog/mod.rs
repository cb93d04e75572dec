pub mod memory;

pub use memory::{InMemoryCatalog, Lookup};

use serde::{Deserialize, Serialize};
use std::{fmt, future::Future, sync::Arc};
use thiserror::Error;

/// Opaque catalog identifier for a person (`nm…` on IMDb)
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PersonId(String);

/// Opaque catalog identifier for a film (`tt…` on IMDb)
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FilmId(String);

impl PersonId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FilmId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PersonId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl fmt::Display for FilmId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PersonRef {
    pub id: PersonId,
    pub name: String,
}

impl PersonRef {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: PersonId::new(id),
            name: name.into(),
        }
    }
}

/// A film is only ever an edge label; it is listed, never expanded further.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FilmRef {
    pub id: FilmId,
    pub title: String,
}

impl FilmRef {
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: FilmId::new(id),
            title: title.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    #[error("network error: {0}")]
    Network(String),

    #[error("parse error: {0}")]
    Parse(String),
}

/// Remote source of people, filmographies and cast lists.
///
/// Every call is one round trip. Returned lists keep the catalog's own order
/// and never exceed `cap` entries.
pub trait Catalog {
    fn resolve_person(
        &self,
        name: &str,
    ) -> impl Future<Output = Result<Option<PersonId>, CatalogError>> + Send;

    fn list_filmography(
        &self,
        person: &PersonId,
        cap: usize,
    ) -> impl Future<Output = Result<Vec<FilmRef>, CatalogError>> + Send;

    fn list_cast(
        &self,
        film: &FilmId,
        cap: usize,
    ) -> impl Future<Output = Result<Vec<PersonRef>, CatalogError>> + Send;
}

impl<C: Catalog> Catalog for &C {
    fn resolve_person(
        &self,
        name: &str,
    ) -> impl Future<Output = Result<Option<PersonId>, CatalogError>> + Send {
        (**self).resolve_person(name)
    }

    fn list_filmography(
        &self,
        person: &PersonId,
        cap: usize,
    ) -> impl Future<Output = Result<Vec<FilmRef>, CatalogError>> + Send {
        (**self).list_filmography(person, cap)
    }

    fn list_cast(
        &self,
        film: &FilmId,
        cap: usize,
    ) -> impl Future<Output = Result<Vec<PersonRef>, CatalogError>> + Send {
        (**self).list_cast(film, cap)
    }
}

impl<C: Catalog> Catalog for Arc<C> {
    fn resolve_person(
        &self,
        name: &str,
    ) -> impl Future<Output = Result<Option<PersonId>, CatalogError>> + Send {
        self.as_ref().resolve_person(name)
    }

    fn list_filmography(
        &self,
        person: &PersonId,
        cap: usize,
    ) -> impl Future<Output = Result<Vec<FilmRef>, CatalogError>> + Send {
        self.as_ref().list_filmography(person, cap)
    }

    fn list_cast(
        &self,
        film: &FilmId,
        cap: usize,
    ) -> impl Future<Output = Result<Vec<PersonRef>, CatalogError>> + Send {
        self.as_ref().list_cast(film, cap)
    }
}
