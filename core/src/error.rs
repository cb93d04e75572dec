use crate::catalog::{CatalogError, FilmRef, PersonRef};
use std::fmt;
use thiserror::Error;

/// The catalog request a failure belongs to
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LookupSubject {
    Person(String),
    Filmography(PersonRef),
    Cast(FilmRef),
}

impl fmt::Display for LookupSubject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LookupSubject::Person(name) => write!(f, "catalog entry for \"{}\"", name),
            LookupSubject::Filmography(person) => {
                write!(f, "filmography of \"{}\" ({})", person.name, person.id)
            }
            LookupSubject::Cast(film) => write!(f, "cast of \"{}\" ({})", film.title, film.id),
        }
    }
}

/// Terminal failures of a connection search. Running out of frontier is not
/// an error; see `SearchOutcome::NotFound`.
#[derive(Debug, Error)]
pub enum SearchError {
    #[error("lookup failed for {subject}: {source}")]
    LookupFailed {
        subject: LookupSubject,
        #[source]
        source: CatalogError,
    },

    #[error("no catalog entry found for \"{name}\"")]
    SourceUnresolvable { name: String },

    #[error("search cancelled")]
    Cancelled,
}
