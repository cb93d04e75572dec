use super::{Catalog, CatalogError, FilmId, FilmRef, PersonId, PersonRef};
use rustc_hash::FxHashMap;
use std::sync::{Mutex, PoisonError};

/// One request served by an [`InMemoryCatalog`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Lookup {
    Resolve(String),
    Filmography(PersonId),
    Cast(FilmId),
}

/// Fixed catalog held in memory.
///
/// Filmographies list films in the order they were added; cast lists keep the
/// order given to [`InMemoryCatalog::with_film`]. Every served request is
/// recorded and can be inspected with [`InMemoryCatalog::lookups`].
#[derive(Debug, Default)]
pub struct InMemoryCatalog {
    name_lookup: FxHashMap<String, PersonId>,
    filmographies: FxHashMap<PersonId, Vec<FilmRef>>,
    casts: FxHashMap<FilmId, Vec<PersonRef>>,
    lookups: Mutex<Vec<Lookup>>,
}

impl InMemoryCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a person without any films. The first id registered for a
    /// name is the one `resolve_person` returns.
    pub fn with_person(mut self, id: &str, name: &str) -> Self {
        self.register(&PersonRef::new(id, name));
        self
    }

    /// Adds a film with its cast as `(person id, display name)` pairs and
    /// appends it to every cast member's filmography.
    pub fn with_film(mut self, id: &str, title: &str, cast: &[(&str, &str)]) -> Self {
        let film = FilmRef::new(id, title);
        let members: Vec<PersonRef> = cast
            .iter()
            .map(|&(person_id, name)| PersonRef::new(person_id, name))
            .collect();

        for member in &members {
            self.register(member);
            let filmography = self.filmographies.entry(member.id.clone()).or_default();
            if !filmography.iter().any(|known| known.id == film.id) {
                filmography.push(film.clone());
            }
        }

        self.casts.insert(film.id.clone(), members);
        self
    }

    pub fn lookups(&self) -> Vec<Lookup> {
        self.lookups
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn lookup_count(&self) -> usize {
        self.lookups
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    fn register(&mut self, person: &PersonRef) {
        self.name_lookup
            .entry(person.name.clone())
            .or_insert_with(|| person.id.clone());
        self.filmographies.entry(person.id.clone()).or_default();
    }

    fn record(&self, lookup: Lookup) {
        self.lookups
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(lookup);
    }
}

impl Catalog for InMemoryCatalog {
    async fn resolve_person(&self, name: &str) -> Result<Option<PersonId>, CatalogError> {
        self.record(Lookup::Resolve(name.to_string()));
        Ok(self.name_lookup.get(name).cloned())
    }

    async fn list_filmography(
        &self,
        person: &PersonId,
        cap: usize,
    ) -> Result<Vec<FilmRef>, CatalogError> {
        self.record(Lookup::Filmography(person.clone()));
        Ok(self
            .filmographies
            .get(person)
            .map(|films| films.iter().take(cap).cloned().collect())
            .unwrap_or_default())
    }

    async fn list_cast(&self, film: &FilmId, cap: usize) -> Result<Vec<PersonRef>, CatalogError> {
        self.record(Lookup::Cast(film.clone()));
        Ok(self
            .casts
            .get(film)
            .map(|cast| cast.iter().take(cap).cloned().collect())
            .unwrap_or_default())
    }
}
