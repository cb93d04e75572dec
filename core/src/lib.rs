pub mod catalog;
pub mod error;
pub mod observer;
pub mod pathfinding;
pub mod search_config;
pub mod string_normalization;

// Re-export commonly used items
pub use catalog::{Catalog, CatalogError, FilmId, FilmRef, InMemoryCatalog, PersonId, PersonRef};
pub use error::{LookupSubject, SearchError};
pub use observer::{NoopObserver, SearchObserver, TracingObserver};
pub use pathfinding::{
    ConnectionPath, ConnectionSearch, Hop, SearchOutcome, SearchPhase, SearchReport, SearchStats,
};
pub use search_config::{
    DepthUnit, LookupFailurePolicy, NameMatching, PersonIdentity, SearchConfig,
};
pub use tokio_util::sync::CancellationToken;
