use crate::string_normalization::clean_str;
use serde::{Deserialize, Serialize};
use std::time::Duration;

pub const DEFAULT_MAX_DEPTH: usize = 6;
pub const DEFAULT_FILM_CAP: usize = 20;
pub const DEFAULT_CAST_CAP: usize = 20;
pub const DEFAULT_REQUEST_DELAY: Duration = Duration::from_millis(200);

/// Unit the depth bound is counted in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DepthUnit {
    /// One unit per (person, film, person) hop of the returned path
    #[default]
    Hops,
    /// One unit per person or film level, i.e. two per hop
    Levels,
}

impl DepthUnit {
    /// Number of hops a frontier entry may already carry and still be expanded
    pub fn hop_limit(self, max_depth: usize) -> usize {
        match self {
            DepthUnit::Hops => max_depth,
            DepthUnit::Levels => max_depth.saturating_mul(2),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            DepthUnit::Hops => "hops",
            DepthUnit::Levels => "levels",
        }
    }
}

/// What makes two catalog people "the same person" during a search
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PersonIdentity {
    /// Visited set and target match use display names
    #[default]
    DisplayName,
    /// Visited set and target match use catalog ids; the target name is
    /// resolved once before the traversal starts
    CatalogId,
}

impl PersonIdentity {
    pub fn as_str(self) -> &'static str {
        match self {
            PersonIdentity::DisplayName => "display_name",
            PersonIdentity::CatalogId => "catalog_id",
        }
    }
}

/// How display names are compared under [`PersonIdentity::DisplayName`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NameMatching {
    #[default]
    Exact,
    /// Accents folded to ASCII, case ignored, whitespace collapsed
    Normalized,
}

impl NameMatching {
    pub fn key(self, name: &str) -> String {
        match self {
            NameMatching::Exact => name.to_string(),
            NameMatching::Normalized => clean_str(name),
        }
    }

    pub fn matches(self, left: &str, right: &str) -> bool {
        match self {
            NameMatching::Exact => left == right,
            NameMatching::Normalized => clean_str(left) == clean_str(right),
        }
    }
}

/// What to do when a filmography or cast lookup fails mid-search
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LookupFailurePolicy {
    /// Abort the whole search with `LookupFailed`
    #[default]
    Abort,
    /// Log the failed person or film and keep searching. The result may then
    /// miss the true shortest path.
    Skip,
}

/// Configuration for the connection search
#[derive(Debug, Clone, PartialEq)]
pub struct SearchConfig {
    /// Maximum path length, counted in `depth_unit`
    pub max_depth: usize,
    pub depth_unit: DepthUnit,
    /// Films requested per filmography lookup
    pub film_cap: usize,
    /// People requested per cast lookup
    pub cast_cap: usize,
    /// Pause after every filmography and cast lookup
    pub request_delay: Duration,
    pub identity: PersonIdentity,
    pub name_matching: NameMatching,
    pub on_lookup_failure: LookupFailurePolicy,
    /// Cast lookups of one filmography kept in flight at once. Results are
    /// still consumed in filmography order. Above 1 each lookup pauses on its
    /// own, so up to `prefetch` requests can reach the catalog together and
    /// `request_delay` no longer spaces every call.
    pub prefetch: usize,
    /// Deadline for the whole search, reported as cancellation
    pub timeout: Option<Duration>,
}

impl SearchConfig {
    pub fn new(max_depth: usize) -> Self {
        Self {
            max_depth,
            ..Self::default()
        }
    }

    pub fn hop_limit(&self) -> usize {
        self.depth_unit.hop_limit(self.max_depth)
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            depth_unit: DepthUnit::Hops,
            film_cap: DEFAULT_FILM_CAP,
            cast_cap: DEFAULT_CAST_CAP,
            request_delay: DEFAULT_REQUEST_DELAY,
            identity: PersonIdentity::DisplayName,
            name_matching: NameMatching::Exact,
            on_lookup_failure: LookupFailurePolicy::Abort,
            prefetch: 1,
            timeout: None,
        }
    }
}
