use std::{env, error::Error, time::Duration};

use filmpath_core::{DepthUnit, LookupFailurePolicy, NameMatching, PersonIdentity, SearchConfig};

use crate::args::Args;
use crate::imdb::{DEFAULT_BASE_URL, DEFAULT_USER_AGENT, ImdbClient};

pub struct FilmPathApp {
    pub base_url: String,
    pub user_agent: String,
}

impl FilmPathApp {
    /// Reads `FILMPATH_BASE_URL` and `FILMPATH_USER_AGENT`, falling back to
    /// the public IMDb site
    pub fn from_env() -> Self {
        let base_url =
            env::var("FILMPATH_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        let user_agent =
            env::var("FILMPATH_USER_AGENT").unwrap_or_else(|_| DEFAULT_USER_AGENT.to_string());

        Self {
            base_url,
            user_agent,
        }
    }

    pub fn catalog(&self) -> Result<ImdbClient, Box<dyn Error>> {
        Ok(ImdbClient::new(&self.base_url, &self.user_agent)?)
    }
}

pub fn search_config(args: &Args) -> SearchConfig {
    SearchConfig {
        max_depth: args.max_depth,
        depth_unit: if args.legacy_depth {
            DepthUnit::Levels
        } else {
            DepthUnit::Hops
        },
        film_cap: args.film_cap,
        cast_cap: args.cast_cap,
        request_delay: Duration::from_millis(args.delay_ms),
        identity: if args.match_by_id {
            PersonIdentity::CatalogId
        } else {
            PersonIdentity::DisplayName
        },
        name_matching: if args.normalize_names {
            NameMatching::Normalized
        } else {
            NameMatching::Exact
        },
        on_lookup_failure: if args.skip_failures {
            LookupFailurePolicy::Skip
        } else {
            LookupFailurePolicy::Abort
        },
        prefetch: args.prefetch.max(1),
        timeout: args.timeout_secs.map(Duration::from_secs),
    }
}
