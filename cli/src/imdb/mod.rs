pub mod extract;

use filmpath_core::{Catalog, CatalogError, FilmId, FilmRef, PersonId, PersonRef};
use moka::future::Cache;
use reqwest::Client;
use std::time::Duration;
use tracing::debug;

pub const DEFAULT_BASE_URL: &str = "https://www.imdb.com";
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(15);

pub fn title_url(base_url: &str, film: &FilmId) -> String {
    format!("{}/title/{}/", base_url.trim_end_matches('/'), film)
}

pub fn name_url(base_url: &str, person: &PersonId) -> String {
    format!("{}/name/{}/", base_url.trim_end_matches('/'), person)
}

/// IMDb-backed catalog. Pages are fetched over HTTP and scraped; each page is
/// fetched at most once per client.
#[derive(Clone)]
pub struct ImdbClient {
    client: Client,
    base_url: String,
    cache: Cache<String, String>, // Cache raw page bodies by path
}

impl ImdbClient {
    pub fn new(base_url: &str, user_agent: &str) -> Result<Self, reqwest::Error> {
        let client = Client::builder()
            .user_agent(user_agent)
            .timeout(REQUEST_TIMEOUT)
            .build()?;

        let cache = Cache::builder()
            .max_capacity(10_000)
            .time_to_live(Duration::from_secs(60 * 60)) // 1 hour
            .build();

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            cache,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn fetch_page(&self, path: String) -> Result<String, CatalogError> {
        // Check cache first
        if let Some(cached_page) = self.cache.get(&path).await {
            return Ok(cached_page);
        }

        let url = format!("{}{}", self.base_url, path);
        debug!(%url, "fetching page");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| CatalogError::Network(format!("{}: {}", url, e)))?;

        let status = response.status();
        if !status.is_success() {
            return Err(CatalogError::Network(format!("{} returned {}", url, status)));
        }

        let page = response
            .text()
            .await
            .map_err(|e| CatalogError::Network(format!("{}: {}", url, e)))?;

        if page.trim().is_empty() {
            return Err(CatalogError::Parse(format!("empty page from {}", url)));
        }

        self.cache.insert(path, page.clone()).await;
        Ok(page)
    }
}

impl Catalog for ImdbClient {
    async fn resolve_person(&self, name: &str) -> Result<Option<PersonId>, CatalogError> {
        let page = self
            .fetch_page(format!("/find/?q={}&s=nm", urlencoding::encode(name)))
            .await?;
        Ok(extract::first_person_result(&page))
    }

    async fn list_filmography(
        &self,
        person: &PersonId,
        cap: usize,
    ) -> Result<Vec<FilmRef>, CatalogError> {
        let page = self.fetch_page(format!("/name/{}/", person)).await?;
        Ok(extract::filmography(&page, cap))
    }

    async fn list_cast(&self, film: &FilmId, cap: usize) -> Result<Vec<PersonRef>, CatalogError> {
        let page = self
            .fetch_page(format!("/title/{}/fullcredits", film))
            .await?;
        Ok(extract::cast(&page, cap))
    }
}
