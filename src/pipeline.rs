/// Sequential fetch of the four analytics categories for one domain

use serde_json::Value;
use url::Url;

use crate::config::{ApiConfig, DEFAULT_REQUEST_INTERVAL};
use crate::error::{InsightsError, Result};
use crate::http::{BrowserTransport, HttpRequest, Transport};
use crate::throttle::{BrowserSleeper, FixedIntervalGate, RequestGate};

/// One result slot of a query, in request order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    WebsiteDetails,
    Traffic,
    Rank,
    SimilarSites,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::WebsiteDetails,
        Category::Traffic,
        Category::Rank,
        Category::SimilarSites,
    ];

    pub fn path(self) -> &'static str {
        match self {
            Category::WebsiteDetails => "website-details",
            Category::Traffic => "traffic",
            Category::Rank => "rank",
            Category::SimilarSites => "similar-sites",
        }
    }
}

/// Build `<base_url>/<category path>?domain=<domain>`
pub fn endpoint_url(base_url: &str, category: Category, domain: &str) -> Result<Url> {
    let mut url = Url::parse(&format!(
        "{}/{}",
        base_url.trim_end_matches('/'),
        category.path()
    ))?;
    url.query_pairs_mut().append_pair("domain", domain);
    Ok(url)
}

/// Raw bodies for the four categories; `None` where that request failed
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QueryResults {
    pub website_details: Option<Value>,
    pub traffic: Option<Value>,
    pub rank: Option<Value>,
    pub similar_sites: Option<Value>,
}

impl QueryResults {
    pub fn from_slots(slots: [Option<Value>; 4]) -> Self {
        let [website_details, traffic, rank, similar_sites] = slots;
        QueryResults {
            website_details,
            traffic,
            rank,
            similar_sites,
        }
    }

    pub fn get(&self, category: Category) -> Option<&Value> {
        match category {
            Category::WebsiteDetails => self.website_details.as_ref(),
            Category::Traffic => self.traffic.as_ref(),
            Category::Rank => self.rank.as_ref(),
            Category::SimilarSites => self.similar_sites.as_ref(),
        }
    }

    pub fn failed_count(&self) -> usize {
        Category::ALL
            .iter()
            .filter(|category| self.get(**category).is_none())
            .count()
    }
}

/// Client for the analytics API
///
/// The configuration is optional so a client can exist before the key has
/// loaded; querying without it is rejected up front.
pub struct InsightsClient<T, G> {
    config: Option<ApiConfig>,
    transport: T,
    gate: G,
}

impl InsightsClient<BrowserTransport, FixedIntervalGate<BrowserSleeper>> {
    pub fn for_browser(config: Option<ApiConfig>) -> Self {
        let interval = config
            .as_ref()
            .map_or(DEFAULT_REQUEST_INTERVAL, |c| c.request_interval);
        InsightsClient::new(
            config,
            BrowserTransport,
            FixedIntervalGate::new(interval, BrowserSleeper),
        )
    }
}

impl<T: Transport, G: RequestGate> InsightsClient<T, G> {
    pub fn new(config: Option<ApiConfig>, transport: T, gate: G) -> Self {
        InsightsClient {
            config,
            transport,
            gate,
        }
    }

    /// Fetch every category for `domain`, one request at a time
    ///
    /// A failing endpoint only empties its own slot. The gate is awaited after
    /// every request, including the last.
    pub async fn fetch_all(&self, domain: &str) -> Result<QueryResults> {
        let config = self
            .config
            .as_ref()
            .ok_or(InsightsError::ConfigurationUnavailable)?;

        if domain.is_empty() {
            return Err(InsightsError::EmptyDomain);
        }

        let mut slots: [Option<Value>; 4] = Default::default();
        for (slot, category) in slots.iter_mut().zip(Category::ALL) {
            let url = endpoint_url(&config.base_url, category, domain)?;
            *slot = self.fetch_category(config, category, url).await;
            self.gate.after_request().await;
        }

        let results = QueryResults::from_slots(slots);
        log::info!(
            "Fetched insights for {} ({} of {} categories failed)",
            domain,
            results.failed_count(),
            Category::ALL.len()
        );
        Ok(results)
    }

    async fn fetch_category(&self, config: &ApiConfig, category: Category, url: Url) -> Option<Value> {
        match self.request(config, url).await {
            Ok(body) => Some(body),
            Err(e) => {
                log::warn!("Error fetching {}: {}", category.path(), e);
                None
            }
        }
    }

    async fn request(&self, config: &ApiConfig, url: Url) -> Result<Value> {
        log::debug!("GET {}", url);
        let request = config.authorize(HttpRequest::get(url.as_str()));
        let response = self.transport.send(&request).await?;

        if !response.is_success() {
            return Err(InsightsError::Status {
                url: request.url,
                status: response.status,
            });
        }

        response.json()
    }
}
