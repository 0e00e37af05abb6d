/// Lookup submission flow
///
/// Idle → Validating → Loading → Succeeded | Failed. An empty domain sends the
/// flow back to Idle, and a new submission is refused while one is loading.

use crate::domain::normalize_domain;
use crate::error::{InsightsError, Result};
use crate::http::Transport;
use crate::pipeline::InsightsClient;
use crate::render::{RenderedResults, render_results};
use crate::throttle::RequestGate;

pub const FETCH_FAILED_MESSAGE: &str = "Failed to fetch data. Please try again.";

#[derive(Debug, Clone, PartialEq)]
pub enum SubmissionState {
    Idle,
    Validating,
    Loading { domain: String },
    Succeeded(RenderedResults),
    Failed { message: String },
}

#[derive(Debug, Clone, PartialEq)]
pub struct SubmissionFlow {
    state: SubmissionState,
}

impl SubmissionFlow {
    pub fn new() -> Self {
        SubmissionFlow {
            state: SubmissionState::Idle,
        }
    }

    pub fn state(&self) -> &SubmissionState {
        &self.state
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.state, SubmissionState::Loading { .. })
    }

    /// Validate raw input and enter Loading
    ///
    /// Returns the normalized domain to query.
    pub fn begin(&mut self, raw: &str) -> Result<String> {
        if self.is_loading() {
            return Err(InsightsError::SubmissionInFlight);
        }

        self.state = SubmissionState::Validating;
        let domain = normalize_domain(raw.trim());
        if domain.is_empty() {
            self.state = SubmissionState::Idle;
            return Err(InsightsError::EmptyDomain);
        }

        self.state = SubmissionState::Loading {
            domain: domain.clone(),
        };
        Ok(domain)
    }

    /// Leave Loading with the lookup outcome
    ///
    /// Returns the message to alert the user with when the lookup failed.
    pub fn finish(&mut self, outcome: Result<RenderedResults>) -> Option<String> {
        if !self.is_loading() {
            log::warn!("Ignoring lookup outcome outside of loading state");
            return None;
        }

        match outcome {
            Ok(results) => {
                self.state = SubmissionState::Succeeded(results);
                None
            }
            Err(e) => {
                let message = match e.to_string() {
                    m if m.is_empty() => FETCH_FAILED_MESSAGE.to_string(),
                    m => m,
                };
                self.state = SubmissionState::Failed {
                    message: message.clone(),
                };
                Some(message)
            }
        }
    }

    pub fn spinner_visible(&self) -> bool {
        self.is_loading()
    }

    pub fn results_visible(&self) -> bool {
        matches!(self.state, SubmissionState::Succeeded(_))
    }

    pub fn results(&self) -> Option<&RenderedResults> {
        match &self.state {
            SubmissionState::Succeeded(results) => Some(results),
            _ => None,
        }
    }
}

impl Default for SubmissionFlow {
    fn default() -> Self {
        Self::new()
    }
}

/// Fetch and render every section for an already-validated domain
pub async fn run_lookup<T: Transport, G: RequestGate>(
    client: &InsightsClient<T, G>,
    domain: &str,
) -> Result<RenderedResults> {
    log::info!("Looking up {}", domain);
    let results = client.fetch_all(domain).await?;
    Ok(render_results(domain, &results))
}
