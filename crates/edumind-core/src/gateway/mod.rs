//! Assistant gateway: study plans, quotes, topic summaries and study spots
//! from a generative model.
//!
//! [`StudyAssistant`] is the contract the rest of the crate consumes;
//! [`GeminiClient`] implements it over HTTP and [`Assistant`] adds the
//! busy flag and fallbacks used at call sites.

mod assistant;
pub mod credentials;
mod gemini;
pub mod geo;
pub mod plan;
pub mod prompts;

pub use assistant::{Assistant, DEFAULT_LOCATION_TIMEOUT};
pub use gemini::GeminiClient;
pub use geo::{locate_within, Coordinates, FixedLocator, Locator, NoLocator};
pub use plan::decode_plan;

use serde::{Deserialize, Serialize};

use crate::error::GatewayError;
use crate::schedule::PlanItem;

/// A cited web page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Source {
    pub title: String,
    pub uri: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopicSummary {
    pub text: String,
    pub sources: Vec<Source>,
}

/// A place from a maps-grounded answer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Place {
    pub title: String,
    pub uri: String,
    pub snippets: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudySpots {
    pub text: String,
    pub places: Vec<Place>,
}

/// Upstream operations. Implementations report every failure; fallbacks
/// belong to [`Assistant`].
#[allow(async_fn_in_trait)]
pub trait StudyAssistant {
    async fn generate_plan(
        &self,
        topics: &str,
        available_hours: f64,
    ) -> Result<Vec<PlanItem>, GatewayError>;

    async fn motivational_quote(&self) -> Result<String, GatewayError>;

    async fn search_topic(&self, topic: &str) -> Result<TopicSummary, GatewayError>;

    async fn find_study_spots(
        &self,
        query: &str,
        near: Option<Coordinates>,
    ) -> Result<StudySpots, GatewayError>;
}
