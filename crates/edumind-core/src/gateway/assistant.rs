//! Call-site wrapper around a [`StudyAssistant`].
//!
//! Holds the busy flag that blocks a second submission while one request
//! is outstanding, and turns upstream failures into the fallback content
//! the caller shows instead.

use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use super::geo::{locate_within, Locator};
use super::{prompts, StudyAssistant, StudySpots, TopicSummary};
use crate::error::GatewayError;
use crate::locale::Locale;
use crate::schedule::PlanItem;
use crate::state::AppState;

pub const DEFAULT_LOCATION_TIMEOUT: Duration = Duration::from_secs(10);

pub struct Assistant<A> {
    inner: A,
    locale: Locale,
    location_timeout: Duration,
    busy: AtomicBool,
}

/// Clears the busy flag when dropped.
struct BusyGuard<'a>(&'a AtomicBool);

impl Drop for BusyGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

impl<A: StudyAssistant> Assistant<A> {
    pub fn new(inner: A, locale: Locale) -> Self {
        Self {
            inner,
            locale,
            location_timeout: DEFAULT_LOCATION_TIMEOUT,
            busy: AtomicBool::new(false),
        }
    }

    pub fn with_location_timeout(mut self, timeout: Duration) -> Self {
        self.location_timeout = timeout;
        self
    }

    pub fn inner(&self) -> &A {
        &self.inner
    }

    pub fn is_busy(&self) -> bool {
        self.busy.load(Ordering::Acquire)
    }

    fn acquire(&self) -> Result<BusyGuard<'_>, GatewayError> {
        if self.busy.swap(true, Ordering::AcqRel) {
            return Err(GatewayError::Busy);
        }
        Ok(BusyGuard(&self.busy))
    }

    /// Generated plan items, or an empty plan when generation fails.
    ///
    /// # Errors
    /// Only `Busy`.
    pub async fn generate_plan(
        &self,
        topics: &str,
        available_hours: f64,
    ) -> Result<Vec<PlanItem>, GatewayError> {
        let _guard = self.acquire()?;
        if topics.trim().is_empty() {
            return Ok(Vec::new());
        }
        match self.inner.generate_plan(topics.trim(), available_hours).await {
            Ok(items) => Ok(items),
            Err(e) => {
                tracing::warn!(error = %e, "plan generation failed");
                Ok(Vec::new())
            }
        }
    }

    /// Generate a plan and merge it into the schedule. Returns how many
    /// items were added.
    pub async fn plan_into(
        &self,
        state: &mut AppState,
        topics: &str,
        available_hours: f64,
    ) -> crate::error::Result<usize> {
        let items = self.generate_plan(topics, available_hours).await?;
        state.ingest_plan(items)
    }

    /// # Errors
    /// Only `Busy`.
    pub async fn motivational_quote(&self) -> Result<String, GatewayError> {
        let _guard = self.acquire()?;
        match self.inner.motivational_quote().await {
            Ok(quote) if !quote.trim().is_empty() => Ok(quote),
            Ok(_) => Ok(prompts::fallback_quote(self.locale).to_string()),
            Err(e) => {
                tracing::warn!(error = %e, "quote request failed");
                Ok(prompts::fallback_quote(self.locale).to_string())
            }
        }
    }

    /// # Errors
    /// Only `Busy`.
    pub async fn search_topic(&self, topic: &str) -> Result<TopicSummary, GatewayError> {
        let _guard = self.acquire()?;
        match self.inner.search_topic(topic).await {
            Ok(summary) => Ok(summary),
            Err(e) => {
                tracing::warn!(error = %e, topic, "topic search failed");
                Ok(TopicSummary {
                    text: prompts::topic_unavailable(self.locale).to_string(),
                    sources: Vec::new(),
                })
            }
        }
    }

    /// Places near the position `locator` reports, if it reports one in
    /// time. A blank query searches for quiet study places in general.
    ///
    /// # Errors
    /// `Busy`, or the upstream failure itself: there is no fallback list.
    pub async fn find_study_spots<L: Locator + ?Sized>(
        &self,
        query: &str,
        locator: &L,
    ) -> Result<StudySpots, GatewayError> {
        let _guard = self.acquire()?;
        let query = match query.trim() {
            "" => prompts::default_places_query(self.locale),
            q => q,
        };
        let near = locate_within(locator, self.location_timeout).await;
        self.inner.find_study_spots(query, near).await.map_err(|e| {
            tracing::warn!(error = %e, "study spot search failed");
            e
        })
    }
}
