//! [`StudyAssistant`] over the Generative Language REST API.

use std::time::Duration;

use reqwest::Client;
use serde::Deserialize;
use serde_json::{json, Value};
use url::Url;

use super::geo::Coordinates;
use super::plan::decode_plan;
use super::{credentials, prompts, Place, Source, StudyAssistant, StudySpots, TopicSummary};
use crate::error::GatewayError;
use crate::locale::Locale;
use crate::schedule::PlanItem;
use crate::storage::{Config, GeminiConfig};

/// Client for `models/{model}:generateContent`.
pub struct GeminiClient {
    http: Client,
    api_key: String,
    config: GeminiConfig,
    locale: Locale,
}

impl GeminiClient {
    pub fn new(
        config: &GeminiConfig,
        api_key: impl Into<String>,
        locale: Locale,
    ) -> Result<Self, GatewayError> {
        Url::parse(&config.base_url)?;
        let http = Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()?;
        Ok(Self {
            http,
            api_key: api_key.into(),
            config: config.clone(),
            locale,
        })
    }

    /// Build from configuration with the stored API key.
    ///
    /// # Errors
    /// `MissingApiKey` when neither the environment nor the keyring has one.
    pub fn from_config(config: &Config) -> Result<Self, GatewayError> {
        let key = credentials::api_key().ok_or(GatewayError::MissingApiKey)?;
        Self::new(&config.gemini, key, config.locale.language)
    }

    fn endpoint(&self, model: &str) -> Result<Url, GatewayError> {
        let base = self.config.base_url.trim_end_matches('/');
        Ok(Url::parse(&format!(
            "{base}/v1beta/models/{model}:generateContent"
        ))?)
    }

    async fn generate(&self, model: &str, body: Value) -> Result<GenerateResponse, GatewayError> {
        let url = self.endpoint(model)?;
        tracing::debug!(%model, "assistant request");

        let resp = self
            .http
            .post(url)
            .header("x-goog-api-key", &self.api_key)
            .json(&body)
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            tracing::warn!(status = status.as_u16(), "assistant request rejected");
            return Err(GatewayError::Status {
                status: status.as_u16(),
                body,
            });
        }
        Ok(resp.json().await?)
    }
}

fn user_content(prompt: &str) -> Value {
    json!([{ "role": "user", "parts": [{ "text": prompt }] }])
}

fn plan_schema() -> Value {
    json!({
        "type": "ARRAY",
        "items": {
            "type": "OBJECT",
            "properties": {
                "time": { "type": "STRING" },
                "subject": { "type": "STRING" },
                "duration": { "type": "NUMBER" }
            },
            "required": ["time", "subject", "duration"]
        }
    })
}

impl StudyAssistant for GeminiClient {
    async fn generate_plan(
        &self,
        topics: &str,
        available_hours: f64,
    ) -> Result<Vec<PlanItem>, GatewayError> {
        let body = json!({
            "contents": user_content(&prompts::plan(self.locale, topics, available_hours)),
            "generationConfig": {
                "responseMimeType": "application/json",
                "responseSchema": plan_schema(),
            }
        });
        let resp = self.generate(&self.config.plan_model, body).await?;
        match resp.text() {
            Some(text) => Ok(decode_plan(&text)?),
            None => Ok(Vec::new()),
        }
    }

    async fn motivational_quote(&self) -> Result<String, GatewayError> {
        let body = json!({ "contents": user_content(prompts::quote(self.locale)) });
        let resp = self.generate(&self.config.text_model, body).await?;
        resp.text()
            .map(|t| t.trim().to_string())
            .ok_or(GatewayError::EmptyResponse)
    }

    async fn search_topic(&self, topic: &str) -> Result<TopicSummary, GatewayError> {
        let body = json!({
            "contents": user_content(&prompts::search(self.locale, topic)),
            "tools": [{ "google_search": {} }]
        });
        let resp = self.generate(&self.config.text_model, body).await?;
        let text = resp
            .text()
            .unwrap_or_else(|| prompts::empty_summary(self.locale).to_string());
        let sources = resp
            .chunks()
            .filter_map(|chunk| chunk.web.as_ref())
            .filter_map(|web| {
                let uri = web.uri.clone().filter(|u| !u.is_empty())?;
                let title = web
                    .title
                    .clone()
                    .filter(|t| !t.is_empty())
                    .unwrap_or_else(|| prompts::source_title(self.locale).to_string());
                Some(Source { title, uri })
            })
            .collect();
        Ok(TopicSummary { text, sources })
    }

    async fn find_study_spots(
        &self,
        query: &str,
        near: Option<Coordinates>,
    ) -> Result<StudySpots, GatewayError> {
        let mut body = json!({
            "contents": user_content(&prompts::places(self.locale, query)),
            "tools": [{ "google_maps": {} }]
        });
        if let Some(c) = near {
            body["toolConfig"] = json!({
                "retrievalConfig": {
                    "latLng": { "latitude": c.latitude, "longitude": c.longitude }
                }
            });
        }
        let resp = self.generate(&self.config.places_model, body).await?;
        let text = resp
            .text()
            .unwrap_or_else(|| prompts::no_places(self.locale).to_string());
        let places = resp
            .chunks()
            .filter_map(|chunk| chunk.maps.as_ref())
            .map(|maps| Place {
                title: maps
                    .title
                    .clone()
                    .filter(|t| !t.is_empty())
                    .unwrap_or_else(|| prompts::place_title(self.locale).to_string()),
                uri: maps.uri.clone().unwrap_or_default(),
                snippets: maps
                    .place_answer_sources
                    .as_ref()
                    .map(|s| s.review_snippets.iter().filter_map(ReviewSnippet::text).collect())
                    .unwrap_or_default(),
            })
            .collect();
        Ok(StudySpots { text, places })
    }
}

// ── Wire types ───────────────────────────────────────────────────────

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Candidate {
    content: Option<CandidateContent>,
    grounding_metadata: Option<GroundingMetadata>,
}

#[derive(Debug, Default, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Default, Deserialize)]
struct Part {
    text: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GroundingMetadata {
    #[serde(default)]
    grounding_chunks: Vec<GroundingChunk>,
}

#[derive(Debug, Default, Deserialize)]
struct GroundingChunk {
    web: Option<WebChunk>,
    maps: Option<MapsChunk>,
}

#[derive(Debug, Default, Deserialize)]
struct WebChunk {
    uri: Option<String>,
    title: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct MapsChunk {
    uri: Option<String>,
    title: Option<String>,
    place_answer_sources: Option<PlaceAnswerSources>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PlaceAnswerSources {
    #[serde(default)]
    review_snippets: Vec<ReviewSnippet>,
}

/// Snippets show up either as bare strings or as review objects.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum ReviewSnippet {
    Text(String),
    Review {
        review: Option<String>,
        text: Option<String>,
    },
}

impl ReviewSnippet {
    fn text(&self) -> Option<String> {
        match self {
            ReviewSnippet::Text(s) => Some(s.clone()),
            ReviewSnippet::Review { review, text } => review.clone().or_else(|| text.clone()),
        }
    }
}

impl GenerateResponse {
    /// Concatenated text parts of the first candidate, if non-blank.
    fn text(&self) -> Option<String> {
        let parts = &self.candidates.first()?.content.as_ref()?.parts;
        let text: String = parts.iter().filter_map(|p| p.text.as_deref()).collect();
        if text.trim().is_empty() {
            None
        } else {
            Some(text)
        }
    }

    fn chunks(&self) -> impl Iterator<Item = &GroundingChunk> {
        self.candidates
            .first()
            .and_then(|c| c.grounding_metadata.as_ref())
            .into_iter()
            .flat_map(|m| m.grounding_chunks.iter())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::Matcher;

    fn client(server: &mockito::ServerGuard, locale: Locale) -> GeminiClient {
        let config = GeminiConfig {
            base_url: server.url(),
            ..GeminiConfig::default()
        };
        GeminiClient::new(&config, "test-key", locale).unwrap()
    }

    fn text_response(text: &str) -> String {
        json!({
            "candidates": [{ "content": { "parts": [{ "text": text }] } }]
        })
        .to_string()
    }

    #[tokio::test]
    async fn plan_request_uses_schema_and_decodes() {
        let mut server = mockito::Server::new_async().await;
        let plan = r#"[{"time":"08:00","subject":"Álgebra","duration":50}]"#;
        let mock = server
            .mock("POST", "/v1beta/models/gemini-3-flash-preview:generateContent")
            .match_header("x-goog-api-key", "test-key")
            .match_body(Matcher::PartialJson(json!({
                "generationConfig": { "responseMimeType": "application/json" }
            })))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(text_response(plan))
            .create_async()
            .await;

        let items = client(&server, Locale::PtBr)
            .generate_plan("Álgebra", 1.0)
            .await
            .unwrap();
        mock.assert_async().await;
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].subject, "Álgebra");
        assert_eq!(items[0].duration_min, 50);
    }

    #[tokio::test]
    async fn malformed_plan_is_a_generation_error() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("POST", Matcher::Any)
            .with_status(200)
            .with_body(text_response("não é JSON"))
            .create_async()
            .await;

        let err = client(&server, Locale::PtBr)
            .generate_plan("Física", 2.0)
            .await
            .unwrap_err();
        assert!(matches!(err, GatewayError::Generation(_)));
    }

    #[tokio::test]
    async fn http_error_carries_status() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("POST", Matcher::Any)
            .with_status(429)
            .with_body("quota exceeded")
            .create_async()
            .await;

        let err = client(&server, Locale::PtBr)
            .motivational_quote()
            .await
            .unwrap_err();
        match err {
            GatewayError::Status { status, body } => {
                assert_eq!(status, 429);
                assert_eq!(body, "quota exceeded");
            }
            other => panic!("Expected Status, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn empty_quote_is_an_error() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("POST", Matcher::Any)
            .with_status(200)
            .with_body(r#"{"candidates":[]}"#)
            .create_async()
            .await;

        let err = client(&server, Locale::En).motivational_quote().await.unwrap_err();
        assert!(matches!(err, GatewayError::EmptyResponse));
    }

    #[tokio::test]
    async fn search_extracts_web_sources() {
        let mut server = mockito::Server::new_async().await;
        let body = json!({
            "candidates": [{
                "content": { "parts": [{ "text": "Fotossíntese é..." }] },
                "groundingMetadata": { "groundingChunks": [
                    { "web": { "uri": "https://a.example/foto", "title": "Biologia A" } },
                    { "web": { "uri": "https://b.example/foto" } },
                    { "web": { "title": "sem link" } }
                ]}
            }]
        });
        server
            .mock("POST", Matcher::Any)
            .match_body(Matcher::PartialJson(json!({ "tools": [{ "google_search": {} }] })))
            .with_status(200)
            .with_body(body.to_string())
            .create_async()
            .await;

        let summary = client(&server, Locale::PtBr)
            .search_topic("Fotossíntese")
            .await
            .unwrap();
        assert_eq!(summary.text, "Fotossíntese é...");
        assert_eq!(
            summary.sources,
            vec![
                Source {
                    title: "Biologia A".into(),
                    uri: "https://a.example/foto".into()
                },
                Source {
                    title: "Fonte externa".into(),
                    uri: "https://b.example/foto".into()
                },
            ]
        );
    }

    #[tokio::test]
    async fn search_without_text_uses_default_summary() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("POST", Matcher::Any)
            .with_status(200)
            .with_body(r#"{"candidates":[{"content":{"parts":[]}}]}"#)
            .create_async()
            .await;

        let summary = client(&server, Locale::PtBr).search_topic("x").await.unwrap();
        assert_eq!(summary.text, "Não foi possível gerar um resumo para este tema.");
        assert!(summary.sources.is_empty());
    }

    #[tokio::test]
    async fn spots_send_location_and_read_maps_chunks() {
        let mut server = mockito::Server::new_async().await;
        let body = json!({
            "candidates": [{
                "content": { "parts": [{ "text": "Algumas opções:" }] },
                "groundingMetadata": { "groundingChunks": [
                    { "maps": {
                        "uri": "https://maps.example/1",
                        "title": "Biblioteca Mário de Andrade",
                        "placeAnswerSources": { "reviewSnippets": [
                            "Silenciosa",
                            { "review": "Wi-Fi bom" }
                        ]}
                    }},
                    { "maps": { "uri": "https://maps.example/2" } },
                    { "web": { "uri": "https://ignored.example" } }
                ]}
            }]
        });
        let mock = server
            .mock("POST", "/v1beta/models/gemini-2.5-flash:generateContent")
            .match_body(Matcher::PartialJson(json!({
                "tools": [{ "google_maps": {} }],
                "toolConfig": { "retrievalConfig": { "latLng": {
                    "latitude": -23.5, "longitude": -46.6
                }}}
            })))
            .with_status(200)
            .with_body(body.to_string())
            .create_async()
            .await;

        let near = Coordinates {
            latitude: -23.5,
            longitude: -46.6,
        };
        let spots = client(&server, Locale::PtBr)
            .find_study_spots("bibliotecas", Some(near))
            .await
            .unwrap();
        mock.assert_async().await;
        assert_eq!(spots.text, "Algumas opções:");
        assert_eq!(spots.places.len(), 2);
        assert_eq!(spots.places[0].snippets, vec!["Silenciosa", "Wi-Fi bom"]);
        assert_eq!(spots.places[1].title, "Local de Estudo");
        assert!(spots.places[1].snippets.is_empty());
    }

    #[test]
    fn bad_base_url_is_rejected() {
        let config = GeminiConfig {
            base_url: "not a url".into(),
            ..GeminiConfig::default()
        };
        assert!(matches!(
            GeminiClient::new(&config, "k", Locale::En),
            Err(GatewayError::Endpoint(_))
        ));
    }
}
