use std::sync::Arc;

use askzen_llm::{ChatClient, ChatOptions, ChatRequest, ClientFactory, Message};
use askzen_types::{AnswerMetadata, Subject};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::analysis::analyze_question;
use crate::config::{Backend, EngineConfig};
use crate::definitions::DefinitionService;
use crate::formatter::ResponseFormatter;
use crate::knowledge::KnowledgeBase;
use crate::prompts::system_prompt;
use crate::router::{QuestionRouter, SelectionKind};

pub const MISSING_KEY_ERROR: &str = "No API key provided";

const MISSING_KEY_MESSAGE: &str = "🔑 **API key required**\n\n\
Remote answers need a chat-completion API key. Set `ASKZEN_API_KEY`, pass `--api-key`, \
or switch the engine backend to `local` to use the built-in knowledge base.";

const REMOTE_FAILURE_MESSAGE: &str = "😔 **Sorry, something went wrong while fetching your answer.**\n\n\
Please check your connection and API key, then ask again. Your question has been kept so you can retry.";

/// Where an answer's text came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnswerSource {
    KnowledgeBase,
    SubjectFallback,
    GenericFallback,
    Remote,
    /// The remote path failed; `text` holds the user-facing explanation
    Unavailable,
}

impl From<SelectionKind> for AnswerSource {
    fn from(kind: SelectionKind) -> Self {
        match kind {
            SelectionKind::Topic => Self::KnowledgeBase,
            SelectionKind::SubjectFallback => Self::SubjectFallback,
            SelectionKind::GenericFallback => Self::GenericFallback,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Answer {
    /// The question as asked, kept so a failed answer can be retried
    pub query: String,
    pub subject: Subject,
    pub text: String,
    pub metadata: AnswerMetadata,
    pub source: AnswerSource,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub topic: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    pub answered_at: DateTime<Utc>,
}

impl Answer {
    pub fn is_error(&self) -> bool {
        self.error.is_some()
    }
}

/// Answers questions from the local knowledge base or a remote chat model.
///
/// Owned by a single caller; every method that touches the router takes `&mut self`.
pub struct AnswerEngine {
    config: EngineConfig,
    router: QuestionRouter,
    definitions: DefinitionService,
    formatter: ResponseFormatter,
    chat_client: Option<Arc<dyn ChatClient>>,
}

impl AnswerEngine {
    pub fn new(config: EngineConfig) -> Self {
        Self::with_knowledge(config, KnowledgeBase::builtin())
    }

    pub fn with_knowledge(config: EngineConfig, knowledge: KnowledgeBase) -> Self {
        let router = QuestionRouter::new(knowledge)
            .with_scorer(config.scoring.scorer())
            .with_threshold(config.match_threshold)
            .with_context_window(config.context_window);

        Self {
            config,
            router,
            definitions: DefinitionService::builtin(),
            formatter: ResponseFormatter::new(),
            chat_client: None,
        }
    }

    /// Use a specific chat client for the remote backend
    pub fn with_chat_client(mut self, client: Arc<dyn ChatClient>) -> Self {
        self.chat_client = Some(client);
        self
    }

    /// Build a chat client for the configured provider from a runtime key.
    /// An empty key clears the client.
    pub fn set_api_key(&mut self, api_key: &str) -> anyhow::Result<()> {
        let key = api_key.trim();
        if key.is_empty() {
            self.clear_api_key();
            return Ok(());
        }
        let client = ClientFactory::create_chat_client(&self.config.provider, key)?;
        self.chat_client = Some(client);
        info!(provider = ?self.config.provider.provider_type(), "API key configured");
        Ok(())
    }

    pub fn clear_api_key(&mut self) {
        self.chat_client = None;
    }

    pub fn has_api_key(&self) -> bool {
        self.chat_client.is_some()
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn set_backend(&mut self, backend: Backend) {
        self.config.backend = backend;
    }

    pub fn router(&self) -> &QuestionRouter {
        &self.router
    }

    pub fn router_mut(&mut self) -> &mut QuestionRouter {
        &mut self.router
    }

    pub fn definitions(&self) -> &DefinitionService {
        &self.definitions
    }

    pub fn definitions_mut(&mut self) -> &mut DefinitionService {
        &mut self.definitions
    }

    /// Answer a question. Failures are reported on the returned [`Answer`], never as `Err`.
    pub async fn answer(&mut self, query: &str, subject: &Subject) -> Answer {
        info!(subject = %subject, backend = ?self.config.backend, "Answering question");

        match self.config.backend {
            Backend::Local => self.answer_local(query, subject).await,
            Backend::Remote => self.answer_remote(query, subject).await,
        }
    }

    async fn answer_local(&mut self, query: &str, subject: &Subject) -> Answer {
        let delay = self.config.thinking_delay();
        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }

        let selection = self.router.select_answer(query, subject);
        let analysis = analyze_question(query);
        let defs = self.definitions.extract(&selection.content, subject);
        let answered_at = Utc::now();

        let text = self.formatter.format(
            &selection.content,
            subject,
            query,
            &analysis,
            &defs.definitions,
            answered_at,
        );
        let metadata = self.formatter.metadata(&text, query, &analysis, subject);

        Answer {
            query: query.to_string(),
            subject: subject.clone(),
            text,
            metadata,
            source: selection.kind.into(),
            topic: selection.topic,
            error: None,
            answered_at,
        }
    }

    async fn answer_remote(&mut self, query: &str, subject: &Subject) -> Answer {
        let Some(client) = self.chat_client.clone() else {
            warn!("Remote backend selected without an API key");
            return self.failed(query, subject, MISSING_KEY_MESSAGE, MISSING_KEY_ERROR.to_string());
        };

        let request = self.build_request(query, subject);
        debug!(model = %request.model, "Sending chat completion request");

        match client.chat(request).await {
            Ok(response) => {
                let analysis = analyze_question(query);
                let metadata = self
                    .formatter
                    .metadata(&response.content, query, &analysis, subject);
                self.router.context_mut().push(query, response.content.clone());

                Answer {
                    query: query.to_string(),
                    subject: subject.clone(),
                    text: response.content,
                    metadata,
                    source: AnswerSource::Remote,
                    topic: None,
                    error: None,
                    answered_at: Utc::now(),
                }
            }
            Err(e) => {
                warn!(error = %e, "Remote answer failed");
                self.failed(query, subject, REMOTE_FAILURE_MESSAGE, e.to_string())
            }
        }
    }

    fn build_request(&self, query: &str, subject: &Subject) -> ChatRequest {
        let model = &self.config.model;
        let mut options = ChatOptions::new()
            .frequency_penalty(1.0)
            .presence_penalty(0.0)
            .extra("return_images", false)
            .extra("return_related_questions", false)
            .extra("search_recency_filter", "month");
        if let Some(t) = model.temperature {
            options = options.temperature(t);
        }
        if let Some(p) = model.top_p {
            options = options.top_p(p);
        }
        if let Some(m) = model.max_tokens {
            options = options.max_tokens(m);
        }

        ChatRequest::new(
            model.model.clone(),
            vec![Message::system(system_prompt(subject)), Message::human(query)],
        )
        .with_options(options)
    }

    fn failed(&self, query: &str, subject: &Subject, text: &str, error: String) -> Answer {
        Answer {
            query: query.to_string(),
            subject: subject.clone(),
            text: text.to_string(),
            metadata: AnswerMetadata {
                confidence: 0.0,
                read_time_minutes: 1,
                ..AnswerMetadata::default()
            },
            source: AnswerSource::Unavailable,
            topic: None,
            error: Some(error),
            answered_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_remote_request_shape() {
        let engine = AnswerEngine::new(EngineConfig::default());
        let request = engine.build_request("why is the sky blue?", &Subject::SciencePhysics);

        assert_eq!(request.model, askzen_types::config::DEFAULT_MODEL);
        assert_eq!(request.messages.len(), 2);
        assert_eq!(request.messages[0].role(), "system");
        assert!(request.messages[0].content().contains("Physics"));
        assert_eq!(request.messages[1].content(), "why is the sky blue?");
        assert_eq!(request.options.temperature, Some(0.3));
        assert_eq!(request.options.frequency_penalty, Some(1.0));
        assert_eq!(request.options.extra["search_recency_filter"], "month");
    }

    #[test]
    fn test_empty_key_clears_client() {
        let mut engine = AnswerEngine::new(EngineConfig::default());
        engine.set_api_key("pplx-test").unwrap();
        assert!(engine.has_api_key());
        engine.set_api_key("  ").unwrap();
        assert!(!engine.has_api_key());
    }
}
