//! Tenant discussion board.
//!
//! Messages live in memory only. Every post is answered, after a short
//! delay, by a canned reply attributed to a random tenant.

use std::collections::VecDeque;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use rand::seq::SliceRandom;
use tokio::sync::RwLock;
use tracing::{debug, error, info, instrument};
use uuid::Uuid;

use crate::model::chat::ChatMessage;
use crate::model::timestamp_now;
use crate::repository::tenant_repo::TenantRepository;
use crate::util::error::ServiceError;

pub const REPLY_TEXTS: [&str; 5] = [
    "Good point!",
    "Agreed",
    "Thanks for sharing",
    "I see what you mean",
    "That makes sense",
];

type History = Arc<RwLock<VecDeque<ChatMessage>>>;

#[async_trait]
pub trait ChatService: Send + Sync {
    /// Messages oldest first.
    async fn history(&self) -> Vec<ChatMessage>;
    async fn post_message(&self, user_id: String, user_name: String, text: String) -> Result<ChatMessage, ServiceError>;
}

pub struct ChatServiceImpl {
    tenant_repo: Arc<dyn TenantRepository>,
    history: History,
    reply_delay: Duration,
    history_limit: usize,
}

impl ChatServiceImpl {
    pub fn new(tenant_repo: Arc<dyn TenantRepository>, reply_delay: Duration, history_limit: usize) -> Self {
        Self {
            tenant_repo,
            history: Arc::new(RwLock::new(VecDeque::new())),
            reply_delay,
            history_limit: history_limit.max(1),
        }
    }

    async fn append(history: &History, limit: usize, message: ChatMessage) {
        let mut messages = history.write().await;
        messages.push_back(message);
        while messages.len() > limit {
            messages.pop_front();
        }
    }

    fn schedule_reply(&self) {
        let tenant_repo = self.tenant_repo.clone();
        let history = self.history.clone();
        let delay = self.reply_delay;
        let limit = self.history_limit;

        tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            let tenants = match tenant_repo.list().await {
                Ok(tenants) => tenants,
                Err(e) => {
                    error!("Failed to load tenants for chat reply: {e}");
                    return;
                }
            };
            let reply = {
                let mut rng = rand::thread_rng();
                tenants.choose(&mut rng).map(|tenant| {
                    let text = REPLY_TEXTS.choose(&mut rng).copied().unwrap_or(REPLY_TEXTS[0]);
                    ChatMessage {
                        id: Uuid::new_v4().to_string(),
                        user_id: tenant.id.map(|id| id.to_hex()).unwrap_or_default(),
                        user_name: tenant.name.clone(),
                        text: text.to_string(),
                        timestamp: timestamp_now(),
                        synthetic: true,
                    }
                })
            };
            match reply {
                Some(reply) => {
                    debug!("Posting reply from {}", reply.user_name);
                    Self::append(&history, limit, reply).await;
                }
                None => debug!("No tenants to reply"),
            }
        });
    }
}

#[async_trait]
impl ChatService for ChatServiceImpl {
    async fn history(&self) -> Vec<ChatMessage> {
        self.history.read().await.iter().cloned().collect()
    }

    #[instrument(skip(self, text), fields(user_id = %user_id))]
    async fn post_message(&self, user_id: String, user_name: String, text: String) -> Result<ChatMessage, ServiceError> {
        let text = text.trim();
        if text.is_empty() {
            return Err(ServiceError::InvalidInput("Message text is required".to_string()));
        }
        let message = ChatMessage {
            id: Uuid::new_v4().to_string(),
            user_id,
            user_name,
            text: text.to_string(),
            timestamp: timestamp_now(),
            synthetic: false,
        };
        Self::append(&self.history, self.history_limit, message.clone()).await;
        info!("Chat message posted");

        self.schedule_reply();
        Ok(message)
    }
}
