//! Shared application state for the axum router

use std::sync::Arc;

use guild_store::RedisPool;

use crate::commands::BotContext;
use crate::verify::SignatureVerifier;

/// State threaded through every request handler
#[derive(Clone)]
pub struct AppState {
    ctx: Arc<BotContext>,
    verifier: Arc<SignatureVerifier>,
    /// Present in production for readiness checks; absent under test
    redis: Option<RedisPool>,
}

impl AppState {
    /// Create state from a bot context and a signature verifier
    pub fn new(ctx: BotContext, verifier: SignatureVerifier) -> Self {
        Self {
            ctx: Arc::new(ctx),
            verifier: Arc::new(verifier),
            redis: None,
        }
    }

    /// Attach the Redis pool used by the readiness probe
    #[must_use]
    pub fn with_redis(mut self, pool: RedisPool) -> Self {
        self.redis = Some(pool);
        self
    }

    /// Handler dependencies
    pub fn ctx(&self) -> &BotContext {
        &self.ctx
    }

    /// The interaction signature verifier
    pub fn verifier(&self) -> &SignatureVerifier {
        &self.verifier
    }

    /// Redis pool, when attached
    pub fn redis(&self) -> Option<&RedisPool> {
        self.redis.as_ref()
    }
}
