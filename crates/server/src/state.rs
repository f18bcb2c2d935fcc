use crate::config::ServerConfig;
use crate::error::ServerResult;
use dashmap::DashMap;
use signatures::{SignatureStore, Tier};
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Outcome of a rate limit check
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RateDecision {
    Allowed { remaining: u32 },
    Rejected { retry_after: Duration },
}

/// Shared application state
#[derive(Clone)]
pub struct ServerState {
    /// Server configuration
    pub config: Arc<ServerConfig>,

    /// Signature catalog, read-only after startup
    pub store: Arc<SignatureStore>,

    /// Rate limit tracking: client address -> (count, window_start)
    pub rate_limiter: Arc<DashMap<String, (u32, Instant)>>,

    /// Process start, for uptime reporting
    pub started_at: Instant,
}

impl ServerState {
    /// Create new server state, loading the configured dataset.
    ///
    /// Fails if the dataset is missing, malformed, or empty.
    pub fn new(config: ServerConfig) -> ServerResult<Self> {
        let store = match &config.signatures_path {
            Some(path) => SignatureStore::from_path(path)?,
            None => SignatureStore::bundled()?,
        };
        Ok(Self::with_store(config, store))
    }

    /// Create state around an already loaded store
    pub fn with_store(config: ServerConfig, store: SignatureStore) -> Self {
        tracing::info!(
            total = store.count(),
            unbothered = store.count_by_tier(Tier::Unbothered),
            unhinged = store.count_by_tier(Tier::Unhinged),
            unleashed = store.count_by_tier(Tier::Unleashed),
            "Loaded signatures"
        );

        Self {
            config: Arc::new(config),
            store: Arc::new(store),
            rate_limiter: Arc::new(DashMap::new()),
            started_at: Instant::now(),
        }
    }

    /// Seconds since the state was created
    pub fn uptime(&self) -> f64 {
        self.started_at.elapsed().as_secs_f64()
    }

    /// Count a request against the client's window
    pub fn check_rate_limit(&self, key: &str) -> RateDecision {
        self.check_rate_limit_at(key, Instant::now())
    }

    fn check_rate_limit_at(&self, key: &str, now: Instant) -> RateDecision {
        let window = self.config.rate_limit_window();
        let limit = self.config.rate_limit_max_requests;

        let mut entry = self.rate_limiter.entry(key.to_string()).or_insert((0, now));
        let (count, window_start) = entry.value_mut();

        // Reset if window has passed
        if now.duration_since(*window_start) >= window {
            *count = 0;
            *window_start = now;
        }

        // Check limit
        if *count >= limit {
            let retry_after = window.saturating_sub(now.duration_since(*window_start));
            return RateDecision::Rejected { retry_after };
        }

        *count += 1;
        RateDecision::Allowed {
            remaining: limit - *count,
        }
    }

    /// Drop windows that have already expired
    pub fn sweep_rate_limits(&self) -> usize {
        let window = self.config.rate_limit_window();
        let now = Instant::now();
        let before = self.rate_limiter.len();
        self.rate_limiter
            .retain(|_, (_, window_start)| now.duration_since(*window_start) < window);
        before - self.rate_limiter.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state(limit: u32, window_secs: u64) -> ServerState {
        let config = ServerConfig {
            rate_limit_max_requests: limit,
            rate_limit_window_secs: window_secs,
            ..ServerConfig::default()
        };
        ServerState::new(config).expect("bundled dataset loads")
    }

    #[test]
    fn test_state_initialization() {
        let state = state(120, 60);
        assert!(state.store.count() > 0);
        assert!(state.uptime() >= 0.0);
        assert!(state.rate_limiter.is_empty());
    }

    #[test]
    fn test_missing_dataset_is_fatal() {
        let config = ServerConfig {
            signatures_path: Some("/definitely/not/here.json".into()),
            ..ServerConfig::default()
        };
        assert!(ServerState::new(config).is_err());
    }

    #[test]
    fn test_budget_is_per_client() {
        let state = state(3, 60);
        let now = Instant::now();

        for expected in [2, 1, 0] {
            assert_eq!(
                state.check_rate_limit_at("10.0.0.1", now),
                RateDecision::Allowed { remaining: expected }
            );
        }
        assert!(matches!(
            state.check_rate_limit_at("10.0.0.1", now),
            RateDecision::Rejected { .. }
        ));
        assert!(matches!(
            state.check_rate_limit_at("10.0.0.2", now),
            RateDecision::Allowed { remaining: 2 }
        ));
    }

    #[test]
    fn test_window_resets() {
        let state = state(1, 60);
        let start = Instant::now();

        assert!(matches!(
            state.check_rate_limit_at("a", start),
            RateDecision::Allowed { .. }
        ));
        match state.check_rate_limit_at("a", start + Duration::from_secs(15)) {
            RateDecision::Rejected { retry_after } => {
                assert_eq!(retry_after, Duration::from_secs(45))
            }
            other => panic!("expected rejection, got {other:?}"),
        }
        assert!(matches!(
            state.check_rate_limit_at("a", start + Duration::from_secs(60)),
            RateDecision::Allowed { .. }
        ));
    }

    #[test]
    fn test_sweep_keeps_live_windows() {
        let state = state(5, 60);
        state.check_rate_limit("live");
        assert_eq!(state.sweep_rate_limits(), 0);
        assert_eq!(state.rate_limiter.len(), 1);

        let zero_window = ServerState::with_store(
            ServerConfig {
                rate_limit_window_secs: 0,
                ..ServerConfig::default()
            },
            signatures::SignatureStore::bundled().unwrap(),
        );
        zero_window.check_rate_limit("stale");
        assert_eq!(zero_window.sweep_rate_limits(), 1);
    }
}
