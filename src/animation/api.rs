use crate::error::SequencerError;
use crate::sequencer::{ChallengeSource, RandomChallenges, Sequencer, Step, TickPolicy};
use serde_json::json;
use uuid::Uuid;

/// Every API step stays on screen this long, whatever its declared duration.
pub const TICK_MS: u64 = 4000;

/// The request lifecycle: request, validation, processing, response.
pub fn steps() -> Vec<Step> {
    vec![
        Step::new(
            "request_init",
            "animation.steps.request.title",
            "animation.steps.request.description",
            1000,
        )
        .with_details(json!({
            "method": "POST",
            "headers": {
                "Content-Type": "application/json",
                "Authorization": "Bearer token123",
                "Accept": "application/json",
                "User-Agent": "Portfolio/1.0",
                "Accept-Language": "en-US,en;q=0.9",
                "X-Request-ID": Uuid::new_v4().to_string(),
            },
            "endpoint": "/api/data",
            "body": {
                "query": "portfolio_data",
                "filters": ["projects", "skills"],
                "limit": 10,
                "offset": 0,
            },
        })),
        Step::new(
            "validation",
            "animation.steps.validation.title",
            "animation.steps.validation.description",
            1000,
        )
        .with_details(json!({
            "checks": [
                "JWT Token validation",
                "Rate limit check (150/15min)",
                "Request body schema validation",
                "Input sanitization & XSS prevention",
                "API version compatibility",
                "Content-Type verification",
                "Request size validation (<5MB)",
                "IP whitelist verification",
            ],
            "securityInfo": {
                "encryption": "TLS 1.3",
                "authMethod": "Bearer JWT",
                "rateLimit": "150 requests/15min",
            },
        })),
        Step::new(
            "processing",
            "animation.steps.processing.title",
            "animation.steps.processing.description",
            1000,
        )
        .with_details(json!({
            "operations": [
                "Query parameter parsing",
                "Database connection pool allocation",
                "Cache lookup (Redis)",
                "SQL query optimization",
                "Data aggregation & filtering",
                "Response compression (gzip)",
                "ETags generation",
                "Performance metrics collection",
            ],
            "performance": {
                "dbQueryTime": "45ms",
                "cacheHitRatio": "95%",
                "compressionRatio": "68%",
                "totalProcessingTime": "120ms",
            },
            "systemLoad": {
                "cpu": "32%",
                "memory": "45%",
                "activeConnections": 48,
            },
        })),
        Step::new(
            "response",
            "animation.steps.response.title",
            "animation.steps.response.description",
            1000,
        )
        .with_details(json!({
            "status": 200,
            "statusText": "OK",
            "headers": {
                "Content-Type": "application/json; charset=utf-8",
                "Cache-Control": "public, max-age=3600",
                "ETag": "W/\"a8e-Hs8JzZKBaB7q3p+ZXaFX4wGaHXw\"",
                "X-Response-Time": "120ms",
                "X-RateLimit-Remaining": "149",
                "Content-Encoding": "gzip",
                "Vary": "Accept-Encoding",
                "X-Content-Type-Options": "nosniff",
                "Strict-Transport-Security": "max-age=31536000; includeSubDomains",
            },
            "responseSize": {
                "raw": "2.8KB",
                "compressed": "0.9KB",
            },
            "metrics": {
                "ttfb": "95ms",
                "totalTime": "145ms",
                "serverProcessing": "120ms",
            },
        })),
    ]
}

/// The API sequencer with random challenges from OS entropy.
pub fn sequencer() -> Result<Sequencer, SequencerError> {
    sequencer_with(RandomChallenges::from_entropy())
}

/// The API sequencer drawing challenges from `challenges`.
pub fn sequencer_with(
    challenges: impl ChallengeSource + 'static,
) -> Result<Sequencer, SequencerError> {
    Ok(Sequencer::new(steps(), TickPolicy::Uniform(TICK_MS))?.with_challenges(challenges))
}
