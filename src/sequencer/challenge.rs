use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Serialize;
use std::fmt;

/// A "common challenge" blurb shown next to the API animation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Challenge {
    Authentication,
    Authorization,
    DataValidation,
    ErrorHandling,
    Caching,
    RateLimiting,
    FileUpload,
    SecurityChecks,
    Concurrency,
    VersionControl,
    PartialUpdates,
    DataIntegrity,
    CascadeDeletion,
    SoftDelete,
    Recovery,
}

impl Challenge {
    pub const ALL: [Challenge; 15] = [
        Challenge::Authentication,
        Challenge::Authorization,
        Challenge::DataValidation,
        Challenge::ErrorHandling,
        Challenge::Caching,
        Challenge::RateLimiting,
        Challenge::FileUpload,
        Challenge::SecurityChecks,
        Challenge::Concurrency,
        Challenge::VersionControl,
        Challenge::PartialUpdates,
        Challenge::DataIntegrity,
        Challenge::CascadeDeletion,
        Challenge::SoftDelete,
        Challenge::Recovery,
    ];

    pub const fn id(self) -> &'static str {
        match self {
            Challenge::Authentication => "authentication",
            Challenge::Authorization => "authorization",
            Challenge::DataValidation => "data_validation",
            Challenge::ErrorHandling => "error_handling",
            Challenge::Caching => "caching",
            Challenge::RateLimiting => "rate_limiting",
            Challenge::FileUpload => "file_upload",
            Challenge::SecurityChecks => "security_checks",
            Challenge::Concurrency => "concurrency",
            Challenge::VersionControl => "version_control",
            Challenge::PartialUpdates => "partial_updates",
            Challenge::DataIntegrity => "data_integrity",
            Challenge::CascadeDeletion => "cascade_deletion",
            Challenge::SoftDelete => "soft_delete",
            Challenge::Recovery => "recovery",
        }
    }

    /// Translation key of the challenge's display text.
    pub fn key(self) -> String {
        format!("animation.challenges.{}", self.id())
    }
}

impl fmt::Display for Challenge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// Supplies the challenge drawn on each tick.
pub trait ChallengeSource: Send {
    fn draw(&mut self) -> Challenge;
}

/// Uniform draws over [`Challenge::ALL`]. Repeats are expected.
#[derive(Debug, Clone)]
pub struct RandomChallenges<R = StdRng> {
    rng: R,
}

impl<R: Rng> RandomChallenges<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RandomChallenges<StdRng> {
    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_os_rng())
    }

    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng + Send> ChallengeSource for RandomChallenges<R> {
    fn draw(&mut self) -> Challenge {
        Challenge::ALL[self.rng.random_range(0..Challenge::ALL.len())]
    }
}

/// Replays a fixed list of challenges in a loop.
#[derive(Debug, Clone)]
pub struct ScriptedChallenges {
    script: Vec<Challenge>,
    position: usize,
}

impl ScriptedChallenges {
    /// Falls back to [`Challenge::ALL`] when `script` is empty.
    pub fn new(script: Vec<Challenge>) -> Self {
        let script = if script.is_empty() {
            Challenge::ALL.to_vec()
        } else {
            script
        };
        Self {
            script,
            position: 0,
        }
    }
}

impl ChallengeSource for ScriptedChallenges {
    fn draw(&mut self) -> Challenge {
        let challenge = self.script[self.position];
        self.position = (self.position + 1) % self.script.len();
        challenge
    }
}
