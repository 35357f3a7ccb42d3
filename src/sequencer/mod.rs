//! Cyclic step sequencing.
//!
//! A [`Sequencer`] owns a fixed ring of [`Step`]s and a pointer into it. It is
//! an explicit state machine over [`Phase`]: only a `tick` in the `Running`
//! phase moves the pointer, always by one position modulo the ring length.
//!
//! Time is injected. Callers arm the sequencer with [`Sequencer::start`] and
//! then feed it the current logical time through [`Sequencer::advance_to`];
//! [`driver`] does this from a tokio timer.

use crate::error::SequencerError;
use serde::Serialize;
use std::fmt;

mod challenge;
pub mod driver;
mod step;

pub use challenge::*;
pub use step::*;

/// How long each step stays current before the next tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickPolicy {
    /// Every step lasts the same number of milliseconds.
    Uniform(u64),
    /// Each step lasts its own `duration_ms`.
    PerStep,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    Idle,
    Running,
    ErrorOverride,
}

/// Observable state of a sequencer at one instant.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Snapshot {
    pub index: usize,
    pub step_id: String,
    pub playing: bool,
    pub error: bool,
    pub challenge: Option<Challenge>,
    pub phase: Phase,
}

type Observer = Box<dyn FnMut(&Snapshot) + Send>;

pub struct Sequencer {
    steps: Vec<Step>,
    policy: TickPolicy,
    index: usize,
    playing: bool,
    error_override: bool,
    challenge: Option<Challenge>,
    challenges: Option<Box<dyn ChallengeSource>>,
    deadline: Option<u64>,
    torn_down: bool,
    observers: Vec<Observer>,
}

impl Sequencer {
    /// Creates a playing sequencer positioned on the first step.
    pub fn new(steps: Vec<Step>, policy: TickPolicy) -> Result<Self, SequencerError> {
        if steps.is_empty() {
            return Err(SequencerError::NoSteps);
        }
        match policy {
            TickPolicy::Uniform(0) => return Err(SequencerError::ZeroInterval),
            TickPolicy::Uniform(_) => {}
            TickPolicy::PerStep => {
                if let Some(step) = steps.iter().find(|s| s.duration_ms == 0) {
                    return Err(SequencerError::ZeroDuration(step.id.clone()));
                }
            }
        }

        Ok(Self {
            steps,
            policy,
            index: 0,
            playing: true,
            error_override: false,
            challenge: None,
            challenges: None,
            deadline: None,
            torn_down: false,
            observers: Vec::new(),
        })
    }

    /// Draws a fresh challenge from `source` on every tick.
    pub fn with_challenges(mut self, source: impl ChallengeSource + 'static) -> Self {
        self.challenges = Some(Box::new(source));
        self
    }

    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Always false; construction rejects an empty ring.
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn policy(&self) -> TickPolicy {
        self.policy
    }

    pub fn current_index(&self) -> usize {
        self.index
    }

    pub fn current_step(&self) -> &Step {
        &self.steps[self.index]
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    pub fn is_error(&self) -> bool {
        self.error_override
    }

    pub fn current_challenge(&self) -> Option<Challenge> {
        self.challenge
    }

    pub fn is_torn_down(&self) -> bool {
        self.torn_down
    }

    /// Logical time at which the next tick is due, if one is scheduled.
    pub fn next_deadline(&self) -> Option<u64> {
        self.deadline
    }

    pub fn phase(&self) -> Phase {
        if self.error_override {
            Phase::ErrorOverride
        } else if self.playing {
            Phase::Running
        } else {
            Phase::Idle
        }
    }

    /// How long the current step stays on screen.
    pub fn interval_ms(&self) -> u64 {
        match self.policy {
            TickPolicy::Uniform(ms) => ms,
            TickPolicy::PerStep => self.current_step().duration_ms,
        }
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            index: self.index,
            step_id: self.current_step().id.clone(),
            playing: self.playing,
            error: self.error_override,
            challenge: self.challenge,
            phase: self.phase(),
        }
    }

    /// Registers a callback run after every state change.
    pub fn subscribe(&mut self, observer: impl FnMut(&Snapshot) + Send + 'static) {
        if !self.torn_down {
            self.observers.push(Box::new(observer));
        }
    }

    /// Schedules the first tick one interval after `now_ms` if none is pending.
    pub fn start(&mut self, now_ms: u64) {
        if self.deadline.is_none() && self.phase() == Phase::Running && !self.torn_down {
            self.arm(now_ms);
        }
    }

    /// Fires every tick due at or before `now_ms` and returns how many fired.
    ///
    /// Each new deadline is measured from the one that just fired, using the
    /// interval of the step that became current. Deadlines saturate at
    /// `u64::MAX`.
    pub fn advance_to(&mut self, now_ms: u64) -> usize {
        let mut fired = 0;
        while let Some(due) = self.deadline {
            if due > now_ms || !self.tick() {
                break;
            }
            fired += 1;
            let next = due.saturating_add(self.interval_ms());
            self.deadline = Some(next);
            if next == due {
                break;
            }
        }
        fired
    }

    /// Moves to the next step. A no-op unless the phase is `Running`.
    pub fn tick(&mut self) -> bool {
        if self.torn_down || self.phase() != Phase::Running {
            return false;
        }
        self.index = (self.index + 1) % self.steps.len();
        if let Some(source) = self.challenges.as_mut() {
            self.challenge = Some(source.draw());
        }
        tracing::debug!(
            index = self.index,
            step = self.current_step().id.as_str(),
            challenge = self.challenge.map(Challenge::id),
            "Sequencer ticked"
        );
        self.notify();
        true
    }

    /// Resumes ticking; the next tick is a full interval after `now_ms`.
    pub fn play(&mut self, now_ms: u64) {
        if self.torn_down || self.playing {
            return;
        }
        self.playing = true;
        if !self.error_override {
            self.arm(now_ms);
        }
        self.notify();
    }

    /// Suspends ticking and cancels the pending tick.
    pub fn pause(&mut self) {
        if self.torn_down || !self.playing {
            return;
        }
        self.playing = false;
        self.deadline = None;
        self.notify();
    }

    pub fn toggle_play(&mut self, now_ms: u64) {
        if self.playing {
            self.pause();
        } else {
            self.play(now_ms);
        }
    }

    /// Freezes the current step and switches the view to the error presentation.
    pub fn force_error(&mut self) {
        if self.torn_down || self.error_override {
            return;
        }
        self.error_override = true;
        self.deadline = None;
        self.notify();
    }

    /// Leaves the error presentation, resuming from the frozen step.
    pub fn clear_error(&mut self, now_ms: u64) {
        if self.torn_down || !self.error_override {
            return;
        }
        self.error_override = false;
        if self.playing {
            self.arm(now_ms);
        }
        self.notify();
    }

    pub fn toggle_error(&mut self, now_ms: u64) {
        if self.error_override {
            self.clear_error(now_ms);
        } else {
            self.force_error();
        }
    }

    /// Cancels any pending tick and drops all observers. Idempotent.
    pub fn teardown(&mut self) {
        if self.torn_down {
            return;
        }
        self.torn_down = true;
        self.deadline = None;
        self.observers.clear();
        tracing::debug!(index = self.index, "Sequencer torn down");
    }

    fn arm(&mut self, now_ms: u64) {
        self.deadline = Some(now_ms.saturating_add(self.interval_ms()));
    }

    fn notify(&mut self) {
        if self.observers.is_empty() {
            return;
        }
        let snapshot = self.snapshot();
        for observer in &mut self.observers {
            observer(&snapshot);
        }
    }
}

impl fmt::Debug for Sequencer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Sequencer")
            .field("steps", &self.steps.len())
            .field("policy", &self.policy)
            .field("index", &self.index)
            .field("playing", &self.playing)
            .field("error_override", &self.error_override)
            .field("challenge", &self.challenge)
            .field("deadline", &self.deadline)
            .field("torn_down", &self.torn_down)
            .finish_non_exhaustive()
    }
}
