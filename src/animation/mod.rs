//! The two illustrated processes and their view model.
//!
//! [`api`] and [`etl`] build the step tables. [`Frame::render`] turns a
//! sequencer's current state into localized text for whatever draws it.

use crate::i18n::Translator;
use crate::sequencer::{Phase, Sequencer};
use serde::Serialize;
use serde_json::Value;

pub mod api;
pub mod etl;

/// Status badge text shown by the API view.
pub fn status_code(step_id: &str, phase: Phase) -> &'static str {
    match (phase, step_id) {
        (Phase::ErrorOverride, _) => "500 Internal Server Error",
        (_, "request_init") => "102 Processing",
        _ => "200 OK",
    }
}

/// The current step, resolved for display.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StepView {
    pub id: String,
    /// Zero-based position in the ring.
    pub position: usize,
    pub total: usize,
    pub title: String,
    pub description: String,
    pub details: Value,
    pub status: &'static str,
    /// Display text of the current challenge, for sequencers that draw them.
    pub challenge: Option<String>,
}

/// The fixed error presentation shown while the error override is on.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ErrorView {
    pub title: String,
    pub description: String,
    pub status_label: String,
    pub details_label: String,
    pub status: &'static str,
    /// The step that stays frozen underneath.
    pub frozen_step: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Frame {
    Step(StepView),
    Error(ErrorView),
}

impl Frame {
    /// Resolves the sequencer's state under the translator's language.
    pub fn render(sequencer: &Sequencer, translator: &Translator<'_>) -> Self {
        let step = sequencer.current_step();
        let phase = sequencer.phase();

        if phase == Phase::ErrorOverride {
            return Frame::Error(ErrorView {
                title: translator.text("animation.error.title"),
                description: translator.text("animation.error.description"),
                status_label: translator.text("animation.error.status"),
                details_label: translator.text("animation.error.details"),
                status: status_code(&step.id, phase),
                frozen_step: step.id.clone(),
            });
        }

        Frame::Step(StepView {
            id: step.id.clone(),
            position: sequencer.current_index(),
            total: sequencer.len(),
            title: translator.text(&step.title_key),
            description: translator.text(&step.description_key),
            details: step.details.clone(),
            status: status_code(&step.id, phase),
            challenge: sequencer
                .current_challenge()
                .map(|challenge| translator.text(&challenge.key())),
        })
    }

    pub fn title(&self) -> &str {
        match self {
            Frame::Step(view) => &view.title,
            Frame::Error(view) => &view.title,
        }
    }
}

/// Labels of the play/pause and force-error buttons.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Controls {
    pub play_pause: String,
    pub force_error: String,
    pub error_active: bool,
}

impl Controls {
    pub fn render(sequencer: &Sequencer, translator: &Translator<'_>) -> Self {
        let play_pause = if sequencer.is_playing() {
            "animation.pause"
        } else {
            "animation.play"
        };
        Self {
            play_pause: translator.text(play_pause),
            force_error: translator.text("animation.forceError"),
            error_active: sequencer.is_error(),
        }
    }
}
