//! Per-tick environment: decoded input, active settings and elapsed time.

use arrayvec::ArrayVec;

use tetris_rule_core::{Settings, SettingsPatch};

use crate::types::Action;

/// Logical actions triggered this tick. Each action appears at most once.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InputSnapshot {
    actions: ArrayVec<Action, 6>,
}

impl InputSnapshot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_actions(actions: impl IntoIterator<Item = Action>) -> Self {
        let mut input = Self::new();
        for action in actions {
            input.press(action);
        }
        input
    }

    pub fn press(&mut self, action: Action) {
        if !self.actions.contains(&action) {
            // Six distinct actions exist, so this never overflows.
            self.actions.push(action);
        }
    }

    pub fn pressed(&self, action: Action) -> bool {
        self.actions.contains(&action)
    }

    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }

    pub fn actions(&self) -> &[Action] {
        &self.actions
    }
}

/// Everything a tick may read besides the world itself.
pub struct Env<'a> {
    pub input: &'a InputSnapshot,
    pub settings: &'a Settings,
    /// Seconds since the previous tick; must be finite and `>= 0`.
    pub dt: f64,
    /// Where settings patches go. The rule systems never call it; it is
    /// threaded through for collaborators layered on top.
    pub queue_setting_update: Option<&'a dyn Fn(SettingsPatch)>,
}

impl<'a> Env<'a> {
    pub fn new(input: &'a InputSnapshot, settings: &'a Settings, dt: f64) -> Self {
        Self {
            input,
            settings,
            dt,
            queue_setting_update: None,
        }
    }

    pub fn with_patch_queue(mut self, queue: &'a dyn Fn(SettingsPatch)) -> Self {
        self.queue_setting_update = Some(queue);
        self
    }

    /// Forward a patch to the caller's queue, if one was supplied.
    pub fn queue_setting_update(&self, patch: SettingsPatch) {
        if let Some(queue) = self.queue_setting_update {
            queue(patch);
        }
    }
}

impl std::fmt::Debug for Env<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Env")
            .field("input", &self.input)
            .field("settings", &self.settings)
            .field("dt", &self.dt)
            .field("queue_setting_update", &self.queue_setting_update.is_some())
            .finish()
    }
}
