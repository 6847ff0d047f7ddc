//! Keyboard input collaborator
//!
//! Hosts forward raw key names (as reported by the platform, e.g.
//! `"ArrowLeft"` or `"a"`) on press and release. The simulation reads the
//! held set once per tick through [`KeyboardState::to_tick_input`].

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::sim::TickInput;

/// Logical game actions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    MoveLeft,
    MoveRight,
    Jump,
    Shoot,
    Restart,
}

/// Key names bound to each action
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct KeyBindings {
    pub move_left: Vec<String>,
    pub move_right: Vec<String>,
    pub jump: Vec<String>,
    pub shoot: Vec<String>,
    pub restart: Vec<String>,
}

fn keys(names: &[&str]) -> Vec<String> {
    names.iter().map(|s| s.to_string()).collect()
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self {
            move_left: keys(&["ArrowLeft", "a", "A"]),
            move_right: keys(&["ArrowRight", "d", "D"]),
            jump: keys(&["ArrowUp", "w", "W"]),
            shoot: keys(&[" ", "Space"]),
            restart: keys(&["r", "R"]),
        }
    }
}

impl KeyBindings {
    /// Keys bound to an action
    pub fn keys_for(&self, action: Action) -> &[String] {
        match action {
            Action::MoveLeft => &self.move_left,
            Action::MoveRight => &self.move_right,
            Action::Jump => &self.jump,
            Action::Shoot => &self.shoot,
            Action::Restart => &self.restart,
        }
    }
}

/// Currently held keys
#[derive(Debug, Clone, Default)]
pub struct KeyboardState {
    held: HashSet<String>,
}

impl KeyboardState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn key_down(&mut self, key: &str) {
        self.held.insert(key.to_string());
    }

    pub fn key_up(&mut self, key: &str) {
        self.held.remove(key);
    }

    /// Drop every held key (window blur, focus loss)
    pub fn release_all(&mut self) {
        self.held.clear();
    }

    pub fn is_held(&self, key: &str) -> bool {
        self.held.contains(key)
    }

    /// Whether any key bound to `action` is held
    pub fn action_held(&self, bindings: &KeyBindings, action: Action) -> bool {
        bindings.keys_for(action).iter().any(|k| self.is_held(k))
    }

    /// Snapshot the held keys as this tick's input
    pub fn to_tick_input(&self, bindings: &KeyBindings) -> TickInput {
        TickInput {
            move_left: self.action_held(bindings, Action::MoveLeft),
            move_right: self.action_held(bindings, Action::MoveRight),
            jump: self.action_held(bindings, Action::Jump),
            shoot: self.action_held(bindings, Action::Shoot),
            restart: self.action_held(bindings, Action::Restart),
            idle_mode: false,
        }
    }
}
