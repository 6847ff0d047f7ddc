//! Smoothed follow camera
//!
//! The camera is a pure rendering offset. Collision and physics work in
//! world space and never read it.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::geometry::Rect;
use crate::consts::*;

/// Camera top-left corner in world space
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Camera {
    pub pos: Vec2,
}

impl Camera {
    /// Ease toward centering `target` on screen, then clamp.
    ///
    /// Covers `lerp` of the remaining distance each call.
    pub fn follow(&mut self, target: Vec2, lerp: f32) {
        let goal = target - Vec2::new(CANVAS_WIDTH / 2.0, CANVAS_HEIGHT / 2.0);
        self.pos += (goal - self.pos) * lerp;
        self.pos.x = self.pos.x.clamp(0.0, LEVEL_WIDTH - CANVAS_WIDTH);
        self.pos.y = self.pos.y.clamp(CAMERA_MIN_Y, CAMERA_MAX_Y);
    }

    /// Convert a world position to screen coordinates
    #[inline]
    pub fn world_to_screen(&self, world: Vec2) -> Vec2 {
        world - self.pos
    }

    /// Whether any part of `rect` is within the viewport grown by `margin`
    pub fn is_visible(&self, rect: &Rect, margin: f32) -> bool {
        let view = Rect::from_pos_size(self.pos, Vec2::new(CANVAS_WIDTH, CANVAS_HEIGHT));
        view.expanded(margin).intersects(rect)
    }
}
