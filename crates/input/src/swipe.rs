//! Swipe gestures from mouse drags.
//!
//! A swipe is the delta between a left-button press and its release. The axis
//! with the larger magnitude wins, and the delta must exceed the threshold on
//! that axis. Terminal rows grow downward, so a positive `dy` is `Down`.

use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};

use crate::types::Direction;

/// Minimum drag distance in terminal cells.
pub const DEFAULT_SWIPE_THRESHOLD: u16 = 2;

/// Classify a drag delta into a direction.
///
/// Ties between the axes count as vertical.
pub fn classify_swipe(dx: i32, dy: i32, threshold: u16) -> Option<Direction> {
    let t = i32::from(threshold);
    if dx.abs() > dy.abs() {
        if dx > t {
            Some(Direction::Right)
        } else if dx < -t {
            Some(Direction::Left)
        } else {
            None
        }
    } else if dy > t {
        Some(Direction::Down)
    } else if dy < -t {
        Some(Direction::Up)
    } else {
        None
    }
}

/// Tracks one press/release pair of the left mouse button.
#[derive(Debug, Clone)]
pub struct SwipeTracker {
    start: Option<(u16, u16)>,
    threshold: u16,
}

impl SwipeTracker {
    pub fn new() -> Self {
        Self::with_threshold(DEFAULT_SWIPE_THRESHOLD)
    }

    pub fn with_threshold(threshold: u16) -> Self {
        Self {
            start: None,
            threshold,
        }
    }

    pub fn threshold(&self) -> u16 {
        self.threshold
    }

    /// Feed a mouse event; returns a direction when a swipe completes.
    pub fn handle_mouse_event(&mut self, event: MouseEvent) -> Option<Direction> {
        match event.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                self.start = Some((event.column, event.row));
                None
            }
            MouseEventKind::Up(MouseButton::Left) => {
                let (sx, sy) = self.start.take()?;
                let dx = i32::from(event.column) - i32::from(sx);
                let dy = i32::from(event.row) - i32::from(sy);
                classify_swipe(dx, dy, self.threshold)
            }
            _ => None,
        }
    }

    /// Forget a press that never got its release (e.g. focus lost).
    pub fn reset(&mut self) {
        self.start = None;
    }
}

impl Default for SwipeTracker {
    fn default() -> Self {
        Self::new()
    }
}
