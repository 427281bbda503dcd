/// What a pointer drag does to the orbit camera.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DragMode {
    Rotate,
    Pan,
}

/// Tracks the single active drag on the canvas.
#[derive(Default, Clone, Copy, Debug)]
pub struct DragState {
    pub mode: Option<DragMode>,
    pub pointer_id: i32,
    pub last_x: f32,
    pub last_y: f32,
}

impl DragState {
    pub fn begin(&mut self, mode: DragMode, pointer_id: i32, x: f32, y: f32) {
        self.mode = Some(mode);
        self.pointer_id = pointer_id;
        self.last_x = x;
        self.last_y = y;
    }

    /// Movement since the last event for the dragging pointer, if any.
    pub fn motion(&mut self, pointer_id: i32, x: f32, y: f32) -> Option<(DragMode, f32, f32)> {
        let mode = self.mode?;
        if pointer_id != self.pointer_id {
            return None;
        }
        let (dx, dy) = (x - self.last_x, y - self.last_y);
        self.last_x = x;
        self.last_y = y;
        Some((mode, dx, dy))
    }

    pub fn end(&mut self, pointer_id: i32) -> bool {
        if self.mode.is_some() && pointer_id == self.pointer_id {
            self.mode = None;
            return true;
        }
        false
    }

    #[inline]
    pub fn active(&self) -> bool {
        self.mode.is_some()
    }
}

// ---------------- Button mapping ----------------
/// Primary button rotates (pans with a modifier held), secondary pans.
#[inline]
pub fn drag_mode_for(button: i16, modifier: bool) -> Option<DragMode> {
    match button {
        0 if modifier => Some(DragMode::Pan),
        0 => Some(DragMode::Rotate),
        2 => Some(DragMode::Pan),
        _ => None,
    }
}

/// Zoom direction for a wheel event: -1 in, +1 out, 0 for no vertical motion.
#[inline]
pub fn wheel_direction(delta_y: f64) -> f32 {
    if delta_y < 0.0 {
        -1.0
    } else if delta_y > 0.0 {
        1.0
    } else {
        0.0
    }
}
