/// Turns absolute cursor positions into per-frame look offsets.
///
/// Window y grows downward while pitch grows upward, so the y offset is
/// reversed. The first sample only primes the tracker.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct MouseTracker {
    last_position: Option<(f32, f32)>,
}

impl MouseTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a cursor position and return the `(x_offset, y_offset)` since
    /// the previous one
    pub fn offset(&mut self, x: f32, y: f32) -> (f32, f32) {
        let offset = match self.last_position {
            Some((last_x, last_y)) => (x - last_x, last_y - y),
            None => (0.0, 0.0),
        };
        self.last_position = Some((x, y));
        offset
    }

    /// Forget the last position, e.g. after the cursor was recaptured
    pub fn reset(&mut self) {
        self.last_position = None;
    }

    pub fn last_position(&self) -> Option<(f32, f32)> {
        self.last_position
    }
}
