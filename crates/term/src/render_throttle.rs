//! Redraw pacing for the frontend loop.

/// Decides when a new frame is worth drawing.
///
/// While the ball is moving every loop iteration renders. On the win screen
/// nothing moves, so frames are only drawn when the visible state changes or
/// at most once per `min_static_interval_ms` as a keep-alive.
#[derive(Debug, Clone)]
pub struct RenderThrottle {
    min_static_interval_ms: u64,
    /// `(time, fingerprint)` of the last rendered frame.
    last: Option<(u64, u64)>,
}

impl RenderThrottle {
    pub fn new(min_static_interval_ms: u64) -> Self {
        Self {
            min_static_interval_ms,
            last: None,
        }
    }

    pub fn should_render(&mut self, now_ms: u64, fingerprint: u64, is_static: bool) -> bool {
        let render = match self.last {
            None => true,
            Some(_) if !is_static => true,
            Some((_, prev)) if prev != fingerprint => true,
            Some((at, _)) => now_ms.saturating_sub(at) >= self.min_static_interval_ms,
        };
        if render {
            self.last = Some((now_ms, fingerprint));
        }
        render
    }

    /// Forget the last frame so the next call renders.
    pub fn invalidate(&mut self) {
        self.last = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalidate_forces_render() {
        let mut t = RenderThrottle::new(1000);
        assert!(t.should_render(0, 7, true));
        assert!(!t.should_render(1, 7, true));
        t.invalidate();
        assert!(t.should_render(2, 7, true));
    }
}
