use instant::Instant;

/// Time uniforms sampled by the shaders, one per animated effect.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct AnimationScalars {
    pub fireflies_time: f32,
    pub portal_time: f32,
}

/// Monotonic elapsed time since a fixed epoch.
#[derive(Clone, Copy, Debug)]
pub struct AnimationClock {
    start: Instant,
}

impl AnimationClock {
    pub fn start() -> Self {
        Self {
            start: Instant::now(),
        }
    }

    #[inline]
    pub fn elapsed_secs(&self) -> f32 {
        self.start.elapsed().as_secs_f32()
    }
}

/// Per-frame driver of the animation scalars.
///
/// Each tick writes one elapsed value into both scalars. The written value
/// never decreases, even if the time source does.
#[derive(Debug)]
pub struct FrameAnimator {
    clock: AnimationClock,
    last_elapsed: f32,
    ticks: u64,
}

impl FrameAnimator {
    pub fn new(clock: AnimationClock) -> Self {
        Self {
            clock,
            last_elapsed: 0.0,
            ticks: 0,
        }
    }

    /// Sample the clock and publish it. Returns the value written.
    pub fn tick(&mut self, scalars: &mut AnimationScalars) -> f32 {
        let elapsed = self.clock.elapsed_secs();
        self.advance(elapsed, scalars)
    }

    /// Publish an explicit elapsed time.
    pub fn advance(&mut self, elapsed: f32, scalars: &mut AnimationScalars) -> f32 {
        let t = if elapsed.is_finite() {
            elapsed.max(self.last_elapsed)
        } else {
            self.last_elapsed
        };
        scalars.fireflies_time = t;
        scalars.portal_time = t;
        self.last_elapsed = t;
        self.ticks += 1;
        t
    }

    #[inline]
    pub fn elapsed(&self) -> f32 {
        self.last_elapsed
    }

    #[inline]
    pub fn ticks(&self) -> u64 {
        self.ticks
    }
}
