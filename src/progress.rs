//! Loading-progress bar model.
//!
//! A thin bar whose fill mirrors the web surface's estimated progress.
//! Each update re-opaques the bar and moves the fill; on completion the
//! bar holds briefly, fades out, and resets its fill so the next load
//! starts from an invisible, empty bar. The component owns no render
//! loop, so the fade is stepped explicitly with [`ProgressBar::tick`].

use std::time::Duration;

/// Pause at full progress before the fade starts.
pub const COMPLETION_DELAY: Duration = Duration::from_millis(300);
/// Length of the opacity fade.
pub const FADE_DURATION: Duration = Duration::from_millis(300);

#[derive(Debug, Clone, Copy, PartialEq)]
enum FadePhase {
    /// Nothing to animate.
    Idle,
    /// Holding at full progress, counting down to the fade.
    Holding { remaining: Duration },
    /// Fading out; `remaining` of [`FADE_DURATION`] left.
    Fading { remaining: Duration },
}

/// The progress indicator's presentation state.
#[derive(Debug, Clone, PartialEq)]
pub struct ProgressBar {
    fraction: f64,
    opacity: f64,
    tint_color: Option<String>,
    phase: FadePhase,
}

impl ProgressBar {
    pub fn new() -> Self {
        Self {
            fraction: 0.0,
            opacity: 0.0,
            tint_color: None,
            phase: FadePhase::Idle,
        }
    }

    /// Fill fraction in 0.0..=1.0.
    pub fn fraction(&self) -> f64 {
        self.fraction
    }

    /// Opacity in 0.0..=1.0.
    pub fn opacity(&self) -> f64 {
        self.opacity
    }

    pub fn tint_color(&self) -> Option<&str> {
        self.tint_color.as_deref()
    }

    pub fn set_tint_color(&mut self, color: &str) {
        self.tint_color = Some(color.to_string());
    }

    /// Whether a hold or fade is in flight.
    pub fn animating(&self) -> bool {
        self.phase != FadePhase::Idle
    }

    /// Mirror a new progress value: the bar becomes fully opaque and the
    /// fill moves to the clamped value. Reaching 1.0 arms the
    /// fade-and-reset sequence; any other value cancels a fade in flight.
    pub fn set_progress(&mut self, value: f64) {
        self.fraction = value.clamp(0.0, 1.0);
        self.opacity = 1.0;
        self.phase = if self.fraction >= 1.0 {
            FadePhase::Holding {
                remaining: COMPLETION_DELAY,
            }
        } else {
            FadePhase::Idle
        };
    }

    /// Advance the hold/fade animation by `elapsed`. On fade completion
    /// the fill resets to 0 with the bar invisible.
    pub fn tick(&mut self, elapsed: Duration) {
        let mut budget = elapsed;
        loop {
            match self.phase {
                FadePhase::Idle => return,
                FadePhase::Holding { remaining } => {
                    if budget < remaining {
                        self.phase = FadePhase::Holding {
                            remaining: remaining - budget,
                        };
                        return;
                    }
                    budget -= remaining;
                    self.phase = FadePhase::Fading {
                        remaining: FADE_DURATION,
                    };
                }
                FadePhase::Fading { remaining } => {
                    if budget < remaining {
                        let left = remaining - budget;
                        self.opacity = left.as_secs_f64() / FADE_DURATION.as_secs_f64();
                        self.phase = FadePhase::Fading { remaining: left };
                        return;
                    }
                    self.opacity = 0.0;
                    self.fraction = 0.0;
                    self.phase = FadePhase::Idle;
                    return;
                }
            }
        }
    }
}

impl Default for ProgressBar {
    fn default() -> Self {
        Self::new()
    }
}
