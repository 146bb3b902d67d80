use std::f32::consts::PI;
use std::time::Duration;

use serde::{Deserialize, Deserializer};

/// Easing function for transitions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Easing {
    /// Slow at both ends, cosine shaped.
    #[default]
    Swing,
    Linear,
    EaseIn,
    EaseOut,
    EaseInOut,
}

impl Easing {
    /// Apply easing to progress (0.0 to 1.0).
    pub fn apply(self, t: f32) -> f32 {
        match self {
            Easing::Swing => 0.5 - (t * PI).cos() / 2.0,
            Easing::Linear => t,
            Easing::EaseIn => t * t,
            Easing::EaseOut => 1.0 - (1.0 - t) * (1.0 - t),
            Easing::EaseInOut => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(2) / 2.0
                }
            }
        }
    }
}

pub const SLIDE_FAST: Duration = Duration::from_millis(200);
pub const SLIDE_NORMAL: Duration = Duration::from_millis(400);
pub const SLIDE_SLOW: Duration = Duration::from_millis(600);

/// Options for a slide-down reveal.
///
/// Deserializes from `{ "duration": 250, "easing": "linear" }`, where the
/// duration is milliseconds or one of `"fast"`, `"normal"` and `"slow"`.
/// Missing fields fall back to 400ms with swing easing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SlideOptions {
    #[serde(deserialize_with = "deserialize_duration")]
    pub duration: Duration,
    pub easing: Easing,
}

impl Default for SlideOptions {
    fn default() -> Self {
        Self {
            duration: SLIDE_NORMAL,
            easing: Easing::default(),
        }
    }
}

impl SlideOptions {
    pub fn new(duration: Duration, easing: Easing) -> Self {
        Self { duration, easing }
    }

    /// Slide that completes on the next tick.
    pub fn instant() -> Self {
        Self {
            duration: Duration::ZERO,
            easing: Easing::Linear,
        }
    }

    pub fn duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }

    pub fn easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawDuration {
    Millis(u64),
    Named(String),
}

fn deserialize_duration<'de, D>(deserializer: D) -> Result<Duration, D::Error>
where
    D: Deserializer<'de>,
{
    match RawDuration::deserialize(deserializer)? {
        RawDuration::Millis(ms) => Ok(Duration::from_millis(ms)),
        RawDuration::Named(name) => match name.as_str() {
            "fast" => Ok(SLIDE_FAST),
            "normal" => Ok(SLIDE_NORMAL),
            "slow" => Ok(SLIDE_SLOW),
            other => Err(serde::de::Error::custom(format!(
                "unknown slide duration {other:?}, expected milliseconds, \"fast\", \"normal\" or \"slow\""
            ))),
        },
    }
}
