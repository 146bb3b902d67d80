use std::collections::HashSet;
use std::time::{Duration, Instant};

use crate::element::{Content, Element};
use crate::transitions::{Easing, SlideOptions};

/// A single running slide-down.
#[derive(Debug, Clone)]
struct ActiveSlide {
    id: String,
    start: Instant,
    duration: Duration,
    easing: Easing,
}

impl ActiveSlide {
    fn progress(&self, now: Instant) -> f32 {
        if self.duration.is_zero() {
            return 1.0;
        }
        let elapsed = now.saturating_duration_since(self.start);
        (elapsed.as_secs_f32() / self.duration.as_secs_f32()).min(1.0)
    }
}

/// Tracks running slide transitions and reports when they finish.
///
/// Slides are kept in start order so completion is reported in the order the
/// elements were revealed.
#[derive(Debug, Default)]
pub struct SlideState {
    active: Vec<ActiveSlide>,
    /// Reduced motion flag - when true, slides complete on the next tick.
    reduced_motion: bool,
}

impl SlideState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable or disable reduced motion (accessibility).
    pub fn set_reduced_motion(&mut self, enabled: bool) {
        self.reduced_motion = enabled;
    }

    /// Returns true if any slide is currently running.
    pub fn has_active_slides(&self) -> bool {
        !self.active.is_empty()
    }

    pub fn is_sliding(&self, id: &str) -> bool {
        self.active.iter().any(|s| s.id == id)
    }

    /// Start a slide for `id`. A slide already running on the same element is
    /// restarted.
    pub fn start(&mut self, id: &str, options: &SlideOptions, now: Instant) {
        self.cancel(id);
        let duration = if self.reduced_motion {
            Duration::ZERO
        } else {
            options.duration
        };
        self.active.push(ActiveSlide {
            id: id.to_string(),
            start: now,
            duration,
            easing: options.easing,
        });
    }

    /// Eased progress (0.0 to 1.0) of the slide on `id`, or None if it is not
    /// sliding.
    pub fn progress(&self, id: &str, now: Instant) -> Option<f32> {
        let slide = self.active.iter().find(|s| s.id == id)?;
        Some(slide.easing.apply(slide.progress(now)))
    }

    /// Drop finished slides and return their element ids.
    pub fn tick(&mut self, now: Instant) -> Vec<String> {
        let mut completed = Vec::new();
        self.active.retain(|slide| {
            if slide.progress(now) >= 1.0 {
                completed.push(slide.id.clone());
                false
            } else {
                true
            }
        });
        completed
    }

    pub fn cancel(&mut self, id: &str) {
        self.active.retain(|s| s.id != id);
    }

    /// Remove slides for elements no longer in tree.
    pub fn cleanup(&mut self, current_ids: &HashSet<String>) {
        self.active.retain(|s| current_ids.contains(&s.id));
    }
}

/// Collect all element IDs from the tree.
pub fn collect_element_ids(element: &Element) -> HashSet<String> {
    let mut ids = HashSet::new();
    collect_ids_recursive(element, &mut ids);
    ids
}

fn collect_ids_recursive(element: &Element, ids: &mut HashSet<String>) {
    ids.insert(element.id.clone());
    if let Content::Children(children) = &element.content {
        for child in children {
            collect_ids_recursive(child, ids);
        }
    }
}
