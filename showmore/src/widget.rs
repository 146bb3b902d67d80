//! The show-more widget.
//!
//! A widget owns one container. On attach it hides every item past the
//! initial count and inserts a toggle control after the last visible one.
//! Each activation of the control reveals the next batch and either moves the
//! control after it or, once nothing is left hidden, removes it for good.
//!
//! The visible items are always a leading prefix of the container's items,
//! and the control, while it exists, always sits right after that prefix.

use std::collections::HashSet;
use std::sync::Arc;

use log::{debug, trace, warn};
use pagedom::SlideOptions;

use crate::config::{BatchSize, ShowMoreConfig, ShowMoreOptions};
use crate::error::ShowMoreError;
use crate::host::Host;

/// Result of a widget handling an activation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WidgetResult {
    /// Event was not handled by this widget.
    #[default]
    Ignored,
    /// The control was activated and a batch was revealed. The event's
    /// default action should not run.
    Activated,
}

impl WidgetResult {
    /// Check if the event was handled (not Ignored).
    pub fn is_handled(&self) -> bool {
        !matches!(self, WidgetResult::Ignored)
    }
}

/// Lifecycle of a container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    /// Initial batch shown, control inserted, nothing revealed yet.
    Unexpanded,
    /// At least one batch revealed, items still hidden.
    Expanding,
    /// Every item visible and no control. Terminal.
    #[default]
    FullyExpanded,
}

/// Reveal state of one container.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RevealState<N> {
    phase: Phase,
    /// Items found at initialization, in document order.
    items: Vec<N>,
    /// Length of the visible prefix of `items`.
    revealed: usize,
    control: Option<N>,
}

impl<N> Default for RevealState<N> {
    fn default() -> Self {
        Self {
            phase: Phase::FullyExpanded,
            items: Vec::new(),
            revealed: 0,
            control: None,
        }
    }
}

impl<N> RevealState<N> {
    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn items(&self) -> &[N] {
        &self.items
    }

    /// Number of leading items currently visible.
    pub fn revealed(&self) -> usize {
        self.revealed
    }

    pub fn hidden(&self) -> usize {
        self.items.len().saturating_sub(self.revealed)
    }

    pub fn control(&self) -> Option<&N> {
        self.control.as_ref()
    }

    pub fn is_terminal(&self) -> bool {
        self.phase == Phase::FullyExpanded
    }

    fn terminal(items: Vec<N>, revealed: usize) -> Self {
        Self {
            phase: Phase::FullyExpanded,
            items,
            revealed,
            control: None,
        }
    }
}

/// Collect the container's items and, if there are more than the initial
/// count, hide the rest and insert the control.
pub fn initialize<H: Host>(
    container: &H::Node,
    config: &ShowMoreConfig,
    host: &mut H,
) -> RevealState<H::Node> {
    let items = host.children(container, config.child_selector());
    let initial = config.initial_items();

    if items.len() <= initial {
        debug!(
            "showmore {container:?}: {} items, initial count {initial}, nothing to hide",
            items.len()
        );
        let revealed = items.len();
        return RevealState::terminal(items, revealed);
    }

    let last_visible = items[initial - 1].clone();
    host.hide(&items[initial..]);

    match host.insert_after(config.control_element(), &last_visible) {
        Some(control) => {
            debug!(
                "showmore {container:?}: showing {initial} of {} items, control {control:?}",
                items.len()
            );
            RevealState {
                phase: Phase::Unexpanded,
                items,
                revealed: initial,
                control: Some(control),
            }
        }
        None => {
            warn!("showmore {container:?}: could not insert control, showing all items");
            show_all(items, None, host)
        }
    }
}

/// Drop the control and show every item still hidden, at once. Used whenever
/// the widget cannot keep its control in place, and on teardown.
fn show_all<H: Host>(
    items: Vec<H::Node>,
    control: Option<&H::Node>,
    host: &mut H,
) -> RevealState<H::Node> {
    if let Some(control) = control {
        host.remove(control);
    }
    let hidden: Vec<H::Node> = items
        .iter()
        .filter(|node| host.is_hidden(node))
        .cloned()
        .collect();
    if !hidden.is_empty() {
        host.slide_down(&hidden, &SlideOptions::instant());
    }
    let revealed = items.len();
    RevealState::terminal(items, revealed)
}

/// Reveal the next batch after the control.
///
/// This is the whole state transition for one activation: it reads and
/// mutates the document only through `host`. A terminal state is returned
/// unchanged.
pub fn reveal<H: Host>(
    state: RevealState<H::Node>,
    config: &ShowMoreConfig,
    host: &mut H,
) -> RevealState<H::Node> {
    let Some(control) = state.control.clone() else {
        trace!("reveal: no control, nothing to do");
        return state;
    };

    let selector = config.child_selector();
    let known: HashSet<&H::Node> = state.items.iter().collect();
    let candidates: Vec<H::Node> = host
        .next_all(&control, selector)
        .into_iter()
        .filter(|node| known.contains(node))
        .collect();

    let selected = match config.batch_size() {
        BatchSize::All => &candidates[..],
        BatchSize::Items(n) => &candidates[..n.get().min(candidates.len())],
    };

    let Some(last) = selected.last().cloned() else {
        debug!("reveal: no items after control {control:?}, removing it");
        host.remove(&control);
        let revealed = state.revealed;
        return RevealState::terminal(state.items, revealed);
    };

    host.slide_down(selected, config.slide_options());
    let revealed = state
        .items
        .iter()
        .position(|node| *node == last)
        .map_or(state.revealed, |index| index + 1);

    let more_hidden = host
        .next_all(&last, selector)
        .iter()
        .any(|node| known.contains(node) && host.is_hidden(node));
    trace!(
        "reveal: {} revealed, {revealed} of {} visible",
        selected.len(),
        state.items.len()
    );

    if more_hidden {
        if !host.move_after(&control, &last) {
            warn!("reveal: could not move control {control:?} after {last:?}, showing all items");
            return show_all(state.items, Some(&control), host);
        }
        RevealState {
            phase: Phase::Expanding,
            items: state.items,
            revealed,
            control: Some(control),
        }
    } else {
        debug!("reveal: all items visible, removing control {control:?}");
        host.remove(&control);
        RevealState::terminal(state.items, revealed)
    }
}

/// A show-more widget attached to one container.
#[derive(Debug, Clone)]
pub struct ShowMore<N> {
    container: N,
    config: Arc<ShowMoreConfig>,
    state: RevealState<N>,
}

impl<N: Clone + Eq + std::hash::Hash + std::fmt::Debug> ShowMore<N> {
    /// Attach to `container` and initialize it.
    pub fn new<H: Host<Node = N>>(
        host: &mut H,
        container: N,
        config: Arc<ShowMoreConfig>,
    ) -> Result<Self, ShowMoreError> {
        if !host.exists(&container) {
            return Err(ShowMoreError::ContainerNotFound(format!("{container:?}")));
        }
        let state = initialize(&container, &config, host);
        Ok(Self {
            container,
            config,
            state,
        })
    }

    /// Merge `options` over the defaults, then attach.
    pub fn with_options<H: Host<Node = N>>(
        host: &mut H,
        container: N,
        options: &ShowMoreOptions,
    ) -> Result<Self, ShowMoreError> {
        let config = ShowMoreConfig::from_options(options)?;
        Self::new(host, container, Arc::new(config))
    }

    /// Reveal the next batch. Ignored once every item is visible.
    pub fn reveal<H: Host<Node = N>>(&mut self, host: &mut H) -> WidgetResult {
        if self.state.is_terminal() {
            return WidgetResult::Ignored;
        }
        let state = std::mem::take(&mut self.state);
        self.state = reveal(state, &self.config, host);
        WidgetResult::Activated
    }

    /// Undo the widget's hold on its container: remove the control and show
    /// every item it still hides. The widget is terminal afterwards.
    pub fn teardown<H: Host<Node = N>>(&mut self, host: &mut H) {
        let state = std::mem::take(&mut self.state);
        if state.is_terminal() {
            self.state = state;
            return;
        }
        debug!("showmore {:?}: tearing down", self.container);
        self.state = show_all(state.items, state.control.as_ref(), host);
    }

    pub fn container(&self) -> &N {
        &self.container
    }

    pub fn config(&self) -> &ShowMoreConfig {
        &self.config
    }

    pub fn state(&self) -> &RevealState<N> {
        &self.state
    }

    pub fn phase(&self) -> Phase {
        self.state.phase()
    }

    pub fn control(&self) -> Option<&N> {
        self.state.control()
    }
}
