//! Tracks which containers already have a widget.
//!
//! Attaching is idempotent: a container is initialized at most once for as
//! long as it stays registered. Entries leave the registry through
//! [`Registry::detach`], which also restores the container, or, once their
//! container is gone from the document, [`Registry::prune`].

use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;
use std::sync::Arc;

use log::debug;
use pagedom::Event;

use crate::config::{ShowMoreConfig, ShowMoreOptions};
use crate::error::ShowMoreError;
use crate::host::Host;
use crate::widget::{ShowMore, WidgetResult};

#[derive(Debug)]
pub struct Registry<N> {
    widgets: HashMap<N, ShowMore<N>>,
}

impl<N> Default for Registry<N> {
    fn default() -> Self {
        Self {
            widgets: HashMap::new(),
        }
    }
}

impl<N: Clone + Eq + Hash + Debug> Registry<N> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.widgets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.widgets.is_empty()
    }

    pub fn contains(&self, container: &N) -> bool {
        self.widgets.contains_key(container)
    }

    pub fn get(&self, container: &N) -> Option<&ShowMore<N>> {
        self.widgets.get(container)
    }

    pub fn iter(&self) -> impl Iterator<Item = &ShowMore<N>> {
        self.widgets.values()
    }

    /// Attach a widget to `container`.
    ///
    /// The first call resolves `options` and initializes the container. Later
    /// calls for the same container return the existing widget and ignore
    /// their options.
    pub fn attach<H: Host<Node = N>>(
        &mut self,
        host: &mut H,
        container: N,
        options: &ShowMoreOptions,
    ) -> Result<&ShowMore<N>, ShowMoreError> {
        if self.widgets.contains_key(&container) {
            debug!("showmore {container:?}: already attached");
            return Ok(&self.widgets[&container]);
        }
        let config = Arc::new(ShowMoreConfig::from_options(options)?);
        self.attach_with_config(host, container, config)
    }

    /// Attach with an already resolved configuration.
    pub fn attach_with_config<H: Host<Node = N>>(
        &mut self,
        host: &mut H,
        container: N,
        config: Arc<ShowMoreConfig>,
    ) -> Result<&ShowMore<N>, ShowMoreError> {
        if self.widgets.contains_key(&container) {
            debug!("showmore {container:?}: already attached");
            return Ok(&self.widgets[&container]);
        }
        let widget = ShowMore::new(host, container.clone(), config)?;
        Ok(self.widgets.entry(container).or_insert(widget))
    }

    /// Attach to every container in a set, resolving `options` once. Returns
    /// how many containers were newly attached.
    ///
    /// Stops at the first container missing from the document; containers
    /// before it stay attached.
    pub fn attach_each<H, I>(
        &mut self,
        host: &mut H,
        containers: I,
        options: &ShowMoreOptions,
    ) -> Result<usize, ShowMoreError>
    where
        H: Host<Node = N>,
        I: IntoIterator<Item = N>,
    {
        let config = Arc::new(ShowMoreConfig::from_options(options)?);
        let mut attached = 0;
        for container in containers {
            if self.widgets.contains_key(&container) {
                continue;
            }
            self.attach_with_config(host, container, Arc::clone(&config))?;
            attached += 1;
        }
        Ok(attached)
    }

    /// Forget a container. Its control is removed and every hidden item is
    /// shown, so attaching again starts from a clean container.
    pub fn detach<H: Host<Node = N>>(
        &mut self,
        host: &mut H,
        container: &N,
    ) -> Option<ShowMore<N>> {
        let mut widget = self.widgets.remove(container)?;
        widget.teardown(host);
        debug!("showmore {container:?}: detached");
        Some(widget)
    }

    /// Forget every container that is no longer in the document. Returns how
    /// many were dropped.
    pub fn prune<H: Host<Node = N>>(&mut self, host: &H) -> usize {
        let before = self.widgets.len();
        self.widgets.retain(|container, _| host.exists(container));
        let dropped = before - self.widgets.len();
        if dropped > 0 {
            debug!("showmore: pruned {dropped} detached containers");
        }
        dropped
    }

    /// The container whose live control is `target` or contains it.
    pub fn owner_of<H: Host<Node = N>>(&self, host: &H, target: &N) -> Option<&N> {
        self.widgets
            .values()
            .find(|widget| {
                widget
                    .control()
                    .is_some_and(|control| host.is_within(target, control))
            })
            .map(ShowMore::container)
    }

    /// Activate `target`, the control itself or anything inside it: reveal
    /// the next batch of the widget it belongs to.
    pub fn activate<H: Host<Node = N>>(&mut self, host: &mut H, target: &N) -> WidgetResult {
        let Some(container) = self.owner_of(host, target).cloned() else {
            return WidgetResult::Ignored;
        };
        match self.widgets.get_mut(&container) {
            Some(widget) => widget.reveal(host),
            None => WidgetResult::Ignored,
        }
    }
}

impl Registry<String> {
    /// Route an input event. Activations (left click, Enter, Space) targeted
    /// at a live control, or at an element inside one, reveal its next batch
    /// and report `Activated`, so the caller should stop default handling.
    /// Everything else is `Ignored`.
    pub fn dispatch<H: Host<Node = String>>(&mut self, host: &mut H, event: &Event) -> WidgetResult {
        if !event.is_activation() {
            return WidgetResult::Ignored;
        }
        let Some(target) = event.target() else {
            return WidgetResult::Ignored;
        };
        self.activate(host, &target.to_string())
    }
}
