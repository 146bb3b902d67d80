//! Widget configuration.
//!
//! Users supply a [`ShowMoreOptions`] override record, either through the
//! builder methods or as JSON. It is merged once over the built-in defaults
//! into an immutable [`ShowMoreConfig`], which is validated at that point.

use std::num::NonZeroUsize;

use pagedom::{parse_markup, Element, Selector, SlideOptions};
use serde::Deserialize;

use crate::error::ShowMoreError;

pub const DEFAULT_CHILD_SELECTOR: &str = "div";
pub const DEFAULT_INITIAL_ITEMS: usize = 10;
pub const DEFAULT_BATCH_SIZE: usize = 10;
pub const DEFAULT_MARKUP: &str = r#"<div class="showmore-toggle">Show More</div>"#;

/// User-supplied overrides. Every field left as `None` takes its default.
///
/// Field names follow the camelCase keys of the JSON form:
///
/// ```json
/// { "childSelector": "li", "showInitialNumberOfItems": 5, "showMoreNumberOfItems": 0 }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ShowMoreOptions {
    /// Selector for the container's items.
    pub child_selector: Option<String>,
    /// Number of items visible before the first reveal.
    pub show_initial_number_of_items: Option<i64>,
    /// Markup for the toggle control.
    pub show_more_markup: Option<String>,
    /// Items revealed per activation, 0 for all remaining.
    pub show_more_number_of_items: Option<i64>,
    /// Slide used when revealing.
    pub slide_options: Option<SlideOptions>,
}

impl ShowMoreOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse options from a JSON object. Unknown keys are ignored.
    pub fn from_json(json: &str) -> Result<Self, ShowMoreError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn child_selector(mut self, selector: impl Into<String>) -> Self {
        self.child_selector = Some(selector.into());
        self
    }

    pub fn initial_items(mut self, count: i64) -> Self {
        self.show_initial_number_of_items = Some(count);
        self
    }

    pub fn markup(mut self, markup: impl Into<String>) -> Self {
        self.show_more_markup = Some(markup.into());
        self
    }

    pub fn batch_size(mut self, count: i64) -> Self {
        self.show_more_number_of_items = Some(count);
        self
    }

    pub fn slide_options(mut self, options: SlideOptions) -> Self {
        self.slide_options = Some(options);
        self
    }
}

/// How many items a single activation reveals.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BatchSize {
    /// Reveal every remaining item at once.
    All,
    /// Reveal up to this many items.
    Items(NonZeroUsize),
}

impl From<usize> for BatchSize {
    fn from(count: usize) -> Self {
        NonZeroUsize::new(count).map_or(BatchSize::All, BatchSize::Items)
    }
}

/// Resolved, validated configuration for one widget.
#[derive(Debug, Clone)]
pub struct ShowMoreConfig {
    child_selector: Selector,
    initial_items: NonZeroUsize,
    batch_size: BatchSize,
    markup: String,
    control_template: Element,
    slide_options: SlideOptions,
}

impl Default for ShowMoreConfig {
    fn default() -> Self {
        Self {
            child_selector: Selector::tag(DEFAULT_CHILD_SELECTOR),
            initial_items: NonZeroUsize::new(DEFAULT_INITIAL_ITEMS).unwrap_or(NonZeroUsize::MIN),
            batch_size: BatchSize::from(DEFAULT_BATCH_SIZE),
            markup: DEFAULT_MARKUP.to_string(),
            control_template: Element::div()
                .class("showmore-toggle")
                .content_text("Show More"),
            slide_options: SlideOptions::default(),
        }
    }
}

impl ShowMoreConfig {
    /// Merge `options` over the defaults, rejecting invalid values.
    pub fn from_options(options: &ShowMoreOptions) -> Result<Self, ShowMoreError> {
        let mut config = Self::default();

        if let Some(selector) = &options.child_selector {
            config.child_selector = Selector::parse(selector)?;
        }

        if let Some(count) = options.show_initial_number_of_items {
            config.initial_items = usize::try_from(count)
                .ok()
                .and_then(NonZeroUsize::new)
                .ok_or(ShowMoreError::InvalidInitialCount(count))?;
        }

        if let Some(count) = options.show_more_number_of_items {
            let count =
                usize::try_from(count).map_err(|_| ShowMoreError::InvalidBatchSize(count))?;
            config.batch_size = BatchSize::from(count);
        }

        if let Some(markup) = &options.show_more_markup {
            config.control_template = parse_markup(markup)?;
            config.markup = markup.clone();
        }

        if let Some(slide) = options.slide_options {
            config.slide_options = slide;
        }

        Ok(config)
    }

    /// Parse JSON options and merge them over the defaults.
    pub fn from_json(json: &str) -> Result<Self, ShowMoreError> {
        Self::from_options(&ShowMoreOptions::from_json(json)?)
    }

    pub fn child_selector(&self) -> &Selector {
        &self.child_selector
    }

    pub fn initial_items(&self) -> usize {
        self.initial_items.get()
    }

    pub fn batch_size(&self) -> BatchSize {
        self.batch_size
    }

    /// The markup the control template was parsed from.
    pub fn markup(&self) -> &str {
        &self.markup
    }

    pub fn control_template(&self) -> &Element {
        &self.control_template
    }

    pub fn slide_options(&self) -> &SlideOptions {
        &self.slide_options
    }

    /// A fresh control element, ready to insert into a document.
    pub fn control_element(&self) -> Element {
        self.control_template
            .instantiate()
            .clickable(true)
            .focusable(true)
    }
}
