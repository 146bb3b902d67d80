//! A headless document model: an element tree addressed by id, with
//! selectors, markup templates, slide transitions and input events.

pub mod animation;
pub mod document;
pub mod element;
pub mod event;
pub mod markup;
pub mod selector;
pub mod transitions;

pub use animation::SlideState;
pub use document::Document;
pub use element::{Content, Element};
pub use event::{Event, Key, Modifiers, MouseButton};
pub use markup::{parse_markup, MarkupError};
pub use selector::{Selector, SelectorError, Visibility};
pub use transitions::{Easing, SlideOptions};
