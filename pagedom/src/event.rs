/// High-level events with element targeting
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Key press event, targeted at focused element
    Key {
        target: Option<String>,
        key: Key,
        modifiers: Modifiers,
    },
    /// Mouse click event
    Click {
        target: Option<String>,
        x: u16,
        y: u16,
        button: MouseButton,
    },
}

impl Event {
    /// Left click on an element, without coordinates.
    pub fn click(target: impl Into<String>) -> Self {
        Event::Click {
            target: Some(target.into()),
            x: 0,
            y: 0,
            button: MouseButton::Left,
        }
    }

    /// Unmodified key press on an element.
    pub fn key(target: impl Into<String>, key: Key) -> Self {
        Event::Key {
            target: Some(target.into()),
            key,
            modifiers: Modifiers::new(),
        }
    }

    /// Convert a crossterm key event, targeted at the focused element.
    /// Releases are dropped so one keystroke activates once.
    pub fn from_crossterm_key(
        event: crossterm::event::KeyEvent,
        target: Option<String>,
    ) -> Option<Self> {
        if event.kind == crossterm::event::KeyEventKind::Release {
            return None;
        }
        Some(Event::Key {
            target,
            key: event.code.into(),
            modifiers: event.modifiers.into(),
        })
    }

    /// Convert a crossterm mouse press, targeted at the element hit at its
    /// position. Returns None for anything other than a button press.
    pub fn from_crossterm_mouse(
        event: crossterm::event::MouseEvent,
        target: Option<String>,
    ) -> Option<Self> {
        match event.kind {
            crossterm::event::MouseEventKind::Down(button) => Some(Event::Click {
                target,
                x: event.column,
                y: event.row,
                button: button.into(),
            }),
            _ => None,
        }
    }

    pub fn target(&self) -> Option<&str> {
        match self {
            Event::Key { target, .. } | Event::Click { target, .. } => target.as_deref(),
        }
    }

    /// Whether this event would activate a button-like element: a left click,
    /// or Enter/Space without ctrl or alt.
    pub fn is_activation(&self) -> bool {
        match self {
            Event::Click { button, .. } => *button == MouseButton::Left,
            Event::Key { key, modifiers, .. } => {
                matches!(key, Key::Enter | Key::Char(' ')) && !modifiers.ctrl && !modifiers.alt
            }
        }
    }
}

/// Keys the document reacts to. Anything else arrives as `Other`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Char(char),
    Enter,
    Escape,
    Tab,
    BackTab,
    Up,
    Down,
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Modifiers {
    pub shift: bool,
    pub ctrl: bool,
    pub alt: bool,
}

impl Modifiers {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn ctrl() -> Self {
        Self {
            ctrl: true,
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
}

impl From<crossterm::event::KeyCode> for Key {
    fn from(code: crossterm::event::KeyCode) -> Self {
        use crossterm::event::KeyCode as Ct;
        match code {
            Ct::Char(c) => Key::Char(c),
            Ct::Enter => Key::Enter,
            Ct::Esc => Key::Escape,
            Ct::Tab => Key::Tab,
            Ct::BackTab => Key::BackTab,
            Ct::Up => Key::Up,
            Ct::Down => Key::Down,
            _ => Key::Other,
        }
    }
}

impl From<crossterm::event::KeyModifiers> for Modifiers {
    fn from(mods: crossterm::event::KeyModifiers) -> Self {
        use crossterm::event::KeyModifiers as Ct;
        Self {
            shift: mods.contains(Ct::SHIFT),
            ctrl: mods.contains(Ct::CONTROL),
            alt: mods.contains(Ct::ALT),
        }
    }
}

impl From<crossterm::event::MouseButton> for MouseButton {
    fn from(button: crossterm::event::MouseButton) -> Self {
        use crossterm::event::MouseButton as Ct;
        match button {
            Ct::Left => MouseButton::Left,
            Ct::Right => MouseButton::Right,
            Ct::Middle => MouseButton::Middle,
        }
    }
}
