use derive_more::Constructor;
use strum::{Display, EnumIter};

pub mod trigger;

pub use trigger::{matches, KeyTrigger, Trigger};

/// Modifier keys held down together with a key.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Constructor)]
pub struct Modifiers {
    pub ctrl: bool,
    pub alt: bool,
    pub shift: bool,
}

impl Modifiers {
    pub const NONE: Modifiers = Modifiers {
        ctrl: false,
        alt: false,
        shift: false,
    };
    pub const CTRL: Modifiers = Modifiers {
        ctrl: true,
        ..Modifiers::NONE
    };
    pub const ALT: Modifiers = Modifiers {
        alt: true,
        ..Modifiers::NONE
    };
    pub const SHIFT: Modifiers = Modifiers {
        shift: true,
        ..Modifiers::NONE
    };

    #[inline]
    pub const fn union(self, other: Modifiers) -> Modifiers {
        Modifiers {
            ctrl: self.ctrl || other.ctrl,
            alt: self.alt || other.alt,
            shift: self.shift || other.shift,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter)]
pub enum KeyAction {
    Press,
    Release,
}

impl KeyAction {
    #[inline]
    pub fn opposite(self) -> KeyAction {
        match self {
            KeyAction::Press => KeyAction::Release,
            KeyAction::Release => KeyAction::Press,
        }
    }
}

/// An event as reported by the windowing layer, with `K` being its key code type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlatformEvent<K> {
    Closed,
    Key {
        action: KeyAction,
        key: K,
        modifiers: Modifiers,
    },
    /// Anything the input layer doesn't react to
    Other,
}
