use derive_more::Constructor;

use crate::{KeyAction, Modifiers, PlatformEvent};

/// A key press or a key release of a specific key with specific modifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Constructor)]
pub struct KeyTrigger<K> {
    pub action: KeyAction,
    pub key: K,
    pub modifiers: Modifiers,
}

impl<K: PartialEq> KeyTrigger<K> {
    pub fn press(key: K) -> Self {
        Self::new(KeyAction::Press, key, Modifiers::NONE)
    }

    pub fn release(key: K) -> Self {
        Self::new(KeyAction::Release, key, Modifiers::NONE)
    }

    pub fn with_modifiers(self, modifiers: Modifiers) -> Self {
        Self { modifiers, ..self }
    }

    #[inline]
    fn same_key(&self, key: &K, modifiers: &Modifiers) -> bool {
        self.key == *key && self.modifiers == *modifiers
    }

    pub fn matches(&self, event: &PlatformEvent<K>) -> bool {
        match event {
            PlatformEvent::Key {
                action,
                key,
                modifiers,
            } => *action == self.action && self.same_key(key, modifiers),
            _ => false,
        }
    }

    /// If this is a press, matches the release of the same key, and vice versa.
    pub fn is_opposite(&self, event: &PlatformEvent<K>) -> bool {
        match event {
            PlatformEvent::Key {
                action,
                key,
                modifiers,
            } => *action == self.action.opposite() && self.same_key(key, modifiers),
            _ => false,
        }
    }
}

/// An event the game can react to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Trigger<K> {
    WindowClose,
    Key(KeyTrigger<K>),
}

impl<K> From<KeyTrigger<K>> for Trigger<K> {
    fn from(trigger: KeyTrigger<K>) -> Self {
        Trigger::Key(trigger)
    }
}

pub fn matches<K: PartialEq>(trigger: &Trigger<K>, event: &PlatformEvent<K>) -> bool {
    match trigger {
        Trigger::WindowClose => matches!(event, PlatformEvent::Closed),
        Trigger::Key(key) => key.matches(event),
    }
}
