// src/state/theme_state.rs
use std::sync::mpsc::{channel, Receiver, Sender};

use crate::config::Theme;

/// Owns the current theme. Only the store changes it; listeners hear about
/// each actual change through their own channel.
#[derive(Debug, Default)]
pub struct ThemeStore {
    current: Theme,
    subscribers: Vec<Sender<Theme>>,
}

impl ThemeStore {
    pub fn new(theme: Theme) -> Self {
        Self {
            current: theme,
            subscribers: Vec::new(),
        }
    }

    pub fn current(&self) -> Theme {
        self.current
    }

    pub fn subscribe(&mut self) -> Receiver<Theme> {
        let (tx, rx) = channel();
        self.subscribers.push(tx);
        rx
    }

    /// Returns true if the theme changed.
    pub fn set(&mut self, theme: Theme) -> bool {
        if theme == self.current {
            return false;
        }
        log::info!("theme changed: {:?} -> {:?}", self.current, theme);
        self.current = theme;
        self.subscribers.retain(|tx| tx.send(theme).is_ok());
        true
    }

    pub fn toggle(&mut self) -> Theme {
        let next = self.current.toggled();
        self.set(next);
        next
    }

    #[cfg(test)]
    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn notifies_only_on_change() {
        let mut store = ThemeStore::new(Theme::Dark);
        let rx = store.subscribe();

        assert!(!store.set(Theme::Dark));
        assert!(rx.try_recv().is_err());

        assert_eq!(store.toggle(), Theme::Light);
        assert_eq!(rx.try_recv().unwrap(), Theme::Light);
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn every_subscriber_hears_the_change() {
        let mut store = ThemeStore::default();
        let a = store.subscribe();
        let b = store.subscribe();
        store.set(Theme::Light);
        assert_eq!(a.try_recv().unwrap(), Theme::Light);
        assert_eq!(b.try_recv().unwrap(), Theme::Light);
    }

    #[test]
    fn dropped_subscribers_are_pruned() {
        let mut store = ThemeStore::default();
        let keep = store.subscribe();
        drop(store.subscribe());
        assert_eq!(store.subscriber_count(), 2);

        store.toggle();
        assert_eq!(store.subscriber_count(), 1);
        assert_eq!(keep.try_recv().unwrap(), Theme::Light);
    }
}
