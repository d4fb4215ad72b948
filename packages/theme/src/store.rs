use crate::brand::Brand;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::sync::{Arc, Mutex, MutexGuard};
use tokio::sync::broadcast;
use tracing::{debug, info};

const CHANNEL_CAPACITY: usize = 64;

/// What triggered a theme change
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChangeSource {
    Manual,
    Route,
}

/// Broadcast to subscribers whenever the theme is set
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemeChange {
    pub theme: Brand,
    pub previous_theme: Brand,
    pub source: ChangeSource,
    pub changed_at: DateTime<Utc>,
}

/// Current theme and catalogue
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ThemeSnapshot {
    pub theme: Brand,
    pub catalogue: Brand,
}

struct ThemeState {
    snapshot: ThemeSnapshot,
    manually_changed: bool,
}

/// Shared handle over the current theme. Clones observe the same state.
#[derive(Clone)]
pub struct ThemeStore {
    state: Arc<Mutex<ThemeState>>,
    tx: broadcast::Sender<ThemeChange>,
}

impl ThemeStore {
    /// Start with `initial` as both theme and catalogue
    pub fn new(initial: Brand) -> Self {
        let (tx, _) = broadcast::channel(CHANNEL_CAPACITY);
        Self {
            state: Arc::new(Mutex::new(ThemeState {
                snapshot: ThemeSnapshot {
                    theme: initial,
                    catalogue: initial,
                },
                manually_changed: false,
            })),
            tx,
        }
    }

    fn lock(&self) -> MutexGuard<'_, ThemeState> {
        // State is plain data, a poisoned lock still holds a usable value
        self.state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    pub fn snapshot(&self) -> ThemeSnapshot {
        self.lock().snapshot
    }

    pub fn theme(&self) -> Brand {
        self.snapshot().theme
    }

    pub fn catalogue(&self) -> Brand {
        self.snapshot().catalogue
    }

    /// Set the theme explicitly and notify subscribers. Disables route sync.
    pub fn set_theme(&self, theme: Brand) -> ThemeChange {
        let change = {
            let mut state = self.lock();
            state.manually_changed = true;
            apply(&mut state, theme, ChangeSource::Manual)
        };

        info!(theme = %change.theme, previous = %change.previous_theme, "Theme changed");
        self.publish(change.clone());
        change
    }

    pub fn set_catalogue(&self, catalogue: Brand) {
        self.lock().snapshot.catalogue = catalogue;
        debug!(catalogue = %catalogue, "Catalogue changed");
    }

    /// Follow the route to its brand theme, unless the theme was set
    /// manually before. Returns the change when one was applied.
    pub fn sync_route(&self, path: &str) -> Option<ThemeChange> {
        let brand = Brand::for_route(path)?;

        let change = {
            let mut state = self.lock();
            if state.manually_changed {
                debug!(path = %path, "Skipping route theme after manual change");
                return None;
            }
            apply(&mut state, brand, ChangeSource::Route)
        };

        info!(theme = %change.theme, path = %path, "Theme synced to route");
        self.publish(change.clone());
        Some(change)
    }

    pub fn subscribe(&self) -> broadcast::Receiver<ThemeChange> {
        self.tx.subscribe()
    }

    pub fn subscriber_count(&self) -> usize {
        self.tx.receiver_count()
    }

    fn publish(&self, change: ThemeChange) {
        // No subscribers is not an error
        let _ = self.tx.send(change);
    }
}

impl Default for ThemeStore {
    fn default() -> Self {
        Self::new(Brand::default())
    }
}

fn apply(state: &mut ThemeState, theme: Brand, source: ChangeSource) -> ThemeChange {
    let previous_theme = state.snapshot.theme;
    state.snapshot.theme = theme;
    ThemeChange {
        theme,
        previous_theme,
        source,
        changed_at: Utc::now(),
    }
}
