//! What the widget needs from the page embedding it.

use crate::{ScoreCard, SessionMarkers};

use std::sync::{Arc, Mutex, MutexGuard};

/// Moves the page to another URL
pub trait Navigator: Send + Sync {
    fn navigate(&self, url: &str);
}

/// Blocking, user-visible notification
pub trait Notifier: Send + Sync {
    fn notify(&self, message: &str);
}

/// Render target for the two leaderboard sections.
///
/// Each call replaces the section wholesale.
pub trait ScoreBoard: Send + Sync {
    fn replace_self_score(&self, card: ScoreCard);
    fn replace_top_scores(&self, cards: Vec<ScoreCard>);
}

/// Page integrations handed to the widget at construction
#[derive(Clone)]
pub struct PageHost {
    pub markers: Arc<dyn SessionMarkers>,
    pub navigator: Arc<dyn Navigator>,
    pub notifier: Arc<dyn Notifier>,
    pub board: Arc<dyn ScoreBoard>,
}

/// ScoreBoard that keeps the rendered cards in memory
#[derive(Debug, Default)]
pub struct MemoryScoreBoard {
    self_score: Mutex<Option<ScoreCard>>,
    top_scores: Mutex<Vec<ScoreCard>>,
}

impl MemoryScoreBoard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn self_score(&self) -> Option<ScoreCard> {
        lock(&self.self_score).clone()
    }

    pub fn top_scores(&self) -> Vec<ScoreCard> {
        lock(&self.top_scores).clone()
    }
}

impl ScoreBoard for MemoryScoreBoard {
    fn replace_self_score(&self, card: ScoreCard) {
        *lock(&self.self_score) = Some(card);
    }

    fn replace_top_scores(&self, cards: Vec<ScoreCard>) {
        *lock(&self.top_scores) = cards;
    }
}

// A panic while holding the lock cannot leave a half-written section.
fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}
