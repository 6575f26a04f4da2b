//! One render pass over the two leaderboard sections.
//!
//! Each section is filled independently. A failure is logged and leaves
//! that section as it was; the pass itself never fails.

use crate::{ScoreBoard, ScoreCard, ScoreSource};

use lb_core::DeviceCategory;
use lb_db::CredentialRepository;

use std::sync::Arc;

use log::{debug, error};

pub struct Leaderboard {
    repository: Arc<CredentialRepository>,
    scores: Arc<dyn ScoreSource>,
    board: Arc<dyn ScoreBoard>,
    top_limit: u32,
}

impl Leaderboard {
    pub fn new(
        repository: Arc<CredentialRepository>,
        scores: Arc<dyn ScoreSource>,
        board: Arc<dyn ScoreBoard>,
        top_limit: u32,
    ) -> Self {
        Self {
            repository,
            scores,
            board,
            top_limit,
        }
    }

    pub fn top_limit(&self) -> u32 {
        self.top_limit
    }

    pub async fn render(&self, category: DeviceCategory) {
        debug!("Rendering {} leaderboard", category);
        self.render_self(category).await;
        self.render_top(category).await;
    }

    /// Returns true when the self-score section was replaced.
    pub async fn render_self(&self, category: DeviceCategory) -> bool {
        let username = match self.repository.username().await {
            Ok(Some(username)) => username,
            Ok(None) => return false,
            Err(e) => {
                error!("Unable to read username for score lookup: {}", e);
                return false;
            }
        };

        match self.scores.user_score(&username, category).await {
            Ok(entry) => {
                self.board.replace_self_score(ScoreCard::from(&entry));
                true
            }
            Err(e) => {
                error!("Unable to fetch {} score for {}: {}", category, username, e);
                false
            }
        }
    }

    /// Returns true when the top-scores section was replaced.
    pub async fn render_top(&self, category: DeviceCategory) -> bool {
        match self.scores.top_scores(category, self.top_limit).await {
            Ok(entries) => {
                let cards = entries.iter().map(ScoreCard::from).collect();
                self.board.replace_top_scores(cards);
                true
            }
            Err(e) => {
                error!("Unable to fetch {} top scores: {}", category, e);
                false
            }
        }
    }
}
