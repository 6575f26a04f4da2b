//! Wiring from configuration to a ready-to-use widget.

use crate::{
    DEVICE_CATEGORY_KEY, Leaderboard, PageHost, Result as WidgetErrorResult, ScoreSource,
    SessionEndpoint, SessionFacade, SessionMarkers,
};

use lb_client::{IdentityClient, ScoreClient};
use lb_config::Config;
use lb_core::DeviceCategory;
use lb_db::{CredentialRepository, StoreFactory};

use std::sync::Arc;

use log::info;

pub struct Widget {
    repository: Arc<CredentialRepository>,
    session: SessionFacade,
    leaderboard: Leaderboard,
    markers: Arc<dyn SessionMarkers>,
}

impl Widget {
    /// Build the widget against the HTTP endpoints named in `config`.
    ///
    /// The configuration is validated first. The store is not opened here;
    /// the first operation opens it.
    pub fn from_config(config: &Config, host: PageHost) -> WidgetErrorResult<Self> {
        config.validate()?;

        let factory = StoreFactory::new(config.database_path()?)
            .with_target_version(config.database.schema_version)
            .with_busy_timeout(config.busy_timeout());

        let scores = ScoreClient::new(&config.endpoints.scores_url)?;
        let identity = IdentityClient::new(&config.endpoints.auth_url)?;

        Ok(Self::new(
            Arc::new(CredentialRepository::new(factory)),
            Arc::new(scores),
            Arc::new(identity),
            config.endpoints.top_scores_limit,
            host,
        ))
    }

    pub fn new(
        repository: Arc<CredentialRepository>,
        scores: Arc<dyn ScoreSource>,
        endpoint: Arc<dyn SessionEndpoint>,
        top_limit: u32,
        host: PageHost,
    ) -> Self {
        let session = SessionFacade::new(
            Arc::clone(&repository),
            endpoint,
            Arc::clone(&host.markers),
            host.navigator,
            host.notifier,
        );
        let leaderboard = Leaderboard::new(Arc::clone(&repository), scores, host.board, top_limit);

        Self {
            repository,
            session,
            leaderboard,
            markers: host.markers,
        }
    }

    pub fn repository(&self) -> &CredentialRepository {
        &self.repository
    }

    pub fn session(&self) -> &SessionFacade {
        &self.session
    }

    pub fn leaderboard(&self) -> &Leaderboard {
        &self.leaderboard
    }

    pub fn category(&self) -> DeviceCategory {
        self.markers.device_category()
    }

    /// Render the category the player last chose.
    pub async fn load(&self) -> DeviceCategory {
        let category = self.category();
        info!("Loading {} leaderboard", category);
        self.leaderboard.render(category).await;
        category
    }

    /// Switch to the other category, remember it and render it.
    pub async fn toggle_category(&self) -> DeviceCategory {
        let category = self.category().toggled();
        self.markers.set(DEVICE_CATEGORY_KEY, category.as_str());
        self.leaderboard.render(category).await;
        category
    }
}
