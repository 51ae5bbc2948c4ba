//! Weather announcement use-case
//!
//! Orchestrates the whole run: fetch the observation through the
//! weather port, format the sentence, play it through the announce
//! port. Strictly sequential and fail-fast; a fetch failure means the
//! announce service is never contacted.

use chrono::Local;
use domain::NodeId;
use tracing::{debug, info, instrument};

use crate::{
    error::ApplicationError,
    ports::{AnnouncePort, WeatherPort},
    services::format_announcement,
};

/// Fetches current conditions and announces them on one node
#[derive(Debug)]
pub struct AnnouncementService<W, A> {
    weather: W,
    announcer: A,
    node: NodeId,
}

impl<W, A> AnnouncementService<W, A>
where
    W: WeatherPort,
    A: AnnouncePort,
{
    /// Create a service announcing on the given node
    pub const fn new(weather: W, announcer: A, node: NodeId) -> Self {
        Self {
            weather,
            announcer,
            node,
        }
    }

    /// Fetch and format the announcement without playing it
    ///
    /// Used by the CLI's dry-run mode.
    #[instrument(skip(self))]
    pub async fn preview(&self) -> Result<String, ApplicationError> {
        let observation = self.weather.current_conditions().await?;
        debug!(?observation, "Observation received");

        Ok(format_announcement(&observation, Local::now().time()))
    }

    /// Run the full pipeline: fetch, format, announce
    ///
    /// Returns the announced text on success.
    #[instrument(skip(self), fields(node = %self.node))]
    pub async fn run(&self) -> Result<String, ApplicationError> {
        let text = self.preview().await?;

        self.announcer.announce(&self.node, &text).await?;
        info!(node = %self.node, "Weather announcement sent");

        Ok(text)
    }
}
