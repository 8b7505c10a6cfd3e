//! Event domain — Docker engine event streaming.

use super::client::{DockerClient, DockerError};
use futures_util::stream::StreamExt;

impl DockerClient {
    /// Stream container-scoped Docker engine events, starting from `since`
    /// (unix seconds) so events emitted while bootstrap runs are replayed.
    pub fn stream_container_events(
        &self,
        since: i64,
    ) -> impl futures_util::Stream<Item = Result<bollard::models::EventMessage, DockerError>> + '_
    {
        use bollard::query_parameters::EventsOptionsBuilder;
        use std::collections::HashMap;

        let mut filters = HashMap::new();
        filters.insert("type", vec!["container"]);

        let since_str = since.to_string();
        let options = EventsOptionsBuilder::default()
            .filters(&filters)
            .since(&since_str)
            .build();

        self.client
            .events(Some(options))
            .map(|r| r.map_err(DockerError::from))
    }
}
