//! Container domain — enumerating running containers for bootstrap.

use super::client::{DockerClient, DockerError};
use super::inventory::ContainerInfo;

use bollard::query_parameters::ListContainersOptions;

impl DockerClient {
    /// List currently-running containers. Stopped containers are skipped;
    /// their labels are only interesting while logs are being produced.
    pub async fn list_containers(&self) -> Result<Vec<ContainerInfo>, DockerError> {
        let options = Some(ListContainersOptions {
            all: false,
            ..Default::default()
        });
        let containers = self.client.list_containers(options).await?;
        Ok(containers.into_iter().map(|c| c.into()).collect())
    }
}
