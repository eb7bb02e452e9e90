//! Kick endpoint

use async_trait::async_trait;

use crate::ManagerClient;
use crate::error::Result;

/// Anything that can be kicked
#[async_trait]
pub trait KickTarget: Send + Sync {
    async fn kick(&self) -> Result<()>;
}

impl ManagerClient {
    /// Ask the manager to refresh its task download
    ///
    /// `GET /kick`. Any 2xx counts as success; the body is ignored.
    pub async fn kick_downloader(&self) -> Result<()> {
        let url = self.url("kick");
        let response = self.client.get(&url).send().await?;

        self.handle_empty_response(response).await
    }
}

#[async_trait]
impl KickTarget for ManagerClient {
    async fn kick(&self) -> Result<()> {
        self.kick_downloader().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ClientError;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_kick_success() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/kick"))
            .respond_with(ResponseTemplate::new(204))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = ManagerClient::new(mock_server.uri());
        assert!(client.kick().await.is_ok());
    }

    #[tokio::test]
    async fn test_kick_failure() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/kick"))
            .respond_with(ResponseTemplate::new(500).set_body_string("downloader stuck"))
            .mount(&mock_server)
            .await;

        let client = ManagerClient::new(mock_server.uri());
        let err = client.kick().await.unwrap_err();

        assert!(matches!(
            err,
            ClientError::ApiError { status: 500, ref message } if message == "downloader stuck"
        ));
    }
}
