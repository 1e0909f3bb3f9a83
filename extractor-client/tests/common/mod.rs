use extractor_client::config::ApiSettings;
use extractor_client::ExtractorClient;
use wiremock::MockServer;

/// A mock extraction backend plus a client pointed at it.
pub struct TestBackend {
    pub server: MockServer,
    pub client: ExtractorClient,
}

impl TestBackend {
    pub async fn spawn() -> Self {
        let server = MockServer::start().await;
        let client = ExtractorClient::new(ApiSettings {
            base_url: format!("{}/api", server.uri()),
        });
        TestBackend { server, client }
    }
}
