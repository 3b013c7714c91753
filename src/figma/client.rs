use indexmap::IndexMap;
use reqwest::StatusCode;
use tracing::debug;

use crate::error::{ExportError, Result};
use crate::figma::types::{FigmaFile, ImageResponse, NodeWrapper, NodesResponse};

const DEFAULT_BASE_URL: &str = "https://api.figma.com";

/// Client for the Figma REST API subset the pipelines need: the file tree,
/// batched image renders and batched node lookups.
///
/// The access token is passed in explicitly at construction; there is no
/// ambient credential. No retries and no timeouts: a transport failure aborts
/// the run.
pub struct FigmaClient {
    http: reqwest::Client,
    base_url: String,
    token: String,
}

impl FigmaClient {
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: DEFAULT_BASE_URL.to_string(),
            token: token.into(),
        }
    }

    /// Point the client at a different API host. Used by tests.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Fetch the whole file tree, including the component and style
    /// registries.
    pub async fn get_file(&self, file_id: &str) -> Result<FigmaFile> {
        check_file_id(file_id)?;
        let url = format!("{}/v1/files/{}", self.base_url, file_id);
        self.get_json(&url, file_id).await
    }

    /// Fetch rendered image urls for a batch of node ids in one call. A `None`
    /// value means the node could not be rendered.
    pub async fn get_image_urls(
        &self,
        file_id: &str,
        node_ids: &[String],
        format: &str,
    ) -> Result<IndexMap<String, Option<String>>> {
        check_file_id(file_id)?;
        let url = format!(
            "{}/v1/images/{}?ids={}&format={}",
            self.base_url,
            file_id,
            node_ids.join(","),
            format
        );
        let res: ImageResponse = self.get_json(&url, file_id).await?;
        if let Some(err) = res.err {
            return Err(ExportError::Api {
                status: 200,
                message: err,
            });
        }
        Ok(res.images)
    }

    /// Fetch detailed node subtrees for a batch of node ids in one call.
    pub async fn get_file_nodes(
        &self,
        file_id: &str,
        node_ids: &[String],
    ) -> Result<IndexMap<String, NodeWrapper>> {
        check_file_id(file_id)?;
        let url = format!(
            "{}/v1/files/{}/nodes?ids={}",
            self.base_url,
            file_id,
            node_ids.join(",")
        );
        let res: NodesResponse = self.get_json(&url, file_id).await?;
        Ok(res.nodes)
    }

    /// Download the raw bytes behind a rendered image url.
    pub async fn download(&self, url: &str) -> Result<Vec<u8>> {
        debug!("Downloading asset: {}", url);
        let response = self.http.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ExportError::Api {
                status: status.as_u16(),
                message: format!("asset download failed for {}", url),
            });
        }
        Ok(response.bytes().await?.to_vec())
    }

    async fn get_json<T: serde::de::DeserializeOwned>(
        &self,
        url: &str,
        file_id: &str,
    ) -> Result<T> {
        debug!("GET {}", url);
        let response = self
            .http
            .get(url)
            .header("X-Figma-Token", &self.token)
            .send()
            .await?;
        let status = response.status();
        if let Some(err) = error_for_status(status, file_id) {
            return Err(err);
        }
        Ok(response.json::<T>().await?)
    }
}

fn check_file_id(file_id: &str) -> Result<()> {
    if file_id.trim().is_empty() {
        return Err(ExportError::NotFound(
            "no file id configured; set file_id in the plan".to_string(),
        ));
    }
    Ok(())
}

/// Map an API status code onto the error taxonomy. `None` means success.
fn error_for_status(status: StatusCode, file_id: &str) -> Option<ExportError> {
    if status.is_success() {
        return None;
    }
    Some(match status {
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
            ExportError::Authentication("figma rejected the access token".to_string())
        }
        StatusCode::NOT_FOUND => ExportError::NotFound(file_id.to_string()),
        other => ExportError::Api {
            status: other.as_u16(),
            message: format!("unexpected response for file {}", file_id),
        },
    })
}
