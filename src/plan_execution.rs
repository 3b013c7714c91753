use tracing::info;

use crate::error::{ExportError, Result};
use crate::figma::FigmaClient;
use crate::pipeline;
use crate::plan::Plan;

/// Load a plan file and run both pipelines sequentially: icons first, then
/// styles. The file tree is fetched once and shared.
///
/// Nothing is written before the document fetch succeeds, so an auth or
/// not-found failure leaves no partial artifacts behind.
pub async fn execute_plan(plan_path: &str, token: String) -> Result<()> {
    info!("Executing plan: {}", plan_path);
    let plan = Plan::from_file(plan_path)?;
    if plan.file_id.trim().is_empty() {
        return Err(ExportError::NotFound(format!(
            "{} has no file_id set",
            plan_path
        )));
    }

    let client = FigmaClient::new(token);
    let file = client.get_file(&plan.file_id).await?;
    info!(
        "Fetched file '{}' with {} components and {} styles",
        file.name,
        file.components.len(),
        file.styles.len()
    );

    pipeline::icons::run(&client, &plan.file_id, &file, &plan.icons).await?;
    pipeline::styles::run(&client, &plan.file_id, &file, &plan.styles).await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn plan_without_file_id_fails_before_any_request() {
        let dir = tempfile::tempdir().unwrap();
        let plan_path = dir.path().join("plan.yaml");
        std::fs::write(&plan_path, "file_id: \"\"\n").unwrap();

        let err = execute_plan(plan_path.to_str().unwrap(), "token".to_string())
            .await
            .unwrap_err();
        assert!(matches!(err, ExportError::NotFound(_)));
    }

    #[tokio::test]
    async fn missing_plan_file_is_an_io_failure() {
        let err = execute_plan("does-not-exist.yaml", "token".to_string())
            .await
            .unwrap_err();
        assert!(matches!(err, ExportError::Io { .. }));
    }
}
