//! Snapshot delivery - attach the artifact, then always discard it

use std::future::Future;
use std::path::PathBuf;
use tracing::debug;

/// Send the artifact, then remove it regardless of the send result.
///
/// The artifact is a scoped temporary, not a cache entry: removal runs on
/// every exit path, a removal failure is swallowed, and the send result is
/// returned untouched after cleanup.
pub async fn deliver<F, Fut, E>(path: PathBuf, send: F) -> Result<(), E>
where
    F: FnOnce(PathBuf) -> Fut,
    Fut: Future<Output = Result<(), E>>,
{
    let result = send(path.clone()).await;

    if let Err(e) = tokio::fs::remove_file(&path).await {
        debug!("snapshot cleanup skipped for {}: {}", path.display(), e);
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    fn artifact_in(dir: &tempfile::TempDir) -> PathBuf {
        let path = dir.path().join("snapshot_20260823_120000.jpg");
        std::fs::write(&path, b"jpeg").unwrap();
        path
    }

    #[tokio::test]
    async fn test_artifact_removed_after_successful_send() {
        let dir = tempfile::tempdir().unwrap();
        let path = artifact_in(&dir);

        let result: Result<(), String> = deliver(path.clone(), |p| async move {
            assert!(p.exists());
            Ok(())
        })
        .await;

        assert!(result.is_ok());
        assert!(!path.exists());
    }

    #[tokio::test]
    async fn test_artifact_removed_after_failed_send() {
        let dir = tempfile::tempdir().unwrap();
        let path = artifact_in(&dir);

        let result: Result<(), String> =
            deliver(path.clone(), |_| async { Err("network down".into()) }).await;

        assert_eq!(result.unwrap_err(), "network down");
        assert!(!path.exists());
    }

    #[tokio::test]
    async fn test_missing_artifact_on_cleanup_is_swallowed() {
        let dir = tempfile::tempdir().unwrap();
        let path = artifact_in(&dir);

        // The send itself consumes the file; cleanup must not surface that
        let result: Result<(), String> = deliver(path.clone(), |p| async move {
            std::fs::remove_file(&p).unwrap();
            Ok(())
        })
        .await;

        assert!(result.is_ok());
        assert!(!path.exists());
    }
}
