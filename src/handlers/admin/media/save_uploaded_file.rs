use std::path::Path;

use crate::error::AppError;

/// Writes an upload under `upload_dir/subdirectory` and returns the
/// root-relative URL it will be served from.
pub async fn save_uploaded_file(
    upload_dir: &Path,
    subdirectory: &str,
    file_name: &str,
    data: &[u8],
) -> Result<String, AppError> {
    use tokio::io::AsyncWriteExt;

    let target_dir = upload_dir.join(subdirectory);

    tokio::fs::create_dir_all(&target_dir).await.map_err(|e| {
        tracing::error!("Failed to create directory {}: {}", target_dir.display(), e);
        AppError::InternalError(anyhow::anyhow!("Failed to create upload directory: {e}"))
    })?;

    let unique_filename = format!("{}_{}", uuid::Uuid::new_v4(), sanitize_file_name(file_name));
    let file_path = target_dir.join(&unique_filename);

    tracing::info!("Saving file to: {}", file_path.display());

    let mut file = tokio::fs::File::create(&file_path).await.map_err(|e| {
        tracing::error!("Failed to create file {}: {}", file_path.display(), e);
        AppError::InternalError(anyhow::anyhow!("Failed to create file: {e}"))
    })?;

    file.write_all(data).await.map_err(|e| {
        tracing::error!("Failed to write file {}: {}", file_path.display(), e);
        AppError::InternalError(anyhow::anyhow!("Failed to write file: {e}"))
    })?;

    file.flush()
        .await
        .map_err(|e| AppError::InternalError(anyhow::anyhow!("Failed to flush file: {e}")))?;

    Ok(format!("/uploads/{subdirectory}/{unique_filename}"))
}

fn sanitize_file_name(file_name: &str) -> String {
    let base = file_name
        .rsplit(['/', '\\'])
        .next()
        .unwrap_or_default();

    let cleaned: String = base
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, '.' | '-' | '_') {
                c
            } else {
                '_'
            }
        })
        .collect();

    let cleaned = cleaned.trim_start_matches('.');
    if cleaned.is_empty() {
        "upload".to_string()
    } else {
        cleaned.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::media::is_valid_video_reference;

    #[test]
    fn strips_directories_and_odd_characters() {
        assert_eq!(sanitize_file_name("../../etc/passwd"), "passwd");
        assert_eq!(sanitize_file_name("C:\\fotos\\palco 1.jpg"), "palco_1.jpg");
        assert_eq!(sanitize_file_name("vídeo.mp4"), "v_deo.mp4");
        assert_eq!(sanitize_file_name(".hidden"), "hidden");
        assert_eq!(sanitize_file_name(""), "upload");
    }

    #[tokio::test]
    async fn saved_file_gets_servable_url() {
        let root = std::env::temp_dir().join(format!("upload-test-{}", uuid::Uuid::new_v4()));

        let url = save_uploaded_file(&root, "videos", "reel final.mp4", b"fake video")
            .await
            .unwrap();

        assert!(url.starts_with("/uploads/videos/"));
        assert!(url.ends_with("_reel_final.mp4"));
        assert!(is_valid_video_reference(&url));

        let stored_name = url.rsplit('/').next().unwrap();
        let contents = tokio::fs::read(root.join("videos").join(stored_name))
            .await
            .unwrap();
        assert_eq!(contents, b"fake video");

        tokio::fs::remove_dir_all(&root).await.unwrap();
    }
}
