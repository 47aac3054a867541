//! Upload-then-insert support shared by the content creation handlers.
//!
//! The flow is always: upload the collected image parts to the entity's
//! bucket, insert one row referencing the public URLs, and on a failed
//! insert delete the just-uploaded objects again.

use chapter_storage::{object_key, StorageClient};

use crate::error::AppError;
use crate::multipart::FilePart;

/// An object uploaded to storage during a create request.
#[derive(Debug, Clone)]
pub struct UploadedObject {
    pub key: String,
    pub url: String,
}

/// Upload image parts to `bucket`, returning the object keys and their
/// public URLs in upload order.
pub async fn upload_images(
    storage: &StorageClient,
    bucket: &str,
    files: &[FilePart],
) -> Result<Vec<UploadedObject>, AppError> {
    let mut uploaded = Vec::with_capacity(files.len());
    for file in files {
        let key = object_key(&file.filename);
        storage
            .upload(bucket, &key, &file.content_type, file.data.clone())
            .await?;
        let url = storage.public_url(bucket, &key);
        uploaded.push(UploadedObject { key, url });
    }
    Ok(uploaded)
}

/// The public URLs of a batch of uploads, for the insert DTO.
pub fn urls(uploaded: &[UploadedObject]) -> Vec<String> {
    uploaded.iter().map(|obj| obj.url.clone()).collect()
}

/// Best-effort removal of objects after a failed insert. Failures are
/// logged and swallowed.
pub async fn rollback_uploads(storage: &StorageClient, bucket: &str, uploaded: &[UploadedObject]) {
    for obj in uploaded {
        if let Err(err) = storage.delete(bucket, &obj.key).await {
            tracing::warn!(bucket, key = %obj.key, error = %err, "Failed to remove orphaned upload");
        }
    }
}

/// Best-effort removal of the objects behind a deleted row's public
/// URLs. URLs that do not belong to `bucket` are skipped.
pub async fn remove_objects(storage: &StorageClient, bucket: &str, urls: &[String]) {
    for url in urls {
        let Some(key) = storage.key_from_public_url(bucket, url) else {
            continue;
        };
        if let Err(err) = storage.delete(bucket, key).await {
            tracing::warn!(bucket, key, error = %err, "Failed to delete stored object");
        }
    }
}
