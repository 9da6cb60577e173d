use async_trait::async_trait;
use streetcode_core::types::DbId;
use streetcode_db::models::image::Image;

use crate::blob::BlobError;
use crate::context::AppContext;
use crate::dispatch::Request;
use crate::dto::media::ImageDto;
use crate::error::{not_found, ServiceResult};

/// Map an image row and load its payload. Images without a blob name are
/// returned without one.
pub(crate) async fn with_payload(ctx: &AppContext, image: Image) -> ServiceResult<ImageDto> {
    let base64 = match image.blob_name.as_deref() {
        Some(name) if !name.is_empty() => Some(ctx.blobs.find_file_as_base64(name).await?),
        _ => None,
    };
    Ok(ImageDto {
        base64,
        ..ImageDto::from(image)
    })
}

/// Like [`with_payload`], but a missing blob only drops the payload. Used
/// wherever images are embedded in other resources, so one lost file does
/// not fail a whole listing.
pub(crate) async fn with_optional_payload(
    ctx: &AppContext,
    image: Image,
) -> ServiceResult<ImageDto> {
    let base64 = match image.blob_name.as_deref() {
        Some(name) if !name.is_empty() => match ctx.blobs.find_file_as_base64(name).await {
            Ok(payload) => Some(payload),
            Err(BlobError::NotFound(_)) => {
                tracing::warn!(image_id = image.id, blob = %name, "Image blob is missing");
                None
            }
            Err(err) => return Err(err.into()),
        },
        _ => None,
    };
    Ok(ImageDto {
        base64,
        ..ImageDto::from(image)
    })
}

/// Look up an optional image id and load its payload, tolerating a
/// missing blob.
pub(crate) async fn load_optional(
    ctx: &AppContext,
    image_id: Option<DbId>,
) -> ServiceResult<Option<ImageDto>> {
    let Some(id) = image_id else {
        return Ok(None);
    };
    match ctx.repos.images().find_by_id(id).await? {
        Some(image) => Ok(Some(with_optional_payload(ctx, image).await?)),
        None => Ok(None),
    }
}

pub struct GetImageById {
    pub id: DbId,
}

#[async_trait]
impl Request for GetImageById {
    type Response = ImageDto;

    async fn handle(self, ctx: &AppContext) -> ServiceResult<ImageDto> {
        let Some(image) = ctx.repos.images().find_by_id(self.id).await? else {
            return Err(not_found(format!(
                "Cannot find an image with corresponding id: {}",
                self.id
            )));
        };
        with_payload(ctx, image).await
    }
}
