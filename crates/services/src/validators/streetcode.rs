//! Streetcode create/update validators.
//!
//! The field rules live in `streetcode_core::validation`; these add the
//! checks that need the repositories.

use async_trait::async_trait;
use streetcode_core::types::DbId;
use streetcode_core::validation::streetcode::{
    validate_streetcode_fields, MSG_IMAGES_MISSING, MSG_IMAGES_REQUIRED, MSG_INDEX_UNIQUE,
};
use streetcode_core::validation::tag::validate_tag_title;
use streetcode_core::validation::Violations;

use crate::context::AppContext;
use crate::dispatch::Validator;
use crate::dto::streetcode::StreetcodeCreateUpdateDto;
use crate::error::ServiceResult;
use crate::requests::streetcode::{CreateStreetcode, UpdateStreetcode};

/// Flag the index if another streetcode (other than `own_id`) holds it.
async fn check_index_unique(
    ctx: &AppContext,
    index: i32,
    own_id: Option<DbId>,
    v: &mut Violations,
) -> ServiceResult<()> {
    if let Some(existing) = ctx.repos.streetcodes().find_by_index(index).await? {
        if Some(existing.id) != own_id {
            v.push("index", "unique", MSG_INDEX_UNIQUE);
        }
    }
    Ok(())
}

/// One violation per referenced image id that has no row.
async fn check_images_exist(
    ctx: &AppContext,
    dto: &StreetcodeCreateUpdateDto,
    v: &mut Violations,
) -> ServiceResult<()> {
    let ids = dto.image_ids();
    if ids.is_empty() {
        return Ok(());
    }
    let existing = ctx.repos.images().find_existing_ids(&ids).await?;
    for id in ids.iter().filter(|id| !existing.contains(id)) {
        tracing::debug!(image_id = id, "Referenced image does not exist");
        v.push("images_details", "exists", MSG_IMAGES_MISSING);
    }
    Ok(())
}

pub struct CreateStreetcodeValidator;

#[async_trait]
impl Validator<CreateStreetcode> for CreateStreetcodeValidator {
    async fn validate(
        &self,
        request: &CreateStreetcode,
        ctx: &AppContext,
    ) -> ServiceResult<Violations> {
        let dto = &request.streetcode.base;
        let mut v = validate_streetcode_fields(&dto.fields());

        check_index_unique(ctx, dto.index, None, &mut v).await?;

        if dto.images_details.is_empty() {
            v.push("images_details", "required", MSG_IMAGES_REQUIRED);
        }
        check_images_exist(ctx, dto, &mut v).await?;

        Ok(v)
    }
}

pub struct UpdateStreetcodeValidator;

#[async_trait]
impl Validator<UpdateStreetcode> for UpdateStreetcodeValidator {
    async fn validate(
        &self,
        request: &UpdateStreetcode,
        ctx: &AppContext,
    ) -> ServiceResult<Violations> {
        let dto = &request.streetcode.base;
        let mut v = validate_streetcode_fields(&dto.fields());

        check_index_unique(ctx, dto.index, Some(request.streetcode.id), &mut v).await?;
        check_images_exist(ctx, dto, &mut v).await?;

        for tag in &dto.tags {
            v.extend(validate_tag_title(Some(&tag.title)));
        }

        Ok(v)
    }
}
