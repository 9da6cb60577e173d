use async_trait::async_trait;
use streetcode_core::validation::news::validate_news_fields;
use streetcode_core::validation::Violations;

use crate::context::AppContext;
use crate::dispatch::Validator;
use crate::error::ServiceResult;
use crate::requests::news::{CreateNews, UpdateNews};

pub struct CreateNewsValidator;

#[async_trait]
impl Validator<CreateNews> for CreateNewsValidator {
    async fn validate(&self, request: &CreateNews, _ctx: &AppContext) -> ServiceResult<Violations> {
        Ok(validate_news_fields(&request.news.fields()))
    }
}

pub struct UpdateNewsValidator;

#[async_trait]
impl Validator<UpdateNews> for UpdateNewsValidator {
    async fn validate(&self, request: &UpdateNews, _ctx: &AppContext) -> ServiceResult<Violations> {
        Ok(validate_news_fields(&request.news.fields()))
    }
}
