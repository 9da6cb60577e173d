use async_trait::async_trait;
use streetcode_core::error::CoreError;
use streetcode_core::types::DbId;

use crate::context::AppContext;
use crate::dispatch::Request;
use crate::dto::content::TextDto;
use crate::error::{not_found, ServiceResult};
use crate::text_service::add_term_tags;

pub struct GetAllTexts;

#[async_trait]
impl Request for GetAllTexts {
    type Response = Vec<TextDto>;

    async fn handle(self, ctx: &AppContext) -> ServiceResult<Vec<TextDto>> {
        let texts = ctx.repos.texts().list_all().await?;
        Ok(texts.into_iter().map(TextDto::from).collect())
    }
}

pub struct GetTextById {
    pub id: DbId,
}

#[async_trait]
impl Request for GetTextById {
    type Response = TextDto;

    async fn handle(self, ctx: &AppContext) -> ServiceResult<TextDto> {
        match ctx.repos.texts().find_by_id(self.id).await? {
            Some(text) => Ok(text.into()),
            None => Err(not_found(format!(
                "Cannot find any text with corresponding id: {}",
                self.id
            ))),
        }
    }
}

/// The streetcode's text with terms tagged, or `None` when the streetcode
/// exists but has no text.
pub struct GetTextByStreetcodeId {
    pub streetcode_id: DbId,
}

#[async_trait]
impl Request for GetTextByStreetcodeId {
    type Response = Option<TextDto>;

    async fn handle(self, ctx: &AppContext) -> ServiceResult<Option<TextDto>> {
        let id = self.streetcode_id;
        let Some(text) = ctx.repos.texts().find_by_streetcode(id).await? else {
            if ctx.repos.streetcodes().find_by_id(id).await?.is_none() {
                tracing::error!(streetcode_id = id, "Streetcode doesn`t exist");
                return Err(CoreError::NotFound(format!(
                    "The streetcode with id {id} doesn`t exist"
                ))
                .into());
            }
            return Ok(None);
        };

        let mut dto = TextDto::from(text);
        if let Some(content) = dto.text_content.as_deref() {
            dto.text_content = Some(add_term_tags(ctx, content).await?);
        }
        Ok(Some(dto))
    }
}

/// Tag terms in an unsaved text so editors can preview the result.
pub struct GetParsedTextForAdminPreview {
    pub text: String,
}

#[async_trait]
impl Request for GetParsedTextForAdminPreview {
    type Response = String;

    async fn handle(self, ctx: &AppContext) -> ServiceResult<String> {
        if self.text.trim().is_empty() {
            tracing::error!("Text was not parsed successfully");
            return Err(CoreError::Validation("Text was not parsed successfully".into()).into());
        }
        add_term_tags(ctx, &self.text).await
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use streetcode_db::models::term::Term;
    use streetcode_db::models::text::Text;

    use super::*;
    use crate::error::ServiceError;
    use crate::test_support::{memory_context, seed_streetcode};

    #[tokio::test]
    async fn text_by_streetcode_is_tagged() {
        let (ctx, repos, _) = memory_context();
        let streetcode = seed_streetcode(&repos, 1, "Taras Shevchenko", true).await;
        repos
            .seed(|t| {
                let id = t.next_id();
                t.terms.push(Term {
                    id,
                    title: "кріпак".into(),
                    description: "Залежний селянин".into(),
                });
                let id = t.next_id();
                t.texts.push(Text {
                    id,
                    streetcode_id: streetcode.id,
                    title: "Життя".into(),
                    text_content: Some("Народився кріпаком, був Кріпак.".into()),
                    additional_text: None,
                });
            })
            .await;

        let dto = GetTextByStreetcodeId {
            streetcode_id: streetcode.id,
        }
        .handle(&ctx)
        .await
        .unwrap()
        .unwrap();
        assert_eq!(
            dto.text_content.as_deref(),
            Some(
                "Народився кріпаком, був \
                 <Popover><Term>Кріпак</Term><Desc>Залежний селянин</Desc></Popover>."
            )
        );
    }

    #[tokio::test]
    async fn existing_streetcode_without_text_is_none() {
        let (ctx, repos, _) = memory_context();
        let streetcode = seed_streetcode(&repos, 1, "Taras Shevchenko", true).await;

        let found = GetTextByStreetcodeId {
            streetcode_id: streetcode.id,
        }
        .handle(&ctx)
        .await
        .unwrap();
        assert!(found.is_none());
    }

    #[tokio::test]
    async fn missing_streetcode_mentions_the_id() {
        let (ctx, _, _) = memory_context();
        assert_matches!(
            GetTextByStreetcodeId { streetcode_id: 31 }.handle(&ctx).await,
            Err(ServiceError::Core(CoreError::NotFound(msg))) if msg.contains("31")
        );
    }

    #[tokio::test]
    async fn missing_text_id_is_not_found() {
        let (ctx, _, _) = memory_context();
        assert_matches!(
            GetTextById { id: 3 }.handle(&ctx).await,
            Err(ServiceError::Core(CoreError::NotFound(msg)))
                if msg == "Cannot find any text with corresponding id: 3"
        );
    }

    #[tokio::test]
    async fn blank_preview_is_rejected() {
        let (ctx, _, _) = memory_context();
        assert_matches!(
            GetParsedTextForAdminPreview { text: "  ".into() }.handle(&ctx).await,
            Err(ServiceError::Core(CoreError::Validation(msg)))
                if msg == "Text was not parsed successfully"
        );
    }
}
