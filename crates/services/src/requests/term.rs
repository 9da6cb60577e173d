use async_trait::async_trait;
use streetcode_core::error::CoreError;
use streetcode_core::types::DbId;

use crate::context::AppContext;
use crate::dispatch::Request;
use crate::dto::term::{RelatedTermDto, TermDto};
use crate::error::{not_found, persistence, ServiceResult, WriteResultExt};

pub struct GetAllTerms;

#[async_trait]
impl Request for GetAllTerms {
    type Response = Vec<TermDto>;

    async fn handle(self, ctx: &AppContext) -> ServiceResult<Vec<TermDto>> {
        let terms = ctx.repos.terms().list_terms().await?;
        Ok(terms.into_iter().map(TermDto::from).collect())
    }
}

pub struct CreateRelatedTerm {
    pub related: RelatedTermDto,
}

#[async_trait]
impl Request for CreateRelatedTerm {
    type Response = RelatedTermDto;

    async fn handle(self, ctx: &AppContext) -> ServiceResult<RelatedTermDto> {
        let RelatedTermDto { term_id, word, .. } = self.related;
        let repo = ctx.repos.terms();

        if repo.find_related(term_id, &word).await?.is_some() {
            tracing::error!(term_id, word = %word, "Related word already exists");
            return Err(CoreError::Validation("Слово з цим визначенням уже існує".into()).into());
        }

        let created = repo
            .create_related(term_id, &word)
            .await
            .or_persistence("Cannot save changes in the database after related word creation!")?;

        tracing::info!(related_term_id = created.id, term_id, "Related term created");
        Ok(created.into())
    }
}

pub struct GetAllRelatedTermsByTermId {
    pub term_id: DbId,
}

#[async_trait]
impl Request for GetAllRelatedTermsByTermId {
    type Response = Vec<RelatedTermDto>;

    async fn handle(self, ctx: &AppContext) -> ServiceResult<Vec<RelatedTermDto>> {
        let related = ctx.repos.terms().list_related(self.term_id).await?;
        Ok(related.into_iter().map(RelatedTermDto::from).collect())
    }
}

pub struct DeleteRelatedTerm {
    pub word: String,
}

#[async_trait]
impl Request for DeleteRelatedTerm {
    type Response = RelatedTermDto;

    async fn handle(self, ctx: &AppContext) -> ServiceResult<RelatedTermDto> {
        let repo = ctx.repos.terms();
        let Some(related) = repo.find_related_by_word(&self.word).await? else {
            return Err(not_found(format!(
                "Cannot find a related term: {}",
                self.word
            )));
        };

        if repo.delete_related(related.id).await? == 0 {
            return Err(persistence("Failed to delete a related term"));
        }

        tracing::info!(related_term_id = related.id, "Related term deleted");
        Ok(related.into())
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use streetcode_db::models::term::Term;

    use super::*;
    use crate::error::ServiceError;
    use crate::test_support::memory_context;

    #[tokio::test]
    async fn related_word_is_unique_per_term() {
        let (ctx, repos, _) = memory_context();
        let term_id = repos
            .seed(|t| {
                let id = t.next_id();
                t.terms.push(Term {
                    id,
                    title: "Гетьман".into(),
                    description: "Голова держави".into(),
                });
                id
            })
            .await;
        let body = || RelatedTermDto {
            id: 0,
            term_id,
            word: "гетьмана".into(),
        };

        let created = CreateRelatedTerm { related: body() }.handle(&ctx).await.unwrap();
        assert_eq!(created.term_id, term_id);

        assert_matches!(
            CreateRelatedTerm { related: body() }.handle(&ctx).await,
            Err(ServiceError::Core(CoreError::Validation(msg)))
                if msg == "Слово з цим визначенням уже існує"
        );

        let listed = GetAllRelatedTermsByTermId { term_id }.handle(&ctx).await.unwrap();
        assert_eq!(listed, vec![created]);
    }

    #[tokio::test]
    async fn delete_by_word() {
        let (ctx, _, _) = memory_context();
        let created = CreateRelatedTerm {
            related: RelatedTermDto {
                id: 0,
                term_id: 1,
                word: "кобза".into(),
            },
        }
        .handle(&ctx)
        .await
        .unwrap();

        let deleted = DeleteRelatedTerm { word: "кобза".into() }.handle(&ctx).await.unwrap();
        assert_eq!(deleted.id, created.id);

        assert_matches!(
            DeleteRelatedTerm { word: "кобза".into() }.handle(&ctx).await,
            Err(ServiceError::Core(CoreError::NotFound(msg)))
                if msg == "Cannot find a related term: кобза"
        );
    }
}
