use std::collections::HashSet;

use async_trait::async_trait;
use streetcode_core::paging::{page, page_count};
use streetcode_core::types::DbId;
use streetcode_db::models::toponym::Toponym;

use crate::context::AppContext;
use crate::dispatch::Request;
use crate::dto::toponym::{ToponymDto, ToponymPageDto};
use crate::error::{not_found, ServiceResult};

/// Keep the first row for every street name.
fn distinct_by_street(rows: Vec<Toponym>) -> Vec<ToponymDto> {
    let mut seen = HashSet::new();
    rows.into_iter()
        .filter(|t| seen.insert(t.street_name.clone()))
        .map(ToponymDto::from)
        .collect()
}

/// Paged toponym listing. `title` filters street names case-insensitively;
/// `page` is 1-based and `amount` is the page size.
pub struct GetAllToponyms {
    pub title: Option<String>,
    pub page: Option<usize>,
    pub amount: Option<usize>,
}

#[async_trait]
impl Request for GetAllToponyms {
    type Response = ToponymPageDto;

    async fn handle(self, ctx: &AppContext) -> ServiceResult<ToponymPageDto> {
        let title = self.title.as_deref().filter(|t| !t.is_empty());
        let rows = ctx.repos.toponyms().list_all(title).await?;
        let distinct = distinct_by_street(rows);

        Ok(ToponymPageDto {
            pages: page_count(distinct.len(), self.amount),
            toponyms: page(&distinct, self.page, self.amount),
        })
    }
}

pub struct GetToponymById {
    pub id: DbId,
}

#[async_trait]
impl Request for GetToponymById {
    type Response = ToponymDto;

    async fn handle(self, ctx: &AppContext) -> ServiceResult<ToponymDto> {
        match ctx.repos.toponyms().find_by_id(self.id).await? {
            Some(toponym) => Ok(toponym.into()),
            None => Err(not_found(format!(
                "Cannot find any toponym with corresponding id: {}",
                self.id
            ))),
        }
    }
}

pub struct GetToponymsByStreetcodeId {
    pub streetcode_id: DbId,
}

#[async_trait]
impl Request for GetToponymsByStreetcodeId {
    type Response = Vec<ToponymDto>;

    async fn handle(self, ctx: &AppContext) -> ServiceResult<Vec<ToponymDto>> {
        let rows = ctx.repos.toponyms().list_by_streetcode(self.streetcode_id).await?;
        Ok(distinct_by_street(rows))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{memory_context, seed_streetcode};

    fn toponym(id: DbId, oblast: &str, street_name: &str) -> Toponym {
        Toponym {
            id,
            oblast: oblast.into(),
            adminregion_old: None,
            adminregion_new: None,
            gromada: None,
            community: None,
            street_name: street_name.into(),
            street_type: Some("вулиця".into()),
        }
    }

    #[tokio::test]
    async fn listing_dedups_filters_and_pages() {
        let (ctx, repos, _) = memory_context();
        repos
            .seed(|t| {
                for (oblast, street) in [
                    ("Lviv", "Franka"),
                    ("Kyiv", "Franka"),
                    ("Lviv", "Shevchenka"),
                    ("Odesa", "Ivana Franka"),
                ] {
                    let id = t.next_id();
                    t.toponyms.push(toponym(id, oblast, street));
                }
            })
            .await;

        let first = GetAllToponyms {
            title: Some("FRANKA".into()),
            page: Some(1),
            amount: Some(1),
        }
        .handle(&ctx)
        .await
        .unwrap();
        assert_eq!(first.pages, 2);
        assert_eq!(first.toponyms.len(), 1);
        assert_eq!(first.toponyms[0].street_name, "Franka");
        assert_eq!(first.toponyms[0].oblast, "Lviv");

        let all = GetAllToponyms {
            title: None,
            page: None,
            amount: None,
        }
        .handle(&ctx)
        .await
        .unwrap();
        assert_eq!(all.pages, 1);
        let streets: Vec<&str> = all.toponyms.iter().map(|t| t.street_name.as_str()).collect();
        assert_eq!(streets, vec!["Franka", "Ivana Franka", "Shevchenka"]);
    }

    #[tokio::test]
    async fn streetcode_toponyms_are_distinct_by_street() {
        let (ctx, repos, _) = memory_context();
        let streetcode = seed_streetcode(&repos, 1, "Ivan Franko", true).await;
        repos
            .seed(|t| {
                for oblast in ["Lviv", "Ternopil"] {
                    let id = t.next_id();
                    t.toponyms.push(toponym(id, oblast, "Franka"));
                    t.streetcode_toponyms.push((streetcode.id, id));
                }
            })
            .await;

        let rows = GetToponymsByStreetcodeId {
            streetcode_id: streetcode.id,
        }
        .handle(&ctx)
        .await
        .unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].oblast, "Lviv");
    }
}
