//! Term tagging for streetcode texts.

use std::collections::HashMap;

use streetcode_core::term_markup::{tag_terms, TermDefinition};

use crate::context::AppContext;
use crate::error::ServiceResult;

/// Wrap every known term and related word in `text` in popover markup.
///
/// Term titles come first in the lookup so a related word that happens to
/// equal another term's title resolves to that term.
pub async fn add_term_tags(ctx: &AppContext, text: &str) -> ServiceResult<String> {
    let terms = ctx.repos.terms().list_terms().await?;
    let related = ctx.repos.terms().list_all_related().await?;

    let descriptions: HashMap<_, _> = terms.iter().map(|t| (t.id, t.description.as_str())).collect();

    let mut definitions: Vec<TermDefinition> = terms
        .iter()
        .map(|t| TermDefinition {
            term_id: t.id,
            word: t.title.clone(),
            description: t.description.clone(),
        })
        .collect();
    definitions.extend(related.iter().filter_map(|r| {
        descriptions.get(&r.term_id).map(|description| TermDefinition {
            term_id: r.term_id,
            word: r.word.clone(),
            description: description.to_string(),
        })
    }));

    tracing::debug!(definitions = definitions.len(), "Tagging terms in text");
    Ok(tag_terms(text, &definitions))
}
