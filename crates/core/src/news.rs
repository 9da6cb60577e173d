//! Navigation links between news articles.

use rand::Rng;

/// Neighbour and random links for one news article.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewsNavigation {
    /// Index of the previous article in the ordered list, if any.
    pub prev: Option<usize>,
    /// Index of the next article, if any.
    pub next: Option<usize>,
    /// Index of a random article to suggest. Points at the current article
    /// when there are too few others to choose from.
    pub random: usize,
}

/// Minimum list size before a random suggestion can differ from the
/// current article and its neighbours.
const MIN_NEWS_FOR_RANDOM: usize = 4;

/// Compute navigation for the article at `current` in a list of `total`
/// articles ordered by creation.
///
/// Returns `None` when `current` is out of bounds.
pub fn navigation(total: usize, current: usize, rng: &mut impl Rng) -> Option<NewsNavigation> {
    if current >= total {
        return None;
    }

    let prev = current.checked_sub(1);
    let next = (current + 1 < total).then_some(current + 1);

    let random = if total >= MIN_NEWS_FOR_RANDOM {
        let candidates: Vec<usize> = (0..total)
            .filter(|&i| i != current && Some(i) != prev && Some(i) != next)
            .collect();
        candidates[rng.random_range(0..candidates.len())]
    } else {
        current
    };

    Some(NewsNavigation { prev, next, random })
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    #[test]
    fn out_of_bounds_is_none() {
        assert_eq!(navigation(2, 2, &mut rand::rng()), None);
        assert_eq!(navigation(0, 0, &mut rand::rng()), None);
    }

    #[test]
    fn four_articles_pick_the_only_non_neighbour() {
        let nav = navigation(4, 1, &mut rand::rng()).unwrap();
        assert_eq!(nav.prev, Some(0));
        assert_eq!(nav.next, Some(2));
        assert_eq!(nav.random, 3);
    }

    #[test]
    fn few_articles_suggest_current() {
        assert_matches!(
            navigation(3, 0, &mut rand::rng()),
            Some(NewsNavigation {
                prev: None,
                next: Some(1),
                random: 0
            })
        );
    }

    #[test]
    fn random_never_hits_current_or_neighbours() {
        let mut rng = rand::rng();
        for _ in 0..50 {
            let nav = navigation(10, 5, &mut rng).unwrap();
            assert!(![4, 5, 6].contains(&nav.random));
        }
    }

    #[test]
    fn last_article_has_no_next() {
        let nav = navigation(5, 4, &mut rand::rng()).unwrap();
        assert_eq!(nav.next, None);
        assert_eq!(nav.prev, Some(3));
        assert!(nav.random < 3);
    }
}
