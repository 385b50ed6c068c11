use std::collections::BTreeSet;

use portal_api_types::NewsArticle;

/// `<select>` value of the `All` option. No category is empty, so it can't
/// collide with a named one.
pub const ALL_CATEGORIES_VALUE: &str = "";

/// The active category selection of the news view.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub enum CategoryFilter {
    #[default]
    All,
    Named(String),
}

impl CategoryFilter {
    /// Parses a `<select>` value; a blank value selects everything.
    pub fn from_value(value: &str) -> Self {
        let value = value.trim();
        if value == ALL_CATEGORIES_VALUE {
            CategoryFilter::All
        } else {
            CategoryFilter::Named(value.to_owned())
        }
    }

    pub fn value(&self) -> &str {
        match self {
            CategoryFilter::All => ALL_CATEGORIES_VALUE,
            CategoryFilter::Named(name) => name,
        }
    }

    pub fn label(&self) -> &str {
        match self {
            CategoryFilter::All => "Todas",
            CategoryFilter::Named(name) => name,
        }
    }

    /// Case-insensitive, whitespace-trimmed comparison.
    pub fn matches(&self, category: Option<&str>) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Named(name) => {
                category.is_some_and(|category| same_category(category, name))
            }
        }
    }
}

pub fn same_category(a: &str, b: &str) -> bool {
    a.trim().to_lowercase() == b.trim().to_lowercase()
}

/// `All` followed by the sorted distinct non-empty categories of published
/// articles.
pub fn categories(articles: &[NewsArticle]) -> Vec<CategoryFilter> {
    let named = articles
        .iter()
        .filter(|article| article.published)
        .filter_map(|article| article.category.as_deref())
        .map(str::trim)
        .filter(|category| !category.is_empty())
        .collect::<BTreeSet<_>>();

    std::iter::once(CategoryFilter::All)
        .chain(
            named
                .into_iter()
                .map(|category| CategoryFilter::Named(category.to_owned())),
        )
        .collect()
}

/// What the news view renders for one category selection.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NewsFeed {
    pub featured: Option<NewsArticle>,
    pub grid: Vec<NewsArticle>,
}

impl NewsFeed {
    pub fn is_empty(&self) -> bool {
        self.featured.is_none() && self.grid.is_empty()
    }
}

/// Published articles matching `filter`. The first featured one is pulled
/// out, everything else stays in the grid in backend order.
pub fn news_feed(articles: &[NewsArticle], filter: &CategoryFilter) -> NewsFeed {
    let mut feed = NewsFeed::default();

    for article in articles
        .iter()
        .filter(|article| article.published)
        .filter(|article| filter.matches(article.category.as_deref()))
    {
        if feed.featured.is_none() && article.featured {
            feed.featured = Some(article.clone());
        } else {
            feed.grid.push(article.clone());
        }
    }

    feed
}

#[cfg(test)]
mod tests {
    use portal_api_types::EntityId;

    use super::*;

    fn article(id: i64, category: Option<&str>, published: bool, featured: bool) -> NewsArticle {
        NewsArticle {
            id: EntityId::from(id),
            title: format!("Notícia {id}"),
            content: String::new(),
            summary: None,
            image_url: None,
            author_name: None,
            published,
            featured,
            published_at: None,
            category: category.map(str::to_owned),
            tags: Vec::new(),
        }
    }

    fn ids(articles: &[NewsArticle]) -> Vec<&str> {
        articles.iter().map(|a| a.id.as_str()).collect()
    }

    #[test]
    fn category_match_ignores_case_and_whitespace() {
        let articles = vec![
            article(1, Some("Operações"), true, false),
            article(2, Some("eventos"), true, false),
            article(3, Some(" operações "), true, false),
        ];

        let exact = news_feed(&articles, &CategoryFilter::Named("Operações".to_owned()));
        let fuzzy = news_feed(&articles, &CategoryFilter::Named("  OPERAÇÕES ".to_owned()));

        assert_eq!(exact, fuzzy);
        assert_eq!(ids(&exact.grid), vec!["1", "3"]);
    }

    #[test]
    fn unpublished_never_shown() {
        let articles = vec![
            article(1, Some("Eventos"), false, true),
            article(2, Some("Eventos"), true, false),
            article(3, None, false, false),
        ];

        for filter in [
            CategoryFilter::All,
            CategoryFilter::Named("Eventos".to_owned()),
        ] {
            let feed = news_feed(&articles, &filter);
            assert!(feed.featured.is_none());
            assert_eq!(ids(&feed.grid), vec!["2"]);
        }
    }

    #[test]
    fn featured_is_single_and_not_in_grid() {
        let articles = vec![
            article(1, Some("Eventos"), true, false),
            article(2, Some("Eventos"), true, true),
            article(3, Some("Eventos"), true, true),
        ];

        let feed = news_feed(&articles, &CategoryFilter::All);
        let featured = feed.featured.expect("featured article");
        assert_eq!(featured.id, EntityId::from(2));
        assert!(!feed.grid.iter().any(|a| a.id == featured.id));
        assert_eq!(ids(&feed.grid), vec!["1", "3"]);
    }

    #[test]
    fn featured_follows_filter() {
        let articles = vec![
            article(1, Some("Eventos"), true, true),
            article(2, Some("Treino"), true, false),
        ];

        let feed = news_feed(&articles, &CategoryFilter::Named("treino".to_owned()));
        assert!(feed.featured.is_none());
        assert_eq!(ids(&feed.grid), vec!["2"]);
    }

    #[test]
    fn categories_are_sorted_distinct_and_prefixed() {
        let articles = vec![
            article(1, Some("Treino"), true, false),
            article(2, Some("Eventos "), true, false),
            article(3, Some(""), true, false),
            article(4, Some("Eventos"), true, false),
            article(5, Some("Rascunho"), false, false),
            article(6, None, true, false),
        ];

        assert_eq!(
            categories(&articles),
            vec![
                CategoryFilter::All,
                CategoryFilter::Named("Eventos".to_owned()),
                CategoryFilter::Named("Treino".to_owned()),
            ]
        );
    }

    #[test]
    fn filter_values_round_trip_through_select() {
        assert_eq!(CategoryFilter::from_value(""), CategoryFilter::All);
        assert_eq!(CategoryFilter::from_value("  "), CategoryFilter::All);
        assert_eq!(
            CategoryFilter::from_value(CategoryFilter::All.value()),
            CategoryFilter::All
        );
        let named = CategoryFilter::from_value("Eventos");
        assert_eq!(CategoryFilter::from_value(named.value()), named);
    }

    #[test]
    fn category_named_all_is_not_the_sentinel() {
        let filter = CategoryFilter::from_value("all");
        assert_eq!(filter, CategoryFilter::Named("all".to_owned()));
        assert_eq!(CategoryFilter::from_value(filter.value()), filter);
        assert!(filter.matches(Some("All")));
        assert!(!filter.matches(Some("Eventos")));
    }
}
