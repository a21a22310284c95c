//! Listing filter state and its canonical query-string codec.
//!
//! The query string is the interchange format between rendered pages and
//! the listing endpoint, so parse and serialize live next to each other and
//! obey one law: parsing a serialized state yields the same state. Parsing
//! is lenient (unknown keys and malformed values are ignored, never
//! errors); serialization omits unset fields, empty collections and the
//! default sort so untouched filters produce an empty string.

use serde::{Deserialize, Serialize};

use crate::lang::Language;
use crate::page::Pagination;
use crate::types::{Difficulty, Season};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortBy {
    /// Most recently created first. The default ordering.
    #[default]
    Newest,
    /// Most viewed first.
    Popular,
    /// Best rated first.
    Rating,
    /// Shortest total time first.
    Quickest,
}

impl SortBy {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortBy::Newest => "newest",
            SortBy::Popular => "popular",
            SortBy::Rating => "rating",
            SortBy::Quickest => "quickest",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "newest" => Some(SortBy::Newest),
            "popular" => Some(SortBy::Popular),
            "rating" => Some(SortBy::Rating),
            "quickest" => Some(SortBy::Quickest),
            _ => None,
        }
    }
}

/// Advisory listing filters. Category and tag ids stay opaque strings
/// here; the store decides what an id that matches nothing means (namely:
/// nothing, not an error).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecipeFilters {
    pub search: Option<String>,
    pub difficulty: Option<Difficulty>,
    pub min_time: Option<i32>,
    pub max_time: Option<i32>,
    pub season: Option<Season>,
    pub categories: Vec<String>,
    pub tags: Vec<String>,
    pub featured: Option<bool>,
    pub min_rating: Option<f32>,
    pub sort: SortBy,
}

impl RecipeFilters {
    /// Parse filters out of a raw query string. Keys outside the filter
    /// vocabulary are ignored so the same string can carry paging and
    /// language parameters.
    pub fn from_query(query: &str) -> RecipeFilters {
        let mut f = RecipeFilters::default();
        for (key, value) in form_urlencoded::parse(query.as_bytes()) {
            if value.is_empty() {
                continue;
            }
            match key.as_ref() {
                "search" => f.search = Some(value.into_owned()),
                "difficulty" => f.difficulty = Difficulty::from_str(&value).or(f.difficulty),
                "minTime" => f.min_time = value.parse().ok().or(f.min_time),
                "maxTime" => f.max_time = value.parse().ok().or(f.max_time),
                "season" => f.season = Season::from_str(&value).or(f.season),
                "category" | "categories" => f.categories.push(value.into_owned()),
                "tag" | "tags" => f.tags.push(value.into_owned()),
                "featured" => f.featured = value.parse().ok().or(f.featured),
                "sort" => f.sort = SortBy::from_str(&value).unwrap_or(f.sort),
                "rating" => {
                    f.min_rating = value
                        .parse::<f32>()
                        .ok()
                        .filter(|r| (0.0..=5.0).contains(r))
                        .or(f.min_rating)
                }
                _ => {}
            }
        }
        f
    }

    /// Serialize to the canonical query string. Output is deterministic:
    /// fixed key order, repeated `category`/`tag` keys for collections.
    pub fn to_query(&self) -> String {
        let mut q = form_urlencoded::Serializer::new(String::new());
        if let Some(search) = self.search.as_deref().filter(|s| !s.is_empty()) {
            q.append_pair("search", search);
        }
        if let Some(difficulty) = self.difficulty {
            q.append_pair("difficulty", difficulty.as_str());
        }
        if let Some(min) = self.min_time {
            q.append_pair("minTime", &min.to_string());
        }
        if let Some(max) = self.max_time {
            q.append_pair("maxTime", &max.to_string());
        }
        if let Some(season) = self.season {
            q.append_pair("season", season.as_str());
        }
        for id in &self.categories {
            q.append_pair("category", id);
        }
        for id in &self.tags {
            q.append_pair("tag", id);
        }
        if let Some(featured) = self.featured {
            q.append_pair("featured", if featured { "true" } else { "false" });
        }
        if self.sort != SortBy::default() {
            q.append_pair("sort", self.sort.as_str());
        }
        if let Some(rating) = self.min_rating {
            q.append_pair("rating", &rating.to_string());
        }
        q.finish()
    }
}

/// A complete listing request: display language, page window and filters,
/// all read from one query string.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListingQuery {
    pub lang: Language,
    pub pagination: Pagination,
    pub filters: RecipeFilters,
}

impl ListingQuery {
    pub fn from_query(query: &str) -> ListingQuery {
        let mut lang = None;
        let mut page = None;
        let mut limit = None;
        for (key, value) in form_urlencoded::parse(query.as_bytes()) {
            match key.as_ref() {
                "lang" => lang = Language::from_str(&value).or(lang),
                "page" => page = value.parse().ok().or(page),
                "limit" => limit = value.parse().ok().or(limit),
                _ => {}
            }
        }
        ListingQuery {
            lang: lang.unwrap_or_default(),
            pagination: Pagination::new(page, limit),
            filters: RecipeFilters::from_query(query),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip() {
        let f = RecipeFilters {
            search: Some("tofu".to_string()),
            difficulty: Some(Difficulty::Easy),
            tags: vec!["3".to_string(), "5".to_string()],
            ..RecipeFilters::default()
        };
        assert_eq!(RecipeFilters::from_query(&f.to_query()), f);
    }

    #[test]
    fn test_serialization_is_deterministic() {
        let f = RecipeFilters {
            search: Some("tofu".to_string()),
            difficulty: Some(Difficulty::Easy),
            tags: vec!["3".to_string(), "5".to_string()],
            ..RecipeFilters::default()
        };
        assert_eq!(f.to_query(), "search=tofu&difficulty=easy&tag=3&tag=5");
    }

    #[test]
    fn test_default_state_serializes_to_empty_string() {
        assert_eq!(RecipeFilters::default().to_query(), "");
    }

    #[test]
    fn test_default_sort_is_omitted_others_kept() {
        let mut f = RecipeFilters::default();
        assert!(!f.to_query().contains("sort"));
        f.sort = SortBy::Quickest;
        assert_eq!(f.to_query(), "sort=quickest");
        assert_eq!(RecipeFilters::from_query("sort=quickest").sort, SortBy::Quickest);
    }

    #[test]
    fn test_malformed_values_are_ignored() {
        let f = RecipeFilters::from_query("maxTime=banana&difficulty=easy&rating=abc");
        assert_eq!(f.max_time, None);
        assert_eq!(f.min_rating, None);
        assert_eq!(f.difficulty, Some(Difficulty::Easy));
    }

    #[test]
    fn test_unknown_sort_falls_back_to_newest() {
        assert_eq!(RecipeFilters::from_query("sort=alphabetical").sort, SortBy::Newest);
    }

    #[test]
    fn test_out_of_range_rating_is_ignored() {
        assert_eq!(RecipeFilters::from_query("rating=7.5").min_rating, None);
        assert_eq!(RecipeFilters::from_query("rating=4.5").min_rating, Some(4.5));
    }

    #[test]
    fn test_empty_values_count_as_unset() {
        let f = RecipeFilters::from_query("search=&difficulty=");
        assert_eq!(f, RecipeFilters::default());
    }

    #[test]
    fn test_plural_aliases_are_accepted() {
        let f = RecipeFilters::from_query("categories=a&categories=b&tags=x");
        assert_eq!(f.categories, vec!["a".to_string(), "b".to_string()]);
        assert_eq!(f.tags, vec!["x".to_string()]);
    }

    #[test]
    fn test_search_text_is_percent_encoded() {
        let f = RecipeFilters {
            search: Some("soupe à l'oignon".to_string()),
            ..RecipeFilters::default()
        };
        let q = f.to_query();
        assert!(q.starts_with("search=soupe+%C3%A0"));
        assert_eq!(RecipeFilters::from_query(&q), f);
    }

    #[test]
    fn test_featured_round_trips() {
        let f = RecipeFilters { featured: Some(true), ..RecipeFilters::default() };
        assert_eq!(f.to_query(), "featured=true");
        assert_eq!(RecipeFilters::from_query("featured=true").featured, Some(true));
        assert_eq!(RecipeFilters::from_query("featured=maybe").featured, None);
    }

    #[test]
    fn test_unknown_keys_are_ignored() {
        let f = RecipeFilters::from_query("utm_source=newsletter&search=pie");
        assert_eq!(f.search.as_deref(), Some("pie"));
        assert_eq!(RecipeFilters { search: f.search.clone(), ..Default::default() }, f);
    }

    #[test]
    fn test_listing_query_reads_lang_and_window() {
        let q = ListingQuery::from_query("lang=fr&page=2&limit=24&search=tarte");
        assert_eq!(q.lang, Language::Fr);
        assert_eq!(q.pagination.page, 2);
        assert_eq!(q.pagination.limit, 24);
        assert_eq!(q.filters.search.as_deref(), Some("tarte"));
    }

    #[test]
    fn test_listing_query_defaults() {
        let q = ListingQuery::from_query("");
        assert_eq!(q.lang, Language::En);
        assert_eq!(q.pagination, Pagination::default());
        assert_eq!(q.filters, RecipeFilters::default());
    }

    #[test]
    fn test_listing_query_ignores_bad_lang_and_page() {
        let q = ListingQuery::from_query("lang=zz&page=first");
        assert_eq!(q.lang, Language::En);
        assert_eq!(q.pagination.page, 1);
    }
}
