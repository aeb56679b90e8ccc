//! Post list-query engine
//!
//! Turns untyped, partially-missing request query parameters into a
//! normalized, bounded query description, and translates that description
//! into an ordering and a cache key. Malformed values degrade to defaults
//! rather than failing the request; browsing stays resilient where mutation
//! does not.

use serde::Deserialize;

use crate::value_objects::EntityId;

/// First page when none is requested
pub const DEFAULT_PAGE: i64 = 1;
/// Page size when none (or an out-of-range one) is requested
pub const DEFAULT_LIMIT: i64 = 20;
/// Largest accepted page size; values above fall back to the default
pub const MAX_LIMIT: i64 = 100;
/// Longest accepted search term, in characters
pub const MAX_SEARCH_LEN: usize = 200;
/// Longest accepted category slug
pub const MAX_SLUG_LEN: usize = 100;

// ============================================================================
// Sort modes
// ============================================================================

/// Canonical sort modes for the post listing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PostSort {
    #[default]
    Recent,
    Popular,
    Unanswered,
    MostViewed,
    LastReply,
}

impl PostSort {
    /// Resolve raw input through the alias table, case-insensitively.
    /// Unrecognized input falls back to `Recent`.
    pub fn parse(raw: Option<&str>) -> Self {
        match raw.map(|s| s.trim().to_ascii_lowercase()).as_deref() {
            Some("recent" | "newest" | "latest") => Self::Recent,
            Some("popular" | "top" | "votes") => Self::Popular,
            Some("unanswered" | "noreplies") => Self::Unanswered,
            Some("mostviewed" | "views") => Self::MostViewed,
            Some("lastreply" | "active") => Self::LastReply,
            _ => Self::Recent,
        }
    }

    /// Canonical label, used in cache keys
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Recent => "recent",
            Self::Popular => "popular",
            Self::Unanswered => "unanswered",
            Self::MostViewed => "mostViewed",
            Self::LastReply => "lastReply",
        }
    }
}

// ============================================================================
// Orderings
// ============================================================================

/// Sortable post columns - a closed set, so orderings can be rendered into
/// SQL without touching user input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortField {
    IsPinned,
    CreatedAt,
    VoteScore,
    ViewCount,
    LastReplyAt,
}

impl SortField {
    /// Column name in the posts table
    pub const fn as_column(self) -> &'static str {
        match self {
            Self::IsPinned => "is_pinned",
            Self::CreatedAt => "created_at",
            Self::VoteScore => "vote_score",
            Self::ViewCount => "view_count",
            Self::LastReplyAt => "last_reply_at",
        }
    }
}

/// Sort direction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortDirection {
    pub const fn as_sql(self) -> &'static str {
        match self {
            Self::Asc => "ASC",
            Self::Desc => "DESC",
        }
    }
}

/// Build the tie-break rules for a sort mode.
///
/// Every ordering starts with `is_pinned DESC` (pinned content floats
/// regardless of mode) and ends with `created_at DESC`, except where
/// `created_at` already is the primary key. `Unanswered` carries no
/// distinguishing primary key; "unanswered" as a content restriction is the
/// `is_answered` filter.
pub fn order_by(sort: PostSort) -> Vec<(SortField, SortDirection)> {
    let mut rules = vec![(SortField::IsPinned, SortDirection::Desc)];
    match sort {
        PostSort::Recent | PostSort::Unanswered => {}
        PostSort::Popular => rules.push((SortField::VoteScore, SortDirection::Desc)),
        PostSort::MostViewed => rules.push((SortField::ViewCount, SortDirection::Desc)),
        PostSort::LastReply => rules.push((SortField::LastReplyAt, SortDirection::Desc)),
    }
    rules.push((SortField::CreatedAt, SortDirection::Desc));
    rules
}

// ============================================================================
// Field parsers
// ============================================================================

/// Parse a numeric parameter, flooring fractional values. `None` for
/// missing, non-numeric, or non-finite input.
fn parse_numeric(raw: Option<&str>) -> Option<i64> {
    let value: f64 = raw?.trim().parse().ok()?;
    if !value.is_finite() {
        return None;
    }
    Some(value.floor() as i64)
}

/// Parse the page parameter; missing, non-numeric, or non-positive input
/// yields the first page.
pub fn parse_page(raw: Option<&str>) -> i64 {
    match parse_numeric(raw) {
        Some(page) if page > 0 => page,
        _ => DEFAULT_PAGE,
    }
}

/// Parse the limit parameter; anything outside `[1, MAX_LIMIT]` falls back to
/// the default rather than clamping.
pub fn parse_limit(raw: Option<&str>) -> i64 {
    match parse_numeric(raw) {
        Some(limit) if (1..=MAX_LIMIT).contains(&limit) => limit,
        _ => DEFAULT_LIMIT,
    }
}

/// Parse a boolean flag: `"true"`/`"1"` and `"false"`/`"0"` are accepted,
/// anything else leaves the flag unapplied.
pub fn parse_flag(raw: Option<&str>) -> Option<bool> {
    match raw {
        Some("true" | "1") => Some(true),
        Some("false" | "0") => Some(false),
        _ => None,
    }
}

/// Parse an entity-id parameter; values not matching the identifier shape are
/// dropped.
pub fn parse_entity_id(raw: Option<&str>) -> Option<EntityId> {
    EntityId::parse(raw?.trim()).ok()
}

/// Parse a category slug: trimmed, lowercased, `[a-z0-9-]`, at most 100
/// characters.
pub fn parse_category_slug(raw: Option<&str>) -> Option<String> {
    let slug = raw?.trim().to_ascii_lowercase();
    if slug.is_empty() || slug.len() > MAX_SLUG_LEN {
        return None;
    }
    if !slug
        .bytes()
        .all(|b| b.is_ascii_lowercase() || b.is_ascii_digit() || b == b'-')
    {
        return None;
    }
    Some(slug)
}

/// Parse the search parameter: trimmed, dropped when empty or longer than
/// `MAX_SEARCH_LEN` characters.
pub fn parse_search(raw: Option<&str>) -> Option<String> {
    let term = raw?.trim();
    if term.is_empty() || term.chars().count() > MAX_SEARCH_LEN {
        return None;
    }
    Some(term.to_string())
}

// ============================================================================
// Normalized query
// ============================================================================

/// Raw, untyped list-query parameters as they arrive on the wire
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawListPostsQuery {
    pub page: Option<String>,
    pub limit: Option<String>,
    pub sort_by: Option<String>,
    pub category_id: Option<String>,
    pub category_slug: Option<String>,
    pub book_id: Option<String>,
    pub search: Option<String>,
    pub is_pinned: Option<String>,
    pub is_featured: Option<String>,
    pub is_answered: Option<String>,
}

/// Normalized, bounded list-query description
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListPostsQuery {
    pub page: i64,
    pub limit: i64,
    pub sort: PostSort,
    pub category_id: Option<EntityId>,
    pub category_slug: Option<String>,
    pub book_id: Option<EntityId>,
    pub search: Option<String>,
    pub is_pinned: Option<bool>,
    pub is_featured: Option<bool>,
    pub is_answered: Option<bool>,
}

impl Default for ListPostsQuery {
    fn default() -> Self {
        Self::from_raw(&RawListPostsQuery::default())
    }
}

impl ListPostsQuery {
    /// Normalize raw parameters field by field
    pub fn from_raw(raw: &RawListPostsQuery) -> Self {
        Self {
            page: parse_page(raw.page.as_deref()),
            limit: parse_limit(raw.limit.as_deref()),
            sort: PostSort::parse(raw.sort_by.as_deref()),
            category_id: parse_entity_id(raw.category_id.as_deref()),
            category_slug: parse_category_slug(raw.category_slug.as_deref()),
            book_id: parse_entity_id(raw.book_id.as_deref()),
            search: parse_search(raw.search.as_deref()),
            is_pinned: parse_flag(raw.is_pinned.as_deref()),
            is_featured: parse_flag(raw.is_featured.as_deref()),
            is_answered: parse_flag(raw.is_answered.as_deref()),
        }
    }

    /// Offset of the first row of the requested page
    pub fn offset(&self) -> i64 {
        (self.page - 1) * self.limit
    }

    /// Deterministic cache key over every normalized dimension.
    ///
    /// All fixed segments draw from colon-free charsets; the free-form search
    /// term goes last, so distinct parameter sets can never render to the
    /// same key.
    pub fn cache_key(&self) -> String {
        let flag = |value: Option<bool>| match value {
            Some(true) => "1",
            Some(false) => "0",
            None => "-",
        };
        format!(
            "posts:p{}:l{}:s:{}:c:{}:g:{}:b:{}:pin:{}:feat:{}:ans:{}:q:{}",
            self.page,
            self.limit,
            self.sort.as_str(),
            self.category_id.as_ref().map_or("-", EntityId::as_str),
            self.category_slug.as_deref().unwrap_or("-"),
            self.book_id.as_ref().map_or("-", EntityId::as_str),
            flag(self.is_pinned),
            flag(self.is_featured),
            flag(self.is_answered),
            self.search.as_deref().unwrap_or(""),
        )
    }
}

// ============================================================================
// Pagination
// ============================================================================

/// Offset-pagination summary for a listing response
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    pub page: i64,
    pub limit: i64,
    pub total: i64,
    pub total_pages: i64,
    pub has_more: bool,
}

impl Pagination {
    /// Compute the summary for a page of `limit` rows out of `total`.
    /// `limit` must be positive (the parser guarantees it).
    pub fn calculate(page: i64, limit: i64, total: i64) -> Self {
        let total_pages = if total > 0 { (total + limit - 1) / limit } else { 0 };
        Self {
            page,
            limit,
            total,
            total_pages,
            has_more: page * limit < total,
        }
    }
}
