//! Blog models
//!
//! Rows from `blog_posts` and `blog_categories`, the topic enum, and the
//! text helpers used to derive slugs, excerpts and reading time.

use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::FromRow;

/// Average reading speed used for `reading_time_minutes`
const WORDS_PER_MINUTE: usize = 200;

/// Default excerpt length in characters
pub const DEFAULT_EXCERPT_LENGTH: usize = 150;

/// Topic of a blog post, matching the PostgreSQL `blog_type` enum
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, sqlx::Type, async_graphql::Enum,
)]
#[sqlx(type_name = "blog_type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BlogType {
    Recycling,
    Pollution,
    Sustainability,
    CircularEconomy,
    UsedProducts,
    Reuse,
    Environment,
    Upcycling,
    ResponsibleConsumption,
    EcoTips,
    EnvironmentalImpact,
    SustainableLiving,
    Security,
    #[default]
    Other,
}

impl BlogType {
    /// Spanish display label shown by the storefront
    pub fn label(&self) -> &'static str {
        match self {
            Self::Recycling => "Reciclaje",
            Self::Pollution => "Contaminación",
            Self::Sustainability => "Sostenibilidad",
            Self::CircularEconomy => "Economía Circular",
            Self::UsedProducts => "Productos Usados",
            Self::Reuse => "Reutilización",
            Self::Environment => "Medio Ambiente",
            Self::Upcycling => "Upcycling",
            Self::ResponsibleConsumption => "Consumo Responsable",
            Self::EcoTips => "Tips Ecológicos",
            Self::EnvironmentalImpact => "Impacto Ambiental",
            Self::SustainableLiving => "Vida Sustentable",
            Self::Security => "Seguridad",
            Self::Other => "Otros",
        }
    }
}

/// Blog category record from the blog_categories table
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct BlogCategory {
    pub id: i32,
    pub name: String,
    pub icon: Option<String>,
    pub description: Option<String>,
}

/// Blog post record, including reaction counts computed by the query
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct BlogPost {
    /// Unique post identifier
    pub id: i32,

    pub title: String,

    pub content: String,

    /// Admin who wrote the post (owned by the users subgraph)
    pub author_id: String,

    pub blog_category_id: i32,

    pub blog_type: BlogType,

    pub is_published: bool,

    /// Set when published, cleared when unpublished
    pub published_at: Option<DateTime<Utc>>,

    pub created_at: DateTime<Utc>,

    pub updated_at: DateTime<Utc>,

    /// Number of LIKE reactions
    pub likes: i32,

    /// Number of DISLIKE reactions
    pub dislikes: i32,
}

impl BlogPost {
    pub fn slug(&self) -> String {
        generate_slug(&self.title)
    }

    pub fn excerpt(&self, max_length: usize) -> String {
        extract_excerpt(&self.content, max_length)
    }

    pub fn reading_time_minutes(&self) -> i32 {
        reading_time_minutes(&self.content)
    }
}

/// Which publication states a listing includes
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, async_graphql::Enum)]
pub enum BlogStatus {
    #[default]
    Published,
    Draft,
    All,
}

impl BlogStatus {
    /// `is_published` value to filter on, `None` for every post
    pub fn published_flag(&self) -> Option<bool> {
        match self {
            Self::Published => Some(true),
            Self::Draft => Some(false),
            Self::All => None,
        }
    }
}

/// Filter applied to blog post listings; `None` fields match everything
#[derive(Debug, Clone, Default)]
pub struct BlogPostFilter {
    pub published: Option<bool>,
    pub category_id: Option<i32>,
    pub blog_type: Option<BlogType>,
    pub author_id: Option<String>,
    /// Case-insensitive substring of title or content
    pub search: Option<String>,
}

impl BlogPostFilter {
    /// Published posts only, the default for public listings
    pub fn published() -> Self {
        Self {
            published: Some(true),
            ..Self::default()
        }
    }
}

/// Sortable blog post columns
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, async_graphql::Enum)]
pub enum BlogPostSortField {
    #[default]
    PublishedAt,
    CreatedAt,
    UpdatedAt,
    Title,
}

impl BlogPostSortField {
    /// Whitelisted SQL column for ORDER BY
    pub fn column(&self) -> &'static str {
        match self {
            Self::PublishedAt => "b.published_at",
            Self::CreatedAt => "b.created_at",
            Self::UpdatedAt => "b.updated_at",
            Self::Title => "b.title",
        }
    }
}

/// Fields for inserting a blog post
#[derive(Debug, Clone)]
pub struct NewBlogPost {
    pub title: String,
    pub content: String,
    pub author_id: String,
    pub blog_category_id: i32,
    pub blog_type: BlogType,
}

/// Partial update of a blog post; `None` leaves the column untouched
#[derive(Debug, Clone, Default)]
pub struct BlogPostChanges {
    pub title: Option<String>,
    pub content: Option<String>,
    pub blog_category_id: Option<i32>,
    pub blog_type: Option<BlogType>,
}

/// URL slug from a title: lowercase, anything outside ASCII letters and
/// digits dropped, separators collapsed into single hyphens
pub fn generate_slug(title: &str) -> String {
    let mut slug = String::with_capacity(title.len());
    let mut pending_separator = false;

    for ch in title.trim().to_lowercase().chars() {
        if ch.is_ascii_alphanumeric() {
            if pending_separator && !slug.is_empty() {
                slug.push('-');
            }
            pending_separator = false;
            slug.push(ch);
        } else if ch.is_whitespace() || ch == '-' || ch == '_' {
            pending_separator = true;
        }
    }

    slug
}

/// Strip HTML tags, leaving the text content
pub fn strip_html_tags(content: &str) -> String {
    let mut text = String::with_capacity(content.len());
    let mut in_tag = false;

    for ch in content.chars() {
        match ch {
            '<' => in_tag = true,
            '>' if in_tag => in_tag = false,
            _ if !in_tag => text.push(ch),
            _ => {}
        }
    }

    text
}

/// Truncate to `max_length` characters on a word boundary, appending `...`
pub fn truncate_text(text: &str, max_length: usize) -> String {
    if text.chars().count() <= max_length {
        return text.to_string();
    }

    let truncated: String = text.chars().take(max_length).collect();
    match truncated.rfind(' ') {
        Some(last_space) if last_space > 0 => format!("{}...", &truncated[..last_space]),
        _ => format!("{}...", truncated),
    }
}

/// Plain-text preview of post content
pub fn extract_excerpt(content: &str, max_length: usize) -> String {
    truncate_text(&strip_html_tags(content), max_length)
}

/// Estimated reading time, never less than one minute
pub fn reading_time_minutes(content: &str) -> i32 {
    let words = content.split_whitespace().count();
    words.div_ceil(WORDS_PER_MINUTE).max(1) as i32
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("Hello World", "hello-world")]
    #[case("  Reciclaje: guía   rápida!  ", "reciclaje-gua-rpida")]
    #[case("Economía Circular 2.0", "economa-circular-20")]
    #[case("snake_case and--dashes", "snake-case-and-dashes")]
    #[case("--leading and trailing--", "leading-and-trailing")]
    #[case("!!!", "")]
    fn test_generate_slug(#[case] title: &str, #[case] expected: &str) {
        assert_eq!(generate_slug(title), expected);
    }

    #[test]
    fn test_strip_html_tags() {
        assert_eq!(
            strip_html_tags("<p>Reduce, <b>reuse</b>, recycle</p>"),
            "Reduce, reuse, recycle"
        );
    }

    #[test]
    fn test_truncate_text_short_text_untouched() {
        assert_eq!(truncate_text("short", 10), "short");
    }

    #[test]
    fn test_truncate_text_word_boundary() {
        assert_eq!(truncate_text("the quick brown fox", 12), "the quick...");
    }

    #[test]
    fn test_truncate_text_without_spaces() {
        assert_eq!(truncate_text("abcdefghij", 4), "abcd...");
    }

    #[test]
    fn test_truncate_text_multibyte() {
        assert_eq!(truncate_text("añoñaño ñañaña", 9), "añoñaño...");
    }

    #[test]
    fn test_extract_excerpt_strips_markup() {
        let content = "<h1>Title</h1><p>one two three four</p>";
        assert_eq!(extract_excerpt(content, 14), "Titleone two...");
    }

    #[rstest]
    #[case("", 1)]
    #[case("one two three", 1)]
    #[case(&"word ".repeat(200), 1)]
    #[case(&"word ".repeat(201), 2)]
    #[case(&"word ".repeat(1000), 5)]
    fn test_reading_time_minutes(#[case] content: &str, #[case] expected: i32) {
        assert_eq!(reading_time_minutes(content), expected);
    }

    #[test]
    fn test_blog_status_flags() {
        assert_eq!(BlogStatus::Published.published_flag(), Some(true));
        assert_eq!(BlogStatus::Draft.published_flag(), Some(false));
        assert_eq!(BlogStatus::All.published_flag(), None);
    }

    #[test]
    fn test_blog_type_label() {
        assert_eq!(BlogType::CircularEconomy.label(), "Economía Circular");
        assert_eq!(BlogType::default(), BlogType::Other);
    }
}
