//! Search query model and serialization
//!
//! A [`Query`] holds free-text keywords plus a fixed set of query-string
//! [`Parameters`] and search [`Qualifiers`]. Serialization only emits values
//! that were explicitly set, always in the same order.

use super::qualifier::{Parameter, Qualifier};
use super::validators::Validator;
use crate::types::ValueKind;
use url::form_urlencoded;

// ============================================================================
// Parameters
// ============================================================================

/// Query-string parameters of a search request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Parameters {
    pub order: Parameter,
    pub page: Parameter,
    pub per_page: Parameter,
    pub sort: Parameter,
}

impl Default for Parameters {
    fn default() -> Self {
        Self {
            order: Parameter::new(
                "order",
                ValueKind::String,
                "desc",
                Some(Validator::membership(&["asc", "desc"])),
            ),
            page: Parameter::new("page", ValueKind::Int, "1", Some(Validator::Integer)),
            per_page: Parameter::new(
                "per_page",
                ValueKind::Int,
                "30",
                Some(Validator::max_int(100)),
            ),
            sort: Parameter::new(
                "sort",
                ValueKind::String,
                "best-match",
                Some(Validator::membership(&[
                    "stars",
                    "forks",
                    "help-wanted-issues",
                    "updated",
                ])),
            ),
        }
    }
}

impl Parameters {
    /// All parameters in serialization order
    pub fn iter(&self) -> impl Iterator<Item = &Parameter> {
        [&self.order, &self.page, &self.per_page, &self.sort].into_iter()
    }

    /// `(key, value)` of every set parameter, in serialization order
    pub fn list_set(&self) -> Vec<(&'static str, &str)> {
        self.iter()
            .filter(|p| p.is_set())
            .map(|p| (p.key(), p.value()))
            .collect()
    }
}

// ============================================================================
// Qualifiers
// ============================================================================

/// Repository search qualifiers, one field per qualifier
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Qualifiers {
    pub archived: Qualifier,
    pub created: Qualifier,
    pub followers: Qualifier,
    pub fork: Qualifier,
    pub forks: Qualifier,
    pub good_first_issues: Qualifier,
    pub help_wanted_issues: Qualifier,
    pub in_fields: Qualifier,
    pub language: Qualifier,
    pub license: Qualifier,
    pub mirror: Qualifier,
    pub org: Qualifier,
    pub pushed: Qualifier,
    pub repo: Qualifier,
    pub size: Qualifier,
    pub stars: Qualifier,
    pub topic: Qualifier,
    pub topics: Qualifier,
    pub user: Qualifier,
    pub visibility: Qualifier,
}

/// Logical qualifier names in serialization order
pub const QUALIFIER_NAMES: [&str; 20] = [
    "archived",
    "created",
    "followers",
    "fork",
    "forks",
    "good_first_issues",
    "help_wanted_issues",
    "in",
    "language",
    "license",
    "mirror",
    "org",
    "pushed",
    "repo",
    "size",
    "stars",
    "topic",
    "topics",
    "user",
    "visibility",
];

impl Default for Qualifiers {
    fn default() -> Self {
        let text = |key| Qualifier::new(key, ValueKind::String, "", None);
        let range = |key| Qualifier::new(key, ValueKind::String, "", Some(Validator::Range));
        let boolean = |key| Qualifier::new(key, ValueKind::Bool, "", Some(Validator::Boolean));

        Self {
            archived: boolean("archived"),
            created: text("created"),
            followers: range("followers"),
            fork: Qualifier::new(
                "fork",
                ValueKind::String,
                "",
                Some(Validator::membership(&["true", "only"])),
            ),
            forks: range("forks"),
            good_first_issues: range("good-first-issues"),
            help_wanted_issues: range("help-wanted-issues"),
            in_fields: Qualifier::new(
                "in",
                ValueKind::String,
                "name,description",
                Some(Validator::membership(&["name", "description", "readme"])),
            ),
            language: text("language"),
            license: text("license"),
            mirror: boolean("mirror"),
            org: text("org"),
            pushed: text("pushed"),
            repo: text("repo"),
            size: range("size"),
            stars: range("stars"),
            topic: text("topic"),
            topics: range("topics"),
            user: text("user"),
            visibility: Qualifier::new(
                "is",
                ValueKind::String,
                "public",
                Some(Validator::membership(&["public", "private"])),
            ),
        }
    }
}

impl Qualifiers {
    /// `(logical name, qualifier)` pairs in serialization order
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &Qualifier)> {
        let all: [&Qualifier; 20] = [
            &self.archived,
            &self.created,
            &self.followers,
            &self.fork,
            &self.forks,
            &self.good_first_issues,
            &self.help_wanted_issues,
            &self.in_fields,
            &self.language,
            &self.license,
            &self.mirror,
            &self.org,
            &self.pushed,
            &self.repo,
            &self.size,
            &self.stars,
            &self.topic,
            &self.topics,
            &self.user,
            &self.visibility,
        ];
        QUALIFIER_NAMES.into_iter().zip(all)
    }

    /// Look up a qualifier by logical name
    pub fn get(&self, name: &str) -> Option<&Qualifier> {
        self.iter().find(|(n, _)| *n == name).map(|(_, q)| q)
    }

    /// Look up a qualifier by logical name for setting
    pub fn get_mut(&mut self, name: &str) -> Option<&mut Qualifier> {
        let qualifier = match name {
            "archived" => &mut self.archived,
            "created" => &mut self.created,
            "followers" => &mut self.followers,
            "fork" => &mut self.fork,
            "forks" => &mut self.forks,
            "good_first_issues" => &mut self.good_first_issues,
            "help_wanted_issues" => &mut self.help_wanted_issues,
            "in" => &mut self.in_fields,
            "language" => &mut self.language,
            "license" => &mut self.license,
            "mirror" => &mut self.mirror,
            "org" => &mut self.org,
            "pushed" => &mut self.pushed,
            "repo" => &mut self.repo,
            "size" => &mut self.size,
            "stars" => &mut self.stars,
            "topic" => &mut self.topic,
            "topics" => &mut self.topics,
            "user" => &mut self.user,
            "visibility" => &mut self.visibility,
            _ => return None,
        };
        Some(qualifier)
    }

    /// `(key, value)` of every set qualifier, in serialization order
    pub fn list_set(&self) -> Vec<(&'static str, &str)> {
        self.iter()
            .map(|(_, q)| q)
            .filter(|q| q.is_set())
            .map(|q| (q.key(), q.value()))
            .collect()
    }
}

// ============================================================================
// Query
// ============================================================================

/// A search request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query {
    /// Resource searched, e.g. `repositories`
    pub kind: String,
    /// Free-text terms, joined with single spaces
    pub keywords: Vec<String>,
    /// Fetch every page instead of just the first
    pub paginate: bool,
    /// Send only the keywords, never the qualifiers
    pub raw: bool,
    pub parameters: Parameters,
    pub qualifiers: Qualifiers,
}

impl Query {
    /// Create a query with every parameter and qualifier at its default
    pub fn new(kind: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            keywords: Vec::new(),
            paginate: false,
            raw: false,
            parameters: Parameters::default(),
            qualifiers: Qualifiers::default(),
        }
    }

    /// Repository search
    pub fn repositories() -> Self {
        Self::new("repositories")
    }

    /// Set the keywords
    #[must_use]
    pub fn with_keywords<I, S>(mut self, keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.keywords = keywords.into_iter().map(Into::into).collect();
        self
    }

    /// Keywords followed by ` key:value` for each set qualifier.
    ///
    /// Values are not quoted or escaped. In raw mode only the keywords are
    /// returned.
    pub fn search_text(&self) -> String {
        let mut text = self.keywords.join(" ");
        if !self.raw {
            for (key, value) in self.qualifiers.list_set() {
                text.push(' ');
                text.push_str(key);
                text.push(':');
                text.push_str(value);
            }
        }
        text
    }

    /// Form-encoded query string: `leading` pairs, then every set parameter,
    /// then `q`
    pub fn encode(&self, leading: &[(&str, &str)]) -> String {
        let mut serializer = form_urlencoded::Serializer::new(String::new());
        for (key, value) in leading {
            serializer.append_pair(key, value);
        }
        for (key, value) in self.parameters.list_set() {
            serializer.append_pair(key, value);
        }
        serializer.append_pair("q", &self.search_text());
        serializer.finish()
    }
}
