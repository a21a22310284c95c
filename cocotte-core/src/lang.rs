//! Supported display languages and locale-prefixed path handling.
//!
//! Every public page lives under a language prefix (`/en/...`, `/fr/...`).
//! The helpers here split and rebuild those prefixes so route handlers and
//! templates never do their own string surgery on paths.

use serde::{Deserialize, Serialize};

/// A language the site can render.
///
/// Stored in the database as its lowercase two-letter code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    En,
    Es,
    Fr,
    Nl,
}

impl Language {
    /// Fallback language when a translation is missing. Canonical content
    /// is authored in English first.
    pub const DEFAULT: Language = Language::En;

    pub const ALL: [Language; 4] = [Language::En, Language::Es, Language::Fr, Language::Nl];

    pub fn as_str(&self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Es => "es",
            Language::Fr => "fr",
            Language::Nl => "nl",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "en" => Some(Language::En),
            "es" => Some(Language::Es),
            "fr" => Some(Language::Fr),
            "nl" => Some(Language::Nl),
            _ => None,
        }
    }

    /// Every supported language except `self`, for alternate-language links.
    pub fn alternates(&self) -> Vec<Language> {
        Language::ALL.iter().copied().filter(|l| l != self).collect()
    }
}

impl Default for Language {
    fn default() -> Self {
        Language::DEFAULT
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Split a path into its language prefix and the remainder.
///
/// The remainder always starts with `/` and is `/` itself when the path is
/// just a language prefix. Paths without a recognized prefix come back
/// unchanged with `None`.
pub fn split_language(path: &str) -> (Option<Language>, &str) {
    let trimmed = path.strip_prefix('/').unwrap_or(path);
    let (first, rest) = match trimmed.find('/') {
        Some(i) => (&trimmed[..i], &trimmed[i..]),
        None => (trimmed, ""),
    };
    match Language::from_str(first) {
        Some(lang) => {
            let rest = if rest.is_empty() { "/" } else { rest };
            (Some(lang), rest)
        }
        None => {
            let path = if path.is_empty() { "/" } else { path };
            (None, path)
        }
    }
}

/// Language prefix of a path, if it has one.
pub fn language_of_path(path: &str) -> Option<Language> {
    split_language(path).0
}

/// Path without its language prefix, keeping the leading slash.
pub fn strip_language(path: &str) -> &str {
    split_language(path).1
}

/// Rewrite a path to point at the same page in `target`.
///
/// Works whether or not the input already carries a prefix, so it also
/// serves as "localize this bare path".
pub fn switch_language(path: &str, target: Language) -> String {
    let rest = strip_language(path);
    if rest == "/" {
        format!("/{}", target.as_str())
    } else {
        format!("/{}{}", target.as_str(), rest)
    }
}

/// Localized URL for a recipe detail page.
pub fn recipe_path(lang: Language, slug: &str) -> String {
    format!("/{}/recipes/{}", lang.as_str(), slug)
}
