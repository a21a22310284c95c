//! Best-match selection over a set of translation rows.
//!
//! One rule, applied uniformly to recipes, ingredients, steps and tags:
//! requested language, then [`Language::DEFAULT`], then whatever row comes
//! first. `None` only when there are no rows at all, in which case the
//! caller falls back to the canonical payload on the base record.

use crate::lang::Language;
use crate::types::{NameTranslation, RecipeTranslationRow, StepTranslation};

/// A row that carries content in one specific language.
pub trait Translated {
    fn lang(&self) -> Language;
}

impl Translated for RecipeTranslationRow {
    fn lang(&self) -> Language {
        self.lang
    }
}

impl Translated for NameTranslation {
    fn lang(&self) -> Language {
        self.lang
    }
}

impl Translated for StepTranslation {
    fn lang(&self) -> Language {
        self.lang
    }
}

/// Pick the best translation row for `lang`.
pub fn resolve_translation<T: Translated>(rows: &[T], lang: Language) -> Option<&T> {
    rows.iter()
        .find(|r| r.lang() == lang)
        .or_else(|| rows.iter().find(|r| r.lang() == Language::DEFAULT))
        .or_else(|| rows.first())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn name(lang: Language, name: &str) -> NameTranslation {
        NameTranslation { lang, name: name.to_string() }
    }

    #[test]
    fn test_exact_match_wins() {
        let rows = vec![name(Language::En, "basil"), name(Language::Fr, "basilic")];
        let hit = resolve_translation(&rows, Language::Fr);
        assert_eq!(hit, Some(&rows[1]));
    }

    #[test]
    fn test_missing_language_falls_back_to_default() {
        let rows = vec![name(Language::En, "basil"), name(Language::Nl, "basilicum")];
        let hit = resolve_translation(&rows, Language::Fr);
        assert_eq!(hit.map(|t| t.name.as_str()), Some("basil"));
    }

    #[test]
    fn test_no_default_falls_back_to_first_row() {
        let rows = vec![name(Language::Fr, "basilic"), name(Language::Nl, "basilicum")];
        let hit = resolve_translation(&rows, Language::Es);
        assert_eq!(hit.map(|t| t.name.as_str()), Some("basilic"));
    }

    #[test]
    fn test_empty_set_yields_none() {
        let rows: Vec<NameTranslation> = vec![];
        assert!(resolve_translation(&rows, Language::En).is_none());
    }
}
