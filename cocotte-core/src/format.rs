//! Small display-formatting helpers shared by the rendering layers.

use crate::lang::Language;

/// Human form of a duration in minutes: `"45 min"`, `"1h"`, `"1h 30min"`.
/// Unknown or non-positive durations render as `"N/A"`.
pub fn format_minutes(minutes: Option<i32>) -> String {
    let minutes = match minutes {
        Some(m) if m > 0 => m,
        _ => return "N/A".to_string(),
    };
    if minutes < 60 {
        return format!("{minutes} min");
    }
    let hours = minutes / 60;
    let rest = minutes % 60;
    if rest == 0 {
        format!("{hours}h")
    } else {
        format!("{hours}h {rest}min")
    }
}

/// Localized servings label, `None` when the count is unknown.
pub fn servings_label(servings: Option<i32>, lang: Language) -> Option<String> {
    let n = servings.filter(|n| *n > 0)?;
    let unit = match (lang, n) {
        (Language::En, 1) => "serving",
        (Language::En, _) => "servings",
        (Language::Es, 1) => "porción",
        (Language::Es, _) => "porciones",
        (Language::Fr, 1) => "portion",
        (Language::Fr, _) => "portions",
        (Language::Nl, 1) => "portie",
        (Language::Nl, _) => "porties",
    };
    Some(format!("{n} {unit}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_minutes() {
        assert_eq!(format_minutes(None), "N/A");
        assert_eq!(format_minutes(Some(0)), "N/A");
        assert_eq!(format_minutes(Some(45)), "45 min");
        assert_eq!(format_minutes(Some(60)), "1h");
        assert_eq!(format_minutes(Some(90)), "1h 30min");
        assert_eq!(format_minutes(Some(135)), "2h 15min");
    }

    #[test]
    fn test_servings_label() {
        assert_eq!(servings_label(None, Language::En), None);
        assert_eq!(servings_label(Some(1), Language::En).as_deref(), Some("1 serving"));
        assert_eq!(servings_label(Some(4), Language::Fr).as_deref(), Some("4 portions"));
        assert_eq!(servings_label(Some(2), Language::Nl).as_deref(), Some("2 porties"));
    }
}
