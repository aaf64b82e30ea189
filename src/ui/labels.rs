//! Locale-aware label formatting for the month title and weekday header.
//!
//! Labels come from static per-language tables keyed by the primary subtag
//! of the configured locale. An unknown locale falls back to a numeric
//! "YYYY-MM" month label; weekday labels fall back to English so the header
//! stays readable.

use crate::config::LabelStyle;
use crate::domain::{ViewMonth, WeekStart};

/// Month names per supported language, January first.
const MONTH_NAMES: &[(&str, [&str; 12])] = &[
    (
        "en",
        [
            "January", "February", "March", "April", "May", "June", "July", "August",
            "September", "October", "November", "December",
        ],
    ),
    (
        "de",
        [
            "Januar", "Februar", "März", "April", "Mai", "Juni", "Juli", "August",
            "September", "Oktober", "November", "Dezember",
        ],
    ),
    (
        "fr",
        [
            "janvier", "février", "mars", "avril", "mai", "juin", "juillet", "août",
            "septembre", "octobre", "novembre", "décembre",
        ],
    ),
    (
        "es",
        [
            "enero", "febrero", "marzo", "abril", "mayo", "junio", "julio", "agosto",
            "septiembre", "octubre", "noviembre", "diciembre",
        ],
    ),
    (
        "it",
        [
            "gennaio", "febbraio", "marzo", "aprile", "maggio", "giugno", "luglio",
            "agosto", "settembre", "ottobre", "novembre", "dicembre",
        ],
    ),
    (
        "pt",
        [
            "janeiro", "fevereiro", "março", "abril", "maio", "junho", "julho",
            "agosto", "setembro", "outubro", "novembro", "dezembro",
        ],
    ),
    (
        "nl",
        [
            "januari", "februari", "maart", "april", "mei", "juni", "juli",
            "augustus", "september", "oktober", "november", "december",
        ],
    ),
    (
        "sv",
        [
            "januari", "februari", "mars", "april", "maj", "juni", "juli",
            "augusti", "september", "oktober", "november", "december",
        ],
    ),
];

/// Weekday abbreviations per supported language, Monday first.
const WEEKDAY_ABBREVS: &[(&str, [&str; 7])] = &[
    ("en", ["Mo", "Tu", "We", "Th", "Fr", "Sa", "Su"]),
    ("de", ["Mo", "Di", "Mi", "Do", "Fr", "Sa", "So"]),
    ("fr", ["lu", "ma", "me", "je", "ve", "sa", "di"]),
    ("es", ["lu", "ma", "mi", "ju", "vi", "sá", "do"]),
    ("it", ["lu", "ma", "me", "gi", "ve", "sa", "do"]),
    ("pt", ["se", "te", "qa", "qi", "sx", "sá", "do"]),
    ("nl", ["ma", "di", "wo", "do", "vr", "za", "zo"]),
    ("sv", ["må", "ti", "on", "to", "fr", "lö", "sö"]),
];

/// The primary language subtag of a BCP 47-ish locale ("de-AT" → "de")
fn primary_subtag(locale: &str) -> &str {
    locale
        .split(['-', '_'])
        .next()
        .unwrap_or(locale)
}

fn month_names(locale: &str) -> Option<&'static [&'static str; 12]> {
    let tag = primary_subtag(locale).to_ascii_lowercase();
    MONTH_NAMES
        .iter()
        .find(|(lang, _)| *lang == tag)
        .map(|(_, names)| names)
}

fn weekday_abbrevs(locale: &str) -> &'static [&'static str; 7] {
    let tag = primary_subtag(locale).to_ascii_lowercase();
    WEEKDAY_ABBREVS
        .iter()
        .find(|(lang, _)| *lang == tag)
        .map(|(_, days)| days)
        // English fallback keeps the header readable for unknown locales
        .unwrap_or(&WEEKDAY_ABBREVS[0].1)
}

/// Month title such as "August 2026", or "2026-08" when the locale is unknown
pub fn month_label(view: ViewMonth, locale: &str) -> String {
    match month_names(locale) {
        Some(names) => format!("{} {}", names[view.month() as usize - 1], view.year()),
        None => view.to_string(),
    }
}

/// The seven weekday header labels, ordered for the week start
pub fn weekday_labels(locale: &str, week_start: WeekStart, style: LabelStyle) -> Vec<String> {
    let abbrevs = weekday_abbrevs(locale);
    // Tables are Monday-first; a Sunday start rotates the last entry to front
    let rotation = match week_start {
        WeekStart::Monday => 0,
        WeekStart::Sunday => 6,
    };
    (0..7)
        .map(|i| {
            let label = abbrevs[(i + rotation) % 7];
            match style {
                LabelStyle::Abbrev => label.to_string(),
                LabelStyle::Narrow => label.chars().take(1).collect::<String>().to_uppercase(),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_month_label_english() {
        assert_eq!(month_label(ViewMonth::new(2026, 8), "en"), "August 2026");
        assert_eq!(month_label(ViewMonth::new(2024, 2), "en-US"), "February 2024");
    }

    #[test]
    fn test_month_label_german() {
        assert_eq!(month_label(ViewMonth::new(2026, 3), "de-AT"), "März 2026");
    }

    #[test]
    fn test_month_label_unknown_locale_falls_back_to_numeric() {
        assert_eq!(month_label(ViewMonth::new(2026, 8), "zz"), "2026-08");
        assert_eq!(month_label(ViewMonth::new(2026, 8), ""), "2026-08");
    }

    #[test]
    fn test_weekday_labels_sunday_start() {
        let labels = weekday_labels("en", WeekStart::Sunday, LabelStyle::Abbrev);
        assert_eq!(labels, vec!["Su", "Mo", "Tu", "We", "Th", "Fr", "Sa"]);
    }

    #[test]
    fn test_weekday_labels_monday_start() {
        let labels = weekday_labels("en", WeekStart::Monday, LabelStyle::Abbrev);
        assert_eq!(labels, vec!["Mo", "Tu", "We", "Th", "Fr", "Sa", "Su"]);
    }

    #[test]
    fn test_weekday_labels_narrow() {
        let labels = weekday_labels("en", WeekStart::Sunday, LabelStyle::Narrow);
        assert_eq!(labels, vec!["S", "M", "T", "W", "T", "F", "S"]);
    }

    #[test]
    fn test_weekday_labels_unknown_locale_uses_english() {
        let labels = weekday_labels("zz", WeekStart::Monday, LabelStyle::Abbrev);
        assert_eq!(labels, vec!["Mo", "Tu", "We", "Th", "Fr", "Sa", "Su"]);
    }
}
