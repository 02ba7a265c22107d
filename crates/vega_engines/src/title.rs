#![forbid(unsafe_code)]

use regex::Regex;

use crate::fuzzy::matches_keyword;
use crate::normalize::normalize;
use crate::vocab::TITLE_STOPWORDS;

pub const FALLBACK_TITLE: &str = "Compromisso";

/// Builds the event title from whatever the extractors did not consume:
/// every span is blanked (case-insensitive, all occurrences), stop-words and
/// residual digit fragments are dropped, edge punctuation is trimmed, and
/// the first letter is uppercased. Nothing left means the fallback title.
pub fn synthesize_title(raw: &str, consumed_spans: &[String]) -> String {
    let mut clean = raw.to_string();
    for span in consumed_spans {
        if span.is_empty() {
            continue;
        }
        if let Ok(re) = Regex::new(&format!("(?i){}", regex::escape(span))) {
            clean = re.replace_all(&clean, " ").into_owned();
        }
    }

    let kept: Vec<&str> = clean
        .split_whitespace()
        .filter(|token| {
            let norm = normalize(token);
            if matches_keyword(&norm, TITLE_STOPWORDS, 0) {
                return false;
            }
            if token.chars().any(|c| c.is_ascii_digit()) && norm.chars().count() < 5 {
                return false;
            }
            token.chars().count() >= 2
        })
        .collect();

    let joined = kept.join(" ");
    let trimmed = joined
        .trim_matches(|c| matches!(c, '.' | ',' | ';' | ':' | '/' | '-'))
        .trim();

    let mut chars = trimmed.chars();
    match chars.next() {
        None => FALLBACK_TITLE.to_string(),
        Some(first) => first.to_uppercase().chain(chars).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spans(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn at_title_01_residue_after_span_removal() {
        let title = synthesize_title(
            "academia amanha as 7 da manha",
            &spans(&["amanha", "7 da manha", "as 07:00"]),
        );
        assert_eq!(title, "Academia");
    }

    #[test]
    fn at_title_02_nothing_left_gives_fallback() {
        let title = synthesize_title("marcar para amanha", &spans(&["amanha"]));
        assert_eq!(title, FALLBACK_TITLE);
    }

    #[test]
    fn at_title_03_span_removal_is_case_insensitive() {
        let title = synthesize_title("Yoga AMANHA cedo", &spans(&["amanha"]));
        assert_eq!(title, "Yoga cedo");
    }

    #[test]
    fn at_title_04_short_digit_fragments_and_single_chars_drop() {
        let title = synthesize_title("Dentista 9h sala B", &[]);
        assert_eq!(title, "Dentista sala");
    }

    #[test]
    fn at_title_05_edge_punctuation_is_trimmed_and_first_letter_upper() {
        let title = synthesize_title("festa da Ana.", &[]);
        assert_eq!(title, "Festa Ana");
    }

    #[test]
    fn at_title_06_command_stopwords_drop() {
        let title = synthesize_title("quero marcar um jantar especial", &[]);
        assert_eq!(title, "Jantar especial");
    }
}
