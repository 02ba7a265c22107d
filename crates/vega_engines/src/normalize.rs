#![forbid(unsafe_code)]

use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Folds an utterance into the form the vocabulary tables are written in:
/// lowercase, accents stripped via NFD, and only `[a-z0-9,:/-]` plus
/// whitespace kept. "Reunião às 15h" becomes "reuniao as 15h".
pub fn normalize(text: &str) -> String {
    text.to_lowercase()
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .filter(|c| matches!(c, 'a'..='z' | '0'..='9' | ',' | ':' | '/' | '-') || c.is_whitespace())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn at_norm_01_strips_accents_and_case() {
        assert_eq!(normalize("Reunião às 15h"), "reuniao as 15h");
        assert_eq!(normalize("AÇÃO"), "acao");
    }

    #[test]
    fn at_norm_02_drops_out_of_charset_symbols() {
        assert_eq!(normalize("R$ 50!"), "r 50");
        assert_eq!(normalize("oi :) tudo bem?"), "oi : tudo bem");
    }

    #[test]
    fn at_norm_03_keeps_date_and_time_punctuation() {
        assert_eq!(normalize("15/03, 14:30 meio-dia"), "15/03, 14:30 meio-dia");
    }

    #[test]
    fn at_norm_04_preserves_whitespace_runs() {
        assert_eq!(normalize("a  b\tc"), "a  b\tc");
    }
}
