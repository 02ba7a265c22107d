#![forbid(unsafe_code)]

/// Levenshtein distance over chars.
pub fn edit_distance(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    let mut dp = vec![vec![0; b.len() + 1]; a.len() + 1];

    for i in 0..=a.len() {
        dp[i][0] = i;
    }
    for j in 0..=b.len() {
        dp[0][j] = j;
    }

    for i in 1..=a.len() {
        for j in 1..=b.len() {
            let cost = if a[i - 1] == b[j - 1] { 0 } else { 1 };
            dp[i][j] = (dp[i - 1][j] + 1)
                .min(dp[i][j - 1] + 1)
                .min(dp[i - 1][j - 1] + cost);
        }
    }
    dp[a.len()][b.len()]
}

/// Tokenizes `text` on whitespace and commas and reports whether any token is
/// within tolerance of any keyword. Keywords shorter than 4 chars demand an
/// exact match regardless of `base_tolerance`; that keeps "okk" from matching
/// "ok" while "amanh" still reaches "amanha".
pub fn matches_keyword(text: &str, keywords: &[&str], base_tolerance: usize) -> bool {
    for token in text
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|t| !t.is_empty())
    {
        for keyword in keywords {
            let tolerance = if keyword.chars().count() < 4 {
                0
            } else {
                base_tolerance
            };
            if edit_distance(token, keyword) <= tolerance {
                return true;
            }
        }
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn at_fuzzy_01_distance_basics() {
        assert_eq!(edit_distance("", "abc"), 3);
        assert_eq!(edit_distance("abc", ""), 3);
        assert_eq!(edit_distance("marcar", "marcar"), 0);
        assert_eq!(edit_distance("amanha", "amanh"), 1);
        assert_eq!(edit_distance("terca", "terça"), 1);
    }

    #[test]
    fn at_fuzzy_02_short_keywords_are_exact_only() {
        assert!(!matches_keyword("okk", &["ok"], 1));
        assert!(matches_keyword("ok", &["ok"], 1));
        assert!(!matches_keyword("hj!", &["hj"], 1));
    }

    #[test]
    fn at_fuzzy_03_long_keywords_take_the_tolerance() {
        assert!(matches_keyword("quero marca algo", &["marcar"], 1));
        assert!(matches_keyword("obrigadoo", &["obrigado"], 1));
        assert!(!matches_keyword("obrigadooo", &["obrigado"], 1));
    }

    #[test]
    fn at_fuzzy_04_tokens_split_on_commas_too() {
        assert!(matches_keyword("sim,claro", &["claro"], 1));
    }

    #[test]
    fn at_fuzzy_05_multiword_keywords_rarely_fire() {
        // Tokenization means a two-word keyword only matches squashed forms.
        assert!(!matches_keyword("meio dia", &["meio dia"], 1));
        assert!(matches_keyword("meio-dia", &["meio dia"], 1));
    }
}
