#![forbid(unsafe_code)]

use std::sync::LazyLock;

use regex::Regex;

// "3 mil", "1,5 mil reais", "2 milhoes de reais". Runs on lowercased text so
// the accented forms still match.
static RE_MULTIPLIER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)\b(\d+(?:[.,]\d+)?)\s*(mil|k|milhao|milhão|milhoes|milhões)(?:\s*(?:de\s*)?(?:reais|real|reias|conto|pila))?\b",
    )
    .unwrap()
});

// "R$ 1.250,50", "valor 500", "500 reais", bare "3.000".
static RE_STANDARD: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)(?:R\$|\$|valor)\s*([\d.,]+)|([\d.,]+)\s*(?:reais|real|reias)|(\b\d{1,3}(?:\.\d{3})+(?:,\d{1,2})?\b)",
    )
    .unwrap()
});

#[derive(Debug, Clone, PartialEq)]
pub struct MoneyScan {
    /// Finite and >= 0; unparseable amounts come back as 0.
    pub value: f64,
    pub consumed: String,
}

/// Reads a monetary amount out of `raw`. Multiplier suffixes (mil, k,
/// milhao) take priority over the standard currency patterns. Brazilian
/// digit grouping applies: dots group thousands, the comma is the decimal
/// separator.
pub fn extract_value(raw: &str) -> MoneyScan {
    let lower = raw.to_lowercase();
    if let Some(caps) = RE_MULTIPLIER.captures(&lower) {
        if let (Some(whole), Some(num), Some(unit)) = (caps.get(0), caps.get(1), caps.get(2)) {
            let base: f64 = num.as_str().replace(',', ".").parse().unwrap_or(0.0);
            let factor = match unit.as_str() {
                "mil" | "k" => 1_000.0,
                _ => 1_000_000.0,
            };
            let value = base * factor;
            return MoneyScan {
                value: if value.is_finite() { value } else { 0.0 },
                consumed: whole.as_str().to_string(),
            };
        }
    }

    if let Some(caps) = RE_STANDARD.captures(raw) {
        let digits = caps
            .get(1)
            .or(caps.get(2))
            .or(caps.get(3))
            .map(|m| m.as_str())
            .unwrap_or("");
        let value: f64 = digits
            .replace('.', "")
            .replace(',', ".")
            .parse()
            .unwrap_or(0.0);
        let consumed = caps
            .get(0)
            .map(|m| m.as_str().to_string())
            .unwrap_or_default();
        return MoneyScan {
            value: if value.is_finite() { value } else { 0.0 },
            consumed,
        };
    }

    MoneyScan {
        value: 0.0,
        consumed: String::new(),
    }
}
