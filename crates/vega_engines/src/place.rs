#![forbid(unsafe_code)]

use std::sync::LazyLock;

use regex::Regex;

// Preposition-introduced place: "no escritorio", "na rua Augusta", "em casa".
static RE_PLACE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(na|no|em|local|no espaco|na rua|no clube|na casa)\s+([^,.\-]+)").unwrap()
});

// Trailing time fragment inside a captured place: "academia as 7".
static RE_TRAILING_TIME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\s+(as|às|at|@)\s*\d.*$").unwrap());

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaceScan {
    pub location: String,
    /// Matched substring including the preposition; empty when nothing matched.
    pub consumed: String,
}

/// Finds a location in `raw` after blanking the spans other extractors
/// already claimed, so "no dia 5" never reads as a place. Blanking replaces
/// the first occurrence of each span, mirroring how the spans were found.
pub fn extract_location(raw: &str, consumed_spans: &[String]) -> PlaceScan {
    let mut clean = raw.to_string();
    for span in consumed_spans {
        if !span.is_empty() {
            clean = clean.replacen(span.as_str(), " ", 1);
        }
    }

    if let Some(caps) = RE_PLACE.captures(&clean) {
        if let (Some(whole), Some(body)) = (caps.get(0), caps.get(2)) {
            let trimmed = body.as_str().trim();
            let location = RE_TRAILING_TIME.replace(trimmed, "").into_owned();
            return PlaceScan {
                location,
                consumed: whole.as_str().to_string(),
            };
        }
    }

    PlaceScan {
        location: String::new(),
        consumed: String::new(),
    }
}
