#![forbid(unsafe_code)]

use std::sync::LazyLock;

use regex::Regex;

use vega_kernel_contracts::event::ClockTime;
use vega_kernel_contracts::ContractViolation;

use crate::fuzzy::matches_keyword;
use crate::normalize::normalize;

pub const DEFAULT_TIME: &str = "09:00";

// "14h", "7:30", "19h30", "7 da manha", "10 da noite". First match wins.
static RE_CLOCK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(\d{1,2})\s*(:|h|hrs?)\s*(\d{2})?|(\d{1,2})\s*(da|a|na)\s*(tarde|noite|manha)")
        .unwrap()
});

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeScan {
    pub time: ClockTime,
    /// Matched substring; empty when the default applied.
    pub consumed: String,
}

/// Reads a time of day out of `raw`. Noon and midnight idioms take priority,
/// then the clock pattern; afternoon/evening periods shift the hour by 12.
/// Nothing usable (including out-of-range readings like "99h") falls back to
/// 09:00 with an empty span.
pub fn extract_time(raw: &str) -> Result<TimeScan, ContractViolation> {
    let normalized = normalize(raw);
    if matches_keyword(&normalized, &["meio dia"], 1) {
        return Ok(TimeScan {
            time: ClockTime::new("12:00")?,
            consumed: "meio dia".to_string(),
        });
    }
    if matches_keyword(&normalized, &["meia noite"], 1) {
        return Ok(TimeScan {
            time: ClockTime::new("00:00")?,
            consumed: "meia noite".to_string(),
        });
    }

    if let Some(caps) = RE_CLOCK.captures(raw) {
        let whole = caps
            .get(0)
            .map(|m| m.as_str().to_string())
            .unwrap_or_default();
        let (hour, minute): (u32, u32) = if let Some(h) = caps.get(1) {
            let minute = caps
                .get(3)
                .and_then(|m| m.as_str().parse().ok())
                .unwrap_or(0);
            (h.as_str().parse().unwrap_or(0), minute)
        } else if let Some(h) = caps.get(4) {
            let mut hour: u32 = h.as_str().parse().unwrap_or(0);
            let period = caps.get(6).map(|m| normalize(m.as_str())).unwrap_or_default();
            if (period.contains("tarde") || period.contains("noite")) && hour < 12 {
                hour += 12;
            }
            (hour, 0)
        } else {
            (0, 0)
        };
        if let Ok(time) = ClockTime::from_hm(hour, minute) {
            return Ok(TimeScan {
                time,
                consumed: whole,
            });
        }
    }

    Ok(TimeScan {
        time: ClockTime::new(DEFAULT_TIME)?,
        consumed: String::new(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn at_clock_01_hour_suffix_forms() {
        let scan = extract_time("reuniao as 14h amanha").unwrap();
        assert_eq!(scan.time.as_str(), "14:00");
        assert_eq!(scan.consumed, "14h ");

        let scan = extract_time("19h30").unwrap();
        assert_eq!(scan.time.as_str(), "19:30");

        let scan = extract_time("as 7:30").unwrap();
        assert_eq!(scan.time.as_str(), "07:30");
    }

    #[test]
    fn at_clock_02_period_words_shift_afternoon_and_evening() {
        let scan = extract_time("7 da manha").unwrap();
        assert_eq!(scan.time.as_str(), "07:00");
        assert_eq!(scan.consumed, "7 da manha");

        let scan = extract_time("7 da tarde").unwrap();
        assert_eq!(scan.time.as_str(), "19:00");

        let scan = extract_time("10 da noite").unwrap();
        assert_eq!(scan.time.as_str(), "22:00");

        // Already past noon, no shift.
        let scan = extract_time("12 da noite").unwrap();
        assert_eq!(scan.time.as_str(), "12:00");
    }

    #[test]
    fn at_clock_03_noon_and_midnight_idioms_take_priority() {
        let scan = extract_time("almoco meio-dia").unwrap();
        assert_eq!(scan.time.as_str(), "12:00");
        assert_eq!(scan.consumed, "meio dia");

        let scan = extract_time("meia-noite em ponto").unwrap();
        assert_eq!(scan.time.as_str(), "00:00");

        // The idiom outranks a later clock pattern.
        let scan = extract_time("meiodia ou 15h").unwrap();
        assert_eq!(scan.time.as_str(), "12:00");
    }

    #[test]
    fn at_clock_04_no_match_defaults_to_nine() {
        let scan = extract_time("reuniao com o time").unwrap();
        assert_eq!(scan.time.as_str(), "09:00");
        assert_eq!(scan.consumed, "");
    }

    #[test]
    fn at_clock_05_out_of_range_readings_default() {
        let scan = extract_time("as 99h").unwrap();
        assert_eq!(scan.time.as_str(), "09:00");
        assert_eq!(scan.consumed, "");

        let scan = extract_time("14h75").unwrap();
        assert_eq!(scan.time.as_str(), "09:00");
    }

    #[test]
    fn at_clock_06_first_match_wins() {
        let scan = extract_time("das 14h as 16h").unwrap();
        assert_eq!(scan.time.as_str(), "14:00");
    }
}
