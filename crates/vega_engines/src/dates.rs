#![forbid(unsafe_code)]

use std::sync::LazyLock;

use chrono::{Datelike, Duration, NaiveDate};
use regex::Regex;

use vega_kernel_contracts::event::{days_in_month, CanonicalDate};
use vega_kernel_contracts::ContractViolation;

use crate::fuzzy::matches_keyword;
use crate::normalize::normalize;
use crate::vocab::{month_number, TODAY_WORDS, TOMORROW_WORDS, WEEKDAYS};

// "18 de fevereiro de 2027", "18 fev 27", "setembro". Runs on the raw text so
// accented month names still match; the captured name is normalized before
// the table lookup.
static RE_NAMED_MONTH: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)\b(?:(\d{1,2})\s*(?:de)?\s*)?(janeiro|jan|fevereiro|fev|mar[cç]o|mar|abril|abr|maio|mai|junho|jun|julho|jul|agosto|ago|setembro|set|outubro|out|novembro|nov|dezembro|dez)\s*(?:de)?\s*(\d{2,4})?\b",
    )
    .unwrap()
});

// "15/03", "15-3-27", "15/03/2027". Runs on normalized text.
static RE_NUMERIC_DATE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b(\d{1,2})[/-](\d{1,2})(?:[/-](\d{2,4}))?\b").unwrap());

// "dia 5, 6 e 7", "em 15", "no dia 20". Day numbers only; the month is
// inferred relative to today.
static RE_DAY_LIST: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(?:dias?|em|no dia)\s+((?:\d{1,2}(?:st|nd|rd|th)?(?:,\s*|\s+e\s+|\s+ou\s+|\s+))*\d{1,2})")
        .unwrap()
});

static RE_DAY_NUMBER: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\d{1,2}").unwrap());

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateScan {
    /// Unique, ascending.
    pub dates: Vec<CanonicalDate>,
    /// Matched substrings, for span removal downstream.
    pub consumed: Vec<String>,
}

/// Finds every calendar date in `raw`. Explicit dates (named month, numeric)
/// win outright; relative vocabulary (amanha, hoje, weekdays, bare day lists)
/// is only consulted when no explicit date matched. No dates means both lists
/// come back empty.
pub fn extract_dates(raw: &str, today: NaiveDate) -> Result<DateScan, ContractViolation> {
    let normalized = normalize(raw);
    let mut found: Vec<NaiveDate> = Vec::new();
    let mut consumed: Vec<String> = Vec::new();

    for caps in RE_NAMED_MONTH.captures_iter(raw) {
        if let (Some(whole), Some(month_m)) = (caps.get(0), caps.get(2)) {
            let Some(month) = month_number(&normalize(month_m.as_str())) else {
                continue;
            };
            let day: u32 = caps
                .get(1)
                .and_then(|m| m.as_str().parse().ok())
                .unwrap_or(1);
            let mut year: i32 = caps
                .get(3)
                .and_then(|m| m.as_str().parse().ok())
                .unwrap_or_else(|| today.year());
            if year < 100 {
                year += 2000;
            }
            let day = day.clamp(1, days_in_month(year, month));
            if let Some(date) = NaiveDate::from_ymd_opt(year, month, day) {
                found.push(date);
                consumed.push(whole.as_str().to_string());
            }
        }
    }

    for caps in RE_NUMERIC_DATE.captures_iter(&normalized) {
        if let (Some(whole), Some(day_m), Some(month_m)) = (caps.get(0), caps.get(1), caps.get(2))
        {
            let day: u32 = day_m.as_str().parse().unwrap_or(0);
            let month: u32 = month_m.as_str().parse().unwrap_or(0);
            if !(1..=12).contains(&month) {
                continue;
            }
            let mut year: i32 = caps
                .get(3)
                .and_then(|m| m.as_str().parse().ok())
                .unwrap_or_else(|| today.year());
            if year < 100 {
                year += 2000;
            }
            let day = day.clamp(1, days_in_month(year, month));
            if let Some(date) = NaiveDate::from_ymd_opt(year, month, day) {
                if !found.contains(&date) {
                    found.push(date);
                    consumed.push(whole.as_str().to_string());
                }
            }
        }
    }

    if found.is_empty() {
        if matches_keyword(&normalized, TOMORROW_WORDS, 1) {
            found.push(today + Duration::days(1));
            consumed.push("amanha".to_string());
        }
        if matches_keyword(&normalized, TODAY_WORDS, 1) {
            found.push(today);
            consumed.push("hoje".to_string());
        }
        let today_idx = today.weekday().num_days_from_sunday();
        for (idx, words) in WEEKDAYS {
            if matches_keyword(&normalized, words, 1) {
                let mut distance = i64::from(*idx) - i64::from(today_idx);
                if distance <= 0 {
                    distance += 7;
                }
                found.push(today + Duration::days(distance));
                consumed.push(words[0].to_string());
            }
        }
        for caps in RE_DAY_LIST.captures_iter(raw) {
            if let (Some(whole), Some(list)) = (caps.get(0), caps.get(1)) {
                // The bare-number form never applies to slash dates ("em 15/03").
                if raw[whole.end()..].starts_with('/') {
                    continue;
                }
                for number in RE_DAY_NUMBER.find_iter(list.as_str()) {
                    let day: u32 = number.as_str().parse().unwrap_or(0);
                    if day == 0 || day > 31 {
                        continue;
                    }
                    let mut year = today.year();
                    let mut month = today.month();
                    if day < today.day() {
                        month += 1;
                        if month > 12 {
                            month = 1;
                            year += 1;
                        }
                    }
                    if day > days_in_month(year, month) {
                        continue;
                    }
                    if let Some(date) = NaiveDate::from_ymd_opt(year, month, day) {
                        if !found.contains(&date) {
                            found.push(date);
                        }
                    }
                }
                consumed.push(whole.as_str().to_string());
            }
        }
    }

    if found.is_empty() {
        return Ok(DateScan {
            dates: Vec::new(),
            consumed: Vec::new(),
        });
    }

    found.sort_unstable();
    found.dedup();
    let mut dates = Vec::with_capacity(found.len());
    for d in &found {
        dates.push(CanonicalDate::from_ymd(d.year(), d.month(), d.day())?);
    }
    Ok(DateScan { dates, consumed })
}
