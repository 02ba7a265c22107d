#![forbid(unsafe_code)]

use serde::{Deserialize, Serialize};

use crate::{ContractViolation, SchemaVersion, Validate};

pub const EVENT_CONTRACT_VERSION: SchemaVersion = SchemaVersion(1);

pub fn is_leap_year(year: i32) -> bool {
    year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
}

pub fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 => {
            if is_leap_year(year) {
                29
            } else {
                28
            }
        }
        _ => 0,
    }
}

/// Calendar day as `YYYY-MM-DD`. Lexicographic order equals chronological order.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CanonicalDate(String);

fn check_date(s: &str) -> Result<(), ContractViolation> {
    let b = s.as_bytes();
    let shape_ok = b.len() == 10
        && b[4] == b'-'
        && b[7] == b'-'
        && b.iter()
            .enumerate()
            .all(|(i, c)| i == 4 || i == 7 || c.is_ascii_digit());
    if !shape_ok {
        return Err(ContractViolation::InvalidValue {
            field: "canonical_date",
            reason: "must be YYYY-MM-DD",
        });
    }
    let d = |i: usize| i32::from(b[i] - b'0');
    let year = d(0) * 1000 + d(1) * 100 + d(2) * 10 + d(3);
    let month = (d(5) * 10 + d(6)) as u32;
    let day = (d(8) * 10 + d(9)) as u32;
    if year == 0 {
        return Err(ContractViolation::InvalidValue {
            field: "canonical_date",
            reason: "year must be >= 1",
        });
    }
    if !(1..=12).contains(&month) {
        return Err(ContractViolation::InvalidValue {
            field: "canonical_date",
            reason: "month must be 1..=12",
        });
    }
    if day == 0 || day > days_in_month(year, month) {
        return Err(ContractViolation::InvalidValue {
            field: "canonical_date",
            reason: "day must exist in the month",
        });
    }
    Ok(())
}

impl CanonicalDate {
    pub fn new(date: impl Into<String>) -> Result<Self, ContractViolation> {
        let date = date.into();
        check_date(&date)?;
        Ok(Self(date))
    }

    pub fn from_ymd(year: i32, month: u32, day: u32) -> Result<Self, ContractViolation> {
        Self::new(format!("{year:04}-{month:02}-{day:02}"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// `DD/MM/YYYY`, the rendering used inside reply text.
    pub fn display_br(&self) -> String {
        let parts: Vec<&str> = self.0.split('-').rev().collect();
        parts.join("/")
    }
}

impl Validate for CanonicalDate {
    fn validate(&self) -> Result<(), ContractViolation> {
        check_date(&self.0)
    }
}

/// Wall-clock time of day as `HH:MM`, 24-hour.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ClockTime(String);

fn check_clock(s: &str) -> Result<(), ContractViolation> {
    let b = s.as_bytes();
    let shape_ok = b.len() == 5
        && b[2] == b':'
        && b[0].is_ascii_digit()
        && b[1].is_ascii_digit()
        && b[3].is_ascii_digit()
        && b[4].is_ascii_digit();
    if !shape_ok {
        return Err(ContractViolation::InvalidValue {
            field: "clock_time",
            reason: "must be HH:MM",
        });
    }
    let hour = (b[0] - b'0') * 10 + (b[1] - b'0');
    let minute = (b[3] - b'0') * 10 + (b[4] - b'0');
    if hour > 23 {
        return Err(ContractViolation::InvalidValue {
            field: "clock_time",
            reason: "hour must be <= 23",
        });
    }
    if minute > 59 {
        return Err(ContractViolation::InvalidValue {
            field: "clock_time",
            reason: "minute must be <= 59",
        });
    }
    Ok(())
}

impl ClockTime {
    pub fn new(time: impl Into<String>) -> Result<Self, ContractViolation> {
        let time = time.into();
        check_clock(&time)?;
        Ok(Self(time))
    }

    pub fn from_hm(hour: u32, minute: u32) -> Result<Self, ContractViolation> {
        Self::new(format!("{hour:02}:{minute:02}"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Validate for ClockTime {
    fn validate(&self) -> Result<(), ContractViolation> {
        check_clock(&self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventColor {
    Red,
    Green,
    Purple,
    Blue,
    Yellow,
}

impl EventColor {
    pub fn as_str(self) -> &'static str {
        match self {
            EventColor::Red => "red",
            EventColor::Green => "green",
            EventColor::Purple => "purple",
            EventColor::Blue => "blue",
            EventColor::Yellow => "yellow",
        }
    }
}

/// One calendar entry proposed by the dialogue engine. The host decides
/// whether to persist it; nothing here grants that.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventDraft {
    pub schema_version: SchemaVersion,
    pub title: String,
    pub date: CanonicalDate,
    pub time: ClockTime,
    pub location: String,
    pub value: f64,
    /// Provenance note, e.g. the utterance the draft came from.
    pub description: String,
    pub color: EventColor,
    /// Hint that the host may mirror the entry to an external calendar.
    pub sync_hint: bool,
}

impl EventDraft {
    #[allow(clippy::too_many_arguments)]
    pub fn v1(
        title: String,
        date: CanonicalDate,
        time: ClockTime,
        location: String,
        value: f64,
        description: String,
        color: EventColor,
        sync_hint: bool,
    ) -> Result<Self, ContractViolation> {
        let d = Self {
            schema_version: EVENT_CONTRACT_VERSION,
            title,
            date,
            time,
            location,
            value,
            description,
            color,
            sync_hint,
        };
        d.validate()?;
        Ok(d)
    }
}

impl Validate for EventDraft {
    fn validate(&self) -> Result<(), ContractViolation> {
        if self.title.trim().is_empty() {
            return Err(ContractViolation::InvalidValue {
                field: "event_draft.title",
                reason: "must not be empty",
            });
        }
        if self.title.len() > 4096 {
            return Err(ContractViolation::InvalidValue {
                field: "event_draft.title",
                reason: "must be <= 4096 bytes",
            });
        }
        self.date.validate()?;
        self.time.validate()?;
        if self.location.len() > 4096 {
            return Err(ContractViolation::InvalidValue {
                field: "event_draft.location",
                reason: "must be <= 4096 bytes",
            });
        }
        if !self.value.is_finite() {
            return Err(ContractViolation::NotFinite {
                field: "event_draft.value",
            });
        }
        if self.value < 0.0 {
            return Err(ContractViolation::InvalidValue {
                field: "event_draft.value",
                reason: "must be >= 0",
            });
        }
        if self.description.len() > 8192 {
            return Err(ContractViolation::InvalidValue {
                field: "event_draft.description",
                reason: "must be <= 8192 bytes",
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(value: f64) -> Result<EventDraft, ContractViolation> {
        EventDraft::v1(
            "Consulta".to_string(),
            CanonicalDate::new("2026-03-15").unwrap(),
            ClockTime::new("14:00").unwrap(),
            String::new(),
            value,
            "Criado via Vega Chat: \"consulta 15/03\"".to_string(),
            EventColor::Blue,
            true,
        )
    }

    #[test]
    fn date_accepts_valid_iso() {
        let d = CanonicalDate::new("2026-02-28").unwrap();
        assert_eq!(d.as_str(), "2026-02-28");
        assert_eq!(d.display_br(), "28/02/2026");
    }

    #[test]
    fn date_rejects_bad_shape_and_calendar() {
        assert!(CanonicalDate::new("2026-3-15").is_err());
        assert!(CanonicalDate::new("15/03/2026").is_err());
        assert!(CanonicalDate::new("2026-13-01").is_err());
        assert!(CanonicalDate::new("2026-02-29").is_err());
        assert!(CanonicalDate::new("0000-01-01").is_err());
    }

    #[test]
    fn date_accepts_leap_day_in_leap_year() {
        assert!(CanonicalDate::new("2028-02-29").is_ok());
        assert!(CanonicalDate::from_ymd(2028, 2, 29).is_ok());
    }

    #[test]
    fn date_order_is_chronological() {
        let a = CanonicalDate::new("2026-09-05").unwrap();
        let b = CanonicalDate::new("2026-10-01").unwrap();
        assert!(a < b);
    }

    #[test]
    fn clock_rejects_out_of_range() {
        assert!(ClockTime::new("24:00").is_err());
        assert!(ClockTime::new("09:60").is_err());
        assert!(ClockTime::new("9:00").is_err());
        assert!(ClockTime::from_hm(99, 0).is_err());
        assert!(ClockTime::from_hm(23, 59).is_ok());
    }

    #[test]
    fn draft_rejects_empty_title_via_literal() {
        let mut d = draft(0.0).unwrap();
        d.title = "   ".to_string();
        assert!(d.validate().is_err());
    }

    #[test]
    fn draft_rejects_negative_and_non_finite_value() {
        assert!(draft(-1.0).is_err());
        assert!(draft(f64::NAN).is_err());
        assert!(draft(1250.50).is_ok());
    }

    #[test]
    fn draft_serializes_with_camel_case_keys() {
        let d = draft(500.0).unwrap();
        let json = serde_json::to_string(&d).unwrap();
        assert!(json.contains("\"syncHint\":true"));
        assert!(json.contains("\"date\":\"2026-03-15\""));
        assert!(json.contains("\"color\":\"blue\""));
    }
}
