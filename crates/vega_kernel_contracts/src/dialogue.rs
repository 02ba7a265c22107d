#![forbid(unsafe_code)]

use serde::{Deserialize, Serialize};

use crate::event::{CanonicalDate, ClockTime, EventDraft};
use crate::{ContractViolation, ReasonCodeId, SchemaVersion, Validate};

pub const DIALOGUE_CONTRACT_VERSION: SchemaVersion = SchemaVersion(1);

/// Conversation state carried between turns. Replaced wholesale by every
/// `TurnResponse`; nothing else persists inside the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DialogueContext {
    /// No pending question.
    Idle,
    /// The engine greeted back and asked whether the user wants to schedule.
    GreetingFlow,
    /// The engine asked for the content of the thing to schedule.
    AwaitingDetails,
}

/// Injected clock. Engines never read the wall clock themselves; "today" is
/// derived from this, so turns replay deterministically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimeContext {
    pub schema_version: SchemaVersion,
    pub now_unix_ms: u64,
    pub tz_offset_minutes: i16,
}

impl TimeContext {
    pub fn v1(now_unix_ms: u64, tz_offset_minutes: i16) -> Result<Self, ContractViolation> {
        let t = Self {
            schema_version: DIALOGUE_CONTRACT_VERSION,
            now_unix_ms,
            tz_offset_minutes,
        };
        t.validate()?;
        Ok(t)
    }
}

impl Validate for TimeContext {
    fn validate(&self) -> Result<(), ContractViolation> {
        if self.tz_offset_minutes < -840 || self.tz_offset_minutes > 840 {
            return Err(ContractViolation::InvalidRange {
                field: "time_context.tz_offset_minutes",
                min: -840.0,
                max: 840.0,
                got: f64::from(self.tz_offset_minutes),
            });
        }
        // Keeps the shifted timestamp inside chrono's representable range.
        if self.now_unix_ms > 253_402_300_800_000 {
            return Err(ContractViolation::InvalidValue {
                field: "time_context.now_unix_ms",
                reason: "must be before year 10000",
            });
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReplyRole {
    User,
    Assistant,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReplyMessage {
    pub schema_version: SchemaVersion,
    pub role: ReplyRole,
    pub text: String,
    pub at_unix_ms: u64,
    /// True on the technical reply that confirms drafts were produced.
    pub is_schedule_confirmation: bool,
}

impl ReplyMessage {
    pub fn v1(
        role: ReplyRole,
        text: String,
        at_unix_ms: u64,
        is_schedule_confirmation: bool,
    ) -> Result<Self, ContractViolation> {
        let m = Self {
            schema_version: DIALOGUE_CONTRACT_VERSION,
            role,
            text,
            at_unix_ms,
            is_schedule_confirmation,
        };
        m.validate()?;
        Ok(m)
    }
}

impl Validate for ReplyMessage {
    fn validate(&self) -> Result<(), ContractViolation> {
        if self.text.trim().is_empty() {
            return Err(ContractViolation::InvalidValue {
                field: "reply_message.text",
                reason: "must not be empty",
            });
        }
        if self.text.len() > 8192 {
            return Err(ContractViolation::InvalidValue {
                field: "reply_message.text",
                reason: "must be <= 8192 bytes",
            });
        }
        Ok(())
    }
}

/// What the extractors pulled out of one utterance. Produced fresh per turn
/// and consumed immediately; never stored.
#[derive(Debug, Clone, PartialEq)]
pub struct ExtractionResult {
    pub schema_version: SchemaVersion,
    pub dates: Vec<CanonicalDate>,
    pub time: ClockTime,
    pub location: String,
    pub value: f64,
    pub consumed_spans: Vec<String>,
}

impl ExtractionResult {
    pub fn v1(
        dates: Vec<CanonicalDate>,
        time: ClockTime,
        location: String,
        value: f64,
        consumed_spans: Vec<String>,
    ) -> Result<Self, ContractViolation> {
        let r = Self {
            schema_version: DIALOGUE_CONTRACT_VERSION,
            dates,
            time,
            location,
            value,
            consumed_spans,
        };
        r.validate()?;
        Ok(r)
    }
}

impl Validate for ExtractionResult {
    fn validate(&self) -> Result<(), ContractViolation> {
        if self.dates.len() > 32 {
            return Err(ContractViolation::InvalidValue {
                field: "extraction_result.dates",
                reason: "must be <= 32 entries",
            });
        }
        for d in &self.dates {
            d.validate()?;
        }
        if self.dates.windows(2).any(|w| w[0] >= w[1]) {
            return Err(ContractViolation::InvalidValue {
                field: "extraction_result.dates",
                reason: "must be unique and ascending",
            });
        }
        self.time.validate()?;
        if self.location.len() > 4096 {
            return Err(ContractViolation::InvalidValue {
                field: "extraction_result.location",
                reason: "must be <= 4096 bytes",
            });
        }
        if !self.value.is_finite() {
            return Err(ContractViolation::NotFinite {
                field: "extraction_result.value",
            });
        }
        if self.value < 0.0 {
            return Err(ContractViolation::InvalidValue {
                field: "extraction_result.value",
                reason: "must be >= 0",
            });
        }
        if self.consumed_spans.len() > 64 {
            return Err(ContractViolation::InvalidValue {
                field: "extraction_result.consumed_spans",
                reason: "must be <= 64 entries",
            });
        }
        for s in &self.consumed_spans {
            if s.len() > 4096 {
                return Err(ContractViolation::InvalidValue {
                    field: "extraction_result.consumed_spans",
                    reason: "each span must be <= 4096 bytes",
                });
            }
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TurnRequest {
    pub schema_version: SchemaVersion,
    pub utterance: String,
    pub context: DialogueContext,
    pub time: TimeContext,
}

impl TurnRequest {
    pub fn v1(
        utterance: String,
        context: DialogueContext,
        time: TimeContext,
    ) -> Result<Self, ContractViolation> {
        let r = Self {
            schema_version: DIALOGUE_CONTRACT_VERSION,
            utterance,
            context,
            time,
        };
        r.validate()?;
        Ok(r)
    }
}

impl Validate for TurnRequest {
    fn validate(&self) -> Result<(), ContractViolation> {
        if self.utterance.trim().is_empty() {
            return Err(ContractViolation::InvalidValue {
                field: "turn_request.utterance",
                reason: "must not be empty",
            });
        }
        if self.utterance.len() > 4096 {
            return Err(ContractViolation::InvalidValue {
                field: "turn_request.utterance",
                reason: "must be <= 4096 bytes",
            });
        }
        self.time.validate()?;
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TurnResponse {
    pub schema_version: SchemaVersion,
    pub events: Vec<EventDraft>,
    /// Assistant replies in emission order. Every turn answers with at least one.
    pub replies: Vec<ReplyMessage>,
    pub next_context: DialogueContext,
    /// Host may navigate to the created entry. Only meaningful with exactly
    /// one draft; this engine always emits false.
    pub redirect_after_add: bool,
    pub reason_code: ReasonCodeId,
}

impl TurnResponse {
    pub fn v1(
        events: Vec<EventDraft>,
        replies: Vec<ReplyMessage>,
        next_context: DialogueContext,
        redirect_after_add: bool,
        reason_code: ReasonCodeId,
    ) -> Result<Self, ContractViolation> {
        let r = Self {
            schema_version: DIALOGUE_CONTRACT_VERSION,
            events,
            replies,
            next_context,
            redirect_after_add,
            reason_code,
        };
        r.validate()?;
        Ok(r)
    }
}

impl Validate for TurnResponse {
    fn validate(&self) -> Result<(), ContractViolation> {
        if self.events.len() > 32 {
            return Err(ContractViolation::InvalidValue {
                field: "turn_response.events",
                reason: "must be <= 32 entries",
            });
        }
        for e in &self.events {
            e.validate()?;
        }
        if self.replies.is_empty() {
            return Err(ContractViolation::InvalidValue {
                field: "turn_response.replies",
                reason: "must not be empty",
            });
        }
        if self.replies.len() > 4 {
            return Err(ContractViolation::InvalidValue {
                field: "turn_response.replies",
                reason: "must be <= 4 entries",
            });
        }
        for m in &self.replies {
            m.validate()?;
        }
        if self.redirect_after_add && self.events.len() != 1 {
            return Err(ContractViolation::InvalidValue {
                field: "turn_response.redirect_after_add",
                reason: "requires exactly one event draft",
            });
        }
        if self.reason_code.0 == 0 {
            return Err(ContractViolation::InvalidValue {
                field: "turn_response.reason_code",
                reason: "must be non-zero",
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::EventColor;

    fn time() -> TimeContext {
        TimeContext::v1(1_756_080_000_000, -180).unwrap()
    }

    fn reply(text: &str) -> ReplyMessage {
        ReplyMessage::v1(ReplyRole::Assistant, text.to_string(), 1, false).unwrap()
    }

    fn draft(date: &str) -> EventDraft {
        EventDraft::v1(
            "Compromisso".to_string(),
            CanonicalDate::new(date).unwrap(),
            ClockTime::new("09:00").unwrap(),
            String::new(),
            0.0,
            "Criado via Vega Chat: \"x\"".to_string(),
            EventColor::Blue,
            true,
        )
        .unwrap()
    }

    #[test]
    fn time_context_rejects_out_of_range_tz() {
        assert!(TimeContext::v1(0, -841).is_err());
        assert!(TimeContext::v1(0, 841).is_err());
        assert!(TimeContext::v1(0, 840).is_ok());
    }

    #[test]
    fn turn_request_rejects_empty_utterance() {
        assert!(TurnRequest::v1("   ".to_string(), DialogueContext::Idle, time()).is_err());
    }

    #[test]
    fn turn_request_rejects_oversize_utterance() {
        let big = "a".repeat(4097);
        assert!(TurnRequest::v1(big, DialogueContext::Idle, time()).is_err());
    }

    #[test]
    fn extraction_rejects_unsorted_or_duplicate_dates() {
        let t = ClockTime::new("09:00").unwrap();
        let a = CanonicalDate::new("2026-09-06").unwrap();
        let b = CanonicalDate::new("2026-09-05").unwrap();
        let out = ExtractionResult::v1(
            vec![a.clone(), b],
            t.clone(),
            String::new(),
            0.0,
            vec![],
        );
        assert!(out.is_err());
        let dup = ExtractionResult::v1(vec![a.clone(), a], t, String::new(), 0.0, vec![]);
        assert!(dup.is_err());
    }

    #[test]
    fn turn_response_requires_replies() {
        let out = TurnResponse::v1(
            vec![],
            vec![],
            DialogueContext::Idle,
            false,
            ReasonCodeId(0x4447_0001),
        );
        assert!(out.is_err());
    }

    #[test]
    fn turn_response_redirect_requires_single_draft() {
        let two = TurnResponse::v1(
            vec![draft("2026-09-05"), draft("2026-09-06")],
            vec![reply("ok")],
            DialogueContext::Idle,
            true,
            ReasonCodeId(0x4447_0001),
        );
        assert!(two.is_err());
        let one = TurnResponse::v1(
            vec![draft("2026-09-05")],
            vec![reply("ok")],
            DialogueContext::Idle,
            true,
            ReasonCodeId(0x4447_0001),
        );
        assert!(one.is_ok());
    }

    #[test]
    fn turn_response_rejects_zero_reason_code() {
        let out = TurnResponse::v1(
            vec![],
            vec![reply("oi")],
            DialogueContext::Idle,
            false,
            ReasonCodeId(0),
        );
        assert!(out.is_err());
    }
}
