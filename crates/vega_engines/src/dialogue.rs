#![forbid(unsafe_code)]

use chrono::{DateTime, NaiveDate, Utc};

use vega_kernel_contracts::dialogue::{
    DialogueContext, ExtractionResult, ReplyMessage, ReplyRole, TimeContext, TurnRequest,
    TurnResponse,
};
use vega_kernel_contracts::event::{EventColor, EventDraft};
use vega_kernel_contracts::{ContractViolation, ReasonCodeId, Validate};

use crate::clock::extract_time;
use crate::dates::{extract_dates, DateScan};
use crate::fuzzy::matches_keyword;
use crate::money::extract_value;
use crate::normalize::normalize;
use crate::place::extract_location;
use crate::responses::{
    bank, DirectGroupId, ReplyCategory, ReplySelector, AWAITING_CONTENT_PROMPT, DIRECT_RESPONSES,
    SUCCESS_PHRASES,
};
use crate::title::synthesize_title;
use crate::vocab::{
    GRATITUDE_WORDS, GREETING_WORDS, IDENTITY_WORDS, NO_WORDS, SCHEDULING_INTENT_WORDS,
    STATUS_WORDS, YES_WORDS,
};

pub mod reason_codes {
    use vega_kernel_contracts::ReasonCodeId;

    // Dialogue reason-code namespace. Values are placeholders until global registry lock.
    pub const DIALOGUE_SCHEDULED: ReasonCodeId = ReasonCodeId(0x4447_0001);
    pub const DIALOGUE_DIRECT_REPLY: ReasonCodeId = ReasonCodeId(0x4447_0002);
    pub const DIALOGUE_AWAITING_PROMPT: ReasonCodeId = ReasonCodeId(0x4447_0003);
    pub const DIALOGUE_ASK_DATE: ReasonCodeId = ReasonCodeId(0x4447_0004);
    pub const DIALOGUE_GREETING: ReasonCodeId = ReasonCodeId(0x4447_0005);
    pub const DIALOGUE_AFFIRMATION: ReasonCodeId = ReasonCodeId(0x4447_0006);
    pub const DIALOGUE_NEGATION: ReasonCodeId = ReasonCodeId(0x4447_0007);
    pub const DIALOGUE_IDENTITY: ReasonCodeId = ReasonCodeId(0x4447_0008);
    pub const DIALOGUE_STATUS: ReasonCodeId = ReasonCodeId(0x4447_0009);
    pub const DIALOGUE_GRATITUDE: ReasonCodeId = ReasonCodeId(0x4447_000A);

    pub const DIALOGUE_FALLBACK_CONFUSED: ReasonCodeId = ReasonCodeId(0x4447_0010);
    pub const DIALOGUE_FALLBACK_GENERAL: ReasonCodeId = ReasonCodeId(0x4447_0011);
    pub const DIALOGUE_UTTERANCE_TOO_LONG: ReasonCodeId = ReasonCodeId(0x4447_0012);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DialogueConfig {
    /// Utterances longer than this many chars take the fallback path.
    pub max_utterance_chars: usize,
}

impl DialogueConfig {
    pub fn mvp_v1() -> Self {
        Self {
            max_utterance_chars: 2_048,
        }
    }
}

/// One-turn decision engine. Holds no conversational state of its own; the
/// request carries the context and the response carries its replacement.
#[derive(Debug, Clone)]
pub struct DialogueRuntime<S: ReplySelector> {
    config: DialogueConfig,
    selector: S,
}

impl<S: ReplySelector> DialogueRuntime<S> {
    pub fn new(config: DialogueConfig, selector: S) -> Self {
        Self { config, selector }
    }

    /// Decides one turn. Date extraction runs first: an utterance with a
    /// resolvable date always schedules, whatever the context. After that the
    /// small-talk table, the greeting-flow answers, and the intent checks are
    /// consulted in order.
    pub fn run(&mut self, req: &TurnRequest) -> Result<TurnResponse, ContractViolation> {
        req.validate()?;

        let raw = req.utterance.trim();
        let at = req.time.now_unix_ms;

        if raw.chars().count() > self.config.max_utterance_chars {
            return self.banked(
                ReplyCategory::GeneralFallback,
                at,
                req.context,
                reason_codes::DIALOGUE_UTTERANCE_TOO_LONG,
            );
        }

        let normalized = normalize(raw);
        let today = local_date(&req.time);

        let scan = extract_dates(raw, today)?;
        if !scan.dates.is_empty() {
            return self.scheduled(raw, scan, at);
        }

        if let Some(group) = DIRECT_RESPONSES
            .iter()
            .find(|g| matches_keyword(&normalized, g.triggers, 1))
        {
            match (group.id, req.context) {
                (DirectGroupId::Confirmation, DialogueContext::AwaitingDetails) => {
                    return single_reply(
                        AWAITING_CONTENT_PROMPT,
                        at,
                        DialogueContext::AwaitingDetails,
                        reason_codes::DIALOGUE_AWAITING_PROMPT,
                    );
                }
                // "sim" lives in the confirmation group; while the greeting
                // question is pending it means "yes, let's schedule".
                (DirectGroupId::Confirmation, DialogueContext::GreetingFlow) => {
                    return self.banked(
                        ReplyCategory::AffirmationFollowup,
                        at,
                        DialogueContext::AwaitingDetails,
                        reason_codes::DIALOGUE_AFFIRMATION,
                    );
                }
                _ => {
                    let text = self.pick(group.responses);
                    return single_reply(
                        &text,
                        at,
                        DialogueContext::Idle,
                        reason_codes::DIALOGUE_DIRECT_REPLY,
                    );
                }
            }
        }

        if req.context == DialogueContext::GreetingFlow {
            if matches_keyword(&normalized, YES_WORDS, 1)
                || matches_keyword(&normalized, SCHEDULING_INTENT_WORDS, 1)
            {
                return self.banked(
                    ReplyCategory::AffirmationFollowup,
                    at,
                    DialogueContext::AwaitingDetails,
                    reason_codes::DIALOGUE_AFFIRMATION,
                );
            }
            if matches_keyword(&normalized, NO_WORDS, 1) {
                return self.banked(
                    ReplyCategory::NegationFollowup,
                    at,
                    DialogueContext::Idle,
                    reason_codes::DIALOGUE_NEGATION,
                );
            }
        }

        if matches_keyword(&normalized, SCHEDULING_INTENT_WORDS, 1) {
            return self.banked(
                ReplyCategory::IntentDetectedAskDate,
                at,
                DialogueContext::AwaitingDetails,
                reason_codes::DIALOGUE_ASK_DATE,
            );
        }
        if matches_keyword(&normalized, GREETING_WORDS, 1) {
            return self.banked(
                ReplyCategory::GreetingsQuestion,
                at,
                DialogueContext::GreetingFlow,
                reason_codes::DIALOGUE_GREETING,
            );
        }
        if matches_keyword(&normalized, IDENTITY_WORDS, 2) {
            return self.banked(
                ReplyCategory::Identity,
                at,
                req.context,
                reason_codes::DIALOGUE_IDENTITY,
            );
        }
        if matches_keyword(&normalized, STATUS_WORDS, 2) {
            return self.banked(
                ReplyCategory::Status,
                at,
                req.context,
                reason_codes::DIALOGUE_STATUS,
            );
        }
        if matches_keyword(&normalized, GRATITUDE_WORDS, 1) {
            return self.banked(
                ReplyCategory::Gratitude,
                at,
                DialogueContext::Idle,
                reason_codes::DIALOGUE_GRATITUDE,
            );
        }

        if req.context == DialogueContext::AwaitingDetails {
            self.banked(
                ReplyCategory::Confused,
                at,
                DialogueContext::AwaitingDetails,
                reason_codes::DIALOGUE_FALLBACK_CONFUSED,
            )
        } else {
            self.banked(
                ReplyCategory::GeneralFallback,
                at,
                req.context,
                reason_codes::DIALOGUE_FALLBACK_GENERAL,
            )
        }
    }

    /// Runs the remaining extractors and turns every found date into a draft.
    fn scheduled(
        &mut self,
        raw: &str,
        scan: DateScan,
        at: u64,
    ) -> Result<TurnResponse, ContractViolation> {
        let time = extract_time(raw)?;
        let place = extract_location(raw, &scan.consumed);
        let money = extract_value(raw);

        let mut consumed = scan.consumed;
        consumed.push(time.consumed);
        consumed.push(place.consumed);
        consumed.push(format!("as {}", time.time.as_str()));
        consumed.push(money.consumed);

        let extraction = ExtractionResult::v1(
            scan.dates,
            time.time,
            place.location,
            money.value,
            consumed,
        )?;

        let title = synthesize_title(raw, &extraction.consumed_spans);
        let description = format!("Criado via Vega Chat: \"{raw}\"");

        let mut events = Vec::with_capacity(extraction.dates.len());
        for date in &extraction.dates {
            events.push(EventDraft::v1(
                title.clone(),
                date.clone(),
                extraction.time.clone(),
                extraction.location.clone(),
                extraction.value,
                description.clone(),
                EventColor::Blue,
                true,
            )?);
        }

        let technical =
            ReplyMessage::v1(ReplyRole::Assistant, confirmation_text(&title, &extraction), at, true)?;
        let phrase = self.pick(SUCCESS_PHRASES);
        let followup = ReplyMessage::v1(ReplyRole::Assistant, phrase, at, false)?;

        TurnResponse::v1(
            events,
            vec![technical, followup],
            DialogueContext::Idle,
            false,
            reason_codes::DIALOGUE_SCHEDULED,
        )
    }

    fn banked(
        &mut self,
        category: ReplyCategory,
        at: u64,
        next: DialogueContext,
        code: ReasonCodeId,
    ) -> Result<TurnResponse, ContractViolation> {
        let text = self.pick(bank(category));
        single_reply(&text, at, next, code)
    }

    fn pick(&mut self, list: &'static [&'static str]) -> String {
        let idx = self.selector.pick(list.len());
        list[idx.min(list.len().saturating_sub(1))].to_string()
    }
}

fn single_reply(
    text: &str,
    at: u64,
    next: DialogueContext,
    code: ReasonCodeId,
) -> Result<TurnResponse, ContractViolation> {
    let reply = ReplyMessage::v1(ReplyRole::Assistant, text.to_string(), at, false)?;
    TurnResponse::v1(Vec::new(), vec![reply], next, false, code)
}

/// Calendar date at the caller's UTC offset. The contract bounds both fields,
/// so the shifted timestamp always converts.
fn local_date(time: &TimeContext) -> NaiveDate {
    let shifted = time.now_unix_ms as i64 + i64::from(time.tz_offset_minutes) * 60_000;
    DateTime::<Utc>::from_timestamp_millis(shifted)
        .map(|dt| dt.date_naive())
        .unwrap_or_default()
}

fn confirmation_text(title: &str, extraction: &ExtractionResult) -> String {
    let listed: Vec<String> = extraction.dates.iter().map(|d| d.display_br()).collect();
    let date_list = listed.join(", ");
    let place = if extraction.location.is_empty() {
        String::new()
    } else {
        format!(" em {}", extraction.location)
    };
    let value = if extraction.value > 0.0 {
        format!(" (R$ {:.2})", extraction.value)
    } else {
        String::new()
    };
    let time = extraction.time.as_str();
    if extraction.dates.len() == 1 {
        format!("Agendado: \"{title}\"{place}{value} para {date_list} às {time}.")
    } else {
        format!(
            "Agendei \"{title}\"{place}{value} em {} datas: {date_list} às {time}.",
            extraction.dates.len()
        )
    }
}
