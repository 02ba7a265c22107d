#![forbid(unsafe_code)]

use vega_engines::dialogue::DialogueRuntime;
use vega_engines::responses::ReplySelector;
use vega_kernel_contracts::dialogue::{
    DialogueContext, ReplyMessage, ReplyRole, TimeContext, TurnRequest, TurnResponse,
};
use vega_kernel_contracts::{ContractViolation, Validate};

pub mod reason_codes {
    use vega_kernel_contracts::ReasonCodeId;

    // Session reason-code namespace. Values are placeholders until global registry lock.
    pub const SESSION_INTERNAL_PIPELINE_ERROR: ReasonCodeId = ReasonCodeId(0x4453_01F1);
}

/// Reply shown when the engine errors out mid-turn.
const FAIL_CLOSED_TEXT: &str =
    "Tive um problema para processar isso. Pode repetir de outro jeito?";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionConfig {
    pub session_enabled: bool,
    /// Pause the host should apply before showing replies, for a typing feel.
    pub think_delay_ms: u64,
}

impl SessionConfig {
    pub fn mvp_v1(session_enabled: bool) -> Self {
        Self {
            session_enabled,
            think_delay_ms: 700,
        }
    }
}

/// Seam between the session and the turn engine, so tests can script the
/// engine side.
pub trait DialogueEngine {
    fn run_turn(&mut self, req: &TurnRequest) -> Result<TurnResponse, ContractViolation>;
}

impl<S: ReplySelector> DialogueEngine for DialogueRuntime<S> {
    fn run_turn(&mut self, req: &TurnRequest) -> Result<TurnResponse, ContractViolation> {
        self.run(req)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum SessionOutcome {
    NotInvokedDisabled,
    NotInvokedBusy,
    /// Engine error or invalid engine payload; the fail-closed reply goes out
    /// and the context is preserved.
    Refused(TurnResponse),
    Forwarded(TurnResponse),
}

/// One chat session. Owns the conversational context between turns and a
/// busy latch that refuses re-entry while a turn is being delivered.
#[derive(Debug, Clone)]
pub struct ChatSession<E: DialogueEngine> {
    config: SessionConfig,
    engine: E,
    context: DialogueContext,
    busy: bool,
}

impl<E: DialogueEngine> ChatSession<E> {
    pub fn new(config: SessionConfig, engine: E) -> Self {
        Self {
            config,
            engine,
            context: DialogueContext::Idle,
            busy: false,
        }
    }

    pub fn context(&self) -> DialogueContext {
        self.context
    }

    pub fn is_busy(&self) -> bool {
        self.busy
    }

    pub fn think_delay_ms(&self) -> u64 {
        self.config.think_delay_ms
    }

    /// Runs one user turn. A malformed utterance is rejected before the busy
    /// latch engages. Engine failures never surface as errors; they become a
    /// fail-closed reply so the chat stays alive.
    pub fn submit(
        &mut self,
        utterance: &str,
        time: TimeContext,
    ) -> Result<SessionOutcome, ContractViolation> {
        if !self.config.session_enabled {
            return Ok(SessionOutcome::NotInvokedDisabled);
        }
        if self.busy {
            return Ok(SessionOutcome::NotInvokedBusy);
        }

        let req = TurnRequest::v1(utterance.to_string(), self.context, time)?;
        self.busy = true;

        let out = match self.engine.run_turn(&req) {
            Ok(out) => out,
            Err(_) => {
                return Ok(SessionOutcome::Refused(
                    self.fail_closed(req.time.now_unix_ms)?,
                ));
            }
        };
        if out.validate().is_err() {
            return Ok(SessionOutcome::Refused(
                self.fail_closed(req.time.now_unix_ms)?,
            ));
        }

        self.context = out.next_context;
        Ok(SessionOutcome::Forwarded(out))
    }

    /// Host acknowledgement that the replies reached the user; releases the
    /// busy latch.
    pub fn confirm_delivered(&mut self) {
        self.busy = false;
    }

    fn fail_closed(&self, at: u64) -> Result<TurnResponse, ContractViolation> {
        let reply =
            ReplyMessage::v1(ReplyRole::Assistant, FAIL_CLOSED_TEXT.to_string(), at, false)?;
        TurnResponse::v1(
            Vec::new(),
            vec![reply],
            self.context,
            false,
            reason_codes::SESSION_INTERNAL_PIPELINE_ERROR,
        )
    }
}
