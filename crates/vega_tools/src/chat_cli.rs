#![forbid(unsafe_code)]

use std::time::{SystemTime, UNIX_EPOCH};

use vega_kernel_contracts::dialogue::{ReplyMessage, ReplyRole};
use vega_kernel_contracts::event::EventDraft;

pub const CHAT_USAGE: &str = "usage: vega chat [--tz-offset-minutes <n>] [--fixed-replies]";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CliOptions {
    /// Minutes east of UTC. Brasilia time unless overridden.
    pub tz_offset_minutes: i16,
    /// Deterministic reply choice, for demos and scripted transcripts.
    pub fixed_replies: bool,
}

impl Default for CliOptions {
    fn default() -> Self {
        Self {
            tz_offset_minutes: -180,
            fixed_replies: false,
        }
    }
}

pub fn parse_chat_args(args: &[String]) -> Result<CliOptions, String> {
    let mut options = CliOptions::default();
    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--tz-offset-minutes" => {
                let raw = args.get(i + 1).ok_or_else(|| CHAT_USAGE.to_string())?;
                options.tz_offset_minutes = raw
                    .parse()
                    .map_err(|_| format!("invalid --tz-offset-minutes value: {raw}"))?;
                if !(-840..=840).contains(&options.tz_offset_minutes) {
                    return Err(format!(
                        "--tz-offset-minutes out of range: {raw} (expected -840..=840)"
                    ));
                }
                i += 2;
            }
            "--fixed-replies" => {
                options.fixed_replies = true;
                i += 1;
            }
            other => return Err(format!("unknown chat option: {other}. {CHAT_USAGE}")),
        }
    }
    Ok(options)
}

/// One transcript line. Scheduling confirmations get a marker so they stand
/// out from small talk.
pub fn render_reply(reply: &ReplyMessage) -> String {
    match reply.role {
        ReplyRole::User => format!("você> {}", reply.text),
        ReplyRole::Assistant => {
            if reply.is_schedule_confirmation {
                format!("vega> {} [evento criado]", reply.text)
            } else {
                format!("vega> {}", reply.text)
            }
        }
    }
}

pub fn render_event_json(draft: &EventDraft) -> Result<String, String> {
    serde_json::to_string(draft).map_err(|e| e.to_string())
}

pub fn now_unix_ms() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use vega_kernel_contracts::event::{CanonicalDate, ClockTime, EventColor};

    fn args(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn at_chat_cli_01_defaults_to_brasilia_offset() {
        let options = parse_chat_args(&[]).unwrap();
        assert_eq!(options.tz_offset_minutes, -180);
        assert!(!options.fixed_replies);
    }

    #[test]
    fn at_chat_cli_02_parses_both_flags() {
        let options =
            parse_chat_args(&args(&["--tz-offset-minutes", "120", "--fixed-replies"])).unwrap();
        assert_eq!(options.tz_offset_minutes, 120);
        assert!(options.fixed_replies);
    }

    #[test]
    fn at_chat_cli_03_rejects_unknown_options() {
        let err = parse_chat_args(&args(&["--verbose"])).unwrap_err();
        assert!(err.contains("unknown chat option"));
    }

    #[test]
    fn at_chat_cli_04_rejects_bad_offset_values() {
        assert!(parse_chat_args(&args(&["--tz-offset-minutes"])).is_err());
        assert!(parse_chat_args(&args(&["--tz-offset-minutes", "abc"])).is_err());
        let err = parse_chat_args(&args(&["--tz-offset-minutes", "900"])).unwrap_err();
        assert!(err.contains("out of range"));
    }

    #[test]
    fn at_chat_cli_05_renders_both_roles() {
        let user = ReplyMessage::v1(ReplyRole::User, "oi".to_string(), 1, false).unwrap();
        assert_eq!(render_reply(&user), "você> oi");

        let plain =
            ReplyMessage::v1(ReplyRole::Assistant, "Olá!".to_string(), 1, false).unwrap();
        assert_eq!(render_reply(&plain), "vega> Olá!");

        let confirmation =
            ReplyMessage::v1(ReplyRole::Assistant, "Agendado.".to_string(), 1, true).unwrap();
        assert_eq!(render_reply(&confirmation), "vega> Agendado. [evento criado]");
    }

    #[test]
    fn at_chat_cli_06_event_json_uses_camel_case_keys() {
        let draft = EventDraft::v1(
            "Dentista".to_string(),
            CanonicalDate::new("2026-03-15").unwrap(),
            ClockTime::new("14:00").unwrap(),
            String::new(),
            0.0,
            "Criado via Vega Chat: \"Dentista 15/03 as 14h\"".to_string(),
            EventColor::Blue,
            true,
        )
        .unwrap();
        let json = render_event_json(&draft).unwrap();
        assert!(json.contains("\"syncHint\":true"));
        assert!(json.contains("\"date\":\"2026-03-15\""));
        assert!(json.contains("\"color\":\"blue\""));
    }
}
