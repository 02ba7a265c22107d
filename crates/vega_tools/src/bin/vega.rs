#![forbid(unsafe_code)]

use std::env;
use std::io::{self, BufRead, Write};
use std::thread;
use std::time::Duration;

use vega_engines::dialogue::{DialogueConfig, DialogueRuntime};
use vega_engines::responses::{FixedSelector, UniformSelector, WELCOME_TEXT};
use vega_kernel_contracts::dialogue::{ReplyMessage, ReplyRole, TimeContext};
use vega_os::session::{ChatSession, DialogueEngine, SessionConfig, SessionOutcome};
use vega_tools::chat_cli::{
    now_unix_ms, parse_chat_args, render_event_json, render_reply, CliOptions, CHAT_USAGE,
};

fn main() {
    if let Err(err) = run() {
        eprintln!("{err}");
        std::process::exit(2);
    }
}

fn run() -> Result<(), String> {
    let args: Vec<String> = env::args().skip(1).collect();
    if args.is_empty() || args[0] != "chat" {
        return Err(CHAT_USAGE.to_string());
    }
    let options = parse_chat_args(&args[1..])?;

    let config = DialogueConfig::mvp_v1();
    if options.fixed_replies {
        let runtime = DialogueRuntime::new(config, FixedSelector { index: 0 });
        chat_loop(
            ChatSession::new(SessionConfig::mvp_v1(true), runtime),
            options,
        )
    } else {
        let runtime = DialogueRuntime::new(config, UniformSelector);
        chat_loop(
            ChatSession::new(SessionConfig::mvp_v1(true), runtime),
            options,
        )
    }
}

fn chat_loop<E: DialogueEngine>(
    mut session: ChatSession<E>,
    options: CliOptions,
) -> Result<(), String> {
    println!("{WELCOME_TEXT}");

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    loop {
        print!("> ");
        io::stdout().flush().map_err(|e| e.to_string())?;

        let Some(line) = lines.next() else {
            break;
        };
        let line = line.map_err(|e| e.to_string())?;
        let text = line.trim();
        if text.is_empty() {
            continue;
        }
        if text == "sair" || text == "exit" {
            break;
        }

        let time = TimeContext::v1(now_unix_ms(), options.tz_offset_minutes)
            .map_err(|e| format!("bad time context: {e:?}"))?;
        let outcome = match session.submit(text, time) {
            Ok(outcome) => outcome,
            Err(err) => {
                eprintln!("turn rejected: {err:?}");
                continue;
            }
        };
        let response = match outcome {
            SessionOutcome::NotInvokedDisabled | SessionOutcome::NotInvokedBusy => continue,
            SessionOutcome::Refused(resp) | SessionOutcome::Forwarded(resp) => resp,
        };

        let sent = ReplyMessage::v1(ReplyRole::User, text.to_string(), time.now_unix_ms, false)
            .map_err(|e| format!("bad user message: {e:?}"))?;
        println!("{}", render_reply(&sent));

        thread::sleep(Duration::from_millis(session.think_delay_ms()));
        for reply in &response.replies {
            println!("{}", render_reply(reply));
        }
        for draft in &response.events {
            println!("event> {}", render_event_json(draft)?);
        }
        session.confirm_delivered();
    }
    Ok(())
}
