#![forbid(unsafe_code)]

pub mod chat_cli;
