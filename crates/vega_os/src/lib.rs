#![forbid(unsafe_code)]

pub mod session;
