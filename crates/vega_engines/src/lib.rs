#![forbid(unsafe_code)]

pub mod clock;
pub mod dates;
pub mod dialogue;
pub mod fuzzy;
pub mod money;
pub mod normalize;
pub mod place;
pub mod responses;
pub mod title;
pub mod vocab;
