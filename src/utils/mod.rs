pub mod identity;
pub mod token;
pub mod webutils;
