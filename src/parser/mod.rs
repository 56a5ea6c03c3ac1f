//! Descriptor parsing: whole banks and individual links

pub mod bank;
pub mod explodes;

pub use bank::parse_bank;
pub use explodes::{explode, LinkError};
