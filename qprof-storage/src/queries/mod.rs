//! Row structs and query functions, one module per table group.

pub mod active_rules;
pub mod profiles;
