//! Output formatters (human and JSONL)

pub mod human;
pub mod jsonl;
pub mod rule_listing;

pub use human::HumanFormatter;
pub use jsonl::JsonlFormatter;
pub use rule_listing::{
    RuleListingHumanFormatter, RuleListingJsonlFormatter, TokenEntry, list_tokens,
};
