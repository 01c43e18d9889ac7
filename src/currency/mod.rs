//! Currency codes, recognised price symbols and domain-based currency detection.

pub mod code;
pub mod registry;

pub use code::{CurrencyCode, CurrencyParseError};
pub use registry::{CurrencyRegistry, DomainRule, DOMAIN_RULES};
