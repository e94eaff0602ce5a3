//! Remote service client
//!
//! - `splitwise` - Blocking HTTP client for the Splitwise REST API, plus
//!   response decoding helpers shared with tests

pub mod splitwise;

pub use splitwise::{api_error_message, parse_expenses, parse_groups, SplitwiseClient};
