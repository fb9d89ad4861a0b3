pub mod create_registry;
pub mod register_beneficiary;
pub mod fund_treasury;
pub mod claim_tokens;
pub mod emit_claim_quote;

pub use create_registry::*;
pub use register_beneficiary::*;
pub use fund_treasury::*;
pub use claim_tokens::*;
pub use emit_claim_quote::*;
