pub mod token_claims;
