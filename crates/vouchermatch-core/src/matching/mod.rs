pub mod counterparty;
pub mod date;
pub mod lookup;
pub mod normalize;
pub mod policy;
pub mod types;
