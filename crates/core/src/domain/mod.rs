pub mod asset;
pub mod contract;
pub mod preferences;
pub mod recommendation;
