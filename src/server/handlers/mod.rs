pub mod bids;
pub mod catalog;
pub mod negotiations;
pub mod system;
