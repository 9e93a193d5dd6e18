pub mod collection;
pub mod upload;
pub mod wallet;
