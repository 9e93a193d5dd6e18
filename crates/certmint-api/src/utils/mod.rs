pub mod forms;
pub mod upload;
