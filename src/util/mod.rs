//! Small shared utilities: the persisted session storage adapters and
//! form field validators.

pub mod forms;
pub mod storage;
