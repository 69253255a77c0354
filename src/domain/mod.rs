pub mod credential;
pub mod invocation;
pub mod operation;
pub mod page;
pub mod search_config;
