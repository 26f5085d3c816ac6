pub mod config;
pub mod dispatch;
pub mod run;
pub mod schema;
pub mod validate;
