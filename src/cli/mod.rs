pub mod app;
pub mod commands;
pub mod context;
pub mod dispatch;
pub mod env;
pub mod find;
pub mod info;
pub mod parse;
pub mod runtime;
