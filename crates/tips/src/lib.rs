pub mod catalog;
pub mod handler;
pub mod models;
