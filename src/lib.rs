pub mod api;
pub mod app;
pub mod catalog;
pub mod config;
pub mod engine;
pub mod entities;
pub mod error;
pub mod external;
pub mod headless;
pub mod presenter;
pub mod render;
pub mod synchronizer;

#[cfg(test)]
mod testing;
