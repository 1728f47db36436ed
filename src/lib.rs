#![warn(rust_2018_idioms)]

pub mod adapter;
pub mod app;
pub mod artifacts;
pub mod config;
pub mod domain;
pub mod error;
pub mod handler;
pub mod healthcheck;
pub mod pipeline;
pub mod port;
pub mod preprocess;
pub mod samples;
pub mod view;

#[cfg(test)]
mod test_support;

pub use healthcheck::check_health;
