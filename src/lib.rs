pub mod api;
pub mod classifier;
pub mod config;
pub mod data_models;
pub mod error;
pub mod extractor;
pub mod gateway;
pub mod normalizer;
pub mod prompt;
pub mod related;
