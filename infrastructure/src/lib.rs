//! Infrastructure layer for leetbud
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including configuration file loading.

pub mod catalog;
pub mod config;
pub mod openai;

// Re-export commonly used types
pub use catalog::leetcode::LeetCodeCatalog;
pub use config::{
    ConfigLoader, FileCatalogConfig, FileConfig, FileOpenAiConfig, FileOutputConfig,
    FileReplConfig, FileSessionConfig,
};
pub use openai::gateway::{OpenAiGateway, OpenAiSettings};
