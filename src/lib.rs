//! edu-copilot library - educator backend around the Gemini API

pub mod config;
pub mod error;
pub mod models;
pub mod prompts;
pub mod quiz;
pub mod server;
pub mod service;

// Re-export commonly used types
pub use config::{Config, ConfigOptions};
pub use error::{ApiError, ApiResult};
pub use models::QuizItem;
pub use server::ApiServer;
