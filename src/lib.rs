pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod server;
pub mod utils;

pub use config::{AnalyzerSettings, ServerConfig};
pub use core::{AudioAnalyzer, ImageAnalyzer, LexiconSentiment, TextAnalyzer};
pub use server::{create_router, AppState};
pub use utils::error::{AnalyzerError, Result};
