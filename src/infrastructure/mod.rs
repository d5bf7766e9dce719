//! Infrastructure layer - external collaborators and wiring

pub mod credentials;
pub mod http_client;
pub mod llm;
pub mod logging;
pub mod ocr;
pub mod pdf;
pub mod services;

pub use http_client::{HttpClient, HttpClientTrait};
