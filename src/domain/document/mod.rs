//! Document payloads and decoding
//!
//! A document arrives as a data-URI-encoded file plus a declared media
//! category. Decoding turns it into raw bytes and selects the extraction
//! strategy; nothing here touches an external service.

mod payload;
mod transcript;

pub use payload::{DocumentPayload, ExtractionStrategy, MediaCategory};
pub use transcript::Transcript;
