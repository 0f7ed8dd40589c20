pub mod catalog;
mod client;
mod error;
mod language;
mod response;
mod transport;

pub use client::{DEFAULT_ENDPOINT, TranslationClient};
pub use error::{Result, TranslateError, TransportError};
pub use language::{Language, LanguageInput};
pub use response::{Dictionary, Field, Translation, TranslationField, parse as parse_response};
pub use transport::{HttpTransport, ReqwestTransport};
