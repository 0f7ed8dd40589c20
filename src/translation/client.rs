use reqwest::Url;

use super::error::{Result, TranslateError};
use super::language::{Language, LanguageInput};
use super::response::{Translation, parse};
use super::transport::{HttpTransport, ReqwestTransport};

/// The public Google Translate gateway.
pub const DEFAULT_ENDPOINT: &str = "http://translate.google.com/translate_a/t";

/// Client for the translation endpoint.
///
/// Holds the source and target languages between calls. Both must be set
/// before [`translate`](Self::translate) is called; nothing is checked
/// earlier.
#[derive(Debug, Clone)]
pub struct TranslationClient<T = ReqwestTransport> {
    transport: T,
    endpoint: Url,
    source_language: Option<Language>,
    target_language: Option<Language>,
}

impl TranslationClient {
    /// Creates a client for the public gateway using `reqwest`.
    pub fn new() -> Self {
        Self::with_transport(ReqwestTransport::new())
    }
}

impl Default for TranslationClient {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: HttpTransport> TranslationClient<T> {
    /// Creates a client that sends its requests through `transport`.
    #[allow(clippy::expect_used)]
    pub fn with_transport(transport: T) -> Self {
        Self {
            transport,
            // expect is safe: DEFAULT_ENDPOINT is a compile-time constant
            endpoint: Url::parse(DEFAULT_ENDPOINT).expect("default endpoint is a valid URL"),
            source_language: None,
            target_language: None,
        }
    }

    /// Points the client at another gateway URL.
    ///
    /// # Errors
    ///
    /// Returns [`TranslateError::InvalidEndpoint`] if `endpoint` is not an
    /// absolute URL.
    pub fn with_endpoint(mut self, endpoint: &str) -> Result<Self> {
        self.endpoint = Url::parse(endpoint)
            .map_err(|e| TranslateError::InvalidEndpoint(format!("{endpoint}: {e}")))?;
        Ok(self)
    }

    pub const fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// Sets the source language from a code, a name or a resolved [`Language`].
    ///
    /// On error the previous source language is kept.
    pub fn set_source_language(&mut self, language: impl Into<LanguageInput>) -> Result<&mut Self> {
        self.source_language = Some(language.into().resolve()?);
        Ok(self)
    }

    /// Sets the target language from a code, a name or a resolved [`Language`].
    ///
    /// On error the previous target language is kept.
    pub fn set_target_language(&mut self, language: impl Into<LanguageInput>) -> Result<&mut Self> {
        self.target_language = Some(language.into().resolve()?);
        Ok(self)
    }

    pub const fn source_language(&self) -> Option<Language> {
        self.source_language
    }

    pub const fn target_language(&self) -> Option<Language> {
        self.target_language
    }

    /// Builds the GET URL for translating `text`.
    ///
    /// The query carries `client`, `text`, `sl`, `tl`, `ie` and `oe`, form
    /// encoded, appended to whatever query the endpoint already has.
    pub fn request_url(&self, text: &str) -> Result<Url> {
        let source = self
            .source_language
            .ok_or(TranslateError::SourceLanguageNotSet)?;
        let target = self
            .target_language
            .ok_or(TranslateError::TargetLanguageNotSet)?;

        let mut url = self.endpoint.clone();
        url.query_pairs_mut()
            .append_pair("client", "t")
            .append_pair("text", text)
            .append_pair("sl", source.code())
            .append_pair("tl", target.code())
            .append_pair("ie", "utf8")
            .append_pair("oe", "utf8");

        Ok(url)
    }

    /// Translates `text` from the source to the target language.
    ///
    /// Input and configuration are validated before any request is made.
    ///
    /// # Errors
    ///
    /// - [`TranslateError::EmptyInput`] if `text` is empty
    /// - [`TranslateError::SourceLanguageNotSet`] /
    ///   [`TranslateError::TargetLanguageNotSet`] if a language is missing
    /// - [`TranslateError::Transport`] if the request fails or the endpoint
    ///   answers with a non-2xx status
    /// - [`TranslateError::MalformedResponse`] if the body cannot be parsed
    pub async fn translate(&self, text: &str) -> Result<Translation> {
        if text.is_empty() {
            return Err(TranslateError::EmptyInput);
        }

        let url = self.request_url(text)?;
        let body = self.transport.get(&url).await?;

        parse(&body)
    }
}
