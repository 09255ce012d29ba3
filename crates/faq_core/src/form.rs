use std::fmt;

use url::Url;

const DEFAULT_PLATFORM: &str = "df";
const DEFAULT_LANGUAGE: &str = "en";
const DEFAULT_FAQ_COUNT: u32 = 10;

/// Snapshot of the form fields taken when the user submits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormInput {
    pub url: String,
    /// Target platform code as chosen in the form; passed through unchecked.
    pub platform: String,
    pub language: String,
    pub faq_count: u32,
}

impl FormInput {
    /// Form input with the page's preselected platform, language and count.
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            platform: DEFAULT_PLATFORM.to_string(),
            language: DEFAULT_LANGUAGE.to_string(),
            faq_count: DEFAULT_FAQ_COUNT,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    Malformed { input: String },
    MissingHost { input: String },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::Malformed { .. } => {
                write!(f, "Please enter a valid URL (e.g. https://example.com)")
            }
            ValidationError::MissingHost { .. } => write!(f, "URL must include a host"),
        }
    }
}

/// Accepts only absolute URLs that carry both a scheme and a host.
pub fn validate_url(raw: &str) -> Result<Url, ValidationError> {
    let trimmed = raw.trim();
    let parsed = Url::parse(trimmed).map_err(|_| ValidationError::Malformed {
        input: trimmed.to_string(),
    })?;
    match parsed.host_str() {
        Some(host) if !host.is_empty() => Ok(parsed),
        _ => Err(ValidationError::MissingHost {
            input: trimmed.to_string(),
        }),
    }
}
