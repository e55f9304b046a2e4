use std::path::{Path, PathBuf};

use thiserror::Error;
use url::Url;

/// Base for picture-match option thumbnails; the option keyword is appended as the query.
pub const PLACEHOLDER_IMAGE_BASE: &str = "https://source.unsplash.com/400x300/";

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MediaValidationError {
    #[error("media reference cannot be empty")]
    EmptyMediaUri,

    #[error("invalid media url: {0}")]
    InvalidUrl(String),
}

//
// ─── MEDIA REFERENCE ───────────────────────────────────────────────────────────
//

/// Where a question's illustration lives: a bundled asset path or a remote URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MediaUri {
    FilePath(PathBuf),
    Url(Url),
}

impl MediaUri {
    /// # Errors
    ///
    /// Returns `MediaValidationError::EmptyMediaUri` for an empty path.
    pub fn from_file(path: impl Into<PathBuf>) -> Result<Self, MediaValidationError> {
        let p = path.into();
        if p.as_os_str().is_empty() {
            return Err(MediaValidationError::EmptyMediaUri);
        }
        Ok(MediaUri::FilePath(p))
    }

    /// # Errors
    ///
    /// Returns `MediaValidationError` when the input is blank or not a URL.
    pub fn from_url(url: impl AsRef<str>) -> Result<Self, MediaValidationError> {
        let s = url.as_ref().trim();
        if s.is_empty() {
            return Err(MediaValidationError::EmptyMediaUri);
        }
        let u = Url::parse(s).map_err(|e| MediaValidationError::InvalidUrl(e.to_string()))?;
        Ok(MediaUri::Url(u))
    }

    /// Accepts either form: anything with an `http(s)` scheme is a URL, the rest a path.
    ///
    /// # Errors
    ///
    /// Returns `MediaValidationError` when the reference is blank or a malformed URL.
    pub fn parse(raw: &str) -> Result<Self, MediaValidationError> {
        let trimmed = raw.trim();
        if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
            Self::from_url(trimmed)
        } else {
            Self::from_file(trimmed)
        }
    }

    /// Placeholder image for a picture-match option keyword.
    ///
    /// # Errors
    ///
    /// Returns `MediaValidationError::EmptyMediaUri` for a blank keyword.
    pub fn placeholder(keyword: &str) -> Result<Self, MediaValidationError> {
        let keyword = keyword.trim();
        if keyword.is_empty() {
            return Err(MediaValidationError::EmptyMediaUri);
        }
        let mut url = Url::parse(PLACEHOLDER_IMAGE_BASE)
            .map_err(|e| MediaValidationError::InvalidUrl(e.to_string()))?;
        url.set_query(Some(keyword));
        Ok(MediaUri::Url(url))
    }

    #[must_use]
    pub fn as_path(&self) -> Option<&Path> {
        match self {
            MediaUri::FilePath(p) => Some(p.as_path()),
            MediaUri::Url(_) => None,
        }
    }

    #[must_use]
    pub fn as_url(&self) -> Option<&Url> {
        match self {
            MediaUri::Url(u) => Some(u),
            MediaUri::FilePath(_) => None,
        }
    }

    /// String suitable for an `img` `src` attribute.
    #[must_use]
    pub fn to_src(&self) -> String {
        match self {
            MediaUri::FilePath(p) => p.to_string_lossy().into_owned(),
            MediaUri::Url(u) => u.as_str().to_string(),
        }
    }
}
