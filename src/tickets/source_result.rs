use camino::Utf8PathBuf;

/// The outcome of looking for a ticket source.
#[derive(Debug, Clone)]
pub enum SourceResult<T> {
    /// A source was found and loaded.
    Found(T),

    /// None of the candidate locations exist. Carries the locations that were tried.
    NotFound(Vec<Utf8PathBuf>),
}

impl<T> SourceResult<T> {
    /// Returns `true` if the result is `Found`.
    #[must_use]
    pub const fn is_found(&self) -> bool {
        matches!(self, Self::Found(_))
    }

    /// Returns a reference to the contained data if `Found`, otherwise `None`.
    #[must_use]
    pub const fn as_ref(&self) -> Option<&T> {
        match self {
            Self::Found(data) => Some(data),
            Self::NotFound(_) => None,
        }
    }

    /// Converts into the contained data if `Found`, otherwise `None`.
    #[must_use]
    pub fn found(self) -> Option<T> {
        match self {
            Self::Found(data) => Some(data),
            Self::NotFound(_) => None,
        }
    }
}
