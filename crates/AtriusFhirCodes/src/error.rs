use thiserror::Error;

/// Errors raised while constructing or reading a coded value.
///
/// Every variant carries enough context to report which vocabulary rejected
/// the input, so callers can surface the message without wrapping it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CodeError {
    /// The code is not a member of the vocabulary.
    ///
    /// Matching is exact and case-sensitive: `"Planned"` is not a member of a
    /// vocabulary that declares `"planned"`.
    #[error("invalid code '{code}' for {vocabulary}")]
    InvalidCode {
        code: String,
        vocabulary: &'static str,
    },

    /// The code violates the lexical rule of the FHIR `code` datatype.
    #[error("Code value: '{code}' {reason}")]
    InvalidCodeSyntax { code: String, reason: &'static str },

    /// A coded element carried neither a value nor any extension (ele-1).
    #[error("ele-1: {vocabulary} element must have a value or children")]
    MissingValueOrChildren { vocabulary: &'static str },
}

impl CodeError {
    pub(crate) fn invalid_code(code: &str, vocabulary: &'static str) -> Self {
        CodeError::InvalidCode {
            code: code.to_string(),
            vocabulary,
        }
    }
}
