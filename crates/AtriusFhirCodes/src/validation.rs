//! Post-build validation of coded elements.
//!
//! The strict build pass runs three checks in order: vocabulary membership,
//! the lexical rule of the FHIR `code` datatype, and ele-1 (a value or at
//! least one extension must be present).

use crate::element::Element;
use crate::error::CodeError;
use crate::extension::Extension;
use crate::vocabulary::CodedVocabulary;

/// Checks the lexical form of a FHIR `code`: `[^\s]+(\s[^\s]+)*`.
///
/// Control characters below U+0020 other than tab, line feed and carriage
/// return are rejected too.
pub fn check_code(code: &str) -> Result<(), CodeError> {
    let fail = |reason: &'static str| CodeError::InvalidCodeSyntax {
        code: code.to_string(),
        reason,
    };

    match code.chars().next() {
        Some(first) if !is_code_whitespace(first) => {}
        _ => return Err(fail("must begin with a non-whitespace character")),
    }
    if code.chars().next_back().is_some_and(is_code_whitespace) {
        return Err(fail("must end with a non-whitespace character"));
    }

    let mut previous_is_space = false;
    for ch in code.chars() {
        if is_code_whitespace(ch) {
            if ch != ' ' {
                return Err(fail("must not contain whitespace other than a single space"));
            }
            if previous_is_space {
                return Err(fail("must not contain consecutive spaces"));
            }
            previous_is_space = true;
        } else {
            if is_unsupported_control(ch) {
                return Err(fail("contains unsupported control characters"));
            }
            previous_is_space = false;
        }
    }
    Ok(())
}

// The whitespace classes of the FHIR reference validator: the separator
// categories minus the no-break spaces, plus the C0 separators U+001C..U+001F.
// U+0085 is not whitespace there.
fn is_code_whitespace(ch: char) -> bool {
    match ch {
        '\u{9}'..='\u{d}' | '\u{1c}'..='\u{1f}' => true,
        '\u{85}' | '\u{a0}' | '\u{2007}' | '\u{202f}' => false,
        _ => ch.is_whitespace(),
    }
}

fn is_unsupported_control(ch: char) -> bool {
    matches!(ch, '\u{0}'..='\u{8}' | '\u{b}' | '\u{c}' | '\u{e}'..='\u{1f}')
}

/// ele-1: an element needs a value or children.
pub fn require_value_or_children<V>(
    element: &Element<V, Extension>,
    vocabulary: &'static str,
) -> Result<(), CodeError> {
    if element.value.is_none() && !element.has_children() {
        return Err(CodeError::MissingValueOrChildren { vocabulary });
    }
    Ok(())
}

/// Full strict pass used by `CodedBuilder::build`.
pub(crate) fn validate<V: CodedVocabulary>(
    element: &Element<&'static str, Extension>,
) -> Result<(), CodeError> {
    if let Some(code) = element.value {
        V::try_from_code(code)?;
        check_code(code)?;
    }
    require_value_or_children(element, V::NAME)
}

/// `true` when the element has no value and carries the data-absent-reason
/// extension.
pub fn has_only_data_absent_reason_extension<V>(element: &Element<V, Extension>) -> bool {
    element.value.is_none()
        && element
            .extension
            .iter()
            .flatten()
            .any(Extension::is_data_absent_reason)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reason(code: &str) -> &'static str {
        match check_code(code) {
            Err(CodeError::InvalidCodeSyntax { reason, .. }) => reason,
            other => panic!("expected syntax error for {code:?}, got {other:?}"),
        }
    }

    #[test]
    fn accepts_well_formed_codes() {
        for code in ["planned", "in-progress", "MORN.early", "<=", "a b c", "0"] {
            assert_eq!(check_code(code), Ok(()), "{code}");
        }
    }

    #[test]
    fn rejects_malformed_codes() {
        assert_eq!(reason(""), "must begin with a non-whitespace character");
        assert_eq!(reason(" planned"), "must begin with a non-whitespace character");
        assert_eq!(reason("planned "), "must end with a non-whitespace character");
        assert_eq!(reason("in\tprogress"), "must not contain whitespace other than a single space");
        assert_eq!(reason("in  progress"), "must not contain consecutive spaces");
        assert_eq!(reason("in\u{1}progress"), "contains unsupported control characters");
    }

    #[test]
    fn whitespace_classes_follow_the_reference_validator() {
        // no-break spaces and NEL are ordinary characters
        for code in ["in\u{a0}progress", "a\u{2007}b", "a\u{202f}b", "a\u{85}b", "\u{a0}x\u{a0}"] {
            assert_eq!(check_code(code), Ok(()), "{code:?}");
        }
        // the information separators count as whitespace, not control characters
        assert_eq!(reason("a\u{1f}b"), "must not contain whitespace other than a single space");
        assert_eq!(reason("\u{1c}a"), "must begin with a non-whitespace character");
        assert_eq!(reason("a\u{2003}b"), "must not contain whitespace other than a single space");
        assert_eq!(reason("a\u{3000}"), "must end with a non-whitespace character");
    }

    #[test]
    fn ele_1_needs_value_or_extension() {
        let empty: Element<&str, Extension> = Element::default();
        assert_eq!(
            require_value_or_children(&empty, "EncounterStatus"),
            Err(CodeError::MissingValueOrChildren { vocabulary: "EncounterStatus" })
        );

        let id_only: Element<&str, Extension> = Element {
            id: Some("x".to_string()),
            ..Element::default()
        };
        assert!(require_value_or_children(&id_only, "EncounterStatus").is_err());

        let extended: Element<&str, Extension> = Element {
            extension: Some(vec![Extension::data_absent_reason("unknown")]),
            ..Element::default()
        };
        assert!(require_value_or_children(&extended, "EncounterStatus").is_ok());
        assert!(has_only_data_absent_reason_extension(&extended));
    }
}
