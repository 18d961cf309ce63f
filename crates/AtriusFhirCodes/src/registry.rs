//! Runtime view over the generated vocabularies.
//!
//! Each vocabulary is described by a [`VocabularyInfo`], built at compile
//! time from its [`CodedVocabulary`] impl. The generated `code_systems`
//! module lists all of them in `VOCABULARIES`, which lets callers check a
//! plain code against a vocabulary chosen at runtime by name or system URI.

use std::fmt;

use crate::coded::Coded;
use crate::error::CodeError;
use crate::vocabulary::CodedVocabulary;

/// One member of a vocabulary, as plain data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Concept {
    pub code: &'static str,
    pub display: &'static str,
    pub definition: Option<&'static str>,
}

/// Type-erased description of one vocabulary.
#[derive(Clone, Copy)]
pub struct VocabularyInfo {
    name: &'static str,
    system: &'static str,
    version: Option<&'static str>,
    len: usize,
    lookup: fn(&str) -> Option<Concept>,
    parse: fn(&str) -> Result<Concept, CodeError>,
    concepts: fn() -> Vec<Concept>,
}

fn concept_of<V: CodedVocabulary>(member: V) -> Concept {
    Concept {
        code: member.code(),
        display: member.display(),
        definition: member.definition(),
    }
}

fn lookup_in<V: CodedVocabulary>(code: &str) -> Option<Concept> {
    V::from_code(code).map(concept_of)
}

// Goes through `Coded::<V>::parse`, `as_enum` and the shared constant, so a
// member whose typed path disagrees with its table entry is reported.
fn parse_in<V: CodedVocabulary>(code: &str) -> Result<Concept, CodeError> {
    let coded = Coded::<V>::parse(code)?;
    match coded.as_enum()? {
        Some(member) if Coded::of(member) == &coded && member.code() == code => {
            Ok(concept_of(member))
        }
        _ => Err(CodeError::invalid_code(code, V::NAME)),
    }
}

fn concepts_of<V: CodedVocabulary>() -> Vec<Concept> {
    V::MEMBERS.iter().copied().map(concept_of).collect()
}

impl VocabularyInfo {
    pub const fn of<V: CodedVocabulary>() -> Self {
        Self {
            name: V::NAME,
            system: V::SYSTEM,
            version: V::VERSION,
            len: V::MEMBERS.len(),
            lookup: lookup_in::<V>,
            parse: parse_in::<V>,
            concepts: concepts_of::<V>,
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn system(&self) -> &'static str {
        self.system
    }

    pub fn version(&self) -> Option<&'static str> {
        self.version
    }

    /// Number of members.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Exact, case-sensitive lookup.
    pub fn lookup(&self, code: &str) -> Option<Concept> {
        (self.lookup)(code)
    }

    pub fn contains(&self, code: &str) -> bool {
        self.lookup(code).is_some()
    }

    /// Like [`lookup`](Self::lookup), failing with [`CodeError::InvalidCode`].
    pub fn validate_code(&self, code: &str) -> Result<Concept, CodeError> {
        self.lookup(code)
            .ok_or_else(|| CodeError::invalid_code(code, self.name))
    }

    /// Parses `code` into a typed [`Coded`] value of this vocabulary and
    /// describes the member it resolved to.
    pub fn parse(&self, code: &str) -> Result<Concept, CodeError> {
        (self.parse)(code)
    }

    /// All members in declaration order.
    pub fn concepts(&self) -> Vec<Concept> {
        (self.concepts)()
    }
}

impl fmt::Debug for VocabularyInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("VocabularyInfo")
            .field("name", &self.name)
            .field("system", &self.system)
            .field("version", &self.version)
            .field("len", &self.len)
            .finish()
    }
}

/// Every vocabulary compiled into this build.
pub fn vocabularies() -> &'static [VocabularyInfo] {
    #[cfg(feature = "R4")]
    {
        crate::r4::VOCABULARIES
    }
    #[cfg(not(feature = "R4"))]
    {
        &[]
    }
}

pub fn vocabulary_by_name(name: &str) -> Option<&'static VocabularyInfo> {
    vocabularies().iter().find(|v| v.name == name)
}

/// Looks a vocabulary up by its code system URI.
///
/// Several vocabularies can draw on one code system (`CarePlanStatus` is a
/// subset of `RequestStatus`); the one declaring the most members wins.
pub fn vocabulary_by_system(system: &str) -> Option<&'static VocabularyInfo> {
    vocabularies()
        .iter()
        .filter(|v| v.system == system)
        .max_by_key(|v| v.len)
}
