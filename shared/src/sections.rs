// =============================================================================
// Sections — identifiers for the scrollable regions of the page
// =============================================================================
//
// A section id is the DOM id of one <section>. The set of sections is
// configuration, generated together with the page layout, so it is carried as
// data rather than an enum. Two presets mirror the layouts the page has
// shipped with:
//
//   full    : home, about, experience, projects, skills, contact
//   compact : home, about, projects, contact
//
// =============================================================================

use std::fmt;

use crate::error::ConfigError;
use crate::{validate_identifier, MAX_SECTION_ID_LEN};

const FULL_PRESET: [&str; 6] = ["home", "about", "experience", "projects", "skills", "contact"];
const COMPACT_PRESET: [&str; 4] = ["home", "about", "projects", "contact"];

/// A validated section identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SectionId(String);

impl SectionId {
    pub fn parse(raw: &str) -> Result<SectionId, ConfigError> {
        if validate_identifier(raw, MAX_SECTION_ID_LEN) {
            Ok(SectionId(raw.to_string()))
        } else {
            Err(ConfigError::InvalidSection(raw.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Nav bar label: the id with its first letter upper-cased.
    pub fn label(&self) -> String {
        let mut chars = self.0.chars();
        match chars.next() {
            Some(first) => first.to_ascii_uppercase().to_string() + chars.as_str(),
            None => String::new(),
        }
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl PartialEq<str> for SectionId {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for SectionId {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

/// The ordered, duplicate-free list of sections the layout renders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionSet {
    ids: Vec<SectionId>,
}

impl SectionSet {
    /// Build a set from raw ids, rejecting empty lists, malformed ids and
    /// duplicates.
    pub fn from_ids<S: AsRef<str>>(raw: &[S]) -> Result<SectionSet, ConfigError> {
        if raw.is_empty() {
            return Err(ConfigError::EmptySections);
        }
        let mut ids: Vec<SectionId> = Vec::with_capacity(raw.len());
        for r in raw {
            let id = SectionId::parse(r.as_ref())?;
            if ids.contains(&id) {
                return Err(ConfigError::DuplicateSection(id.0));
            }
            ids.push(id);
        }
        Ok(SectionSet { ids })
    }

    /// Resolve a preset name ("full" or "compact").
    pub fn preset(name: &str) -> Result<SectionSet, ConfigError> {
        match name {
            "full" => Ok(SectionSet::full()),
            "compact" => Ok(SectionSet::compact()),
            other => Err(ConfigError::UnknownPreset(other.to_string())),
        }
    }

    pub fn full() -> SectionSet {
        SectionSet::from_static(&FULL_PRESET)
    }

    pub fn compact() -> SectionSet {
        SectionSet::from_static(&COMPACT_PRESET)
    }

    fn from_static(raw: &[&'static str]) -> SectionSet {
        SectionSet {
            ids: raw.iter().map(|s| SectionId(s.to_string())).collect(),
        }
    }

    /// The section shown at load and targeted by back-to-top.
    pub fn first(&self) -> &SectionId {
        // from_ids rejects empty lists and the presets are non-empty.
        &self.ids[0]
    }

    pub fn get(&self, raw: &str) -> Option<&SectionId> {
        self.ids.iter().find(|id| id.as_str() == raw)
    }

    pub fn contains(&self, raw: &str) -> bool {
        self.get(raw).is_some()
    }

    pub fn index_of(&self, raw: &str) -> Option<usize> {
        self.ids.iter().position(|id| id.as_str() == raw)
    }

    pub fn iter(&self) -> impl Iterator<Item = &SectionId> {
        self.ids.iter()
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

impl Default for SectionSet {
    fn default() -> Self {
        SectionSet::full()
    }
}
