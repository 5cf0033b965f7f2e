//! Reading skills
//!
//! The five targeted reading-comprehension and vocabulary skills. The set is
//! closed: [`SkillFlags`] stores one flag per [`Skill`] variant, so no key can
//! be missing or added.

use std::fmt;
use std::str::FromStr;

use serde::ser::{Serialize, SerializeMap, Serializer};
use serde::Deserialize;

use crate::error::StateError;

/// A targeted reading skill
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Skill {
    /// Comprensión literal
    LiteralComprehension,
    /// Comprensión inferencial
    InferentialComprehension,
    /// Comprensión crítica
    CriticalComprehension,
    /// Vocabulario temático
    ThematicVocabulary,
    /// Estrategias de lectura
    ReadingStrategies,
}

impl Skill {
    /// All skills, in form order
    pub const ALL: [Skill; 5] = [
        Skill::LiteralComprehension,
        Skill::InferentialComprehension,
        Skill::CriticalComprehension,
        Skill::ThematicVocabulary,
        Skill::ReadingStrategies,
    ];

    /// Key used by the form and in serialized requests
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::LiteralComprehension => "literalComprehension",
            Self::InferentialComprehension => "inferentialComprehension",
            Self::CriticalComprehension => "criticalComprehension",
            Self::ThematicVocabulary => "thematicVocabulary",
            Self::ReadingStrategies => "readingStrategies",
        }
    }

    /// Form label
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::LiteralComprehension => "Comprensión literal",
            Self::InferentialComprehension => "Comprensión inferencial",
            Self::CriticalComprehension => "Comprensión crítica",
            Self::ThematicVocabulary => "Vocabulario temático",
            Self::ReadingStrategies => "Estrategias de lectura",
        }
    }

    const fn index(self) -> usize {
        self as usize
    }

    fn snake_key(self) -> &'static str {
        match self {
            Self::LiteralComprehension => "literal_comprehension",
            Self::InferentialComprehension => "inferential_comprehension",
            Self::CriticalComprehension => "critical_comprehension",
            Self::ThematicVocabulary => "thematic_vocabulary",
            Self::ReadingStrategies => "reading_strategies",
        }
    }
}

impl fmt::Display for Skill {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Skill {
    type Err = StateError;

    /// Accepts the camelCase form key or its snake_case spelling
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|skill| skill.key() == s || skill.snake_key() == s)
            .ok_or_else(|| StateError::UnknownSkill { name: s.to_string() })
    }
}

/// One boolean per [`Skill`], all false by default
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct SkillFlags {
    flags: [bool; Skill::ALL.len()],
}

impl SkillFlags {
    /// All flags off
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Flag value
    #[inline]
    #[must_use]
    pub fn get(&self, skill: Skill) -> bool {
        self.flags[skill.index()]
    }

    /// Overwrite a flag
    #[inline]
    pub fn set(&mut self, skill: Skill, enabled: bool) {
        self.flags[skill.index()] = enabled;
    }

    /// Every skill with its flag, in form order
    pub fn iter(&self) -> impl ExactSizeIterator<Item = (Skill, bool)> + '_ {
        Skill::ALL.into_iter().map(|skill| (skill, self.get(skill)))
    }

    /// Skills switched on
    pub fn enabled(&self) -> impl Iterator<Item = Skill> + '_ {
        self.iter().filter_map(|(skill, on)| on.then_some(skill))
    }

    /// Whether any skill is switched on
    #[inline]
    #[must_use]
    pub fn any(&self) -> bool {
        self.flags.iter().any(|on| *on)
    }
}

impl Serialize for SkillFlags {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(Skill::ALL.len()))?;
        for (skill, on) in self.iter() {
            map.serialize_entry(skill.key(), &on)?;
        }
        map.end()
    }
}
