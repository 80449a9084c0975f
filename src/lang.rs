//! Language catalog.
//!
//! Every supported language is a `const` generated from the single table in
//! [`data`]. Lookups never allocate beyond case-folding the probe string and
//! never touch model data.

pub mod data;

use crate::error::DetectionError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::{cmp::Ordering, fmt, str::FromStr};

pub use data::{
    AFRIKAANS, ARABIC, ARMENIAN, BENGALI, BOKMAL, BULGARIAN, CEBUANO, CHINESE, CZECH, DANISH,
    DUTCH, ENGLISH, ESPERANTO, FINNISH, FRENCH, GEORGIAN, GERMAN, GREEK, HEBREW, HINDI,
    HUNGARIAN, INDONESIAN, ITALIAN, JAPANESE, KOREAN, LATIN, MARATHI, OLD_ENGLISH, PERSIAN,
    POLISH, PORTUGUESE, ROMANIAN, RUSSIAN, SERBIAN, SPANISH, SWAHILI, SWEDISH, THAI, TURKISH,
    UKRAINIAN, VIETNAMESE,
};

/// A writing system. Only used to group languages and to pre-filter
/// candidates by the letters a text actually contains.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Script {
    Arabic,
    Armenian,
    Bengali,
    Cyrillic,
    Devanagari,
    Georgian,
    Greek,
    Han,
    Hangul,
    Hebrew,
    Hiragana,
    Katakana,
    Latin,
    Thai,
}

impl Script {
    pub const ALL: [Script; 14] = [
        Script::Arabic,
        Script::Armenian,
        Script::Bengali,
        Script::Cyrillic,
        Script::Devanagari,
        Script::Georgian,
        Script::Greek,
        Script::Han,
        Script::Hangul,
        Script::Hebrew,
        Script::Hiragana,
        Script::Katakana,
        Script::Latin,
        Script::Thai,
    ];

    /// snake_case name, as used in `all_languages_with_<name>_script`.
    pub const fn name(self) -> &'static str {
        match self {
            Script::Arabic => "arabic",
            Script::Armenian => "armenian",
            Script::Bengali => "bengali",
            Script::Cyrillic => "cyrillic",
            Script::Devanagari => "devanagari",
            Script::Georgian => "georgian",
            Script::Greek => "greek",
            Script::Han => "han",
            Script::Hangul => "hangul",
            Script::Hebrew => "hebrew",
            Script::Hiragana => "hiragana",
            Script::Katakana => "katakana",
            Script::Latin => "latin",
            Script::Thai => "thai",
        }
    }

    pub fn from_name(name: &str) -> Option<Script> {
        Script::ALL
            .into_iter()
            .find(|s| s.name().eq_ignore_ascii_case(name.trim()))
    }

    #[inline(always)]
    pub(crate) const fn bit(self) -> u16 {
        1 << self as u16
    }
}

impl fmt::Display for Script {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A catalog language. Values only exist as the constants generated in
/// [`data`]; equality and ordering follow catalog position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Language {
    pub(crate) ordinal: u8,
    pub(crate) name: &'static str,
    pub(crate) iso_639_1: Option<&'static str>,
    pub(crate) iso_639_3: &'static str,
    pub(crate) scripts: &'static [Script],
    pub(crate) spoken: bool,
}

impl Language {
    #[inline(always)]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Two-letter code; `None` for languages without one (Cebuano, Old English).
    #[inline(always)]
    pub const fn iso_code_639_1(&self) -> Option<&'static str> {
        self.iso_639_1
    }

    #[inline(always)]
    pub const fn iso_code_639_3(&self) -> &'static str {
        self.iso_639_3
    }

    #[inline(always)]
    pub const fn scripts(&self) -> &'static [Script] {
        self.scripts
    }

    #[inline(always)]
    pub const fn is_spoken(&self) -> bool {
        self.spoken
    }

    #[inline]
    pub fn is_written_in(&self, script: Script) -> bool {
        self.scripts.contains(&script)
    }

    /// Position in the catalog; also the index of this language's model slot.
    #[inline(always)]
    pub(crate) const fn index(&self) -> usize {
        self.ordinal as usize
    }

    #[inline]
    pub(crate) fn script_bits(&self) -> u16 {
        self.scripts.iter().fold(0, |bits, s| bits | s.bit())
    }
}

impl PartialOrd for Language {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Language {
    fn cmp(&self, other: &Self) -> Ordering {
        self.ordinal.cmp(&other.ordinal)
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

impl FromStr for Language {
    type Err = DetectionError;

    /// Accepts a canonical name (`"Old English"`, `"OLD_ENGLISH"`) or either ISO code.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        data::from_name(s)
            .or_else(|| data::from_iso_code(s))
            .ok_or_else(|| DetectionError::UnrecognizedLanguage(s.to_string()))
    }
}

impl Serialize for Language {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name)
    }
}

impl<'de> Deserialize<'de> for Language {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

// ---------------------------------------------------------------------------
//    Catalog operations
// ---------------------------------------------------------------------------

/// Every catalog language, in catalog order.
#[inline]
pub fn all_languages() -> &'static [Language] {
    data::ALL_LANGUAGES
}

/// Every language still in everyday use, in catalog order.
pub fn all_spoken_languages() -> Vec<Language> {
    data::ALL_LANGUAGES
        .iter()
        .copied()
        .filter(Language::is_spoken)
        .collect()
}

/// Every language written in `script`, in catalog order.
pub fn all_with_script(script: Script) -> Vec<Language> {
    data::ALL_LANGUAGES
        .iter()
        .copied()
        .filter(|l| l.is_written_in(script))
        .collect()
}

/// Resolve a 639-1 or 639-3 code (case-insensitive).
pub fn language_for_iso_code(code: &str) -> Result<Language, DetectionError> {
    data::from_iso_code(code).ok_or_else(|| DetectionError::UnrecognizedIsoCode(code.to_string()))
}

/// 639-1 code of the language named by `language` (name or code).
///
/// `Ok(None)` means the language exists but has no two-letter code.
pub fn iso_code_639_1_for(language: &str) -> Result<Option<&'static str>, DetectionError> {
    language.parse::<Language>().map(|l| l.iso_code_639_1())
}

/// 639-3 code of the language named by `language` (name or code).
pub fn iso_code_639_3_for(language: &str) -> Result<&'static str, DetectionError> {
    language.parse::<Language>().map(|l| l.iso_code_639_3())
}
