// Script classification by code-point range.
//
// Only the blocks needed to tell catalog scripts apart are listed. Anything
// outside them (digits, symbols, scripts no catalog language uses) yields
// `None` and never filters candidates.

use crate::lang::Script;

// Basic Latin letters, Latin-1 letters, Latin Extended-A/B, IPA, Latin
// Extended Additional (Vietnamese).
#[inline(always)]
pub fn is_latin(c: char) -> bool {
    matches!(c as u32,
        0x0041..=0x005A |
        0x0061..=0x007A |
        0x00AA | 0x00BA |
        0x00C0..=0x00D6 |
        0x00D8..=0x00F6 |
        0x00F8..=0x024F |
        0x0250..=0x02AF |
        0x1E00..=0x1EFF |
        0xFF21..=0xFF3A | // Fullwidth A-Z
        0xFF41..=0xFF5A   // Fullwidth a-z
    )
}

#[inline(always)]
pub fn is_greek(c: char) -> bool {
    matches!(c as u32, 0x0370..=0x03FF | 0x1F00..=0x1FFF)
}

#[inline(always)]
pub fn is_cyrillic(c: char) -> bool {
    matches!(c as u32, 0x0400..=0x052F | 0x1C80..=0x1C8F | 0x2DE0..=0x2DFF | 0xA640..=0xA69F)
}

#[inline(always)]
pub fn is_armenian(c: char) -> bool {
    matches!(c as u32, 0x0530..=0x058F | 0xFB13..=0xFB17)
}

#[inline(always)]
pub fn is_hebrew(c: char) -> bool {
    matches!(c as u32, 0x0590..=0x05FF | 0xFB1D..=0xFB4F)
}

// Arabic + Supplement + Presentation Forms A/B.
#[inline(always)]
pub fn is_arabic(c: char) -> bool {
    matches!(c as u32,
        0x0600..=0x06FF |
        0x0750..=0x077F |
        0x08A0..=0x08FF |
        0xFB50..=0xFDFF |
        0xFE70..=0xFEFF
    )
}

#[inline(always)]
pub fn is_devanagari(c: char) -> bool {
    matches!(c as u32, 0x0900..=0x097F | 0xA8E0..=0xA8FF)
}

#[inline(always)]
pub fn is_bengali(c: char) -> bool {
    matches!(c as u32, 0x0980..=0x09FF)
}

#[inline(always)]
pub fn is_thai(c: char) -> bool {
    matches!(c as u32, 0x0E00..=0x0E7F)
}

#[inline(always)]
pub fn is_georgian(c: char) -> bool {
    matches!(c as u32, 0x10A0..=0x10FF | 0x1C90..=0x1CBF | 0x2D00..=0x2D2F)
}

// Hangul syllables + jamo + compatibility + extended ranges.
#[inline(always)]
pub fn is_hangul(c: char) -> bool {
    matches!(c as u32,
        0xAC00..=0xD7AF  | // Syllables
        0x1100..=0x11FF  | // Jamo
        0x3130..=0x318F  | // Compatibility Jamo
        0xA960..=0xA97F  | // Jamo Ext A
        0xD7B0..=0xD7FF    // Jamo Ext B
    )
}

// Hiragana block.
#[inline(always)]
pub fn is_hiragana(c: char) -> bool {
    matches!(c as u32, 0x3040..=0x309F)
}

// Katakana + phonetic extensions + halfwidth forms.
#[inline(always)]
pub fn is_katakana(c: char) -> bool {
    matches!(c as u32,
        0x30A0..=0x30FF  | // Katakana
        0x31F0..=0x31FF  | // Phonetic Extensions
        0xFF66..=0xFF9F    // Halfwidth Katakana
    )
}

// CJK Unified Ideographs, Extension A, Compatibility, Extension B.
#[inline(always)]
pub fn is_han(c: char) -> bool {
    matches!(c as u32,
        0x3400..=0x4DBF   |
        0x4E00..=0x9FFF   |
        0xF900..=0xFAFF   |
        0x20000..=0x2A6DF
    )
}

/// Script of a single character, if it belongs to one the catalog uses.
#[inline]
pub fn script_of(c: char) -> Option<Script> {
    if c.is_ascii() {
        return c.is_ascii_alphabetic().then_some(Script::Latin);
    }
    let script = if is_latin(c) {
        Script::Latin
    } else if is_cyrillic(c) {
        Script::Cyrillic
    } else if is_greek(c) {
        Script::Greek
    } else if is_arabic(c) {
        Script::Arabic
    } else if is_hebrew(c) {
        Script::Hebrew
    } else if is_armenian(c) {
        Script::Armenian
    } else if is_devanagari(c) {
        Script::Devanagari
    } else if is_bengali(c) {
        Script::Bengali
    } else if is_thai(c) {
        Script::Thai
    } else if is_georgian(c) {
        Script::Georgian
    } else if is_hiragana(c) {
        Script::Hiragana
    } else if is_katakana(c) {
        Script::Katakana
    } else if is_hangul(c) {
        Script::Hangul
    } else if is_han(c) {
        Script::Han
    } else {
        return None;
    };
    Some(script)
}

/// Set of scripts seen in a text, one bit per [`Script`].
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ScriptSet(u16);

impl ScriptSet {
    #[inline(always)]
    pub fn insert(&mut self, script: Script) {
        self.0 |= script.bit();
    }

    #[inline(always)]
    pub fn contains(&self, script: Script) -> bool {
        self.0 & script.bit() != 0
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    #[inline(always)]
    pub(crate) fn intersects_bits(&self, bits: u16) -> bool {
        self.0 & bits != 0
    }

    pub fn iter(&self) -> impl Iterator<Item = Script> + '_ {
        Script::ALL.into_iter().filter(|s| self.contains(*s))
    }
}

impl FromIterator<Script> for ScriptSet {
    fn from_iter<I: IntoIterator<Item = Script>>(iter: I) -> Self {
        let mut set = ScriptSet::default();
        for script in iter {
            set.insert(script);
        }
        set
    }
}
