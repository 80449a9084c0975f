use crate::lang::{Language, Script};

use phf::{Map, phf_map};

/// ---------------------------------------------------------------------------
///    Macro – generates everything from a single table
/// ---------------------------------------------------------------------------
///
/// Per row: constant, canonical name, 639-1 code (possibly absent), 639-3
/// code, scripts, spoken flag. Row order is catalog order.
macro_rules! define_languages {
    (@iso1 $code:literal) => { Some($code) };
    (@iso1) => { None };
    ($(
        $ident:ident, $name:literal,
        iso1: [$($iso1:literal)?],
        iso3: $iso3:literal,
        scripts: [$($script:ident),+ $(,)?],
        spoken: $spoken:literal
    );+ $(;)?) => {
        // Catalog positions
        #[allow(non_camel_case_types, clippy::upper_case_acronyms, dead_code)]
        #[repr(u8)]
        enum Ordinal {
            $($ident),+
        }

        // Public `Language` constants
        $(
            pub const $ident: Language = Language {
                ordinal: Ordinal::$ident as u8,
                name: $name,
                iso_639_1: define_languages!(@iso1 $($iso1)?),
                iso_639_3: $iso3,
                scripts: &[$(Script::$script),+],
                spoken: $spoken,
            };
        )+

        pub static ALL_LANGUAGES: &[Language] = &[$($ident),+];

        pub(crate) static ISO_639_1: Map<&'static str, Language> = phf_map! {
            $($($iso1 => $ident,)?)+
        };

        pub(crate) static ISO_639_3: Map<&'static str, Language> = phf_map! {
            $($iso3 => $ident,)+
        };

        // Version-1 model files, indexed by catalog position.
        pub(crate) static MODEL_ASSETS: &[&str] = &[
            $(include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/assets/models/", $iso3, ".json"))),+
        ];
    };
}

// ---------------------------------------------------------------------------
//    Language definitions (single source of truth)
// ---------------------------------------------------------------------------
define_languages! {
    AFRIKAANS,   "Afrikaans",   iso1: ["af"], iso3: "afr", scripts: [Latin],      spoken: true;
    ARABIC,      "Arabic",      iso1: ["ar"], iso3: "ara", scripts: [Arabic],     spoken: true;
    ARMENIAN,    "Armenian",    iso1: ["hy"], iso3: "hye", scripts: [Armenian],   spoken: true;
    BENGALI,     "Bengali",     iso1: ["bn"], iso3: "ben", scripts: [Bengali],    spoken: true;
    BOKMAL,      "Bokmal",      iso1: ["nb"], iso3: "nob", scripts: [Latin],      spoken: true;
    BULGARIAN,   "Bulgarian",   iso1: ["bg"], iso3: "bul", scripts: [Cyrillic],   spoken: true;
    CEBUANO,     "Cebuano",     iso1: [],     iso3: "ceb", scripts: [Latin],      spoken: true;
    CHINESE,     "Chinese",     iso1: ["zh"], iso3: "zho", scripts: [Han],        spoken: true;
    CZECH,       "Czech",       iso1: ["cs"], iso3: "ces", scripts: [Latin],      spoken: true;
    DANISH,      "Danish",      iso1: ["da"], iso3: "dan", scripts: [Latin],      spoken: true;
    DUTCH,       "Dutch",       iso1: ["nl"], iso3: "nld", scripts: [Latin],      spoken: true;
    ENGLISH,     "English",     iso1: ["en"], iso3: "eng", scripts: [Latin],      spoken: true;
    ESPERANTO,   "Esperanto",   iso1: ["eo"], iso3: "epo", scripts: [Latin],      spoken: true;
    FINNISH,     "Finnish",     iso1: ["fi"], iso3: "fin", scripts: [Latin],      spoken: true;
    FRENCH,      "French",      iso1: ["fr"], iso3: "fra", scripts: [Latin],      spoken: true;
    GEORGIAN,    "Georgian",    iso1: ["ka"], iso3: "kat", scripts: [Georgian],   spoken: true;
    GERMAN,      "German",      iso1: ["de"], iso3: "deu", scripts: [Latin],      spoken: true;
    GREEK,       "Greek",       iso1: ["el"], iso3: "ell", scripts: [Greek],      spoken: true;
    HEBREW,      "Hebrew",      iso1: ["he"], iso3: "heb", scripts: [Hebrew],     spoken: true;
    HINDI,       "Hindi",       iso1: ["hi"], iso3: "hin", scripts: [Devanagari], spoken: true;
    HUNGARIAN,   "Hungarian",   iso1: ["hu"], iso3: "hun", scripts: [Latin],      spoken: true;
    INDONESIAN,  "Indonesian",  iso1: ["id"], iso3: "ind", scripts: [Latin],      spoken: true;
    ITALIAN,     "Italian",     iso1: ["it"], iso3: "ita", scripts: [Latin],      spoken: true;
    JAPANESE,    "Japanese",    iso1: ["ja"], iso3: "jpn", scripts: [Hiragana, Katakana, Han], spoken: true;
    KOREAN,      "Korean",      iso1: ["ko"], iso3: "kor", scripts: [Hangul],     spoken: true;
    LATIN,       "Latin",       iso1: ["la"], iso3: "lat", scripts: [Latin],      spoken: false;
    MARATHI,     "Marathi",     iso1: ["mr"], iso3: "mar", scripts: [Devanagari], spoken: true;
    OLD_ENGLISH, "Old English", iso1: [],     iso3: "ang", scripts: [Latin],      spoken: false;
    PERSIAN,     "Persian",     iso1: ["fa"], iso3: "fas", scripts: [Arabic],     spoken: true;
    POLISH,      "Polish",      iso1: ["pl"], iso3: "pol", scripts: [Latin],      spoken: true;
    PORTUGUESE,  "Portuguese",  iso1: ["pt"], iso3: "por", scripts: [Latin],      spoken: true;
    ROMANIAN,    "Romanian",    iso1: ["ro"], iso3: "ron", scripts: [Latin],      spoken: true;
    RUSSIAN,     "Russian",     iso1: ["ru"], iso3: "rus", scripts: [Cyrillic],   spoken: true;
    SERBIAN,     "Serbian",     iso1: ["sr"], iso3: "srp", scripts: [Cyrillic],   spoken: true;
    SPANISH,     "Spanish",     iso1: ["es"], iso3: "spa", scripts: [Latin],      spoken: true;
    SWAHILI,     "Swahili",     iso1: ["sw"], iso3: "swa", scripts: [Latin],      spoken: true;
    SWEDISH,     "Swedish",     iso1: ["sv"], iso3: "swe", scripts: [Latin],      spoken: true;
    THAI,        "Thai",        iso1: ["th"], iso3: "tha", scripts: [Thai],       spoken: true;
    TURKISH,     "Turkish",     iso1: ["tr"], iso3: "tur", scripts: [Latin],      spoken: true;
    UKRAINIAN,   "Ukrainian",   iso1: ["uk"], iso3: "ukr", scripts: [Cyrillic],   spoken: true;
    VIETNAMESE,  "Vietnamese",  iso1: ["vi"], iso3: "vie", scripts: [Latin],      spoken: true;
}

/// Resolve either ISO code, case-insensitively.
pub fn from_iso_code(code: &str) -> Option<Language> {
    let lower = code.trim().to_ascii_lowercase();
    match lower.len() {
        2 => ISO_639_1.get(lower.as_str()).copied(),
        3 => ISO_639_3.get(lower.as_str()).copied(),
        _ => None,
    }
}

/// Resolve a canonical name. Case, surrounding whitespace and `_` versus
/// space are ignored, so `"OLD_ENGLISH"` and `"old english"` both match.
pub fn from_name(name: &str) -> Option<Language> {
    let probe = name.trim().replace('_', " ");
    ALL_LANGUAGES
        .iter()
        .copied()
        .find(|l| l.name.eq_ignore_ascii_case(&probe))
}
