//! Static catalog of supported language codes and their English names.

use super::error::{Result, TranslateError};

/// Supported language codes and their English names, in catalog order.
pub const LANGUAGES: &[(&str, &str)] = &[
    ("af", "Afrikaans"),
    ("sq", "Albanian"),
    ("am", "Amharic"),
    ("ar", "Arabic"),
    ("hy", "Armenian"),
    ("az", "Azerbaijani"),
    ("eu", "Basque"),
    ("be", "Belarusian"),
    ("bn", "Bengali"),
    ("bh", "Bihari"),
    ("bg", "Bulgarian"),
    ("my", "Burmese"),
    ("ca", "Catalan"),
    ("chr", "Cherokee"),
    ("zh", "Chinese"),
    ("zh-CN", "Chinese simplified"),
    ("zh-TW", "Chinese traditional"),
    ("hr", "Croatian"),
    ("cs", "Czech"),
    ("da", "Danish"),
    ("dv", "Dhivehi"),
    ("nl", "Dutch"),
    ("en", "English"),
    ("eo", "Esperanto"),
    ("et", "Estonian"),
    ("tl", "Tagalog"),
    ("fi", "Finnish"),
    ("fr", "French"),
    ("gl", "Galician"),
    ("ka", "Georgian"),
    ("de", "German"),
    ("el", "Greek"),
    ("gn", "Guarani"),
    ("gu", "Gujarati"),
    ("he", "Hebrew"),
    ("hi", "Hindi"),
    ("hu", "Hungarian"),
    ("is", "Icelandic"),
    ("id", "Indonesian"),
    ("iu", "Inuktitut"),
    ("it", "Italian"),
    ("ja", "Japanese"),
    ("kn", "Kannada"),
    ("kk", "Kazakh"),
    ("km", "Khmer"),
    ("ko", "Korean"),
    ("ku", "Kurdish"),
    ("ky", "Kyrgyz"),
    ("lo", "Laothian"),
    ("lv", "Latvian"),
    ("lt", "Lithuanian"),
    ("mk", "Macedonian"),
    ("ms", "Malay"),
    ("ml", "Malayalam"),
    ("mt", "Maltese"),
    ("mr", "Marathi"),
    ("mn", "Mongolian"),
    ("ne", "Nepali"),
    ("no", "Norwegian"),
    ("or", "Oriya"),
    ("ps", "Pashto"),
    ("fa", "Persian"),
    ("pl", "Polish"),
    ("pt-PT", "Portuguese"),
    ("pa", "Punjabi"),
    ("ro", "Romanian"),
    ("ru", "Russian"),
    ("sa", "Sanskrit"),
    ("sr", "Serbian"),
    ("sd", "Sindhi"),
    ("si", "Sinhalese"),
    ("sk", "Slovak"),
    ("sl", "Slovenian"),
    ("es", "Spanish"),
    ("sw", "Swahili"),
    ("sv", "Swedish"),
    ("tg", "Tajik"),
    ("ta", "Tamil"),
    ("te", "Telugu"),
    ("th", "Thai"),
    ("bo", "Tibetan"),
    ("tr", "Turkish"),
    ("uk", "Ukrainian"),
    ("ur", "Urdu"),
    ("uz", "Uzbek"),
    ("ug", "Uighur"),
    ("vi", "Vietnamese"),
];

/// Codes of languages written right-to-left.
pub const RTL_LANGUAGES: &[&str] = &["ar", "he", "dv", "ur"];

/// Returns `true` if `code` is a catalog key.
pub fn exists(code: &str) -> bool {
    entry(code).is_some()
}

/// Finds the code whose English name is exactly `name`.
///
/// Matching is case-sensitive with no trimming. The first entry in catalog
/// order wins.
pub fn find_by_name(name: &str) -> Option<&'static str> {
    LANGUAGES
        .iter()
        .find(|(_, candidate)| *candidate == name)
        .map(|(code, _)| *code)
}

/// Returns the English name for `code`.
pub fn name_of(code: &str) -> Result<&'static str> {
    entry(code)
        .map(|(_, name)| name)
        .ok_or_else(|| TranslateError::UnknownLanguageCode(code.to_string()))
}

pub fn is_rtl(code: &str) -> bool {
    RTL_LANGUAGES.contains(&code)
}

/// Iterates over `(code, name)` pairs in catalog order.
pub fn languages() -> impl Iterator<Item = (&'static str, &'static str)> {
    LANGUAGES.iter().copied()
}

pub(crate) fn entry(code: &str) -> Option<(&'static str, &'static str)> {
    LANGUAGES.iter().find(|(key, _)| *key == code).copied()
}
