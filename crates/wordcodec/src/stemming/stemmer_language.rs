//! # Stemmer Languages

/// The languages with a Snowball stemmer.
///
/// Parses case-insensitively from the lowercase language name:
///
/// ```rust
/// use wordcodec::stemming::StemmerLanguage;
///
/// let lang: StemmerLanguage = "English".parse().unwrap();
/// assert_eq!(lang, StemmerLanguage::English);
/// assert_eq!(lang.to_string(), "english");
/// ```
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
#[allow(missing_docs)]
pub enum StemmerLanguage {
    Arabic,
    Danish,
    Dutch,
    English,
    Finnish,
    French,
    German,
    Greek,
    Hungarian,
    Italian,
    Norwegian,
    Portuguese,
    Romanian,
    Russian,
    Spanish,
    Swedish,
    Tamil,
    Turkish,
}

impl StemmerLanguage {
    /// All supported languages.
    pub const ALL: [StemmerLanguage; 18] = [
        StemmerLanguage::Arabic,
        StemmerLanguage::Danish,
        StemmerLanguage::Dutch,
        StemmerLanguage::English,
        StemmerLanguage::Finnish,
        StemmerLanguage::French,
        StemmerLanguage::German,
        StemmerLanguage::Greek,
        StemmerLanguage::Hungarian,
        StemmerLanguage::Italian,
        StemmerLanguage::Norwegian,
        StemmerLanguage::Portuguese,
        StemmerLanguage::Romanian,
        StemmerLanguage::Russian,
        StemmerLanguage::Spanish,
        StemmerLanguage::Swedish,
        StemmerLanguage::Tamil,
        StemmerLanguage::Turkish,
    ];
}
