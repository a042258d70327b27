//! Word-by-word French → English translation of item descriptions.
//!
//! Detected item names are usually French ("Canapé en cuir marron") while the
//! shopping provider ranks English queries far better. Translation is a plain
//! lexicon lookup: known words are replaced, function words are dropped and
//! everything else (brands, model numbers) is kept as-is.

pub mod dictionary;

use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

pub use dictionary::LEXICON;

/// Translates a free-form description token by token.
///
/// Never fails; an empty or whitespace-only input yields an empty string.
pub fn translate(text: &str) -> String {
    let normalized = normalize(text);

    normalized
        .split(|c: char| c.is_whitespace() || c == '-')
        .filter(|token| !token.is_empty())
        .filter_map(|token| match LEXICON.get(token) {
            Some(&"") => None,
            Some(&english) => Some(english),
            None => Some(token),
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Lower-cases and strips diacritics ("Télé" → "tele").
pub fn normalize(text: &str) -> String {
    let lowered = text.to_lowercase().replace('œ', "oe").replace('æ', "ae");
    lowered.nfd().filter(|c| !is_combining_mark(*c)).collect()
}

/// Returns true if the (already normalized) token has a lexicon entry.
pub fn is_known(token: &str) -> bool {
    LEXICON.contains_key(token)
}

#[cfg(test)]
mod tests {
    use super::*;
    use super::dictionary::ENTRIES;

    #[test]
    fn test_translate_hyphenated_compound() {
        assert_eq!(translate("Grille-pain"), "toaster bread");
    }

    #[test]
    fn test_translate_empty() {
        assert_eq!(translate(""), "");
        assert_eq!(translate("   "), "");
        assert_eq!(translate(" - "), "");
    }

    #[test]
    fn test_translate_keeps_brand_and_model() {
        assert_eq!(translate("Canape IKEA KIVIK"), "sofa ikea kivik");
        assert_eq!(translate("Televiseur Samsung QN65Q80C"), "television samsung qn65q80c");
    }

    #[test]
    fn test_translate_strips_accents() {
        assert_eq!(translate("Canapé"), "sofa");
        assert_eq!(translate("Télévision"), "television");
        assert_eq!(translate("Réfrigérateur"), "refrigerator");
        assert_eq!(translate("ÉLECTRONIQUE"), "electronics");
    }

    #[test]
    fn test_translate_drops_function_words() {
        assert_eq!(translate("Canape en cuir marron"), "sofa leather brown");
        assert_eq!(translate("table de salle a manger"), "table room dining");
        assert_eq!(translate("le la les et ou"), "");
    }

    #[test]
    fn test_translate_unknown_word_is_not_fuzzy_matched() {
        // "canapes" is not an entry even though "canape" is
        assert_eq!(translate("canapes"), "canapes");
        assert_eq!(translate("chaisee"), "chaisee");
    }

    #[test]
    fn test_translate_unknown_accented_word_is_normalized() {
        assert_eq!(translate("Crème"), "creme");
    }

    #[test]
    fn test_translate_collapses_whitespace() {
        assert_eq!(translate("  lampe \t  de   chevet  "), "lamp nightstand");
    }

    #[test]
    fn test_translate_multi_word_values() {
        assert_eq!(translate("Lave-linge"), "washer laundry");
        assert_eq!(translate("Cafetière"), "coffee maker");
    }

    #[test]
    fn test_translate_output_has_no_accents() {
        let out = translate("Fauteuil doré en velours, chaîne stéréo");
        assert!(out.is_ascii(), "unexpected non-ascii output: {}", out);
    }

    #[test]
    fn test_normalize() {
        assert_eq!(normalize("Télé"), "tele");
        assert_eq!(normalize("Œuvre"), "oeuvre");
        assert_eq!(normalize("ÇA"), "ca");
        assert_eq!(normalize("KIVIK"), "kivik");
    }

    #[test]
    fn test_is_known() {
        assert!(is_known("canape"));
        assert!(is_known("de"));
        assert!(!is_known("ikea"));
    }

    #[test]
    fn test_lexicon_has_no_duplicate_keys() {
        assert_eq!(LEXICON.len(), ENTRIES.len());
    }

    #[test]
    fn test_lexicon_keys_are_normalized_single_tokens() {
        for (key, _) in ENTRIES {
            assert_eq!(normalize(key), *key, "key not normalized: {}", key);
            assert!(!key.contains(' ') && !key.contains('-'), "key is not a single token: {}", key);
        }
    }
}
