//! Word tokenization for TF-IDF.

use std::sync::LazyLock;

use regex::Regex;

use crate::stopwords::is_stop_word;

/// Tokens are runs of two or more word characters.
static RE_TOKEN: LazyLock<Option<Regex>> = LazyLock::new(|| Regex::new(r"\b\w\w+\b").ok());

/// Lowercase `text` and split it into tokens, optionally dropping English
/// stop words. Empty text yields no tokens.
pub fn tokenize(text: &str, remove_stop_words: bool) -> Vec<String> {
    let Some(re) = RE_TOKEN.as_ref() else {
        return Vec::new();
    };
    let lowered = text.to_lowercase();
    re.find_iter(&lowered)
        .map(|m| m.as_str())
        .filter(|t| !(remove_stop_words && is_stop_word(t)))
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lowercases_and_drops_single_characters() {
        assert_eq!(tokenize("Deep a Learning", false), vec!["deep", "learning"]);
    }

    #[test]
    fn removes_stop_words_when_asked() {
        assert_eq!(tokenize("the data of the world", true), vec!["data", "world"]);
        assert_eq!(tokenize("the data", false), vec!["the", "data"]);
    }

    #[test]
    fn punctuation_splits_tokens() {
        assert_eq!(tokenize("spark,python;r-lang", false), vec!["spark", "python", "lang"]);
    }

    #[test]
    fn empty_text_has_no_tokens() {
        assert!(tokenize("", true).is_empty());
    }
}
