use super::{ValidationError, VaultToken, Wordlist};
use crate::crypto::hash::hash_hex;
use rand::Rng;

/// Number of words in a secret phrase.
pub const PHRASE_WORD_COUNT: usize = 12;

/// Lowercase, trim, and collapse every whitespace run into one space.
///
/// Whitespace means Unicode `White_Space`, as `str::split_whitespace` defines
/// it. That differs from a browser's `\s` in two code points: U+0085 (NEL)
/// separates words here, and U+FEFF (BOM) does not.
pub fn normalize_phrase(phrase: &str) -> String {
    phrase
        .split_whitespace()
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Number of non-empty words in the normalized form of `phrase`.
pub fn word_count(phrase: &str) -> usize {
    normalize_phrase(phrase)
        .split(' ')
        .filter(|word| !word.is_empty())
        .count()
}

/// Derive the vault token for a secret phrase.
///
/// The phrase is normalized first, so case and whitespace style do not
/// matter. Anything other than exactly [`PHRASE_WORD_COUNT`] words is rejected
/// before any hashing happens.
pub fn hash_phrase(phrase: &str) -> Result<VaultToken, ValidationError> {
    let normalized = normalize_phrase(phrase);
    let actual = normalized
        .split(' ')
        .filter(|word| !word.is_empty())
        .count();

    if actual != PHRASE_WORD_COUNT {
        return Err(ValidationError::WordCount {
            expected: PHRASE_WORD_COUNT,
            actual,
        });
    }

    Ok(VaultToken::from_digest_hex(hash_hex(normalized.as_bytes())))
}

/// Generate a fresh 12-word phrase using the thread-local RNG.
///
/// Words are drawn uniformly with replacement. The phrase is shown to the
/// user to write down; it is not a hardened key-generation primitive.
pub fn generate_phrase(wordlist: &Wordlist) -> String {
    generate_phrase_with(wordlist, &mut rand::thread_rng())
}

/// Generate a 12-word phrase from an explicit RNG.
pub fn generate_phrase_with<R: Rng + ?Sized>(wordlist: &Wordlist, rng: &mut R) -> String {
    let words = wordlist.words();
    (0..PHRASE_WORD_COUNT)
        .map(|_| words[rng.gen_range(0..words.len())].as_str())
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_uses_unicode_white_space() {
        assert_eq!(normalize_phrase("one\u{85}two"), "one two");
        assert_eq!(normalize_phrase("\u{feff}one two"), "\u{feff}one two");
        assert_eq!(normalize_phrase("one\u{a0}\u{3000}two"), "one two");
    }
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    const PHRASE: &str =
        "abandon ability able about above absent absorb abstract absurd abuse access accident";

    #[test]
    fn test_normalize_collapses_whitespace() {
        assert_eq!(normalize_phrase("  Foo\t\tBAR \n baz  "), "foo bar baz");
    }

    #[test]
    fn test_normalize_empty() {
        assert_eq!(normalize_phrase(" \t\n "), "");
        assert_eq!(word_count(""), 0);
    }

    #[test]
    fn test_hash_phrase_matches_plain_sha256() {
        let token = hash_phrase(PHRASE).unwrap();
        assert_eq!(token.as_str(), hash_hex(PHRASE.as_bytes()));
    }

    #[test]
    fn test_hash_phrase_rejects_wrong_counts() {
        for count in [0usize, 1, 11, 13, 24] {
            let phrase = vec!["word"; count].join(" ");
            let err = hash_phrase(&phrase).unwrap_err();
            assert_eq!(
                err,
                ValidationError::WordCount {
                    expected: 12,
                    actual: count
                }
            );
            assert!(err.to_string().contains("12 words"));
        }
    }

    #[test]
    fn test_generate_phrase_seeded_is_reproducible() {
        let wordlist = Wordlist::new(["alpha", "bravo", "charlie", "delta"]).unwrap();
        let a = generate_phrase_with(&wordlist, &mut StdRng::seed_from_u64(7));
        let b = generate_phrase_with(&wordlist, &mut StdRng::seed_from_u64(7));
        assert_eq!(a, b);
        assert_eq!(word_count(&a), PHRASE_WORD_COUNT);
        assert!(a.split(' ').all(|w| wordlist.contains(w)));
    }

    #[test]
    fn test_generated_phrase_hashes() {
        let wordlist = Wordlist::new(["alpha", "bravo"]).unwrap();
        assert!(hash_phrase(&generate_phrase(&wordlist)).is_ok());
    }
}
