//! Property Tests: Vault Identity Derivation
//!
//! Determinism, normalization invariance, and share-token domain separation.

use proptest::prelude::*;
use sha2::{Digest, Sha256};
use std::collections::HashSet;
use watchvault_core::{
    derive_share_token, generate_phrase, hash_phrase, normalize_phrase, ValidationError,
    VaultToken, Wordlist,
};

const KNOWN_PHRASE: &str =
    "abandon ability able about above absent absorb abstract absurd abuse access accident";

fn is_lower_hex_64(s: &str) -> bool {
    s.len() == 64 && s.chars().all(|c| matches!(c, '0'..='9' | 'a'..='f'))
}

fn independent_sha256_hex(data: &[u8]) -> String {
    let digest = Sha256::digest(data);
    digest.iter().map(|b| format!("{b:02x}")).collect()
}

fn sample_wordlist() -> Wordlist {
    Wordlist::new(KNOWN_PHRASE.split(' ')).unwrap()
}

// Proptest generators

fn arb_word() -> impl Strategy<Value = String> {
    "[a-z]{3,8}"
}

fn arb_phrase_words() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(arb_word(), 12)
}

fn arb_separator() -> impl Strategy<Value = String> {
    prop::collection::vec(prop_oneof![Just(' '), Just('\t'), Just('\n')], 1..4)
        .prop_map(|chars| chars.into_iter().collect())
}

fn arb_vault_token() -> impl Strategy<Value = VaultToken> {
    "[0-9a-f]{64}".prop_map(|s| VaultToken::parse(&s).unwrap())
}

proptest! {
    #[test]
    fn prop_valid_phrases_hash_to_hex(words in arb_phrase_words()) {
        let token = hash_phrase(&words.join(" ")).unwrap();
        prop_assert!(is_lower_hex_64(token.as_str()));
    }

    #[test]
    fn prop_hash_is_deterministic(words in arb_phrase_words()) {
        let phrase = words.join(" ");
        prop_assert_eq!(hash_phrase(&phrase).unwrap(), hash_phrase(&phrase).unwrap());
    }

    #[test]
    fn prop_hash_ignores_case_and_whitespace(
        words in arb_phrase_words(),
        separators in prop::collection::vec(arb_separator(), 11),
        lead in arb_separator(),
        trail in arb_separator(),
        upper_mask in prop::collection::vec(any::<bool>(), 12),
    ) {
        let canonical = words.join(" ");

        let mut messy = lead.clone();
        for (i, word) in words.iter().enumerate() {
            if upper_mask[i] {
                messy.push_str(&word.to_uppercase());
            } else {
                messy.push_str(word);
            }
            if i < separators.len() {
                messy.push_str(&separators[i]);
            }
        }
        messy.push_str(&trail);

        prop_assert_eq!(normalize_phrase(&messy), canonical.clone());
        prop_assert_eq!(hash_phrase(&messy).unwrap(), hash_phrase(&canonical).unwrap());
    }

    #[test]
    fn prop_wrong_word_counts_reject(
        words in prop::collection::vec(arb_word(), 0..30)
            .prop_filter("exactly twelve is valid", |w| w.len() != 12)
    ) {
        let err = hash_phrase(&words.join(" ")).unwrap_err();
        prop_assert!(err.to_string().contains("12 words"));
    }

    #[test]
    fn prop_share_token_matches_independent_hash(vault in arb_vault_token()) {
        let share = derive_share_token(&vault);
        let expected = independent_sha256_hex(format!("{}:share", vault.as_str()).as_bytes());
        prop_assert_eq!(share.as_str(), expected.as_str());
        prop_assert_ne!(share.as_str(), vault.as_str());
    }

    #[test]
    fn prop_distinct_vaults_distinct_shares(a in arb_vault_token(), b in arb_vault_token()) {
        prop_assume!(a != b);
        prop_assert_ne!(derive_share_token(&a), derive_share_token(&b));
    }
}

#[test]
fn known_phrase_round_trip() {
    let vault = hash_phrase(KNOWN_PHRASE).unwrap();
    assert!(is_lower_hex_64(vault.as_str()));
    assert_eq!(vault.as_str(), independent_sha256_hex(KNOWN_PHRASE.as_bytes()));
    assert_eq!(hash_phrase(KNOWN_PHRASE).unwrap(), vault);

    let share = derive_share_token(&vault);
    assert_ne!(share.as_str(), vault.as_str());

    // Feeding a share token back in yields a third, distinct value.
    let reshared = derive_share_token(&VaultToken::parse(share.as_str()).unwrap());
    assert_ne!(reshared.as_str(), share.as_str());
    assert_ne!(reshared.as_str(), vault.as_str());
}

#[test]
fn specific_word_counts_reject() {
    let eleven = KNOWN_PHRASE.rsplit_once(' ').unwrap().0;
    let thirteen = format!("{KNOWN_PHRASE} zoo");

    for phrase in ["", "   ", eleven, thirteen.as_str()] {
        match hash_phrase(phrase) {
            Err(err @ ValidationError::WordCount { .. }) => {
                assert!(err.to_string().contains("12 words"), "{err}");
            }
            other => panic!("expected word-count error for {phrase:?}, got {other:?}"),
        }
    }
}

#[test]
fn messy_known_phrase_normalizes() {
    let messy = "  ABANDON ability\t\tAble about\nabove absent absorb abstract absurd abuse access ACCIDENT \n";
    assert_eq!(hash_phrase(messy).unwrap(), hash_phrase(KNOWN_PHRASE).unwrap());
}

#[test]
fn generated_phrases_have_twelve_words_and_vary() {
    let wordlist = sample_wordlist();
    let phrases: HashSet<String> = (0..20).map(|_| generate_phrase(&wordlist)).collect();

    for phrase in &phrases {
        assert_eq!(phrase.split(' ').count(), 12);
        assert!(phrase.split(' ').all(|w| wordlist.contains(w)));
        assert!(hash_phrase(phrase).is_ok());
    }
    // 12^12 possible phrases; twenty draws colliding into one is not a real outcome.
    assert!(phrases.len() > 1);
}
