//! Vault identity: secret phrase → vault token → share token
//!
//! A vault has no account record. Its identity is the SHA-256 of the
//! normalized 12-word secret phrase, recomputed on every login and never
//! stored in reversible form. A share token is derived one-way from the
//! vault token so a read-only link can be handed out without exposing the
//! partition key.
//!
//! ```
//! use watchvault_core::identity::{derive_share_token, hash_phrase};
//!
//! let vault = hash_phrase(
//!     "abandon ability able about above absent absorb abstract absurd abuse access accident",
//! )
//! .unwrap();
//! let share = derive_share_token(&vault);
//! assert_ne!(vault.as_str(), share.as_str());
//! ```

mod phrase;
mod token;
mod wordlist;

pub use phrase::{
    generate_phrase, generate_phrase_with, hash_phrase, normalize_phrase, word_count,
    PHRASE_WORD_COUNT,
};
pub use token::{derive_share_token, ShareToken, VaultToken, SHARE_SUFFIX, TOKEN_HEX_LEN};
pub use wordlist::Wordlist;

/// Errors raised while validating identity inputs
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// The normalized phrase does not have the required number of words
    #[error("Secret phrase must contain exactly {expected} words (got {actual})")]
    WordCount {
        /// Required word count
        expected: usize,
        /// Word count found after normalization
        actual: usize,
    },

    /// A token string is not 64 lowercase hex characters
    #[error("Malformed {kind} token: {reason}")]
    MalformedToken {
        /// Which token was being parsed
        kind: &'static str,
        /// What was wrong with it
        reason: String,
    },

    /// A wordlist is empty or contains unusable entries
    #[error("Invalid wordlist: {message}")]
    InvalidWordlist {
        /// What was wrong with it
        message: String,
    },
}
