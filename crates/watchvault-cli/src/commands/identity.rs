//! `hash`, `share` and `generate`

use anyhow::{bail, Context, Result};
use std::io::Write;
use std::path::Path;
use watchvault_core::{derive_share_token, generate_phrase, hash_phrase, VaultToken, Wordlist};

pub fn hash(phrase: &str, out: &mut impl Write) -> Result<()> {
    let vault = hash_phrase(phrase)?;
    tracing::debug!(vault = %vault.short(), "Derived vault token");
    writeln!(out, "{vault}")?;
    Ok(())
}

pub fn share(vault_token: &str, out: &mut impl Write) -> Result<()> {
    let vault = VaultToken::parse(vault_token.trim()).context("Invalid vault token")?;
    let share = derive_share_token(&vault);
    tracing::debug!(vault = %vault.short(), share = %share.short(), "Derived share token");
    writeln!(out, "{share}")?;
    Ok(())
}

pub fn generate(wordlist: Option<&Path>, out: &mut impl Write) -> Result<()> {
    let Some(path) = wordlist else {
        bail!("No wordlist configured; set wordlist_path in the config or pass --wordlist");
    };
    let wordlist = Wordlist::load(path)
        .with_context(|| format!("Failed to load wordlist from {}", path.display()))?;
    writeln!(out, "{}", generate_phrase(&wordlist))?;
    Ok(())
}
