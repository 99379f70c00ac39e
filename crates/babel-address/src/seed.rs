//! Seed phrase collaborators and babel-string presentation.
//!
//! Mnemonic and syllable conversions are provided by external
//! implementations of [`MnemonicCodec`] and [`SyllableCodec`]; this module
//! only composes them:
//!
//! ```text
//! mnemonic -> entropy -> syllables   (seed_to_babel)
//! syllables -> entropy -> mnemonic   (babel_to_seed)
//! ```

use crate::error::SeedError;

/// Default chunk width for [`format_chunked`].
pub const DEFAULT_CHUNK: usize = 4;

/// Converts between a BIP39 mnemonic and its entropy bytes.
pub trait MnemonicCodec {
    /// Fails with [`SeedError::InvalidMnemonic`] on an unknown word or bad checksum.
    fn mnemonic_to_entropy(&self, mnemonic: &str) -> Result<Vec<u8>, SeedError>;

    /// Fails with [`SeedError::InvalidEntropyLength`] on an unsupported size.
    fn entropy_to_mnemonic(&self, entropy: &[u8]) -> Result<String, SeedError>;
}

/// Bijective pronounceable encoding of raw bytes.
pub trait SyllableCodec {
    fn bytes_to_syllables(&self, bytes: &[u8]) -> String;

    /// Fails with [`SeedError::InvalidSyllableString`] on tokens outside the table.
    fn syllables_to_bytes(&self, text: &str) -> Result<Vec<u8>, SeedError>;
}

/// Converts a seed phrase into its babel string.
pub fn seed_to_babel<M, S>(mnemonics: &M, syllables: &S, mnemonic: &str) -> Result<String, SeedError>
where
    M: MnemonicCodec + ?Sized,
    S: SyllableCodec + ?Sized,
{
    let entropy = mnemonics.mnemonic_to_entropy(mnemonic)?;
    Ok(syllables.bytes_to_syllables(&entropy))
}

/// Converts a babel string, formatted or not, back into its seed phrase.
pub fn babel_to_seed<M, S>(mnemonics: &M, syllables: &S, babel: &str) -> Result<String, SeedError>
where
    M: MnemonicCodec + ?Sized,
    S: SyllableCodec + ?Sized,
{
    let entropy = syllables.syllables_to_bytes(&strip_formatting(babel))?;
    mnemonics.entropy_to_mnemonic(&entropy)
}

/// Joins `chunk`-character groups with `-`: `"aztulinerblinken"` -> `"aztu-line-rbli-nken"`.
///
/// A `chunk` of zero returns the input unchanged.
pub fn format_chunked(s: &str, chunk: usize) -> String {
    if chunk == 0 {
        return s.to_string();
    }
    let chars: Vec<char> = s.chars().collect();
    chars
        .chunks(chunk)
        .map(|c| c.iter().collect::<String>())
        .collect::<Vec<_>>()
        .join("-")
}

/// Removes hyphens and whitespace added for readability.
pub fn strip_formatting(s: &str) -> String {
    s.chars()
        .filter(|c| *c != '-' && !c.is_whitespace())
        .collect()
}
