//! String command implementation
//!
//! Draws strings from a predefined or custom alphabet.

use std::io::Write;

use krand_collections::{Alphabet, CollectionGenerator};
use krand_core::EntropySource;
use tracing::info;

use crate::Result;

/// Run the string command, writing one string per line
pub fn run<S, W>(
    generator: &mut CollectionGenerator<S>,
    out: &mut W,
    alphabet: &Alphabet,
    len: usize,
    count: usize,
) -> Result<()>
where
    S: EntropySource,
    W: Write,
{
    info!(
        len,
        count,
        alphabet_len = alphabet.len(),
        "generating strings"
    );

    for _ in 0..count {
        writeln!(out, "{}", generator.string(len, alphabet)?)?;
    }

    Ok(())
}
