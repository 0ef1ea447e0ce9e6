//! Int command implementation
//!
//! Draws integers, optionally bounded by an inclusive range and constrained
//! to a parity.

use std::io::Write;

use krand_core::{BoundedIntegerGenerator, EntropySource, Parity};
use tracing::info;

use crate::Result;

/// Run the int command, writing one value per line
pub fn run<S, W>(
    source: &mut S,
    out: &mut W,
    range: Option<(i32, i32)>,
    parity: Option<Parity>,
    count: usize,
) -> Result<()>
where
    S: EntropySource,
    W: Write,
{
    info!(?range, ?parity, count, "drawing integers");

    for _ in 0..count {
        let value = match (range, parity) {
            (Some((start, end)), parity) => source.next_in_range_with_parity(start, end, parity)?,
            (None, None) => source.next_int(),
            (None, Some(Parity::Even)) => source.next_even(),
            (None, Some(Parity::Odd)) => source.next_odd(),
        };
        writeln!(out, "{}", value)?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::CliError;
    use krand_core::{Entropy, KRandError};

    fn lines(output: Vec<u8>) -> Vec<i32> {
        String::from_utf8(output)
            .unwrap()
            .lines()
            .map(|l| l.parse().unwrap())
            .collect()
    }

    #[test]
    fn test_bounded_even() {
        let mut entropy = Entropy::from_seed(1);
        let mut out = Vec::new();
        run(
            &mut entropy,
            &mut out,
            Some((-10, 10)),
            Some(Parity::Even),
            50,
        )
        .unwrap();

        let values = lines(out);
        assert_eq!(values.len(), 50);
        assert!(values
            .iter()
            .all(|v| v % 2 == 0 && (-10..=10).contains(v)));
    }

    #[test]
    fn test_unbounded_odd() {
        let mut entropy = Entropy::from_seed(2);
        let mut out = Vec::new();
        run(&mut entropy, &mut out, None, Some(Parity::Odd), 20).unwrap();
        assert!(lines(out).iter().all(|v| v % 2 != 0));
    }

    #[test]
    fn test_invalid_range_surfaces() {
        let mut entropy = Entropy::from_seed(3);
        let mut out = Vec::new();
        let err = run(&mut entropy, &mut out, Some((5, 1)), None, 1).unwrap_err();
        assert!(matches!(
            err,
            CliError::Generation(KRandError::InvalidRange { start: 5, end: 1 })
        ));
        assert!(out.is_empty());
    }
}
