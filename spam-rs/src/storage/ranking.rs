//! Test file ordering
//!
//! Test files are processed in ascending order of the number formed by the
//! digits in their names, so `2.txt` comes before `10.txt`. Any Unicode
//! decimal digit counts, e.g. `١.txt` ranks as 1.

use std::cmp::Ordering;

use crate::error::{Result, SpamError};

/// First code point of every run of ten Unicode decimal digits (Nd), 0..=9
const DECIMAL_ZEROS: &[u32] = &[
    0x0030, 0x0660, 0x06F0, 0x07C0, 0x0966, 0x09E6, 0x0A66, 0x0AE6,
    0x0B66, 0x0BE6, 0x0C66, 0x0CE6, 0x0D66, 0x0DE6, 0x0E50, 0x0ED0,
    0x0F20, 0x1040, 0x1090, 0x17E0, 0x1810, 0x1946, 0x19D0, 0x1A80,
    0x1A90, 0x1B50, 0x1BB0, 0x1C40, 0x1C50, 0xA620, 0xA8D0, 0xA900,
    0xA9D0, 0xA9F0, 0xAA50, 0xABF0, 0xFF10, 0x104A0, 0x10D30, 0x11066,
    0x110F0, 0x11136, 0x111D0, 0x112F0, 0x11450, 0x114D0, 0x11650, 0x116C0,
    0x11730, 0x118E0, 0x11950, 0x11C50, 0x11D50, 0x11DA0, 0x16A60, 0x16AC0,
    0x16B50, 0x1D7CE, 0x1D7D8, 0x1D7E2, 0x1D7EC, 0x1D7F6, 0x1E140, 0x1E2F0,
    0x1E950, 0x1FBF0,
];

/// Value of a Unicode decimal digit
fn decimal_value(c: char) -> Option<u32> {
    let code = c as u32;
    let index = DECIMAL_ZEROS.partition_point(|&zero| zero <= code);
    let zero = DECIMAL_ZEROS[..index].last()?;
    let value = code - zero;
    (value < 10).then_some(value)
}

/// Numeric rank of a file name, compared without overflow
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankKey {
    digits: String,
}

impl RankKey {
    /// Build the key from the decimal digits of `file_name`.
    ///
    /// Fails when the name contains no decimal digit.
    pub fn from_file_name(file_name: &str) -> Result<Self> {
        let digits: String = file_name
            .chars()
            .filter_map(decimal_value)
            .filter_map(|value| char::from_digit(value, 10))
            .collect();
        if digits.is_empty() {
            return Err(SpamError::UnrankableFileName(file_name.to_string()));
        }

        let significant = digits.trim_start_matches('0');
        let digits = if significant.is_empty() { "0" } else { significant };

        Ok(Self {
            digits: digits.to_string(),
        })
    }

    /// ASCII digits of the rank, without leading zeros
    pub fn digits(&self) -> &str {
        &self.digits
    }
}

impl Ord for RankKey {
    fn cmp(&self, other: &Self) -> Ordering {
        self.digits
            .len()
            .cmp(&other.digits.len())
            .then_with(|| self.digits.cmp(&other.digits))
    }
}

impl PartialOrd for RankKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Sort items by the rank of their file name; equal ranks fall back to the
/// name itself
pub fn rank_by_file_name<T, F>(items: Vec<T>, file_name: F) -> Result<Vec<T>>
where
    F: Fn(&T) -> &str,
{
    let mut keyed = items
        .into_iter()
        .map(|item| -> Result<(RankKey, T)> {
            Ok((RankKey::from_file_name(file_name(&item))?, item))
        })
        .collect::<Result<Vec<_>>>()?;

    keyed.sort_by(|(a_key, a), (b_key, b)| {
        a_key
            .cmp(b_key)
            .then_with(|| file_name(a).cmp(file_name(b)))
    });

    Ok(keyed.into_iter().map(|(_, item)| item).collect())
}
