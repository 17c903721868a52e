//! Bit regrouping between 8-bit bytes and 5-bit Bech32 values.

use crate::domain::AddressError;

/// Regroup `data` from `from_bits`-wide values into `to_bits`-wide values.
///
/// With `pad`, a trailing partial group is flushed with zero bits. Without
/// it, the leftover must be shorter than `from_bits` and all zero, so a
/// string with non-canonical padding never decodes.
pub fn regroup(
    data: &[u8],
    from_bits: u32,
    to_bits: u32,
    pad: bool,
) -> Result<Vec<u8>, AddressError> {
    debug_assert!((1..=8).contains(&from_bits) && (1..=8).contains(&to_bits));

    let max_value: u32 = (1 << to_bits) - 1;
    let max_acc: u32 = (1 << (from_bits + to_bits - 1)) - 1;
    let mut acc: u32 = 0;
    let mut bits: u32 = 0;
    let mut out = Vec::with_capacity(data.len() * from_bits as usize / to_bits as usize + 1);

    for &value in data {
        let value = u32::from(value);
        if value >> from_bits != 0 {
            return Err(AddressError::MalformedCharset(format!(
                "value {value} does not fit in {from_bits} bits"
            )));
        }
        acc = ((acc << from_bits) | value) & max_acc;
        bits += from_bits;
        while bits >= to_bits {
            bits -= to_bits;
            out.push(((acc >> bits) & max_value) as u8);
        }
    }

    if pad {
        if bits > 0 {
            out.push(((acc << (to_bits - bits)) & max_value) as u8);
        }
    } else if bits >= from_bits || ((acc << (to_bits - bits)) & max_value) != 0 {
        return Err(AddressError::InvalidPadding);
    }

    Ok(out)
}
