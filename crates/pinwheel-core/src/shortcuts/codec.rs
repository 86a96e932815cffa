//! Persisted encodings of a shortcut list.
//!
//! Flat lists store `(name, icon, command)` triples back to back in one
//! string array; tuple lists store one 3-element array per entry.

use super::ShortcutList;
use crate::{Error, Result};
use pinwheel_types::ShortcutEntry;

/// Fields per entry in the flat form.
pub const STRIDE: usize = 3;

/// Group a flat string array into entries, preserving order.
///
/// # Errors
///
/// Returns [`Error::MalformedInput`] when the length is not a multiple of 3.
pub fn decode<S: AsRef<str>>(flat: &[S]) -> Result<ShortcutList> {
    if !flat.len().is_multiple_of(STRIDE) {
        return Err(Error::MalformedInput { len: flat.len() });
    }
    Ok(flat
        .chunks_exact(STRIDE)
        .map(|triple| {
            ShortcutEntry::new(
                triple[0].as_ref(),
                triple[1].as_ref(),
                triple[2].as_ref(),
            )
        })
        .collect())
}

/// Flatten entries into the persisted string array.
#[must_use]
pub fn encode(list: &ShortcutList) -> Vec<String> {
    list.iter().flat_map(ShortcutEntry::to_fields).collect()
}

/// Decode the tuple form used by the directory and application lists.
///
/// # Errors
///
/// Returns [`Error::MalformedTuple`] for the first inner array whose length
/// is not 3.
pub fn decode_tuples<S: AsRef<str>>(tuples: &[Vec<S>]) -> Result<ShortcutList> {
    tuples
        .iter()
        .enumerate()
        .map(|(index, tuple)| match tuple.as_slice() {
            [name, icon, command] => Ok(ShortcutEntry::new(
                name.as_ref(),
                icon.as_ref(),
                command.as_ref(),
            )),
            _ => Err(Error::MalformedTuple {
                index,
                len: tuple.len(),
            }),
        })
        .collect::<Result<Vec<_>>>()
        .map(ShortcutList::new)
}

#[must_use]
pub fn encode_tuples(list: &ShortcutList) -> Vec<Vec<String>> {
    list.iter().map(|entry| entry.to_fields().to_vec()).collect()
}
