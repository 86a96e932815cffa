//! Settings validation - warns about keys the schema does not know

use super::schema;
use tracing::warn;

/// Warn about every key in `keys` that is not part of the settings schema.
pub fn warn_unknown_keys<'a>(keys: impl IntoIterator<Item = &'a str>, source: &str) {
    for key in find_unknown_keys(keys) {
        warn!("Unknown settings key in {source}: {key}");
    }
}

/// Keys missing from the schema, in input order.
///
/// Near-misses of a known key (one edit away) are reported with a hint.
fn find_unknown_keys<'a>(keys: impl IntoIterator<Item = &'a str>) -> Vec<String> {
    keys.into_iter()
        .filter(|key| schema::lookup(key).is_none())
        .map(|key| match closest_known(key) {
            Some(known) => format!("{key} (did you mean {known}?)"),
            None => key.to_string(),
        })
        .collect()
}

fn closest_known(key: &str) -> Option<&'static str> {
    schema::SCHEMA
        .iter()
        .map(|spec| spec.key)
        .find(|known| within_one_edit(key, known))
}

fn within_one_edit(a: &str, b: &str) -> bool {
    let (a, b): (Vec<char>, Vec<char>) = (a.chars().collect(), b.chars().collect());
    let (short, long) = if a.len() <= b.len() { (&a, &b) } else { (&b, &a) };
    if long.len() - short.len() > 1 {
        return false;
    }

    let prefix = short.iter().zip(long.iter()).take_while(|(x, y)| x == y).count();
    if prefix == long.len() {
        true
    } else if short.len() == long.len() {
        short[prefix + 1..] == long[prefix + 1..]
    } else {
        short[prefix..] == long[prefix + 1..]
    }
}
