//! Dotted path resolution against render arguments.

use crate::interpreter::context::Args;
use crate::types::Value;

/// Resolve a dotted path such as `user.profile.name`.
///
/// The first segment is looked up in `args`; each later segment descends
/// into the previous value with [`Value::lookup`]. Maps match keys exactly,
/// records match field names ignoring case, and any other value ends the
/// walk. There is no sequence indexing, so `items.0` never resolves.
pub fn resolve_path<'a>(args: Args<'a>, path: &str) -> Option<&'a Value> {
    let mut segments = path.split('.');
    let first = segments.next()?;
    let mut current = args.lookup(first)?;
    for segment in segments {
        current = current.lookup(segment)?;
    }
    Some(current)
}
