use std::mem;

use serde_yaml::Value;

/// Deep merges an override tree onto a stored configuration tree
///
/// Base keys keep their position; keys only present in the overlay are
/// appended. Overlay values always win, but base values that are not
/// overridden survive. For non-mapping values, overlay completely replaces
/// base (no attempt to merge sequences or scalars).
pub(super) fn merge_override(base: Value, overlay: Value) -> Value {
    match (base, overlay) {
        (Value::Mapping(base_map), Value::Mapping(overlay_map)) => {
            let mut merged = base_map;

            for (key, overlay_value) in overlay_map {
                match merged.get_mut(&key) {
                    Some(slot) => {
                        let base_value = mem::replace(slot, Value::Null);
                        *slot = merge_override(base_value, overlay_value);
                    }
                    None => {
                        merged.insert(key, overlay_value);
                    }
                }
            }

            Value::Mapping(merged)
        }
        (_, overlay) => overlay,
    }
}
