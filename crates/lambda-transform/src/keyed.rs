//! List-to-map conversion for the host configuration model.

use std::collections::BTreeMap;

/// Key each item by its list position: `"0"`, `"1"`, ...
///
/// The host configuration store holds keyed objects only, so device mounts,
/// volume mounts and pubsub topics all go through here.
pub fn index_keyed<T: Clone>(items: &[T]) -> BTreeMap<String, T> {
    items
        .iter()
        .enumerate()
        .map(|(index, item)| (index.to_string(), item.clone()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keys_follow_list_order() {
        let keyed = index_keyed(&["a", "b", "c"]);
        assert_eq!(keyed.get("0"), Some(&"a"));
        assert_eq!(keyed.get("2"), Some(&"c"));
        assert_eq!(keyed.len(), 3);
    }

    #[test]
    fn empty_list_gives_empty_map() {
        assert!(index_keyed::<u8>(&[]).is_empty());
    }
}
