use byte_treap::treap::TreapMap;
use rand::{thread_rng, Rng};
use std::collections::HashMap;

// Differential test: a random stream of insert/remove/get operations drawn
// from a small key space, mirrored against a HashMap. The observable mapping
// and the size must agree after every operation.
#[test]
fn test_against_reference_map() {
    let mut rng = thread_rng();
    let mut map = TreapMap::new();
    let mut reference: HashMap<Vec<u8>, u32> = HashMap::new();

    for _ in 0..10_000 {
        let key = rng.gen_range(0, 500u32).to_string().into_bytes();
        match rng.gen_range(0, 3) {
            0 => {
                let value = rng.gen::<u32>();
                assert_eq!(
                    map.insert(key.clone(), value),
                    reference
                        .insert(key.clone(), value)
                        .map(|old| (key.clone(), old)),
                );
            },
            1 => {
                assert_eq!(
                    map.remove(&key),
                    reference.remove(&key).map(|old| (key.clone(), old)),
                );
            },
            _ => {
                assert_eq!(map.get(&key), reference.get(&key));
            },
        }
        assert_eq!(map.len(), reference.len());
    }

    assert_eq!(map.to_map(), reference);

    let keys: Vec<Vec<u8>> = map.iter().map(|(key, _)| key.to_vec()).collect();
    for pair in keys.windows(2) {
        assert!(pair[0] < pair[1]);
    }
}

#[test]
fn test_bulk_insert_sorted_traversal() {
    let mut rng = thread_rng();
    let mut map = TreapMap::new();
    let mut expected = Vec::new();
    for _ in 0..100_000 {
        let key = rng.gen::<u32>().to_string().into_bytes();
        let value = rng.gen::<u32>();

        if !map.contains_key(&key) {
            map.insert(key.clone(), value);
            expected.push((key, value));
        }
    }

    expected.sort();
    expected.dedup_by(|a, b| a.0 == b.0);

    let actual: Vec<(Vec<u8>, u32)> = map
        .iter()
        .map(|(key, value)| (key.to_vec(), *value))
        .collect();
    assert_eq!(expected.len(), actual.len());
    for i in 0..expected.len() {
        assert_eq!(expected[i], actual[i]);
    }
}

#[test]
fn test_range_agrees_with_filtered_iteration() {
    let mut rng = thread_rng();
    let mut map = TreapMap::new();
    for _ in 0..1_000 {
        let key = rng.gen_range(0, 10_000u32).to_string().into_bytes();
        map.insert(key, ());
    }

    for _ in 0..100 {
        let a = rng.gen_range(0, 10_000u32).to_string().into_bytes();
        let b = rng.gen_range(0, 10_000u32).to_string().into_bytes();

        let expected: Vec<Vec<u8>> = map
            .iter()
            .map(|(key, _)| key.to_vec())
            .filter(|key| &a[..] <= &key[..] && &key[..] < &b[..])
            .collect();
        let actual: Vec<Vec<u8>> = map
            .range(Some(&a[..]), Some(&b[..]))
            .map(|(key, _)| key.to_vec())
            .collect();
        assert_eq!(expected, actual);

        let mut expected_rev: Vec<Vec<u8>> = map
            .iter()
            .map(|(key, _)| key.to_vec())
            .filter(|key| &b[..] < &key[..] && &key[..] <= &a[..])
            .collect();
        expected_rev.reverse();
        let actual_rev: Vec<Vec<u8>> = map
            .range_rev(Some(&a[..]), Some(&b[..]))
            .map(|(key, _)| key.to_vec())
            .collect();
        assert_eq!(expected_rev, actual_rev);
    }
}
