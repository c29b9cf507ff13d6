use super::*;

use proptest::prelude::*;
use std::collections::BTreeSet;

/// Walks every reachable node and checks the structural invariants.
fn validate_dictionary(d: &Dictionary<u8>) {
    let mut reachable = 0usize;
    let mut ends = 0usize;
    // (chain head, parent of the chain)
    let mut stack: Vec<(NodeId, Option<NodeId>)> = Vec::new();
    if let Some(root) = d.root() {
        stack.push((root, None));
    }

    while let Some((head, parent)) = stack.pop() {
        assert!(
            d.node(head).prev_sibling().is_none(),
            "chain head must not have a previous sibling"
        );
        let mut seen = Vec::new();
        let mut chain_words = 0u32;
        let mut prev: Option<NodeId> = None;
        let mut cur = Some(head);
        while let Some(id) = cur {
            reachable += 1;
            let node = d.node(id);
            assert_eq!(node.parent(), parent, "sibling must share the chain parent");
            assert_eq!(node.prev_sibling(), prev, "back link must mirror next link");
            assert!(
                !seen.contains(&node.symbol()),
                "symbols within a chain must be unique"
            );
            seen.push(node.symbol());

            if node.is_end() {
                assert_eq!(node.count(), 0, "sentinel never counts words");
                assert!(node.child().is_none(), "sentinel is a leaf");
                ends += 1;
                chain_words += 1;
            } else {
                assert!(node.count() > 0, "label node must lead to a word");
                let child = node.child().expect("label node must have a child chain");
                stack.push((child, Some(id)));
                chain_words += node.count();
            }
            prev = Some(id);
            cur = node.next_sibling();
        }

        let expected = match parent {
            Some(p) => d.node(p).count(),
            None => d.len() as u32,
        };
        assert_eq!(chain_words, expected, "chain must account for its parent's words");
    }

    assert_eq!(reachable, d.num_nodes(), "every node must be reachable");
    assert_eq!(ends, d.len(), "one sentinel per stored word");
}

#[derive(Clone, Debug)]
enum Op {
    Insert(Vec<u8>),
    Advance(u8),
    Retreat,
    Reset,
    AddPrefix,
}

fn key_strategy() -> impl Strategy<Value = Vec<u8>> + Clone {
    // A tiny alphabet keeps prefixes shared and chains short.
    prop::collection::vec(b'a'..=b'd', 0..=6)
}

fn ops_strategy() -> impl Strategy<Value = Vec<Op>> {
    let op = prop_oneof![
        30 => key_strategy().prop_map(Op::Insert),
        40 => (b'a'..=b'e').prop_map(Op::Advance),
        20 => Just(Op::Retreat),
        5 => Just(Op::Reset),
        5 => Just(Op::AddPrefix),
    ];
    prop::collection::vec(op, 0..=300)
}

fn model_count(words: &BTreeSet<Vec<u8>>, prefix: &[u8]) -> usize {
    words.iter().filter(|w| w.starts_with(prefix)).count()
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        .. ProptestConfig::default()
    })]

    #[test]
    fn prop_engine_matches_model(ops in ops_strategy()) {
        let mut ac: Autocomplete<u8> = Autocomplete::new();
        let mut words: BTreeSet<Vec<u8>> = BTreeSet::new();
        let mut prefix: Vec<u8> = Vec::new();

        for op in ops {
            match op {
                Op::Insert(word) => {
                    let got = ac.add(&word);
                    if word.is_empty() {
                        prop_assert_eq!(got, Err(AutocompleteError::InvalidArgument));
                    } else {
                        prop_assert_eq!(got, Ok(words.insert(word)));
                    }
                }
                Op::Advance(label) => {
                    prefix.push(label);
                    let got = ac.advance(label);
                    prop_assert_eq!(got, model_count(&words, &prefix) > 0);
                }
                Op::Retreat => {
                    let got = ac.retreat();
                    if prefix.pop().is_some() {
                        prop_assert_eq!(got, Ok(()));
                    } else {
                        prop_assert_eq!(got, Err(AutocompleteError::InvalidState));
                    }
                }
                Op::Reset => {
                    prefix.clear();
                    ac.reset();
                }
                Op::AddPrefix => {
                    let got = ac.add_prefix();
                    if prefix.is_empty() {
                        prop_assert_eq!(got, Err(AutocompleteError::InvalidArgument));
                    } else {
                        prop_assert_eq!(got, Ok(words.insert(prefix.clone())));
                    }
                }
            }

            let count = model_count(&words, &prefix);
            prop_assert_eq!(ac.current_prefix(), prefix.as_slice());
            prop_assert_eq!(ac.is_word(), words.contains(&prefix));
            prop_assert_eq!(ac.number_of_predictions(), count);
            prop_assert_eq!(ac.cursor().is_locked(), count == 0 && !prefix.is_empty());
            match ac.retrieve_prediction() {
                Some(w) => {
                    prop_assert!(w.starts_with(&prefix));
                    prop_assert!(words.contains(&w));
                }
                None => prop_assert_eq!(count, 0),
            }
        }

        validate_dictionary(ac.dictionary());
        let mut got: Vec<Vec<u8>> = ac.dictionary().predictive_search(&[]).collect();
        got.sort();
        let expected: Vec<Vec<u8>> = words.into_iter().collect();
        prop_assert_eq!(got, expected);
    }

    #[test]
    fn prop_advance_retreat_round_trip(
        keys in prop::collection::vec(key_strategy(), 0..=40),
        typed in prop::collection::vec(b'a'..=b'e', 0..=8),
        extra in b'a'..=b'e',
    ) {
        let dict = Dictionary::<u8>::build(&keys);
        let mut cursor = Cursor::new();
        for &label in &typed {
            cursor.advance(&dict, label);
        }
        let before = cursor.clone();
        let predictions = cursor.number_of_predictions(&dict);
        let prediction = cursor.retrieve_prediction(&dict);

        cursor.advance(&dict, extra);
        cursor.retreat(&dict).unwrap();

        prop_assert_eq!(cursor.current_prefix(), before.current_prefix());
        prop_assert_eq!(cursor.locked_depth(), before.locked_depth());
        prop_assert_eq!(cursor.is_word(&dict), before.is_word(&dict));
        prop_assert_eq!(cursor.number_of_predictions(&dict), predictions);
        prop_assert_eq!(cursor.retrieve_prediction(&dict), prediction);
    }

    #[test]
    fn prop_every_word_is_found(keys in prop::collection::vec(key_strategy(), 0..=60)) {
        let dict = Dictionary::<u8>::build(&keys);
        validate_dictionary(&dict);
        let distinct: BTreeSet<&Vec<u8>> = keys.iter().filter(|k| !k.is_empty()).collect();
        prop_assert_eq!(dict.len(), distinct.len());

        let mut cursor = Cursor::new();
        for key in distinct {
            cursor.reset();
            for &label in key {
                prop_assert!(cursor.advance(&dict, label));
            }
            prop_assert!(cursor.is_word(&dict));
            prop_assert!(dict.contains(key));
        }
        cursor.reset();
        prop_assert_eq!(cursor.number_of_predictions(&dict), dict.len());
    }
}

fn for_each_permutation<T: Clone>(items: &[T], mut f: impl FnMut(Vec<T>)) {
    fn rec<T: Clone>(items: &[T], used: &mut [bool], out: &mut Vec<T>, f: &mut impl FnMut(Vec<T>)) {
        if out.len() == items.len() {
            f(out.clone());
            return;
        }
        for i in 0..items.len() {
            if used[i] {
                continue;
            }
            used[i] = true;
            out.push(items[i].clone());
            rec(items, used, out, f);
            out.pop();
            used[i] = false;
        }
    }

    let mut used = vec![false; items.len()];
    let mut out = Vec::with_capacity(items.len());
    rec(items, &mut used, &mut out, &mut f);
}

#[test]
fn exhaustive_insert_order_small_set() {
    let keys: Vec<Vec<u8>> = vec![
        b"a".to_vec(),
        b"b".to_vec(),
        b"ab".to_vec(),
        b"abc".to_vec(),
        b"ba".to_vec(),
        b"bab".to_vec(),
    ];
    let prefixes: Vec<&[u8]> = vec![b"", b"a", b"ab", b"abc", b"b", b"ba", b"c"];

    for_each_permutation(&keys, |perm| {
        let mut d = Dictionary::<u8>::new();
        for k in &perm {
            assert_eq!(d.insert(k), Ok(true));
        }
        validate_dictionary(&d);
        assert_eq!(d.num_nodes(), 12);

        for prefix in &prefixes {
            let expected = keys.iter().filter(|k| k.starts_with(prefix)).count();
            assert_eq!(d.count_with_prefix(prefix), expected, "prefix {prefix:?}");
        }

        // The left-most prediction follows insertion order: the first key
        // inserted under a prefix decides the first branch taken.
        let first = d.predict(b"").unwrap();
        assert!(perm[0].starts_with(&first[..1]));
    });
}
