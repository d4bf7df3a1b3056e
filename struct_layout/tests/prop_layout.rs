//! Property-based tests for layout computation.

use proptest::prelude::*;
use struct_layout::{Layout, calcsize, resolve};
use struct_format::parse;

const TYPES: &[char] = &['x', 'c', 'b', 'B', '?', 'h', 'H', 'i', 'I', 'l', 'L', 'q', 'Q', 'f', 'd', 's'];
const MODES: &[&str] = &["", "@", "=", "<", ">", "!"];

fn format_string() -> impl Strategy<Value = String> {
    (
        prop::sample::select(MODES),
        prop::collection::vec((0usize..6, prop::sample::select(TYPES)), 0..12),
    )
        .prop_map(|(mode, tokens)| {
            let mut format = mode.to_string();
            for (n, ch) in tokens {
                if n == 1 {
                    format.push(ch);
                } else {
                    format.push_str(&format!("{n}{ch}"));
                }
            }
            format
        })
}

proptest! {
    #[test]
    fn prop_calcsize_is_deterministic(format in format_string()) {
        prop_assert_eq!(calcsize(&format).unwrap(), calcsize(&format).unwrap());
    }
}

proptest! {
    #[test]
    fn prop_gaps_bounded_by_alignment(format in format_string()) {
        let parsed = parse(&format).unwrap();
        let items = resolve(&parsed.items, &parsed.mode).unwrap();
        let layout = Layout::compute(&items, &parsed.mode).unwrap();

        for i in 1..items.len() {
            let end = layout.offsets[i - 1] + items[i - 1].total_size;
            prop_assert!(layout.offsets[i] >= end);
            let pad = layout.offsets[i] - end;
            if parsed.mode.pad_alignment {
                prop_assert!(pad < items[i].unit_size.max(1));
                if items[i].unit_size > 1 {
                    prop_assert_eq!(layout.offsets[i] % items[i].unit_size, 0);
                }
            } else {
                prop_assert_eq!(pad, 0);
            }
        }
    }
}

proptest! {
    #[test]
    fn prop_size_is_end_of_last_field(format in format_string()) {
        let parsed = parse(&format).unwrap();
        let items = resolve(&parsed.items, &parsed.mode).unwrap();
        let layout = Layout::compute(&items, &parsed.mode).unwrap();

        match items.last() {
            Some(last) => prop_assert_eq!(layout.size, layout.offsets[items.len() - 1] + last.total_size),
            None => prop_assert_eq!(layout.size, 0),
        }
        if items.iter().any(|i| i.total_size > 0) {
            prop_assert!(layout.size > 0);
        }
    }
}

proptest! {
    #[test]
    fn prop_unaligned_size_is_sum_of_fields(format in format_string()) {
        let parsed = parse(&format).unwrap();
        let items = resolve(&parsed.items, &parsed.mode).unwrap();
        let layout = Layout::compute(&items, &parsed.mode).unwrap();
        if !parsed.mode.pad_alignment {
            prop_assert_eq!(layout.size, items.iter().map(|i| i.total_size).sum::<usize>());
        }
    }
}
