//! Property-based tests for the markup parser.
//!
//! Body lines are drawn from an alphabet that cannot collide with any
//! directive marker (`|`, `>`, `<` and `=` are excluded), so every generated
//! line must land verbatim in the open element's text.

use apidoc_parser::{parse_lines, parse_str};
use proptest::prelude::*;

proptest! {
    #[test]
    fn body_lines_round_trip_into_element_text(
        body in proptest::collection::vec("[a-zA-Z0-9 ,.;:]{0,40}", 0..12)
    ) {
        let mut lines = vec![
            "> DOCUMENT DATA <".to_string(),
            "|>Category".to_string(),
            "|#Text=first".to_string(),
        ];
        lines.extend(body.iter().cloned());

        let doc = parse_lines(&lines);
        let mut expected = String::from("first");
        for line in &body {
            expected.push('\n');
            expected.push_str(line);
        }
        prop_assert_eq!(doc.category_count(), 1);
        prop_assert_eq!(&doc.categories[0].elements[0].text, &expected);
    }

    #[test]
    fn category_count_matches_directive_count(count in 1usize..20) {
        let mut source = String::from("> DOCUMENT DATA <\n");
        for i in 0..count {
            source.push_str(&format!("|>Category {i}\n"));
        }
        let doc = parse_str(&source);
        prop_assert_eq!(doc.category_count(), count);
    }

    #[test]
    fn preamble_never_produces_categories(
        preamble in proptest::collection::vec("[a-zA-Z0-9 |>#=<]{0,30}", 0..10)
    ) {
        // Without the exact data marker line, nothing is read at all.
        let filtered: Vec<String> = preamble
            .into_iter()
            .filter(|l| l.trim() != "> DOCUMENT DATA <")
            .collect();
        let doc = parse_lines(&filtered);
        prop_assert!(doc.is_empty());
    }
}
