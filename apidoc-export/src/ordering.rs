//! Navigation ordering and attribute resolution.
//!
//! Categories may declare `|Space` (visual separator) or `|<OtherTitle>`
//! (nest under that category). A category whose title is a single decimal
//! digit followed by a referenced attribute name is the *declared base* of
//! that group; the digit is the group's sort priority (0 first). Groups
//! without a declared base default to priority 9.
//!
//! [`resolve`] is a pure function: the parsed categories stay untouched and
//! the result is a view — resolved display titles (digit stripped from group
//! bases) plus the sidebar order as indices. Pages themselves render in
//! source declaration order; only the sidebar follows the grouping rule.

use apidoc_parser::markup::text::leading_priority_digit;
use apidoc_parser::markup::SPACE_ATTRIBUTE;
use apidoc_parser::Category;

/// Priority assigned to groups with no declared base (and to `Space`).
const DEFAULT_PRIORITY: u32 = 9;

/// Resolved presentation view over a parsed category list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Arrangement {
    /// Display title per category, in parse order. Identical to the parsed
    /// title except for declared group bases, which lose their digit.
    pub titles: Vec<String>,
    /// Sidebar order, as indices into the parsed category list.
    pub nav: Vec<usize>,
}

impl Arrangement {
    /// Resolved title for the category at parse index `index`.
    pub fn title(&self, index: usize) -> &str {
        &self.titles[index]
    }
}

/// Compute the navigation order and resolved titles for `categories`.
pub fn resolve(categories: &[Category]) -> Arrangement {
    let mut titles: Vec<String> = categories.iter().map(|c| c.title.clone()).collect();

    // Distinct attribute names, in first-appearance order.
    let mut attributes: Vec<&str> = Vec::new();
    for category in categories {
        if let Some(attribute) = category.parent_attribute.as_deref() {
            if !attributes.contains(&attribute) {
                attributes.push(attribute);
            }
        }
    }

    if attributes.is_empty() {
        return Arrangement {
            titles,
            nav: (0..categories.len()).collect(),
        };
    }

    // Find each group's declared base: a title of one priority digit plus
    // exactly the attribute name. The digit is stripped from the display
    // title; `Space` never forms a digit group.
    let mut groups: Vec<(&str, u32)> = Vec::new();
    for attribute in &attributes {
        let mut priority = DEFAULT_PRIORITY;
        if *attribute != SPACE_ATTRIBUTE {
            for (index, category) in categories.iter().enumerate() {
                if let Some((digit, rest)) = leading_priority_digit(&category.title) {
                    if rest == *attribute {
                        titles[index] = rest.to_string();
                        priority = digit;
                        break;
                    }
                }
            }
        }
        groups.push((attribute, priority));
    }

    // Stable sort fixes the group iteration order.
    groups.sort_by_key(|(_, priority)| *priority);

    let mut nav: Vec<usize> = Vec::new();
    let mut placed = vec![false; categories.len()];
    for (attribute, _) in &groups {
        // Base pass: the group's base plus any unconsumed plain or
        // Space-tagged categories, in original relative order.
        for (index, category) in categories.iter().enumerate() {
            if placed[index] {
                continue;
            }
            let eligible = titles[index] == *attribute
                || !category.has_attribute()
                || category.is_break();
            if !eligible {
                continue;
            }
            // A Space-tagged category that anchors some other group is
            // emitted by that group's base pass instead, never twice.
            if category.is_break()
                && titles[index] != *attribute
                && anchors_a_group(&titles[index], categories)
            {
                continue;
            }
            placed[index] = true;
            nav.push(index);
        }

        if *attribute == SPACE_ATTRIBUTE {
            continue;
        }

        // Child pass: everything nested under this group, in original order.
        for (index, category) in categories.iter().enumerate() {
            if !placed[index] && category.parent_attribute.as_deref() == Some(*attribute) {
                placed[index] = true;
                nav.push(index);
            }
        }
    }

    Arrangement { titles, nav }
}

fn anchors_a_group(title: &str, categories: &[Category]) -> bool {
    categories
        .iter()
        .any(|c| c.parent_attribute.as_deref() == Some(title))
}
