use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString};

/// How a space placeholder finds the weight whose width it compensates for.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    EnumIter,
    EnumString,
    Display,
    Serialize,
    Deserialize,
    clap::ValueEnum,
)]
#[strum(serialize_all = "kebab-case")]
#[serde(rename_all = "kebab-case")]
pub enum SpacingPolicy {
    /// Use whichever weight was rendered last before the space, anywhere
    /// earlier in the template. A space that comes before its own weight
    /// therefore picks up the previous weight's width.
    #[default]
    ScanOrder,
    /// Bind each space to the nearest weight on the same line, looking left
    /// first and then right. Spaces on a line with no weight get nothing.
    Columnar,
}

/// What the spacing pass needs to know about one template element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mark {
    /// Literal text or a percentage; only its line breaks matter.
    Text { newlines: usize },
    /// A rendered weight of `width` characters.
    Weight { width: usize },
    Space,
}

/// Allocation for every mark, indexed like `marks`. Only `Space` entries are
/// meaningful. Values go negative when a weight is wider than `max_digits`.
pub fn plan(policy: SpacingPolicy, marks: &[Mark], max_digits: usize) -> Vec<isize> {
    let signed = |n: usize| isize::try_from(n).unwrap_or(isize::MAX);
    let alloc = |width: usize| signed(max_digits).saturating_sub(signed(width));

    match policy {
        SpacingPolicy::ScanOrder => {
            let mut current = 0;
            marks
                .iter()
                .map(|mark| {
                    if let Mark::Weight { width } = mark {
                        current = alloc(*width);
                    }
                    current
                })
                .collect()
        }
        SpacingPolicy::Columnar => {
            let lines = line_numbers(marks);
            let weight_at = |j: usize| match marks[j] {
                Mark::Weight { width } => Some(width),
                _ => None,
            };

            (0..marks.len())
                .map(|i| {
                    if marks[i] != Mark::Space {
                        return 0;
                    }
                    let line = lines[i];
                    let left = (0..i)
                        .rev()
                        .take_while(|&j| lines[j] == line)
                        .find_map(weight_at);
                    let right = || {
                        (i + 1..marks.len())
                            .take_while(|&j| lines[j] == line)
                            .find_map(weight_at)
                    };
                    left.or_else(right).map(alloc).unwrap_or(0)
                })
                .collect()
        }
    }
}

/// Line each mark starts on. A literal that ends in a newline still starts on
/// the line it opens, so it stays grouped with the marks before it.
fn line_numbers(marks: &[Mark]) -> Vec<usize> {
    let mut line = 0;
    marks
        .iter()
        .map(|mark| {
            let start = line;
            if let Mark::Text { newlines } = mark {
                line += newlines;
            }
            start
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const W1: Mark = Mark::Weight { width: 1 };
    const W3: Mark = Mark::Weight { width: 3 };
    const SAME_LINE: Mark = Mark::Text { newlines: 0 };
    const BREAK: Mark = Mark::Text { newlines: 1 };

    #[test]
    fn scan_order_carries_the_last_weight_forward() {
        let marks = [Mark::Space, W3, Mark::Space, BREAK, Mark::Space, W1];
        let alloc = plan(SpacingPolicy::ScanOrder, &marks, 4);
        assert_eq!(alloc[0], 0);
        assert_eq!(alloc[2], 1);
        assert_eq!(alloc[4], 1);
    }

    #[test]
    fn columnar_binds_to_the_same_line() {
        let marks = [Mark::Space, W3, Mark::Space, BREAK, Mark::Space, SAME_LINE, W1];
        let alloc = plan(SpacingPolicy::Columnar, &marks, 4);
        // first space has no weight to its left, so it takes the one on its right
        assert_eq!(alloc[0], 1);
        assert_eq!(alloc[2], 1);
        assert_eq!(alloc[4], 3);
    }

    #[test]
    fn columnar_ignores_other_lines() {
        let marks = [W1, BREAK, Mark::Space, BREAK, W3];
        let alloc = plan(SpacingPolicy::Columnar, &marks, 4);
        assert_eq!(alloc[2], 0);
    }

    #[test]
    fn wide_weights_go_negative() {
        let marks = [Mark::Weight { width: 6 }, Mark::Space];
        assert_eq!(plan(SpacingPolicy::ScanOrder, &marks, 4)[1], -2);
        assert_eq!(plan(SpacingPolicy::Columnar, &marks, 4)[1], -2);
    }

    #[test]
    fn extreme_widths_saturate() {
        let marks = [Mark::Weight { width: 1 }, Mark::Space];
        assert_eq!(plan(SpacingPolicy::ScanOrder, &marks, usize::MAX)[1], isize::MAX - 1);
        let marks = [Mark::Weight { width: usize::MAX }, Mark::Space];
        assert_eq!(plan(SpacingPolicy::Columnar, &marks, 0)[1], -isize::MAX);
    }
}
