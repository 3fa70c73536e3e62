//! Flex line construction.

use std::ops::Range;

use log::debug;

use super::FlexItem;
use crate::error::LayoutError;

/// Greedily break `items` into lines.
///
/// An item joins the current line while
/// `running + gap + outer_hypothetical <= budget`; otherwise it starts a new
/// line. A line always accepts its first item, so an item wider than the
/// budget sits alone on its line. Without a budget (an indefinite main
/// size) everything fits on one line.
///
/// # Errors
///
/// [`LayoutError::TooManyFlexLines`] as soon as the line count passes
/// `max_lines`.
pub(crate) fn break_into_lines(
    items: &[FlexItem],
    budget: Option<f32>,
    gap: f32,
    max_lines: usize,
) -> Result<Vec<Range<usize>>, LayoutError> {
    let mut lines: Vec<Range<usize>> = Vec::new();
    if items.is_empty() {
        return Ok(lines);
    }
    let budget = budget.unwrap_or(f32::INFINITY);

    let mut start = 0;
    let mut running = 0.0_f32;
    for (index, item) in items.iter().enumerate() {
        let outer = item.outer_hypothetical();
        if index > start && running + gap + outer > budget + EPSILON {
            push_line(&mut lines, start..index, max_lines)?;
            start = index;
            running = outer;
        } else if index == start {
            running = outer;
        } else {
            running += gap + outer;
        }
    }
    push_line(&mut lines, start..items.len(), max_lines)?;
    debug!(
        "[MULTI-LINE] {} items in {} lines (budget={budget:.1} gap={gap:.1})",
        items.len(),
        lines.len()
    );
    Ok(lines)
}

/// A single line holding every item.
pub(crate) fn single_line(items: &[FlexItem]) -> Vec<Range<usize>> {
    if items.is_empty() {
        Vec::new()
    } else {
        vec![0..items.len()]
    }
}

/// Tolerance for accumulated float error when testing line fit.
const EPSILON: f32 = 1e-3;

fn push_line(
    lines: &mut Vec<Range<usize>>,
    line: Range<usize>,
    max_lines: usize,
) -> Result<(), LayoutError> {
    if lines.len() >= max_lines {
        return Err(LayoutError::TooManyFlexLines {
            lines: lines.len() + 1,
            limit: max_lines,
        });
    }
    lines.push(line);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::flex::test_support::item;

    #[test]
    fn greedy_wrap_with_gap() {
        let items = vec![item(140.0, 0.0, 1.0); 3];
        let lines = break_into_lines(&items, Some(300.0), 10.0, 16).unwrap();
        assert_eq!(lines, vec![0..2, 2..3]);
    }

    #[test]
    fn oversized_first_item_gets_its_own_line() {
        let items = vec![item(500.0, 0.0, 1.0), item(10.0, 0.0, 1.0)];
        let lines = break_into_lines(&items, Some(100.0), 0.0, 16).unwrap();
        assert_eq!(lines, vec![0..1, 1..2]);
    }

    #[test]
    fn exact_fit_stays_on_one_line() {
        let items = vec![item(50.0, 0.0, 1.0); 2];
        let lines = break_into_lines(&items, Some(100.0), 0.0, 16).unwrap();
        assert_eq!(lines, vec![0..2]);
    }

    #[test]
    fn indefinite_budget_is_one_line() {
        let items = vec![item(500.0, 0.0, 1.0); 4];
        let lines = break_into_lines(&items, None, 10.0, 16).unwrap();
        assert_eq!(lines, vec![0..4]);
    }

    #[test]
    fn line_limit_is_enforced() {
        let items = vec![item(100.0, 0.0, 1.0); 5];
        let result = break_into_lines(&items, Some(100.0), 0.0, 3);
        assert_eq!(
            result,
            Err(LayoutError::TooManyFlexLines { lines: 4, limit: 3 })
        );
    }
}
