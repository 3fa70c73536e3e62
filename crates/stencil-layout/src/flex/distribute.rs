//! Resolving flexible lengths: the iterative freeze loop.

use log::trace;

use super::FlexItem;
use crate::box_model::clamp;

/// Violations smaller than this are treated as zero.
const EPSILON: f32 = 0.01;

/// Resolve the target main size of every item on one line.
///
/// The line grows when the outer hypothetical sizes plus gaps leave free
/// space, and shrinks otherwise; the direction is fixed up front. Each
/// round hands the remaining free space to the unfrozen items (by grow
/// factor, or by shrink factor scaled by basis), clamps them to their
/// bounds and freezes the violators. A round either freezes at least one
/// item or ends the loop, so at most `items.len()` rounds run.
pub(crate) fn resolve_flexible_lengths(items: &mut [FlexItem], available: f32, gap: f32) {
    if items.is_empty() {
        return;
    }
    let gaps = gap * (items.len() - 1) as f32;

    let sum_outer_hypothetical: f32 = items.iter().map(FlexItem::outer_hypothetical).sum();
    let growing = sum_outer_hypothetical + gaps < available;

    // Items that cannot flex keep their hypothetical size.
    for item in items.iter_mut() {
        item.target = item.hypothetical;
        let factor = if growing { item.grow } else { item.shrink };
        item.frozen = factor <= 0.0
            || (growing && item.basis > item.hypothetical)
            || (!growing && item.basis < item.hypothetical);
    }

    for _ in 0..=items.len() {
        if items.iter().all(|item| item.frozen) {
            break;
        }

        let used: f32 = items
            .iter()
            .map(|item| {
                let size = if item.frozen { item.target } else { item.basis };
                size + item.main_margins()
            })
            .sum();
        let remaining = available - gaps - used;

        if growing {
            let grow_sum: f32 = items.iter().filter(|i| !i.frozen).map(|i| i.grow).sum();
            // A fractional total never hands out more than its share.
            let divisor = grow_sum.max(1.0);
            for item in items.iter_mut().filter(|i| !i.frozen) {
                item.target = item.basis + remaining * (item.grow / divisor);
            }
        } else {
            let scaled_sum: f32 = items
                .iter()
                .filter(|i| !i.frozen)
                .map(|i| i.shrink * i.basis)
                .sum();
            for item in items.iter_mut().filter(|i| !i.frozen) {
                item.target = if scaled_sum > 0.0 {
                    remaining.mul_add((item.shrink * item.basis) / scaled_sum, item.basis)
                } else {
                    item.basis
                };
            }
        }

        // Fix min/max violations.
        let mut total_violation = 0.0_f32;
        let mut violations = vec![0.0_f32; items.len()];
        for (item, violation) in items.iter_mut().zip(violations.iter_mut()) {
            if item.frozen {
                continue;
            }
            let clamped = clamp(item.target, item.min_main, item.max_main).max(0.0);
            *violation = clamped - item.target;
            total_violation += *violation;
            item.target = clamped;
        }

        trace!("[FLEX] remaining={remaining:.3} violation={total_violation:.3}");

        if total_violation.abs() < EPSILON {
            for item in items.iter_mut() {
                item.frozen = true;
            }
        } else {
            let min_violation = total_violation > 0.0;
            for (item, violation) in items.iter_mut().zip(&violations) {
                if (min_violation && *violation > 0.0) || (!min_violation && *violation < 0.0) {
                    item.frozen = true;
                }
            }
        }
    }

    for item in items.iter_mut() {
        item.target = clamp(item.target, item.min_main, item.max_main).max(0.0);
    }
}
