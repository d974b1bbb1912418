//! Integer Bresenham line rasterization between grid cells.
//!
//! ```text
//! From (0,0) to (7,3):
//!
//!     3 │             ● ●
//!     2 │         ● ●
//!     1 │     ● ●
//!     0 │ ● ●
//!       └────────────────
//!         0 1 2 3 4 5 6 7
//! ```
//!
//! The walk always advances along the dominant axis, so the path has exactly
//! one cell per major-axis step and never skips a cell.

use glam::IVec2;

/// Every cell on the straight line from `start` to `end`, both included.
///
/// The result has `1 + max(|dx|, |dy|)` cells and runs from `start` to `end`
/// regardless of direction: `rasterize(b, a)` is `rasterize(a, b)` reversed.
pub fn rasterize(start: IVec2, end: IVec2) -> Vec<IVec2> {
    let steep = (end.y - start.y).abs() > (end.x - start.x).abs();
    let (mut from, mut to) = if steep {
        (transpose(start), transpose(end))
    } else {
        (start, end)
    };

    // Walk with increasing major coordinate, reverse afterwards.
    let swapped = from.x > to.x;
    if swapped {
        std::mem::swap(&mut from, &mut to);
    }

    let dx = to.x - from.x;
    let dy = (to.y - from.y).abs();
    let y_step = if from.y < to.y { 1 } else { -1 };

    let mut error = dx / 2;
    let mut y = from.y;
    let mut points = Vec::with_capacity(dx as usize + 1);
    for x in from.x..=to.x {
        let p = IVec2::new(x, y);
        points.push(if steep { transpose(p) } else { p });
        error -= dy;
        if error < 0 {
            y += y_step;
            error += dx;
        }
    }

    if swapped {
        points.reverse();
    }
    points
}

#[inline]
fn transpose(p: IVec2) -> IVec2 {
    IVec2::new(p.y, p.x)
}
