/// ASCII wireframe renderer for terminal output
use crossterm::style::Color;
use std::convert::Infallible;
use wireview_core::{ProjectedPoint, Projection, Renderer};

use crate::surface::CharGrid;

const EDGE_COLOR: Color = Color::Green;
const MARKER_COLOR: Color = Color::DarkGreen;
const MARKER_GLYPH: char = '@';

/// Draws projected wireframes onto a [`CharGrid`].
///
/// Terminal cells are roughly twice as tall as they are wide, so x is
/// stretched by `cell_aspect` to keep shapes square.
#[derive(Debug, Clone, Copy)]
pub struct AsciiRenderer {
    cell_aspect: f32,
}

impl AsciiRenderer {
    pub fn new(cell_aspect: f32) -> Self {
        Self { cell_aspect }
    }
}

impl Default for AsciiRenderer {
    fn default() -> Self {
        Self::new(2.0)
    }
}

impl Renderer<CharGrid> for AsciiRenderer {
    type Error = Infallible;

    fn render(&self, grid: &mut CharGrid, projection: &Projection) -> Result<(), Infallible> {
        grid.clear();

        let Some(bounds) = projection.bounds() else {
            return Ok(());
        };
        let center = bounds.center();
        let origin = ((grid.width() / 2) as f32, (grid.height() / 2) as f32);

        let to_cell = |p: ProjectedPoint| -> Option<(f32, f32)> {
            let x = origin.0 + (p.x - center.x) * self.cell_aspect;
            let y = origin.1 + (p.y - center.y);
            (x.is_finite() && y.is_finite()).then_some((x, y))
        };
        let limit = (grid.width() as f32 - 1.0, grid.height() as f32 - 1.0);

        for (from, to) in projection.segments() {
            let (Some(a), Some(b)) = (to_cell(from), to_cell(to)) else {
                continue;
            };
            let Some((a, b)) = clip_segment(a, b, limit) else {
                continue;
            };
            let (a, b) = (round_cell(a), round_cell(b));
            let glyph = slope_glyph(b.0 - a.0, b.1 - a.1);
            for (x, y) in line_cells(a, b) {
                grid.plot(x, y, glyph, EDGE_COLOR);
            }
        }

        for point in &projection.points {
            if let Some((x, y)) = to_cell(*point) {
                // Off-grid markers saturate and are dropped by `plot`
                grid.plot(x.round() as i64, y.round() as i64, MARKER_GLYPH, MARKER_COLOR);
            }
        }

        Ok(())
    }
}

fn round_cell(p: (f32, f32)) -> (i64, i64) {
    (p.0.round() as i64, p.1.round() as i64)
}

/// Clip the segment `a`-`b` to the rectangle `0..=limit` (Liang-Barsky).
///
/// Returns `None` when nothing of the segment lies inside, or when its
/// extent overflows `f32`.
fn clip_segment(
    a: (f32, f32),
    b: (f32, f32),
    limit: (f32, f32),
) -> Option<((f32, f32), (f32, f32))> {
    let (dx, dy) = (b.0 - a.0, b.1 - a.1);
    if !dx.is_finite() || !dy.is_finite() {
        return None;
    }

    let mut t0 = 0.0_f32;
    let mut t1 = 1.0_f32;
    for (p, q) in [(-dx, a.0), (dx, limit.0 - a.0), (-dy, a.1), (dy, limit.1 - a.1)] {
        if p == 0.0 {
            if q < 0.0 {
                return None;
            }
            continue;
        }
        let r = q / p;
        if p < 0.0 {
            if r > t1 {
                return None;
            }
            t0 = t0.max(r);
        } else {
            if r < t0 {
                return None;
            }
            t1 = t1.min(r);
        }
    }

    Some((
        (a.0 + t0 * dx, a.1 + t0 * dy),
        (a.0 + t1 * dx, a.1 + t1 * dy),
    ))
}

/// Pick a line glyph for a direction in cell space (y grows downward)
fn slope_glyph(dx: i64, dy: i64) -> char {
    let (adx, ady) = (dx.abs(), dy.abs());
    if adx == 0 && ady == 0 {
        '.'
    } else if ady * 2 <= adx {
        '-'
    } else if adx * 2 <= ady {
        '|'
    } else if (dx > 0) == (dy > 0) {
        '\\'
    } else {
        '/'
    }
}

/// Cells on the line from `a` to `b`, both ends included (Bresenham)
fn line_cells(a: (i64, i64), b: (i64, i64)) -> Vec<(i64, i64)> {
    let (mut x, mut y) = a;
    let dx = (b.0 - x).abs();
    let dy = -(b.1 - y).abs();
    let sx = if x < b.0 { 1 } else { -1 };
    let sy = if y < b.1 { 1 } else { -1 };
    let mut err = dx + dy;

    let mut cells = Vec::with_capacity((dx.max(-dy) + 1) as usize);
    loop {
        cells.push((x, y));
        if (x, y) == b {
            break;
        }
        let e2 = 2 * err;
        if e2 >= dy {
            err += dy;
            x += sx;
        }
        if e2 <= dx {
            err += dx;
            y += sy;
        }
    }
    cells
}
