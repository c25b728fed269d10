// Random field layout
//
// Entities are placed on a coarse grid so nothing overlaps at round
// start. Cell draws are random but bounded: an over-dense configuration
// is a setup error reported to the caller, never an endless loop.

use crate::engine::physics::Playfield;
use glam::Vec2;
use rand::Rng;
use std::collections::HashSet;
use thiserror::Error;

/// Grid cell edge length, comfortably larger than any sprite footprint
const CELL: f32 = 100.0;

/// Horizontal inset keeping cells clear of the field edges
const INSET_X: f32 = 5.0;
/// Vertical inset keeping cells clear of the field edges
const INSET_Y: f32 = 20.0;

/// Random draws allowed per placed entity before giving up
const MAX_ATTEMPTS: u32 = 64;

/// Errors from round setup
#[derive(Debug, Error, PartialEq, Eq)]
pub enum LayoutError {
    /// More entities requested than the grid has cells
    #[error("cannot place {requested} entities on a {cols}x{rows} grid")]
    TooDense {
        requested: usize,
        cols: usize,
        rows: usize,
    },

    /// Random draws kept landing on occupied cells
    #[error("no free cell found after {attempts} attempts")]
    GridExhausted { attempts: u32 },
}

/// Number of usable grid columns and rows for a field
fn grid_size(field: &Playfield) -> (usize, usize) {
    // Keep the rightmost/bottommost cell far enough in that a sprite
    // placed there stays inside the boundary margins
    let cols = ((field.width - 90.0) / CELL) as usize;
    let rows = ((field.height - 95.0) / CELL) as usize;
    (cols, rows)
}

/// Draw `count` distinct non-overlapping positions on the field's grid.
///
/// Positions are cell origins in spawn order; the caller decides which
/// entity goes where. Deterministic for a seeded RNG.
pub fn scatter(
    field: &Playfield,
    count: usize,
    rng: &mut impl Rng,
) -> Result<Vec<Vec2>, LayoutError> {
    let (cols, rows) = grid_size(field);
    if count > cols * rows {
        return Err(LayoutError::TooDense {
            requested: count,
            cols,
            rows,
        });
    }

    let mut used: HashSet<(usize, usize)> = HashSet::with_capacity(count);
    let mut positions = Vec::with_capacity(count);

    for _ in 0..count {
        let mut placed = false;
        for _ in 0..MAX_ATTEMPTS {
            let cell = (rng.random_range(0..cols), rng.random_range(0..rows));
            if used.insert(cell) {
                positions.push(Vec2::new(
                    cell.0 as f32 * CELL + INSET_X,
                    cell.1 as f32 * CELL + INSET_Y,
                ));
                placed = true;
                break;
            }
        }
        if !placed {
            return Err(LayoutError::GridExhausted {
                attempts: MAX_ATTEMPTS,
            });
        }
    }

    Ok(positions)
}
