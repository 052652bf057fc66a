//! Generated meshes

use log::debug;
use thiserror::Error;

use super::vertex::Vertex;
use crate::foundation::math::{Vec2, Vec3};

/// Grid dimensions that cannot be indexed with `u32`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("Plane grid {cols}x{rows} exceeds u32 vertex indices")]
pub struct GridTooLarge {
    pub cols: u32,
    pub rows: u32,
}

/// A flat grid over `[-1, 1]²`, triangulated for an indexed draw
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PlaneMesh {
    /// Grid points, row by row, `x` varying fastest
    pub positions: Vec<Vec2>,
    /// Triangle list, two triangles per cell
    pub indices: Vec<u32>,
}

impl PlaneMesh {
    /// Grid of `cols × rows` cells
    ///
    /// Produces `(cols + 1)(rows + 1)` points and `6 · cols · rows` indices.
    /// Each cell emits `topL, botL, topR` then `topR, botL, botR`. An empty
    /// grid (either count zero) has no indices. Fails when the point count
    /// does not fit in a `u32` index.
    #[allow(clippy::cast_precision_loss)]
    pub fn grid(cols: u32, rows: u32) -> Result<Self, GridTooLarge> {
        let too_large = GridTooLarge { cols, rows };
        let point_count = cols
            .checked_add(1)
            .zip(rows.checked_add(1))
            .and_then(|(c, r)| c.checked_mul(r))
            .ok_or(too_large)?;
        let index_count = usize::try_from(u64::from(cols) * u64::from(rows) * 6)
            .map_err(|_| too_large)?;

        let mut positions = Vec::with_capacity(point_count as usize);
        let mut indices = Vec::with_capacity(index_count);

        let dx = if cols == 0 { 0.0 } else { 2.0 / cols as f32 };
        let dy = if rows == 0 { 0.0 } else { 2.0 / rows as f32 };

        for i in 0..=rows {
            for j in 0..=cols {
                positions.push(Vec2::new([j as f32 * dx - 1.0, i as f32 * dy - 1.0]));

                if i == rows || j == cols {
                    continue;
                }

                let top_l = i * (cols + 1) + j;
                let top_r = top_l + 1;
                let bot_l = (i + 1) * (cols + 1) + j;
                let bot_r = bot_l + 1;
                indices.extend_from_slice(&[top_l, bot_l, top_r, top_r, bot_l, bot_r]);
            }
        }

        debug!("Generated {cols}x{rows} plane: {} vertices, {} indices", positions.len(), indices.len());
        Ok(Self { positions, indices })
    }

    /// Grid points as `z = 0` vertices
    pub fn vertices(&self) -> Vec<Vertex> {
        self.positions
            .iter()
            .map(|p| Vertex::new(Vec3::new([p.x(), p.y(), 0.0])))
            .collect()
    }
}
