use crate::{
    error::Result,
    traits::ComponentLabeler,
    types::{Component, ForegroundMask, Point},
};
use std::collections::VecDeque;

/// Breadth-first flood-fill labeler over 4-connected neighborhoods.
///
/// Foreground coordinates are visited in the mask's row-major order; each
/// unvisited coordinate seeds a flood fill that claims its entire component.
/// A dense visited array guarantees every foreground pixel is processed by
/// exactly one fill, so the labeler runs in O(F) for F foreground pixels.
///
/// Components with `min_pixels` or fewer members are treated as noise and
/// dropped from the output. Their pixels still count as visited, so a field
/// of small specks costs one fill each and nothing more.
#[derive(Debug, Clone)]
pub struct FloodFillLabeler {
    /// A component must have strictly more pixels than this to be kept.
    pub min_pixels: usize,
}

impl Default for FloodFillLabeler {
    fn default() -> Self {
        Self { min_pixels: 50 }
    }
}

const NEIGHBORS: [(i64, i64); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

impl ComponentLabeler for FloodFillLabeler {
    fn label_components(&self, mask: &ForegroundMask) -> Result<Vec<Component>> {
        let width = mask.width() as usize;
        let height = mask.height() as usize;
        let mut visited = vec![false; width * height];
        let mut components = Vec::new();

        for seed in mask.iter() {
            let seed_idx = seed.y as usize * width + seed.x as usize;
            if visited[seed_idx] {
                continue;
            }

            // Explicit worklist rather than recursion: component sizes are
            // unbounded and must not be limited by stack depth.
            let mut pixels = Vec::new();
            let mut queue = VecDeque::new();
            queue.push_back(seed);
            visited[seed_idx] = true;

            while let Some(current) = queue.pop_front() {
                pixels.push(current);

                for (dx, dy) in NEIGHBORS {
                    let nx = current.x as i64 + dx;
                    let ny = current.y as i64 + dy;
                    if nx < 0 || ny < 0 || nx >= width as i64 || ny >= height as i64 {
                        continue;
                    }
                    let (nx, ny) = (nx as u32, ny as u32);
                    let idx = ny as usize * width + nx as usize;
                    if !visited[idx] && mask.contains(nx, ny) {
                        visited[idx] = true;
                        queue.push_back(Point { x: nx, y: ny });
                    }
                }
            }

            if pixels.len() > self.min_pixels {
                components.push(Component::new(pixels));
            }
        }

        Ok(components)
    }
}
