use serde::{Deserialize, Serialize};

/// A single pixel coordinate within the image, origin at the top-left.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Point {
    pub x: u32,
    pub y: u32,
}

/// Dense binary grid marking which pixels count as foreground.
///
/// Stored row-major (`y * width + x`) so membership tests and neighbor
/// lookups are plain indexing rather than hashing.
#[derive(Debug, Clone)]
pub struct ForegroundMask {
    width: u32,
    height: u32,
    bits: Vec<bool>,
}

impl ForegroundMask {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            bits: vec![false; (width as usize) * (height as usize)],
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Mark the pixel at (x, y) as foreground. Out-of-bounds writes are ignored.
    pub fn set(&mut self, x: u32, y: u32) {
        if x < self.width && y < self.height {
            let idx = (y as usize) * (self.width as usize) + x as usize;
            self.bits[idx] = true;
        }
    }

    /// Membership test; false for any coordinate outside the image bounds.
    pub fn contains(&self, x: u32, y: u32) -> bool {
        if x >= self.width || y >= self.height {
            return false;
        }
        self.bits[(y as usize) * (self.width as usize) + x as usize]
    }

    /// Number of foreground pixels.
    pub fn len(&self) -> usize {
        self.bits.iter().filter(|&&b| b).count()
    }

    pub fn is_empty(&self) -> bool {
        !self.bits.iter().any(|&b| b)
    }

    /// Iterate foreground coordinates in row-major order (top-to-bottom,
    /// left-to-right). The labeler relies on this order being deterministic.
    pub fn iter(&self) -> impl Iterator<Item = Point> + '_ {
        let width = self.width as usize;
        self.bits
            .iter()
            .enumerate()
            .filter(|&(_, &b)| b)
            .map(move |(i, _)| Point {
                x: (i % width) as u32,
                y: (i / width) as u32,
            })
    }
}

/// A maximal 4-connected group of foreground pixels.
///
/// Built once by the labeler and never mutated afterwards.
#[derive(Debug, Clone)]
pub struct Component {
    pixels: Vec<Point>,
}

impl Component {
    pub(crate) fn new(pixels: Vec<Point>) -> Self {
        debug_assert!(!pixels.is_empty(), "components are never empty");
        Self { pixels }
    }

    pub fn len(&self) -> usize {
        self.pixels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pixels.is_empty()
    }

    pub fn pixels(&self) -> &[Point] {
        &self.pixels
    }

    /// The tight axis-aligned bounding box around every member pixel.
    pub fn bounding_box(&self) -> Rect {
        let mut min_x = u32::MAX;
        let mut min_y = u32::MAX;
        let mut max_x = 0;
        let mut max_y = 0;

        for p in &self.pixels {
            min_x = min_x.min(p.x);
            min_y = min_y.min(p.y);
            max_x = max_x.max(p.x);
            max_y = max_y.max(p.y);
        }

        Rect {
            x: min_x,
            y: min_y,
            width: max_x - min_x + 1,
            height: max_y - min_y + 1,
        }
    }
}

/// An axis-aligned platform rectangle in pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rect {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl Rect {
    pub fn area(&self) -> u64 {
        self.width as u64 * self.height as u64
    }

    /// X coordinate one past the rightmost column.
    pub fn right(&self) -> u32 {
        self.x + self.width
    }

    /// Y coordinate one past the bottom row.
    pub fn bottom(&self) -> u32 {
        self.y + self.height
    }

    pub fn contains_point(&self, p: Point) -> bool {
        p.x >= self.x && p.x < self.right() && p.y >= self.y && p.y < self.bottom()
    }
}

/// Final pipeline output: the accepted platforms plus the dimensions of the
/// image they were detected in.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DetectedPlatforms {
    /// Platforms ordered by (y, x) ascending.
    pub platforms: Vec<Rect>,
    /// Original image dimensions
    pub image_width: u32,
    pub image_height: u32,
}

impl DetectedPlatforms {
    pub fn len(&self) -> usize {
        self.platforms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.platforms.is_empty()
    }
}
