use crate::{error::Result, traits::PlatformFilter, types::Rect};

/// Keeps only rectangles that are at least `min_width` wide and `min_height`
/// tall. Applied after the labeler's pixel-count cutoff, so a long thin
/// sliver with plenty of pixels is still rejected here.
#[derive(Debug, Clone)]
pub struct MinSizeFilter {
    pub min_width: u32,
    pub min_height: u32,
}

impl Default for MinSizeFilter {
    fn default() -> Self {
        Self {
            min_width: 15,
            min_height: 8,
        }
    }
}

impl PlatformFilter for MinSizeFilter {
    fn retain(&self, platforms: &mut Vec<Rect>) -> Result<()> {
        platforms.retain(|r| r.width >= self.min_width && r.height >= self.min_height);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn both_dimensions_must_pass() {
        let mut platforms = vec![
            Rect { x: 0, y: 0, width: 15, height: 8 },
            Rect { x: 0, y: 20, width: 60, height: 1 },
            Rect { x: 0, y: 40, width: 14, height: 50 },
            Rect { x: 0, y: 60, width: 100, height: 7 },
        ];

        MinSizeFilter::default().retain(&mut platforms).unwrap();
        assert_eq!(platforms, vec![Rect { x: 0, y: 0, width: 15, height: 8 }]);
    }
}
