use crate::{
    error::Result,
    types::{Component, ForegroundMask, Rect},
};
use image::RgbImage;

/// Trait for mask-building algorithms
pub trait MaskBuilder: Send + Sync {
    /// Reduce a decoded color image to a binary foreground mask
    fn build_mask(&self, image: &RgbImage) -> Result<ForegroundMask>;
}

/// Trait for connected-component labeling algorithms
pub trait ComponentLabeler: Send + Sync {
    /// Group foreground pixels into maximal 4-connected components
    fn label_components(&self, mask: &ForegroundMask) -> Result<Vec<Component>>;
}

/// Trait for platform post-filtering algorithms
pub trait PlatformFilter: Send + Sync {
    /// Drop rectangles that should not become platforms
    fn retain(&self, platforms: &mut Vec<Rect>) -> Result<()>;
}

/// Main trait for platform detection
pub trait PlatformDetector: Send + Sync {
    /// Detect platform rectangles in a color image
    fn detect_platforms(&self, image: &RgbImage) -> Result<Vec<Rect>>;
}
