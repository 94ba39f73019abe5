pub mod filtering;
pub mod labeling;
pub mod thresholding;

pub use filtering::*;
pub use labeling::*;
pub use thresholding::*;

use crate::{
    error::Result,
    traits::{ComponentLabeler, MaskBuilder, PlatformDetector},
    types::Rect,
};

/// Standard platform detector implementation
#[derive(Debug)]
pub struct StandardPlatformDetector<M, L>
where
    M: MaskBuilder,
    L: ComponentLabeler,
{
    pub mask_builder: M,
    pub labeler: L,
}

impl<M, L> StandardPlatformDetector<M, L>
where
    M: MaskBuilder,
    L: ComponentLabeler,
{
    pub fn new(mask_builder: M, labeler: L) -> Self {
        Self {
            mask_builder,
            labeler,
        }
    }
}

impl<M, L> PlatformDetector for StandardPlatformDetector<M, L>
where
    M: MaskBuilder,
    L: ComponentLabeler,
{
    fn detect_platforms(&self, image: &image::RgbImage) -> Result<Vec<Rect>> {
        let mask = self.mask_builder.build_mask(image)?;
        let components = self.labeler.label_components(&mask)?;
        Ok(components.iter().map(|c| c.bounding_box()).collect())
    }
}
