pub mod builder;

use crate::{
    error::Result,
    traits::{ComponentLabeler, MaskBuilder, PlatformFilter},
    types::DetectedPlatforms,
};
use image::RgbImage;
use std::path::Path;
use tracing::debug;

/// A staged pipeline for platform detection
pub struct Pipeline {
    mask_builder: Box<dyn MaskBuilder>,
    labeler: Box<dyn ComponentLabeler>,
    filters: Vec<Box<dyn PlatformFilter>>,
}

impl Pipeline {
    /// Create a new pipeline builder
    pub fn builder() -> builder::PipelineBuilder {
        builder::PipelineBuilder::new()
    }

    /// Create a new pipeline with the given components
    pub fn new(
        mask_builder: Box<dyn MaskBuilder>,
        labeler: Box<dyn ComponentLabeler>,
        filters: Vec<Box<dyn PlatformFilter>>,
    ) -> Self {
        Self {
            mask_builder,
            labeler,
            filters,
        }
    }

    /// Process an image through the entire pipeline
    pub fn process(&self, image: &RgbImage) -> Result<DetectedPlatforms> {
        // Step 1: Threshold into a binary foreground mask
        let mask = self.mask_builder.build_mask(image)?;
        debug!(foreground_pixels = mask.len(), "built foreground mask");

        // Step 2: Group foreground pixels into connected components
        let components = self.labeler.label_components(&mask)?;
        debug!(components = components.len(), "labeled components");

        // Step 3: Reduce each component to its bounding rectangle
        let mut platforms: Vec<_> = components.iter().map(|c| c.bounding_box()).collect();

        // Step 4: Apply all platform filters in sequence
        for filter in &self.filters {
            filter.retain(&mut platforms)?;
        }

        // Step 5: Deterministic ordering, top-to-bottom then left-to-right
        platforms.sort_by_key(|r| (r.y, r.x));

        Ok(DetectedPlatforms {
            platforms,
            image_width: image.width(),
            image_height: image.height(),
        })
    }

    /// Decode an image from disk and process it.
    ///
    /// Decode failures surface as [`PlatformError::ImageLoad`]; callers at
    /// the tool boundary are expected to downgrade that to an empty result
    /// rather than crash.
    ///
    /// [`PlatformError::ImageLoad`]: crate::error::PlatformError::ImageLoad
    pub fn process_path<P: AsRef<Path>>(&self, path: P) -> Result<DetectedPlatforms> {
        let image = image::open(path)?.to_rgb8();
        self.process(&image)
    }

    /// Get information about the pipeline configuration
    pub fn info(&self) -> String {
        format!(
            "Pipeline: 1 mask builder, 1 labeler, {} filters",
            self.filters.len()
        )
    }
}
