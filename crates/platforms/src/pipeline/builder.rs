use crate::{
    algorithms::{DarkPixelMaskBuilder, FloodFillLabeler, MinSizeFilter},
    pipeline::Pipeline,
    traits::{ComponentLabeler, MaskBuilder, PlatformFilter},
};

/// Builder for creating detection pipelines with a fluent API
pub struct PipelineBuilder {
    mask_builder: Option<Box<dyn MaskBuilder>>,
    labeler: Option<Box<dyn ComponentLabeler>>,
    filters: Vec<Box<dyn PlatformFilter>>,
}

impl PipelineBuilder {
    /// Create a new pipeline builder
    pub fn new() -> Self {
        Self {
            mask_builder: None,
            labeler: None,
            filters: Vec::new(),
        }
    }

    /// Set the mask builder (replaces any existing one)
    pub fn mask_builder<M>(mut self, mask_builder: M) -> Self
    where
        M: MaskBuilder + 'static,
    {
        self.mask_builder = Some(Box::new(mask_builder));
        self
    }

    /// Set the component labeler (replaces any existing one)
    pub fn labeler<L>(mut self, labeler: L) -> Self
    where
        L: ComponentLabeler + 'static,
    {
        self.labeler = Some(Box::new(labeler));
        self
    }

    /// Add a platform filter to the pipeline
    pub fn add_filter<F>(mut self, filter: F) -> Self
    where
        F: PlatformFilter + 'static,
    {
        self.filters.push(Box::new(filter));
        self
    }

    /// Add a minimum-dimension filter as a post-processing step
    pub fn min_platform_size(self, min_width: u32, min_height: u32) -> Self {
        self.add_filter(MinSizeFilter {
            min_width,
            min_height,
        })
    }

    /// Build the pipeline with default components if not specified.
    ///
    /// Note: no filters are added implicitly; use `build_default` for the
    /// standard 15x8 minimum-size filter.
    pub fn build(self) -> Pipeline {
        let mask_builder = self
            .mask_builder
            .unwrap_or_else(|| Box::new(DarkPixelMaskBuilder::default()));

        let labeler = self
            .labeler
            .unwrap_or_else(|| Box::new(FloodFillLabeler::default()));

        Pipeline::new(mask_builder, labeler, self.filters)
    }

    /// Build the standard pipeline: dark-pixel threshold 30, components over
    /// 50 pixels, platforms at least 15x8.
    pub fn build_default() -> Pipeline {
        Self::new()
            .add_filter(MinSizeFilter::default())
            .build()
    }

    /// Build the standard pipeline with a custom intensity threshold
    pub fn build_with_threshold(threshold: u8) -> Pipeline {
        Self::new()
            .mask_builder(DarkPixelMaskBuilder { threshold })
            .add_filter(MinSizeFilter::default())
            .build()
    }
}

impl Default for PipelineBuilder {
    fn default() -> Self {
        Self::new()
    }
}
