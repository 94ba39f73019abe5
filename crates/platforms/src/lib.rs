//! # Platform Detection Library
//!
//! Scans a game background image for solid dark rectangular regions and
//! reduces them to platform rectangles for a 2D level. Built around a
//! trait-based, composable pipeline: threshold into a binary mask, group
//! foreground pixels into 4-connected components with a breadth-first flood
//! fill, reduce each component to its bounding box, then filter and sort.
//!
//! ## Core Features
//!
//! - **Trait-based Architecture**: swap mask builders, labelers, and filters
//!   by implementing small traits
//! - **Pipeline System**: compose the stages with a fluent builder
//! - **Two-stage Filtering**: a pixel-count cutoff on components plus an
//!   independent minimum-dimension filter on bounding boxes
//! - **Code Generation**: export results as a JavaScript array literal or
//!   JSON for downstream game code
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use platforms::pipeline::builder::PipelineBuilder;
//!
//! // Threshold 30, components over 50 pixels, platforms at least 15x8.
//! let pipeline = PipelineBuilder::build_default();
//!
//! let detected = pipeline.process_path("images/background.png")?;
//! for platform in &detected.platforms {
//!     println!("{}x{} at ({}, {})", platform.width, platform.height, platform.x, platform.y);
//! }
//! detected.save_javascript("detected_platforms.js")?;
//! # Ok::<(), platforms::PlatformError>(())
//! ```
//!
//! ## Custom Pipeline
//!
//! ```rust,no_run
//! use platforms::{Pipeline, algorithms::*};
//!
//! let pipeline = Pipeline::builder()
//!     .mask_builder(DarkPixelMaskBuilder { threshold: 40 })
//!     .labeler(FloodFillLabeler { min_pixels: 100 })
//!     .min_platform_size(20, 10)
//!     .build();
//! ```

// Core modules
pub mod algorithms;
pub mod error;
pub mod io;
pub mod pipeline;
pub mod traits;
pub mod types;

// Re-exports for convenience
pub use algorithms::*;
pub use error::{PlatformError, Result};
pub use pipeline::{builder::PipelineBuilder, Pipeline};
pub use traits::*;
pub use types::{Component, DetectedPlatforms, ForegroundMask, Point, Rect};

/// The stock detector configuration: dark-pixel threshold plus flood fill
pub type DefaultDetector = StandardPlatformDetector<DarkPixelMaskBuilder, FloodFillLabeler>;

impl Default for DefaultDetector {
    fn default() -> Self {
        Self::new(DarkPixelMaskBuilder::default(), FloodFillLabeler::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgb, RgbImage};
    use imageproc::drawing::draw_filled_rect_mut;
    use imageproc::rect::Rect as DrawRect;

    const BLACK: Rgb<u8> = Rgb([0, 0, 0]);
    const WHITE: Rgb<u8> = Rgb([255, 255, 255]);

    fn blank(width: u32, height: u32) -> RgbImage {
        RgbImage::from_pixel(width, height, WHITE)
    }

    fn draw_rect(img: &mut RgbImage, x: i32, y: i32, w: u32, h: u32) {
        draw_filled_rect_mut(img, DrawRect::at(x, y).of_size(w, h), BLACK);
    }

    #[test]
    fn all_white_image_finds_no_platforms() {
        let image = blank(100, 100);
        let detected = PipelineBuilder::build_default().process(&image).unwrap();
        assert!(detected.is_empty());
        assert_eq!(detected.image_width, 100);
        assert_eq!(detected.image_height, 100);
    }

    #[test]
    fn single_black_rect_is_detected_exactly() {
        let mut image = blank(100, 100);
        draw_rect(&mut image, 10, 10, 20, 10);

        let detected = PipelineBuilder::build_default().process(&image).unwrap();
        assert_eq!(
            detected.platforms,
            vec![Rect { x: 10, y: 10, width: 20, height: 10 }]
        );
    }

    #[test]
    fn small_speck_is_filtered_out() {
        let mut image = blank(100, 100);
        draw_rect(&mut image, 0, 0, 30, 10);
        draw_rect(&mut image, 50, 50, 5, 5); // 25 px, below the component cutoff

        let detected = PipelineBuilder::build_default().process(&image).unwrap();
        assert_eq!(
            detected.platforms,
            vec![Rect { x: 0, y: 0, width: 30, height: 10 }]
        );
    }

    #[test]
    fn thin_line_fails_dimension_filter_despite_pixel_count() {
        let mut image = blank(100, 100);
        draw_rect(&mut image, 10, 10, 16, 8); // 128 px, passes both filters
        draw_rect(&mut image, 20, 60, 60, 1); // 60 px, passes pixel count only

        let detected = PipelineBuilder::build_default().process(&image).unwrap();
        assert_eq!(
            detected.platforms,
            vec![Rect { x: 10, y: 10, width: 16, height: 8 }]
        );
    }

    #[test]
    fn platforms_are_sorted_by_y_then_x() {
        let mut image = blank(200, 200);
        draw_rect(&mut image, 120, 150, 30, 10);
        draw_rect(&mut image, 10, 150, 30, 10);
        draw_rect(&mut image, 60, 20, 30, 10);

        let detected = PipelineBuilder::build_default().process(&image).unwrap();
        let positions: Vec<(u32, u32)> =
            detected.platforms.iter().map(|r| (r.y, r.x)).collect();
        assert_eq!(positions, vec![(20, 60), (150, 10), (150, 120)]);

        for pair in detected.platforms.windows(2) {
            assert!(pair[0].y < pair[1].y || (pair[0].y == pair[1].y && pair[0].x <= pair[1].x));
        }
    }

    #[test]
    fn near_black_pixels_count_as_platform() {
        let mut image = blank(100, 100);
        draw_filled_rect_mut(
            &mut image,
            DrawRect::at(40, 40).of_size(20, 10),
            Rgb([29, 29, 29]),
        );

        let detected = PipelineBuilder::build_default().process(&image).unwrap();
        assert_eq!(
            detected.platforms,
            vec![Rect { x: 40, y: 40, width: 20, height: 10 }]
        );
    }

    #[test]
    fn touching_rects_merge_into_one_platform() {
        let mut image = blank(100, 100);
        draw_rect(&mut image, 10, 10, 20, 10);
        draw_rect(&mut image, 30, 10, 20, 10); // shares an edge with the first

        let detected = PipelineBuilder::build_default().process(&image).unwrap();
        assert_eq!(
            detected.platforms,
            vec![Rect { x: 10, y: 10, width: 40, height: 10 }]
        );
    }

    #[test]
    fn custom_detector_composition() {
        let detector = StandardPlatformDetector::new(
            DarkPixelMaskBuilder { threshold: 100 },
            FloodFillLabeler { min_pixels: 10 },
        );

        let mut image = blank(64, 64);
        draw_filled_rect_mut(
            &mut image,
            DrawRect::at(5, 5).of_size(10, 10),
            Rgb([80, 80, 80]),
        );

        let platforms = detector.detect_platforms(&image).unwrap();
        assert_eq!(platforms, vec![Rect { x: 5, y: 5, width: 10, height: 10 }]);
    }

    #[test]
    fn missing_file_surfaces_image_load_error() {
        let pipeline = PipelineBuilder::build_default();
        let err = pipeline.process_path("does/not/exist.png").unwrap_err();
        assert!(matches!(err, PlatformError::ImageLoad(_)));
    }
}
