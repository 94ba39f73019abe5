use crate::{error::Result, traits::MaskBuilder, types::ForegroundMask};
use image::RgbImage;

/// Marks pixels whose red, green, and blue channels are all strictly below
/// the threshold. This is the builder used for level backgrounds, where
/// platforms are drawn as near-black rectangles.
#[derive(Debug, Clone)]
pub struct DarkPixelMaskBuilder {
    pub threshold: u8,
}

impl Default for DarkPixelMaskBuilder {
    fn default() -> Self {
        Self { threshold: 30 }
    }
}

impl MaskBuilder for DarkPixelMaskBuilder {
    fn build_mask(&self, image: &RgbImage) -> Result<ForegroundMask> {
        let mut mask = ForegroundMask::new(image.width(), image.height());
        for (x, y, pixel) in image.enumerate_pixels() {
            let [r, g, b] = pixel.0;
            if r < self.threshold && g < self.threshold && b < self.threshold {
                mask.set(x, y);
            }
        }
        Ok(mask)
    }
}

/// Luminance-based alternative: converts to grayscale and thresholds the
/// single channel with imageproc, treating dark pixels as foreground.
#[derive(Debug, Clone)]
pub struct LumaMaskBuilder {
    pub threshold: u8,
}

impl Default for LumaMaskBuilder {
    fn default() -> Self {
        Self { threshold: 30 }
    }
}

impl MaskBuilder for LumaMaskBuilder {
    fn build_mask(&self, image: &RgbImage) -> Result<ForegroundMask> {
        use imageproc::contrast::{threshold, ThresholdType};

        let gray = image::imageops::grayscale(image);
        // BinaryInverted maps pixels <= threshold to 255.
        let binary = threshold(&gray, self.threshold, ThresholdType::BinaryInverted);

        let mut mask = ForegroundMask::new(image.width(), image.height());
        for (x, y, pixel) in binary.enumerate_pixels() {
            if pixel.0[0] == 255 {
                mask.set(x, y);
            }
        }
        Ok(mask)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgb;

    #[test]
    fn dark_pixel_builder_requires_all_channels_below_threshold() {
        let mut img = RgbImage::from_pixel(4, 4, Rgb([255, 255, 255]));
        img.put_pixel(0, 0, Rgb([0, 0, 0]));
        img.put_pixel(1, 0, Rgb([29, 29, 29]));
        img.put_pixel(2, 0, Rgb([30, 29, 29])); // one channel at the threshold
        img.put_pixel(3, 0, Rgb([10, 10, 200])); // dark but blue

        let mask = DarkPixelMaskBuilder::default().build_mask(&img).unwrap();
        assert!(mask.contains(0, 0));
        assert!(mask.contains(1, 0));
        assert!(!mask.contains(2, 0));
        assert!(!mask.contains(3, 0));
        assert_eq!(mask.len(), 2);
    }

    #[test]
    fn white_image_yields_empty_mask() {
        let img = RgbImage::from_pixel(10, 10, Rgb([255, 255, 255]));
        let mask = DarkPixelMaskBuilder::default().build_mask(&img).unwrap();
        assert!(mask.is_empty());
    }
}
