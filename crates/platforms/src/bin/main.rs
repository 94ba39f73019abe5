use image::{Rgb, RgbImage};
use imageproc::drawing::draw_filled_rect_mut;
use imageproc::rect::Rect as DrawRect;
use platforms::{algorithms::*, Pipeline, PipelineBuilder};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("🎮 Platform Detection Demo");
    println!("==========================");

    let level_image = create_level_test_image();
    let noisy_image = create_noisy_test_image();

    demo_default_pipeline(&level_image)?;
    demo_custom_pipeline(&noisy_image)?;

    println!("✅ All demos completed successfully!");
    println!("📁 Generated files: demo_platforms.js, demo_platforms.json");

    Ok(())
}

fn demo_default_pipeline(image: &RgbImage) -> Result<(), Box<dyn std::error::Error>> {
    println!("\n🔎 Demo 1: Default Detection Pipeline");
    println!("-------------------------------------");

    let pipeline = PipelineBuilder::build_default();
    let detected = pipeline.process(image)?;

    println!("   📐 Image: {} x {}", detected.image_width, detected.image_height);
    println!("   📊 Detected {} platforms:", detected.len());
    for (i, p) in detected.platforms.iter().enumerate() {
        println!(
            "   {:2}. x:{:4} y:{:3} w:{:3} h:{:2}",
            i + 1,
            p.x,
            p.y,
            p.width,
            p.height
        );
    }

    detected.save_javascript("demo_platforms.js")?;
    detected.save_json("demo_platforms.json")?;

    Ok(())
}

fn demo_custom_pipeline(image: &RgbImage) -> Result<(), Box<dyn std::error::Error>> {
    println!("\n🔬 Demo 2: Custom Pipeline vs Default");
    println!("-------------------------------------");

    let default_result = PipelineBuilder::build_default().process(image)?;
    println!("   🔹 Default thresholds: {} platforms", default_result.len());

    // A stricter pipeline: brighter grays count as platforms, but small
    // components and narrow boxes are culled more aggressively.
    let strict = Pipeline::builder()
        .mask_builder(DarkPixelMaskBuilder { threshold: 60 })
        .labeler(FloodFillLabeler { min_pixels: 150 })
        .min_platform_size(25, 10)
        .build();

    let strict_result = strict.process(image)?;
    println!("   🔸 Strict thresholds:  {} platforms", strict_result.len());
    println!("   📈 {}", strict.info());

    Ok(())
}

/// A plausible level layout: a ground strip plus a few floating platforms.
fn create_level_test_image() -> RgbImage {
    let mut img = RgbImage::from_pixel(400, 300, Rgb([255, 255, 255]));
    let black = Rgb([0, 0, 0]);

    draw_filled_rect_mut(&mut img, DrawRect::at(0, 280).of_size(400, 20), black);
    draw_filled_rect_mut(&mut img, DrawRect::at(40, 220).of_size(80, 12), black);
    draw_filled_rect_mut(&mut img, DrawRect::at(170, 170).of_size(60, 10), black);
    draw_filled_rect_mut(&mut img, DrawRect::at(290, 120).of_size(70, 10), black);

    img
}

/// Platforms plus noise: specks below the pixel cutoff, a thin line that
/// fails the dimension filter, and a gray platform above the default
/// intensity threshold.
fn create_noisy_test_image() -> RgbImage {
    let mut img = RgbImage::from_pixel(400, 300, Rgb([255, 255, 255]));
    let black = Rgb([0, 0, 0]);

    draw_filled_rect_mut(&mut img, DrawRect::at(20, 40).of_size(120, 16), black);
    draw_filled_rect_mut(&mut img, DrawRect::at(200, 100).of_size(40, 12), black);

    // Gray platform: visible to threshold 60 but not to the default 30.
    draw_filled_rect_mut(
        &mut img,
        DrawRect::at(60, 200).of_size(90, 14),
        Rgb([45, 45, 45]),
    );

    // Thin line and specks.
    draw_filled_rect_mut(&mut img, DrawRect::at(100, 260).of_size(80, 1), black);
    for i in 0..6 {
        let x = 300 + (i % 3) * 12;
        let y = 200 + (i / 3) * 15;
        draw_filled_rect_mut(&mut img, DrawRect::at(x, y).of_size(3, 3), black);
    }

    img
}
