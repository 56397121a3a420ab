use std::io::Write;

use cigcount::store::{DetectionDb, NewDetection};
use image::{DynamicImage, ImageBuffer, Rgb, RgbImage};
use imageproc::drawing::{draw_filled_circle_mut, draw_filled_rect_mut};
use imageproc::rect::Rect;
use tempfile::NamedTempFile;

/// Mid-band brown: renders to HSV (20, 150, 150) on the detector's scale.
pub const BAND_BROWN: Rgb<u8> = Rgb([150, 121, 62]);
/// Backgrounds with no pixel inside the target band.
pub const WHITE: Rgb<u8> = Rgb([255, 255, 255]);
pub const BLUE: Rgb<u8> = Rgb([40, 60, 200]);

/// Single-color canvas.
pub fn solid_canvas(width: u32, height: u32, color: Rgb<u8>) -> DynamicImage {
    DynamicImage::ImageRgb8(ImageBuffer::from_fn(width, height, |_, _| color))
}

/// White canvas with filled circles of the given color at each center.
pub fn circles_scene(
    width: u32,
    height: u32,
    centers: &[(i32, i32)],
    radius: i32,
    color: Rgb<u8>,
) -> DynamicImage {
    let mut img: RgbImage = ImageBuffer::from_fn(width, height, |_, _| WHITE);
    for &center in centers {
        draw_filled_circle_mut(&mut img, center, radius, color);
    }
    DynamicImage::ImageRgb8(img)
}

/// White canvas with one thin brown bar.
pub fn bar_scene(width: u32, height: u32, bar: Rect) -> DynamicImage {
    let mut img: RgbImage = ImageBuffer::from_fn(width, height, |_, _| WHITE);
    draw_filled_rect_mut(&mut img, bar, BAND_BROWN);
    DynamicImage::ImageRgb8(img)
}

/// White canvas with one brown circle and one thin brown bar, well apart.
pub fn circle_and_bar_scene() -> DynamicImage {
    let mut img: RgbImage = ImageBuffer::from_fn(600, 400, |_, _| WHITE);
    draw_filled_circle_mut(&mut img, (150, 200), 30, BAND_BROWN);
    draw_filled_rect_mut(&mut img, Rect::at(450, 100).of_size(5, 200), BAND_BROWN);
    DynamicImage::ImageRgb8(img)
}

/// Brown disc with a white hole punched through it, and a smaller brown
/// island sitting inside the hole.
pub fn nested_scene() -> DynamicImage {
    let mut img: RgbImage = ImageBuffer::from_fn(600, 400, |_, _| WHITE);
    draw_filled_circle_mut(&mut img, (300, 200), 40, BAND_BROWN);
    draw_filled_circle_mut(&mut img, (300, 200), 15, WHITE);
    draw_filled_circle_mut(&mut img, (300, 200), 5, BAND_BROWN);
    DynamicImage::ImageRgb8(img)
}

/// Save a scene to a temp PNG file.
/// The file will be automatically cleaned up when dropped.
pub fn save_png(img: &DynamicImage) -> NamedTempFile {
    let file = tempfile::Builder::new()
        .suffix(".png")
        .tempfile()
        .expect("Failed to create temp image file");
    img.save_with_format(file.path(), image::ImageFormat::Png)
        .expect("Failed to save test image");
    file
}

/// A readable file whose bytes are not an image.
pub fn text_file() -> NamedTempFile {
    let mut file = tempfile::Builder::new()
        .suffix(".txt")
        .tempfile()
        .expect("Failed to create temp text file");
    writeln!(file, "definitely not an image").expect("Failed to write temp text file");
    file
}

/// An empty file with an image extension.
pub fn empty_png() -> NamedTempFile {
    tempfile::Builder::new()
        .suffix(".png")
        .tempfile()
        .expect("Failed to create temp image file")
}

/// Opens a DetectionDb in a scratch directory.
/// Returns both the handle and the temp directory (which must be kept alive).
pub async fn create_test_db() -> (DetectionDb, tempfile::TempDir) {
    let dir = tempfile::TempDir::new().expect("Failed to create temp directory");
    let db = DetectionDb::open(dir.path())
        .await
        .expect("Failed to open test store");
    (db, dir)
}

/// Creates a NewDetection with test data.
pub fn make_new_detection(count: u32, filename: &str, stored_name: &str) -> NewDetection {
    NewDetection {
        count,
        filename: filename.to_string(),
        stored_name: stored_name.to_string(),
    }
}
