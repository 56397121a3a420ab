use image::{Rgb, RgbImage};
use imageproc::drawing::{draw_filled_circle_mut, draw_filled_rect_mut};
use imageproc::rect::Rect;

// Mid-band tobacco brown (HSV 20, 150, 150 on the detector's scale).
const BROWN: Rgb<u8> = Rgb([150, 121, 62]);

fn main() {
    let mut img = RgbImage::new(600, 400);

    // Pale grey pavement background, outside the color band.
    for y in 0..400 {
        for x in 0..600 {
            img.put_pixel(x, y, Rgb([210, 210, 215]));
        }
    }

    // Three round ends and one elongated distractor.
    draw_filled_circle_mut(&mut img, (120, 110), 28, BROWN);
    draw_filled_circle_mut(&mut img, (320, 250), 24, BROWN);
    draw_filled_circle_mut(&mut img, (480, 120), 30, BROWN);
    draw_filled_rect_mut(&mut img, Rect::at(200, 330).of_size(160, 6), BROWN);

    img.save("scene.png").unwrap();
    println!("Created scene.png (600x400, 3 round shapes + 1 bar)");
}
