use image::{GrayImage, Luma, Rgb, RgbImage};

use crate::config::ChannelBand;

/// Convert one RGB pixel to hue/saturation/value on the detector's 8-bit
/// scale: hue 0-179 (degrees halved), saturation and value 0-255.
pub fn rgb_to_hsv(pixel: Rgb<u8>) -> (u8, u8, u8) {
    let Rgb([r, g, b]) = pixel;
    let v = r.max(g).max(b);
    let min = r.min(g).min(b);
    let chroma = f64::from(v - min);

    if chroma == 0.0 {
        // Grey pixel: hue is undefined and reported as 0.
        return (0, 0, v);
    }

    let s = (255.0 * chroma / f64::from(v)).round() as u8;

    let (rf, gf, bf) = (f64::from(r), f64::from(g), f64::from(b));
    let mut degrees = if v == r {
        60.0 * (gf - bf) / chroma
    } else if v == g {
        120.0 + 60.0 * (bf - rf) / chroma
    } else {
        240.0 + 60.0 * (rf - gf) / chroma
    };
    if degrees < 0.0 {
        degrees += 360.0;
    }

    let h = ((degrees / 2.0).round() as u16 % 180) as u8;
    (h, s, v)
}

/// Binary mask of pixels whose hue, saturation and value all fall inside
/// their bands. Foreground is 255, background 0.
pub fn hsv_mask(
    img: &RgbImage,
    hue: ChannelBand,
    saturation: ChannelBand,
    value: ChannelBand,
) -> GrayImage {
    GrayImage::from_fn(img.width(), img.height(), |x, y| {
        let (h, s, v) = rgb_to_hsv(*img.get_pixel(x, y));
        if hue.contains(h) && saturation.contains(s) && value.contains(v) {
            Luma([255u8])
        } else {
            Luma([0u8])
        }
    })
}
