//! RGB <-> YUV conversion with truncating integer arithmetic

use num_traits::clamp;
use vq_core::{Channel, RgbImage, VqResult, YuvPlanes};

/// Convert one RGB pixel to (Y, U, V), truncating each result toward zero
#[inline]
pub fn rgb_to_yuv_pixel(r: u8, g: u8, b: u8) -> (i32, i32, i32) {
    let (r, g, b) = (r as f64, g as f64, b as f64);
    let y = 0.299 * r + 0.587 * g + 0.114 * b;
    let u = -0.14713 * r - 0.28886 * g + 0.436 * b;
    let v = 0.615 * r - 0.51499 * g - 0.10001 * b;
    (y as i32, u as i32, v as i32)
}

/// Convert one (Y, U, V) triple back to RGB
///
/// Every product term is truncated on its own before it is added to luma, and
/// the sums are clamped to [0, 255]. Sums wrap on `i32` overflow, so extreme
/// chroma from an out-of-range codebook never panics.
#[inline]
pub fn yuv_to_rgb_pixel(y: i32, u: i32, v: i32) -> [u8; 3] {
    let (uf, vf) = (u as f64, v as f64);
    let r = y.wrapping_add((1.13983 * vf) as i32);
    let g = y
        .wrapping_sub((0.39465 * uf) as i32)
        .wrapping_sub((0.58060 * vf) as i32);
    let b = y.wrapping_add((2.03211 * uf) as i32);
    [
        clamp(r, 0, 255) as u8,
        clamp(g, 0, 255) as u8,
        clamp(b, 0, 255) as u8,
    ]
}

/// Convert an RGB image to full-resolution Y, U and V planes
pub fn rgb_to_yuv(image: &RgbImage) -> YuvPlanes {
    let (width, height) = (image.width(), image.height());
    let mut y_plane = Channel::new(width, height);
    let mut u_plane = Channel::new(width, height);
    let mut v_plane = Channel::new(width, height);

    for py in 0..height {
        for px in 0..width {
            let [r, g, b] = image.pixel(px, py);
            let (y, u, v) = rgb_to_yuv_pixel(r, g, b);
            y_plane.set(px, py, y);
            u_plane.set(px, py, u);
            v_plane.set(px, py, v);
        }
    }

    YuvPlanes {
        y: y_plane,
        u: u_plane,
        v: v_plane,
    }
}

/// Convert equal-sized Y, U and V planes back to an RGB image
pub fn yuv_to_rgb(y: &Channel, u: &Channel, v: &Channel) -> VqResult<RgbImage> {
    y.ensure_same_dimensions(u)?;
    y.ensure_same_dimensions(v)?;
    RgbImage::from_fn(y.width(), y.height(), |px, py| {
        yuv_to_rgb_pixel(y.get(px, py), u.get(px, py), v.get(px, py))
    })
}

/// Convert grouped planes back to an RGB image
pub fn yuv_planes_to_rgb(planes: &YuvPlanes) -> VqResult<RgbImage> {
    yuv_to_rgb(&planes.y, &planes.u, &planes.v)
}
