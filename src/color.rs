use crate::common::*;
use std::io::{self, Write};

pub type Color = Vec3;

#[inline]
pub fn linear_to_gamma(linear_component: f64) -> f64 {
    if linear_component > 0.0 {
        linear_component.sqrt()
    } else {
        0.0
    }
}

/// Quantizes a display-space color to 8 bits per channel. Channels are
/// clamped to [0, 0.999] first so that 256 is never produced.
pub fn to_bytes(pixel_color: Color) -> [u8; 3] {
    let intensity = Interval::new(0.000, 0.999);
    [
        (256.0 * intensity.clamp(pixel_color.x)) as u8,
        (256.0 * intensity.clamp(pixel_color.y)) as u8,
        (256.0 * intensity.clamp(pixel_color.z)) as u8,
    ]
}

pub fn write_color<W: Write>(out: &mut W, pixel_color: Color) -> io::Result<()> {
    let [r, g, b] = to_bytes(pixel_color);
    writeln!(out, "{} {} {}", r, g, b)
}

/// Serializes a rendered image as plain-text PPM (`P3`).
pub fn write_ppm<W: Write>(out: &mut W, image: &Image) -> Result<()> {
    writeln!(out, "P3")?;
    writeln!(out, "{} {}", image.width, image.height)?;
    writeln!(out, "255")?;
    for pixel in &image.pixels {
        write_color(out, *pixel)?;
    }
    out.flush()?;
    Ok(())
}
