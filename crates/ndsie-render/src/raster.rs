use epaint::{Color32, ColorImage};
use itertools::iproduct;
use ndsie_rom::graphics::{
    color::Rgba32,
    icon::{RomIcon, ICON_SIDE},
};
use thiserror::Error;

pub const MIN_SCALE: u32 = 1;
pub const MAX_SCALE: u32 = 10;

// -------------------------------------------------------------------------------------------------

#[derive(Copy, Clone, Debug, Error)]
pub enum RasterError {
    #[error("Unsupported scale factor {0}, expected {MIN_SCALE}..={MAX_SCALE}")]
    InvalidScale(u32),
}

// -------------------------------------------------------------------------------------------------

/// An icon expanded to screen pixels: `32*scale` on each side, opaque RGBA.
#[derive(Clone)]
pub struct IconRaster {
    width:  usize,
    height: usize,
    pixels: Vec<Rgba32>,
}

// -------------------------------------------------------------------------------------------------

/// Block-replicates the icon through its palette. Every grid cell becomes a `scale`-sided square
/// of one flat color, keeping the bitmap's native blockiness; no interpolation. Cells with palette
/// index 0 are transparent on a real console's menu and render here as opaque white, whatever
/// color the palette stores in entry 0.
pub fn rasterize(icon: &RomIcon, scale: u32) -> Result<IconRaster, RasterError> {
    if !(MIN_SCALE..=MAX_SCALE).contains(&scale) {
        return Err(RasterError::InvalidScale(scale));
    }

    let scale = scale as usize;
    let side = ICON_SIDE * scale;
    let palette = icon.palette.resolve();

    let mut pixels = vec![Rgba32::WHITE; side * side];
    for (y, x) in iproduct!(0..ICON_SIDE, 0..ICON_SIDE) {
        let color_index = icon.bitmap.index_at(x, y);
        if color_index == 0 {
            continue;
        }
        let color = palette[color_index as usize];
        for (dy, dx) in iproduct!(0..scale, 0..scale) {
            pixels[(y * scale + dy) * side + (x * scale + dx)] = color;
        }
    }

    log::debug!("Rasterized icon at scale {scale} ({side}x{side})");
    Ok(IconRaster { width: side, height: side, pixels })
}

// -------------------------------------------------------------------------------------------------

impl IconRaster {
    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn pixels(&self) -> &[Rgba32] {
        &self.pixels
    }

    pub fn to_color_image(&self) -> ColorImage {
        let pixels = self
            .pixels
            .iter()
            .map(|c| Color32::from_rgba_unmultiplied(c.r, c.g, c.b, c.a))
            .collect();
        ColorImage { size: [self.width, self.height], pixels }
    }
}

// -------------------------------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use ndsie_rom::{graphics::icon::RomIcon, Rom, RomHeader};

    use super::*;

    fn icon_from_banner(banner: &[u8]) -> RomIcon {
        let mut data = vec![0u8; 0x200 + 0x240];
        data[0x68..0x6C].copy_from_slice(&0x200u32.to_le_bytes());
        data[0x200..0x200 + banner.len()].copy_from_slice(banner);
        let rom = Rom::new(data).unwrap();
        let header = RomHeader::parse(&rom).unwrap();
        RomIcon::parse(&rom, &header).unwrap()
    }

    fn blank_icon() -> RomIcon {
        icon_from_banner(&[0u8; 0x240])
    }

    #[test]
    fn output_dimensions_match_scale() {
        let icon = blank_icon();
        for scale in MIN_SCALE..=MAX_SCALE {
            let raster = rasterize(&icon, scale).unwrap();
            assert_eq!(raster.width(), 32 * scale as usize);
            assert_eq!(raster.height(), 32 * scale as usize);
            assert_eq!(raster.pixels().len(), raster.width() * raster.height());
        }
    }

    #[test]
    fn out_of_range_scales_are_rejected() {
        let icon = blank_icon();
        assert!(matches!(rasterize(&icon, 0), Err(RasterError::InvalidScale(0))));
        assert!(matches!(rasterize(&icon, 11), Err(RasterError::InvalidScale(11))));
    }

    #[test]
    fn index_zero_renders_white_regardless_of_palette() {
        let mut banner = vec![0u8; 0x240];
        // Entry 0 holds pure red; it must not show through.
        banner[0x220] = 0x1F;
        let raster = rasterize(&icon_from_banner(&banner), 1).unwrap();
        assert!(raster.pixels().iter().all(|&p| p == Rgba32::WHITE));
    }

    #[test]
    fn blocks_replicate_without_interpolation() {
        let mut banner = vec![0u8; 0x240];
        banner[0x20] = 0x01;
        banner[0x222] = 0x1F;
        let raster = rasterize(&icon_from_banner(&banner), 3).unwrap();

        let red = Rgba32::opaque(0xFF, 0x00, 0x00);
        let side = raster.width();
        for (dy, dx) in iproduct!(0..3, 0..3) {
            assert_eq!(raster.pixels()[dy * side + dx], red);
        }
        assert_eq!(raster.pixels()[3], Rgba32::WHITE);
        assert_eq!(raster.pixels()[3 * side], Rgba32::WHITE);
    }

    #[test]
    fn rasterization_is_deterministic() {
        let mut banner = vec![0u8; 0x240];
        banner[0x20..0x220].fill(0x57);
        banner[0x220..0x240].fill(0xA5);
        let icon = icon_from_banner(&banner);
        let first = rasterize(&icon, 4).unwrap();
        let second = rasterize(&icon, 4).unwrap();
        assert_eq!(first.pixels(), second.pixels());
    }

    #[test]
    fn color_image_preserves_pixels() {
        let mut banner = vec![0u8; 0x240];
        banner[0x20] = 0x01;
        banner[0x222] = 0x1F;
        let raster = rasterize(&icon_from_banner(&banner), 1).unwrap();
        let image = raster.to_color_image();
        assert_eq!(image.size, [32, 32]);
        assert_eq!(image.pixels[0], Color32::from_rgb(0xFF, 0x00, 0x00));
        assert_eq!(image.pixels[1], Color32::WHITE);
    }
}
