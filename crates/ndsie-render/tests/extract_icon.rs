//! End-to-end decode-and-render runs over hand-built ROM images.

use ndsie_render::{rasterize, MAX_SCALE, MIN_SCALE};
use ndsie_rom::{
    error::{HeaderParseError, IconParseError},
    graphics::color::Rgba32,
    NdsRom, Rom,
};

/// A 1024-byte ROM whose icon/title offset points at 0: the banner overlaps the header, the
/// bitmap and palette regions read as all zeroes.
fn zeroed_rom() -> Rom {
    Rom::new(vec![0u8; 0x400]).unwrap()
}

fn rom_with_banner(banner: &[u8]) -> Rom {
    let mut data = vec![0u8; 0x200 + 0x240];
    data[0x68..0x6C].copy_from_slice(&0x200u32.to_le_bytes());
    data[0x200..0x200 + banner.len()].copy_from_slice(banner);
    Rom::new(data).unwrap()
}

#[test]
fn zeroed_rom_renders_all_white_at_every_scale() {
    let decoded = NdsRom::from_rom(&zeroed_rom()).unwrap();
    assert_eq!(decoded.header.icon_title_offset, 0);

    for scale in MIN_SCALE..=MAX_SCALE {
        let raster = rasterize(&decoded.icon, scale).unwrap();
        assert_eq!(raster.width(), 32 * scale as usize);
        assert!(raster.pixels().iter().all(|&p| p == Rgba32::WHITE));
    }
}

#[test]
fn first_bitmap_byte_drives_the_top_left_pixels() {
    let mut banner = vec![0u8; 0x240];
    banner[0x20] = 0x21;
    // Palette entry 1 = pure red, entry 2 = pure green.
    banner[0x222..0x224].copy_from_slice(&0x001Fu16.to_le_bytes());
    banner[0x224..0x226].copy_from_slice(&0x03E0u16.to_le_bytes());

    let decoded = NdsRom::from_rom(&rom_with_banner(&banner)).unwrap();
    assert_eq!(decoded.icon.bitmap.index_at(0, 0), 1);
    assert_eq!(decoded.icon.bitmap.index_at(1, 0), 2);

    let raster = rasterize(&decoded.icon, 1).unwrap();
    assert_eq!(raster.pixels()[0], Rgba32::opaque(0xFF, 0x00, 0x00));
    assert_eq!(raster.pixels()[1], Rgba32::opaque(0x00, 0xFF, 0x00));
    assert_eq!(raster.pixels()[2], Rgba32::WHITE);
}

#[test]
fn repeated_decodes_are_byte_identical() {
    let mut banner = vec![0u8; 0x240];
    for (i, byte) in banner.iter_mut().enumerate() {
        *byte = (i * 7) as u8;
    }
    let rom = rom_with_banner(&banner);

    let first = rasterize(&NdsRom::from_rom(&rom).unwrap().icon, 5).unwrap();
    let second = rasterize(&NdsRom::from_rom(&rom).unwrap().icon, 5).unwrap();
    assert_eq!(first.pixels(), second.pixels());
}

#[test]
fn short_buffer_reports_truncated_header() {
    let rom = Rom::new(vec![0u8; 0x6B]).unwrap();
    let err = NdsRom::from_rom(&rom).unwrap_err();
    assert!(matches!(
        err.downcast_ref::<HeaderParseError>(),
        Some(HeaderParseError::TruncatedHeader(0x6B))
    ));
}

#[test]
fn out_of_range_offset_reports_truncated_icon_data() {
    let mut data = vec![0u8; 0x400];
    data[0x68..0x6C].copy_from_slice(&0x300u32.to_le_bytes());
    let rom = Rom::new(data).unwrap();
    let err = NdsRom::from_rom(&rom).unwrap_err();
    assert!(matches!(
        err.downcast_ref::<IconParseError>(),
        Some(IconParseError::TruncatedIconData(0x300, 0x400))
    ));
}
