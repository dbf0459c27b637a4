use std::path::Path;

use anyhow::Context;
use ndsie_render::IconRaster;

/// File stems Windows refuses regardless of extension.
#[rustfmt::skip]
const RESERVED_STEMS: &[&str] = &[
    "CON", "PRN", "AUX", "NUL",
    "COM1", "COM2", "COM3", "COM4", "COM5", "COM6", "COM7", "COM8", "COM9",
    "LPT1", "LPT2", "LPT3", "LPT4", "LPT5", "LPT6", "LPT7", "LPT8", "LPT9",
];

// -------------------------------------------------------------------------------------------------

pub fn save_png(path: &Path, raster: &IconRaster) -> anyhow::Result<()> {
    let mut bytes = Vec::with_capacity(raster.pixels().len() * 4);
    for pixel in raster.pixels() {
        bytes.extend_from_slice(&[pixel.r, pixel.g, pixel.b, pixel.a]);
    }
    lodepng::encode32_file(path, &bytes, raster.width(), raster.height())
        .with_context(|| format!("Encoding a {}x{} PNG", raster.width(), raster.height()))?;
    Ok(())
}

/// Builds the export name for a ROM's icon: the ROM file name without its extension, made safe for
/// the local filesystem, with `.png` appended.
pub fn icon_file_name(rom_name: &str) -> String {
    let stem = match rom_name.rfind('.') {
        Some(0) | None => rom_name,
        Some(dot) => &rom_name[..dot],
    };
    format!("{}.png", sanitize_file_stem(stem))
}

fn sanitize_file_stem(stem: &str) -> String {
    let mut clean: String = stem
        .chars()
        .filter(|c| !c.is_control() && !matches!(c, '/' | '\\' | ':' | '*' | '?' | '"' | '<' | '>' | '|'))
        .collect();
    while clean.ends_with(|c| c == ' ' || c == '.') {
        clean.pop();
    }
    if RESERVED_STEMS.iter().any(|reserved| clean.eq_ignore_ascii_case(reserved)) {
        clean.insert(0, '_');
    }
    if clean.is_empty() {
        clean = String::from("icon");
    }
    clean
}

// -------------------------------------------------------------------------------------------------
