use std::{env, fs, path::Path};

use eframe::{CreationContext, Frame};
use egui::{Button, CentralPanel, ComboBox, Context, DroppedFile, Image, RichText, ScrollArea, TextureHandle, TextureOptions, Ui, Visuals};
use egui_extras::{Column, TableBuilder};
use ndsie_render::{rasterize, IconRaster, MAX_SCALE, MIN_SCALE};
use ndsie_rom::{NdsRom, Rom};
use rfd::FileDialog;

use crate::{export, style};

// -------------------------------------------------------------------------------------------------

/// All caller-held state of the extraction pipeline: the current ROM and its file name, the
/// selected scale, and the outputs of the last successful run. Any input change re-runs the whole
/// pipeline; a failed run leaves the previous outputs on screen and reports the error below them.
pub struct ExtractorApp {
    rom:      Option<Rom>,
    rom_name: String,
    scale:    u32,

    decoded:  Option<NdsRom>,
    raster:   Option<IconRaster>,
    texture:  Option<TextureHandle>,
    err_text: String,
}

// -------------------------------------------------------------------------------------------------

impl ExtractorApp {
    pub fn new(cc: &CreationContext) -> Self {
        cc.egui_ctx.set_visuals(Visuals::dark());

        let mut myself = ExtractorApp {
            rom:      None,
            rom_name: String::new(),
            scale:    MAX_SCALE,
            decoded:  None,
            raster:   None,
            texture:  None,
            err_text: String::new(),
        };
        if let Ok(rom_path) = env::var("ROM_PATH") {
            log::info!("Opening ROM from path defined in ROM_PATH");
            myself.load_rom_file(&cc.egui_ctx, Path::new(&rom_path));
        }
        myself
    }
}

impl eframe::App for ExtractorApp {
    fn update(&mut self, ctx: &Context, _frame: &mut Frame) {
        let dropped_files = ctx.input(|i| i.raw.dropped_files.clone());
        if let Some(file) = dropped_files.first() {
            self.load_dropped_file(ctx, file);
        }

        CentralPanel::default().show(ctx, |ui| {
            ScrollArea::vertical().show(ui, |ui| self.central_panel(ui));
        });
    }
}

// -------------------------------------------------------------------------------------------------

impl ExtractorApp {
    fn central_panel(&mut self, ui: &mut Ui) {
        ui.heading("Extract icons from Nintendo DS ROMs");
        ui.add_space(4.0);

        self.file_intake(ui);
        ui.separator();
        self.scale_selector(ui);

        if let Some(texture) = &self.texture {
            ui.add(Image::new(texture).fit_to_exact_size(texture.size_vec2()));
        }
        if let Some(decoded) = &self.decoded {
            info_table(ui, &self.rom_name, decoded);
        }

        ui.add_space(4.0);
        if ui.add_enabled(self.raster.is_some(), Button::new("Save icon...")).clicked() {
            self.save_icon();
        }
        if !self.err_text.is_empty() {
            ui.colored_label(style::TEXT_ERROR, &self.err_text);
        }
    }

    fn file_intake(&mut self, ui: &mut Ui) {
        ui.horizontal(|ui| {
            ui.label("Drag and drop a .nds ROM anywhere in this window, or");
            if ui.small_button("Browse...").clicked() {
                log::info!("Opened File Selector");
                match FileDialog::new().add_filter("NDS ROM (*.nds)", &["nds"]).pick_file() {
                    Some(path) => self.load_rom_file(ui.ctx(), &path),
                    None => log::info!("Cancelled File Selector"),
                }
            }
        });
        if ui.ctx().input(|i| !i.raw.hovered_files.is_empty()) {
            ui.label("Drop the file to extract its icon.");
        }
    }

    fn scale_selector(&mut self, ui: &mut Ui) {
        let mut scale = self.scale;
        ComboBox::from_label("Image size").selected_text(scale_label(scale)).show_ui(ui, |ui| {
            for option in MIN_SCALE..=MAX_SCALE {
                ui.selectable_value(&mut scale, option, scale_label(option));
            }
        });
        if scale != self.scale {
            self.scale = scale;
            log::info!("Changed image size to {}", scale_label(scale));
            self.refresh(ui.ctx());
        }
    }

    fn load_dropped_file(&mut self, ctx: &Context, file: &DroppedFile) {
        if let Some(path) = &file.path {
            self.load_rom_file(ctx, path);
        } else if let Some(bytes) = &file.bytes {
            self.load_rom(ctx, bytes.to_vec(), file.name.clone());
        }
    }

    fn load_rom_file(&mut self, ctx: &Context, path: &Path) {
        let name = path.file_name().map(|n| n.to_string_lossy().into_owned()).unwrap_or_default();
        match fs::read(path) {
            Ok(bytes) => self.load_rom(ctx, bytes, name),
            Err(err) => {
                log::error!("Could not read '{}': {err}", path.display());
                self.err_text = format!("Could not read '{}': {err}", path.display());
            }
        }
    }

    /// Runs the whole pipeline over a fresh byte buffer. The new ROM is committed only when every
    /// stage succeeds, so a bad file never clobbers an already extracted icon.
    fn load_rom(&mut self, ctx: &Context, bytes: Vec<u8>, name: String) {
        log::info!("Loading ROM '{name}' ({} bytes)", bytes.len());
        let extracted = Rom::new(bytes)
            .map_err(anyhow::Error::from)
            .and_then(|rom| self.run_pipeline(ctx, &rom).map(|outputs| (rom, outputs)));

        match extracted {
            Ok((rom, (decoded, raster, texture))) => {
                self.rom = Some(rom);
                self.rom_name = name;
                self.decoded = Some(decoded);
                self.raster = Some(raster);
                self.texture = Some(texture);
                self.err_text.clear();
            }
            Err(err) => {
                log::error!("Failed to extract an icon from '{name}': {err}");
                self.err_text = err.to_string();
            }
        }
    }

    /// Re-runs the pipeline over the current ROM, e.g. after a scale change.
    fn refresh(&mut self, ctx: &Context) {
        let Some(rom) = self.rom.clone() else { return };
        match self.run_pipeline(ctx, &rom) {
            Ok((decoded, raster, texture)) => {
                self.decoded = Some(decoded);
                self.raster = Some(raster);
                self.texture = Some(texture);
                self.err_text.clear();
            }
            Err(err) => {
                log::error!("Failed to re-render the icon: {err}");
                self.err_text = err.to_string();
            }
        }
    }

    fn run_pipeline(&self, ctx: &Context, rom: &Rom) -> anyhow::Result<(NdsRom, IconRaster, TextureHandle)> {
        let decoded = NdsRom::from_rom(rom)?;
        let raster = rasterize(&decoded.icon, self.scale)?;
        let texture = ctx.load_texture("rom-icon", raster.to_color_image(), TextureOptions::NEAREST);
        Ok((decoded, raster, texture))
    }

    fn save_icon(&mut self) {
        let Some(raster) = &self.raster else { return };
        match FileDialog::new()
            .add_filter("PNG image (*.png)", &["png"])
            .set_file_name(export::icon_file_name(&self.rom_name))
            .save_file()
        {
            Some(path) => match export::save_png(&path, raster) {
                Ok(()) => log::info!("Saved icon to '{}'", path.display()),
                Err(err) => {
                    log::error!("Cannot save icon: {err}");
                    self.err_text = format!("Cannot save icon: {err}");
                }
            },
            None => log::info!("Cancelled saving the icon"),
        }
    }
}

fn info_table(ui: &mut Ui, rom_name: &str, decoded: &NdsRom) {
    let banner_version = match decoded.icon.version() {
        Some(version) => version.to_string(),
        None => format!("{:#x} (unknown)", decoded.icon.raw_version),
    };
    let display_data = [
        (String::from("File name:"), String::from(rom_name)),
        (String::from("Icon/title offset:"), format!("{:#x}", decoded.header.icon_title_offset)),
        (String::from("Banner version:"), banner_version),
    ];

    TableBuilder::new(ui) //
        .striped(true)
        .columns(Column::exact(130.0), 2)
        .body(|body| {
            body.rows(15.0, display_data.len(), |mut row| {
                let (name, data) = &display_data[row.index()];
                row.col(|ui| {
                    ui.label(name);
                });
                row.col(|ui| {
                    ui.label(RichText::new(data).monospace());
                });
            });
        });
}

fn scale_label(scale: u32) -> String {
    if scale == MIN_SCALE {
        String::from("32x32 (Original)")
    } else {
        format!("{size}x{size}", size = 32 * scale)
    }
}
