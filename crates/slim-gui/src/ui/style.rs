//! Fonts and text styles.

use std::collections::BTreeMap;
use std::num::NonZeroUsize;
use std::sync::Arc;

use egui::{FontData, FontDefinitions, FontFamily, FontId, TextStyle};
use slim_settings::FontSettings;

const CUSTOM_FONT: &str = "shell-font";

/// Context options the shell's frames rely on
///
/// One pass per frame, so a menu click is applied once.
pub fn configure(ctx: &egui::Context) {
    ctx.options_mut(|options| options.max_passes = NonZeroUsize::MIN);
    ctx.set_visuals(egui::Visuals::dark());
}

/// Load the configured font file and make it the first proportional font.
///
/// A missing or unreadable file keeps egui's built-in fonts.
pub fn install_font(ctx: &egui::Context, settings: &FontSettings) {
    let bytes = match std::fs::read(&settings.path) {
        Ok(bytes) => bytes,
        Err(e) => {
            log::warn!(
                "Couldn't read font \"{}\": {}; using built-in fonts",
                settings.path.display(),
                e
            );
            return;
        }
    };

    let mut fonts = FontDefinitions::default();
    fonts
        .font_data
        .insert(CUSTOM_FONT.to_owned(), Arc::new(FontData::from_owned(bytes)));
    fonts
        .families
        .entry(FontFamily::Proportional)
        .or_default()
        .insert(0, CUSTOM_FONT.to_owned());
    ctx.set_fonts(fonts);

    log::info!("Loaded font \"{}\"", settings.path.display());
}

/// Rescale every text style around a body size
pub fn apply_font_size(ctx: &egui::Context, size: f32) {
    let styles = text_styles(size);
    ctx.style_mut(|style| style.text_styles = styles);
}

/// Text styles for a body size; heading and small scale with it
pub fn text_styles(size: f32) -> BTreeMap<TextStyle, FontId> {
    [
        (TextStyle::Small, FontId::proportional(size * 0.75)),
        (TextStyle::Body, FontId::proportional(size)),
        (TextStyle::Button, FontId::proportional(size)),
        (TextStyle::Heading, FontId::proportional(size * 1.4)),
        (TextStyle::Monospace, FontId::monospace(size)),
    ]
    .into()
}
