use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use bitfont_render::{BitFontOptions, BitFontRenderer, Charset, coe};
use clap::Parser;
use log::info;

#[derive(Parser, Debug)]
#[command(author, version, about = "Convert a font into a fixed-cell bitmap glyph table")]
struct Cli {
    /// Font file to rasterize (TTF or OTF)
    #[arg(short, long)]
    font: PathBuf,
    /// Pixel height of every glyph cell
    #[arg(short, long, default_value_t = 16)]
    size: u32,
    /// Base name for the output files; defaults to the font's reported name
    #[arg(short, long)]
    name: Option<String>,
    /// File whose first line replaces the built-in charset
    #[arg(short, long)]
    charset: Option<PathBuf>,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let mut options = BitFontOptions::default();
    options.size = cli.size;
    options.name = cli.name;
    if let Some(path) = cli.charset {
        options.charset = Charset::from_file(&path)
            .with_context(|| format!("failed to load charset {:?}", path))?;
    }

    let renderer = BitFontRenderer::default();
    let output = renderer
        .render_path(&cli.font, options)
        .with_context(|| format!("failed to render {:?}", cli.font))?;

    let coe_path = format!("{}.coe", output.file_stem);
    fs::write(&coe_path, coe::document(&output.table))
        .with_context(|| format!("failed to write {:?}", coe_path))?;

    let png_path = format!("{}.png", output.file_stem);
    output
        .preview
        .save(&png_path)
        .with_context(|| format!("failed to write {:?}", png_path))?;

    info!(
        "wrote {} and {} ({} glyphs, {}x{} cells)",
        coe_path,
        png_path,
        output.table.glyph_count(),
        output.table.cell_width(),
        output.table.cell_height()
    );
    Ok(())
}
