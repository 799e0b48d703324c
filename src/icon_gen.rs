use crate::font::{LabelFont, DEFAULT_FALLBACK_FONT, DEFAULT_PRIMARY_FONT};
use crate::manifest::{fragment_path, IconsFragment, ManifestIcon};
use crate::options::IconOption;
use anyhow::{Context, Result};
use clap::Parser;
use image::{
    codecs::png::{CompressionType, FilterType as PngFilterType, PngEncoder},
    ColorType, ImageEncoder, RgbImage,
};
use std::{
    fs::File,
    io::{BufWriter, Write},
    path::{Path, PathBuf},
};
use tracing::{debug, info, instrument, Level};

#[derive(Debug, Clone, Parser)]
#[clap(
    name = "pwa-icon-gen",
    about = "Render the PWA icon design options as PNG files"
)]
pub struct Args {
    /// Output directory.
    #[clap(short, long, value_name = "DIR", default_value = "public")]
    pub output: PathBuf,

    /// Icon edge lengths to render, in pixels.
    #[clap(
        short,
        long,
        value_delimiter = ',',
        value_name = "SIZES",
        default_values_t = [192, 512]
    )]
    pub sizes: Vec<u32>,

    /// Designs to render (option1..option10). Renders all when omitted.
    #[clap(long, value_delimiter = ',', value_name = "IDS")]
    pub options: Option<Vec<IconOption>>,

    /// Font used for the label.
    #[clap(long, value_name = "PATH", default_value = DEFAULT_PRIMARY_FONT)]
    pub font: PathBuf,

    /// Font tried when the primary font cannot be loaded.
    #[clap(long, value_name = "PATH", default_value = DEFAULT_FALLBACK_FONT)]
    pub fallback_font: PathBuf,

    /// Label drawn on every icon.
    #[clap(long, default_value = "LCM")]
    pub text: String,

    /// Also write a web app manifest `icons` fragment per design.
    #[clap(long)]
    pub manifest: bool,

    /// Increase diagnostic output (-v info, -vv debug, -vvv trace).
    #[clap(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Args {
    /// Designs selected for this run, in canonical order, without duplicates.
    pub fn selected_options(&self) -> Vec<IconOption> {
        match &self.options {
            None => IconOption::ALL.to_vec(),
            Some(selected) => IconOption::ALL
                .into_iter()
                .filter(|option| selected.contains(option))
                .collect(),
        }
    }

    /// Diagnostic level selected by the `-v` count.
    pub fn log_level(&self) -> Level {
        match self.verbose {
            0 => Level::WARN,
            1 => Level::INFO,
            2 => Level::DEBUG,
            _ => Level::TRACE,
        }
    }

    /// Requested sizes with duplicates removed, first occurrence wins.
    fn unique_sizes(&self) -> Vec<u32> {
        let mut sizes = Vec::with_capacity(self.sizes.len());
        for &size in &self.sizes {
            if !sizes.contains(&size) {
                sizes.push(size);
            }
        }
        sizes
    }
}

/// `icon-192x192-option1.png`
pub fn icon_filename(size: u32, option: IconOption) -> String {
    format!("icon-{size}x{size}-{}.png", option.id())
}

/// Render every selected design at every size and write the PNGs.
///
/// Returns the paths written, in generation order.
pub fn generate_icons(args: &Args) -> Result<Vec<PathBuf>> {
    let sizes = args.unique_sizes();
    if sizes.is_empty() {
        anyhow::bail!("At least one icon size is required");
    }
    if sizes.contains(&0) {
        anyhow::bail!("Icon sizes must be greater than zero");
    }
    let options = args.selected_options();

    let font = LabelFont::load(&args.font, &args.fallback_font)
        .context("Failed to load label font")?;
    info!(font = %font.path().display(), "using label font");

    std::fs::create_dir_all(&args.output).context("Can't create output directory")?;

    let mut written = Vec::with_capacity(sizes.len() * options.len());
    for &size in &sizes {
        for &option in &options {
            let path = render_icon(option, size, &args.text, &font, &args.output)?;
            written.push(path);
        }
    }

    if args.manifest {
        for &option in &options {
            write_manifest(option, &sizes, &args.output)?;
        }
    }

    println!("\nAll icon options created successfully!");
    println!("Options available:");
    for option in &options {
        println!("  {} - {}", option.id(), option.description());
    }

    Ok(written)
}

#[instrument(skip_all, fields(option = %option, size))]
fn render_icon(
    option: IconOption,
    size: u32,
    text: &str,
    font: &LabelFont,
    out_dir: &Path,
) -> Result<PathBuf> {
    let image = option.render(size, text, font).into_image();
    let filename = icon_filename(size, option);
    let path = out_dir.join(&filename);
    save_png(&image, &path).with_context(|| format!("Failed to save {filename}"))?;
    debug!(path = %path.display(), "wrote icon");
    println!("  ✓ Created {filename}");
    Ok(path)
}

fn write_manifest(option: IconOption, sizes: &[u32], out_dir: &Path) -> Result<()> {
    let mut fragment = IconsFragment::default();
    for &size in sizes {
        fragment.add_icon(ManifestIcon::png(icon_filename(size, option), size));
    }

    let path = fragment_path(out_dir, option.id());
    fragment.write_to(&path)?;
    println!("  ✓ Created {}", path.display());
    Ok(())
}

fn save_png(image: &RgbImage, path: &Path) -> Result<()> {
    let mut out_file = BufWriter::new(File::create(path).context("Failed to create PNG file")?);
    write_png(image, &mut out_file)?;
    out_file.flush().context("Failed to write PNG")?;
    Ok(())
}

// Encode RGB pixel data as PNG with compression
fn write_png<W: Write>(image: &RgbImage, w: W) -> Result<()> {
    let encoder = PngEncoder::new_with_quality(w, CompressionType::Best, PngFilterType::Adaptive);
    encoder.write_image(image.as_raw(), image.width(), image.height(), ColorType::Rgb8)?;
    Ok(())
}
