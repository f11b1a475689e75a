use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use pdf_images::constants::{DEFAULT_OUTPUT_FILE, DEFAULT_TITLE};
use pdf_images::{ConversionSummary, Rgb, StyleConfig};
use std::path::PathBuf;

mod logger;

#[derive(Parser)]
#[command(
    name = "img2pdf",
    about = "Combine images into a PDF, one image per page",
    version
)]
struct Cli {
    /// Input images, in page order
    #[arg(required = true, num_args = 1..)]
    images: Vec<PathBuf>,

    /// Output PDF file
    #[arg(short, long, default_value = DEFAULT_OUTPUT_FILE)]
    output: PathBuf,

    /// Page orientation [default: portrait]
    #[arg(long, value_enum)]
    orientation: Option<OrientationArg>,

    /// Page size [default: a4]
    #[arg(long, value_enum)]
    page_size: Option<PageSizeArg>,

    /// Margin around the border in mm [default: 10]
    #[arg(long)]
    margin: Option<f32>,

    /// Page background color as #rrggbb [default: #ffffff]
    #[arg(long)]
    background: Option<Rgb>,

    /// Border color as #rrggbb [default: #000000]
    #[arg(long)]
    border_color: Option<Rgb>,

    /// Border width in mm, 0 for none [default: 1]
    #[arg(long)]
    border_width: Option<f32>,

    /// JSON style preset; flags given on the command line override it
    #[arg(long)]
    config: Option<PathBuf>,

    /// Title stored in the PDF metadata
    #[arg(long, default_value = DEFAULT_TITLE)]
    title: String,

    /// Show the page summary only, don't write a PDF
    #[arg(long)]
    dry_run: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum OrientationArg {
    Portrait,
    Landscape,
}

#[derive(Clone, Copy, ValueEnum)]
enum PageSizeArg {
    A4,
    Letter,
    Legal,
}

impl From<OrientationArg> for pdf_images::Orientation {
    fn from(arg: OrientationArg) -> Self {
        match arg {
            OrientationArg::Portrait => Self::Portrait,
            OrientationArg::Landscape => Self::Landscape,
        }
    }
}

impl From<PageSizeArg> for pdf_images::PageSize {
    fn from(arg: PageSizeArg) -> Self {
        match arg {
            PageSizeArg::A4 => Self::A4,
            PageSizeArg::Letter => Self::Letter,
            PageSizeArg::Legal => Self::Legal,
        }
    }
}

impl Cli {
    /// Start from the preset (or defaults) and apply explicit flags on top
    async fn style(&self) -> Result<StyleConfig> {
        let mut style = match &self.config {
            Some(path) => StyleConfig::load(path)
                .await
                .with_context(|| format!("Failed to load style preset {}", path.display()))?,
            None => StyleConfig::default(),
        };

        if let Some(orientation) = self.orientation {
            style.orientation = orientation.into();
        }
        if let Some(page_size) = self.page_size {
            style.page_size = page_size.into();
        }
        if let Some(margin) = self.margin {
            style.margin_mm = margin;
        }
        if let Some(background) = self.background {
            style.background_color = background;
        }
        if let Some(border_color) = self.border_color {
            style.border_color = border_color;
        }
        if let Some(border_width) = self.border_width {
            style.border_width_mm = border_width;
        }

        Ok(style)
    }
}

fn print_summary(summary: &ConversionSummary) {
    println!("Conversion Summary:");
    println!("  Pages: {}", summary.page_count);
    println!(
        "  Page size: {} {:?} ({} x {} mm)",
        summary.page_size.name(),
        summary.orientation,
        summary.page_width_mm,
        summary.page_height_mm
    );
    println!("  Image width: {:.1} mm", summary.drawable_width_mm);
    if !summary.overflowing_pages.is_empty() {
        let pages: Vec<String> = summary
            .overflowing_pages
            .iter()
            .map(|idx| (idx + 1).to_string())
            .collect();
        println!("  Cut off at the bottom: pages {}", pages.join(", "));
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    logger::CliLogger::new(cli.verbose)
        .init()
        .context("Failed to install logger")?;

    let style = cli.style().await?;
    style.validate()?;

    let images = pdf_images::load_images(&cli.images).await?;

    let summary = pdf_images::calculate_summary(&images, &style)?;
    print_summary(&summary);

    if cli.dry_run {
        return Ok(());
    }

    let pages = pdf_images::generate_pdf(images, &style, &cli.title, &cli.output)
        .await
        .with_context(|| format!("Failed to write {}", cli.output.display()))?;
    println!("Generated {} pages → {}", pages, cli.output.display());

    Ok(())
}
