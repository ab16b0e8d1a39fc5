//! rle565 - Compress RGB565 image headers with run-length encoding
//!
//! A command-line batch tool that rewrites `uint16_t` image headers as
//! `RLERun` arrays for flash-constrained firmware.

use clap::Parser;
use rle565::{extract_image, render_header, rle_encode};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "rle565")]
#[command(version)]
#[command(about = "Compress RGB565 image headers with run-length encoding", long_about = None)]
struct Cli {
    /// Input header files containing RGB565 arrays
    #[arg(required = true)]
    files: Vec<PathBuf>,

    /// Directory the compressed headers are written to
    #[arg(short, long, default_value = "compressed")]
    output: PathBuf,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    for path in &cli.files {
        if !path.is_file() {
            log::warn!("skipping '{}': not a file", path.display());
            continue;
        }
        // A bad input must not abort the rest of the batch
        if let Err(e) = convert(path, &cli.output) {
            log::error!("'{}': {}", path.display(), e);
        }
    }
}

fn convert(path: &Path, outdir: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let base = path.file_name().ok_or("input path has no file name")?;
    let name = path
        .file_stem()
        .unwrap_or(base)
        .to_string_lossy()
        .into_owned();

    log::info!("converting '{}'", path.display());

    let text = fs::read_to_string(path)?;
    let image = extract_image(&text)?;
    let runs = rle_encode(&image.pixels);
    let header = render_header(&name, image.width, image.height, &runs);

    fs::create_dir_all(outdir)?;
    let outpath = outdir.join(base);
    fs::write(&outpath, header)?;

    log::info!("written '{}' ({} runs)", outpath.display(), runs.len());
    Ok(())
}
