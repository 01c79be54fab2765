use clap::Parser;
use gallery_data::{GalleryConfig, generate_gallery_data, output};
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::mpsc;

#[derive(Parser)]
#[command(name = "gallery-data")]
#[command(about = "Build gallery-data.json and embed it into the gallery page")]
#[command(long_about = "\
Build gallery-data.json and embed it into the gallery page

Run from the gallery root. Images are read from ./resources and only kept
when a file of the same name exists in both ./erased and ./output.

  ./
  ├── resources/          # Source images (.jpg .jpeg .png .gif), required
  ├── erased/             # Must contain every published image
  ├── output/             # Must contain every published image
  ├── gallery-data.json   # Written: newest-first manifest
  └── index.html          # Updated: const galleryData = [...];

The newest LIMIT images are selected first, then cross-checked, so the
manifest may hold fewer than LIMIT entries.")]
#[command(version)]
struct Cli {
    /// Maximum number of images to select (non-numeric or non-positive → 100)
    #[arg(allow_hyphen_values = true)]
    limit: Option<String>,

    /// Where to write the gallery data JSON [default: ./gallery-data.json]
    #[arg(allow_hyphen_values = true)]
    output_json: Option<String>,

    /// HTML page to embed the gallery data into [default: ./index.html]
    #[arg(allow_hyphen_values = true)]
    html: Option<String>,

    /// Anything after the page path is accepted and ignored.
    #[arg(hide = true, allow_hyphen_values = true, trailing_var_arg = true)]
    _ignored: Vec<String>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let config = GalleryConfig::from_args(
        cli.limit.as_deref(),
        cli.output_json.map(PathBuf::from),
        cli.html.map(PathBuf::from),
    );

    let (tx, rx) = mpsc::channel();
    let result = generate_gallery_data(&config, Some(tx));
    for event in rx {
        output::print_event(&event);
    }

    match result {
        Ok(_) => ExitCode::SUCCESS,
        Err(err) => {
            output::print_error(&err);
            ExitCode::FAILURE
        }
    }
}
