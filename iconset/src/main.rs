use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use triangle_iconset::IconsetProcessor;

const LARGEST_ASSET: &str = "icon_512x512@2x.svg";

fn main() -> ExitCode {
    // Set up logging using tracing, stdout is reserved for the completion message
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    tracing::info!(
        "{} version {}",
        env!("CARGO_PKG_NAME"),
        env!("CARGO_PKG_VERSION")
    );

    // The iconset lives next to the crate, under the workspace root
    let manifest_dir = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    let workspace_root = manifest_dir.parent().unwrap_or(manifest_dir.as_path());

    let processor = match IconsetProcessor::from_root(workspace_root) {
        Ok(v) => v,
        Err(err) => {
            tracing::error!("Failed to construct iconset processor: {}", err);
            return ExitCode::FAILURE;
        }
    };

    let outputs = match processor.process() {
        Ok(v) => v,
        Err(err) => {
            tracing::error!("Failed to generate iconset: {}", err);
            return ExitCode::FAILURE;
        }
    };

    // The largest asset is the best source for a later PNG conversion
    match outputs.get_output(LARGEST_ASSET) {
        Ok(path) => tracing::debug!("Largest asset written to {}", path.display()),
        Err(err) => tracing::debug!("{}", err),
    }

    println!("SVG icons created in {}", outputs.output_dir().display());
    println!(
        "Note: You'll need to convert these to PNG manually using a tool like Inkscape or ImageMagick"
    );

    ExitCode::SUCCESS
}
