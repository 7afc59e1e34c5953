use anyhow::{Context, Result};
use jwio::Config;

fn main() -> Result<()> {
    let config = Config::parse();
    config.validate().context("Invalid configuration")?;

    println!(
        "Building {} into {}",
        config.input.display(),
        config.output.display()
    );

    let summary = jwio::build_site(&config).context("Site build failed")?;

    if summary.passthrough_files > 0 {
        println!("Copied {} passthrough files", summary.passthrough_files);
    }

    let index_path = config.output.join("index.html");
    println!("Generated: {}", index_path.display());

    if !config.no_open
        && let Err(e) = open::that(&index_path)
    {
        eprintln!("Warning: Failed to open {}: {}", index_path.display(), e);
    }

    Ok(())
}
