use anyhow::{Context, Result};
use std::{io, path::Path};

fn main() -> Result<()> {
    pwa_icons::init_logger();

    let dir = pwa_icons::output_dir()?;
    std::env::set_current_dir(&dir)
        .with_context(|| format!("failed to enter {}", dir.display()))?;
    log::info!("writing icons to {}", dir.display());

    pwa_icons::generate_icons(Path::new("."), &mut io::stdout().lock())?;
    Ok(())
}
