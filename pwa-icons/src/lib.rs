use anyhow::{Context, Result};
use std::{
    io::Write,
    path::{Path, PathBuf},
};

/// Icons written on every run, in order.
pub const ICONS: [(u32, &str); 2] = [(192, "icon-192.png"), (512, "icon-512.png")];

/// Initializes the logger.
///
/// Lines carry a local timestamp, the level, the source file and line. The
/// filter defaults to `info` and can be overridden with `RUST_LOG`.
pub fn init_logger() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format(|buf, record| {
            let style = buf.default_level_style(record.level());
            let ts = chrono::Local::now().format("%H:%M:%S");

            writeln!(
                buf,
                "[{} {style}{}{style:#} {} {}] {}",
                ts,
                record.level(),
                record
                    .file()
                    .unwrap_or("None")
                    .split('/')
                    .next_back()
                    .unwrap_or("None"),
                record.line().unwrap_or(0),
                record.args()
            )
        })
        .init();
}

/// Directory holding the running executable.
pub fn output_dir() -> Result<PathBuf> {
    let exe = std::env::current_exe().context("failed to locate the running executable")?;

    exe.parent()
        .map(Path::to_path_buf)
        .with_context(|| format!("{} has no parent directory", exe.display()))
}

/// Render every entry of [`ICONS`] into `dir`, reporting each file on `out`.
///
/// Stops at the first failure. Files written before it are kept.
pub fn generate_icons(dir: &Path, out: &mut impl Write) -> Result<Vec<PathBuf>> {
    let mut written = Vec::with_capacity(ICONS.len());

    for (size, name) in ICONS {
        let path = dir.join(name);
        pill_icon::render_icon(size, &path)
            .with_context(|| format!("failed to create {}", path.display()))?;

        writeln!(out, "Created {name}")?;
        written.push(path);
    }

    writeln!(out, "Icons generated successfully!")?;
    Ok(written)
}
