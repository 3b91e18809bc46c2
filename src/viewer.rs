use anyhow::{bail, Context};
use log::debug;
use std::path::Path;
use std::process::Command;

/// Environment variable holding the viewer command, used when `--viewer` isn't given.
pub const VIEWER_ENV: &str = "BUFFERPOOL_PLOT_VIEWER";

pub fn default_viewer() -> &'static str {
    if cfg!(target_os = "macos") {
        "open"
    } else {
        "xdg-open"
    }
}

/// Opens `path` with `viewer` and blocks until the viewer exits. The viewer may carry its own
/// arguments, e.g. `"firefox --new-window"`; the path is appended last.
pub fn show(viewer: &str, path: &Path) -> anyhow::Result<()> {
    let mut words = viewer.split_whitespace();
    let program = words.next().context("viewer command is empty")?;
    let args: Vec<_> = words.collect();

    debug!("opening {} with {program} {args:?}", path.display());
    let status = Command::new(program)
        .args(&args)
        .arg(path)
        .spawn()
        .with_context(|| format!("couldn't spawn viewer `{program}`"))?
        .wait()
        .context("couldn't wait for viewer")?;

    if !status.success() {
        bail!("viewer `{program}` failed with {status}");
    }

    Ok(())
}
