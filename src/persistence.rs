use crate::chart::Variant;
use anyhow::Context;
use std::path::{Path, PathBuf};

/// Default location of the rendered chart: `target/bufferpool/<variant>.svg`.
pub fn plot_path(variant: Variant) -> anyhow::Result<PathBuf> {
    let path = base_dir()?.join(format!("{}.svg", variant.name()));
    prepare_output(path)
}

/// Makes sure the directory `path` is written into exists.
pub fn prepare_output(path: PathBuf) -> anyhow::Result<PathBuf> {
    if let Some(dir) = path.parent().filter(|dir| !dir.as_os_str().is_empty()) {
        std::fs::create_dir_all(dir)
            .with_context(|| format!("couldn't create {}", dir.display()))?;
    }

    Ok(path)
}

fn base_dir() -> anyhow::Result<PathBuf> {
    let dir = std::env::current_dir()
        .context("couldn't get current dir")?
        .join(Path::new("target/bufferpool"));

    Ok(dir)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plot_path_is_named_after_variant() {
        let path = plot_path(Variant::Time).unwrap();
        assert!(path.ends_with("target/bufferpool/time.svg"));
        assert!(path.parent().unwrap().is_dir());
    }

    #[test]
    fn prepare_output_creates_parent() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested/charts/alloc-scan.svg");

        let prepared = prepare_output(path.clone()).unwrap();
        assert_eq!(prepared, path);
        assert!(dir.path().join("nested/charts").is_dir());
        assert!(!path.exists());
    }

    #[test]
    fn prepare_output_bare_file_name() {
        let path = PathBuf::from("chart.svg");
        assert_eq!(prepare_output(path.clone()).unwrap(), path);
    }
}
