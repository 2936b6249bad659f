use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};
use std::thread;

use crate::config::Config;
use crate::document;
use crate::error::{Error, ErrorKind, Result};

/// Turns a source document into a printable artifact next to it.
pub trait Renderer {
    fn render(&self, source: &Path, config: &Config) -> Result<PathBuf>;
}

/// Shows an artifact to the user.
pub trait Viewer {
    fn open(&self, artifact: &Path) -> Result<()>;
}

pub struct LatexRenderer;

impl Renderer for LatexRenderer {
    fn render(&self, source: &Path, config: &Config) -> Result<PathBuf> {
        let workdir = source.parent().unwrap_or_else(|| Path::new("."));

        log::info!(
            "Running {} on {}",
            config.renderer.to_string_lossy(),
            source.display()
        );

        let status = Command::new(&config.renderer)
            .arg("-interaction=nonstopmode")
            .arg("-halt-on-error")
            .arg(source)
            .current_dir(workdir)
            .stdin(Stdio::null())
            .status()?;

        if !status.success() {
            return Err(Error::from(ErrorKind::Render(status)));
        }

        let artifact = workdir.join(config.artifact_file_name());
        if !artifact.is_file() {
            return Err(Error::new(
                ErrorKind::MissingArtifact,
                &artifact.display().to_string(),
            ));
        }

        Ok(artifact)
    }
}

/// Opens files with the platform's default application.
pub struct SystemViewer;

impl SystemViewer {
    fn command(artifact: &Path) -> Option<Command> {
        if cfg!(target_os = "macos") {
            let mut cmd = Command::new("open");
            cmd.arg(artifact);
            Some(cmd)
        } else if cfg!(target_os = "windows") {
            let mut cmd = Command::new("cmd");
            cmd.args(&["/C", "start", ""]).arg(artifact);
            Some(cmd)
        } else if cfg!(any(
            target_os = "linux",
            target_os = "freebsd",
            target_os = "openbsd",
            target_os = "netbsd",
            target_os = "dragonfly"
        )) {
            let mut cmd = Command::new("xdg-open");
            cmd.arg(artifact);
            Some(cmd)
        } else {
            None
        }
    }
}

impl Viewer for SystemViewer {
    fn open(&self, artifact: &Path) -> Result<()> {
        match SystemViewer::command(artifact) {
            Some(mut cmd) => {
                log::info!("Opening {}", artifact.display());
                let status = cmd.status().map_err(|err| {
                    Error::new(
                        ErrorKind::Delivery,
                        &format!("unable to launch viewer: {}", err),
                    )
                })?;
                if !status.success() {
                    log::warn!("Viewer exited with {}", status);
                }
            }
            None => log::warn!(
                "Unable to automatically open the output. Please browse manually to {}.",
                artifact.display()
            ),
        }

        Ok(())
    }
}

/// Where the rendered calendar ends up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Destination {
    /// Show it in a viewer, then throw it away.
    View,
    CopyTo(PathBuf),
}

/// Typesets the calendar for `year` in a scratch directory and delivers the
/// result. The scratch directory is gone when this returns, whatever the
/// outcome.
pub fn generate(
    year: i32,
    destination: &Destination,
    config: &Config,
    renderer: &dyn Renderer,
    viewer: &dyn Viewer,
) -> Result<()> {
    let workdir = tempfile::Builder::new().prefix("blankcal").tempdir()?;
    log::debug!("Working directory {}", workdir.path().display());

    let source = workdir.path().join(config.source_file_name());
    fs::write(&source, document::assemble(year))?;

    let artifact = renderer.render(&source, config)?;

    match destination {
        Destination::View => {
            viewer.open(&artifact)?;
            // The viewer may still be loading the file.
            thread::sleep(config.settle_time);
        }
        Destination::CopyTo(target) => {
            log::info!("Copying {} to {}", artifact.display(), target.display());
            fs::copy(&artifact, target).map_err(|err| {
                Error::new(
                    ErrorKind::Delivery,
                    &format!("cannot copy to {}: {}", target.display(), err),
                )
            })?;
        }
    }

    let path = workdir.path().to_owned();
    if let Err(err) = workdir.close() {
        log::warn!("Unable to remove {}: {}", path.display(), err);
    }

    Ok(())
}
