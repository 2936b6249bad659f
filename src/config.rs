use std::ffi::OsString;
use std::time::Duration;

pub const DEFAULT_RENDERER: &str = "pdflatex";

#[derive(Debug, Clone)]
pub struct Config {
    /// Program that turns the LaTeX source into a PDF.
    pub renderer: OsString,
    /// Base name of the source and artifact inside the working directory.
    pub job_name: String,
    /// How long to keep the artifact around after handing it to a viewer.
    pub settle_time: Duration,
}

impl Default for Config {
    fn default() -> Config {
        Config {
            renderer: OsString::from(DEFAULT_RENDERER),
            job_name: "index".to_owned(),
            settle_time: Duration::from_secs(5),
        }
    }
}

impl Config {
    pub fn with_renderer<S: Into<OsString>>(mut self, renderer: S) -> Self {
        self.renderer = renderer.into();
        self
    }

    pub fn with_settle_time(mut self, settle_time: Duration) -> Self {
        self.settle_time = settle_time;
        self
    }

    pub fn source_file_name(&self) -> String {
        format!("{}.tex", self.job_name)
    }

    pub fn artifact_file_name(&self) -> String {
        format!("{}.pdf", self.job_name)
    }
}
