use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

fn blankcal(scratch: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_blankcal"))
        .args(args)
        .env("TMPDIR", scratch)
        .env("RUST_LOG", "off")
        .output()
        .expect("failed to run blankcal")
}

fn is_empty(dir: &Path) -> bool {
    fs::read_dir(dir).unwrap().next().is_none()
}

fn assert_usage(output: &Output) {
    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stdout).contains("Usage: blankcal YEAR"));
}

#[test]
fn year_must_be_an_integer() {
    let scratch = tempfile::tempdir().unwrap();
    let output = blankcal(scratch.path(), &["abc"]);
    assert_usage(&output);
    assert!(is_empty(scratch.path()));
}

#[test]
fn year_is_required() {
    let scratch = tempfile::tempdir().unwrap();
    assert_usage(&blankcal(scratch.path(), &[]));
}

#[test]
fn at_most_two_arguments() {
    let scratch = tempfile::tempdir().unwrap();
    assert_usage(&blankcal(scratch.path(), &["2024", "a.pdf", "b.pdf"]));
    assert!(is_empty(scratch.path()));
}

#[cfg(unix)]
mod rendering {
    use super::*;
    use std::os::unix::fs::PermissionsExt;

    /// A renderer that writes a fake PDF into its working directory.
    fn stub_renderer(dir: &Path) -> PathBuf {
        let script = dir.join("fake-latex");
        fs::write(
            &script,
            "#!/bin/sh\ngrep -q 'monthtop{January' \"$3\" || exit 1\nprintf '%%PDF-1.5' > index.pdf\n",
        )
        .unwrap();
        fs::set_permissions(&script, fs::Permissions::from_mode(0o755)).unwrap();
        script
    }

    #[test]
    fn renderer_failure_exits_with_two_and_cleans_up() {
        let scratch = tempfile::tempdir().unwrap();
        let out = tempfile::tempdir().unwrap();
        let target = out.path().join("calendar.pdf");

        let output = blankcal(
            scratch.path(),
            &["--renderer", "false", "2024", target.to_str().unwrap()],
        );

        assert_eq!(output.status.code(), Some(2));
        assert!(!target.exists());
        assert!(is_empty(scratch.path()));
    }

    #[test]
    fn copies_rendered_calendar() {
        let scratch = tempfile::tempdir().unwrap();
        let out = tempfile::tempdir().unwrap();
        let renderer = stub_renderer(out.path());
        let target = out.path().join("calendar.pdf");

        let output = blankcal(
            scratch.path(),
            &[
                "--renderer",
                renderer.to_str().unwrap(),
                "2024",
                target.to_str().unwrap(),
            ],
        );

        assert!(output.status.success(), "{:?}", output);
        assert_eq!(fs::read(&target).unwrap(), b"%PDF-1.5");
        assert!(is_empty(scratch.path()));
    }

    #[test]
    fn accepts_negative_years() {
        let scratch = tempfile::tempdir().unwrap();
        let out = tempfile::tempdir().unwrap();
        let renderer = stub_renderer(out.path());
        let target = out.path().join("old.pdf");

        let output = blankcal(
            scratch.path(),
            &[
                "--renderer",
                renderer.to_str().unwrap(),
                "-44",
                target.to_str().unwrap(),
            ],
        );

        assert!(output.status.success(), "{:?}", output);
        assert!(target.is_file());
    }
}
