//! Helpers to run the `timetabler` binary in integration tests.
#![allow(
    dead_code,
    reason = "is used in integration tests but unable to find a way to silence these warnings"
)]

use std::fs::File;
use std::path::Path;
use std::path::PathBuf;
use std::process::Command;
use std::process::ExitStatus;
use std::process::Stdio;
use std::time::Duration;

use wait_timeout::ChildExt;

#[derive(Debug)]
pub(crate) struct Files {
    pub(crate) instance_file: PathBuf,
    pub(crate) log_file: PathBuf,
    pub(crate) err_file: PathBuf,
    pub(crate) solution_file: PathBuf,
}

impl Files {
    pub(crate) fn log(&self) -> String {
        std::fs::read_to_string(&self.log_file).expect("Failed to read log file.")
    }

    pub(crate) fn cleanup(self) -> std::io::Result<()> {
        std::fs::remove_file(self.log_file)?;
        std::fs::remove_file(self.err_file)?;

        if self.solution_file.is_file() {
            std::fs::remove_file(self.solution_file)?;
        }

        Ok(())
    }
}

pub(crate) fn instance_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("instances")
        .join(format!("{name}.tim"))
}

/// Runs the solver on `instance_path` and returns the produced files together with the exit
/// status; `prefix` keeps the files of different runs on the same instance apart.
pub(crate) fn run_solver_with_options(
    instance_path: impl AsRef<Path>,
    args: impl IntoIterator<Item = String>,
    prefix: &str,
) -> (Files, ExitStatus) {
    const TEST_TIMEOUT: Duration = Duration::from_secs(60);

    let instance_path = instance_path.as_ref();
    let solver = PathBuf::from(env!("CARGO_BIN_EXE_timetabler"));

    let add_extension =
        |extension: &str| -> PathBuf { instance_path.with_extension(format!("{prefix}.{extension}")) };

    let log_file_path = add_extension("log");
    let err_file_path = add_extension("err");
    let solution_file_path = add_extension("sln");

    let mut command = Command::new(solver);
    for arg in args {
        let _ = command.arg(arg);
    }

    let mut child = command
        .arg(instance_path)
        .stdout(File::create(&log_file_path).expect("Failed to create log file."))
        .stderr(File::create(&err_file_path).expect("Failed to create error file."))
        .stdin(Stdio::null())
        .spawn()
        .expect("Failed to run solver.");

    let status = match child.wait_timeout(TEST_TIMEOUT) {
        Ok(None) => panic!("solver took more than {} seconds", TEST_TIMEOUT.as_secs()),
        Ok(Some(status)) => status,
        Err(e) => panic!("error starting solver: {e}"),
    };

    let files = Files {
        instance_file: instance_path.to_path_buf(),
        log_file: log_file_path,
        err_file: err_file_path,
        solution_file: solution_file_path,
    };
    (files, status)
}

/// Runs the solver and panics if it does not exit successfully.
pub(crate) fn run_solver(
    instance_path: impl AsRef<Path>,
    args: impl IntoIterator<Item = String>,
    prefix: &str,
) -> Files {
    let (files, status) = run_solver_with_options(instance_path, args, prefix);
    assert!(status.success(), "error solving instance: {status}");
    files
}
