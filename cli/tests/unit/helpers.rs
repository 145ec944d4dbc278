//! Shared test helpers: scripted command runner, recording reporter, fake
//! filesystem and output constructors.

#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::process::{ExitStatus, Output};
use std::sync::{Arc, Mutex};

use anyhow::Result;
use brigade_cli::application::ports::{CommandRunner, LocalFs, ProgressReporter};
use brigade_cli::application::services::Orchestrator;
use brigade_cli::domain::{ContainerCli, Manifest};

// ── Cross-platform ExitStatus construction ───────────────────────────────────

/// Build an `ExitStatus` from a logical exit code (0 = success, non-zero = failure).
///
/// On Unix the raw wait-status encodes the exit code in bits 8–15, so we shift.
/// On Windows `ExitStatusExt::from_raw` takes the exit code directly.
#[cfg(unix)]
pub fn exit_status(code: i32) -> ExitStatus {
    use std::os::unix::process::ExitStatusExt;
    ExitStatus::from_raw(code << 8)
}

#[cfg(windows)]
pub fn exit_status(code: i32) -> ExitStatus {
    use std::os::windows::process::ExitStatusExt;
    #[allow(clippy::cast_sign_loss)]
    ExitStatus::from_raw(code as u32)
}

// ── Output constructors ──────────────────────────────────────────────────────

pub fn ok_output(stdout: &[u8]) -> Output {
    Output {
        status: exit_status(0),
        stdout: stdout.to_vec(),
        stderr: Vec::new(),
    }
}

pub fn err_output(code: i32, stderr: &[u8]) -> Output {
    Output {
        status: exit_status(code),
        stdout: Vec::new(),
        stderr: stderr.to_vec(),
    }
}

// ── MockCommandRunner ────────────────────────────────────────────────────────

/// One recorded `(program, args)` pair.
pub type Call = (String, Vec<String>);

type Responder = Arc<dyn Fn(&str, &[String]) -> Result<Output> + Send + Sync>;

/// A `CommandRunner` that records every call and answers from a script.
#[derive(Clone)]
pub struct MockCommandRunner {
    calls: Arc<Mutex<Vec<Call>>>,
    respond: Responder,
}

impl MockCommandRunner {
    pub fn new(respond: impl Fn(&str, &[String]) -> Result<Output> + Send + Sync + 'static) -> Self {
        Self {
            calls: Arc::new(Mutex::new(Vec::new())),
            respond: Arc::new(respond),
        }
    }

    /// Every invocation exits 0 with empty output.
    pub fn always_ok() -> Self {
        Self::new(|_, _| Ok(ok_output(b"")))
    }

    /// Every invocation exits 1 with `stderr`.
    pub fn always_failing(stderr: &'static str) -> Self {
        Self::new(move |_, _| Ok(err_output(1, stderr.as_bytes())))
    }

    /// Snapshot of all recorded calls, in call order.
    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().expect("mutex poisoned").clone()
    }

    /// The runtime subcommand (first argument) of each call, in call order.
    pub fn subcommands(&self) -> Vec<String> {
        self.calls()
            .into_iter()
            .filter_map(|(_, args)| args.first().cloned())
            .collect()
    }

    /// `(subcommand, target)` of each call, where target is the last argument
    /// for stop/rm and the `--name`/filter value for run/ps.
    pub fn targets(&self) -> Vec<(String, String)> {
        self.calls()
            .into_iter()
            .map(|(_, args)| {
                let sub = args.first().cloned().unwrap_or_default();
                let target = match sub.as_str() {
                    "run" => args.get(4).cloned(),
                    "ps" => args.get(2).cloned(),
                    "build" => args.get(2).cloned(),
                    _ => args.last().cloned(),
                };
                (sub, target.unwrap_or_default())
            })
            .collect()
    }
}

impl CommandRunner for MockCommandRunner {
    async fn run(&self, program: &str, args: &[&str]) -> Result<Output> {
        let owned: Vec<String> = args.iter().map(|s| (*s).to_owned()).collect();
        self.calls
            .lock()
            .expect("mutex poisoned")
            .push((program.to_owned(), owned.clone()));
        (self.respond)(program, &owned)
    }
}

// ── Runtime emulation ────────────────────────────────────────────────────────

/// A running container as the fake runtime reports it.
#[derive(Clone)]
pub struct Running {
    pub id: &'static str,
    pub status: &'static str,
    pub name: &'static str,
}

/// Answer a `ps -f name=<regex>` call the way the real runtime does: the
/// filter is a regular expression matched against `/<container name>`.
pub fn ps_answer(args: &[String], running: &[Running]) -> Output {
    let filter = args
        .iter()
        .find_map(|a| a.strip_prefix("name="))
        .expect("ps called without a name filter");
    let pattern = regex::Regex::new(filter).expect("filter is a valid regex");
    let rows: Vec<String> = running
        .iter()
        .filter(|c| pattern.is_match(&format!("/{}", c.name)))
        .map(|c| format!("{}\t{}\t{}", c.id, c.status, c.name))
        .collect();
    ok_output(rows.join("\n").as_bytes())
}

// ── RecordingReporter ────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Header,
    Footer,
    Step,
    Success,
    Warn,
    Error,
    Info,
    Detail,
}

/// A `ProgressReporter` that keeps every narrated line.
#[derive(Default)]
pub struct RecordingReporter {
    events: RefCell<Vec<(Level, String)>>,
}

impl RecordingReporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<(Level, String)> {
        self.events.borrow().clone()
    }

    pub fn messages(&self, level: Level) -> Vec<String> {
        self.events
            .borrow()
            .iter()
            .filter(|(l, _)| *l == level)
            .map(|(_, m)| m.clone())
            .collect()
    }

    /// `true` if some message at `level` contains `text`.
    pub fn has(&self, level: Level, text: &str) -> bool {
        self.events
            .borrow()
            .iter()
            .any(|(l, m)| *l == level && m.contains(text))
    }

    fn push(&self, level: Level, message: String) {
        self.events.borrow_mut().push((level, message));
    }
}

impl ProgressReporter for RecordingReporter {
    fn header(&self, title: &str) {
        self.push(Level::Header, title.to_owned());
    }
    fn footer(&self, title: &str) {
        self.push(Level::Footer, title.to_owned());
    }
    fn step(&self, message: &str) {
        self.push(Level::Step, message.to_owned());
    }
    fn success(&self, message: &str) {
        self.push(Level::Success, message.to_owned());
    }
    fn warn(&self, message: &str) {
        self.push(Level::Warn, message.to_owned());
    }
    fn error(&self, message: &str) {
        self.push(Level::Error, message.to_owned());
    }
    fn info(&self, message: &str) {
        self.push(Level::Info, message.to_owned());
    }
    fn detail(&self, key: &str, value: &str) {
        self.push(Level::Detail, format!("{key}: {value}"));
    }
}

// ── FakeFs ───────────────────────────────────────────────────────────────────

/// A `LocalFs` whose only directories are the ones it was given.
#[derive(Default)]
pub struct FakeFs {
    dirs: HashSet<PathBuf>,
}

impl FakeFs {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn with_dirs(dirs: &[&str]) -> Self {
        Self {
            dirs: dirs.iter().map(PathBuf::from).collect(),
        }
    }
}

impl LocalFs for FakeFs {
    fn is_dir(&self, path: &Path) -> bool {
        self.dirs.contains(path)
    }
}

// ── Orchestrator fixture ─────────────────────────────────────────────────────

pub fn orchestrator<'a>(
    manifest: &'a Manifest,
    runner: &'a MockCommandRunner,
    fs: &'a FakeFs,
    reporter: &'a RecordingReporter,
) -> Orchestrator<'a, MockCommandRunner, FakeFs, RecordingReporter> {
    Orchestrator::new(manifest, ContainerCli::default(), runner, fs, reporter)
}

/// Parse a manifest literal for tests.
pub fn manifest(json: &str) -> Manifest {
    serde_json::from_str(json).expect("test manifest is valid")
}
