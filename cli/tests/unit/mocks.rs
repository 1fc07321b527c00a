//! Hand-written port mocks shared by the unit tests.
//!
//! Every mock records what it was asked to do. Calls a test does not expect
//! fail with a message naming the call, so they surface immediately.

#![allow(dead_code)]

use std::cell::{Cell, RefCell};
use std::process::{ExitStatus, Output};
use std::rc::Rc;
use std::time::Duration;

use anyhow::Result;
use fleetop_cli::application::ports::{
    CommandRunner, InstanceLister, InventoryStore, ProgressReporter, SessionLauncher,
};
use fleetop_cli::domain::{Environment, InventorySnapshot, SnapshotError};

// ── InstanceLister ───────────────────────────────────────────────────────────

/// Returns a canned listing (or error) per environment and records call order.
#[derive(Default)]
pub struct CannedLister {
    responses: Vec<(Environment, Result<String, String>)>,
    pub calls: RefCell<Vec<Environment>>,
}

impl CannedLister {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn listing(mut self, env: Environment, raw: &str) -> Self {
        self.responses.push((env, Ok(raw.to_string())));
        self
    }

    pub fn failing(mut self, env: Environment, reason: &str) -> Self {
        self.responses.push((env, Err(reason.to_string())));
        self
    }
}

impl InstanceLister for CannedLister {
    async fn list_instances(&self, environment: Environment) -> Result<String> {
        self.calls.borrow_mut().push(environment);
        match self.responses.iter().find(|(env, _)| *env == environment) {
            Some((_, Ok(raw))) => Ok(raw.clone()),
            Some((_, Err(reason))) => anyhow::bail!("{reason}"),
            None => anyhow::bail!("list_instances({environment}) not expected in this test"),
        }
    }
}

// ── InventoryStore ───────────────────────────────────────────────────────────

/// In-memory snapshot store. `load` on an empty store is `NotFound`.
#[derive(Default)]
pub struct MemoryStore {
    pub snapshot: RefCell<Option<InventorySnapshot>>,
    pub loads: Cell<usize>,
    pub saves: Cell<usize>,
}

impl MemoryStore {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn with(snapshot: InventorySnapshot) -> Self {
        let store = Self::default();
        *store.snapshot.borrow_mut() = Some(snapshot);
        store
    }

    pub fn current(&self) -> Option<InventorySnapshot> {
        self.snapshot.borrow().clone()
    }
}

impl InventoryStore for MemoryStore {
    async fn load(&self) -> Result<InventorySnapshot> {
        self.loads.set(self.loads.get() + 1);
        self.snapshot.borrow().clone().ok_or_else(|| {
            SnapshotError::NotFound {
                path: "memory".into(),
            }
            .into()
        })
    }

    async fn save(&self, snapshot: &InventorySnapshot) -> Result<()> {
        self.saves.set(self.saves.get() + 1);
        *self.snapshot.borrow_mut() = Some(snapshot.clone());
        Ok(())
    }
}

// ── SessionLauncher ──────────────────────────────────────────────────────────

/// Records launched command lines; optionally fails on the n-th launch (0-based).
#[derive(Default)]
pub struct RecordingLauncher {
    pub lines: RefCell<Vec<String>>,
    fail_at: Option<usize>,
}

impl RecordingLauncher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing_at(index: usize) -> Self {
        Self {
            lines: RefCell::default(),
            fail_at: Some(index),
        }
    }

    pub fn launched(&self) -> Vec<String> {
        self.lines.borrow().clone()
    }
}

impl SessionLauncher for RecordingLauncher {
    async fn launch(&self, command_line: &str) -> Result<()> {
        if self.fail_at == Some(self.lines.borrow().len()) {
            anyhow::bail!("terminal refused to open a tab");
        }
        self.lines.borrow_mut().push(command_line.to_string());
        Ok(())
    }
}

// ── ProgressReporter ─────────────────────────────────────────────────────────

/// Collects reporter messages as `"<level>: <message>"`.
#[derive(Default)]
pub struct RecordingReporter {
    pub messages: RefCell<Vec<String>>,
}

impl RecordingReporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, needle: &str) -> bool {
        self.messages.borrow().iter().any(|m| m.contains(needle))
    }
}

impl ProgressReporter for RecordingReporter {
    fn step(&self, message: &str) {
        self.messages.borrow_mut().push(format!("step: {message}"));
    }

    fn success(&self, message: &str) {
        self.messages.borrow_mut().push(format!("success: {message}"));
    }

    fn warn(&self, message: &str) {
        self.messages.borrow_mut().push(format!("warn: {message}"));
    }
}

// ── CommandRunner ────────────────────────────────────────────────────────────

/// Call log shared between a `RecordingRunner` and the test that owns it.
pub type CallLog = Rc<RefCell<Vec<(String, Vec<String>)>>>;

/// Records `(program, args)` and replies with a canned output or status.
///
/// Adapters take their runner by value, so tests keep a [`CallLog`] handle
/// from [`RecordingRunner::calls`] before handing the runner over.
pub struct RecordingRunner {
    calls: CallLog,
    output: Output,
}

impl RecordingRunner {
    pub fn replying(output: Output) -> Self {
        Self {
            calls: CallLog::default(),
            output,
        }
    }

    pub fn calls(&self) -> CallLog {
        Rc::clone(&self.calls)
    }

    fn record(&self, program: &str, args: &[&str]) {
        self.calls.borrow_mut().push((
            program.to_string(),
            args.iter().map(ToString::to_string).collect(),
        ));
    }
}

impl CommandRunner for RecordingRunner {
    async fn run(&self, program: &str, args: &[&str]) -> Result<Output> {
        self.record(program, args);
        Ok(self.output.clone())
    }

    async fn run_with_timeout(&self, program: &str, args: &[&str], _: Duration) -> Result<Output> {
        self.run(program, args).await
    }

    async fn run_status(&self, program: &str, args: &[&str]) -> Result<ExitStatus> {
        self.record(program, args);
        Ok(self.output.status)
    }
}
