//! Bounded external tool invocation.
//!
//! The pipeline drives two external extraction tools and nothing else; all
//! it needs from them is their exit status and their output streams. Both
//! execution modes enforce an optional wall-clock limit so a stalled tool
//! cannot hang the whole run.

use std::ffi::{OsStr, OsString};
use std::io::{BufRead, BufReader, Read};
use std::path::PathBuf;
use std::process::{Child, Command, ExitStatus, Stdio};
use std::sync::mpsc;
use std::thread;
use std::time::{Duration, Instant};

use tracing::debug;

use crate::error::{Error, Result};

/// How often a running child is polled for exit.
const POLL_INTERVAL: Duration = Duration::from_millis(25);

/// Receives one line at a time from a streamed subprocess.
///
/// Injected into [`ToolCommand::run_streamed`] so callers decide where the
/// relay goes (the log in production, a buffer in tests).
pub trait LineSink {
    fn line(&mut self, line: &str);
}

/// Relays subprocess output into the log at debug level.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl LineSink for TracingSink {
    fn line(&mut self, line: &str) {
        debug!("{line}");
    }
}

/// Collects relayed lines in memory.
#[derive(Debug, Clone, Default)]
pub struct BufferSink {
    pub lines: Vec<String>,
}

impl BufferSink {
    pub fn new() -> Self {
        Self::default()
    }
}

impl LineSink for BufferSink {
    fn line(&mut self, line: &str) {
        self.lines.push(line.to_string());
    }
}

/// Everything a captured subprocess produced.
#[derive(Debug)]
pub struct CapturedOutput {
    pub status: ExitStatus,
    pub stdout: Vec<u8>,
    pub stderr: Vec<u8>,
}

impl CapturedOutput {
    pub fn stderr_lossy(&self) -> String {
        String::from_utf8_lossy(&self.stderr).into_owned()
    }
}

/// One external tool invocation: program, arguments, working directory and
/// an optional wall-clock limit.
#[derive(Debug, Clone)]
pub struct ToolCommand {
    program: String,
    args: Vec<OsString>,
    cwd: Option<PathBuf>,
    timeout: Option<Duration>,
}

impl ToolCommand {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
            cwd: None,
            timeout: None,
        }
    }

    pub fn arg(mut self, arg: impl AsRef<OsStr>) -> Self {
        self.args.push(arg.as_ref().to_os_string());
        self
    }

    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<OsStr>,
    {
        for arg in args {
            self.args.push(arg.as_ref().to_os_string());
        }
        self
    }

    pub fn current_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.cwd = Some(dir.into());
        self
    }

    pub fn timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    /// Short human-readable name for error messages, e.g. `python casc_extract.py`.
    pub fn label(&self) -> String {
        match self.args.first() {
            Some(first) => format!("{} {}", self.program, first.to_string_lossy()),
            None => self.program.clone(),
        }
    }

    /// Run the tool, draining its stdout line-by-line into `sink` until it
    /// exits. Draining as the child writes prevents pipe buffer deadlock on
    /// chatty tools.
    ///
    /// A non-zero exit is not an error here; callers inspect the returned
    /// status. Spawn failures and timeouts are.
    pub fn run_streamed(&self, sink: &mut dyn LineSink) -> Result<ExitStatus> {
        let mut child = self
            .command()
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|source| Error::SpawnFailed {
                tool: self.label(),
                source,
            })?;

        let stdout = child.stdout.take().expect("stdout was piped");
        let deadline = self.timeout.map(|t| Instant::now() + t);

        // Reader thread feeds a channel so the drain loop can observe the
        // deadline while blocked on a silent child.
        let (tx, rx) = mpsc::channel::<String>();
        let reader = thread::spawn(move || {
            for line in BufReader::new(stdout).lines() {
                let Ok(line) = line else { break };
                if tx.send(line).is_err() {
                    break;
                }
            }
        });

        loop {
            let received = match deadline {
                Some(deadline) => {
                    let now = Instant::now();
                    if now >= deadline {
                        // kill first: the reader thread only finishes once
                        // the child's stdout closes
                        let err = self.kill_timed_out(&mut child);
                        let _ = reader.join();
                        return Err(err);
                    }
                    match rx.recv_timeout(deadline - now) {
                        Ok(line) => Some(line),
                        Err(mpsc::RecvTimeoutError::Timeout) => {
                            let err = self.kill_timed_out(&mut child);
                            let _ = reader.join();
                            return Err(err);
                        }
                        Err(mpsc::RecvTimeoutError::Disconnected) => None,
                    }
                }
                None => rx.recv().ok(),
            };
            match received {
                Some(line) => sink.line(&line),
                None => break,
            }
        }

        let _ = reader.join();
        self.wait_with_deadline(&mut child, deadline)
    }

    /// Run the tool to completion, capturing stdout and stderr.
    pub fn run_captured(&self) -> Result<CapturedOutput> {
        let mut child = self
            .command()
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|source| Error::SpawnFailed {
                tool: self.label(),
                source,
            })?;

        let stdout = child.stdout.take().expect("stdout was piped");
        let stderr = child.stderr.take().expect("stderr was piped");

        // Both pipes are drained on their own threads; draining only one
        // could deadlock a tool that fills the other.
        let out_thread = thread::spawn(move || read_to_end(stdout));
        let err_thread = thread::spawn(move || read_to_end(stderr));

        let deadline = self.timeout.map(|t| Instant::now() + t);
        let status = self.wait_with_deadline(&mut child, deadline);

        // Killing the child closes its pipes, so the reader threads finish
        // even on the timeout path.
        let stdout = out_thread.join().unwrap_or_default();
        let stderr = err_thread.join().unwrap_or_default();

        Ok(CapturedOutput {
            status: status?,
            stdout,
            stderr,
        })
    }

    fn command(&self) -> Command {
        let mut cmd = Command::new(&self.program);
        cmd.args(&self.args);
        if let Some(dir) = &self.cwd {
            cmd.current_dir(dir);
        }
        cmd
    }

    fn wait_with_deadline(
        &self,
        child: &mut Child,
        deadline: Option<Instant>,
    ) -> Result<ExitStatus> {
        loop {
            if let Some(status) = child.try_wait()? {
                return Ok(status);
            }
            if let Some(deadline) = deadline
                && Instant::now() >= deadline
            {
                return Err(self.kill_timed_out(child));
            }
            thread::sleep(POLL_INTERVAL);
        }
    }

    fn kill_timed_out(&self, child: &mut Child) -> Error {
        let _ = child.kill();
        let _ = child.wait();
        Error::ToolTimedOut {
            tool: self.label(),
            timeout: self.timeout.expect("timeout is set when a deadline exists"),
        }
    }
}

fn read_to_end(mut stream: impl Read) -> Vec<u8> {
    let mut buf = Vec::new();
    let _ = stream.read_to_end(&mut buf);
    buf
}
