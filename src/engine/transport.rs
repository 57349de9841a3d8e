use std::ffi::OsStr;
use std::io::{self, BufRead, BufReader, Write};
use std::process::{Child, ChildStdin, Command, Stdio};
use std::sync::mpsc::{self, Receiver, RecvTimeoutError};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::Duration;

use log::{debug, trace};
use parking_lot::Mutex;

use super::command::EngineCommand;
use super::error::EngineError;

const QUIT_POLLS: u32 = 20;
const QUIT_POLL_INTERVAL: Duration = Duration::from_millis(10);

/// A line-oriented channel to an engine.
pub trait EngineTransport {
    fn send(&mut self, command: &EngineCommand) -> Result<(), EngineError>;

    /// Next line from the engine, without its line terminator.
    fn recv(&mut self, timeout: Duration) -> Result<String, EngineError>;
}

impl<T: EngineTransport + ?Sized> EngineTransport for &mut T {
    fn send(&mut self, command: &EngineCommand) -> Result<(), EngineError> {
        (**self).send(command)
    }

    fn recv(&mut self, timeout: Duration) -> Result<String, EngineError> {
        (**self).recv(timeout)
    }
}

fn write_line(stdin: &Mutex<ChildStdin>, command: &EngineCommand) -> io::Result<()> {
    trace!("> {command}");
    let mut stdin = stdin.lock();
    writeln!(stdin, "{command}")?;
    stdin.flush()
}

/// Sends `stop` from any thread while a search is being read elsewhere.
#[derive(Clone)]
pub struct StopHandle {
    stdin: Arc<Mutex<ChildStdin>>,
}

impl StopHandle {
    pub fn stop(&self) -> Result<(), EngineError> {
        write_line(&self.stdin, &EngineCommand::Stop)?;
        Ok(())
    }
}

/// An engine running as a child process.
///
/// Stdout is read on a background thread so `recv` can time out.
pub struct ProcessTransport {
    child: Child,
    stdin: Arc<Mutex<ChildStdin>>,
    lines: Receiver<io::Result<String>>,
    reader: Option<JoinHandle<()>>,
}

impl ProcessTransport {
    /// Spawn `program` with `args`.
    pub fn spawn<P: AsRef<OsStr>>(program: P, args: &[&str]) -> Result<Self, EngineError> {
        let mut command = Command::new(program);
        command.args(args);
        Self::from_command(command)
    }

    /// Spawn a prepared command; its stdin and stdout are replaced by pipes.
    pub fn from_command(mut command: Command) -> Result<Self, EngineError> {
        let mut child = command
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::null())
            .spawn()?;
        debug!("spawned engine process {}", child.id());

        let stdin = child
            .stdin
            .take()
            .ok_or_else(|| io::Error::new(io::ErrorKind::BrokenPipe, "engine stdin unavailable"))?;
        let stdout = child
            .stdout
            .take()
            .ok_or_else(|| io::Error::new(io::ErrorKind::BrokenPipe, "engine stdout unavailable"))?;

        let (tx, lines) = mpsc::channel();
        let reader = thread::spawn(move || {
            let mut reader = BufReader::new(stdout);
            loop {
                let mut line = String::new();
                match reader.read_line(&mut line) {
                    Ok(0) => break,
                    Ok(_) => {
                        let line = line.trim_end_matches(['\r', '\n']).to_string();
                        if tx.send(Ok(line)).is_err() {
                            break;
                        }
                    }
                    Err(e) => {
                        let _ = tx.send(Err(e));
                        break;
                    }
                }
            }
        });

        Ok(ProcessTransport {
            child,
            stdin: Arc::new(Mutex::new(stdin)),
            lines,
            reader: Some(reader),
        })
    }

    #[must_use]
    pub fn stop_handle(&self) -> StopHandle {
        StopHandle {
            stdin: Arc::clone(&self.stdin),
        }
    }
}

impl EngineTransport for ProcessTransport {
    fn send(&mut self, command: &EngineCommand) -> Result<(), EngineError> {
        write_line(&self.stdin, command)?;
        Ok(())
    }

    fn recv(&mut self, timeout: Duration) -> Result<String, EngineError> {
        match self.lines.recv_timeout(timeout) {
            Ok(Ok(line)) => {
                trace!("< {line}");
                Ok(line)
            }
            Ok(Err(e)) => Err(EngineError::Io(e)),
            Err(RecvTimeoutError::Timeout) => Err(EngineError::Timeout { waited: timeout }),
            Err(RecvTimeoutError::Disconnected) => Err(EngineError::Closed),
        }
    }
}

impl Drop for ProcessTransport {
    fn drop(&mut self) {
        let _ = write_line(&self.stdin, &EngineCommand::Quit);
        let exited = (0..QUIT_POLLS).any(|_| {
            if matches!(self.child.try_wait(), Ok(Some(_))) {
                return true;
            }
            thread::sleep(QUIT_POLL_INTERVAL);
            false
        });
        if !exited {
            let _ = self.child.kill();
            let _ = self.child.wait();
        }
        if let Some(reader) = self.reader.take() {
            let _ = reader.join();
        }
        debug!("engine process {} shut down", self.child.id());
    }
}
