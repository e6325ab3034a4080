use std::io::Write;
use std::path::PathBuf;
use std::process::{Command, Stdio};
use std::sync::{Arc, RwLock};

use crate::common::error::{SentinelError, SentinelResult};
use crate::formatter::Formatter;
use crate::logger::{Handler, LogContext};

/// Sends a formatted message to a recipient, with optional extra headers.
pub trait MailTransport: Send + Sync {
    fn send(&self, recipient: &str, body: &str, extra_headers: Option<&str>) -> SentinelResult<()>;
}

/// Sends formatted records to an email recipient through a [`MailTransport`].
pub struct EmailHandler {
    formatter: Arc<dyn Formatter>,
    recipient: String,
    extra_headers: RwLock<Option<String>>,
    transport: Arc<dyn MailTransport>,
}

impl EmailHandler {
    pub fn new<S: Into<String>>(
        formatter: Arc<dyn Formatter>,
        recipient: S,
        transport: Arc<dyn MailTransport>,
    ) -> Self {
        Self {
            formatter,
            recipient: recipient.into(),
            extra_headers: RwLock::new(None),
            transport,
        }
    }

    pub fn set_extra_headers<S: Into<String>>(&self, extra_headers: S) {
        if let Ok(mut headers) = self.extra_headers.write() {
            *headers = Some(extra_headers.into());
        }
    }

    pub fn recipient(&self) -> &str {
        &self.recipient
    }
}

impl Handler for EmailHandler {
    fn log(&self, level: &str, message: &str, context: &LogContext) -> SentinelResult<()> {
        let formatted = self.formatter.format(level, message, context);
        let headers = match self.extra_headers.read() {
            Ok(guard) => guard.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        };

        self.transport
            .send(&self.recipient, &formatted, headers.as_deref())
    }
}

/// Pipes the message body through a local sendmail binary.
pub struct SendmailTransport {
    program: PathBuf,
}

impl SendmailTransport {
    pub fn new() -> Self {
        Self {
            program: PathBuf::from("/usr/sbin/sendmail"),
        }
    }

    pub fn with_program<P: Into<PathBuf>>(program: P) -> Self {
        Self {
            program: program.into(),
        }
    }
}

impl Default for SendmailTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl MailTransport for SendmailTransport {
    fn send(&self, recipient: &str, body: &str, extra_headers: Option<&str>) -> SentinelResult<()> {
        let mut child = Command::new(&self.program)
            .arg("-t")
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|e| {
                SentinelError::mail_transport(format!(
                    "Failed to spawn {}: {e}",
                    self.program.display()
                ))
            })?;

        let mut message = format!("To: {recipient}\n");
        if let Some(headers) = extra_headers {
            message.push_str(headers);
            message.push('\n');
        }
        message.push('\n');
        message.push_str(body);

        if let Some(stdin) = child.stdin.as_mut() {
            stdin
                .write_all(message.as_bytes())
                .map_err(|e| SentinelError::mail_transport(format!("Failed to write body: {e}")))?;
        }

        let status = child
            .wait()
            .map_err(|e| SentinelError::mail_transport(format!("Transport did not exit: {e}")))?;

        if !status.success() {
            return Err(SentinelError::mail_transport(format!(
                "{} exited with {status}",
                self.program.display()
            )));
        }

        Ok(())
    }
}
