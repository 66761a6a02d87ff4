use crate::error::{QuickDialError, Result};
use std::process::{Command, Stdio};

/// Places a call to a digits-only number. Fire-and-forget: implementations
/// report whether the call could be started, not how it went.
pub trait Dialer {
    fn dial(&mut self, number: &str) -> Result<()>;
}

pub fn tel_url(number: &str) -> String {
    format!("tel:{}", number)
}

/// Hands a `tel:` URL to an external program.
/// - custom: the configured command, URL appended as the last argument
/// - macOS: `open`
/// - Linux: `xdg-open`
/// - Windows: `cmd /C start`
#[derive(Debug, Default, Clone)]
pub struct SystemDialer {
    command: Option<String>,
}

impl SystemDialer {
    pub fn new(command: Option<String>) -> Self {
        Self { command }
    }

    fn build_command(&self, url: &str) -> Result<Command> {
        if let Some(custom) = &self.command {
            let mut parts = custom.split_whitespace();
            let program = parts
                .next()
                .ok_or_else(|| QuickDialError::Config("Dialer command is empty".to_string()))?;
            let mut cmd = Command::new(program);
            cmd.args(parts).arg(url);
            return Ok(cmd);
        }
        platform_command(url)
    }
}

#[cfg(target_os = "macos")]
fn platform_command(url: &str) -> Result<Command> {
    let mut cmd = Command::new("open");
    cmd.arg(url);
    Ok(cmd)
}

#[cfg(target_os = "linux")]
fn platform_command(url: &str) -> Result<Command> {
    let mut cmd = Command::new("xdg-open");
    cmd.arg(url);
    Ok(cmd)
}

#[cfg(target_os = "windows")]
fn platform_command(url: &str) -> Result<Command> {
    let mut cmd = Command::new("cmd");
    cmd.args(["/C", "start", "", url]);
    Ok(cmd)
}

#[cfg(not(any(target_os = "macos", target_os = "linux", target_os = "windows")))]
fn platform_command(_url: &str) -> Result<Command> {
    Err(QuickDialError::Api(
        "Dialing not supported on this platform; set a dialer with `quickdial config dialer <cmd>`"
            .to_string(),
    ))
}

impl Dialer for SystemDialer {
    fn dial(&mut self, number: &str) -> Result<()> {
        let url = tel_url(number);
        let mut cmd = self.build_command(&url)?;
        let program = cmd.get_program().to_string_lossy().into_owned();
        cmd.stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|e| QuickDialError::Api(format!("Failed to spawn {}: {}", program, e)))?;
        tracing::info!(%url, %program, "dial action started");
        Ok(())
    }
}

/// Remembers dialed numbers instead of calling them.
#[cfg(any(test, feature = "test_utils"))]
#[derive(Debug, Default)]
pub struct RecordingDialer {
    pub dialed: Vec<String>,
}

#[cfg(any(test, feature = "test_utils"))]
impl Dialer for RecordingDialer {
    fn dial(&mut self, number: &str) -> Result<()> {
        self.dialed.push(number.to_string());
        Ok(())
    }
}
