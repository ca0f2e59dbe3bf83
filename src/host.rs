use std::cell::OnceCell;
use std::process::Command;
use tracing::{debug, error};

/// What the generator needs to know about the machine it runs on.
pub trait Host {
    /// Output of `uname`, or `None` when it cannot be run.
    fn system_name(&self) -> Option<String>;
    /// Path of `ranlib`, empty if it is not installed.
    fn ranlib(&self) -> String;
}

/// 真实系统, `uname` 只执行一次
#[derive(Default)]
pub struct System {
    uname: OnceCell<Option<String>>,
}

impl Host for System {
    fn system_name(&self) -> Option<String> {
        self.uname.get_or_init(probe_uname).clone()
    }

    fn ranlib(&self) -> String {
        run_command("which ranlib")
    }
}

fn probe_uname() -> Option<String> {
    match Command::new("uname").output() {
        Ok(output) if output.status.success() => {
            let name = String::from_utf8_lossy(&output.stdout).trim().to_string();
            debug!("os: {}", name);
            Some(name)
        }
        Ok(output) => {
            debug!("uname exited with status: {}", output.status);
            None
        }
        Err(e) => {
            debug!("Failed to execute uname: {}", e);
            None
        }
    }
}

/// Run `cmd` and return its trimmed stdout.
///
/// The command line is split on single spaces, no shell quoting. A failure
/// is reported and yields an empty string.
pub fn run_command(cmd: &str) -> String {
    let mut parts = cmd.split(' ');
    let program = parts.next().unwrap_or_default();
    match Command::new(program).args(parts).output() {
        Ok(output) if output.status.success() => {
            String::from_utf8_lossy(&output.stdout).trim().to_string()
        }
        Ok(output) => {
            error!("Could not run: {} ({})", cmd, output.status);
            String::new()
        }
        Err(e) => {
            error!("Could not run: {} ({})", cmd, e);
            String::new()
        }
    }
}
