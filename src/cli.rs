use crate::config::{Options, URL, VERSION};
use crate::host::Host;
use clap::Parser;
use makefile_model::{ArtifactKind, Platform};
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Parser)]
#[command(
    name = "genmake-go",
    disable_help_flag = true,
    disable_version_flag = true,
    args_override_self = true
)]
pub struct Cli {
    /// generate Makefile for Unix
    #[arg(long)]
    pub unix: bool,
    /// generate Makefile for MS Windows
    #[arg(long)]
    pub win: bool,
    /// generate Makefile for an application
    #[arg(long, value_name = "name")]
    pub app: Option<String>,
    /// generate Makefile for a static library
    #[arg(long, value_name = "name")]
    pub lib: Option<String>,
    /// generate Makefile for a shared library in Unix and DLL in Windows
    #[arg(long, value_name = "name")]
    pub dll: Option<String>,
    /// show version info
    #[arg(long)]
    pub version: bool,
    /// enable debug output
    #[arg(long)]
    pub debug: bool,
    /// show help
    #[arg(long)]
    pub help: bool,
    /// 源文件
    #[arg(value_name = "FILE")]
    pub sources: Vec<String>,
}

/// 解析结果
#[derive(Debug, PartialEq, Eq)]
pub enum Action {
    Version,
    Usage,
    Generate(Options),
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum UsageError {
    #[error("--unix and --win are mutually exclusive")]
    PlatformConflict,
    #[error("--lib and --dll are mutually exclusive")]
    LibDllConflict,
    #[error("--app and --lib are mutually exclusive")]
    AppLibConflict,
    #[error("one of --app, --lib or --dll is required")]
    MissingArtifact,
    #[error("no source files given")]
    MissingSources,
}

impl UsageError {
    /// Missing input is answered with the full usage text rather than a message.
    pub fn shows_usage(&self) -> bool {
        matches!(self, UsageError::MissingArtifact | UsageError::MissingSources)
    }
}

/// `--app=` is the same as not passing `--app` at all.
fn named(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.is_empty())
}

impl Cli {
    /// Validate the flags. The host is probed only when neither `--unix`
    /// nor `--win` was given.
    pub fn resolve(&self, host: &impl Host) -> Result<Action, UsageError> {
        if self.version {
            return Ok(Action::Version);
        }
        if self.help {
            return Ok(Action::Usage);
        }
        if self.unix && self.win {
            return Err(UsageError::PlatformConflict);
        }
        debug!("unix: {}, win: {}", self.unix, self.win);

        let platform = if self.unix {
            Platform::Unix
        } else if self.win {
            Platform::Windows
        } else {
            let platform = Platform::from_uname(host.system_name().as_deref());
            debug!("guessed platform: {:?}", platform);
            platform
        };

        let (app, lib, dll) = (named(&self.app), named(&self.lib), named(&self.dll));
        if app.is_none() && lib.is_none() && dll.is_none() {
            return Err(UsageError::MissingArtifact);
        }
        if lib.is_some() && dll.is_some() {
            return Err(UsageError::LibDllConflict);
        }
        if app.is_some() && lib.is_some() {
            return Err(UsageError::AppLibConflict);
        }
        if self.sources.is_empty() {
            return Err(UsageError::MissingSources);
        }

        // --app 优先, 其次 --lib, 最后 --dll
        let (kind, name) = match (app, lib, dll) {
            (Some(name), _, _) => (ArtifactKind::Application, name),
            (None, Some(name), _) => (ArtifactKind::StaticLibrary, name),
            (None, None, Some(name)) => (ArtifactKind::SharedLibrary, name),
            (None, None, None) => return Err(UsageError::MissingArtifact),
        };

        Ok(Action::Generate(Options {
            platform,
            kind,
            name: name.to_string(),
            sources: self.sources.clone(),
        }))
    }
}

pub fn usage() -> String {
    format!(
        r#"genmake-go v{VERSION} {URL}
A program to generate nice/simple Makefiles for Linux/Unix and MS Windows

Usage: genmake-go [options] file...
Where the options include:
    --unix      generate Makefile for Unix
    --win       generate Makefile for MS Windows
    --app=name  generate Makefile for an application
    --lib=name  generate Makefile for a static library
    --dll=name  generate Makefile for a shared library in Unix and DLL in Windows
    --version   show version info
    --debug     print diagnostics to stderr
    --help      show this help

Example:
    genmake-go --unix --app=myapp *.c > Makefile
    genmake-go --win --app=myapp.exe main.c bar.c > Makefile.win
    genmake-go --unix --lib=libmyapp.a main.c bar.c > Makefile
    genmake-go --win --lib=myapp.lib main.c bar.c > Makefile.win
    genmake-go --unix --dll=libmyapp.so main.c bar.c > Makefile
    genmake-go --win --dll=myapp.dll main.c bar.c > Makefile.win

If no --unix or --win flag is specified, OS type will be guessed

Edit the generated Makefile if needed.
"#
    )
}
