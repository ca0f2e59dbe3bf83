use makefile_model::{ArtifactKind, Platform};

pub const PROGRAM: &str = env!("CARGO_PKG_NAME");
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const URL: &str = "genmake-go https://github.com/muquit/genmake-go";
pub const LICENSE: &str = "License is MIT";

/// `genmake-go v1.0.1`
pub fn version_line() -> String {
    format!("{PROGRAM} v{VERSION}")
}

/// 一次调用经过校验的参数
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Options {
    pub platform: Platform,
    pub kind: ArtifactKind,
    /// Program or library file name written into the Makefile.
    pub name: String,
    pub sources: Vec<String>,
}
