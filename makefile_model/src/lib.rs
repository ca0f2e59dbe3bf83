mod model;

pub use crate::model::{ArtifactKind, Platform, Toolchain};
use regex::Regex;

/// Command used when the system has no row in the toolchain table.
pub const FALLBACK_COMMAND: &str = "cc";

/// 各系统的编译命令表, 以 `uname` 的输出为键
const TOOLCHAINS: &[(&str, Toolchain)] = &[
    (
        "SunOS",
        Toolchain {
            compiler: "cc",
            pic_compiler: "cc -KPIC",
            plain_compiler: "cc",
            shared_linker: "ld -G",
        },
    ),
    (
        "Linux",
        Toolchain {
            compiler: "gcc",
            pic_compiler: "gcc -fPIC",
            plain_compiler: "gcc",
            shared_linker: "ld -shared",
        },
    ),
    (
        "Darwin",
        Toolchain {
            compiler: "cc",
            pic_compiler: "cc -fPIC",
            plain_compiler: "cc",
            shared_linker: "cc -dynamiclib",
        },
    ),
    (
        "FreeBSD",
        Toolchain {
            compiler: "cc",
            pic_compiler: "cc -fPIC",
            plain_compiler: "cc",
            shared_linker: "cc -shared",
        },
    ),
];

impl Toolchain {
    /// Look up the commands for a system name as printed by `uname`.
    /// Only the first line is considered and the match is case sensitive.
    pub fn lookup(system: &str) -> Option<&'static Toolchain> {
        let system = system.lines().next().unwrap_or("").trim();
        TOOLCHAINS
            .iter()
            .find(|(name, _)| *name == system)
            .map(|(_, toolchain)| toolchain)
    }

    /// Compiler and linker for a shared library build, falling back to
    /// [`FALLBACK_COMMAND`] for unknown or undetectable systems.
    pub fn shared_commands(system: Option<&str>) -> (&'static str, &'static str) {
        match system.and_then(Toolchain::lookup) {
            Some(toolchain) => (toolchain.pic_compiler, toolchain.shared_linker),
            None => (FALLBACK_COMMAND, FALLBACK_COMMAND),
        }
    }
}

/// 源文件列表, 空格分隔, 原样保留
pub fn source_list(sources: &[String]) -> String {
    sources.join(" ")
}

/// 由源文件列表推导目标文件列表
///
/// The substitution runs over the joined list, so every `.<letters>` run is
/// rewritten, including ones inside directory names (`v1.beta/x.c` becomes
/// `v1.o/x.o`). Edit the generated Makefile if that is not what you want.
pub fn object_list(sources: &[String], platform: Platform) -> Result<String, regex::Error> {
    let re_suffix = Regex::new(r"\.[a-zA-Z]+")?;
    let joined = source_list(sources);
    Ok(re_suffix
        .replace_all(&joined, platform.object_extension())
        .into_owned())
}
