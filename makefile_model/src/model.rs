/// 目标平台
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    Unix,
    Windows,
}

impl Platform {
    /// Classify the output of `uname`. `None` means the probe could not run,
    /// which is what a native Windows shell looks like.
    pub fn from_uname(uname: Option<&str>) -> Self {
        let Some(output) = uname else {
            return Platform::Windows;
        };
        let name = output.lines().next().unwrap_or("").trim().to_lowercase();
        if name.starts_with("cygwin") {
            Platform::Windows
        } else {
            Platform::Unix
        }
    }

    pub fn object_extension(self) -> &'static str {
        match self {
            Platform::Unix => ".o",
            Platform::Windows => ".obj",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArtifactKind {
    Application,
    StaticLibrary,
    SharedLibrary,
}

/// 单个系统的编译/链接命令
///
/// One row of the toolchain table. Only the PIC compiler and the shared
/// linker are emitted today (Unix shared libraries); the other two columns
/// complete the record so rows can be added without changing its shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Toolchain {
    pub compiler: &'static str,
    /// Compiler invocation producing position independent code.
    pub pic_compiler: &'static str,
    pub plain_compiler: &'static str,
    pub shared_linker: &'static str,
}
