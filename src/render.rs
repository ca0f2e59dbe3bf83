use crate::config::{LICENSE, Options, PROGRAM, URL, VERSION};
use crate::contexts::MakefileContext;
use crate::host::Host;
use crate::templates::{UNIX_APP, UNIX_LIB, WIN_APP, WIN_LIB};
use anyhow::Context as _;
use chrono::{DateTime, Local};
use makefile_model::{ArtifactKind, FALLBACK_COMMAND, Platform, Toolchain, object_list, source_list};
use tinytemplate::TinyTemplate;
use tracing::debug;

/// RFC 1123 layout with a numeric zone, e.g. `Mon, 02 Jan 2006 15:04:05 +0000`.
const RFC1123: &str = "%a, %d %b %Y %H:%M:%S %z";

pub fn banner(now: &DateTime<Local>) -> String {
    format!("Created with {PROGRAM} v{VERSION} on {}", now.format(RFC1123))
}

fn select_template(platform: Platform, kind: ArtifactKind) -> &'static str {
    match (platform, kind) {
        (Platform::Unix, ArtifactKind::Application) => UNIX_APP,
        (Platform::Unix, _) => UNIX_LIB,
        (Platform::Windows, ArtifactKind::Application) => WIN_APP,
        (Platform::Windows, _) => WIN_LIB,
    }
}

/// Produce the Makefile text for `opts`.
///
/// Unix libraries ask the host for `ranlib`; Unix shared libraries also
/// look up the PIC compiler and linker for the host system.
pub fn render_makefile(opts: &Options, host: &impl Host, now: DateTime<Local>) -> anyhow::Result<String> {
    let sources = source_list(&opts.sources);
    let objects = object_list(&opts.sources, opts.platform).context("deriving object file names")?;
    let banner = banner(&now);

    let ranlib = match (opts.platform, opts.kind) {
        (Platform::Unix, ArtifactKind::StaticLibrary | ArtifactKind::SharedLibrary) => host.ranlib(),
        _ => String::new(),
    };

    let (compiler, linker) = match (opts.platform, opts.kind) {
        (Platform::Unix, ArtifactKind::SharedLibrary) => {
            let system = host.system_name();
            debug!("OS: {:?}", system);
            Toolchain::shared_commands(system.as_deref())
        }
        (Platform::Windows, ArtifactKind::StaticLibrary) => (FALLBACK_COMMAND, "/lib"),
        (Platform::Windows, ArtifactKind::SharedLibrary) => (FALLBACK_COMMAND, "/dll"),
        (_, ArtifactKind::Application) | (Platform::Unix, ArtifactKind::StaticLibrary) => {
            (FALLBACK_COMMAND, "")
        }
    };

    let ctx = MakefileContext {
        name: &opts.name,
        banner: &banner,
        url: URL,
        license: LICENSE,
        compiler,
        linker,
        sources: &sources,
        objects: &objects,
        ranlib: &ranlib,
        shared: opts.kind == ArtifactKind::SharedLibrary,
    };

    let mut tt = TinyTemplate::new();
    tt.set_default_formatter(&tinytemplate::format_unescaped);
    tt.add_template("makefile", select_template(opts.platform, opts.kind))
        .context("parsing Makefile template")?;

    // 渲染模板
    let content = tt.render("makefile", &ctx).context("rendering Makefile template")?;
    Ok(content)
}
