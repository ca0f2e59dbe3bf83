pub const UNIX_APP: &str = include_str!("templates/unix_app.tmpl");
/// Static and shared libraries; the link step is chosen by the `shared` flag.
pub const UNIX_LIB: &str = include_str!("templates/unix_lib.tmpl");

pub const WIN_APP: &str = include_str!("templates/win_app.tmpl");
/// Static libraries and DLLs; `link /lib` or `link /dll`.
pub const WIN_LIB: &str = include_str!("templates/win_lib.tmpl");
