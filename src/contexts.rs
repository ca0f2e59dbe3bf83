use serde::Serialize;

#[derive(Serialize)]
pub struct MakefileContext<'a> {
    pub name: &'a str,
    pub banner: &'a str,
    pub url: &'a str,
    pub license: &'a str,
    pub compiler: &'a str,
    /// Shared linker on Unix, `/lib` or `/dll` on Windows.
    pub linker: &'a str,
    pub sources: &'a str,
    pub objects: &'a str,
    pub ranlib: &'a str,
    pub shared: bool,
}
