use std::process::{Command, Output};

fn genmake(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_genmake-go"))
        .args(args)
        .output()
        .expect("failed to run genmake-go")
}

fn stdout(out: &Output) -> String {
    String::from_utf8_lossy(&out.stdout).into_owned()
}

fn stderr(out: &Output) -> String {
    String::from_utf8_lossy(&out.stderr).into_owned()
}

#[test]
fn version_exits_zero_regardless_of_other_flags() {
    let expected = format!("genmake-go v{}\n", env!("CARGO_PKG_VERSION"));
    for args in [
        &["--version"][..],
        &["--version", "--unix", "--win"],
        &["--lib=a", "--dll=b", "--version", "--help"],
    ] {
        let out = genmake(args);
        assert_eq!(out.status.code(), Some(0), "{args:?}");
        assert_eq!(stdout(&out), expected);
    }
}

#[test]
fn version_is_1_0_1() {
    assert_eq!(stdout(&genmake(&["--version"])), "genmake-go v1.0.1\n");
}

#[test]
fn help_exits_one_with_usage_on_stderr() {
    let out = genmake(&["--help"]);
    assert_eq!(out.status.code(), Some(1));
    assert!(stdout(&out).is_empty());
    assert!(stderr(&out).contains("Usage: genmake-go"));
}

#[test]
fn platform_flags_are_exclusive() {
    for args in [
        &["--unix", "--win"][..],
        &["--unix", "--win", "--app=x", "a.c"],
        &["--win", "--unix", "--dll=x", "a.c"],
    ] {
        let out = genmake(args);
        assert_eq!(out.status.code(), Some(1), "{args:?}");
        assert!(stderr(&out).contains("--unix and --win are mutually exclusive"));
        assert!(stdout(&out).is_empty());
    }
}

#[test]
fn lib_and_dll_are_exclusive() {
    let out = genmake(&["--unix", "--lib=x", "--dll=y", "a.c"]);
    assert_eq!(out.status.code(), Some(1));
    assert!(stderr(&out).contains("--lib and --dll are mutually exclusive"));
}

#[test]
fn app_and_lib_are_exclusive() {
    let out = genmake(&["--win", "--app=x", "--lib=y", "a.c"]);
    assert_eq!(out.status.code(), Some(1));
    assert!(stderr(&out).contains("--app and --lib are mutually exclusive"));
}

#[test]
fn missing_sources_prints_usage() {
    let out = genmake(&["--unix", "--app=myapp"]);
    assert_eq!(out.status.code(), Some(1));
    assert!(stdout(&out).is_empty());
    assert!(stderr(&out).contains("Usage: genmake-go"));
}

#[test]
fn missing_artifact_prints_usage() {
    let out = genmake(&["--unix", "main.c"]);
    assert_eq!(out.status.code(), Some(1));
    assert!(stderr(&out).contains("Usage: genmake-go"));
}

#[test]
fn unknown_flag_exits_one() {
    let out = genmake(&["--bogus"]);
    assert_eq!(out.status.code(), Some(1));
}

#[test]
fn unix_app_end_to_end() {
    let out = genmake(&["--unix", "--app=myapp", "main.c", "util.c"]);
    assert_eq!(out.status.code(), Some(0));
    let text = stdout(&out);
    let lines: Vec<&str> = text.lines().collect();
    assert!(lines.contains(&"PROGNAME= myapp"));
    assert!(lines.contains(&"SRCS = main.c util.c"));
    assert!(lines.contains(&"OBJS = main.o util.o"));
    assert!(lines[1].starts_with("# Created with genmake-go v1.0.1 on "));
    assert!(text.ends_with("core *~\n"));
}

#[test]
fn windows_lib_end_to_end() {
    let out = genmake(&["--win", "--lib=myapp.lib", "main.c"]);
    assert_eq!(out.status.code(), Some(0));
    let text = stdout(&out);
    assert!(text.contains("LIBRARY= myapp.lib\n"));
    assert!(text.contains("\tlink /lib /OUT:$(LIBRARY) $(OBJS) \n"));
    assert!(text.lines().any(|l| l == "OBJS = main.obj"));
}

#[test]
fn debug_lines_go_to_stderr() {
    let out = genmake(&["--debug", "--win", "--app=x.exe", "a.c"]);
    assert_eq!(out.status.code(), Some(0));
    assert!(stderr(&out).lines().any(|l| l.starts_with("(debug) ")));
    assert!(!stdout(&out).contains("(debug)"));
}

#[test]
fn repeated_flags_are_accepted() {
    let out = genmake(&["--unix", "--unix", "--app=a", "--app=b", "x.c"]);
    assert_eq!(out.status.code(), Some(0), "{}", stderr(&out));
    assert!(stdout(&out).lines().any(|l| l == "PROGNAME= b"));
}
