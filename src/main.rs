mod cli;
mod config;
mod contexts;
mod host;
mod logging;
mod render;
mod templates;

use crate::cli::{Action, Cli};
use crate::config::version_line;
use crate::host::System;
use crate::render::render_makefile;
use chrono::Local;
use clap::Parser;
use std::io::{self, Write};
use std::process::ExitCode;
use tracing::{debug, error};

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            // 参数错误统一返回 1
            e.print().ok();
            return ExitCode::FAILURE;
        }
    };
    logging::init(cli.debug);

    match run(&cli) {
        Ok(code) => code,
        Err(e) => {
            error!("{:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> anyhow::Result<ExitCode> {
    let host = System::default();
    let mut stdout = io::stdout().lock();

    let opts = match cli.resolve(&host) {
        Ok(Action::Version) => {
            writeln!(stdout, "{}", version_line())?;
            return Ok(ExitCode::SUCCESS);
        }
        Ok(Action::Usage) => {
            eprint!("{}", cli::usage());
            return Ok(ExitCode::FAILURE);
        }
        Ok(Action::Generate(opts)) => opts,
        Err(e) if e.shows_usage() => {
            debug!("{}", e);
            eprint!("{}", cli::usage());
            return Ok(ExitCode::FAILURE);
        }
        Err(e) => {
            error!("{}", e);
            return Ok(ExitCode::FAILURE);
        }
    };

    debug!("generating {:?} for {:?}", opts.kind, opts.platform);
    let makefile = render_makefile(&opts, &host, Local::now())?;
    writeln!(stdout, "{}", makefile)?;
    stdout.flush()?;
    Ok(ExitCode::SUCCESS)
}
