use std::process::Command;

use anyhow::{Context, bail};
use ninja_config::NinjaConfig;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::ServeArgs;

/// Handle `ncms launch`: run `ncms serve` as a child with `PORT` set and
/// exit with its status.
pub fn handle(args: &ServeArgs, config: &NinjaConfig, flags: &GlobalFlags) -> anyhow::Result<()> {
    let exe = std::env::current_exe().context("failed to locate the ncms executable")?;
    let mut command = serve_command(exe, args.port.unwrap_or(config.server.port), flags);

    tracing::info!(?command, "starting admin server");
    let status = command.status().context("failed to start ncms serve")?;

    match status.code() {
        Some(0) => Ok(()),
        Some(code) => {
            tracing::warn!(code, "admin server exited");
            std::process::exit(code)
        }
        None => bail!("admin server was terminated by a signal"),
    }
}

/// The child command line; stdio is inherited.
fn serve_command(exe: std::path::PathBuf, port: u16, flags: &GlobalFlags) -> Command {
    let mut command = Command::new(exe);
    command.arg("serve").env("PORT", port.to_string());
    if flags.quiet {
        command.arg("--quiet");
    }
    if flags.verbose {
        command.arg("--verbose");
    }
    command
}

#[cfg(test)]
mod tests {
    use std::ffi::OsStr;
    use std::path::PathBuf;

    use pretty_assertions::assert_eq;

    use super::serve_command;
    use crate::cli::{GlobalFlags, OutputFormat};

    #[test]
    fn child_runs_serve_with_port_in_env() {
        let flags = GlobalFlags {
            format: OutputFormat::Json,
            quiet: false,
            verbose: true,
        };
        let command = serve_command(PathBuf::from("/usr/bin/ncms"), 8080, &flags);

        assert_eq!(command.get_program(), OsStr::new("/usr/bin/ncms"));
        let args: Vec<&OsStr> = command.get_args().collect();
        assert_eq!(args, vec![OsStr::new("serve"), OsStr::new("--verbose")]);
        let envs: Vec<_> = command.get_envs().collect();
        assert_eq!(envs, vec![(OsStr::new("PORT"), Some(OsStr::new("8080")))]);
    }
}
