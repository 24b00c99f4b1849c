mod commands;
mod data;
mod glob;
mod import_sink;
mod options;
mod raster;
mod report;
mod sheet_name;
mod size_hint;
mod staging;

use std::process;

use structopt::StructOpt;

use crate::options::{Options, Subcommand};

fn main() {
    let options = Options::from_args();

    let log_filter = match options.global.verbosity {
        0 => "info",
        1 => "info,spriteslicer=debug,gridcut=debug",
        2 => "info,spriteslicer=trace,gridcut=trace",
        _ => "trace",
    };

    let log_env = env_logger::Env::default().default_filter_or(log_filter);

    env_logger::Builder::from_env(log_env)
        .format_module_path(false)
        .format_timestamp(None)
        .init();

    match run(options) {
        Ok(_) => {}
        Err(err) => {
            eprintln!("{}", error_message(&err));
            process::exit(1);
        }
    }
}

fn run(options: Options) -> anyhow::Result<()> {
    match options.command {
        Subcommand::Slice(slice_options) => commands::slice(options.global, slice_options)?,
        Subcommand::Stage(stage_options) => commands::stage(options.global, stage_options)?,
        Subcommand::Preview(preview_options) => {
            commands::preview(options.global, preview_options)?
        }
        Subcommand::SnapSize(snap_options) => commands::snap_size(options.global, snap_options)?,
    }

    Ok(())
}

/// Formats a command failure with its whole chain of causes on one line.
fn error_message(err: &anyhow::Error) -> String {
    format!("Error: {:#}", err)
}

#[cfg(test)]
mod test {
    use super::*;

    use anyhow::Context;

    #[test]
    fn error_chain_on_one_line() {
        let result: anyhow::Result<()> =
            Err(anyhow::anyhow!("unexpected end of file")).context("couldn't read knight.png");

        assert_eq!(
            error_message(&result.unwrap_err()),
            "Error: couldn't read knight.png: unexpected end of file"
        );
    }
}
