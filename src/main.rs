// vcenv: Visual C++ toolchain environment importer
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Entry point.
//!
//! ```text
//! cli::parse() --> Config --> Logging --> Command Dispatch
//!   Locate | List | Print | Run | Config | Version
//! ```

use std::process::ExitCode;

use vcenv::cli::{self, Cli, Command};
use vcenv::cmd::config::run_config_command;
use vcenv::cmd::locate::{run_list_command, run_locate_command};
use vcenv::cmd::print::run_print_command;
use vcenv::cmd::run::run_run_command;
use vcenv::config::loader::ConfigLoader;
use vcenv::config::{CONFIG_FILE_NAME, Config, ENV_PREFIX};
use vcenv::logging::{LogConfig, init_logging};

use mimalloc::MiMalloc;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

fn main() -> ExitCode {
    let cli = cli::parse();

    if matches!(cli.command, Some(Command::Version)) {
        handle_version_command();
        return ExitCode::SUCCESS;
    }

    let (config, config_files) = match load_config(&cli) {
        Ok(loaded) => loaded,
        Err(e) => {
            eprintln!("Failed to load config: {e:#}");
            return ExitCode::FAILURE;
        }
    };

    let log_config = build_log_config(&config);
    let _log_guard = match init_logging(&log_config) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Failed to initialize logging: {e}");
            return ExitCode::FAILURE;
        }
    };

    dispatch_command(&cli, &config, &config_files)
}

fn build_log_config(config: &Config) -> LogConfig {
    let log_file = config
        .global
        .log_file
        .as_ref()
        .filter(|p| !p.as_os_str().is_empty())
        .map(|p| p.display().to_string());

    LogConfig::builder()
        .with_console_level(config.global.output_log_level)
        .with_file_level(config.global.file_log_level)
        .maybe_with_log_file(log_file)
        .build()
}

fn dispatch_command(cli: &Cli, config: &Config, config_files: &[String]) -> ExitCode {
    let result = match &cli.command {
        Some(Command::Version) => {
            handle_version_command();
            Ok(())
        }
        Some(Command::Config) => {
            run_config_command(config, config_files);
            Ok(())
        }
        Some(Command::Locate) => run_locate_command(config),
        Some(Command::List) => {
            run_list_command(config);
            Ok(())
        }
        Some(Command::Print(args)) => run_print_command(args, config),
        Some(Command::Run(args)) => match run_run_command(args, config) {
            Ok(code) => return code,
            Err(e) => Err(e),
        },
        None => {
            eprintln!("No command specified. Use --help for usage information.");
            Err(anyhow::anyhow!("No command specified"))
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn handle_version_command() {
    println!("{}", env!("CARGO_PKG_VERSION"));
}

fn build_config_loader(cli: &Cli) -> vcenv::error::Result<ConfigLoader> {
    let mut loader = ConfigLoader::new().add_toml_file_optional(CONFIG_FILE_NAME);
    for ini_path in &cli.global.inis {
        loader = loader.add_toml_file(ini_path);
    }
    loader = loader.with_env_prefix(ENV_PREFIX);

    let toolchain_overrides = match &cli.command {
        Some(Command::Print(args)) => args.toolchain.to_config_overrides(),
        Some(Command::Run(args)) => args.toolchain.to_config_overrides(),
        _ => Vec::new(),
    };
    for option in cli.global.to_config_overrides().iter().chain(&toolchain_overrides) {
        loader = loader.set_option(option)?;
    }
    Ok(loader)
}

fn load_config(cli: &Cli) -> vcenv::error::Result<(Config, Vec<String>)> {
    let loader = build_config_loader(cli)?;
    let files = loader.format_loaded_files();
    Ok((loader.build()?, files))
}
