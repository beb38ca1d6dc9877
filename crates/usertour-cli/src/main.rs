mod cli;
mod commands;

use std::process::ExitCode;

use tracing_subscriber::EnvFilter;

use crate::cli::Command;

#[tokio::main]
async fn main() -> ExitCode {
    let args = cli::parse();

    let log_directive = args.log_level.as_deref().unwrap_or("usertour=info");
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::from_default_env().add_directive(
                log_directive
                    .parse()
                    .unwrap_or_else(|_| "usertour=info".parse().unwrap()),
            ),
        )
        .init();

    let themes_dir = args.themes_dir.as_deref();
    let result = match args.command {
        Command::Defaults { format } => commands::defaults(format.into()),
        Command::Resolve { file } => {
            commands::locate(&file, themes_dir).and_then(|p| commands::resolve_file(&p))
        }
        Command::Css { file, surface } => {
            commands::locate(&file, themes_dir).and_then(|p| commands::css(&p, surface))
        }
        Command::Validate { file } => {
            commands::locate(&file, themes_dir).and_then(|p| commands::validate(&p))
        }
        Command::Variations { file } => {
            commands::locate(&file, themes_dir).and_then(|p| commands::variations(&p))
        }
        Command::Watch { file, surface } => match commands::locate(&file, themes_dir) {
            Ok(path) => commands::watch(path, surface).await,
            Err(e) => Err(e),
        },
    };

    match result {
        Ok(code) => code,
        Err(e) => {
            tracing::error!("{e}");
            eprintln!("error: {e}");
            ExitCode::from(2)
        }
    }
}
