mod cli;
mod commands;

use clap::Parser;
use cli::{Cli, Commands, HistoryAction, SettingsAction};
use commands::history::HistoryFilter;

fn main() -> anyhow::Result<()> {
    // Logs go to stderr so command output stays pipeable
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Estimate {
            input,
            model,
            currency,
            ratio,
            save,
            json,
        } => commands::estimate::run(
            &input,
            model.as_deref(),
            currency.as_deref(),
            ratio,
            save,
            json,
        ),
        Commands::Optimize { input, apply, json } => commands::optimize::run(&input, apply, json),
        Commands::Compare {
            input,
            currency,
            json,
        } => commands::compare::run(&input, currency.as_deref(), json),
        Commands::Breakdown { input, model, json } => {
            commands::breakdown::run(&input, model.as_deref(), json)
        }
        Commands::Models => commands::models::run(),
        Commands::History {
            stats,
            search,
            starred,
            limit,
            action,
        } => {
            let filter = HistoryFilter {
                search,
                starred_only: starred,
                limit,
            };
            match action {
                Some(HistoryAction::List) | None if stats => commands::history::run_stats(&filter),
                Some(HistoryAction::List) | None => commands::history::run_list(&filter),
                Some(HistoryAction::Star { id }) => commands::history::run_star(&id, true),
                Some(HistoryAction::Unstar { id }) => commands::history::run_star(&id, false),
                Some(HistoryAction::Remove { id }) => commands::history::run_remove(&id),
                Some(HistoryAction::Clear) => commands::history::run_clear(),
                Some(HistoryAction::Export { format, output }) => {
                    commands::history::run_export(&filter, format, output.as_deref())
                }
            }
        }
        Commands::Settings { action } => match action {
            Some(SettingsAction::Show) | None => commands::settings::run_show(),
            Some(SettingsAction::Set {
                currency,
                ratio,
                theme,
            }) => commands::settings::run_set(currency.as_deref(), ratio, theme),
            Some(SettingsAction::Reset) => commands::settings::run_reset(),
        },
        Commands::Version => commands::version::run(),
    }
}
