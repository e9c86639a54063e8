use clap::Parser;

use linkgate::cli::{Cli, Commands, ConfigCommands};
use linkgate::config::{get_config, init_config};
use linkgate::runtime::modes;
use linkgate::system::logging::init_logging;
use linkgate::system::panic_handler::{RunMode, install_panic_hook};

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Config {
            action: ConfigCommands::Generate { output },
        }) => {
            install_panic_hook(RunMode::Cli);
            exit_on_error(modes::run_config_generate(output.as_deref()));
        }
        Some(Commands::Check { paths, json }) => {
            install_panic_hook(RunMode::Cli);
            init_config(cli.config.as_deref());
            exit_on_error(modes::run_check(&paths, json));
        }
        Some(Commands::Serve) | None => {
            install_panic_hook(RunMode::Server);
            init_config(cli.config.as_deref());

            let _guard = match init_logging(&get_config().logging) {
                Ok(guard) => guard,
                Err(e) => {
                    eprintln!("{}", e.format_colored());
                    std::process::exit(1);
                }
            };

            modes::run_server().await?;
        }
    }

    Ok(())
}

fn exit_on_error(result: linkgate::errors::Result<()>) {
    if let Err(e) = result {
        eprintln!("{}", e.format_simple());
        std::process::exit(1);
    }
}
