use fielddrift_cli::{build_cli, logging, App, CliConfig};

fn main() {
    let matches = build_cli().get_matches();
    let config = CliConfig::from_matches(&matches);
    logging::init(config.log_filter());

    let result = App::from_config(&config).and_then(|app| {
        let stdout = std::io::stdout();
        app.run(&matches, &mut stdout.lock())
    });

    match result {
        Ok(outcome) => std::process::exit(outcome.exit_code()),
        Err(e) => {
            tracing::error!("{e:#}");
            eprintln!("error: {e:#}");
            std::process::exit(2);
        }
    }
}
