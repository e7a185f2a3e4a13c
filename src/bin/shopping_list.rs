use std::process;

use shopping_list::{cli::run_cli, cli::output, init};

fn main() {
    init();

    if let Err(err) = run_cli() {
        let prefs = output::OutputPreferences::default();
        eprintln!(
            "{}",
            output::styled(output::MessageKind::Error, format!("Error: {err}"), &prefs)
        );
        process::exit(1);
    }
}
