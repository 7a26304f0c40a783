mod app;

use anyhow::Result;
use log::info;

fn main() -> Result<()> {
    let cli = app::Cli::parse_args();

    // Initialiser le logger
    app::init_logger(cli.verbose);

    info!("Démarrage de write-list");

    // Exécuter l'application
    let result = app::run(cli);

    info!("Fin de write-list");

    result
}
