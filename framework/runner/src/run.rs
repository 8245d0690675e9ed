use anyhow::Context;
use tsung_scenario::prelude::ScenarioDocument;

use crate::cli::TsungScenarioCli;
use crate::persist::{persist_to_path, persist_to_temp_file};
use crate::tsung::Tsung;

/// Store the scenario and run Tsung against it, or just print it when `--print-only` is given.
pub fn run(document: &ScenarioDocument, cli: &TsungScenarioCli) -> anyhow::Result<()> {
    log::info!(
        "Scenario has {} client(s), {} server(s), {} phase(s) and {} session(s)",
        document.clients().len(),
        document.servers().len(),
        document.phases().len(),
        document.sessions().len()
    );

    if cli.print_only {
        println!("{}", document.serialize());
        return Ok(());
    }

    // Keeps a temporary file alive until Tsung exits.
    let _temp_file;
    let config_path = match &cli.output {
        Some(path) => {
            persist_to_path(document, path).context("Failed to write scenario file")?;
            path.clone()
        }
        None => {
            let file =
                persist_to_temp_file(document).context("Failed to write scenario file")?;
            let path = file.path().to_path_buf();
            _temp_file = file;
            path
        }
    };

    let stdout = Tsung::new(config_path)?
        .run()
        .context("Failed to run Tsung")?;
    println!("{stdout}");

    Ok(())
}
