use std::io::{self, BufWriter};

use exceptions::{GenerationSummary, Generator, GeneratorConfig};

use crate::cli::Cli;
use crate::error::{Result, ResultExt};
use crate::ui;

pub fn execute(cli: Cli) -> Result<()> {
    let verbose = cli.verbose;
    let config = GeneratorConfig {
        status_prefix: cli.status_prefix,
        base_class: cli.base_class,
        status_service: cli.service_name,
        ..GeneratorConfig::default()
    };
    let generator = Generator::new(config);

    if verbose {
        ui::status_message("Reading error table from stdin");
    }

    let stdin = io::stdin().lock();
    let mut stdout = BufWriter::new(io::stdout().lock());
    let summary = generator
        .generate_from_reader(stdin, &mut stdout)
        .with_context(|| "Generating exception classes")?;

    if verbose {
        report(&summary, &generator.config().base_class);
    }

    Ok(())
}

fn report(summary: &GenerationSummary, base_class: &str) {
    ui::success_message(&format!(
        "Generated {} classes under {base_class}",
        summary.total_classes()
    ));
    ui::summary_line("Rows matched", summary.rows_matched);
    ui::summary_line("Client errors", summary.client_rows);
    ui::summary_line("Server errors", summary.server_rows);
    ui::summary_line("Exception classes", summary.exception_classes);
    ui::summary_line("Status-code classes", summary.status_classes);

    if summary.duplicate_rows > 0 {
        ui::info_message(&format!(
            "Skipped {} duplicate error name(s)",
            summary.duplicate_rows
        ));
    }
    if summary.rows_skipped > 0 {
        ui::info_message(&format!(
            "Ignored {} table row(s) without the four-column error shape",
            summary.rows_skipped
        ));
    }
    if summary.rows_matched == 0 {
        ui::warning_message("No error rows found in input");
    }
}
