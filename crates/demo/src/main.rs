use anyhow::Context;

use personae_demo::DemoConfig;

fn main() -> anyhow::Result<()> {
    personae_observability::init();

    let config = DemoConfig::from_env().context("invalid configuration")?;
    tracing::info!(
        first_name = %config.first_name,
        last_name = %config.last_name,
        gpa = config.gpa,
        "starting walkthrough"
    );

    let stdout = std::io::stdout();
    let report = personae_demo::run(&config, &mut stdout.lock())?;

    tracing::info!(
        equals = report.equals,
        reference_equals = report.reference_equals,
        "walkthrough finished"
    );
    Ok(())
}
