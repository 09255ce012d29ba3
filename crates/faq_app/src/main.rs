//! Terminal host for the FAQ generator form.
mod cli;
mod page;

use anyhow::{anyhow, Context};
use clap::Parser;
use faq_core::ControllerConfig;
use faq_engine::{ClientSettings, Controller, Outcome, ReqwestJobApi};
use faq_logging::faq_info;

use cli::Cli;
use page::TerminalPage;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    faq_logging::initialize(cli.log.into(), cli.log_level());

    let settings = ClientSettings {
        base_url: cli.server.clone(),
        ..ClientSettings::default()
    };
    let api = ReqwestJobApi::new(settings).context("building HTTP client")?;
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("starting async runtime")?;

    let mut controller = Controller::new(api, TerminalPage::new(), ControllerConfig::default());
    faq_info!("Submitting {} to {}", cli.url, cli.server);

    match runtime.block_on(controller.submit(cli.form_input())) {
        Outcome::Redirected { location, .. } => {
            println!("Result: {location}");
            Ok(())
        }
        Outcome::Errored { message, .. } => Err(anyhow!(message)),
        Outcome::Ignored => Ok(()),
    }
}
