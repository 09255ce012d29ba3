use clap::{ArgAction, Parser, ValueEnum};
use faq_core::FormInput;
use faq_logging::LogDestination;
use log::LevelFilter;
use url::Url;

#[derive(Debug, Parser)]
#[command(name = "faq_app")]
#[command(about = "Submit a page for FAQ generation and follow the job to completion")]
#[command(version)]
pub struct Cli {
    /// Page to generate FAQs from
    pub url: String,

    /// Platform code (fb, ig, x or df)
    #[arg(short, long, default_value = "df")]
    pub platform: String,

    /// Output language
    #[arg(short, long, default_value = "en")]
    pub language: String,

    /// Number of FAQ entries to generate
    #[arg(short = 'n', long, default_value_t = 10)]
    pub faq_count: u32,

    /// Base URL of the FAQ generator service
    #[arg(short, long, default_value = "http://127.0.0.1:5000/")]
    pub server: Url,

    /// Where log output goes
    #[arg(long, value_enum, default_value_t = LogArg::File)]
    pub log: LogArg,

    /// Verbosity level
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogArg {
    Terminal,
    File,
    Both,
}

impl From<LogArg> for LogDestination {
    fn from(arg: LogArg) -> Self {
        match arg {
            LogArg::Terminal => LogDestination::Terminal,
            LogArg::File => LogDestination::File,
            LogArg::Both => LogDestination::Both,
        }
    }
}

impl Cli {
    pub fn form_input(&self) -> FormInput {
        FormInput {
            url: self.url.clone(),
            platform: self.platform.clone(),
            language: self.language.clone(),
            faq_count: self.faq_count,
        }
    }

    pub fn log_level(&self) -> LevelFilter {
        match self.verbose {
            0 => LevelFilter::Info,
            1 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    }
}
