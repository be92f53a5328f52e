use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Arg, ArgMatches, Command, ValueHint};
use log::LevelFilter;

use spamscreen::config::PipelineConfig;
use spamscreen::pipeline::SpamPipeline;

fn main() -> Result<()> {
    env_logger::Builder::default()
        .filter_level(LevelFilter::Error)
        .parse_env(env_logger::Env::default().filter_or("SPAMSCREEN_LOG", "error,spamscreen=info"))
        .init();

    let matches = Command::new("spamscreen")
        .version(clap::crate_version!())
        .about("SMS spam classification with cross-validated logistic regression")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new("train")
                .about("Train on a labeled TSV corpus, report the AUC, and classify messages")
                .arg(
                    Arg::new("data")
                        .help("Path to the tab-separated corpus (header row, then Label<TAB>Message)")
                        .required(true)
                        .value_parser(clap::value_parser!(PathBuf))
                        .value_hint(ValueHint::FilePath),
                )
                .arg(
                    Arg::new("config")
                        .short('c')
                        .long("config")
                        .help("Path to a JSON pipeline configuration file")
                        .value_parser(clap::value_parser!(PathBuf))
                        .value_hint(ValueHint::FilePath),
                )
                .arg(
                    Arg::new("folds")
                        .long("folds")
                        .help("Number of cross-validation folds. Overrides the configuration file.")
                        .value_parser(clap::value_parser!(usize)),
                )
                .arg(
                    Arg::new("threshold")
                        .short('t')
                        .long("threshold")
                        .help("Spam decision threshold in [0, 1]. Overrides the configuration file.")
                        .value_parser(clap::value_parser!(f32)),
                )
                .arg(
                    Arg::new("seed")
                        .long("seed")
                        .help("Fold shuffle seed. Overrides the configuration file.")
                        .value_parser(clap::value_parser!(u64)),
                )
                .arg(
                    Arg::new("classify")
                        .short('m')
                        .long("classify")
                        .help("Message to classify with the trained model. May be repeated.")
                        .action(clap::ArgAction::Append)
                        .value_hint(ValueHint::Other),
                ),
        )
        .get_matches();

    match matches.subcommand() {
        Some(("train", sub_m)) => handle_train(sub_m),
        _ => unreachable!("Subcommand is required by CLI configuration"),
    }
}

fn load_config(matches: &ArgMatches) -> Result<PipelineConfig> {
    let mut config = if let Some(config_path) = matches.get_one::<PathBuf>("config") {
        log::info!("Loading pipeline config from {:?}", config_path);
        let text = fs::read_to_string(config_path)
            .with_context(|| format!("Failed to read config file {:?}", config_path))?;
        serde_json::from_str(&text)
            .with_context(|| format!("Failed to parse config file {:?}", config_path))?
    } else {
        PipelineConfig::default()
    };

    if let Some(&folds) = matches.get_one::<usize>("folds") {
        config.num_folds = folds;
    }
    if let Some(&threshold) = matches.get_one::<f32>("threshold") {
        config.decision_threshold = threshold;
    }
    if let Some(&seed) = matches.get_one::<u64>("seed") {
        config.seed = seed;
    }

    Ok(config)
}

fn handle_train(matches: &ArgMatches) -> Result<()> {
    let data_path: &PathBuf = matches.get_one("data").unwrap();
    let config = load_config(matches)?;

    let pipeline = SpamPipeline::new(config)?;
    let report = pipeline.fit(data_path)?;

    println!("The AUC is {}", report.mean_cv_auc);

    if let Some(messages) = matches.get_many::<String>("classify") {
        for message in messages {
            let prediction = report.model.predict(message)?;
            let output = if prediction.is_spam { "Spam" } else { "Not Spam" };
            println!("The message '{}' is '{}'", message, output);
        }
    }

    Ok(())
}
