use clap::{Parser, ValueEnum};
use entity_sniffer::constants::{
    DEFAULT_BRAND_LABELS, DEFAULT_MAX_WORD_LEN, DEFAULT_MIN_WORD_LEN, DEFAULT_REPLACEMENT_LABELS,
};
use entity_sniffer::{
    AnnotatorConfig, Classification, Classifier, ClassifierConfig, ClassifyRequest, EntityLabel,
    Error, RuleAnnotator, DEFAULT_CLASSIFIER_CONFIG,
};
use log::{error, info};
use std::io::{self, Read};

#[derive(Debug, Clone, Copy, Default, ValueEnum)]
enum OutputFormat {
    /// `{"entities": {...}, "words": {...}}`
    #[default]
    Json,
    /// Entities table, then words table, one per line
    Plain,
}

/// Reads a text message from stdin and prints its brand and word frequency tables.
#[derive(Parser, Debug)]
#[command(name = "entity-sniffer-cli", version)]
struct Args {
    /// Shortest reported text unit, in characters
    #[arg(long, default_value_t = DEFAULT_MIN_WORD_LEN)]
    min_word_len: usize,

    /// Longest reported text unit, in characters
    #[arg(long, default_value_t = DEFAULT_MAX_WORD_LEN)]
    max_word_len: usize,

    /// Entity label reported as a brand (repeatable; defaults to ORG)
    #[arg(long = "brand-label", value_name = "LABEL")]
    brand_labels: Vec<EntityLabel>,

    /// Entity label reported by name in the words table (repeatable; defaults to DATE and TIME)
    #[arg(long = "replacement-label", value_name = "LABEL")]
    replacement_labels: Vec<EntityLabel>,

    /// Treat stdin as a JSON request body of the form {"inputmsg": "..."}
    #[arg(long)]
    json_request: bool,

    /// Output format
    #[arg(long, default_value = "json")]
    format: OutputFormat,

    /// Skip the embedded organization list
    #[arg(long)]
    no_gazetteer: bool,
}

fn main() {
    env_logger::init();

    let args = Args::parse();

    let mut input = String::new();
    if let Err(e) = io::stdin().read_to_string(&mut input) {
        error!("Failed to read from stdin: {}", e);
        std::process::exit(1);
    }

    match run(&args, &input) {
        Ok(output) => println!("{}", output),
        Err(e) => {
            error!("Error classifying message: {}", e);
            std::process::exit(1);
        }
    }
}

fn run(args: &Args, input: &str) -> Result<String, Error> {
    let brand_labels = labels_or_default(&args.brand_labels, DEFAULT_BRAND_LABELS);
    let replacement_labels =
        labels_or_default(&args.replacement_labels, DEFAULT_REPLACEMENT_LABELS);

    let config = ClassifierConfig {
        min_word_len: args.min_word_len,
        max_word_len: args.max_word_len,
        brand_labels,
        replacement_labels,
        ..*DEFAULT_CLASSIFIER_CONFIG
    };
    config.validate()?;

    let annotator = RuleAnnotator::new(AnnotatorConfig {
        organization_gazetteer: !args.no_gazetteer,
        ..AnnotatorConfig::default()
    })?;
    let classifier = Classifier::new(&config, &annotator);

    let classification: Classification = if args.json_request {
        let request = ClassifyRequest::from_json(input)?;
        classifier.classify(request.text())
    } else {
        classifier.classify_text(input.trim_end_matches(['\r', '\n']))
    };

    info!(
        "Found {} brand(s) and {} word key(s)",
        classification.entities.len(),
        classification.words.len()
    );

    match args.format {
        OutputFormat::Json => classification.to_json(),
        OutputFormat::Plain => classification.to_plain(),
    }
}

fn labels_or_default<'a>(
    labels: &'a [EntityLabel],
    default: &'a [EntityLabel],
) -> &'a [EntityLabel] {
    if labels.is_empty() {
        default
    } else {
        labels
    }
}
