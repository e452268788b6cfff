use criterion::{black_box, criterion_group, criterion_main, Criterion};
use entity_sniffer::{
    AnnotatorConfig, Classifier, RuleAnnotator, Tokenizer, DEFAULT_CLASSIFIER_CONFIG,
};

const MESSAGE: &str =
    "Your PayPal payment to ACME Corp was received on 5th January. Visit paypal.com/help or reply STOP";

fn benchmark_classify(c: &mut Criterion) {
    let annotator = RuleAnnotator::new(AnnotatorConfig::default()).unwrap();
    let classifier = Classifier::new(DEFAULT_CLASSIFIER_CONFIG, &annotator);

    c.bench_function("classify_message", |b| {
        b.iter(|| classifier.classify(black_box(Some(MESSAGE))))
    });
}

fn benchmark_tokenize(c: &mut Criterion) {
    let tokenizer = Tokenizer::message_parser();

    c.bench_function("tokenize_message", |b| {
        b.iter(|| tokenizer.tokenize(black_box(MESSAGE)))
    });
}

fn benchmark_annotator_construction(c: &mut Criterion) {
    c.bench_function("build_annotator", |b| {
        b.iter(|| RuleAnnotator::new(black_box(AnnotatorConfig::default())).unwrap())
    });
}

criterion_group!(
    benches,
    benchmark_classify,
    benchmark_tokenize,
    benchmark_annotator_construction
);
criterion_main!(benches);
