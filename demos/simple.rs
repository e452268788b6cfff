use entity_sniffer::{count_named_entities, AnnotatorConfig, RuleAnnotator};

fn main() {
    env_logger::init();

    let text = "Contact ACME Corp on 5th January or email me at a@b.com";

    let annotator = RuleAnnotator::new(AnnotatorConfig::default()).unwrap();
    let classification = count_named_entities(text, &annotator).unwrap();

    println!("Classification for the given text \"{}\"", text);
    for (brand, frequency) in &classification.entities {
        println!("entity {}: {}", brand, frequency);
    }
    for (word, frequency) in &classification.words {
        println!("word {}: {}", word, frequency);
    }
}
