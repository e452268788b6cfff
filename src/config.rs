use crate::constants::{
    DEFAULT_BRAND_LABELS, DEFAULT_MAX_WORD_LEN, DEFAULT_MIN_WORD_LEN, DEFAULT_REPLACEMENT_LABELS,
    SMS_KEYWORDS,
};
use crate::models::ClassifierConfig;

pub const DEFAULT_CLASSIFIER_CONFIG: &ClassifierConfig<'static> = &ClassifierConfig {
    min_word_len: DEFAULT_MIN_WORD_LEN,
    max_word_len: DEFAULT_MAX_WORD_LEN,
    brand_labels: DEFAULT_BRAND_LABELS,
    replacement_labels: DEFAULT_REPLACEMENT_LABELS,
    sms_keywords: SMS_KEYWORDS,
};
