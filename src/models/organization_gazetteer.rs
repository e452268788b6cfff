use crate::models::Tokenizer;
use crate::types::{OrganizationList, TokenIndex};
use crate::utils::{decompress_gzip_to_string, read_organization_list_from_string};
use crate::Error;
use log::debug;
use std::collections::HashMap;

#[cfg(feature = "embed-bytes")]
const COMPRESSED_ORGANIZATION_LIST_BYTES: &[u8] =
    include_bytes!(concat!(env!("OUT_DIR"), "/organization_list.csv.gz"));

/// Known organization names, stored as lowercased token sequences keyed by their first token.
#[derive(Debug, Default)]
pub struct OrganizationGazetteer {
    token_sequences_map: HashMap<String, Vec<Vec<String>>>,
}

impl OrganizationGazetteer {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Builds the gazetteer from the organization list embedded at compile time.
    pub fn embedded(tokenizer: &Tokenizer) -> Result<Self, Error> {
        #[cfg(feature = "embed-bytes")]
        {
            Self::from_compressed_csv(COMPRESSED_ORGANIZATION_LIST_BYTES, tokenizer)
        }

        #[cfg(not(feature = "embed-bytes"))]
        {
            let _ = tokenizer;
            log::warn!("Built without `embed-bytes`; organization gazetteer is empty");
            Ok(Self::empty())
        }
    }

    /// Builds the gazetteer from gzip-compressed CSV bytes.
    pub fn from_compressed_csv(compressed: &[u8], tokenizer: &Tokenizer) -> Result<Self, Error> {
        let csv = decompress_gzip_to_string(compressed)?;
        Self::from_csv(&csv, tokenizer)
    }

    pub fn from_csv(csv: &str, tokenizer: &Tokenizer) -> Result<Self, Error> {
        let organization_list = read_organization_list_from_string(csv)?;
        Ok(Self::from_organization_list(&organization_list, tokenizer))
    }

    pub fn from_organization_list(
        organization_list: &OrganizationList,
        tokenizer: &Tokenizer,
    ) -> Self {
        let mut token_sequences_map: HashMap<String, Vec<Vec<String>>> = HashMap::new();

        let names = organization_list
            .iter()
            .flat_map(|(name, alternate_names)| std::iter::once(name).chain(alternate_names));

        for name in names {
            let token_sequence: Vec<String> = tokenizer
                .tokenize_to_strings(name)
                .into_iter()
                .map(|token| token.to_lowercase())
                .collect();

            let Some(first_token) = token_sequence.first() else {
                continue;
            };

            let sequences = token_sequences_map.entry(first_token.clone()).or_default();
            if !sequences.contains(&token_sequence) {
                sequences.push(token_sequence);
            }
        }

        // Longest sequences first so the first hit is the longest match
        for sequences in token_sequences_map.values_mut() {
            sequences.sort_by(|a, b| b.len().cmp(&a.len()));
        }

        debug!(
            "Organization gazetteer holds {} name(s)",
            token_sequences_map.values().map(Vec::len).sum::<usize>()
        );

        Self {
            token_sequences_map,
        }
    }

    pub fn len(&self) -> usize {
        self.token_sequences_map.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.token_sequences_map.is_empty()
    }

    /// Length (in tokens) of the longest known name starting at `lowered_tokens[index]`.
    pub fn longest_match_at(&self, lowered_tokens: &[&str], index: TokenIndex) -> Option<usize> {
        let first_token = lowered_tokens.get(index)?;
        let sequences = self.token_sequences_map.get(*first_token)?;

        sequences
            .iter()
            .find(|sequence| {
                lowered_tokens
                    .get(index..index + sequence.len())
                    .is_some_and(|window| {
                        window
                            .iter()
                            .zip(sequence.iter())
                            .all(|(token, expected)| *token == expected.as_str())
                    })
            })
            .map(Vec::len)
    }
}
