//! Candidate ranking for the suggestion list.
//!
//! With no filter word active the catalog is presented as configured:
//! sectioned when sections exist, flat catalog order otherwise. A non-empty
//! filter word switches to fuzzy ranking over display labels and
//! descriptions. Ranking is a pure function of (catalog, filter word); ties
//! break by catalog order so repeated calls never reshuffle.

use nucleo_matcher::pattern::{CaseMatching, Normalization, Pattern};
use nucleo_matcher::{Config, Matcher, Utf32Str};

use crate::catalog::{CandidateKey, CandidateSection};

/// One row of the suggestion list: either a selectable key or a section
/// grouping of keys.
#[derive(Debug, Clone, PartialEq)]
pub enum Candidate {
    Key(CandidateKey),
    Section(CandidateSection),
}

/// Produce the ordered suggestion list for `filter_word`.
pub fn rank(
    keys: &[CandidateKey],
    sections: &[CandidateSection],
    filter_word: &str,
) -> Vec<Candidate> {
    if filter_word.is_empty() {
        if sections.is_empty() {
            return keys.iter().cloned().map(Candidate::Key).collect();
        }
        return sections.iter().cloned().map(Candidate::Section).collect();
    }

    let mut matcher = Matcher::new(Config::DEFAULT);
    let pattern = Pattern::parse(filter_word, CaseMatching::Ignore, Normalization::Smart);

    let mut buf = Vec::new();
    let mut scored: Vec<(u32, usize)> = Vec::new();
    for (index, key) in keys.iter().enumerate() {
        let label_score = pattern.score(
            Utf32Str::new(&key.display_label, &mut buf),
            &mut matcher,
        );
        // Description hits score just below label hits of equal quality
        let desc_score = pattern
            .score(Utf32Str::new(&key.description, &mut buf), &mut matcher)
            .map(|s| s.saturating_sub(1));

        if let Some(score) = max_score(label_score, desc_score) {
            scored.push((score, index));
        }
    }

    // Descending relevance, catalog order on ties
    scored.sort_by(|a, b| b.0.cmp(&a.0).then(a.1.cmp(&b.1)));
    scored
        .into_iter()
        .map(|(_, index)| Candidate::Key(keys[index].clone()))
        .collect()
}

/// Flatten a ranked list to its selectable keys, in display order.
pub fn selectable_keys(candidates: &[Candidate]) -> Vec<&CandidateKey> {
    let mut keys = Vec::new();
    for candidate in candidates {
        match candidate {
            Candidate::Key(key) => keys.push(key),
            Candidate::Section(section) => keys.extend(section.keys.iter()),
        }
    }
    keys
}

fn max_score(a: Option<u32>, b: Option<u32>) -> Option<u32> {
    match (a, b) {
        (Some(a), Some(b)) => Some(a.max(b)),
        (Some(a), None) => Some(a),
        (None, b) => b,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(identifier: &str, description: &str) -> CandidateKey {
        CandidateKey {
            identifier: identifier.to_string(),
            display_label: identifier.to_string(),
            description: description.to_string(),
        }
    }

    fn sample_keys() -> Vec<CandidateKey> {
        vec![
            key("browser.name", "Name of the browser"),
            key("level", "Severity level of the event"),
            key("device.family", "Family of the device"),
            key("release", "The version of the code deployed"),
        ]
    }

    #[test]
    fn test_empty_word_no_sections_returns_catalog_order() {
        let keys = sample_keys();
        let first = rank(&keys, &[], "");
        let second = rank(&keys, &[], "");

        assert_eq!(first, second);
        let identifiers: Vec<&str> = first
            .iter()
            .map(|c| match c {
                Candidate::Key(k) => k.identifier.as_str(),
                Candidate::Section(_) => panic!("no sections configured"),
            })
            .collect();
        assert_eq!(
            identifiers,
            ["browser.name", "level", "device.family", "release"]
        );
    }

    #[test]
    fn test_empty_word_with_sections_returns_groupings() {
        let keys = sample_keys();
        let sections = vec![
            CandidateSection {
                label: "Event".to_string(),
                keys: vec![keys[0].clone(), keys[1].clone()],
            },
            CandidateSection {
                label: "Device".to_string(),
                keys: vec![keys[2].clone()],
            },
        ];

        let ranked = rank(&keys, &sections, "");
        assert_eq!(ranked.len(), 2);
        assert!(matches!(&ranked[0], Candidate::Section(s) if s.label == "Event"));
        assert!(matches!(&ranked[1], Candidate::Section(s) if s.label == "Device"));
    }

    #[test]
    fn test_fuzzy_word_flattens_and_matches_label() {
        let keys = sample_keys();
        let sections = vec![CandidateSection {
            label: "Everything".to_string(),
            keys: keys.clone(),
        }];

        let ranked = rank(&keys, &sections, "brow");
        assert!(!ranked.is_empty());
        // Sections never appear in fuzzy results
        assert!(ranked.iter().all(|c| matches!(c, Candidate::Key(_))));
        assert!(matches!(&ranked[0], Candidate::Key(k) if k.identifier == "browser.name"));
    }

    #[test]
    fn test_fuzzy_matches_description_too() {
        let keys = sample_keys();
        let ranked = rank(&keys, &[], "severity");
        assert!(
            ranked
                .iter()
                .any(|c| matches!(c, Candidate::Key(k) if k.identifier == "level"))
        );
    }

    #[test]
    fn test_fuzzy_is_case_insensitive() {
        let keys = sample_keys();
        let ranked = rank(&keys, &[], "BROW");
        assert!(matches!(&ranked[0], Candidate::Key(k) if k.identifier == "browser.name"));
    }

    #[test]
    fn test_no_match_yields_empty_list() {
        let keys = sample_keys();
        let ranked = rank(&keys, &[], "zzzzqqqq");
        assert!(ranked.is_empty());
    }

    #[test]
    fn test_empty_catalog_is_not_a_fault() {
        assert!(rank(&[], &[], "").is_empty());
        assert!(rank(&[], &[], "level").is_empty());
    }

    #[test]
    fn test_selectable_keys_flattens_sections() {
        let keys = sample_keys();
        let candidates = vec![
            Candidate::Section(CandidateSection {
                label: "Event".to_string(),
                keys: vec![keys[0].clone(), keys[1].clone()],
            }),
            Candidate::Key(keys[2].clone()),
        ];

        let flat = selectable_keys(&candidates);
        let identifiers: Vec<&str> = flat.iter().map(|k| k.identifier.as_str()).collect();
        assert_eq!(identifiers, ["browser.name", "level", "device.family"]);
    }
}
