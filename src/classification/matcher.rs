//! Compiled keyword matcher.
use aho_corasick::{AhoCorasick, AhoCorasickBuilder, MatchKind};
use tracing::warn;

use super::{KeywordDictionary, UNCATEGORIZED};

/// Matches statements against every keyword of a dictionary in one pass.
///
/// Keywords and statements are lowercased before matching, so the
/// comparison is case-insensitive beyond ASCII. Matching is plain substring
/// containment: `art` matches inside `party`.
#[derive(Debug, Clone)]
pub struct KeywordMatcher {
    categories: Vec<String>,
    strategy: Strategy,
}

#[derive(Debug, Clone)]
enum Strategy {
    /// Overlapping automaton; `pattern_category[pattern]` is the category index.
    Automaton {
        ac: AhoCorasick,
        pattern_category: Vec<usize>,
    },
    /// Lowercased keywords per category, scanned in order.
    Linear(Vec<Vec<String>>),
}

impl KeywordMatcher {
    #[must_use]
    pub fn new(dictionary: &KeywordDictionary) -> Self {
        let categories: Vec<String> = dictionary.category_names().map(String::from).collect();
        let lowered: Vec<Vec<String>> = dictionary
            .categories()
            .map(|(_, keywords)| keywords.iter().map(|k| k.to_lowercase()).collect())
            .collect();

        let mut patterns = Vec::new();
        let mut pattern_category = Vec::new();
        for (idx, keywords) in lowered.iter().enumerate() {
            for keyword in keywords {
                patterns.push(keyword.as_str());
                pattern_category.push(idx);
            }
        }

        let strategy = match AhoCorasickBuilder::new()
            .match_kind(MatchKind::Standard)
            .build(&patterns)
        {
            Ok(ac) => Strategy::Automaton {
                ac,
                pattern_category,
            },
            Err(error) => {
                warn!(error = %error, "keyword automaton unavailable, using linear scan");
                Strategy::Linear(lowered)
            }
        };

        Self {
            categories,
            strategy,
        }
    }

    /// Category of `fragment`: the first dictionary category with any keyword
    /// contained in it, or [`UNCATEGORIZED`].
    #[must_use]
    pub fn classify(&self, fragment: &str) -> &str {
        self.category_index(&fragment.to_lowercase())
            .and_then(|idx| self.categories.get(idx))
            .map_or(UNCATEGORIZED, String::as_str)
    }

    fn category_index(&self, lowered: &str) -> Option<usize> {
        match &self.strategy {
            Strategy::Automaton {
                ac,
                pattern_category,
            } => {
                let mut best: Option<usize> = None;
                for mat in ac.find_overlapping_iter(lowered) {
                    let idx = pattern_category[mat.pattern().as_usize()];
                    if best.is_none_or(|current| idx < current) {
                        best = Some(idx);
                        if idx == 0 {
                            break;
                        }
                    }
                }
                best
            }
            Strategy::Linear(keywords) => keywords
                .iter()
                .position(|list| list.iter().any(|keyword| lowered.contains(keyword.as_str()))),
        }
    }
}
