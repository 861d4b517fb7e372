//! Part-of-speech tagging.
//!
//! The metric library only depends on the [`PosTagger`] trait, so any Penn Treebank tagger
//! can be plugged in. [`LexiconTagger`] is the built-in implementation: a deterministic
//! closed-class lexicon with suffix and context rules, no model files required.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::LazyLock;

use crate::error::AppError;

/// Penn Treebank noun tags.
pub const NOUN_TAGS: &[&str] = &["NN", "NNS", "NNP", "NNPS"];

/// A token paired with its Penn Treebank tag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaggedToken {
    pub token: String,
    pub tag: String,
}

impl TaggedToken {
    pub fn new(token: impl Into<String>, tag: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            tag: tag.into(),
        }
    }

    /// True for NN, NNS, NNP and NNPS.
    pub fn is_noun(&self) -> bool {
        NOUN_TAGS.contains(&self.tag.as_str())
    }

    /// True for IN, and for TO when `include_to` is set.
    pub fn is_adposition(&self, include_to: bool) -> bool {
        self.tag == "IN" || (include_to && self.tag == "TO")
    }
}

/// Tagging capability consumed by the tagging cache.
///
/// Implementations must be deterministic and return exactly one tagged token per input
/// token, in order.
pub trait PosTagger: Send + Sync {
    fn tag(&self, tokens: &[String]) -> Result<Vec<TaggedToken>, AppError>;
}

const DETERMINERS: &[&str] = &[
    "the", "a", "an", "this", "that", "these", "those", "every", "each", "some", "any", "no",
    "all", "another", "either", "neither",
];

const PREPOSITIONS: &[&str] = &[
    "in", "on", "at", "of", "for", "with", "by", "from", "about", "into", "onto", "over",
    "under", "after", "before", "between", "through", "during", "without", "within",
    "against", "among", "around", "behind", "beyond", "near", "since", "until", "upon",
    "across", "along", "toward", "towards", "beneath", "beside", "besides", "despite",
    "inside", "outside", "throughout", "via", "because", "if", "while", "although", "though",
    "whether", "than", "as", "like", "unless", "whereas", "till", "per", "above", "below",
];

const PERSONAL_PRONOUNS: &[&str] = &[
    "i", "you", "he", "she", "it", "we", "they", "me", "him", "us", "them", "myself",
    "yourself", "himself", "herself", "itself", "ourselves", "themselves",
];

/// Pronouns that can head a clause; a following noun guess is retagged as a verb.
const SUBJECT_PRONOUNS: &[&str] = &["i", "you", "he", "she", "it", "we", "they"];

const POSSESSIVE_PRONOUNS: &[&str] = &["my", "your", "his", "her", "its", "our", "their"];

const MODALS: &[&str] = &[
    "can", "could", "will", "would", "shall", "should", "may", "might", "must",
];

const CONJUNCTIONS: &[&str] = &["and", "or", "but", "nor", "yet"];

const ADVERBS: &[&str] = &[
    "not", "very", "too", "also", "just", "never", "always", "often", "then", "now", "here",
    "again", "soon", "still", "already", "ever", "almost", "even", "perhaps", "once", "away",
    "back", "later", "together", "so", "sometimes", "quite", "rather", "yesterday", "today",
    "tomorrow",
];

const NUMBERS: &[&str] = &[
    "one", "two", "three", "four", "five", "six", "seven", "eight", "nine", "ten", "eleven",
    "twelve", "twenty", "thirty", "hundred", "thousand", "million",
];

const INTERJECTIONS: &[&str] = &["oh", "ah", "yes", "hello", "hi", "wow", "okay", "ok"];

/// Auxiliaries and frequent irregular verbs with a fixed tag.
const VERB_FORMS: &[(&str, &str)] = &[
    ("be", "VB"),
    ("am", "VBP"),
    ("are", "VBP"),
    ("is", "VBZ"),
    ("was", "VBD"),
    ("were", "VBD"),
    ("been", "VBN"),
    ("being", "VBG"),
    ("have", "VBP"),
    ("has", "VBZ"),
    ("had", "VBD"),
    ("do", "VBP"),
    ("does", "VBZ"),
    ("did", "VBD"),
    ("done", "VBN"),
    ("said", "VBD"),
    ("went", "VBD"),
    ("gone", "VBN"),
    ("came", "VBD"),
    ("saw", "VBD"),
    ("seen", "VBN"),
    ("took", "VBD"),
    ("taken", "VBN"),
    ("gave", "VBD"),
    ("given", "VBN"),
    ("made", "VBD"),
    ("got", "VBD"),
    ("knew", "VBD"),
    ("known", "VBN"),
    ("thought", "VBD"),
    ("told", "VBD"),
    ("found", "VBD"),
    ("left", "VBD"),
    ("felt", "VBD"),
    ("kept", "VBD"),
    ("began", "VBD"),
    ("ran", "VBD"),
    ("sat", "VBD"),
    ("stood", "VBD"),
    ("ate", "VBD"),
    ("wrote", "VBD"),
    ("written", "VBN"),
    ("met", "VBD"),
    ("brought", "VBD"),
    ("bought", "VBD"),
    ("became", "VBD"),
    ("forgot", "VBD"),
    ("forgotten", "VBN"),
    ("lost", "VBD"),
    ("heard", "VBD"),
];

const ADJECTIVE_SUFFIXES: &[&str] = &[
    "ous", "ful", "able", "ible", "ive", "less", "ic", "ish", "ary", "ent", "ant",
];

// Words in several closed classes resolve to the first one registered.
static LEXICON: LazyLock<HashMap<&'static str, &'static str>> = LazyLock::new(|| {
    let mut lexicon = HashMap::new();
    let classes: &[(&[&str], &str)] = &[
        (DETERMINERS, "DT"),
        (PREPOSITIONS, "IN"),
        (PERSONAL_PRONOUNS, "PRP"),
        (POSSESSIVE_PRONOUNS, "PRP$"),
        (MODALS, "MD"),
        (CONJUNCTIONS, "CC"),
        (ADVERBS, "RB"),
        (NUMBERS, "CD"),
        (INTERJECTIONS, "UH"),
    ];
    lexicon.insert("to", "TO");
    lexicon.insert("there", "EX");
    for &(word, tag) in VERB_FORMS {
        lexicon.entry(word).or_insert(tag);
    }
    for (words, tag) in classes {
        for &word in words.iter() {
            lexicon.entry(word).or_insert(*tag);
        }
    }
    for (word, tag) in [
        ("what", "WP"),
        ("who", "WP"),
        ("whom", "WP"),
        ("which", "WDT"),
        ("whose", "WP$"),
        ("when", "WRB"),
        ("where", "WRB"),
        ("why", "WRB"),
        ("how", "WRB"),
    ] {
        lexicon.entry(word).or_insert(tag);
    }
    lexicon
});

/// Rule-based Penn Treebank tagger.
#[derive(Debug, Default, Clone, Copy)]
pub struct LexiconTagger;

impl LexiconTagger {
    pub fn new() -> Self {
        Self
    }

    fn guess_by_suffix(word: &str) -> &'static str {
        let len = word.chars().count();
        if len > 4 && word.ends_with("ly") {
            "RB"
        } else if len > 4 && word.ends_with("ing") {
            "VBG"
        } else if len > 3 && word.ends_with("ed") {
            "VBD"
        } else if len > 4 && word.ends_with("est") {
            "JJS"
        } else if len > 4 && ADJECTIVE_SUFFIXES.iter().any(|s| word.ends_with(s)) {
            "JJ"
        } else if len > 3
            && word.ends_with('s')
            && !word.ends_with("ss")
            && !word.ends_with("us")
            && !word.ends_with("is")
        {
            "NNS"
        } else {
            "NN"
        }
    }

    fn tag_word(word: &str, previous: Option<(&str, &str)>) -> &'static str {
        let lower = word.to_lowercase();
        if let Some(&tag) = LEXICON.get(lower.as_str()) {
            return tag;
        }

        let guess = Self::guess_by_suffix(&lower);
        match previous {
            Some((_, "TO" | "MD")) if guess == "NN" => "VB",
            Some((prev, "PRP")) if SUBJECT_PRONOUNS.contains(&prev) => match guess {
                "NN" if matches!(prev, "he" | "she" | "it") => "VBZ",
                "NN" => "VBP",
                "NNS" if matches!(prev, "he" | "she" | "it") => "VBZ",
                other => other,
            },
            _ => guess,
        }
    }
}

impl PosTagger for LexiconTagger {
    fn tag(&self, tokens: &[String]) -> Result<Vec<TaggedToken>, AppError> {
        let mut tagged: Vec<TaggedToken> = Vec::with_capacity(tokens.len());
        for token in tokens {
            let previous = tagged.last().map(|t| (t.token.as_str(), t.tag.as_str()));
            let lowered_prev = previous.map(|(word, tag)| (word.to_lowercase(), tag));
            let tag = Self::tag_word(
                token,
                lowered_prev.as_ref().map(|(word, tag)| (word.as_str(), *tag)),
            );
            tagged.push(TaggedToken::new(token.clone(), tag));
        }
        Ok(tagged)
    }
}
