//! Hunspell-style affix checker
//!
//! Parses the `SFX`/`PFX` classes of an affix file, expands every lexicon
//! entry through its flagged rules, and answers "is this an accepted
//! surface form" by membership in the expanded set. This is the
//! confirmation oracle the dictionary builder runs every candidate word
//! through; inflection synthesis never bypasses it.

use rustc_hash::{FxHashMap, FxHashSet};

/// One unit of an affix condition: a literal char or a character class
#[derive(Debug, Clone)]
enum CondUnit {
    Any,
    Class { chars: Vec<char>, negated: bool },
}

impl CondUnit {
    fn matches(&self, c: char) -> bool {
        match self {
            Self::Any => true,
            Self::Class { chars, negated } => chars.contains(&c) != *negated,
        }
    }
}

/// Parsed affix condition, e.g. `[^aeiou]y` or `.`
#[derive(Debug, Clone)]
struct Condition {
    units: Vec<CondUnit>,
}

impl Condition {
    fn parse(text: &str) -> Self {
        let mut units = Vec::new();
        let mut chars = text.chars().peekable();

        while let Some(c) = chars.next() {
            match c {
                '.' => units.push(CondUnit::Any),
                '[' => {
                    let negated = chars.peek() == Some(&'^');
                    if negated {
                        chars.next();
                    }
                    let mut class = Vec::new();
                    for inner in chars.by_ref() {
                        if inner == ']' {
                            break;
                        }
                        class.push(inner);
                    }
                    units.push(CondUnit::Class {
                        chars: class,
                        negated,
                    });
                }
                literal => units.push(CondUnit::Class {
                    chars: vec![literal],
                    negated: false,
                }),
            }
        }

        Self { units }
    }

    /// Condition applies to the tail of the word (suffix rules)
    fn matches_tail(&self, word: &str) -> bool {
        let chars: Vec<char> = word.chars().collect();
        if chars.len() < self.units.len() {
            return false;
        }
        let offset = chars.len() - self.units.len();
        self.units
            .iter()
            .zip(&chars[offset..])
            .all(|(unit, &c)| unit.matches(c))
    }

    /// Condition applies to the head of the word (prefix rules)
    fn matches_head(&self, word: &str) -> bool {
        let chars: Vec<char> = word.chars().collect();
        if chars.len() < self.units.len() {
            return false;
        }
        self.units
            .iter()
            .zip(&chars)
            .all(|(unit, &c)| unit.matches(c))
    }
}

/// A single strip/add rule within an affix class
#[derive(Debug, Clone)]
struct AffixRule {
    strip: String,
    add: String,
    condition: Condition,
}

/// All rules sharing one flag character
#[derive(Debug, Clone)]
struct AffixClass {
    cross_product: bool,
    rules: Vec<AffixRule>,
}

/// The parsed `SFX`/`PFX` tables of an affix file
#[derive(Debug, Clone, Default)]
pub struct AffixRules {
    prefixes: FxHashMap<char, AffixClass>,
    suffixes: FxHashMap<char, AffixClass>,
}

impl AffixRules {
    /// Parse the affix file text
    ///
    /// Unknown directives (`SET`, `TRY`, comments) are skipped; only the
    /// `SFX`/`PFX` tables matter here.
    #[must_use]
    pub fn parse(aff_text: &str) -> Self {
        let mut rules = Self::default();

        for line in aff_text.lines() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let tokens: Vec<&str> = line.split_whitespace().collect();
            let is_prefix = match tokens.first() {
                Some(&"PFX") => true,
                Some(&"SFX") => false,
                _ => continue,
            };

            let Some(flag) = tokens.get(1).and_then(|t| t.chars().next()) else {
                continue;
            };
            let table = if is_prefix {
                &mut rules.prefixes
            } else {
                &mut rules.suffixes
            };

            // Header line: SFX <flag> <Y/N> <count>
            if tokens.len() == 4 && tokens[3].parse::<usize>().is_ok() {
                table.insert(
                    flag,
                    AffixClass {
                        cross_product: tokens[2] == "Y",
                        rules: Vec::new(),
                    },
                );
                continue;
            }

            // Rule line: SFX <flag> <strip> <add> <condition>
            if tokens.len() >= 5 {
                let strip = if tokens[2] == "0" { "" } else { tokens[2] };
                if let Some(class) = table.get_mut(&flag) {
                    class.rules.push(AffixRule {
                        strip: strip.to_string(),
                        add: tokens[3].to_string(),
                        condition: Condition::parse(tokens[4]),
                    });
                }
            }
        }

        rules
    }

    /// Suffix forms of a base word for one flag (base not included)
    fn suffix_forms(&self, base: &str, flag: char) -> Vec<(String, bool)> {
        let Some(class) = self.suffixes.get(&flag) else {
            return Vec::new();
        };
        class
            .rules
            .iter()
            .filter(|rule| rule.condition.matches_tail(base) && base.ends_with(&rule.strip))
            .map(|rule| {
                let stem = &base[..base.len() - rule.strip.len()];
                (format!("{stem}{}", rule.add), class.cross_product)
            })
            .collect()
    }

    /// Prefix forms of a word for one flag
    fn prefix_forms(&self, word: &str, flag: char) -> Vec<String> {
        let Some(class) = self.prefixes.get(&flag) else {
            return Vec::new();
        };
        class
            .rules
            .iter()
            .filter(|rule| rule.condition.matches_head(word) && word.starts_with(&rule.strip))
            .map(|rule| format!("{}{}", rule.add, &word[rule.strip.len()..]))
            .collect()
    }

    fn prefix_is_cross(&self, flag: char) -> bool {
        self.prefixes.get(&flag).is_some_and(|c| c.cross_product)
    }
}

/// Membership oracle over all surface forms the lexicon + affix rules accept
#[derive(Debug, Clone)]
pub struct SpellChecker {
    surface_forms: FxHashSet<String>,
}

impl SpellChecker {
    /// Build the checker from affix ruleset text and `.dic` lexicon text
    ///
    /// The `.dic` format is a count line followed by `word/FLAGS` entries.
    /// Every entry is expanded through its flagged suffix and prefix rules,
    /// including prefix-times-suffix cross products where both classes opt
    /// in.
    #[must_use]
    pub fn from_sources(aff_text: &str, dic_text: &str) -> Self {
        let rules = AffixRules::parse(aff_text);
        let mut surface_forms = FxHashSet::default();

        for entry in dic_entries(dic_text) {
            let (base, flags) = split_entry(entry);
            let base = base.to_lowercase();
            if base.is_empty() {
                continue;
            }

            surface_forms.insert(base.clone());

            // Suffixed forms; cross-eligible ones also take prefixes below
            let mut cross_targets = vec![base.clone()];
            for flag in flags.chars() {
                for (form, cross) in rules.suffix_forms(&base, flag) {
                    if cross {
                        cross_targets.push(form.clone());
                    }
                    surface_forms.insert(form);
                }
            }

            for flag in flags.chars() {
                if !rules.prefix_is_cross(flag) {
                    continue;
                }
                for target in &cross_targets {
                    for form in rules.prefix_forms(target, flag) {
                        surface_forms.insert(form);
                    }
                }
            }
        }

        Self { surface_forms }
    }

    /// Whether the word is an accepted surface form
    #[must_use]
    pub fn correct(&self, word: &str) -> bool {
        self.surface_forms.contains(&word.to_lowercase())
    }

    /// Number of accepted surface forms
    #[must_use]
    pub fn form_count(&self) -> usize {
        self.surface_forms.len()
    }
}

/// Iterate `.dic` entries, skipping the count header and blanks
pub(crate) fn dic_entries(dic_text: &str) -> impl Iterator<Item = &str> {
    dic_text
        .lines()
        .skip(1)
        .map(str::trim)
        .filter(|line| !line.is_empty())
}

/// Split `word/FLAGS` into its parts; flags default to empty
pub(crate) fn split_entry(entry: &str) -> (&str, &str) {
    match entry.split_once('/') {
        Some((word, flags)) => (word, flags),
        None => (entry, ""),
    }
}
