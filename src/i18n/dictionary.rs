use super::Language;
use crate::error::LocaleError;
use ahash::{AHashMap, AHashSet};
use itertools::Itertools;
use serde_json::Value;
use std::sync::{Arc, OnceLock};

const EN_CATALOG: &str = include_str!("../../assets/locales/en.json");
const PL_CATALOG: &str = include_str!("../../assets/locales/pl.json");

/// An immutable, per-language tree of translated content.
///
/// Leaves are strings or ordered sequences (of strings or objects). Every
/// language is expected to expose the same key paths; [`Dictionary::coverage`]
/// reports where they diverge.
#[derive(Debug, Clone)]
pub struct Dictionary {
    trees: AHashMap<Language, Value>,
}

impl Dictionary {
    /// The catalog compiled into the crate, parsed once per process.
    pub fn builtin() -> Result<Arc<Dictionary>, LocaleError> {
        static BUILTIN: OnceLock<Result<Arc<Dictionary>, LocaleError>> = OnceLock::new();
        BUILTIN
            .get_or_init(|| {
                Dictionary::from_json(&[(Language::En, EN_CATALOG), (Language::Pl, PL_CATALOG)])
                    .map(Arc::new)
            })
            .clone()
    }

    /// Builds a dictionary from one JSON document per language.
    pub fn from_json(sources: &[(Language, &str)]) -> Result<Self, LocaleError> {
        let values = sources
            .iter()
            .map(|(language, json)| {
                serde_json::from_str::<Value>(json)
                    .map(|value| (*language, value))
                    .map_err(|e| LocaleError::Catalog {
                        language: language.code().to_string(),
                        message: e.to_string(),
                    })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Self::from_values(values)
    }

    /// Builds a dictionary from already-parsed trees. Each root must be an object.
    pub fn from_values(
        values: impl IntoIterator<Item = (Language, Value)>,
    ) -> Result<Self, LocaleError> {
        let mut trees = AHashMap::new();
        for (language, value) in values {
            if !value.is_object() {
                return Err(LocaleError::CatalogRoot(language.code().to_string()));
            }
            trees.insert(language, value);
        }
        Ok(Self { trees })
    }

    /// The root of a language's tree, if that language was loaded.
    pub fn root(&self, language: Language) -> Option<&Value> {
        self.trees.get(&language)
    }

    /// Languages with a loaded tree, in [`Language::ALL`] order.
    pub fn languages(&self) -> impl Iterator<Item = Language> + '_ {
        Language::ALL
            .into_iter()
            .filter(|language| self.trees.contains_key(language))
    }

    /// All leaf key paths of a language, sorted. Sequences count as leaves.
    pub fn key_paths(&self, language: Language) -> Vec<String> {
        let mut paths = Vec::new();
        if let Some(root) = self.root(language) {
            collect_paths(root, &mut String::new(), &mut paths);
        }
        paths.sort();
        paths
    }

    /// Compares every supported language against the union of all key paths.
    pub fn coverage(&self) -> CoverageReport {
        let per_language: Vec<(Language, AHashSet<String>)> = Language::ALL
            .into_iter()
            .map(|language| (language, self.key_paths(language).into_iter().collect()))
            .collect();
        let union: AHashSet<&String> = per_language.iter().flat_map(|(_, paths)| paths).collect();

        let missing = per_language
            .iter()
            .filter_map(|(language, paths)| {
                let absent: Vec<String> = union
                    .iter()
                    .filter(|path| !paths.contains(path.as_str()))
                    .map(|path| (*path).clone())
                    .sorted()
                    .collect();
                (!absent.is_empty()).then_some((*language, absent))
            })
            .collect();

        CoverageReport {
            total_paths: union.len(),
            missing,
        }
    }
}

fn collect_paths(value: &Value, prefix: &mut String, out: &mut Vec<String>) {
    match value {
        Value::Object(map) if !map.is_empty() => {
            for (key, child) in map {
                let restore = prefix.len();
                if !prefix.is_empty() {
                    prefix.push('.');
                }
                prefix.push_str(key);
                collect_paths(child, prefix, out);
                prefix.truncate(restore);
            }
        }
        _ if !prefix.is_empty() => out.push(prefix.clone()),
        _ => {}
    }
}

/// Result of [`Dictionary::coverage`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoverageReport {
    /// Number of distinct leaf paths across all languages.
    pub total_paths: usize,
    /// Languages lacking at least one path, with the absent paths sorted.
    pub missing: Vec<(Language, Vec<String>)>,
}

impl CoverageReport {
    pub fn is_complete(&self) -> bool {
        self.missing.is_empty()
    }

    pub fn missing_for(&self, language: Language) -> &[String] {
        self.missing
            .iter()
            .find(|(l, _)| *l == language)
            .map(|(_, paths)| paths.as_slice())
            .unwrap_or(&[])
    }
}
