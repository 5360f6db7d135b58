/*!
Registry manager for cryptographic suites.

Suites are collected by a `SuiteRegistryBuilder` and frozen into an
immutable `SuiteRegistry`. Names are case-insensitive: both registration
and lookup lowercase the name before touching the table.
*/

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use crate::core::crypto::suites::register_builtin_suites;
use crate::core::crypto::traits::Suite;
use crate::core::error::RegistryError;

/// Shared handle to a registered suite
pub type SuiteHandle = Arc<dyn Suite>;

/// Lookup key for a suite name.
///
/// Folds one `char` at a time, so there is no context-sensitive mapping
/// such as the word-final sigma of `str::to_lowercase`.
fn normalize(name: &str) -> String {
    name.chars().flat_map(char::to_lowercase).collect()
}

/// Collects suites before the registry is frozen
#[derive(Default)]
pub struct SuiteRegistryBuilder {
    suites: HashMap<String, SuiteHandle>,
}

impl SuiteRegistryBuilder {
    /// Create an empty builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a builder holding every built-in suite of this build
    pub fn with_defaults() -> Self {
        let mut builder = Self::new();
        register_builtin_suites(&mut builder);
        builder
    }

    /// Register a suite under its lowercased self-reported name.
    ///
    /// A suite whose name matches an existing entry replaces it.
    pub fn register(&mut self, suite: SuiteHandle) {
        let key = normalize(&suite.name());
        log::debug!("Registering suite {:?}", key);
        if self.suites.insert(key.clone(), suite).is_some() {
            log::warn!("Suite {:?} registered more than once, replacing the earlier entry", key);
        }
    }

    /// Register a suite and return the builder
    pub fn with_suite(mut self, suite: SuiteHandle) -> Self {
        self.register(suite);
        self
    }

    /// Register every suite in `suites`, in order
    pub fn extend<I>(&mut self, suites: I)
    where
        I: IntoIterator<Item = SuiteHandle>,
    {
        for suite in suites {
            self.register(suite);
        }
    }

    /// Freeze the collected suites into a registry
    pub fn build(self) -> SuiteRegistry {
        SuiteRegistry {
            suites: self.suites,
        }
    }
}

/// Immutable name-to-suite table
#[derive(Clone, Default)]
pub struct SuiteRegistry {
    suites: HashMap<String, SuiteHandle>,
}

/// Summary of a registered suite
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde-support", derive(serde::Serialize, serde::Deserialize))]
pub struct SuiteInfo {
    /// Self-reported suite name
    pub name: String,
    /// Name of the suite's group
    pub group: String,
    /// Marshaled scalar size
    pub scalar_len: usize,
    /// Marshaled point size
    pub point_len: usize,
    /// Output size of the suite's hash
    pub hash_len: usize,
}

impl SuiteRegistry {
    /// Registry of every built-in suite of this build
    pub fn with_defaults() -> Self {
        SuiteRegistryBuilder::with_defaults().build()
    }

    /// Look up a suite by name, ignoring case
    pub fn find(&self, name: &str) -> Result<SuiteHandle, RegistryError> {
        log::trace!("Looking up suite {:?}", name);
        self.suites
            .get(&normalize(name))
            .cloned()
            .ok_or(RegistryError::UnknownSuite)
    }

    /// Look up a suite by name and panic if it is not registered.
    ///
    /// Only for names fixed by the program or its configuration; use
    /// `find` for names that come from untrusted input.
    pub fn must_find(&self, name: &str) -> SuiteHandle {
        match self.find(name) {
            Ok(suite) => suite,
            Err(_) => panic!("Suite {} not found.", name),
        }
    }

    /// Whether a suite is registered under `name`, ignoring case
    pub fn contains(&self, name: &str) -> bool {
        self.suites.contains_key(&normalize(name))
    }

    /// Registered (lowercased) names, sorted
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.suites.keys().cloned().collect();
        names.sort();
        names
    }

    /// Describe the suite registered under `name`
    pub fn describe(&self, name: &str) -> Result<SuiteInfo, RegistryError> {
        let suite = self.find(name)?;
        Ok(SuiteInfo {
            name: suite.name(),
            group: suite.group_name().to_string(),
            scalar_len: suite.scalar_len(),
            point_len: suite.point_len(),
            hash_len: suite.hash().output_size(),
        })
    }

    /// Number of registered suites
    pub fn len(&self) -> usize {
        self.suites.len()
    }

    /// Whether no suite is registered
    pub fn is_empty(&self) -> bool {
        self.suites.is_empty()
    }

    /// Registered suites, in no particular order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &SuiteHandle)> {
        self.suites.iter().map(|(name, suite)| (name.as_str(), suite))
    }
}

impl fmt::Debug for SuiteRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SuiteRegistry")
            .field("suites", &self.names())
            .finish()
    }
}

impl fmt::Debug for SuiteRegistryBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut names: Vec<&String> = self.suites.keys().collect();
        names.sort();
        f.debug_struct("SuiteRegistryBuilder")
            .field("suites", &names)
            .finish()
    }
}

#[cfg(all(test, feature = "ed25519"))]
mod tests {
    use super::*;
    use crate::core::crypto::suites::SuiteEd25519;

    #[test]
    fn test_registry_defaults() {
        let registry = SuiteRegistry::with_defaults();
        assert!(registry.contains("ed25519"));
        assert_eq!(registry.names(), vec!["ed25519".to_string()]);

        let suite = registry.find("Ed25519").unwrap();
        assert_eq!(suite.name(), "Ed25519");
    }

    #[test]
    fn test_lookup_ignores_case() {
        let registry = SuiteRegistryBuilder::new()
            .with_suite(Arc::new(SuiteEd25519::new()))
            .build();

        for name in ["Ed25519", "ed25519", "ED25519", "eD25519"] {
            assert!(registry.find(name).is_ok(), "lookup of {} failed", name);
        }
    }

    #[test]
    fn test_unknown_suite() {
        let registry = SuiteRegistry::with_defaults();
        assert_eq!(
            registry.find("ed25519-variant").unwrap_err(),
            RegistryError::UnknownSuite
        );
        assert_eq!(registry.find("").unwrap_err(), RegistryError::UnknownSuite);
        assert!(SuiteRegistryBuilder::new().build().is_empty());
    }

    #[test]
    fn test_same_name_registers_once() {
        let first: SuiteHandle = Arc::new(SuiteEd25519::new());
        let second: SuiteHandle = Arc::new(SuiteEd25519::new());

        let mut builder = SuiteRegistryBuilder::new();
        builder.register(first.clone());
        builder.register(second.clone());
        let registry = builder.build();

        assert_eq!(registry.len(), 1);
        let found = registry.find("ed25519").unwrap();
        assert!(Arc::ptr_eq(&found, &second));
        assert!(!Arc::ptr_eq(&found, &first));
    }

    #[test]
    fn test_must_find_matches_find() {
        let registry = SuiteRegistry::with_defaults();
        let found = registry.find("ED25519").unwrap();
        let must = registry.must_find("ED25519");
        assert!(Arc::ptr_eq(&found, &must));
    }

    #[test]
    #[should_panic(expected = "Suite nope not found.")]
    fn test_must_find_panics_on_unknown() {
        SuiteRegistry::with_defaults().must_find("nope");
    }

    #[test]
    fn test_describe() {
        let info = SuiteRegistry::with_defaults().describe("ed25519").unwrap();
        assert_eq!(
            info,
            SuiteInfo {
                name: "Ed25519".to_string(),
                group: "Ed25519".to_string(),
                scalar_len: 32,
                point_len: 32,
                hash_len: 32,
            }
        );
    }

    #[test]
    fn test_iter_yields_lowercased_names() {
        let registry = SuiteRegistryBuilder::with_defaults().build();

        let entries: Vec<(&str, &SuiteHandle)> = registry.iter().collect();
        assert_eq!(entries.len(), registry.len());
        assert_eq!(entries[0].0, "ed25519");
        assert_eq!(entries[0].1.name(), "Ed25519");
        assert!(Arc::ptr_eq(entries[0].1, &registry.find("ED25519").unwrap()));
    }

    #[test]
    fn test_normalize_folds_each_char() {
        assert_eq!(normalize("Ed25519"), "ed25519");
        assert_eq!(normalize("ΣΑΣ"), "σασ");
        assert_eq!(normalize("σας"), "σας");
    }

    #[cfg(feature = "serde-support")]
    #[test]
    fn test_describe_serializes() {
        let info = SuiteRegistry::with_defaults().describe("ed25519").unwrap();
        let json = serde_json::to_string(&info).unwrap();
        assert!(json.contains("\"scalar_len\":32"));

        let back: SuiteInfo = serde_json::from_str(&json).unwrap();
        assert_eq!(back, info);
    }
}
