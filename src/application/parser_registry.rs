//! Parser selection with memoization and fallback
//!
//! The registry hands out shared parser instances per [`ParserKind`].
//! `Automatic` prefers the alternate backend and falls back to the
//! built-in parser when the alternate dependency is not installed.

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::RwLock;
use tracing::{debug, info};

use crate::application::errors::ParseError;
use crate::application::ports::{BackendLocator, ProjectParser};
use crate::infrastructure::parsers::{AlternateParser, BuiltInParser};

/// Which backend a caller asks for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ParserKind {
    BuiltIn,
    Alternate,
    #[default]
    Automatic,
}

impl ParserKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ParserKind::BuiltIn => "builtin",
            ParserKind::Alternate => "alternate",
            ParserKind::Automatic => "auto",
        }
    }
}

impl std::fmt::Display for ParserKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for ParserKind {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "builtin" | "custom" => Ok(ParserKind::BuiltIn),
            "alternate" | "third_party" => Ok(ParserKind::Alternate),
            "auto" | "automatic" => Ok(ParserKind::Automatic),
            other => Err(ParseError::InvalidArgument(format!(
                "Unknown parser kind: {}",
                other
            ))),
        }
    }
}

/// Memoizing parser factory owned by the composition root
pub struct ParserRegistry {
    locator: Arc<dyn BackendLocator>,
    cache: RwLock<HashMap<ParserKind, Arc<dyn ProjectParser>>>,
}

impl ParserRegistry {
    pub fn new(locator: Arc<dyn BackendLocator>) -> Self {
        Self {
            locator,
            cache: RwLock::new(HashMap::new()),
        }
    }

    /// Resolve a parser for `kind`, reusing a cached instance when present.
    ///
    /// Failed resolutions are not cached, so a later call retries.
    pub fn get(&self, kind: ParserKind) -> Result<Arc<dyn ProjectParser>, ParseError> {
        if let Some(parser) = self.cache.read().get(&kind) {
            return Ok(Arc::clone(parser));
        }

        let parser = self.construct(kind)?;

        // A concurrent caller may have populated the slot first; keep theirs.
        let mut cache = self.cache.write();
        let parser = cache.entry(kind).or_insert(parser);
        Ok(Arc::clone(parser))
    }

    /// Resolve by string name (`builtin`, `custom`, `alternate`, `third_party`, `auto`)
    pub fn get_named(&self, kind: &str) -> Result<Arc<dyn ProjectParser>, ParseError> {
        self.get(kind.parse()?)
    }

    /// Drop every cached instance so the next call re-resolves
    pub fn clear(&self) {
        let mut cache = self.cache.write();
        debug!(cached = cache.len(), "Clearing parser cache");
        cache.clear();
    }

    /// Number of kinds with a cached instance
    pub fn cached_count(&self) -> usize {
        self.cache.read().len()
    }

    fn construct(&self, kind: ParserKind) -> Result<Arc<dyn ProjectParser>, ParseError> {
        match kind {
            ParserKind::BuiltIn => Ok(Arc::new(BuiltInParser::new())),
            ParserKind::Alternate => {
                let parser = AlternateParser::new(self.locator.as_ref())?;
                Ok(Arc::new(parser))
            }
            ParserKind::Automatic => match self.get(ParserKind::Alternate) {
                Ok(parser) => Ok(parser),
                Err(ParseError::BackendUnavailable(reason)) => {
                    info!(reason = %reason, "Alternate parser unavailable, using built-in parser");
                    self.get(ParserKind::BuiltIn)
                }
                Err(e) => Err(e),
            },
        }
    }
}
