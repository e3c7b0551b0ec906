//! Lazy body cache
//!
//! Synthesis runs several area boolean operations, so each component keeps
//! its last body until a geometry-affecting change marks it stale. The cache
//! has exactly two states and never recomputes in the background: a stale
//! body is rebuilt by the next caller that asks for it.

use std::sync::Arc;

use tracing::trace;

use crate::body::Body;

#[derive(Debug, Default)]
enum CacheState {
    #[default]
    Stale,
    Fresh(Arc<Body>),
}

/// Two-state memo of a component's synthesized body
#[derive(Debug, Default)]
pub struct BodyCache {
    state: CacheState,
    generation: u64,
}

impl BodyCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_fresh(&self) -> bool {
        matches!(self.state, CacheState::Fresh(_))
    }

    /// Number of syntheses performed so far
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Cached body without synthesizing
    pub fn peek(&self) -> Option<&Arc<Body>> {
        match &self.state {
            CacheState::Fresh(body) => Some(body),
            CacheState::Stale => None,
        }
    }

    /// Return the cached body, synthesizing and storing it first when stale
    pub fn get_or_synthesize(&mut self, synthesize: impl FnOnce() -> Body) -> Arc<Body> {
        if let CacheState::Fresh(body) = &self.state {
            return Arc::clone(body);
        }

        let body = Arc::new(synthesize());
        self.generation += 1;
        self.state = CacheState::Fresh(Arc::clone(&body));
        body
    }

    pub fn invalidate(&mut self) {
        if self.is_fresh() {
            trace!("Body cache invalidated at generation {}", self.generation);
        }
        self.state = CacheState::Stale;
    }
}

/// A cloned component starts stale so no two instances share a cached body.
impl Clone for BodyCache {
    fn clone(&self) -> Self {
        Self {
            state: CacheState::Stale,
            generation: self.generation,
        }
    }
}
