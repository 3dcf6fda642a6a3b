//! Recommendation engine core: free-text goal → unit vector in skill space →
//! cosine-ranked catalog.
//!
//! Everything here is pure request/response. The skill space, lexicon, and
//! catalog are validated once at construction and never mutated afterwards,
//! so one engine instance serves arbitrarily many concurrent requests with
//! no locks. The engine types carry no HTTP concern; the `handlers`
//! submodule adapts them to the API surface.

pub mod catalog;
pub mod handlers;
pub mod lexicon;
pub mod ranker;
pub mod skill_space;
pub mod vectorizer;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::engine::catalog::{ContentCatalog, ContentItem};
use crate::engine::lexicon::KeywordLexicon;
use crate::engine::ranker::rank_top_k;
use crate::engine::skill_space::SkillSpace;
use crate::engine::vectorizer::GoalVectorizer;

/// Engine-level error type, free of any transport concern.
///
/// `InvalidTopK` is the only error a well-constructed engine can return per
/// request; every other variant is a construction-time invariant violation
/// and fails engine initialization.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("top_k must be a positive integer")]
    InvalidTopK,

    #[error("skill space must contain at least one dimension")]
    EmptySkillSpace,

    #[error("duplicate skill dimension '{0}'")]
    DuplicateDimension(String),

    #[error("content item '{title}' has a {got}-dimensional vector, expected {expected}")]
    DimensionMismatch {
        title: String,
        expected: usize,
        got: usize,
    },

    #[error("content item '{title}' has a malformed vector component {value}")]
    MalformedVector { title: String, value: f64 },

    #[error("lexicon keyword must not be blank")]
    EmptyKeyword,

    #[error("lexicon keyword '{keyword}' maps to unknown dimension '{dimension}'")]
    UnknownDimension { keyword: String, dimension: String },
}

/// One ranked catalog item as returned to callers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecommendedItem {
    pub title: String,
    #[serde(rename = "type")]
    pub category: String,
    pub description: String,
    pub url: String,
    pub match_score: f64,
    /// The item's raw skill vector, for downstream visualization.
    pub content_vector: Vec<f64>,
}

/// Full result of one recommendation call: the computed goal vector, the
/// dimension names it is aligned to, and the ranked content.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Recommendation {
    pub user_goal: String,
    pub goal_vector: Vec<f64>,
    pub skill_dimensions: Vec<String>,
    pub recommendations: Vec<RecommendedItem>,
}

/// The recommendation engine. Construct once at startup, share behind an
/// `Arc`; every [`recommend`](Self::recommend) call is independent and
/// side-effect-free.
pub struct RecommendEngine {
    skill_space: SkillSpace,
    catalog: ContentCatalog,
    vectorizer: GoalVectorizer,
}

impl RecommendEngine {
    /// Builds the lexicon and catalog against the skill space and assembles
    /// the engine. Any inconsistency between the three parts fails here, not
    /// at request time.
    pub fn new(
        skill_space: SkillSpace,
        keyword_mappings: &[(&str, &str)],
        items: Vec<ContentItem>,
    ) -> Result<Self, EngineError> {
        let lexicon = KeywordLexicon::new(keyword_mappings, &skill_space)?;
        let catalog = ContentCatalog::new(items, &skill_space)?;
        Ok(Self {
            skill_space,
            catalog,
            vectorizer: GoalVectorizer::new(lexicon),
        })
    }

    pub fn skill_space(&self) -> &SkillSpace {
        &self.skill_space
    }

    pub fn catalog(&self) -> &ContentCatalog {
        &self.catalog
    }

    /// Ranks the catalog against the goal text and returns the top `top_k`
    /// items (all of them when `top_k` exceeds the catalog size).
    pub fn recommend(&self, goal_text: &str, top_k: usize) -> Result<Recommendation, EngineError> {
        let goal_vector = self.vectorizer.vectorize(goal_text);
        let ranked = rank_top_k(&self.catalog, &goal_vector, top_k)?;

        let recommendations = ranked
            .into_iter()
            .map(|entry| {
                let item = &self.catalog.items()[entry.index];
                RecommendedItem {
                    title: item.title.clone(),
                    category: item.category.clone(),
                    description: item.description.clone(),
                    url: item.url.clone(),
                    match_score: entry.similarity,
                    content_vector: item.vector.clone(),
                }
            })
            .collect();

        Ok(Recommendation {
            user_goal: goal_text.to_string(),
            goal_vector,
            skill_dimensions: self.skill_space.names().to_vec(),
            recommendations,
        })
    }
}
