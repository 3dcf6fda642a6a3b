use crate::engine::skill_space::SkillSpace;
use crate::engine::EngineError;

#[derive(Debug, Clone)]
struct LexiconEntry {
    keyword: String,
    /// Index into the skill space, resolved at construction.
    dimension: usize,
}

/// Fixed table mapping keyword phrases to the skill dimension they signal.
///
/// Matching is plain substring containment over lowercased input, NOT
/// word-boundary aware. Short keywords match inside unrelated words ("said"
/// contains "ai"; "leadership" hits the "lead", "leader", and "leadership"
/// entries at once). That is the documented matching policy; keep it as-is
/// rather than "fixing" it to token matching.
#[derive(Debug, Clone)]
pub struct KeywordLexicon {
    entries: Vec<LexiconEntry>,
    dimension_count: usize,
}

impl KeywordLexicon {
    /// Builds the lexicon, lowercasing keywords and resolving dimension
    /// names to vector positions. Fails if a keyword is blank or names a
    /// dimension outside the skill space.
    pub fn new(mappings: &[(&str, &str)], space: &SkillSpace) -> Result<Self, EngineError> {
        let mut entries = Vec::with_capacity(mappings.len());
        for (keyword, dimension) in mappings {
            let keyword = keyword.trim().to_lowercase();
            if keyword.is_empty() {
                return Err(EngineError::EmptyKeyword);
            }
            let index = space
                .index_of(dimension)
                .ok_or_else(|| EngineError::UnknownDimension {
                    keyword: keyword.clone(),
                    dimension: (*dimension).to_string(),
                })?;
            entries.push(LexiconEntry {
                keyword,
                dimension: index,
            });
        }
        Ok(Self {
            entries,
            dimension_count: space.len(),
        })
    }

    /// Counts keyword hits per dimension in already-lowercased text.
    ///
    /// Each lexicon entry contributes at most 1 no matter how often it
    /// repeats in the text; distinct entries mapping to the same dimension
    /// accumulate, so per-dimension counts above 1 are normal.
    pub fn match_counts(&self, text_lower: &str) -> Vec<u32> {
        let mut counts = vec![0u32; self.dimension_count];
        for entry in &self.entries {
            if text_lower.contains(&entry.keyword) {
                counts[entry.dimension] += 1;
            }
        }
        counts
    }
}
