use crate::engine::EngineError;

/// The fixed, ordered list of skill dimension names spanning the vector
/// space.
///
/// Position is semantically significant: every goal vector and content
/// vector is an array aligned to this order. Immutable once constructed.
#[derive(Debug, Clone)]
pub struct SkillSpace {
    dimensions: Vec<String>,
}

impl SkillSpace {
    /// Validates the dimension list: non-empty, no duplicate names.
    pub fn new(dimensions: Vec<String>) -> Result<Self, EngineError> {
        if dimensions.is_empty() {
            return Err(EngineError::EmptySkillSpace);
        }
        for (i, dim) in dimensions.iter().enumerate() {
            if dimensions[..i].contains(dim) {
                return Err(EngineError::DuplicateDimension(dim.clone()));
            }
        }
        Ok(Self { dimensions })
    }

    /// Number of dimensions (D).
    pub fn len(&self) -> usize {
        self.dimensions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dimensions.is_empty()
    }

    /// Dimension names in vector order.
    pub fn names(&self) -> &[String] {
        &self.dimensions
    }

    /// Vector position of a dimension name, if it belongs to the space.
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.dimensions.iter().position(|d| d == name)
    }
}
