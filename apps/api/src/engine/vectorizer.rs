use crate::engine::lexicon::KeywordLexicon;

/// Converts free-text goal statements into unit vectors in skill space.
#[derive(Debug, Clone)]
pub struct GoalVectorizer {
    lexicon: KeywordLexicon,
}

impl GoalVectorizer {
    pub fn new(lexicon: KeywordLexicon) -> Self {
        Self { lexicon }
    }

    /// Lowercases the text, scores it against the lexicon, and L2-normalizes
    /// the per-dimension counts.
    ///
    /// When nothing matches, every component becomes 1/√D: "no stated
    /// preference" reads as equally relevant to everything, and the ranker
    /// is guaranteed a nonzero query either way. The result always has unit
    /// norm (within floating-point tolerance).
    pub fn vectorize(&self, goal_text: &str) -> Vec<f64> {
        let counts = self.lexicon.match_counts(&goal_text.to_lowercase());
        let mut vector: Vec<f64> = counts.into_iter().map(f64::from).collect();

        let norm = l2_norm(&vector);
        if norm > 0.0 {
            for v in &mut vector {
                *v /= norm;
            }
        } else {
            let uniform = 1.0 / (vector.len() as f64).sqrt();
            vector.fill(uniform);
        }
        vector
    }
}

pub(crate) fn l2_norm(vector: &[f64]) -> f64 {
    vector.iter().map(|v| v * v).sum::<f64>().sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset;
    use crate::engine::skill_space::SkillSpace;

    const TOLERANCE: f64 = 1e-9;

    fn vectorizer() -> GoalVectorizer {
        let space = SkillSpace::new(dataset::skill_dimensions()).unwrap();
        GoalVectorizer::new(KeywordLexicon::new(dataset::KEYWORD_MAPPINGS, &space).unwrap())
    }

    #[test]
    fn test_goal_vector_has_unit_norm() {
        let v = vectorizer();
        for text in [
            "I want to become a CTO",
            "python data science and meditation",
            "fitness",
            "",
            "   ",
            "no keywords here at all xyz",
        ] {
            let norm = l2_norm(&v.vectorize(text));
            assert!(
                (norm - 1.0).abs() < TOLERANCE,
                "norm for {text:?} was {norm}"
            );
        }
    }

    #[test]
    fn test_cto_goal_is_one_hot_on_leadership() {
        let vector = vectorizer().vectorize("I want to become a CTO");
        // "cto" is the only hit; Leadership is dimension index 2.
        for (i, component) in vector.iter().enumerate() {
            let expected = if i == 2 { 1.0 } else { 0.0 };
            assert!(
                (component - expected).abs() < TOLERANCE,
                "component {i} was {component}"
            );
        }
    }

    #[test]
    fn test_whitespace_only_falls_back_to_uniform() {
        let vector = vectorizer().vectorize("   ");
        let uniform = 1.0 / (vector.len() as f64).sqrt();
        assert!((uniform - 0.378).abs() < 0.001);
        for component in &vector {
            assert!((component - uniform).abs() < TOLERANCE);
        }
    }

    #[test]
    fn test_keyword_free_text_falls_back_to_uniform() {
        let vector = vectorizer().vectorize("quux zorp");
        let uniform = 1.0 / (vector.len() as f64).sqrt();
        for component in &vector {
            assert!((component - uniform).abs() < TOLERANCE);
        }
    }

    #[test]
    fn test_matching_is_case_insensitive() {
        let v = vectorizer();
        assert_eq!(v.vectorize("PYTHON CODING"), v.vectorize("python coding"));
    }

    #[test]
    fn test_relative_emphasis_survives_normalization() {
        // Two Coding hits vs one Entrepreneurship hit: the Coding component
        // must come out larger.
        let vector = vectorizer().vectorize("python code for my startup");
        assert!(
            vector[0] > vector[6],
            "coding {} vs entrepreneurship {}",
            vector[0],
            vector[6]
        );
    }
}
