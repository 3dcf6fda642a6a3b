//! Built-in dataset: the skill space, keyword lexicon, and content catalog
//! the service ships with. Hand-authored data treated as configuration; the
//! catalog can be swapped via `CATALOG_PATH` without touching the engine.

use crate::engine::catalog::{CatalogSource, ContentItem};

/// The seven skill dimensions, in vector order.
pub fn skill_dimensions() -> Vec<String> {
    [
        "Coding",
        "Data Science",
        "Leadership",
        "Communication",
        "Fitness",
        "Mindfulness",
        "Entrepreneurship",
    ]
    .into_iter()
    .map(str::to_string)
    .collect()
}

/// Keyword phrase → the skill dimension it signals. Lowercase; several
/// keywords may point at the same dimension.
pub const KEYWORD_MAPPINGS: &[(&str, &str)] = &[
    // Coding
    ("code", "Coding"),
    ("coding", "Coding"),
    ("programmer", "Coding"),
    ("developer", "Coding"),
    ("software", "Coding"),
    ("engineer", "Coding"),
    ("python", "Coding"),
    ("java", "Coding"),
    ("javascript", "Coding"),
    ("fullstack", "Coding"),
    ("backend", "Coding"),
    ("frontend", "Coding"),
    // Data Science
    ("data", "Data Science"),
    ("science", "Data Science"),
    ("ml", "Data Science"),
    ("ai", "Data Science"),
    ("machine learning", "Data Science"),
    ("artificial intelligence", "Data Science"),
    ("analytics", "Data Science"),
    ("analyst", "Data Science"),
    ("deep learning", "Data Science"),
    // Leadership
    ("lead", "Leadership"),
    ("leader", "Leadership"),
    ("leadership", "Leadership"),
    ("manager", "Leadership"),
    ("management", "Leadership"),
    ("cto", "Leadership"),
    ("ceo", "Leadership"),
    ("director", "Leadership"),
    ("executive", "Leadership"),
    ("vp", "Leadership"),
    // Communication
    ("communication", "Communication"),
    ("speak", "Communication"),
    ("speaking", "Communication"),
    ("presentation", "Communication"),
    ("writing", "Communication"),
    ("influence", "Communication"),
    ("persuasion", "Communication"),
    ("networking", "Communication"),
    // Fitness
    ("fit", "Fitness"),
    ("fitness", "Fitness"),
    ("health", "Fitness"),
    ("workout", "Fitness"),
    ("exercise", "Fitness"),
    ("gym", "Fitness"),
    ("athlete", "Fitness"),
    ("physical", "Fitness"),
    // Mindfulness
    ("mindful", "Mindfulness"),
    ("mindfulness", "Mindfulness"),
    ("meditation", "Mindfulness"),
    ("zen", "Mindfulness"),
    ("peace", "Mindfulness"),
    ("calm", "Mindfulness"),
    ("spiritual", "Mindfulness"),
    ("awareness", "Mindfulness"),
    // Entrepreneurship
    ("entrepreneur", "Entrepreneurship"),
    ("entrepreneurship", "Entrepreneurship"),
    ("startup", "Entrepreneurship"),
    ("business", "Entrepreneurship"),
    ("founder", "Entrepreneurship"),
    ("venture", "Entrepreneurship"),
    ("company", "Entrepreneurship"),
    ("innovation", "Entrepreneurship"),
];

/// The built-in content catalog as a swappable source.
pub struct BuiltinCatalog;

impl CatalogSource for BuiltinCatalog {
    fn load(&self) -> anyhow::Result<Vec<ContentItem>> {
        Ok(content_items())
    }
}

fn item(
    title: &str,
    category: &str,
    description: &str,
    url: &str,
    vector: [f64; 7],
) -> ContentItem {
    ContentItem {
        title: title.to_string(),
        category: category.to_string(),
        description: description.to_string(),
        url: url.to_string(),
        vector: vector.to_vec(),
    }
}

/// All catalog items. Vectors are aligned to `skill_dimensions()` order:
/// [Coding, Data Science, Leadership, Communication, Fitness, Mindfulness,
/// Entrepreneurship].
pub fn content_items() -> Vec<ContentItem> {
    vec![
        item(
            "The Lean Startup",
            "Book",
            "Build a successful startup using validated learning and rapid experimentation.",
            "https://example.com/lean-startup",
            [0.2, 0.3, 0.7, 0.6, 0.0, 0.2, 0.95],
        ),
        item(
            "Clean Code: A Handbook of Agile Software Craftsmanship",
            "Book",
            "Learn how to write clean, maintainable code that stands the test of time.",
            "https://example.com/clean-code",
            [0.95, 0.3, 0.4, 0.5, 0.0, 0.1, 0.2],
        ),
        item(
            "Deep Learning Specialization",
            "Course",
            "Master deep learning fundamentals and build neural networks from scratch.",
            "https://example.com/deep-learning",
            [0.8, 0.98, 0.2, 0.3, 0.0, 0.1, 0.2],
        ),
        item(
            "How to Win Friends and Influence People",
            "Book",
            "Classic guide to improving interpersonal skills and building relationships.",
            "https://example.com/win-friends",
            [0.0, 0.0, 0.8, 0.95, 0.0, 0.3, 0.5],
        ),
        item(
            "Python for Data Analysis",
            "Book",
            "Comprehensive guide to data manipulation and analysis with pandas.",
            "https://example.com/python-data",
            [0.85, 0.9, 0.1, 0.2, 0.0, 0.0, 0.1],
        ),
        item(
            "Atomic Habits",
            "Book",
            "Build good habits and break bad ones using tiny changes.",
            "https://example.com/atomic-habits",
            [0.0, 0.1, 0.5, 0.4, 0.6, 0.85, 0.4],
        ),
        item(
            "Full-Stack Web Development Bootcamp",
            "Course",
            "Learn React, Node.js, and MongoDB to build complete web applications.",
            "https://example.com/fullstack",
            [0.92, 0.2, 0.3, 0.4, 0.0, 0.1, 0.3],
        ),
        item(
            "The 4-Hour Work Week",
            "Book",
            "Escape the 9-5, live anywhere, and join the new rich.",
            "https://example.com/4-hour",
            [0.1, 0.0, 0.6, 0.5, 0.3, 0.4, 0.88],
        ),
        item(
            "Mindfulness Meditation for Beginners",
            "Video",
            "Introduction to mindfulness practice for stress reduction and focus.",
            "https://example.com/mindfulness-video",
            [0.0, 0.0, 0.2, 0.3, 0.4, 0.95, 0.1],
        ),
        item(
            "High-Intensity Interval Training (HIIT) Masterclass",
            "Course",
            "Transform your body with science-backed HIIT workouts.",
            "https://example.com/hiit",
            [0.0, 0.0, 0.3, 0.2, 0.97, 0.4, 0.1],
        ),
        item(
            "Leadership Principles from Naval Ravikant",
            "Video",
            "Timeless wisdom on wealth creation and personal freedom.",
            "https://example.com/naval",
            [0.2, 0.1, 0.92, 0.7, 0.2, 0.6, 0.85],
        ),
        item(
            "Machine Learning Engineering",
            "Book",
            "Deploy ML models to production with best practices and real-world examples.",
            "https://example.com/ml-engineering",
            [0.88, 0.95, 0.4, 0.5, 0.0, 0.1, 0.3],
        ),
        item(
            "Public Speaking Mastery",
            "Course",
            "Overcome stage fright and deliver compelling presentations.",
            "https://example.com/public-speaking",
            [0.0, 0.0, 0.7, 0.96, 0.1, 0.3, 0.5],
        ),
        item(
            "Zero to One: Notes on Startups",
            "Book",
            "Build the future by creating innovative companies that matter.",
            "https://example.com/zero-to-one",
            [0.2, 0.1, 0.85, 0.6, 0.0, 0.2, 0.93],
        ),
        item(
            "System Design Interview Prep",
            "Course",
            "Ace technical interviews at FAANG companies with scalable architectures.",
            "https://example.com/system-design",
            [0.9, 0.4, 0.5, 0.7, 0.0, 0.1, 0.2],
        ),
        item(
            "The Yoga Sutras of Patanjali",
            "Book",
            "Ancient wisdom on meditation, consciousness, and self-realization.",
            "https://example.com/yoga-sutras",
            [0.0, 0.0, 0.3, 0.2, 0.7, 0.98, 0.0],
        ),
        item(
            "Building a Second Brain",
            "Course",
            "Organize your digital life and amplify your creative productivity.",
            "https://example.com/second-brain",
            [0.3, 0.2, 0.6, 0.5, 0.1, 0.4, 0.7],
        ),
        item(
            "The Manager's Path",
            "Book",
            "Navigate your career from tech lead to CTO with practical advice.",
            "https://example.com/managers-path",
            [0.5, 0.2, 0.94, 0.8, 0.0, 0.2, 0.6],
        ),
    ]
}
