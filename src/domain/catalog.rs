//! Hobby catalog. Static category → hobbies mapping offered by the form.

/// Ordered category/hobby table. Immutable for the process lifetime.
const CATEGORIES: &[(&str, &[&str])] = &[
    (
        "🎨 Creative & Artistic",
        &["Drawing", "Painting", "Singing", "Dancing"],
    ),
    (
        "📚 Intellectual & Learning",
        &["Reading", "Writing", "Blogging"],
    ),
    (
        "🎮 Entertainment & Fun",
        &["Gaming", "Watching Movies", "Listening to Music"],
    ),
    (
        "🧘‍♀️ Wellness & Self-care",
        &["Yoga", "Meditation", "Gardening"],
    ),
    ("🧠 Mental Stimulation", &["Puzzles", "Chess", "Coding"]),
    (
        "🌍 Exploration & Adventure",
        &["Traveling", "Photography", "Hiking"],
    ),
    ("🍳 Culinary Arts", &["Cooking", "Baking", "Mixology"]),
];

/// Read-only view over the hobby table.
#[derive(Debug, Clone, Copy)]
pub struct HobbyCatalog {
    categories: &'static [(&'static str, &'static [&'static str])],
}

impl HobbyCatalog {
    /// The built-in catalog.
    pub const fn builtin() -> Self {
        Self::new(CATEGORIES)
    }

    pub const fn new(categories: &'static [(&'static str, &'static [&'static str])]) -> Self {
        Self { categories }
    }

    /// Categories in display order, each with its ordered hobbies.
    pub fn categories(&self) -> impl Iterator<Item = (&'static str, &'static [&'static str])> {
        self.categories.iter().copied()
    }

    /// Every `(category, hobby)` pair in display order.
    pub fn entries(&self) -> impl Iterator<Item = (&'static str, &'static str)> {
        self.categories()
            .flat_map(|(category, hobbies)| hobbies.iter().map(move |h| (category, *h)))
    }

    /// Flattened hobby labels. A label listed under two categories appears twice.
    pub fn hobbies(&self) -> impl Iterator<Item = &'static str> {
        self.entries().map(|(_, hobby)| hobby)
    }

    pub fn contains(&self, hobby: &str) -> bool {
        self.hobbies().any(|h| h == hobby)
    }
}

impl Default for HobbyCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}
