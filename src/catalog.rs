use std::collections::HashSet;

use crate::error::{AppError, AppResult};
use crate::models::{Category, Item, ItemId};

/// Static per-category item collection
///
/// Fixed at construction, read-only thereafter. Item ids must be unique
/// across all categories so `find_by_id` can resolve any id without knowing
/// its category.
#[derive(Debug, Clone)]
pub struct Catalog {
    movies: Vec<Item>,
    books: Vec<Item>,
    products: Vec<Item>,
}

impl Catalog {
    /// Builds a catalog from a flat item list, rejecting duplicate ids
    pub fn new(items: Vec<Item>) -> AppResult<Self> {
        let mut seen: HashSet<ItemId> = HashSet::new();
        for item in &items {
            if !seen.insert(item.id.clone()) {
                return Err(AppError::InvalidInput(format!(
                    "duplicate item id: {}",
                    item.id
                )));
            }
        }

        let mut catalog = Self {
            movies: Vec::new(),
            books: Vec::new(),
            products: Vec::new(),
        };
        for item in items {
            match item.category() {
                Category::Movie => catalog.movies.push(item),
                Category::Book => catalog.books.push(item),
                Category::Product => catalog.products.push(item),
            }
        }
        Ok(catalog)
    }

    /// The items of one category, in fixed catalog order
    pub fn items(&self, category: Category) -> &[Item] {
        match category {
            Category::Movie => &self.movies,
            Category::Book => &self.books,
            Category::Product => &self.products,
        }
    }

    /// Looks up an item anywhere in the catalog
    pub fn find_by_id(&self, id: &ItemId) -> Option<&Item> {
        Category::ALL
            .iter()
            .flat_map(|category| self.items(*category))
            .find(|item| &item.id == id)
    }

    pub fn len(&self) -> usize {
        self.movies.len() + self.books.len() + self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The built-in demo catalog: six items per category
    pub fn builtin() -> Self {
        let items = vec![
            Item::movie(
                "m1",
                "Inception",
                "A mind-bending thriller",
                "Sci-Fi",
                4.8,
                95.0,
                "A thief who steals corporate secrets through the use of dream-sharing \
                 technology is given the inverse task of planting an idea into the mind of a \
                 C.E.O.",
                &["Thriller", "Action", "Mind-bending"],
            ),
            Item::movie(
                "m2",
                "The Dark Knight",
                "Epic superhero drama",
                "Action",
                4.9,
                98.0,
                "When the menace known as the Joker wreaks havoc and chaos on the people of \
                 Gotham, Batman must accept one of the greatest psychological and physical \
                 tests of his ability to fight injustice.",
                &["Superhero", "Drama", "Crime"],
            ),
            Item::movie(
                "m3",
                "Interstellar",
                "Space exploration epic",
                "Sci-Fi",
                4.7,
                92.0,
                "A team of explorers travel through a wormhole in space in an attempt to \
                 ensure humanity's survival.",
                &["Space", "Adventure", "Drama"],
            ),
            Item::movie(
                "m4",
                "Pulp Fiction",
                "Cult classic crime film",
                "Drama",
                4.6,
                88.0,
                "The lives of two mob hitmen, a boxer, a gangster and his wife, and a pair of \
                 diner bandits intertwine in four tales of violence and redemption.",
                &["Crime", "Comedy", "Thriller"],
            ),
            Item::movie(
                "m5",
                "The Matrix",
                "Revolutionary sci-fi action",
                "Sci-Fi",
                4.5,
                90.0,
                "A computer programmer discovers that reality as he knows it is a simulation \
                 created by machines, and joins a rebellion to break free.",
                &["Action", "Philosophy", "Cyberpunk"],
            ),
            Item::movie(
                "m6",
                "Fight Club",
                "Psychological thriller",
                "Drama",
                4.4,
                85.0,
                "An insomniac office worker and a devil-may-care soapmaker form an \
                 underground fight club that evolves into something much, much more.",
                &["Thriller", "Psychological", "Satire"],
            ),
            Item::book(
                "b1",
                "The Great Gatsby",
                "F. Scott Fitzgerald",
                "Fiction",
                4.5,
                88.0,
                "A story of the fabulously wealthy Jay Gatsby and his love for the beautiful \
                 Daisy Buchanan.",
                &["Classic", "Romance", "American Literature"],
            ),
            Item::book(
                "b2",
                "1984",
                "George Orwell",
                "Fiction",
                4.7,
                92.0,
                "A dystopian novel about totalitarianism and surveillance society.",
                &["Dystopian", "Political", "Classic"],
            ),
            Item::book(
                "b3",
                "The Hobbit",
                "J.R.R. Tolkien",
                "Fiction",
                4.6,
                90.0,
                "A fantasy novel about a hobbit's journey with thirteen dwarves to reclaim \
                 their homeland.",
                &["Fantasy", "Adventure", "Classic"],
            ),
            Item::book(
                "b4",
                "Sapiens",
                "Yuval Noah Harari",
                "Non-Fiction",
                4.4,
                85.0,
                "A brief history of humankind, from ancient humans to the present day.",
                &["History", "Science", "Philosophy"],
            ),
            Item::book(
                "b5",
                "The Alchemist",
                "Paulo Coelho",
                "Fiction",
                4.3,
                82.0,
                "A novel about a young Andalusian shepherd who dreams of finding a worldly \
                 treasure.",
                &["Philosophy", "Adventure", "Inspirational"],
            ),
            Item::book(
                "b6",
                "Atomic Habits",
                "James Clear",
                "Non-Fiction",
                4.6,
                87.0,
                "A guide to building good habits and breaking bad ones.",
                &["Self-Help", "Psychology", "Productivity"],
            ),
            Item::product(
                "p1",
                "Wireless Headphones",
                "TechPro",
                "Electronics",
                4.5,
                90.0,
                "High-quality wireless headphones with noise cancellation and 30-hour \
                 battery life.",
                &["Wireless", "Noise Cancelling", "Bluetooth"],
            ),
            Item::product(
                "p2",
                "Smart Watch",
                "FitTech",
                "Electronics",
                4.3,
                85.0,
                "Advanced smartwatch with health monitoring and GPS tracking.",
                &["Fitness", "GPS", "Health Monitor"],
            ),
            Item::product(
                "p3",
                "Designer Jeans",
                "FashionCo",
                "Fashion",
                4.2,
                78.0,
                "Premium designer jeans with perfect fit and modern styling.",
                &["Designer", "Premium", "Comfortable"],
            ),
            Item::product(
                "p4",
                "Coffee Maker",
                "HomeBrew",
                "Home",
                4.4,
                82.0,
                "Automatic coffee maker with programmable settings and thermal carafe.",
                &["Automatic", "Programmable", "Thermal"],
            ),
            Item::product(
                "p5",
                "Yoga Mat",
                "FitLife",
                "Sports",
                4.1,
                75.0,
                "Non-slip yoga mat made from eco-friendly materials.",
                &["Non-slip", "Eco-friendly", "Comfortable"],
            ),
            Item::product(
                "p6",
                "Laptop Stand",
                "ErgoTech",
                "Electronics",
                4.0,
                72.0,
                "Adjustable laptop stand for better ergonomics and posture.",
                &["Ergonomic", "Adjustable", "Portable"],
            ),
        ];

        // The seed data has hand-assigned unique ids
        Self::new(items).expect("built-in catalog ids are unique")
    }
}
