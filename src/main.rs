use anyhow::Result;
use clap::{Parser, Subcommand};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing_subscriber::EnvFilter;

use curator::{
    Catalog, Category, Config, FeedFilter, ItemId, JsonFileStore, ProfileStore,
    RecommendationEngine, ScoredItem, UserProfile,
};

#[derive(Parser)]
#[command(author, version, about = "Personalized movie, book, and product recommendations", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the cross-category recommendation feed
    Feed {
        /// Keep only one category (movies, books, products)
        #[arg(long)]
        category: Option<Category>,

        /// Keep only items whose title or subtitle contains this text
        #[arg(long)]
        query: Option<String>,
    },

    /// Show one category ranked by relevance
    Section {
        /// Category to list (movies, books, products)
        category: Category,
    },

    /// Mark an item as liked
    Like {
        /// Item id (e.g. "m1")
        id: String,
    },

    /// Mark an item as disliked
    Dislike {
        /// Item id (e.g. "m1")
        id: String,
    },

    /// Record a preferred genre or category term
    Prefer {
        /// Category the term applies to
        category: Category,

        /// Genre/category term (e.g. "sci-fi")
        term: String,
    },

    /// Show the profile summary
    Profile,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let config = Config::from_env()?;
    let cli = Cli::parse();

    let store = JsonFileStore::new(&config.profile_path);
    let rng = match config.feed_seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    // First run starts from the demo user's sample taste; a broken blob
    // degrades to an empty profile.
    let profile = match store.load() {
        Ok(Some(profile)) => profile,
        Ok(None) => UserProfile::sample(),
        Err(e) => {
            tracing::error!(error = %e, "Failed to load user profile, starting fresh");
            UserProfile::default()
        }
    };

    let mut engine = RecommendationEngine::new(Catalog::builtin(), profile, rng, store);

    match cli.command {
        Commands::Feed { category, query } => {
            engine.refresh_feed();
            let filter = FeedFilter { category, query };
            render(&engine.filter_feed(&filter));
        }
        Commands::Section { category } => {
            render(&engine.section(category));
        }
        Commands::Like { id } => {
            engine.like(&ItemId::new(id))?;
            println!("Item added to your favorites!");
        }
        Commands::Dislike { id } => {
            engine.dislike(&ItemId::new(id))?;
            println!("We'll show you different recommendations");
        }
        Commands::Prefer { category, term } => {
            engine.add_preference(category, &term);
            println!("Noted: more {} {}s coming up", term.to_lowercase(), category);
        }
        Commands::Profile => {
            render_profile(engine.profile());
        }
    }

    Ok(())
}

fn render(entries: &[ScoredItem]) {
    if entries.is_empty() {
        println!("Nothing matched.");
        return;
    }
    for entry in entries {
        println!(
            "{:<4} {:<9} {:<24} {:<26} {} {:.1}/5",
            entry.item.id.as_str(),
            format!("[{}]", entry.item.category()),
            entry.item.title,
            entry.item.subtitle_text().unwrap_or(""),
            stars(entry.item.rating),
            entry.item.rating,
        );
    }
}

fn render_profile(profile: &UserProfile) {
    println!("Liked:    {}", join_ids(&profile.liked));
    println!("Disliked: {}", join_ids(&profile.disliked));
    for category in Category::ALL {
        let mut terms: Vec<&str> = profile
            .preferences
            .get(&category)
            .map(|set| set.iter().map(String::as_str).collect())
            .unwrap_or_default();
        terms.sort_unstable();
        println!(
            "{:<8} preferences: {}",
            category.to_string(),
            terms.join(", ")
        );
    }
}

fn join_ids(ids: &std::collections::HashSet<ItemId>) -> String {
    let mut sorted: Vec<&str> = ids.iter().map(ItemId::as_str).collect();
    sorted.sort_unstable();
    if sorted.is_empty() {
        "(none)".to_string()
    } else {
        sorted.join(", ")
    }
}

/// Five-position star string with a half step, matching the item rating
fn stars(rating: f64) -> String {
    let full = rating.floor() as usize;
    let half = rating % 1.0 >= 0.5;
    let empty = 5usize.saturating_sub(full + usize::from(half));

    let mut out = "★".repeat(full);
    if half {
        out.push('½');
    }
    out.push_str(&"☆".repeat(empty));
    out
}
