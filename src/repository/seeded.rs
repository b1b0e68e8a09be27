//! Deterministic catalog generator.
//!
//! Each record draws from its own linear-congruential sequence seeded with its
//! 1-based position, so the dataset is identical for every run that uses the
//! same anchor timestamp.

use chrono::{DateTime, Duration, DurationRound, Utc};

use crate::domain::item::CatalogItem;
use crate::domain::types::{
    CatalogCategory, CatalogStatus, ItemId, ItemPrice, ItemTitle, ThumbnailUrl,
    TypeConstraintError,
};

const LCG_MULTIPLIER: u64 = 9301;
const LCG_INCREMENT: u64 = 49297;
const LCG_MODULUS: u64 = 233280;

const MIN_PRICE: i64 = 19;
const MAX_PRICE: i64 = 299;
/// Records are spread across roughly the last six months.
const MAX_DAYS_AGO: i64 = 180;

const TITLES: [&str; 32] = [
    "Modern Dashboard",
    "Creative Portfolio",
    "Business Landing",
    "E-commerce Store",
    "Admin Panel",
    "Marketing Site",
    "Product Showcase",
    "Blog Template",
    "Saas Platform",
    "Mobile App UI",
    "Corporate Website",
    "Startup Landing",
    "Dashboard Pro",
    "Elegant Theme",
    "Minimal Design",
    "Bold Layout",
    "Clean Interface",
    "Professional Kit",
    "Creative Design",
    "Premium Template",
    "Responsive Layout",
    "Dark Theme",
    "Light Theme",
    "Colorful Design",
    "Typography Focus",
    "Animation Kit",
    "Component Library",
    "Icon Set",
    "Illustration Pack",
    "Mockup Collection",
    "Wireframe Kit",
    "Style Guide",
];

/// `seed = (seed * 9301 + 49297) mod 233280`, yielding `seed / 233280`.
#[derive(Debug, Clone)]
pub struct SeededRandom {
    seed: u64,
}

impl SeededRandom {
    pub fn new(seed: u64) -> Self {
        Self {
            seed: seed % LCG_MODULUS,
        }
    }

    /// Next value in `[0, 1)`.
    pub fn next_f64(&mut self) -> f64 {
        self.seed = (self.seed * LCG_MULTIPLIER + LCG_INCREMENT) % LCG_MODULUS;
        self.seed as f64 / LCG_MODULUS as f64
    }

    /// Uniform integer in the inclusive range `[min, max]`.
    pub fn range(&mut self, min: i64, max: i64) -> i64 {
        (self.next_f64() * (max - min + 1) as f64).floor() as i64 + min
    }

    fn pick<'a, T>(&mut self, values: &'a [T]) -> &'a T {
        let index = self.range(0, values.len() as i64 - 1);
        &values[index as usize]
    }
}

/// Generate `count` records whose `updated_at` lies up to 180 days before
/// `anchor` (truncated to whole milliseconds).
pub fn generate_items(
    count: usize,
    anchor: DateTime<Utc>,
) -> Result<Vec<CatalogItem>, TypeConstraintError> {
    let anchor = anchor
        .duration_trunc(Duration::milliseconds(1))
        .unwrap_or(anchor);

    (1..=count)
        .map(|position| generate_item(position, anchor))
        .collect()
}

fn generate_item(
    position: usize,
    anchor: DateTime<Utc>,
) -> Result<CatalogItem, TypeConstraintError> {
    let mut rng = SeededRandom::new(position as u64);

    // Draw order is part of the dataset contract.
    let base_title = *rng.pick(&TITLES[..]);
    let category = *rng.pick(CatalogCategory::ALL);
    let status = *rng.pick(CatalogStatus::ALL);
    let price = rng.range(MIN_PRICE, MAX_PRICE);
    let days_ago = rng.range(0, MAX_DAYS_AGO);
    let title = if rng.range(1, 5) == 1 {
        format!("{base_title} v{}", rng.range(1, 3))
    } else {
        base_title.to_string()
    };

    Ok(CatalogItem {
        id: ItemId::from_position(position),
        title: ItemTitle::new(title)?,
        category,
        status,
        price: ItemPrice::new(price)?,
        updated_at: anchor - Duration::days(days_ago),
        thumbnail_url: ThumbnailUrl::new(format!(
            "https://picsum.photos/seed/{position}/400/300"
        )),
    })
}
