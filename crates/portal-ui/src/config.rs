use chrono::{Duration, Utc};
use portal_core::card::{Listing, parse_listings};
use portal_core::notices::{Notice, NoticeFeed};
use portal_core::schema::FilterSchema;

const FILTER_SCHEMA_TOML: &str = include_str!("../assets/filters.toml");
const LISTING_SET_TOML: &str = include_str!("../assets/listings.toml");

/// A broken bundled asset disables the affected panel instead of taking
/// the page down.
pub fn load_filter_schema() -> FilterSchema {
    match FilterSchema::parse(FILTER_SCHEMA_TOML) {
        Ok(schema) => schema,
        Err(error) => {
            tracing::error!(%error, "failed parsing bundled filter schema");
            FilterSchema::default()
        }
    }
}

pub fn load_listings() -> Vec<Listing> {
    match parse_listings(LISTING_SET_TOML) {
        Ok(listings) => listings,
        Err(error) => {
            tracing::error!(%error, "failed parsing bundled listing set");
            Vec::new()
        }
    }
}

pub fn seed_notices() -> NoticeFeed {
    let now = Utc::now();
    NoticeFeed::seeded(vec![
        Notice::new(
            "New listing matches your skills: Systems Intern at Ferrous Labs",
            now - Duration::minutes(20),
        ),
        Notice::new(
            "Acme Analytics viewed your application",
            now - Duration::hours(3),
        ),
        Notice::new(
            "Complete your profile to improve recommendations",
            now - Duration::days(1),
        ),
    ])
}
