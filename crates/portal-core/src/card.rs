use anyhow::Context;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;
use uuid::Uuid;

/// One internship listing as rendered on the portal page. Location is an
/// explicit field rather than something recovered from presentation markup.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Listing {
    #[serde(default = "fresh_uuid")]
    pub uuid: Uuid,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub company: String,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub location: String,
    pub stipend: Option<String>,
    pub posted: Option<DateTime<Utc>>,
}

fn fresh_uuid() -> Uuid {
    Uuid::new_v4()
}

impl Listing {
    pub fn new(title: impl Into<String>, company: impl Into<String>) -> Self {
        Self {
            uuid: Uuid::new_v4(),
            title: title.into(),
            company: company.into(),
            skills: Vec::new(),
            location: String::new(),
            stipend: None,
            posted: None,
        }
    }
}

#[derive(Debug, Deserialize)]
struct ListingSet {
    #[serde(default)]
    version: u32,
    #[serde(default)]
    listings: Vec<Listing>,
}

#[tracing::instrument(skip(raw))]
pub fn parse_listings(raw: &str) -> anyhow::Result<Vec<Listing>> {
    let set: ListingSet =
        toml::from_str(raw).context("failed to parse listing set")?;
    debug!(
        version = set.version,
        count = set.listings.len(),
        "parsed listing set"
    );
    Ok(set.listings)
}

#[cfg(test)]
mod tests {
    use super::parse_listings;

    #[test]
    fn listing_set_parses_with_defaults() {
        let raw = r#"
            version = 1

            [[listings]]
            title = "Data Analyst Intern"
            company = "Acme"
            skills = ["Python", "SQL"]
            location = "Remote"
            stipend = "₹15,000/mo"
            posted = "2026-07-30T09:00:00Z"

            [[listings]]
            title = "Backend Intern"
            company = "DataCorp"
        "#;

        let listings = parse_listings(raw).expect("parse listing set");
        assert_eq!(listings.len(), 2);
        assert_eq!(listings[0].skills.len(), 2);
        assert!(listings[0].posted.is_some());

        // Omitted fields degrade to empty, never to an error.
        assert!(listings[1].skills.is_empty());
        assert!(listings[1].location.is_empty());
        assert!(listings[1].stipend.is_none());
        assert_ne!(listings[0].uuid, listings[1].uuid);
    }

    #[test]
    fn malformed_set_is_an_error_not_a_panic() {
        assert!(parse_listings("listings = 3").is_err());
    }

    #[test]
    fn listing_round_trips_through_json() {
        let listing = super::Listing::new("UX Intern", "Beta Labs");
        let json = serde_json::to_string(&listing).expect("encode listing");
        let back: super::Listing =
            serde_json::from_str(&json).expect("decode listing");
        assert_eq!(listing, back);
    }
}
