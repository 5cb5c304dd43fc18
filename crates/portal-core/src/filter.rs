use std::collections::BTreeSet;

use tracing::{trace, warn};

use crate::card::Listing;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterGroup {
    Skills,
    Location,
}

impl FilterGroup {
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "skills" => Some(Self::Skills),
            "location" => Some(Self::Location),
            _ => None,
        }
    }

    pub fn as_key(self) -> &'static str {
        match self {
            Self::Skills => "skills",
            Self::Location => "location",
        }
    }
}

/// The current search text plus the checked values of every filter group,
/// all normalized to lowercase. Visibility of a listing is the AND of the
/// three predicates; empty inputs match everything.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListingFilter {
    search: String,
    skills: BTreeSet<String>,
    locations: BTreeSet<String>,
}

impl ListingFilter {
    pub fn set_search(&mut self, raw: &str) {
        self.search = raw.to_ascii_lowercase();
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    /// Records one checkbox change. Unknown group keys are ignored so a
    /// stray control cannot poison the whole panel.
    pub fn set_selected(&mut self, group_key: &str, value: &str, selected: bool) {
        let Some(group) = FilterGroup::from_key(group_key) else {
            warn!(group_key, "ignoring checkbox with unknown filter group");
            return;
        };

        let normalized = value.trim().to_ascii_lowercase();
        let set = match group {
            FilterGroup::Skills => &mut self.skills,
            FilterGroup::Location => &mut self.locations,
        };

        if selected {
            set.insert(normalized);
        } else {
            set.remove(&normalized);
        }
    }

    pub fn is_selected(&self, group_key: &str, value: &str) -> bool {
        let normalized = value.trim().to_ascii_lowercase();
        match FilterGroup::from_key(group_key) {
            Some(FilterGroup::Skills) => self.skills.contains(&normalized),
            Some(FilterGroup::Location) => self.locations.contains(&normalized),
            None => false,
        }
    }

    pub fn clear(&mut self) {
        self.search.clear();
        self.skills.clear();
        self.locations.clear();
    }

    pub fn is_unfiltered(&self) -> bool {
        self.search.is_empty() && self.skills.is_empty() && self.locations.is_empty()
    }

    pub fn matches(&self, listing: &Listing) -> bool {
        let ok = self.text_matches(listing)
            && self.skill_matches(listing)
            && self.location_matches(listing);
        trace!(uuid = %listing.uuid, ok, "listing visibility evaluation");
        ok
    }

    fn text_matches(&self, listing: &Listing) -> bool {
        if self.search.is_empty() {
            return true;
        }
        listing.title.to_ascii_lowercase().contains(&self.search)
            || listing.company.to_ascii_lowercase().contains(&self.search)
    }

    fn skill_matches(&self, listing: &Listing) -> bool {
        if self.skills.is_empty() {
            return true;
        }
        listing
            .skills
            .iter()
            .any(|skill| self.skills.contains(&skill.trim().to_ascii_lowercase()))
    }

    fn location_matches(&self, listing: &Listing) -> bool {
        if self.locations.is_empty() {
            return true;
        }
        let location = listing.location.to_ascii_lowercase();
        self.locations.iter().any(|wanted| location.contains(wanted.as_str()))
    }
}

pub fn visible_listings(listings: &[Listing], filter: &ListingFilter) -> Vec<Listing> {
    listings
        .iter()
        .filter(|listing| filter.matches(listing))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::{FilterGroup, ListingFilter, visible_listings};
    use crate::card::Listing;

    fn sample() -> Vec<Listing> {
        let mut data = Listing::new("Data Analyst Intern", "Acme");
        data.skills = vec!["Python".to_string(), "SQL".to_string()];
        data.location = "Remote".to_string();

        let mut backend = Listing::new("Backend Intern", "DataCorp");
        backend.skills = vec![" python ".to_string(), "Go".to_string()];
        backend.location = "Bangalore, India".to_string();

        let mut sales = Listing::new("Sales Intern", "Beta");
        sales.skills = vec!["Java".to_string()];
        sales.location = "Mumbai".to_string();

        vec![data, backend, sales]
    }

    #[test]
    fn unfiltered_shows_everything() {
        let listings = sample();
        let filter = ListingFilter::default();
        assert!(filter.is_unfiltered());
        assert_eq!(visible_listings(&listings, &filter).len(), listings.len());
    }

    #[test]
    fn search_matches_title_or_company() {
        let listings = sample();
        let mut filter = ListingFilter::default();
        filter.set_search("DATA");

        let visible = visible_listings(&listings, &filter);
        assert_eq!(visible.len(), 2);
        assert!(visible.iter().any(|l| l.title == "Data Analyst Intern"));
        assert!(visible.iter().any(|l| l.company == "DataCorp"));
    }

    #[test]
    fn skill_filter_is_exact_after_trim_and_case_fold() {
        let listings = sample();
        let mut filter = ListingFilter::default();
        filter.set_selected("skills", "Python", true);

        let visible = visible_listings(&listings, &filter);
        assert_eq!(visible.len(), 2);
        assert!(visible.iter().all(|l| l.title != "Sales Intern"));

        filter.set_selected("skills", "Python", false);
        assert!(filter.is_unfiltered());
    }

    #[test]
    fn location_filter_is_substring_match() {
        let listings = sample();
        let mut filter = ListingFilter::default();
        filter.set_selected("location", "India", true);

        let visible = visible_listings(&listings, &filter);
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].company, "DataCorp");
    }

    #[test]
    fn predicates_are_anded_in_any_order() {
        let listings = sample();

        let mut search_first = ListingFilter::default();
        search_first.set_search("intern");
        search_first.set_selected("skills", "python", true);
        search_first.set_selected("location", "remote", true);

        let mut filters_first = ListingFilter::default();
        filters_first.set_selected("location", "remote", true);
        filters_first.set_selected("skills", "python", true);
        filters_first.set_search("intern");

        assert_eq!(
            visible_listings(&listings, &search_first),
            visible_listings(&listings, &filters_first)
        );
        assert_eq!(visible_listings(&listings, &search_first).len(), 1);
    }

    #[test]
    fn missing_fields_never_match_an_active_filter() {
        let bare = vec![Listing::new("Mystery Intern", "")];

        let mut filter = ListingFilter::default();
        filter.set_selected("skills", "python", true);
        assert!(visible_listings(&bare, &filter).is_empty());

        let mut filter = ListingFilter::default();
        filter.set_selected("location", "remote", true);
        assert!(visible_listings(&bare, &filter).is_empty());

        // An empty-string filter value would substring-match everything;
        // the empty search path short-circuits instead.
        let mut filter = ListingFilter::default();
        filter.set_search("");
        assert_eq!(visible_listings(&bare, &filter).len(), 1);
    }

    #[test]
    fn unknown_group_key_is_ignored() {
        let listings = sample();
        let mut filter = ListingFilter::default();
        filter.set_selected("salary", "high", true);
        assert!(filter.is_unfiltered());
        assert_eq!(visible_listings(&listings, &filter).len(), listings.len());
        assert!(!filter.is_selected("salary", "high"));
    }

    #[test]
    fn group_keys_round_trip() {
        for group in [FilterGroup::Skills, FilterGroup::Location] {
            assert_eq!(FilterGroup::from_key(group.as_key()), Some(group));
        }
        assert_eq!(FilterGroup::from_key("stipend"), None);
    }
}
