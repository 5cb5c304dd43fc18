use chrono::{TimeZone, Utc};
use portal_core::card::parse_listings;
use portal_core::filter::{ListingFilter, visible_listings};
use portal_core::notices::{Notice, NoticeFeed};
use portal_core::prefs::{
    MemoryPrefs, load_sidebar_collapsed, save_sidebar_collapsed,
};
use portal_core::schema::FilterSchema;

const LISTINGS: &str = r#"
version = 1

[[listings]]
title = "Data Analyst Intern"
company = "Acme"
skills = ["Python", "SQL"]
location = "Remote"

[[listings]]
title = "Backend Intern"
company = "DataCorp"
skills = ["Python", "Go"]
location = "Bangalore, India"

[[listings]]
title = "Sales Intern"
company = "Beta"
skills = ["Java"]
location = "Mumbai"
"#;

const FILTERS: &str = r#"
version = 1

[[groups]]
key = "skills"
label = "Skills"
values = ["Python", "Java"]

[[groups]]
key = "location"
label = "Location"
values = ["Remote", "India"]
"#;

#[test]
fn listing_page_flow() {
    let listings = parse_listings(LISTINGS).expect("parse listings");
    let schema = FilterSchema::parse(FILTERS).expect("parse schema");
    assert_eq!(listings.len(), 3);
    assert_eq!(schema.groups.len(), 2);

    // Empty search, nothing checked: every card visible.
    let mut filter = ListingFilter::default();
    assert_eq!(visible_listings(&listings, &filter).len(), 3);

    // Typing "data" matches one title and one company.
    filter.set_search("data");
    let visible = visible_listings(&listings, &filter);
    assert_eq!(visible.len(), 2);
    assert!(visible.iter().all(|l| l.title != "Sales Intern"));

    // Checking a schema-declared skill narrows further; the checkbox value
    // comes straight from the schema asset.
    let skills_group = &schema.groups[0];
    filter.set_selected(&skills_group.key, &skills_group.values[0], true);
    assert_eq!(visible_listings(&listings, &filter).len(), 2);

    // Adding a location keeps only the AND of all three predicates.
    filter.set_selected("location", "India", true);
    let visible = visible_listings(&listings, &filter);
    assert_eq!(visible.len(), 1);
    assert_eq!(visible[0].company, "DataCorp");

    // Clearing restores the boundary condition.
    filter.clear();
    assert_eq!(visible_listings(&listings, &filter).len(), 3);
}

#[test]
fn notification_and_sidebar_flow() {
    let now = Utc.with_ymd_and_hms(2026, 8, 3, 9, 30, 0).single().expect("ts");
    let first = Notice::new("New listing matches your skills", now);
    let first_id = first.uuid;
    let mut feed =
        NoticeFeed::seeded(vec![first, Notice::new("Profile 80% complete", now)]);

    assert_eq!(feed.badge_label().as_deref(), Some("2"));
    assert!(feed.mark_read(first_id));
    assert!(!feed.mark_read(first_id));
    assert_eq!(feed.badge_label().as_deref(), Some("1"));
    feed.mark_all_read();
    assert_eq!(feed.badge_label(), None);

    // Sidebar flag round-trips through the persistence port the way the
    // browser adapter does it.
    let mut store = MemoryPrefs::default();
    assert!(!load_sidebar_collapsed(&store));
    save_sidebar_collapsed(&mut store, true);
    assert!(load_sidebar_collapsed(&store));
    save_sidebar_collapsed(&mut store, false);
    assert!(!load_sidebar_collapsed(&store));
}
