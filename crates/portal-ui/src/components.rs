mod alerts;
mod application_form;
mod filter_panel;
mod listing_card;
mod navbar;
mod sidebar;
mod stat_tiles;

pub use alerts::FlashStack;
pub use application_form::ApplicationForm;
pub use filter_panel::FilterPanel;
pub use listing_card::ListingCard;
pub use navbar::Navbar;
pub use sidebar::Sidebar;
pub use stat_tiles::StatTiles;
