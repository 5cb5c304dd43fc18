use std::collections::BTreeSet;

use chrono::Utc;
use gloo::console::log;
use portal_core::filter::{ListingFilter, visible_listings};
use portal_core::notices::Notice;
use portal_core::prefs::{load_sidebar_collapsed, save_sidebar_collapsed};
use portal_core::toast::{Flash, ToastLevel};
use uuid::Uuid;
use web_sys::HtmlInputElement;
use yew::{
    Callback, Html, TargetCast, classes, function_component, html,
    use_effect_with, use_state,
};

use crate::components::{
    ApplicationForm, FilterPanel, FlashStack, ListingCard, Navbar, Sidebar,
    StatTiles,
};
use crate::config;
use crate::dom;
use crate::storage::BrowserPrefs;
use crate::toast;

#[function_component(App)]
pub fn app() -> Html {
    let collapsed = use_state(|| load_sidebar_collapsed(&BrowserPrefs));
    let filter = use_state(ListingFilter::default);
    let schema = use_state(config::load_filter_schema);
    let listings = use_state(config::load_listings);
    let notices = use_state(config::seed_notices);
    let flashes = use_state(|| {
        vec![
            Flash::new(
                "Welcome back! New internships were posted this week.",
                ToastLevel::Info,
            ),
            Flash::permanent(
                "Your profile is 75% complete. Add skills to improve matches.",
                ToastLevel::Warning,
            ),
        ]
    });

    {
        use_effect_with((), move |_| {
            ui_debug("app.mounted", "frontend mounted and hooks initialized");
            dom::install_page_behaviors();
            || ()
        });
    }

    {
        use_effect_with(*collapsed, move |state| {
            save_sidebar_collapsed(&mut BrowserPrefs, *state);
            || ()
        });
    }

    let visible = visible_listings(&listings, &filter);
    let visible_ids: BTreeSet<Uuid> =
        visible.iter().map(|listing| listing.uuid).collect();
    let companies: BTreeSet<String> = listings
        .iter()
        .map(|listing| listing.company.to_ascii_lowercase())
        .collect();
    let now = Utc::now();

    let on_toggle_sidebar = {
        let collapsed = collapsed.clone();
        Callback::from(move |_| {
            ui_debug("action.sidebar.toggle", "sidebar toggle clicked");
            collapsed.set(!*collapsed);
        })
    };

    let on_search = {
        let filter = filter.clone();
        Callback::from(move |event: web_sys::InputEvent| {
            if let Some(input) = event.target_dyn_into::<HtmlInputElement>() {
                let mut next = (*filter).clone();
                next.set_search(&input.value());
                filter.set(next);
            } else {
                tracing::warn!("search input event had non-input target");
            }
        })
    };

    let on_toggle_filter = {
        let filter = filter.clone();
        Callback::from(move |(group, value, checked): (String, String, bool)| {
            let mut next = (*filter).clone();
            next.set_selected(&group, &value, checked);
            filter.set(next);
        })
    };

    let on_clear_filters = {
        let filter = filter.clone();
        Callback::from(move |_| filter.set(ListingFilter::default()))
    };

    let on_read = {
        let notices = notices.clone();
        Callback::from(move |uuid: Uuid| {
            let mut next = (*notices).clone();
            if next.mark_read(uuid) {
                notices.set(next);
            }
        })
    };

    let on_read_all = {
        let notices = notices.clone();
        Callback::from(move |_| {
            let mut next = (*notices).clone();
            if next.mark_all_read() > 0 {
                notices.set(next);
            }
        })
    };

    let on_dismiss_flash = {
        let flashes = flashes.clone();
        Callback::from(move |uuid: Uuid| {
            let mut next = (*flashes).clone();
            let before = next.len();
            next.retain(|flash| flash.uuid != uuid);
            // The auto-dismiss timer can fire after a manual close; there
            // is nothing left to remove then.
            if next.len() != before {
                flashes.set(next);
            }
        })
    };

    let on_submitted = {
        let flashes = flashes.clone();
        let notices = notices.clone();
        Callback::from(move |_| {
            let mut next = (*flashes).clone();
            next.push(Flash::new("Application submitted.", ToastLevel::Success));
            flashes.set(next);

            let mut feed = (*notices).clone();
            feed.push(Notice::new(
                "Your application was submitted and is awaiting review",
                Utc::now(),
            ));
            notices.set(feed);

            toast::show_toast(
                "Application submitted".to_string(),
                Some("success".to_string()),
            );
        })
    };

    let on_withdrawn = {
        let flashes = flashes.clone();
        Callback::from(move |_| {
            let mut next = (*flashes).clone();
            next.push(Flash::new("Application withdrawn.", ToastLevel::Warning));
            flashes.set(next);
            toast::show_toast(
                "Application withdrawn".to_string(),
                Some("warning".to_string()),
            );
        })
    };

    html! {
        <div class="portal">
            <Navbar
                badge={notices.badge_label()}
                notices={notices.items().to_vec()}
                {now}
                on_toggle_sidebar={on_toggle_sidebar}
                on_read={on_read}
                on_read_all={on_read_all}
            />
            <Sidebar collapsed={*collapsed} />
            <main
                id="mainContent"
                class={classes!(
                    "main-content",
                    (*collapsed).then_some("expanded")
                )}
            >
                <FlashStack flashes={(*flashes).clone()} on_dismiss={on_dismiss_flash} />

                <section id="overview">
                    <StatTiles
                        total={listings.len()}
                        companies={companies.len()}
                        visible={visible.len()}
                    />
                </section>

                <section id="listings">
                    <div class="listing-tools">
                        <input
                            id="searchInternships"
                            type="search"
                            placeholder="Search by title or company"
                            data-tooltip="Search internships"
                            value={filter.search().to_string()}
                            oninput={on_search}
                        />
                        <button class="btn link" onclick={on_clear_filters}>
                            { "Clear filters" }
                        </button>
                    </div>
                    <div class="listing-layout">
                        <FilterPanel
                            schema={(*schema).clone()}
                            filter={(*filter).clone()}
                            on_toggle={on_toggle_filter}
                        />
                        <div class="listing-grid">
                            {
                                for listings.iter().map(|listing| {
                                    let visible = visible_ids.contains(&listing.uuid);
                                    html! {
                                        <ListingCard
                                            key={listing.uuid.to_string()}
                                            listing={listing.clone()}
                                            {visible}
                                        />
                                    }
                                })
                            }
                            {
                                if visible.is_empty() {
                                    html! {
                                        <div class="empty-note">
                                            { "No internships match the current search and filters." }
                                        </div>
                                    }
                                } else {
                                    html! {}
                                }
                            }
                        </div>
                    </div>
                </section>

                <section id="apply">
                    <ApplicationForm
                        on_submitted={on_submitted}
                        on_withdrawn={on_withdrawn}
                    />
                </section>
            </main>
        </div>
    }
}

fn ui_debug(event: &str, detail: &str) {
    tracing::debug!(event, detail, "ui-debug");
    log!(format!("[ui-debug] {event}: {detail}"));
}
