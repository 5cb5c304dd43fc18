use chrono::{DateTime, Utc};
use portal_core::notices::Notice;
use uuid::Uuid;
use yew::{Callback, Html, Properties, function_component, html, use_state};

#[derive(Properties, PartialEq)]
pub struct NavbarProps {
    /// Unread-count label; `None` hides the badge entirely.
    pub badge: Option<String>,
    pub notices: Vec<Notice>,
    pub now: DateTime<Utc>,
    pub on_toggle_sidebar: Callback<()>,
    pub on_read: Callback<Uuid>,
    pub on_read_all: Callback<()>,
}

#[function_component(Navbar)]
pub fn navbar(props: &NavbarProps) -> Html {
    let menu_open = use_state(|| false);

    let toggle_sidebar = {
        let on_toggle_sidebar = props.on_toggle_sidebar.clone();
        Callback::from(move |_| on_toggle_sidebar.emit(()))
    };

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_| menu_open.set(!*menu_open))
    };

    let read_all = {
        let on_read_all = props.on_read_all.clone();
        Callback::from(move |_| on_read_all.emit(()))
    };

    html! {
        <header class="navbar">
            <button
                id="sidebarToggle"
                class="btn icon"
                data-tooltip="Toggle sidebar"
                onclick={toggle_sidebar}
            >
                { "☰" }
            </button>
            <div class="brand">{ "Smart Internship Portal" }</div>
            <div class="spacer"></div>
            <div class="bell">
                <button
                    class="btn icon"
                    data-tooltip="Notifications"
                    onclick={toggle_menu}
                >
                    { "🔔" }
                    {
                        match &props.badge {
                            Some(label) => html! {
                                <span class="badge unread-badge">{ label.clone() }</span>
                            },
                            None => html! {},
                        }
                    }
                </button>
                {
                    if *menu_open {
                        html! {
                            <div class="notification-menu">
                                <div class="menu-head">
                                    <span>{ "Notifications" }</span>
                                    <button class="btn link" onclick={read_all}>
                                        { "Mark all read" }
                                    </button>
                                </div>
                                {
                                    for props.notices.iter().map(|notice| {
                                        let id = notice.uuid;
                                        let on_read = props.on_read.clone();
                                        let class = if notice.read {
                                            "notification-item"
                                        } else {
                                            "notification-item unread"
                                        };
                                        html! {
                                            <div {class} onclick={move |_| on_read.emit(id)}>
                                                <div>{ &notice.message }</div>
                                                <div class="age">{ notice.age_label(props.now) }</div>
                                            </div>
                                        }
                                    })
                                }
                            </div>
                        }
                    } else {
                        html! {}
                    }
                }
            </div>
        </header>
    }
}
