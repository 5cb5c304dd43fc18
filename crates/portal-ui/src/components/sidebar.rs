use yew::{Callback, Html, Properties, classes, function_component, html};

use crate::dom;

#[derive(Properties, PartialEq)]
pub struct SidebarProps {
    pub collapsed: bool,
}

#[function_component(Sidebar)]
pub fn sidebar(props: &SidebarProps) -> Html {
    let make_item = |target: &str, label: &str| {
        let target_id = target.to_string();
        let href = format!("#{target}");
        // Smooth-scroll when the section exists; a dangling anchor keeps
        // its native behavior.
        let onclick = Callback::from(move |event: yew::MouseEvent| {
            if dom::smooth_scroll_to(&target_id) {
                event.prevent_default();
            }
        });
        html! {
            <a class="item" {href} {onclick}>{ label }</a>
        }
    };

    html! {
        <nav
            id="sidebar"
            class={classes!("sidebar", props.collapsed.then_some("collapsed"))}
        >
            <div class="header">{ "Views" }</div>
            { make_item("overview", "Overview") }
            { make_item("listings", "Internships") }
            { make_item("apply", "Apply") }
        </nav>
    }
}
