use yew::{Html, Properties, function_component, html};

#[derive(Properties, PartialEq)]
pub struct StatTilesProps {
    pub total: usize,
    pub companies: usize,
    pub visible: usize,
}

#[function_component(StatTiles)]
pub fn stat_tiles(props: &StatTilesProps) -> Html {
    let tile = |key: &str, label: &str, value: usize| {
        html! {
            <div class="stat-card" data-reveal={format!("stat-{key}")}>
                <div class="stat-value">{ value }</div>
                <div class="stat-label">{ label }</div>
            </div>
        }
    };

    html! {
        <div class="stat-row">
            { tile("listings", "Open internships", props.total) }
            { tile("companies", "Companies hiring", props.companies) }
            { tile("matches", "Matching your filters", props.visible) }
        </div>
    }
}
