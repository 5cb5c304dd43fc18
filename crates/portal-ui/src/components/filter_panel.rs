use portal_core::filter::ListingFilter;
use portal_core::schema::FilterSchema;
use web_sys::HtmlInputElement;
use yew::{Callback, Html, Properties, TargetCast, function_component, html};

#[derive(Properties, PartialEq)]
pub struct FilterPanelProps {
    pub schema: FilterSchema,
    pub filter: ListingFilter,
    /// (group key, value, checked)
    pub on_toggle: Callback<(String, String, bool)>,
}

#[function_component(FilterPanel)]
pub fn filter_panel(props: &FilterPanelProps) -> Html {
    html! {
        <aside class="panel filter-panel">
            {
                for props.schema.groups.iter().map(|group| html! {
                    <div class="filter-group">
                        <div class="header">{ group.label() }</div>
                        {
                            for group.values.iter().map(|value| {
                                let group_key = group.key.clone();
                                let value_string = value.clone();
                                let on_toggle = props.on_toggle.clone();
                                let checked = props.filter.is_selected(&group.key, value);
                                let onchange = Callback::from(move |event: web_sys::Event| {
                                    if let Some(input) =
                                        event.target_dyn_into::<HtmlInputElement>()
                                    {
                                        on_toggle.emit((
                                            group_key.clone(),
                                            value_string.clone(),
                                            input.checked(),
                                        ));
                                    } else {
                                        tracing::warn!(
                                            "filter checkbox event had non-input target"
                                        );
                                    }
                                });
                                html! {
                                    <label class="filter-option">
                                        <input
                                            type="checkbox"
                                            class="filter-checkbox"
                                            data-filter-type={group.key.clone()}
                                            {checked}
                                            {onchange}
                                        />
                                        <span>{ value }</span>
                                    </label>
                                }
                            })
                        }
                    </div>
                })
            }
        </aside>
    }
}
