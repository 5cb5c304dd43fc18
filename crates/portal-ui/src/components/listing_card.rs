use portal_core::card::Listing;
use yew::{Html, Properties, function_component, html};

#[derive(Properties, PartialEq)]
pub struct ListingCardProps {
    pub listing: Listing,
    /// Hidden cards stay in the document so the reveal observer keeps a
    /// stable node to watch; only their display toggles.
    pub visible: bool,
}

#[function_component(ListingCard)]
pub fn listing_card(props: &ListingCardProps) -> Html {
    let listing = &props.listing;
    let style = if props.visible { "" } else { "display:none;" };

    html! {
        <div
            class="internship-card"
            data-reveal={listing.uuid.to_string()}
            {style}
        >
            <div class="internship-title">{ &listing.title }</div>
            <div class="internship-company">{ &listing.company }</div>
            <div class="card-badges">
                {
                    for listing.skills.iter().map(|skill| html! {
                        <span class="badge skill-badge">{ skill }</span>
                    })
                }
            </div>
            <div class="card-meta">
                <span class="meta-item">{ &listing.location }</span>
                {
                    match &listing.stipend {
                        Some(stipend) => html! {
                            <span class="meta-item">{ stipend }</span>
                        },
                        None => html! {},
                    }
                }
            </div>
        </div>
    }
}
