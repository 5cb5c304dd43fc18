use gloo::timers::future::TimeoutFuture;
use portal_core::toast::{AUTO_DISMISS_MS, Flash};
use uuid::Uuid;
use yew::{
    Callback, Html, Properties, classes, function_component, html,
    use_effect_with,
};

#[derive(Properties, PartialEq)]
pub struct FlashStackProps {
    pub flashes: Vec<Flash>,
    pub on_dismiss: Callback<Uuid>,
}

#[function_component(FlashStack)]
pub fn flash_stack(props: &FlashStackProps) -> Html {
    html! {
        <div class="flash-stack">
            {
                for props.flashes.iter().map(|flash| html! {
                    <FlashAlert
                        key={flash.uuid.to_string()}
                        flash={flash.clone()}
                        on_dismiss={props.on_dismiss.clone()}
                    />
                })
            }
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct FlashAlertProps {
    flash: Flash,
    on_dismiss: Callback<Uuid>,
}

#[function_component(FlashAlert)]
fn flash_alert(props: &FlashAlertProps) -> Html {
    let uuid = props.flash.uuid;

    {
        let on_dismiss = props.on_dismiss.clone();
        let permanent = props.flash.permanent;
        use_effect_with(uuid, move |_| {
            if !permanent {
                wasm_bindgen_futures::spawn_local(async move {
                    TimeoutFuture::new(AUTO_DISMISS_MS).await;
                    // Same path as the close button; dismissing an alert
                    // that was already closed by hand is a no-op upstream.
                    on_dismiss.emit(uuid);
                });
            }
            || ()
        });
    }

    let on_close = {
        let on_dismiss = props.on_dismiss.clone();
        Callback::from(move |_| on_dismiss.emit(uuid))
    };

    html! {
        <div
            class={classes!(
                "alert",
                format!("alert-{}", props.flash.level.as_class()),
                props.flash.permanent.then_some("alert-permanent")
            )}
            role="alert"
        >
            <span>{ &props.flash.message }</span>
            <button class="btn-close" aria-label="Close" onclick={on_close}></button>
        </div>
    }
}
