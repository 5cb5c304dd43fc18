use web_sys::{
    HtmlFormElement, HtmlInputElement, HtmlTextAreaElement, SubmitEvent,
};
use yew::{
    Callback, Html, Properties, TargetCast, classes, function_component, html,
    use_state,
};

use crate::dom;

#[derive(Properties, PartialEq)]
pub struct ApplicationFormProps {
    pub on_submitted: Callback<()>,
    pub on_withdrawn: Callback<()>,
}

#[function_component(ApplicationForm)]
pub fn application_form(props: &ApplicationFormProps) -> Html {
    let was_validated = use_state(|| false);
    let resume_label = use_state(|| "Choose resume…".to_string());

    let onsubmit = {
        let was_validated = was_validated.clone();
        let on_submitted = props.on_submitted.clone();
        Callback::from(move |event: SubmitEvent| {
            let Some(form) = event.target_dyn_into::<HtmlFormElement>() else {
                tracing::warn!("submit event had non-form target");
                return;
            };
            was_validated.set(true);
            if !form.check_validity() {
                event.prevent_default();
                event.stop_propagation();
                tracing::debug!("application form blocked by validation");
                return;
            }
            // No backend in scope: a valid submission completes locally.
            event.prevent_default();
            on_submitted.emit(());
        })
    };

    let on_resume_change = {
        let resume_label = resume_label.clone();
        Callback::from(move |event: web_sys::Event| {
            let Some(input) = event.target_dyn_into::<HtmlInputElement>() else {
                return;
            };
            // No file chosen: the label keeps its previous text.
            let Some(file) = input.files().and_then(|files| files.get(0)) else {
                return;
            };
            resume_label.set(file.name());
        })
    };

    let on_cover_input = Callback::from(move |event: web_sys::InputEvent| {
        if let Some(area) = event.target_dyn_into::<HtmlTextAreaElement>() {
            dom::autosize_textarea(&area);
        }
    });

    let on_withdraw = {
        let on_withdrawn = props.on_withdrawn.clone();
        Callback::from(move |event: yew::MouseEvent| {
            let confirmed = dom::confirm_action(
                "Are you sure you want to withdraw this application? This \
                 action cannot be undone.",
            );
            if !confirmed {
                event.prevent_default();
                return;
            }
            on_withdrawn.emit(());
        })
    };

    html! {
        <form
            id="applicationForm"
            class={classes!(
                "application-form",
                "needs-validation",
                (*was_validated).then_some("was-validated")
            )}
            novalidate=true
            {onsubmit}
        >
            <div class="header">{ "Apply" }</div>

            <label class="field">
                <span>{ "Full name" }</span>
                <input type="text" name="name" required=true />
                <span class="invalid-feedback">{ "Please enter your name." }</span>
            </label>

            <label class="field">
                <span>{ "Email" }</span>
                <input type="email" name="email" required=true />
                <span class="invalid-feedback">{ "Please enter a valid email." }</span>
            </label>

            <label class="field">
                <span>{ "Cover letter" }</span>
                <textarea
                    name="cover"
                    rows="3"
                    required=true
                    data-auto-resize="true"
                    oninput={on_cover_input}
                />
                <span class="invalid-feedback">{ "A short cover letter is required." }</span>
            </label>

            <div class="field">
                <label class="file-label" for="resumeInput">
                    { (*resume_label).clone() }
                </label>
                <input
                    id="resumeInput"
                    type="file"
                    name="resume"
                    onchange={on_resume_change}
                />
            </div>

            <div class="actions">
                <button type="submit" class="btn primary">{ "Submit application" }</button>
                <button
                    type="button"
                    class="btn danger"
                    data-confirm-delete="true"
                    onclick={on_withdraw}
                >
                    { "Withdraw" }
                </button>
            </div>
        </form>
    }
}
