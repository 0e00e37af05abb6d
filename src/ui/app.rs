/// Main page for Domain Insights

use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::config::{KEY_ENDPOINT, KeyState, load_config};
use crate::error::InsightsError;
use crate::http::BrowserTransport;
use crate::pipeline::InsightsClient;
use crate::submission::{SubmissionFlow, run_lookup};
use crate::ui::components::{ErrorBanner, ResultSection, Spinner, SubmitButton};

pub const KEY_LOAD_FAILED_MESSAGE: &str = "Failed to load API key. Please try again later.";

#[function_component(App)]
pub fn app() -> Html {
    let key_state = use_state(|| KeyState::Loading);
    let flow = use_mut_ref(SubmissionFlow::new);
    let view = use_state(SubmissionFlow::new);
    let input_ref = use_node_ref();

    // Load the API key on mount
    {
        let key_state = key_state.clone();
        use_effect_with((), move |_| {
            spawn_local(async move {
                match load_config(&BrowserTransport, KEY_ENDPOINT).await {
                    Ok(config) => key_state.set(KeyState::Ready(config)),
                    Err(e) => {
                        log::error!("Error loading API key: {}", e);
                        key_state.set(KeyState::Failed(KEY_LOAD_FAILED_MESSAGE.to_string()));
                    }
                }
            });
            || ()
        });
    }

    let on_submit = {
        let key_state = key_state.clone();
        let flow = flow.clone();
        let view = view.clone();
        let input_ref = input_ref.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let raw = input_ref
                .cast::<HtmlInputElement>()
                .map(|input| input.value())
                .unwrap_or_default();

            let begun = flow.borrow_mut().begin(&raw);
            view.set(flow.borrow().clone());

            let domain = match begun {
                Ok(domain) => domain,
                Err(InsightsError::SubmissionInFlight) => {
                    log::warn!("Lookup already in progress, ignoring submission");
                    return;
                }
                Err(e) => {
                    alert(&e.to_string());
                    return;
                }
            };

            let client = InsightsClient::for_browser(key_state.config().cloned());
            let flow = flow.clone();
            let view = view.clone();

            spawn_local(async move {
                let outcome = run_lookup(&client, &domain).await;
                if let Err(e) = &outcome {
                    log::error!("Error fetching data: {}", e);
                }

                let message = flow.borrow_mut().finish(outcome);
                view.set(flow.borrow().clone());

                if let Some(message) = message {
                    alert(&message);
                }
            });
        })
    };

    let loading_style = if view.spinner_visible() { "display: flex;" } else { "display: none;" };
    let results_style = if view.results_visible() { "display: block;" } else { "display: none;" };

    html! {
        <div class="padding-20">
            <h1 class="page-title">{"Domain Insights"}</h1>

            if let KeyState::Failed(message) = &*key_state {
                <ErrorBanner message={message.clone()} />
            }

            <form id="domainForm" onsubmit={on_submit}>
                <input
                    id="domainInput"
                    type="text"
                    placeholder="Enter a domain, e.g. example.com"
                    ref={input_ref}
                />
                <SubmitButton disabled={view.is_loading()}>
                    {"Analyze"}
                </SubmitButton>
            </form>

            <div id="loading" style={loading_style}>
                <Spinner message={Some("Fetching insights...".to_string())} />
            </div>

            <div id="results" style={results_style}>
                if let Some(results) = view.results() {
                    <>
                        <h2 id="resultsHeading">{&results.heading}</h2>
                        {for results.sections.iter().map(|section| html! {
                            <ResultSection
                                id={section.region.id().to_string()}
                                html={section.html.clone()}
                            />
                        })}
                    </>
                }
            </div>
        </div>
    }
}

fn alert(message: &str) {
    if let Some(window) = web_sys::window() {
        if let Err(e) = window.alert_with_message(message) {
            log::error!("Failed to show alert: {:?}", e);
        }
    }
}
