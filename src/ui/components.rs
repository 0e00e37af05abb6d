/// Reusable UI components

use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct SpinnerProps {
    #[prop_or_default]
    pub message: Option<String>,
}

#[function_component(Spinner)]
pub fn spinner(props: &SpinnerProps) -> Html {
    html! {
        <div class="loading-container">
            <div class="loading-spinner"></div>
            if let Some(msg) = &props.message {
                <p class="loading-message">{msg}</p>
            }
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct SubmitButtonProps {
    pub children: Children,
    #[prop_or(false)]
    pub disabled: bool,
}

#[function_component(SubmitButton)]
pub fn submit_button(props: &SubmitButtonProps) -> Html {
    let base_style = "padding: 10px 20px; border: none; border-radius: 4px; font-size: 14px; cursor: pointer; font-weight: 500; transition: all 0.2s; background-color: #5B4FE8; color: white;";

    let disabled_style = if props.disabled {
        "opacity: 0.5; cursor: not-allowed;"
    } else {
        ""
    };

    html! {
        <button
            type="submit"
            disabled={props.disabled}
            style={format!("{} {}", base_style, disabled_style)}
        >
            {props.children.clone()}
        </button>
    }
}

#[derive(Properties, PartialEq)]
pub struct ErrorBannerProps {
    pub message: String,
}

#[function_component(ErrorBanner)]
pub fn error_banner(props: &ErrorBannerProps) -> Html {
    html! {
        <div id="errorBanner" style="padding: 12px; border-radius: 4px; background-color: #ffebee; border-left: 4px solid #f44336; margin: 10px 0;">
            <p style="color: red;">{&props.message}</p>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct ResultSectionProps {
    pub id: AttrValue,
    /// Pre-rendered fragment; all interpolated text is already escaped
    pub html: AttrValue,
}

#[function_component(ResultSection)]
pub fn result_section(props: &ResultSectionProps) -> Html {
    html! {
        <div id={props.id.clone()} class="result-section">
            {Html::from_html_unchecked(props.html.clone())}
        </div>
    }
}
