//! View rendering for the prediction page.
//!
//! The form is split into three cards (customer, financial, account). Inputs
//! are plain controlled elements keyed by `FormField::key`; their raw strings
//! go straight into the session, which owns coercion and validation.

use super::dialogs::result::result_dialog;
use super::helpers::{submit_label, PREDICTION_FAILED};
use super::messages::Msg;
use super::state::PredictionComponent;
use common::model::customer::{flag_code, flag_label};
use common::model::{Gender, Geography};
use common::validation::{FormField, CREDIT_SCORE_MAX, CREDIT_SCORE_MIN};
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::html::Scope;
use yew::prelude::*;

/// Main view function: header, error banner, the three form cards and the
/// result dialog.
pub fn view(component: &PredictionComponent, ctx: &Context<PredictionComponent>) -> Html {
    let link = ctx.link();
    let on_submit = link.callback(|e: SubmitEvent| {
        e.prevent_default();
        Msg::Submit
    });

    html! {
        <div class="predict-page">
            { build_header(ctx) }
            <div class="predict-body">
                { build_error_banner(component) }
                <form class="prediction-form" onsubmit={on_submit} novalidate=true>
                    { build_customer_card(component, link) }
                    { build_financial_card(component, link) }
                    { build_account_card(component, link) }
                    <button
                        type="submit"
                        class="btn btn-primary btn-block"
                        disabled={!component.session.can_submit()}
                    >
                        { submit_label(&component.session) }
                    </button>
                </form>
            </div>
            { result_dialog(component, link) }
        </div>
    }
}

fn build_header(ctx: &Context<PredictionComponent>) -> Html {
    let back = ctx.props().on_back.clone().map(|on_back| {
        let onclick = Callback::from(move |_: MouseEvent| on_back.emit(()));
        html! { <button class="back-link" {onclick}>{"← Back to Home"}</button> }
    });

    html! {
        <div class="predict-header">
            { for back }
            <h1>
                <span class="text-red">{"Predict"}</span>{" Customer "}<span class="text-yellow">{"Churn"}</span>
            </h1>
            <p class="muted">{"Enter customer details to get an instant prediction"}</p>
        </div>
    }
}

fn build_error_banner(component: &PredictionComponent) -> Html {
    match component.session.error() {
        Some(details) => html! {
            <div class="alert alert-error" role="alert">
                <div class="alert-title">{"Error"}</div>
                <div>{ PREDICTION_FAILED }</div>
                {
                    if details.is_empty() {
                        html! {}
                    } else {
                        html! { <div class="alert-details">{ details }</div> }
                    }
                }
            </div>
        },
        None => html! {},
    }
}

fn card(title: &str, accent: &'static str, body: Html) -> Html {
    html! {
        <section class={classes!("card", accent)}>
            <div class="card-header"><h2>{ title }</h2></div>
            <div class="card-body">{ body }</div>
        </section>
    }
}

fn build_customer_card(component: &PredictionComponent, link: &Scope<PredictionComponent>) -> Html {
    let genders: Vec<(String, &str)> = Gender::ALL
        .iter()
        .map(|g| (g.code().to_string(), g.label()))
        .collect();

    card(
        "Customer Information",
        "accent-red",
        html! {
            <>
                { text_input(component, link, FormField::CustomerName, "text", Some("Enter customer name"), None) }
                <div class="grid-2">
                    { select_input(component, link, FormField::Gender, &genders) }
                    { text_input(component, link, FormField::Age, "number", None, None) }
                </div>
                { geography_input(component, link) }
            </>
        },
    )
}

fn build_financial_card(component: &PredictionComponent, link: &Scope<PredictionComponent>) -> Html {
    let score_hint = format!("Score between {}-{}", CREDIT_SCORE_MIN, CREDIT_SCORE_MAX);
    card(
        "Financial Information",
        "accent-yellow",
        html! {
            <>
                <div class="grid-2">
                    { text_input(component, link, FormField::CreditScore, "number", None, Some(score_hint)) }
                    { text_input(component, link, FormField::EstimatedSalary, "number", None, None) }
                </div>
                <div class="grid-2">
                    { text_input(component, link, FormField::Balance, "number", None, None) }
                    { select_input(component, link, FormField::HasCreditCard, &yes_no()) }
                </div>
            </>
        },
    )
}

fn build_account_card(component: &PredictionComponent, link: &Scope<PredictionComponent>) -> Html {
    card(
        "Account Information",
        "accent-red",
        html! {
            <div class="grid-3">
                { text_input(component, link, FormField::Tenure, "number", None, None) }
                { text_input(component, link, FormField::NumOfProducts, "number", None, None) }
                { select_input(component, link, FormField::IsActiveMember, &yes_no()) }
            </div>
        },
    )
}

fn yes_no() -> Vec<(String, &'static str)> {
    [true, false]
        .into_iter()
        .map(|flag| (flag_code(flag).to_string(), flag_label(flag)))
        .collect()
}

/// Label, control and the inline error of one field.
fn field_frame(component: &PredictionComponent, field: FormField, control: Html, hint: Option<String>) -> Html {
    let error = component.session.form().visible_error(field);
    html! {
        <div class={classes!("field", error.is_some().then_some("field-invalid"))}>
            <label for={field.key()}>{ field.label() }</label>
            { control }
            { for hint.map(|h| html! { <div class="field-hint">{ h }</div> }) }
            { for error.map(|e| html! { <div class="field-error">{ e.to_string() }</div> }) }
        </div>
    }
}

fn text_input(
    component: &PredictionComponent,
    link: &Scope<PredictionComponent>,
    field: FormField,
    input_type: &'static str,
    placeholder: Option<&'static str>,
    hint: Option<String>,
) -> Html {
    let oninput = link.callback(move |e: InputEvent| {
        let input: HtmlInputElement = e.target_unchecked_into();
        Msg::SetField(field, input.value())
    });
    let control = html! {
        <input
            id={field.key()}
            type={input_type}
            value={component.session.form().value(field).to_string()}
            placeholder={placeholder}
            {oninput}
        />
    };
    field_frame(component, field, control, hint)
}

fn select_input(
    component: &PredictionComponent,
    link: &Scope<PredictionComponent>,
    field: FormField,
    options: &[(String, &str)],
) -> Html {
    let current = component.session.form().value(field);
    let onchange = link.callback(move |e: Event| {
        let select: HtmlSelectElement = e.target_unchecked_into();
        Msg::SetField(field, select.value())
    });
    let control = html! {
        <select id={field.key()} {onchange}>
            <option value="" disabled=true selected={current.is_empty()}>{ "Select..." }</option>
            {
                for options.iter().map(|(value, label)| html! {
                    <option value={value.clone()} selected={value == current}>{ *label }</option>
                })
            }
        </select>
    };
    field_frame(component, field, control, None)
}

fn geography_input(component: &PredictionComponent, link: &Scope<PredictionComponent>) -> Html {
    let current = component.session.form().value(FormField::Geography);
    let control = html! {
        <div class="radio-group" id={FormField::Geography.key()}>
            {
                for Geography::ALL.iter().map(|geography| {
                    let name = geography.name();
                    let id = format!("geography-{}", name.to_lowercase());
                    let onchange = link.callback(move |_: Event| Msg::SetField(FormField::Geography, name.to_string()));
                    html! {
                        <label for={id.clone()} class={classes!("radio-pill", (current == name).then_some("checked"))}>
                            <input
                                type="radio"
                                id={id}
                                name="geography"
                                value={name}
                                checked={current == name}
                                {onchange}
                            />
                            { name }
                        </label>
                    }
                })
            }
        </div>
    };
    field_frame(component, FormField::Geography, control, None)
}
