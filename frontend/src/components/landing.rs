use yew::{classes, html, Callback, Component, Context, Html, MouseEvent, Properties};

#[derive(Properties, PartialEq)]
pub struct LandingProps {
    pub on_start: Callback<()>,
}

/// Marketing page shown before the first prediction.
pub struct Landing;

const FEATURES: [(&str, &str, &str); 3] = [
    (
        "accent-red",
        "Accurate Predictions",
        "Our model uses advanced machine learning algorithms to predict customer churn with high accuracy.",
    ),
    (
        "accent-yellow",
        "Detailed Reports",
        "Get comprehensive PDF reports with all the details you need to take action and retain customers.",
    ),
    (
        "accent-red",
        "Customer Insights",
        "Understand the key factors that contribute to customer churn and take targeted action.",
    ),
];

const STEPS: [(&str, &str); 3] = [
    (
        "Enter Customer Data",
        "Input customer details including demographics, account information, and behavior patterns.",
    ),
    (
        "Get Instant Prediction",
        "Our AI model analyzes the data and provides an immediate prediction on churn probability.",
    ),
    (
        "Take Action",
        "Download detailed reports and implement targeted retention strategies for at-risk customers.",
    ),
];

impl Component for Landing {
    type Message = ();
    type Properties = LandingProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Landing
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let start = {
            let on_start = ctx.props().on_start.clone();
            Callback::from(move |_: MouseEvent| on_start.emit(()))
        };

        html! {
            <div class="landing">
                <section class="hero">
                    <div class="pill">{"Predictive Analytics"}</div>
                    <h1>
                        <span class="text-red">{"Predict"}</span>{" Customer Churn "}
                        <span class="text-yellow">{"Before"}</span>{" It Happens"}
                    </h1>
                    <p class="muted">
                        {"Our advanced AI model helps you identify customers at risk of leaving, so you can take action before it's too late."}
                    </p>
                    <button class="btn btn-primary" onclick={start.clone()}>{"Start Prediction →"}</button>
                </section>

                <section class="features">
                    <h2><span class="text-yellow">{"Powerful"}</span>{" Features"}</h2>
                    <p class="muted">{"Everything you need to predict and prevent customer churn"}</p>
                    <div class="grid-3">
                        {
                            for FEATURES.iter().map(|(accent, title, text)| html! {
                                <div class={classes!("feature", *accent)}>
                                    <h3>{ *title }</h3>
                                    <p>{ *text }</p>
                                </div>
                            })
                        }
                    </div>
                </section>

                <section class="steps">
                    <h2>{"How It "}<span class="text-red">{"Works"}</span></h2>
                    <p class="muted">{"Simple process, powerful results"}</p>
                    {
                        for STEPS.iter().enumerate().map(|(i, (title, text))| html! {
                            <div class="step">
                                <div class="step-number">{ i + 1 }</div>
                                <div>
                                    <h3>{ *title }</h3>
                                    <p>{ *text }</p>
                                </div>
                            </div>
                        })
                    }
                </section>

                <section class="cta">
                    <h2>{"Ready to "}<span class="text-yellow">{"Reduce"}</span>{" Customer Churn?"}</h2>
                    <p class="muted">
                        {"Start predicting customer behavior today and take proactive steps to improve retention."}
                    </p>
                    <button class="btn btn-primary" onclick={start}>{"Start Your First Prediction →"}</button>
                </section>
            </div>
        }
    }
}
