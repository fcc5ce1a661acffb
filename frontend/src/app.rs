use crate::components::landing::Landing;
use crate::components::prediction::PredictionComponent;
use yew::{html, Component, Context, Html};

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Landing,
    Predict,
}

pub enum Msg {
    Navigate(Page),
}

pub struct App {
    page: Page,
}

impl Component for App {
    type Message = Msg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self { page: Page::Landing }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Navigate(page) => {
                let changed = self.page != page;
                self.page = page;
                changed
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        match self.page {
            Page::Landing => html! {
                <Landing on_start={link.callback(|_| Msg::Navigate(Page::Predict))} />
            },
            Page::Predict => html! {
                <PredictionComponent on_back={link.callback(|_| Msg::Navigate(Page::Landing))} />
            },
        }
    }
}
