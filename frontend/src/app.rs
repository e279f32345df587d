use crate::components::candidates::CandidatesComponent;
use yew::{html, Component, Context, Html};

pub struct App;

impl Component for App {
    type Message = ();
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self
    }

    fn view(&self, _ctx: &Context<Self>) -> Html {
        html! {
            <div class="app">
                <h1>{"Candidates"}</h1>
                <CandidatesComponent />
            </div>
        }
    }
}
