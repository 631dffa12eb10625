use duendito_core as game;
use yew::prelude::*;

use crate::levels::LevelProps;

pub(crate) enum Msg {
    Pick(u8),
}

/// Count the chips on the cookie and pick the matching number. Wrong picks
/// cost nothing.
pub(crate) struct CountingLevel {
    engine: game::CountingEngine,
}

impl Component for CountingLevel {
    type Message = Msg;
    type Properties = LevelProps;

    fn create(ctx: &Context<Self>) -> Self {
        Self {
            engine: game::CountingEngine::new(ctx.props().seed),
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Pick(candidate) => match self.engine.pick(candidate) {
                game::PickOutcome::Won => {
                    ctx.props().complete();
                    true
                }
                game::PickOutcome::Ignored => false,
            },
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        html! {
            <div class="counting">
                <h3>{"Count the chocolate chips!"}</h3>
                <div class="cookie">
                    { for (0..self.engine.chips()).map(|_| html! { <span class="chip" /> }) }
                </div>
                <div class="choices">
                    {
                        for self.engine.choices().iter().map(|&candidate| {
                            let onclick = ctx.link().callback(move |_| Msg::Pick(candidate));
                            html! {
                                <button class="choice" {onclick}>{ candidate }</button>
                            }
                        })
                    }
                </div>
            </div>
        }
    }
}
