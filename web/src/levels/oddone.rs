use duendito_core as game;
use yew::prelude::*;

use crate::levels::LevelProps;

pub(crate) enum Msg {
    Spot(usize),
}

/// Nine elves, one of them sad. Spotting the sad one wins immediately.
pub(crate) struct OddOneLevel {
    engine: game::OddOneEngine,
}

impl Component for OddOneLevel {
    type Message = Msg;
    type Properties = LevelProps;

    fn create(ctx: &Context<Self>) -> Self {
        Self {
            engine: game::OddOneEngine::new(ctx.props().seed),
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Spot(index) => match self.engine.spot(index) {
                Ok(game::SpotOutcome::Won) => {
                    ctx.props().complete();
                    true
                }
                Ok(game::SpotOutcome::Ignored) => false,
                Err(err) => {
                    log::error!("spot rejected: {err}");
                    false
                }
            },
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        html! {
            <div class="oddone">
                <h3>{"Find the sad elf!"}</h3>
                <div class="grid">
                    {
                        for (0..game::GRID_SIZE).map(|index| {
                            let onclick = ctx.link().callback(move |_| Msg::Spot(index));
                            let glyph = if self.engine.is_odd(index) { "🙍" } else { "🧝" };
                            html! { <button class="spot" {onclick}>{ glyph }</button> }
                        })
                    }
                </div>
            </div>
        }
    }
}
