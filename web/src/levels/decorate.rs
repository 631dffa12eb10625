use duendito_core as game;
use gloo::timers::callback::Timeout;
use yew::prelude::*;

use crate::levels::LevelProps;

pub(crate) enum Msg {
    Toggle(usize),
    Done,
}

/// Light all five bulbs at once to win.
pub(crate) struct DecorateLevel {
    engine: game::DecorateEngine,
    _settle: Option<Timeout>,
}

impl Component for DecorateLevel {
    type Message = Msg;
    type Properties = LevelProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            engine: game::DecorateEngine::new(),
            _settle: None,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        use game::ToggleOutcome::*;

        match msg {
            Msg::Toggle(index) => match self.engine.toggle(index) {
                Ok(AllLit) => {
                    let link = ctx.link().clone();
                    self._settle = Some(Timeout::new(game::ALL_LIT_DELAY_MS, move || {
                        link.send_message(Msg::Done);
                    }));
                    true
                }
                Ok(Toggled) => true,
                Ok(Ignored) => false,
                Err(err) => {
                    log::error!("toggle rejected: {err}");
                    false
                }
            },
            Msg::Done => {
                self._settle = None;
                ctx.props().complete();
                false
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        html! {
            <div class="decorate">
                <h3>{"Light up all the bulbs!"}</h3>
                <div class="wire">
                    {
                        for self.engine.bulbs().iter().enumerate().map(|(index, &lit)| {
                            let onclick = ctx.link().callback(move |_| Msg::Toggle(index));
                            let class = classes!("bulb", lit.then_some("lit"));
                            html! { <button {class} {onclick} /> }
                        })
                    }
                </div>
            </div>
        }
    }
}
