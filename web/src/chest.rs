use duendito_core as game;
use yew::prelude::*;

#[derive(Copy, Clone, Debug, PartialEq)]
pub(crate) enum Msg {
    Open,
    Restart,
}

/// The terminal screen: a chest that opens once to show the hiding spot.
/// "Play Again" rebuilds the whole session by reloading the page.
pub(crate) struct ChestReveal {
    reveal: game::Reveal,
}

impl Component for ChestReveal {
    type Message = Msg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            reveal: game::Reveal::new(),
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Open => self.reveal.open(),
            Msg::Restart => {
                if let Err(err) = gloo::utils::window().location().reload() {
                    log::error!("failed to reload: {:?}", err);
                }
                false
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        if !self.reveal.is_opened() {
            let onclick = ctx.link().callback(|_| Msg::Open);
            return html! {
                <section class="chest closed">
                    <button class="lid" {onclick}>
                        <span class="icon">{"🎁"}</span>
                        <p>{"Tap to Open!"}</p>
                    </button>
                </section>
            };
        }

        let onclick = ctx.link().callback(|_| Msg::Restart);
        html! {
            <section class="chest opened">
                <h2>{"You Found Him!"}</h2>
                <p class="spot">{"Go check behind the TV!"}</p>
                <button class="restart" {onclick}>{"Play Again"}</button>
            </section>
        }
    }
}
