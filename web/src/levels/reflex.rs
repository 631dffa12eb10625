use duendito_core as game;
use gloo::timers::callback::Interval;
use yew::prelude::*;

use crate::levels::LevelProps;

pub(crate) enum Msg {
    Tap,
    Drift,
}

/// Tap the dodging elf five times. An interval keeps relocating the target
/// whether or not the player ever hits it; dropping the component stops it.
pub(crate) struct ReflexLevel {
    engine: game::ReflexEngine,
    _drift: Interval,
}

impl Component for ReflexLevel {
    type Message = Msg;
    type Properties = LevelProps;

    fn create(ctx: &Context<Self>) -> Self {
        let link = ctx.link().clone();
        Self {
            engine: game::ReflexEngine::new(ctx.props().seed),
            _drift: Interval::new(game::RELOCATE_INTERVAL_MS, move || {
                link.send_message(Msg::Drift);
            }),
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        use game::TapOutcome::*;

        match msg {
            Msg::Tap => match self.engine.tap() {
                Won => {
                    ctx.props().complete();
                    true
                }
                Caught => true,
                Ignored => false,
            },
            Msg::Drift => self.engine.relocate(),
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let (x, y) = self.engine.position();
        let style = format!("left:{:.1}%;top:{:.1}%", x * 100.0, y * 100.0);
        let onclick = ctx.link().callback(|_| Msg::Tap);

        html! {
            <div class="reflex">
                <h3>
                    { format!("Catch the Elf {} times! ({}/{})",
                        game::WIN_TAPS, self.engine.hits(), game::WIN_TAPS) }
                </h3>
                <div class="field">
                    <button class="elf" {style} {onclick}>{"🧝"}</button>
                </div>
            </div>
        }
    }
}
