use duendito_core as game;
use gloo::timers::callback::Interval;
use yew::prelude::*;

use crate::levels::LevelProps;

pub(crate) enum Msg {
    Press,
    Release,
    Tick,
}

/// Press-and-hold sneak. The fill timer only exists while the button is
/// held; letting go drops the interval and the engine wipes its progress,
/// so no tick can ever land after a release.
pub(crate) struct QuietLevel {
    engine: game::QuietEngine,
    ticker: Option<Interval>,
}

impl Component for QuietLevel {
    type Message = Msg;
    type Properties = LevelProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            engine: game::QuietEngine::new(),
            ticker: None,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        use game::TickOutcome::*;

        match msg {
            Msg::Press => {
                if !self.engine.press() {
                    return false;
                }
                let link = ctx.link().clone();
                self.ticker = Some(Interval::new(game::TICK_MS, move || {
                    link.send_message(Msg::Tick);
                }));
                true
            }
            Msg::Release => {
                self.ticker = None;
                self.engine.release()
            }
            Msg::Tick => match self.engine.tick() {
                Filled => {
                    self.ticker = None;
                    ctx.props().complete();
                    true
                }
                Rising => true,
                Ignored => false,
            },
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        let onmousedown = link.callback(|_: MouseEvent| Msg::Press);
        let onmouseup = link.callback(|_: MouseEvent| Msg::Release);
        let onmouseleave = link.callback(|_: MouseEvent| Msg::Release);
        let ontouchstart = link.callback(|_: TouchEvent| Msg::Press);
        let ontouchend = link.callback(|_: TouchEvent| Msg::Release);

        html! {
            <div class="quiet">
                <h3>
                    {"Hold the button to sneak past Santa!"}
                    <br />
                    <small>{"Don't let go!"}</small>
                </h3>
                <button
                    class="sneak"
                    {onmousedown} {onmouseup} {onmouseleave}
                    {ontouchstart} {ontouchend}
                >
                    {"🤫"}
                </button>
                <div class="progress">
                    <div
                        class="bar"
                        style={format!("width:{:.1}%", self.engine.progress())}
                    />
                </div>
            </div>
        }
    }
}
