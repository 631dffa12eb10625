use duendito_core as game;
use gloo::timers::callback::Timeout;
use yew::prelude::*;

use crate::levels::LevelProps;

const SYMBOLS: [&str; game::PAIR_COUNT] = ["🎁", "🎄", "⭐", "❄️"];

pub(crate) enum Msg {
    Flip(usize),
    ResolveMismatch,
    Done,
}

/// Four shuffled symbol pairs; mismatches flip back after a short delay,
/// matching all pairs wins.
pub(crate) struct MemoryLevel {
    engine: game::MemoryEngine,
    _pending: Option<Timeout>,
}

impl Component for MemoryLevel {
    type Message = Msg;
    type Properties = LevelProps;

    fn create(ctx: &Context<Self>) -> Self {
        Self {
            engine: game::MemoryEngine::new(ctx.props().seed),
            _pending: None,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        use game::FlipOutcome::*;

        match msg {
            Msg::Flip(index) => match self.engine.flip(index) {
                Ok(Revealed | Matched) => true,
                Ok(Mismatch) => {
                    let link = ctx.link().clone();
                    self._pending = Some(Timeout::new(game::MISMATCH_DELAY_MS, move || {
                        link.send_message(Msg::ResolveMismatch);
                    }));
                    true
                }
                Ok(Won) => {
                    let link = ctx.link().clone();
                    self._pending = Some(Timeout::new(game::WIN_DELAY_MS, move || {
                        link.send_message(Msg::Done);
                    }));
                    true
                }
                Ok(Ignored) => false,
                Err(err) => {
                    log::error!("flip rejected: {err}");
                    false
                }
            },
            Msg::ResolveMismatch => {
                self._pending = None;
                self.engine.resolve_mismatch()
            }
            Msg::Done => {
                self._pending = None;
                ctx.props().complete();
                false
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        html! {
            <div class="memory">
                <h3>{"Match the festive pairs!"}</h3>
                <div class="cards">
                    {
                        for self.engine.cards().iter().enumerate().map(|(index, card)| {
                            let face_up = self.engine.is_face_up(index);
                            let onclick = ctx.link().callback(move |_| Msg::Flip(index));
                            let class = classes!(
                                "card",
                                face_up.then_some("face-up"),
                                card.matched.then_some("matched"),
                            );
                            html! {
                                <button {class} {onclick}>
                                    { face_up.then(|| html! { SYMBOLS[usize::from(card.symbol)] }) }
                                </button>
                            }
                        })
                    }
                </div>
            </div>
        }
    }
}
