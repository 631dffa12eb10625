use duendito_core as game;
use gloo::timers::callback::Timeout;
use yew::prelude::*;

use crate::levels::LevelProps;

pub(crate) enum Msg {
    Digit(u8),
    Clear,
    SettleAccept,
    SettleReject,
}

/// Numeric keypad guarding the chest. A full wrong code clears itself
/// after a beat; the right one unlocks the level.
pub(crate) struct CodeLevel {
    engine: game::CodeEngine,
    _settle: Option<Timeout>,
}

impl Component for CodeLevel {
    type Message = Msg;
    type Properties = LevelProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            engine: game::CodeEngine::new(),
            _settle: None,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        use game::KeyOutcome::*;

        match msg {
            Msg::Digit(digit) => match self.engine.press_digit(digit) {
                Ok(Pending) => true,
                Ok(Accepted) => {
                    let link = ctx.link().clone();
                    self._settle = Some(Timeout::new(game::SETTLE_DELAY_MS, move || {
                        link.send_message(Msg::SettleAccept);
                    }));
                    true
                }
                Ok(Rejected) => {
                    let link = ctx.link().clone();
                    self._settle = Some(Timeout::new(game::SETTLE_DELAY_MS, move || {
                        link.send_message(Msg::SettleReject);
                    }));
                    true
                }
                Ok(Ignored) => false,
                Err(err) => {
                    log::error!("keypad press rejected: {err}");
                    false
                }
            },
            Msg::Clear => {
                // an accepted code makes clear() a no-op; the pending
                // completion timeout must survive the button press
                let cleared = self.engine.clear();
                if cleared {
                    self._settle = None;
                }
                cleared
            }
            Msg::SettleAccept => {
                self._settle = None;
                ctx.props().complete();
                false
            }
            Msg::SettleReject => {
                self._settle = None;
                self.engine.clear()
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        let display = format!("{:_<width$}", self.engine.entry(), width = game::CODE_LEN);

        let digit_key = |digit: u8| {
            let onclick = link.callback(move |_| Msg::Digit(digit));
            html! { <button class="key" {onclick}>{ digit }</button> }
        };

        html! {
            <div class="code">
                <h3>
                    {"Enter the date of Christmas"}
                    <br />
                    {"(MMDD) to unlock the chest!"}
                </h3>
                <div class="display">{ display }</div>
                <div class="keypad">
                    { for (1..=9).map(digit_key) }
                    <div />
                    { digit_key(0) }
                    <button class="key clear" onclick={link.callback(|_| Msg::Clear)}>
                        {"CLR"}
                    </button>
                </div>
            </div>
        }
    }
}
