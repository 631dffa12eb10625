use duendito_core as game;
use gloo::timers::callback::Timeout;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::provider::QuestionProvider;

#[derive(Properties, Clone, PartialEq)]
pub(crate) struct TriviaProps {
    pub on_complete: Callback<()>,
    #[prop_or(true)]
    pub active: bool,
    #[prop_or_default]
    pub seed: u64,
    #[prop_or_default]
    pub trivia_url: Option<String>,
}

pub(crate) enum Msg {
    Loaded(Box<game::TriviaQuestion>),
    Guess(usize),
    ResetIncorrect,
    Advance,
    Skip,
}

/// Multiple-choice question fetched through [`QuestionProvider`]. A correct
/// guess advances after a short delay; a wrong one resets for another try.
pub(crate) struct TriviaLevel {
    engine: game::TriviaEngine,
    _settle: Option<Timeout>,
}

impl TriviaProps {
    fn complete(&self) {
        crate::levels::emit_if_active(self.active, &self.on_complete);
    }
}

impl TriviaLevel {
    fn emit_completion(&mut self, ctx: &Context<Self>) {
        if self.engine.complete() {
            ctx.props().complete();
        }
    }

    fn option_class(&self, index: usize) -> Classes {
        use game::TriviaState::*;
        if self.engine.selected() != Some(index) {
            return classes!("option");
        }
        classes!(
            "option",
            match self.engine.state() {
                Correct => "correct",
                Incorrect => "incorrect",
                _ => "selected",
            }
        )
    }
}

impl Component for TriviaLevel {
    type Message = Msg;
    type Properties = TriviaProps;

    fn create(ctx: &Context<Self>) -> Self {
        let provider = QuestionProvider::new(ctx.props().trivia_url.clone(), ctx.props().seed);
        let link = ctx.link().clone();
        spawn_local(async move {
            let question = provider.fetch_question().await;
            link.send_message(Msg::Loaded(Box::new(question)));
        });

        Self {
            engine: game::TriviaEngine::new(),
            _settle: None,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        use game::GuessOutcome::*;

        match msg {
            Msg::Loaded(question) => {
                if let Err(err) = self.engine.question_loaded(*question) {
                    log::warn!("rejecting fetched question: {err}");
                    self.engine.load_failed();
                }
                true
            }
            Msg::Guess(option) => match self.engine.guess(option) {
                Ok(Correct) => {
                    let link = ctx.link().clone();
                    self._settle = Some(Timeout::new(game::RESULT_DELAY_MS, move || {
                        link.send_message(Msg::Advance);
                    }));
                    true
                }
                Ok(Incorrect) => {
                    let link = ctx.link().clone();
                    self._settle = Some(Timeout::new(game::RESULT_DELAY_MS, move || {
                        link.send_message(Msg::ResetIncorrect);
                    }));
                    true
                }
                Ok(Ignored) => false,
                Err(err) => {
                    log::error!("guess rejected: {err}");
                    false
                }
            },
            Msg::ResetIncorrect => {
                self._settle = None;
                self.engine.clear_incorrect()
            }
            Msg::Advance => {
                self._settle = None;
                self.emit_completion(ctx);
                false
            }
            Msg::Skip => {
                self.emit_completion(ctx);
                false
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        use game::TriviaState::*;

        match self.engine.state() {
            Loading => html! {
                <div class="loading">{"Contacting the North Pole..."}</div>
            },
            Failed => html! {
                <div class="load-failed">
                    {"Failed to load question. "}
                    <button onclick={ctx.link().callback(|_| Msg::Skip)}>{"Skip"}</button>
                </div>
            },
            _ => {
                let Some(question) = self.engine.question() else {
                    return Html::default();
                };
                let resolving = self.engine.selected().is_some();

                html! {
                    <div class="trivia">
                        <h3>{ question.question.clone() }</h3>
                        <div class="options">
                            {
                                for question.options.iter().enumerate().map(|(index, option)| {
                                    let onclick = ctx.link().callback(move |_| Msg::Guess(index));
                                    html! {
                                        <button
                                            class={self.option_class(index)}
                                            disabled={resolving}
                                            {onclick}
                                        >
                                            { option.clone() }
                                        </button>
                                    }
                                })
                            }
                        </div>
                        if matches!(self.engine.state(), Incorrect) {
                            <p class="retry">{"Try again!"}</p>
                        }
                    </div>
                }
            }
        }
    }
}
