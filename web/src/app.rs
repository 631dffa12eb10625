use duendito_core as game;
use yew::prelude::*;

use crate::chest::ChestReveal;
use crate::levels::{self, LevelProps};
use crate::utils::js_random_seed;

#[derive(Properties, Clone, Debug, PartialEq)]
pub(crate) struct AppProps {
    #[prop_or_default]
    pub seed: Option<u64>,
    #[prop_or_default]
    pub trivia_url: Option<String>,
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub(crate) enum Msg {
    Start,
    LevelDone,
}

/// Mixes the session seed with the level index so every engine draws from
/// its own deterministic stream.
fn level_seed(base: u64, level: u8) -> u64 {
    base ^ (u64::from(level) + 1).wrapping_mul(0x9E37_79B9_7F4A_7C15)
}

/// Root component: owns the progression state machine and renders exactly
/// one of the intro screen, the active level, or the reveal screen.
pub(crate) struct AppView {
    progression: game::Progression,
    seed: u64,
}

impl AppView {
    fn header_view(&self) -> Html {
        let progress = self.progression.phase().is_playing().then(|| {
            let level = self.progression.level();
            let total = game::Progression::total_levels();
            let percent = f32::from(level) / f32::from(total) * 100.0;
            html! {
                <div class="progress">
                    <div class="bar" style={format!("width:{percent:.0}%")} />
                    <span class="count">{ format!("{}/{}", level + 1, total) }</span>
                </div>
            }
        });

        html! {
            <header>
                <h1>{"The Elf's Secret Quest"}</h1>
                { for progress }
            </header>
        }
    }

    fn intro_view(&self, ctx: &Context<Self>) -> Html {
        let total = game::Progression::total_levels();
        let onclick = ctx.link().callback(|_| Msg::Start);

        html! {
            <section class="intro">
                <h2>{"Where is the Elf?"}</h2>
                <p>
                    { format!(
                        "Complete {total} festive challenges to unlock the magic \
                         chest and reveal the Elf on the Shelf's hiding spot!"
                    ) }
                </p>
                <button class="start" {onclick}>{"Start Quest"}</button>
            </section>
        }
    }

    fn playing_view(&self, ctx: &Context<Self>) -> Html {
        let descriptor = self.progression.descriptor();
        html! {
            <section class="level-card">
                <h2>{ descriptor.title }</h2>
                { self.level_view(ctx) }
            </section>
        }
    }

    fn level_view(&self, ctx: &Context<Self>) -> Html {
        use game::LevelKind::*;

        let props = LevelProps {
            on_complete: ctx.link().callback(|()| Msg::LevelDone),
            active: true,
            seed: level_seed(self.seed, self.progression.level()),
        };

        match self.progression.descriptor().kind {
            Trivia => {
                let trivia_url = ctx.props().trivia_url.clone();
                html! {
                    <levels::TriviaLevel
                        on_complete={props.on_complete}
                        active={props.active}
                        seed={props.seed}
                        {trivia_url}
                    />
                }
            }
            Memory => html! { <levels::MemoryLevel ..props /> },
            Reflex => html! { <levels::ReflexLevel ..props /> },
            Counting => html! { <levels::CountingLevel ..props /> },
            Decorate => html! { <levels::DecorateLevel ..props /> },
            OddOne => html! { <levels::OddOneLevel ..props /> },
            Quiet => html! { <levels::QuietLevel ..props /> },
            Code => html! { <levels::CodeLevel ..props /> },
        }
    }
}

impl Component for AppView {
    type Message = Msg;
    type Properties = AppProps;

    fn create(ctx: &Context<Self>) -> Self {
        Self {
            progression: game::Progression::new(),
            seed: ctx.props().seed.unwrap_or_else(js_random_seed),
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Start => self.progression.start(),
            Msg::LevelDone => {
                let outcome = self.progression.advance();
                log::debug!("level completion honored: {:?}", outcome);
                outcome.has_update()
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        use game::GamePhase::*;

        let content = match self.progression.phase() {
            Intro => self.intro_view(ctx),
            Playing => self.playing_view(ctx),
            Reveal => html! { <ChestReveal /> },
        };

        html! {
            <div class="duendito">
                { self.header_view() }
                <main>{ content }</main>
            </div>
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn level_seeds_differ_across_levels() {
        let base = 0xDEAD_BEEF;
        for a in 0..game::Progression::total_levels() {
            for b in 0..a {
                assert_ne!(level_seed(base, a), level_seed(base, b));
            }
        }
    }

    #[test]
    fn level_seeds_are_stable_for_a_session() {
        assert_eq!(level_seed(1, 3), level_seed(1, 3));
    }
}
