use duendito_core as game;
use thiserror::Error;

#[derive(Error, Debug)]
enum FetchError {
    #[error(transparent)]
    Http(#[from] gloo::net::Error),
    #[error(transparent)]
    Invalid(#[from] game::GameError),
}

/// Supplies exactly one trivia question per request. With a configured URL
/// it asks the remote service and checks the payload against the question
/// invariant; on any failure, or with no URL at all, it falls back to the
/// built-in pool. Never fails outward.
pub(crate) struct QuestionProvider {
    url: Option<String>,
    seed: u64,
}

impl QuestionProvider {
    pub(crate) fn new(url: Option<String>, seed: u64) -> Self {
        Self { url, seed }
    }

    pub(crate) async fn fetch_question(&self) -> game::TriviaQuestion {
        let Some(url) = self.url.as_deref() else {
            return game::pool_question(self.seed);
        };

        match Self::fetch_remote(url).await {
            Ok(question) => question,
            Err(err) => {
                log::warn!("trivia fetch failed, substituting fallback: {err}");
                game::fallback_question()
            }
        }
    }

    async fn fetch_remote(url: &str) -> Result<game::TriviaQuestion, FetchError> {
        let question: game::TriviaQuestion = gloo::net::http::Request::get(url)
            .send()
            .await?
            .json()
            .await?;
        question.validate()?;
        log::debug!("remote trivia question accepted");
        Ok(question)
    }
}
