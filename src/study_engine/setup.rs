use tracing::{info, warn};

use crate::study_engine::{
    errors::StudyError,
    models::StudyRequest,
    policy::ReviewPolicy,
    random::StdRandom,
    session::Session,
    source::WordSource,
};

/// Fetch the words for `request` and deal them into a new session.
///
/// The returned [`StdRandom`] is seeded from `request.rng_seed` (entropy when
/// `None`) and already advanced past the shuffle; pass it to every
/// [`Session::dismiss`] so a seeded request replays the same session.
///
/// Word-source failures come back unchanged as [`StudyError::Source`]; an
/// empty list from the source is rejected by the engine as
/// [`EngineError::InvalidInput`](crate::study_engine::errors::EngineError).
pub async fn start_session<S>(
    source: &S,
    request: &StudyRequest,
    policy: ReviewPolicy,
) -> Result<(Session, StdRandom), StudyError>
where
    S: WordSource + ?Sized,
{
    info!(
        book = %request.book,
        level = %request.level,
        count = request.count.get(),
        seeded = request.rng_seed.is_some(),
        "requesting word list"
    );

    let words = source
        .generate(request.book, request.level, request.count)
        .await
        .map_err(|err| {
            warn!(error = %err, book = %request.book, "word generation failed");
            err
        })?;

    let mut rng = StdRandom::new(request.rng_seed);
    let session = Session::with_policy(words, policy, &mut rng)?;
    Ok((session, rng))
}
