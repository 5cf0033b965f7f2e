use cuento_request::prelude::*;
use cuento_request::GenerationError;
use cuento_test_utils::*;

#[tokio::test]
async fn incomplete_session_never_reaches_generator() {
    let session = Session::new(genre_catalogs(), RecordingGenerator::new());

    let err = session.submit().await.unwrap_err();

    assert!(matches!(err, SubmitError::Invalid(ref failures) if failures.len() == 4));
    assert!(session.generator().requests().is_empty());
    assert_eq!(
        err.to_string(),
        "incomplete request: grade level is required; page length is required; \
         context is required; primary competence is required"
    );
}

#[tokio::test]
async fn complete_session_hands_request_over() {
    let mut session = Session::new(genre_catalogs(), RecordingGenerator::new());
    session.apply(FieldEvent::SetGradeLevel { value: SCENARIO_GRADE.into() }).unwrap();
    session.apply(FieldEvent::SetPageLength { value: SCENARIO_PAGES.into() }).unwrap();
    session.apply(FieldEvent::SetContext { value: SCENARIO_GENRE.into() }).unwrap();
    session
        .apply(FieldEvent::SetPrimaryCompetence { value: SCENARIO_PRIMARY.into() })
        .unwrap();
    session.apply(FieldEvent::SetTitle { text: SCENARIO_TITLE.into() }).unwrap();

    session.submit().await.unwrap();

    let sent = session.generator().requests();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0], session.preview().unwrap());
    assert_eq!(sent[0], build(&scenario_state()).unwrap());
}

#[tokio::test]
async fn submission_does_not_reset_state() {
    let mut session = Session::new(genre_catalogs(), RecordingGenerator::new());
    *session.state_mut() = fully_populated_state();

    session.submit().await.unwrap();
    assert_eq!(session.state(), &fully_populated_state());

    session.state_mut().reset();
    assert!(session.preview().is_err());
}

#[tokio::test]
async fn generator_failures_are_passed_through() {
    let mut session = Session::new(genre_catalogs(), RecordingGenerator::failing("offline"));
    *session.state_mut() = scenario_state();

    let err = session.submit().await.unwrap_err();
    assert!(matches!(
        err,
        SubmitError::Generation(GenerationError::Unavailable(ref reason)) if reason == "offline"
    ));
    assert_eq!(session.generator().requests().len(), 1);
}

#[tokio::test]
async fn relaxed_rules_apply_to_submission() {
    let rules = CompletenessRules::new().with_context_required(false);
    let mut session = Session::new(genre_catalogs(), RecordingGenerator::new()).with_rules(rules);
    session.state_mut().set_grade_level(SCENARIO_GRADE).unwrap();
    session.state_mut().set_page_length(SCENARIO_PAGES).unwrap();
    session.state_mut().set_primary_competence(SCENARIO_PRIMARY).unwrap();

    let err = session.submit().await.unwrap_err();
    assert!(matches!(
        err,
        SubmitError::Invalid(ref failures) if failures == &[ValidationFailure::MissingTitleOrContext]
    ));

    session.state_mut().set_title(SCENARIO_TITLE);
    session.submit().await.unwrap();
}

#[tokio::test]
async fn dry_run_generator_accepts_complete_requests() {
    let mut session = Session::new(genre_catalogs(), DryRunGenerator::new());
    *session.state_mut() = fully_populated_state();
    let receipt = session.submit().await.unwrap();
    assert!(receipt.accepted_at <= chrono::Utc::now());
}
