use coach_core::model::SectionId;

use super::test_harness::{ViewKind, setup_view_harness};

#[tokio::test(flavor = "current_thread")]
async fn home_view_renders_the_subject_circles() {
    let mut harness = setup_view_harness(ViewKind::Home);
    harness.rebuild();
    harness.drive_async().await;

    let html = harness.render();
    assert!(html.contains("Physics"));
    assert!(html.contains("Chemistry"));
    assert!(html.contains("Mathematics"));
    assert!(html.contains("What do you want to learn today?"));
}

#[tokio::test(flavor = "current_thread")]
async fn circle_view_renders_the_first_section() {
    let mut harness = setup_view_harness(ViewKind::Circle(SectionId::Basics));
    harness.rebuild();
    harness.drive_async().await;

    let html = harness.render();
    assert!(html.contains("Getting to Know Circles"));
    assert!(html.contains("Meet the Circle"));
    // All five milestone markers are present.
    assert!(html.contains("Knowledge Check"));
    assert!(html.contains("Hands-On Practice"));
}

#[tokio::test(flavor = "current_thread")]
async fn circle_view_shows_the_calculator_in_the_interactive_section() {
    let mut harness = setup_view_harness(ViewKind::Circle(SectionId::Interactive));
    harness.rebuild();
    harness.drive_async().await;

    let html = harness.render();
    assert!(html.contains("Radius (cm)"));
    assert!(html.contains("Circumference"));
}

#[tokio::test(flavor = "current_thread")]
async fn circle_view_shows_the_quiz_start_card_in_the_final_section() {
    let mut harness = setup_view_harness(ViewKind::Circle(SectionId::Quiz));
    harness.rebuild();
    harness.drive_async().await;

    let html = harness.render();
    assert!(html.contains("Start Practice"));
    assert!(html.contains("5 questions, 20 points each"));
}
