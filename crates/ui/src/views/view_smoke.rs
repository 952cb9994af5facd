use super::test_harness::{ViewKind, setup_view_harness};

#[tokio::test(flavor = "current_thread")]
async fn home_view_smoke_renders_hero_and_lesson_count() {
    let mut harness = setup_view_harness(ViewKind::Home);
    harness.rebuild();
    let html = harness.render();
    assert!(
        html.contains("Learn utility-first CSS by doing"),
        "missing hero in {html}"
    );
    assert!(
        html.contains("Browse 3 Lessons"),
        "missing lesson count in {html}"
    );
    assert!(
        html.contains("Open Playground"),
        "missing playground link in {html}"
    );
}

#[tokio::test(flavor = "current_thread")]
async fn lessons_view_smoke_renders_catalog_cards() {
    let mut harness = setup_view_harness(ViewKind::Lessons);
    harness.rebuild();
    let html = harness.render();
    assert!(
        html.contains("Utility-First Fundamentals"),
        "missing first card in {html}"
    );
    assert!(
        html.contains("Spacing &amp; Sizing") || html.contains("Spacing & Sizing"),
        "missing second card in {html}"
    );
    assert!(
        html.contains("Flexbox Layout"),
        "missing third card in {html}"
    );
    assert!(html.contains("All"), "missing category filter in {html}");
    assert!(html.contains("10 min"), "missing duration label in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn lesson_view_smoke_renders_learn_tab_with_first_step_open() {
    let mut harness = setup_view_harness(ViewKind::Lesson("flexbox".to_string()));
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("Flexbox Layout"), "missing title in {html}");
    // The harness clock is fixed at 2023-11-14T22:13:20Z.
    assert!(
        html.contains("Started 22:13"),
        "missing session start in {html}"
    );
    assert!(html.contains("Learn"), "missing tabs in {html}");
    assert!(html.contains("Quiz"), "missing quiz tab in {html}");
    assert!(
        html.contains("Creating a Flex Container"),
        "missing first step in {html}"
    );
    // Step 0 opens expanded, so its body is in the tree.
    assert!(html.contains("step-body"), "missing expanded step in {html}");
    assert!(
        html.contains("Key Takeaways"),
        "missing takeaways in {html}"
    );
}

#[tokio::test(flavor = "current_thread")]
async fn lesson_view_smoke_renders_unknown_lesson_message() {
    let mut harness = setup_view_harness(ViewKind::Lesson("does-not-exist".to_string()));
    harness.rebuild();
    let html = harness.render();
    assert!(
        html.contains("That lesson doesn&#39;t exist.") || html.contains("That lesson doesn't exist."),
        "missing unknown-lesson message in {html}"
    );
    assert!(
        html.contains("Back to Lessons"),
        "missing back link in {html}"
    );
}

#[tokio::test(flavor = "current_thread")]
async fn playground_view_smoke_renders_templates_and_reference() {
    let mut harness = setup_view_harness(ViewKind::Playground);
    harness.rebuild();
    let html = harness.render();
    assert!(
        html.contains("Quick Templates:"),
        "missing templates in {html}"
    );
    assert!(
        html.contains("Card Component"),
        "missing template button in {html}"
    );
    assert!(
        html.contains("Quick Reference"),
        "missing cheat sheet in {html}"
    );
    assert!(html.contains("p-4"), "missing spacing class in {html}");
    assert!(
        html.contains("hover:bg-blue-600"),
        "missing colors class in {html}"
    );
}
