mod common;

use common::{default_view, fill_ada, mounted_view, ADA_MAILTO};
use portfolio_model::{PortfolioConfig, ScrollRequest, SectionSet, SubmitStatus};

#[test]
fn scroll_flags_track_thresholds_independently() {
    let mut view = default_view();
    for (offset, scrolled, back_to_top) in [
        (0.0, false, false),
        (50.0, false, false),
        (51.0, true, false),
        (300.0, true, false),
        (300.1, true, true),
        (49.0, false, false),
    ] {
        view.handle_scroll(offset);
        assert_eq!(view.navigation().is_scrolled(), scrolled, "offset {offset}");
        assert_eq!(
            view.navigation().is_back_to_top_visible(),
            back_to_top,
            "offset {offset}"
        );
    }
}

#[test]
fn activate_section_scrolls_and_sets_active() {
    let mut view = default_view();
    assert!(view.activate_section("experience"));
    assert_eq!(view.navigation().active_section(), &"experience");
    assert_eq!(
        view.host().scroll_requests(),
        vec![ScrollRequest::IntoView("experience".to_string())]
    );
}

#[test]
fn activate_missing_section_leaves_state_unchanged() {
    let mut view = default_view();
    view.host().remove_element("projects");
    let before = view.navigation().clone();
    let version = view.data_version();

    assert!(!view.activate_section("projects"));
    assert!(!view.activate_section("not-a-section"));

    assert_eq!(view.navigation(), &before);
    assert_eq!(view.data_version(), version);
    assert!(view.host().scroll_requests().is_empty());
}

#[test]
fn activate_home_twice_equals_once() {
    let mut view = default_view();
    view.activate_section("about");
    view.activate_section("home");
    let once = view.navigation().clone();
    view.activate_section("home");
    assert_eq!(view.navigation(), &once);
}

#[test]
fn hero_call_to_action_targets_contact() {
    let mut view = default_view();
    view.activate_section("contact");
    assert!(view.is_active("contact"));
    assert!(!view.is_active("home"));
}

#[test]
fn scroll_never_changes_active_section() {
    let mut view = default_view();
    view.activate_section("skills");
    view.handle_scroll(0.0);
    view.handle_scroll(4000.0);
    assert_eq!(view.navigation().active_section(), &"skills");
}

#[test]
fn back_to_top_scrolls_up_and_activates_home() {
    let mut view = default_view();
    view.handle_scroll(900.0);
    view.activate_section("contact");
    view.scroll_to_top();
    assert_eq!(view.navigation().active_section(), &"home");
    assert_eq!(view.host().scroll_requests().last(), Some(&ScrollRequest::Top));
}

#[test]
fn field_updates_merge() {
    let mut view = default_view();
    view.update_field("email", "a@b.com");
    view.update_field("name", "X");
    assert_eq!(view.contact().field_value("email"), "a@b.com");
    assert_eq!(view.contact().field_value("name"), "X");
    assert_eq!(view.contact().field_value("message"), "");
}

#[test]
fn submit_hands_off_exact_mailto_and_clears_fields() {
    let mut view = default_view();
    fill_ada(&mut view);

    let status = view.submit(0.0);

    assert_eq!(status, SubmitStatus::Success);
    assert_eq!(view.host().opened_uris(), vec![ADA_MAILTO.to_string()]);
    for field in ["name", "email", "message"] {
        assert_eq!(view.contact().field_value(field), "");
    }
    assert!(!view.contact().is_submitting());
    assert_eq!(view.contact().submit_status(), SubmitStatus::Success);
}

#[test]
fn failed_handoff_keeps_fields_for_retry() {
    let mut view = default_view();
    fill_ada(&mut view);
    view.host().fail_handoffs(true);

    assert_eq!(view.submit(0.0), SubmitStatus::Error);
    assert_eq!(view.contact().field_value("name"), "Ada");
    assert_eq!(view.contact().field_value("email"), "ada@x.com");
    assert_eq!(view.contact().field_value("message"), "Hi");
    assert!(view.host().opened_uris().is_empty());
    assert!(view
        .contact()
        .status_message()
        .contains("natenaelnebiyu@gmail.com"));

    // The retry goes through with the same contents.
    view.host().fail_handoffs(false);
    assert_eq!(view.submit(10.0), SubmitStatus::Success);
    assert_eq!(view.host().last_opened_uri().as_deref(), Some(ADA_MAILTO));
}

#[test]
fn status_auto_clears_after_default_delay() {
    let mut view = default_view();
    fill_ada(&mut view);
    view.submit(1_000.0);

    assert!(!view.tick(3_999.0));
    assert_eq!(view.contact().submit_status(), SubmitStatus::Success);
    assert!(view.tick(4_000.0));
    assert_eq!(view.contact().submit_status(), SubmitStatus::None);
}

#[test]
fn status_persists_when_auto_clear_disabled() {
    let config = PortfolioConfig::from_json(r#"{"status_clear_delay_ms":null}"#).unwrap();
    let mut view = mounted_view(config);
    fill_ada(&mut view);
    view.submit(0.0);
    assert!(!view.tick(1e9));
    assert_eq!(view.contact().submit_status(), SubmitStatus::Success);
}

#[test]
fn teardown_cancels_timer_and_ignores_events() {
    let mut view = default_view();
    fill_ada(&mut view);
    view.submit(0.0);
    view.teardown();
    view.teardown();

    let version = view.data_version();
    assert!(!view.tick(10_000.0));
    assert!(!view.expire_status());
    assert!(!view.handle_scroll(800.0));
    assert!(!view.activate_section("about"));
    assert!(!view.update_field("name", "late"));

    assert_eq!(view.contact().submit_status(), SubmitStatus::Success);
    assert_eq!(view.navigation().active_section(), &"home");
    assert!(!view.navigation().is_scrolled());
    assert_eq!(view.data_version(), version);
    assert!(view.is_torn_down());
}

#[test]
fn compact_layout_limits_navigation() {
    let config = PortfolioConfig::from_json(r#"{"sections":"compact"}"#).unwrap();
    let mut view = mounted_view(config);
    // The host happens to render a skills element, the layout does not list it.
    view.host().add_element("skills");

    assert!(!view.activate_section("skills"));
    assert!(view.activate_section("projects"));
    let ids: Vec<String> = view.nav_items().into_iter().map(|item| item.id).collect();
    let expected: Vec<String> = SectionSet::compact()
        .iter()
        .map(|s| s.as_str().to_string())
        .collect();
    assert_eq!(ids, expected);
}

#[test]
fn custom_recipient_and_thresholds() {
    let config = PortfolioConfig::from_json(
        r#"{"recipient":"hello@site.dev","scrolled_threshold":10,"back_to_top_threshold":20}"#,
    )
    .unwrap();
    let mut view = mounted_view(config);
    view.handle_scroll(15.0);
    assert!(view.navigation().is_scrolled());
    assert!(!view.navigation().is_back_to_top_visible());

    view.update_field("name", "Bo");
    view.submit(0.0);
    let uri = view.host().last_opened_uri().unwrap();
    assert!(uri.starts_with("mailto:hello@site.dev?subject=Portfolio%20Contact%20from%20Bo&body="));
}
