//! End-to-end page flows against the in-memory surface.
//!
//! Test categories:
//! - Customization panel: mirroring, preview, CSS output, reset, apply
//! - Copy CSS: clipboard write, label feedback, failure
//! - Code blocks: click-to-copy with content feedback
//! - Examples page: notification demos and the login form
//! - Missing elements: features stay inert

#![forbid(unsafe_code)]

use std::time::Duration;

use atelier::markup::CODE_COPIED;
use atelier::{
    CLIPBOARD_FAILED, COPY_BUTTON_LABEL, Error, MemorySurface, NoticeKind, Site, SiteConfig,
    Surface, Timer, VirtualScheduler, ids,
};

type TestSite = Site<MemorySurface, VirtualScheduler<Timer>>;

fn ms(n: u64) -> Duration {
    Duration::from_millis(n)
}

fn start(surface: MemorySurface) -> TestSite {
    let mut site = Site::new(surface, VirtualScheduler::new(), SiteConfig::default());
    site.start();
    site
}

fn css(site: &TestSite) -> String {
    site.surface().text(ids::CSS_OUTPUT).unwrap_or_default()
}

fn messages(site: &TestSite) -> Vec<(String, NoticeKind)> {
    site.notifications()
        .live()
        .iter()
        .map(|n| (n.message.clone(), n.kind))
        .collect()
}

const DEFAULT_CSS: &str = ":root {
    --primary: #4361ee;
    --primary-dark: #102ebb;
    --secondary: #f72585;
    --success: #4cc9f0;
    --font-main: 'Segoe UI', Tahoma, Geneva, Verdana, sans-serif;
    --radius-md: 8px;
}";

// ============================================================================
// Customization panel
// ============================================================================

mod customize_tests {
    use super::*;

    #[test]
    fn test_start_renders_default_css() {
        let site = start(MemorySurface::customize_page());
        assert!(site.panel().is_some());
        assert_eq!(css(&site), DEFAULT_CSS);
    }

    #[test]
    fn test_picker_input_mirrors_into_text() {
        let mut site = start(MemorySurface::customize_page());
        assert!(site.on_input("secondaryColor", "#00ff00"));
        assert_eq!(site.surface().value("secondaryColorText").as_deref(), Some("#00ff00"));
        assert_eq!(site.surface().root_property("--secondary"), Some("#00ff00"));
        assert!(css(&site).contains("--secondary: #00ff00;"));
    }

    #[test]
    fn test_text_input_mirrors_into_picker_and_darkens() {
        let mut site = start(MemorySurface::customize_page());
        site.on_input("primaryColorText", "#ffffff");
        assert_eq!(site.surface().value("primaryColor").as_deref(), Some("#ffffff"));
        assert_eq!(site.surface().root_property("--primary"), Some("#ffffff"));
        assert_eq!(site.surface().root_property("--primary-dark"), Some("#cccccc"));
        assert!(css(&site).contains("--primary-dark: #cccccc;"));
    }

    #[test]
    fn test_input_leaves_both_members_equal() {
        let mut site = start(MemorySurface::customize_page());
        assert!(site.on_input("primaryColor", "#a0000a"));
        assert_eq!(site.surface().value("primaryColor").as_deref(), Some("#a0000a"));
        assert_eq!(site.surface().value("primaryColorText").as_deref(), Some("#a0000a"));
        assert_eq!(site.surface().root_property("--primary"), Some("#a0000a"));
    }

    #[test]
    fn test_invalid_color_text_passes_through() {
        let mut site = start(MemorySurface::customize_page());
        site.on_input("successColorText", "teal");
        assert_eq!(site.surface().value("successColor").as_deref(), Some("teal"));
        assert_eq!(site.surface().root_property("--success"), Some("teal"));
    }

    #[test]
    fn test_font_family_reacts_to_change_only() {
        let mut site = start(MemorySurface::customize_page());
        assert!(!site.on_input("fontFamily", "monospace"));
        assert!(site.on_change("fontFamily", "monospace"));
        assert!(css(&site).contains("--font-main: monospace;"));
    }

    #[test]
    fn test_shadow_slider_drives_both_shadows() {
        let mut site = start(MemorySurface::customize_page());
        site.on_input("shadowIntensity", "0");
        assert_eq!(site.surface().root_property("--shadow-md"), Some("0 4px 8px rgba(0, 0, 0, 0.1)"));
        assert_eq!(site.surface().root_property("--shadow-lg"), Some("0 8px 16px rgba(0, 0, 0, 0.12)"));
        assert_eq!(site.surface().text(ids::SHADOW_INTENSITY_LABEL).as_deref(), Some("Very Light"));

        site.on_input("shadowIntensity", "100");
        assert_eq!(site.surface().root_property("--shadow-md"), Some("0 4px 8px rgba(0, 0, 0, 0.2)"));
        assert_eq!(site.surface().text(ids::SHADOW_INTENSITY_LABEL).as_deref(), Some("Strong"));
        // Shadows never reach the CSS snippet.
        assert!(!css(&site).contains("shadow"));
    }

    #[test]
    fn test_border_radius_updates_label_and_css() {
        let mut site = start(MemorySurface::customize_page());
        site.on_input("borderRadius", "16");
        assert_eq!(site.surface().text(ids::BORDER_RADIUS_LABEL).as_deref(), Some("16px"));
        assert_eq!(site.surface().root_property("--radius-lg"), Some("calc(16px * 1.5)"));
        assert!(css(&site).contains("--radius-md: 16px;"));
        assert!(!css(&site).contains("radius-lg"));
    }

    #[test]
    fn test_reset_then_serialize_yields_default_block() {
        let mut site = start(MemorySurface::customize_page());
        site.on_input("primaryColor", "#000000");
        site.on_change("fontFamily", "serif");
        site.on_input("borderRadius", "2");

        assert!(site.on_click("resetCustomization"));

        assert_eq!(css(&site), DEFAULT_CSS);
        assert!(site.surface().root_style().is_empty());
        assert_eq!(site.surface().value("primaryColorText").as_deref(), Some("#4361ee"));
        assert_eq!(site.surface().value("shadowIntensity").as_deref(), Some("15"));
        assert_eq!(
            messages(&site),
            vec![("Customization reset to default".to_string(), NoticeKind::Info)]
        );
    }

    #[test]
    fn test_apply_reports_twice() {
        let mut site = start(MemorySurface::customize_page());
        assert!(site.on_click("applyCustomization"));
        assert_eq!(
            messages(&site),
            vec![
                ("Customization saved!".to_string(), NoticeKind::Success),
                ("Customization applied!".to_string(), NoticeKind::Success),
            ]
        );
    }

    #[test]
    fn test_configured_defaults_drive_reset() {
        let config = SiteConfig::from_toml_str(
            r##"
            darken_percent = 0.0

            [defaults]
            primary = "#2b2d42"
            border_radius = "4"
            "##,
        )
        .expect("config");
        let mut site = Site::new(MemorySurface::customize_page(), VirtualScheduler::new(), config);
        site.start();
        site.on_click("resetCustomization");

        assert_eq!(site.surface().value("primaryColor").as_deref(), Some("#2b2d42"));
        assert!(css(&site).contains("--primary-dark: #2b2d42;"));
        assert!(css(&site).contains("--radius-md: 4px;"));
    }
}

// ============================================================================
// Copy CSS
// ============================================================================

mod copy_tests {
    use super::*;

    #[test]
    fn test_copy_writes_css_and_shows_feedback() {
        let mut site = start(MemorySurface::customize_page());
        assert!(site.on_click("copyCss"));
        assert_eq!(site.surface().clipboard_writes(), &[DEFAULT_CSS.to_string()]);

        site.on_clipboard(Ok(()));
        assert!(site.surface().markup("copyCss").is_some_and(|m| m.contains("Copied!")));

        site.advance(ms(1999));
        assert!(site.surface().markup("copyCss").is_some_and(|m| m.contains("Copied!")));
        site.advance(ms(1));
        assert_eq!(site.surface().markup("copyCss").as_deref(), Some(COPY_BUTTON_LABEL));
    }

    #[test]
    fn test_second_copy_keeps_original_label() {
        let mut site = start(MemorySurface::customize_page());
        site.on_click("copyCss");
        site.on_clipboard(Ok(()));
        site.advance(ms(1000));
        site.on_click("copyCss");
        site.on_clipboard(Ok(()));

        // The first copy's timer no longer restores.
        site.advance(ms(1000));
        assert!(site.surface().markup("copyCss").is_some_and(|m| m.contains("Copied!")));

        site.advance(ms(1000));
        assert_eq!(site.surface().markup("copyCss").as_deref(), Some(COPY_BUTTON_LABEL));
    }

    #[test]
    fn test_clipboard_failure_notifies() {
        let mut site = start(MemorySurface::customize_page());
        site.on_click("copyCss");
        site.on_clipboard(Err(Error::clipboard("denied")));

        assert_eq!(site.surface().markup("copyCss").as_deref(), Some(COPY_BUTTON_LABEL));
        assert_eq!(
            messages(&site),
            vec![(CLIPBOARD_FAILED.to_string(), NoticeKind::Error)]
        );
    }

    #[test]
    fn test_copy_without_output_is_inert() {
        let mut surface = MemorySurface::customize_page();
        surface.remove_element(ids::CSS_OUTPUT);
        let mut site = start(surface);
        assert!(!site.on_click("copyCss"));
        assert!(site.surface().clipboard_writes().is_empty());
    }
}

// ============================================================================
// Code blocks
// ============================================================================

mod code_block_tests {
    use super::*;

    const SAMPLE: &str = "<Button variant=\"primary\" />";

    fn docs_page() -> MemorySurface {
        MemorySurface::new()
            .with_code_block("buttonSample", SAMPLE)
            .with_content("installSample", "npm install atelier")
    }

    #[test]
    fn test_click_copies_inner_code_and_shows_feedback() {
        let mut site = start(docs_page());
        let original = site.surface().markup("buttonSample");

        assert!(site.on_code_block_click("buttonSample"));
        assert_eq!(site.surface().clipboard_writes(), &[SAMPLE.to_string()]);

        site.on_clipboard(Ok(()));
        assert_eq!(site.surface().markup("buttonSample").as_deref(), Some(CODE_COPIED));

        site.advance(ms(1999));
        assert_eq!(site.surface().markup("buttonSample").as_deref(), Some(CODE_COPIED));
        site.advance(ms(1));
        assert_eq!(site.surface().markup("buttonSample"), original);
    }

    #[test]
    fn test_block_without_code_copies_its_own_text() {
        let mut site = start(docs_page());
        assert!(site.on_code_block_click("installSample"));
        assert_eq!(
            site.surface().clipboard_writes(),
            &["npm install atelier".to_string()]
        );
    }

    #[test]
    fn test_click_during_feedback_is_ignored() {
        let mut site = start(docs_page());
        site.on_code_block_click("buttonSample");
        site.on_clipboard(Ok(()));

        assert!(!site.on_code_block_click("buttonSample"));
        assert_eq!(site.surface().clipboard_writes().len(), 1);

        site.advance(ms(2000));
        assert!(site.on_code_block_click("buttonSample"));
        assert_eq!(site.surface().clipboard_writes().len(), 2);
    }

    #[test]
    fn test_failure_notifies_and_keeps_content() {
        let mut site = start(docs_page());
        let original = site.surface().markup("installSample");
        site.on_code_block_click("installSample");
        site.on_clipboard(Err(Error::clipboard("denied")));

        assert_eq!(site.surface().markup("installSample"), original);
        assert_eq!(
            messages(&site),
            vec![(CLIPBOARD_FAILED.to_string(), NoticeKind::Error)]
        );
    }

    #[test]
    fn test_outcomes_settle_in_click_order() {
        let surface = MemorySurface::customize_page().with_code_block("buttonSample", SAMPLE);
        let mut site = start(surface);
        site.on_code_block_click("buttonSample");
        site.on_click("copyCss");

        site.on_clipboard(Ok(()));
        site.on_clipboard(Err(Error::clipboard("denied")));

        assert_eq!(site.surface().markup("buttonSample").as_deref(), Some(CODE_COPIED));
        assert_eq!(site.surface().markup("copyCss").as_deref(), Some(COPY_BUTTON_LABEL));
        assert_eq!(site.notifications().len(), 1);
    }

    #[test]
    fn test_separate_elements_restore_independently() {
        let surface = MemorySurface::customize_page().with_code_block("buttonSample", SAMPLE);
        let mut site = start(surface);
        let sample = site.surface().markup("buttonSample");

        site.on_code_block_click("buttonSample");
        site.on_clipboard(Ok(()));
        site.advance(ms(500));
        site.on_click("copyCss");
        site.on_clipboard(Ok(()));

        site.advance(ms(1500));
        assert_eq!(site.surface().markup("buttonSample"), sample);
        assert!(site.surface().markup("copyCss").is_some_and(|m| m.contains("Copied!")));

        site.advance(ms(500));
        assert_eq!(site.surface().markup("copyCss").as_deref(), Some(COPY_BUTTON_LABEL));
    }

    #[test]
    fn test_missing_block_is_inert() {
        let mut site = start(docs_page());
        assert!(!site.on_code_block_click("nowhere"));
        site.on_clipboard(Ok(()));
        assert!(site.surface().clipboard_writes().is_empty());
    }
}

// ============================================================================
// Examples page
// ============================================================================

mod examples_tests {
    use super::*;

    fn login(email: &str, password: &str) -> TestSite {
        let surface = MemorySurface::examples_page()
            .with_value(ids::LOGIN_EMAIL, email)
            .with_value(ids::LOGIN_PASSWORD, password);
        start(surface)
    }

    fn result(site: &TestSite) -> String {
        site.surface().markup(ids::LOGIN_RESULT).unwrap_or_default()
    }

    #[test]
    fn test_demo_buttons() {
        let mut site = start(MemorySurface::examples_page());
        for (id, kind) in [
            ("showSuccess", NoticeKind::Success),
            ("showWarning", NoticeKind::Warning),
            ("showError", NoticeKind::Error),
            ("showInfo", NoticeKind::Info),
        ] {
            assert!(site.on_click(id));
            assert_eq!(site.notifications().live().last().map(|n| n.kind), Some(kind));
        }
        assert_eq!(site.notifications().len(), 4);
    }

    #[test]
    fn test_login_with_empty_field() {
        let mut site = login("a@b.c", "");
        assert!(site.on_submit(ids::LOGIN_FORM));
        assert_eq!(
            messages(&site),
            vec![("Please fill in all fields".to_string(), NoticeKind::Error)]
        );
        assert_eq!(result(&site), "");
    }

    #[test]
    fn test_login_success_after_delay() {
        let mut site = login("user@example.com", "secret1");
        assert!(site.on_submit(ids::LOGIN_FORM));
        assert!(result(&site).contains("Signing in..."));

        site.advance(ms(1499));
        assert!(result(&site).contains("Signing in..."));
        site.advance(ms(1));
        assert!(result(&site).contains("Login successful! Redirecting..."));
    }

    #[test]
    fn test_login_rejected() {
        let mut site = login("user", "secret1");
        site.on_submit(ids::LOGIN_FORM);
        site.advance(ms(1500));
        assert!(result(&site).contains("alert-danger"));
        assert!(site.notifications().is_empty());
    }

    #[test]
    fn test_other_forms_are_not_handled() {
        let mut site = login("a@b.c", "secret1");
        assert!(!site.on_submit("contactForm"));
    }

    #[test]
    fn test_panel_buttons_inert_off_customize_page() {
        let mut site = start(MemorySurface::examples_page());
        assert!(site.panel().is_none());
        assert!(!site.on_click("applyCustomization"));
        assert!(!site.on_click("resetCustomization"));
        assert!(!site.on_input("primaryColor", "#000000"));
        assert!(site.notifications().is_empty());
    }
}

// ============================================================================
// Missing elements
// ============================================================================

mod missing_element_tests {
    use super::*;

    #[test]
    fn test_page_without_marker_ignores_controls() {
        let surface = MemorySurface::new()
            .with_value("primaryColor", "#4361ee")
            .with_value("primaryColorText", "#4361ee");
        let mut site = start(surface);
        assert!(!site.on_input("primaryColor", "#000000"));
        assert!(site.surface().root_style().is_empty());
    }

    #[test]
    fn test_slider_without_label_is_inert() {
        let mut surface = MemorySurface::customize_page();
        surface.remove_element(ids::SHADOW_INTENSITY_LABEL);
        let mut site = start(surface);
        assert!(!site.on_input("shadowIntensity", "90"));
        assert_eq!(site.surface().root_property("--shadow-md"), Some("0 4px 8px rgba(0, 0, 0, 0.115)"));
    }

    #[test]
    fn test_missing_css_output_still_previews() {
        let mut surface = MemorySurface::customize_page();
        surface.remove_element(ids::CSS_OUTPUT);
        let mut site = start(surface);
        assert!(site.on_input("primaryColor", "#000000"));
        assert_eq!(site.surface().root_property("--primary"), Some("#000000"));
    }

    #[test]
    fn test_login_without_result_area_is_not_handled() {
        let mut surface = MemorySurface::examples_page();
        surface.remove_element(ids::LOGIN_RESULT);
        let mut site = start(surface);
        assert!(!site.on_submit(ids::LOGIN_FORM));
        assert!(site.notifications().is_empty());
    }

    #[test]
    fn test_unknown_ids_are_ignored() {
        let mut site = start(MemorySurface::customize_page());
        assert!(!site.on_input("nope", "x"));
        assert!(!site.on_click("nope"));
    }
}
