//! The default configuration data set
//!
//! Pure data: which audits run, which gatherers feed them in which pass,
//! and how audit results are weighted into category scores. Weights are
//! relative importances within a category, not global point totals; a
//! weight of 0 marks an audit informational (displayed, never scored).
//!
//! [`default_config`] returns the document and
//! [`ui_strings`](super::strings::ui_strings) returns its display string
//! table; the two are deliberately separate values.

use crate::config::raw::{RawAuditRef, RawCategory, RawConfig, RawGroup, RawPass, Settings};
use crate::config::strings::ui_strings;
use indexmap::IndexMap;
use std::collections::BTreeMap;

fn group(title: &str) -> RawGroup {
    RawGroup {
        title: title.to_string(),
        description: None,
    }
}

fn group_desc(title: &str, description: &str) -> RawGroup {
    RawGroup {
        title: title.to_string(),
        description: Some(description.to_string()),
    }
}

fn aref(id: &str, weight: f64) -> RawAuditRef {
    RawAuditRef {
        id: id.to_string(),
        weight,
        group: None,
    }
}

fn aref_in(id: &str, weight: f64, group: &str) -> RawAuditRef {
    RawAuditRef {
        id: id.to_string(),
        weight,
        group: Some(group.to_string()),
    }
}

/// Build the default configuration document.
///
/// The result is unvalidated data; callers go through
/// [`resolve`](super::resolver::resolve) or
/// [`ConfigModel::validate`](super::ConfigModel::validate) before scoring.
pub fn default_config() -> RawConfig {
    let s = ui_strings();

    let passes = vec![
        RawPass {
            pass_name: "defaultPass".to_string(),
            primary: None,
            record_trace: true,
            use_throttling: true,
            pause_after_load_ms: 1000,
            network_quiet_threshold_ms: 1000,
            cpu_quiet_threshold_ms: 1000,
            blocked_url_patterns: vec![],
            gatherers: [
                "scripts",
                "css-usage",
                "viewport-dimensions",
                "manifest",
                "runtime-exceptions",
                "console-messages",
                "accessibility",
                "image-elements",
                "link-elements",
                "meta-elements",
                "dobetterweb/anchors-with-no-rel-noopener",
                "dobetterweb/appcache",
                "dobetterweb/doctype",
                "dobetterweb/domstats",
                "dobetterweb/js-libraries",
                "dobetterweb/optimized-images",
                "dobetterweb/password-inputs-with-prevented-paste",
                "dobetterweb/response-compression",
                "dobetterweb/tags-blocking-first-paint",
                "seo/font-size",
                "seo/crawlable-links",
                "seo/hreflang",
                "seo/embedded-content",
                "seo/canonical",
                "seo/robots-txt",
            ]
            .iter()
            .map(|g| g.to_string())
            .collect(),
        },
        RawPass {
            pass_name: "offlinePass".to_string(),
            gatherers: vec![
                "service-worker".to_string(),
                "offline".to_string(),
                "start-url".to_string(),
            ],
            ..Default::default()
        },
        RawPass {
            pass_name: "redirectPass".to_string(),
            // Stylesheets, fonts, and images are irrelevant to redirects
            blocked_url_patterns: [
                "*.css", "*.jpg", "*.jpeg", "*.png", "*.gif", "*.svg", "*.ttf", "*.woff",
                "*.woff2",
            ]
            .iter()
            .map(|p| p.to_string())
            .collect(),
            gatherers: vec![
                "http-redirect".to_string(),
                "html-without-javascript".to_string(),
            ],
            ..Default::default()
        },
    ];

    let audits: Vec<String> = [
        "is-on-https",
        "redirects-http",
        "service-worker",
        "works-offline",
        "viewport",
        "without-javascript",
        "metrics/first-contentful-paint",
        "metrics/first-meaningful-paint",
        "load-fast-enough-for-pwa",
        "metrics/speed-index",
        "screenshot-thumbnails",
        "final-screenshot",
        "metrics/estimated-input-latency",
        "errors-in-console",
        "time-to-first-byte",
        "metrics/first-cpu-idle",
        "metrics/interactive",
        "user-timings",
        "critical-request-chains",
        "redirects",
        "installable-manifest",
        "splash-screen",
        "themed-omnibox",
        "content-width",
        "image-aspect-ratio",
        "deprecations",
        "mainthread-work-breakdown",
        "bootup-time",
        "uses-rel-preload",
        "uses-rel-preconnect",
        "font-display",
        "network-requests",
        "metrics",
        "offline-start-url",
        "manual/pwa-cross-browser",
        "manual/pwa-page-transitions",
        "manual/pwa-each-page-has-url",
        "accessibility/aria-allowed-attr",
        "accessibility/aria-required-attr",
        "accessibility/aria-required-children",
        "accessibility/aria-required-parent",
        "accessibility/aria-roles",
        "accessibility/aria-valid-attr-value",
        "accessibility/aria-valid-attr",
        "accessibility/audio-caption",
        "accessibility/button-name",
        "accessibility/bypass",
        "accessibility/color-contrast",
        "accessibility/definition-list",
        "accessibility/dlitem",
        "accessibility/document-title",
        "accessibility/duplicate-id",
        "accessibility/frame-title",
        "accessibility/html-has-lang",
        "accessibility/html-lang-valid",
        "accessibility/image-alt",
        "accessibility/input-image-alt",
        "accessibility/label",
        "accessibility/layout-table",
        "accessibility/link-name",
        "accessibility/list",
        "accessibility/listitem",
        "accessibility/meta-refresh",
        "accessibility/meta-viewport",
        "accessibility/object-alt",
        "accessibility/tabindex",
        "accessibility/td-headers-attr",
        "accessibility/th-has-data-cells",
        "accessibility/valid-lang",
        "accessibility/video-caption",
        "accessibility/video-description",
        "accessibility/manual/accesskeys",
        "accessibility/manual/custom-controls-labels",
        "accessibility/manual/custom-controls-roles",
        "accessibility/manual/focus-traps",
        "accessibility/manual/focusable-controls",
        "accessibility/manual/heading-levels",
        "accessibility/manual/interactive-element-affordance",
        "accessibility/manual/logical-tab-order",
        "accessibility/manual/managed-focus",
        "accessibility/manual/offscreen-content-hidden",
        "accessibility/manual/use-landmarks",
        "accessibility/manual/visual-order-follows-dom",
        "byte-efficiency/uses-long-cache-ttl",
        "byte-efficiency/total-byte-weight",
        "byte-efficiency/offscreen-images",
        "byte-efficiency/render-blocking-resources",
        "byte-efficiency/unminified-css",
        "byte-efficiency/unminified-javascript",
        "byte-efficiency/unused-css-rules",
        "byte-efficiency/uses-webp-images",
        "byte-efficiency/uses-optimized-images",
        "byte-efficiency/uses-text-compression",
        "byte-efficiency/uses-responsive-images",
        "byte-efficiency/efficient-animated-content",
        "dobetterweb/appcache-manifest",
        "dobetterweb/doctype",
        "dobetterweb/dom-size",
        "dobetterweb/external-anchors-use-rel-noopener",
        "dobetterweb/geolocation-on-start",
        "dobetterweb/no-document-write",
        "dobetterweb/no-vulnerable-libraries",
        "dobetterweb/js-libraries",
        "dobetterweb/notification-on-start",
        "dobetterweb/password-inputs-can-be-pasted-into",
        "dobetterweb/uses-http2",
        "dobetterweb/uses-passive-event-listeners",
        "seo/meta-description",
        "seo/http-status-code",
        "seo/font-size",
        "seo/link-text",
        "seo/is-crawlable",
        "seo/robots-txt",
        "seo/hreflang",
        "seo/plugins",
        "seo/canonical",
        "seo/manual/mobile-friendly",
        "seo/manual/structured-data",
    ]
    .iter()
    .map(|a| a.to_string())
    .collect();

    let mut groups = BTreeMap::new();
    groups.insert("metrics".to_string(), group(s.metric_group_title));
    groups.insert(
        "load-opportunities".to_string(),
        group_desc(
            s.load_opportunities_group_title,
            s.load_opportunities_group_description,
        ),
    );
    groups.insert(
        "diagnostics".to_string(),
        group_desc(s.diagnostics_group_title, s.diagnostics_group_description),
    );
    groups.insert(
        "pwa-fast-reliable".to_string(),
        group(s.pwa_fast_reliable_group_title),
    );
    groups.insert(
        "pwa-installable".to_string(),
        group(s.pwa_installable_group_title),
    );
    groups.insert(
        "pwa-optimized".to_string(),
        group(s.pwa_optimized_group_title),
    );
    groups.insert(
        "a11y-color-contrast".to_string(),
        group_desc(
            s.a11y_color_contrast_group_title,
            s.a11y_color_contrast_group_description,
        ),
    );
    groups.insert(
        "a11y-describe-contents".to_string(),
        group_desc(
            s.a11y_describe_contents_group_title,
            s.a11y_describe_contents_group_description,
        ),
    );
    groups.insert(
        "a11y-well-structured".to_string(),
        group_desc(
            s.a11y_well_structured_group_title,
            s.a11y_well_structured_group_description,
        ),
    );
    groups.insert(
        "a11y-aria".to_string(),
        group_desc(s.a11y_aria_group_title, s.a11y_aria_group_description),
    );
    groups.insert(
        "a11y-correct-attributes".to_string(),
        group_desc(
            s.a11y_correct_attributes_group_title,
            s.a11y_correct_attributes_group_description,
        ),
    );
    groups.insert(
        "a11y-element-names".to_string(),
        group_desc(
            s.a11y_element_names_group_title,
            s.a11y_element_names_group_description,
        ),
    );
    groups.insert(
        "a11y-language".to_string(),
        group_desc(
            s.a11y_language_group_title,
            s.a11y_language_group_description,
        ),
    );
    groups.insert(
        "a11y-meta".to_string(),
        group_desc(s.a11y_meta_group_title, s.a11y_meta_group_description),
    );
    groups.insert(
        "seo-mobile".to_string(),
        group_desc(s.seo_mobile_group_title, s.seo_mobile_group_description),
    );
    groups.insert(
        "seo-content".to_string(),
        group_desc(s.seo_content_group_title, s.seo_content_group_description),
    );
    groups.insert(
        "seo-crawl".to_string(),
        group_desc(s.seo_crawl_group_title, s.seo_crawl_group_description),
    );

    // Declaration order is render order: performance leads the report
    let mut categories = IndexMap::new();

    categories.insert(
        "performance".to_string(),
        RawCategory {
            title: s.performance_category_title.to_string(),
            description: None,
            manual_description: None,
            audit_refs: vec![
                aref_in("first-contentful-paint", 3.0, "metrics"),
                aref_in("first-meaningful-paint", 1.0, "metrics"),
                aref_in("speed-index", 4.0, "metrics"),
                aref_in("interactive", 5.0, "metrics"),
                aref_in("first-cpu-idle", 2.0, "metrics"),
                aref_in("estimated-input-latency", 0.0, "metrics"),
                aref_in("render-blocking-resources", 0.0, "load-opportunities"),
                aref_in("uses-responsive-images", 0.0, "load-opportunities"),
                aref_in("offscreen-images", 0.0, "load-opportunities"),
                aref_in("unminified-css", 0.0, "load-opportunities"),
                aref_in("unminified-javascript", 0.0, "load-opportunities"),
                aref_in("unused-css-rules", 0.0, "load-opportunities"),
                aref_in("uses-optimized-images", 0.0, "load-opportunities"),
                aref_in("uses-webp-images", 0.0, "load-opportunities"),
                aref_in("uses-text-compression", 0.0, "load-opportunities"),
                aref_in("uses-rel-preconnect", 0.0, "load-opportunities"),
                aref_in("time-to-first-byte", 0.0, "load-opportunities"),
                aref_in("redirects", 0.0, "load-opportunities"),
                aref_in("uses-rel-preload", 0.0, "load-opportunities"),
                aref_in("efficient-animated-content", 0.0, "load-opportunities"),
                aref_in("total-byte-weight", 0.0, "diagnostics"),
                aref_in("uses-long-cache-ttl", 0.0, "diagnostics"),
                aref_in("dom-size", 0.0, "diagnostics"),
                aref_in("critical-request-chains", 0.0, "diagnostics"),
                aref("network-requests", 0.0),
                aref("metrics", 0.0),
                aref_in("user-timings", 0.0, "diagnostics"),
                aref_in("bootup-time", 0.0, "diagnostics"),
                aref("screenshot-thumbnails", 0.0),
                aref("final-screenshot", 0.0),
                aref_in("mainthread-work-breakdown", 0.0, "diagnostics"),
                aref_in("font-display", 0.0, "diagnostics"),
            ],
        },
    );

    categories.insert(
        "accessibility".to_string(),
        RawCategory {
            title: s.accessibility_category_title.to_string(),
            description: Some(s.accessibility_category_description.to_string()),
            manual_description: Some(s.accessibility_category_manual_description.to_string()),
            audit_refs: vec![
                aref_in("aria-allowed-attr", 3.0, "a11y-aria"),
                aref_in("aria-required-attr", 2.0, "a11y-aria"),
                aref_in("aria-required-children", 5.0, "a11y-aria"),
                aref_in("aria-required-parent", 2.0, "a11y-aria"),
                aref_in("aria-roles", 3.0, "a11y-aria"),
                aref_in("aria-valid-attr-value", 2.0, "a11y-aria"),
                aref_in("aria-valid-attr", 5.0, "a11y-aria"),
                aref_in("audio-caption", 4.0, "a11y-correct-attributes"),
                aref_in("button-name", 10.0, "a11y-element-names"),
                aref_in("bypass", 10.0, "a11y-describe-contents"),
                aref_in("color-contrast", 6.0, "a11y-color-contrast"),
                aref_in("definition-list", 1.0, "a11y-well-structured"),
                aref_in("dlitem", 1.0, "a11y-well-structured"),
                aref_in("document-title", 2.0, "a11y-describe-contents"),
                aref_in("duplicate-id", 5.0, "a11y-well-structured"),
                aref_in("frame-title", 5.0, "a11y-describe-contents"),
                aref_in("html-has-lang", 4.0, "a11y-language"),
                aref_in("html-lang-valid", 1.0, "a11y-language"),
                aref_in("image-alt", 8.0, "a11y-correct-attributes"),
                aref_in("input-image-alt", 1.0, "a11y-correct-attributes"),
                aref_in("label", 10.0, "a11y-describe-contents"),
                aref_in("layout-table", 1.0, "a11y-describe-contents"),
                aref_in("link-name", 9.0, "a11y-element-names"),
                aref_in("list", 5.0, "a11y-well-structured"),
                aref_in("listitem", 4.0, "a11y-well-structured"),
                aref_in("meta-refresh", 1.0, "a11y-meta"),
                aref_in("meta-viewport", 3.0, "a11y-meta"),
                aref_in("object-alt", 4.0, "a11y-describe-contents"),
                aref_in("tabindex", 4.0, "a11y-correct-attributes"),
                aref_in("td-headers-attr", 1.0, "a11y-correct-attributes"),
                aref_in("th-has-data-cells", 1.0, "a11y-correct-attributes"),
                aref_in("valid-lang", 1.0, "a11y-language"),
                aref_in("video-caption", 4.0, "a11y-describe-contents"),
                aref_in("video-description", 3.0, "a11y-describe-contents"),
                // Manual audits
                aref("accesskeys", 0.0),
                aref("logical-tab-order", 0.0),
                aref("focusable-controls", 0.0),
                aref("interactive-element-affordance", 0.0),
                aref("managed-focus", 0.0),
                aref("focus-traps", 0.0),
                aref("custom-controls-labels", 0.0),
                aref("custom-controls-roles", 0.0),
                aref("visual-order-follows-dom", 0.0),
                aref("offscreen-content-hidden", 0.0),
                aref("heading-levels", 0.0),
                aref("use-landmarks", 0.0),
            ],
        },
    );

    categories.insert(
        "best-practices".to_string(),
        RawCategory {
            title: s.best_practices_category_title.to_string(),
            description: None,
            manual_description: None,
            audit_refs: vec![
                aref("appcache-manifest", 1.0),
                aref("is-on-https", 1.0),
                aref("uses-http2", 1.0),
                aref("uses-passive-event-listeners", 1.0),
                aref("no-document-write", 1.0),
                aref("external-anchors-use-rel-noopener", 1.0),
                aref("geolocation-on-start", 1.0),
                aref("doctype", 1.0),
                aref("no-vulnerable-libraries", 1.0),
                aref("js-libraries", 0.0),
                aref("notification-on-start", 1.0),
                aref("deprecations", 1.0),
                aref("password-inputs-can-be-pasted-into", 1.0),
                aref("errors-in-console", 1.0),
                aref("image-aspect-ratio", 1.0),
            ],
        },
    );

    categories.insert(
        "seo".to_string(),
        RawCategory {
            title: s.seo_category_title.to_string(),
            description: Some(s.seo_category_description.to_string()),
            manual_description: Some(s.seo_category_manual_description.to_string()),
            audit_refs: vec![
                aref_in("viewport", 1.0, "seo-mobile"),
                aref_in("document-title", 1.0, "seo-content"),
                aref_in("meta-description", 1.0, "seo-content"),
                aref_in("http-status-code", 1.0, "seo-crawl"),
                aref_in("link-text", 1.0, "seo-content"),
                aref_in("is-crawlable", 1.0, "seo-crawl"),
                aref_in("robots-txt", 1.0, "seo-crawl"),
                aref_in("hreflang", 1.0, "seo-content"),
                aref_in("canonical", 1.0, "seo-content"),
                aref_in("font-size", 1.0, "seo-mobile"),
                aref_in("plugins", 1.0, "seo-content"),
                // Manual audits
                aref("mobile-friendly", 0.0),
                aref("structured-data", 0.0),
            ],
        },
    );

    categories.insert(
        "pwa".to_string(),
        RawCategory {
            title: s.pwa_category_title.to_string(),
            description: Some(s.pwa_category_description.to_string()),
            manual_description: Some(s.pwa_category_manual_description.to_string()),
            audit_refs: vec![
                // Fast and Reliable
                aref_in("load-fast-enough-for-pwa", 7.0, "pwa-fast-reliable"),
                aref_in("works-offline", 5.0, "pwa-fast-reliable"),
                aref_in("offline-start-url", 1.0, "pwa-fast-reliable"),
                // Installable
                aref_in("is-on-https", 2.0, "pwa-installable"),
                aref_in("service-worker", 1.0, "pwa-installable"),
                aref_in("installable-manifest", 2.0, "pwa-installable"),
                // PWA Optimized
                aref_in("redirects-http", 2.0, "pwa-optimized"),
                aref_in("splash-screen", 1.0, "pwa-optimized"),
                aref_in("themed-omnibox", 1.0, "pwa-optimized"),
                aref_in("content-width", 1.0, "pwa-optimized"),
                aref_in("viewport", 2.0, "pwa-optimized"),
                aref_in("without-javascript", 1.0, "pwa-optimized"),
                // Manual audits
                aref("pwa-cross-browser", 0.0),
                aref("pwa-page-transitions", 0.0),
                aref("pwa-each-page-has-url", 0.0),
            ],
        },
    );

    RawConfig {
        settings: Settings::default(),
        passes,
        audits,
        groups,
        categories,
    }
}
