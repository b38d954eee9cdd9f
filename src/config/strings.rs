//! Display strings for the default configuration
//!
//! All human-readable titles and descriptions used by the default config
//! live here as one plain value, exposed through [`ui_strings`]. Locale
//! resolution is a report-layer concern; the scoring core only ever passes
//! these through.

/// The full table of default-config display strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UiStrings {
    pub performance_category_title: &'static str,
    pub metric_group_title: &'static str,
    pub load_opportunities_group_title: &'static str,
    pub load_opportunities_group_description: &'static str,
    pub diagnostics_group_title: &'static str,
    pub diagnostics_group_description: &'static str,
    pub a11y_color_contrast_group_title: &'static str,
    pub a11y_color_contrast_group_description: &'static str,
    pub a11y_describe_contents_group_title: &'static str,
    pub a11y_describe_contents_group_description: &'static str,
    pub a11y_well_structured_group_title: &'static str,
    pub a11y_well_structured_group_description: &'static str,
    pub a11y_aria_group_title: &'static str,
    pub a11y_aria_group_description: &'static str,
    pub a11y_correct_attributes_group_title: &'static str,
    pub a11y_correct_attributes_group_description: &'static str,
    pub a11y_element_names_group_title: &'static str,
    pub a11y_element_names_group_description: &'static str,
    pub a11y_language_group_title: &'static str,
    pub a11y_language_group_description: &'static str,
    pub a11y_meta_group_title: &'static str,
    pub a11y_meta_group_description: &'static str,
    pub pwa_fast_reliable_group_title: &'static str,
    pub pwa_installable_group_title: &'static str,
    pub pwa_optimized_group_title: &'static str,
    pub seo_mobile_group_title: &'static str,
    pub seo_mobile_group_description: &'static str,
    pub seo_content_group_title: &'static str,
    pub seo_content_group_description: &'static str,
    pub seo_crawl_group_title: &'static str,
    pub seo_crawl_group_description: &'static str,
    pub accessibility_category_title: &'static str,
    pub accessibility_category_description: &'static str,
    pub accessibility_category_manual_description: &'static str,
    pub best_practices_category_title: &'static str,
    pub seo_category_title: &'static str,
    pub seo_category_description: &'static str,
    pub seo_category_manual_description: &'static str,
    pub pwa_category_title: &'static str,
    pub pwa_category_description: &'static str,
    pub pwa_category_manual_description: &'static str,
}

static UI_STRINGS: UiStrings = UiStrings {
    performance_category_title: "Performance",
    metric_group_title: "Metrics",
    load_opportunities_group_title: "Opportunities",
    load_opportunities_group_description: "These optimizations can speed up your page load.",
    diagnostics_group_title: "Diagnostics",
    diagnostics_group_description: "More information about the performance of your application.",
    a11y_color_contrast_group_title: "Color Contrast Is Satisfactory",
    a11y_color_contrast_group_description:
        "These are opportunities to improve the legibility of your content.",
    a11y_describe_contents_group_title: "Elements Describe Contents Well",
    a11y_describe_contents_group_description:
        "These are opportunities to make your content easier to understand for a user of \
         assistive technology, like a screen reader.",
    a11y_well_structured_group_title: "Elements Are Well Structured",
    a11y_well_structured_group_description:
        "These are opportunities to make sure your HTML is appropriately structured.",
    a11y_aria_group_title: "ARIA Attributes Follow Best Practices",
    a11y_aria_group_description:
        "These are opportunities to improve the usage of ARIA in your application which may \
         enhance the experience for users of assistive technology, like a screen reader.",
    a11y_correct_attributes_group_title: "Elements Use Attributes Correctly",
    a11y_correct_attributes_group_description:
        "These are opportunities to improve the configuration of your HTML elements.",
    a11y_element_names_group_title: "Elements Have Discernible Names",
    a11y_element_names_group_description:
        "These are opportunities to improve the semantics of the controls in your application. \
         This may enhance the experience for users of assistive technology, like a screen reader.",
    a11y_language_group_title: "Page Specifies Valid Language",
    a11y_language_group_description:
        "These are opportunities to improve the interpretation of your content by users in \
         different locales.",
    a11y_meta_group_title: "Meta Tags Used Properly",
    a11y_meta_group_description:
        "These are opportunities to improve the user experience of your site.",
    pwa_fast_reliable_group_title: "Fast and reliable",
    pwa_installable_group_title: "Installable",
    pwa_optimized_group_title: "PWA Optimized",
    seo_mobile_group_title: "Mobile Friendly",
    seo_mobile_group_description:
        "Make sure your pages are mobile friendly so users don't have to pinch or zoom in order \
         to read the content pages.",
    seo_content_group_title: "Content Best Practices",
    seo_content_group_description:
        "Format your HTML in a way that enables crawlers to better understand your app's content.",
    seo_crawl_group_title: "Crawling and Indexing",
    seo_crawl_group_description:
        "To appear in search results, crawlers need access to your app.",
    accessibility_category_title: "Accessibility",
    accessibility_category_description:
        "These checks highlight opportunities to improve the accessibility of your web app. \
         Only a subset of accessibility issues can be automatically detected so manual testing \
         is also encouraged.",
    accessibility_category_manual_description:
        "These items address areas which an automated testing tool cannot cover. Learn more in \
         our guide on conducting an accessibility review.",
    best_practices_category_title: "Best Practices",
    seo_category_title: "SEO",
    seo_category_description:
        "These checks ensure that your page is optimized for search engine results ranking. \
         There are additional factors not checked here that may affect your search ranking.",
    seo_category_manual_description:
        "Run these additional validators on your site to check additional SEO best practices.",
    pwa_category_title: "Progressive Web App",
    pwa_category_description:
        "These checks validate the aspects of a Progressive Web App.",
    pwa_category_manual_description:
        "These checks are required by the baseline PWA Checklist but are not automatically \
         checked here. They do not affect your score but it's important that you verify them \
         manually.",
};

/// Accessor for the default-config string table. A separate value from the
/// config itself; the report layer can swap it out for another locale.
pub fn ui_strings() -> &'static UiStrings {
    &UI_STRINGS
}
