//! End-to-end page builds: every gallery page renders, writes a non-empty
//! HTML artifact and embeds the expected figures.

use viz_gallery::gallery::{advanced, basic, dashboard, interactive};
use viz_gallery::page::{Item, Page, Tab};

fn assert_embeds_figures(html: &str, count: usize) {
    for i in 0..count {
        assert!(
            html.contains(&format!("figure-{i}")),
            "missing figure-{i} in page"
        );
    }
}

#[test]
fn basic_page_renders_four_figures() {
    let html = basic::build_page().to_html();
    assert!(!html.is_empty());
    assert!(html.contains("cdn.plot.ly"));
    assert!(html.contains("Line Plot Example"));
    assert!(html.contains("Scatter Plot with Hover"));
    assert!(html.contains("Bar Chart Example"));
    assert!(html.contains("Area Plot Example"));
    assert_embeds_figures(&html, 4);
}

#[test]
fn interactive_page_renders_widgets_and_table() {
    let html = interactive::build_page().to_html();
    assert!(html.contains("Interactive Sine Wave"));
    assert!(html.contains("updatemenus"));
    assert!(html.contains("GDP vs Population"));
    assert!(html.contains("GDP per Capita"));
    assert_embeds_figures(&html, 6);
}

#[test]
fn dashboard_page_renders_three_dashboards_with_tabs() {
    let html = dashboard::build_page().to_html();
    assert!(html.contains("Financial Dashboard"));
    assert!(html.contains("Sales Dashboard"));
    assert!(html.contains("Tabbed Dashboard"));
    assert!(html.contains("vg-tab-button"));
    assert!(html.contains("Overview"));
    assert!(html.contains("Time Series"));
    assert!(html.contains("Correlations"));
    assert_embeds_figures(&html, 11);
}

#[test]
fn advanced_page_renders_heatmap_and_network() {
    let html = advanced::build_page().to_html();
    assert!(html.contains("Business Metrics Correlation Heatmap"));
    assert!(html.contains("Karate Club"));
    assert_embeds_figures(&html, 2);
}

#[test]
fn pages_write_non_empty_artifacts() {
    let dir = tempfile::tempdir().expect("temp dir");
    let outputs = [
        (basic::build_page(), "basic_plots.html"),
        (interactive::build_page(), "interactive_plots.html"),
        (dashboard::build_page(), "dashboard_layouts.html"),
        (advanced::build_page(), "advanced_plots.html"),
    ];

    for (page, name) in outputs {
        let path = dir.path().join(name);
        page.write_html(&path).expect("page should write");
        let metadata = std::fs::metadata(&path).expect("artifact exists");
        assert!(metadata.len() > 0, "{name} should be non-empty");
    }
}

#[test]
fn page_output_is_deterministic() {
    assert_eq!(basic::build_page().to_html(), basic::build_page().to_html());
    assert_eq!(
        advanced::build_page().to_html(),
        advanced::build_page().to_html()
    );
}

#[test]
fn composer_escapes_text_and_numbers_tab_groups() {
    let page = Page::new(
        "A & B",
        Item::column(vec![
            Item::heading(2, "Tom & Jerry <3"),
            Item::tabs(vec![
                Tab::new("First", Item::text("one")),
                Tab::new("Second", Item::text("two")),
            ]),
            Item::tabs(vec![Tab::new("Third", Item::text("three"))]),
        ]),
    );
    let html = page.to_html();

    assert!(html.contains("<title>A &amp; B</title>"));
    assert!(html.contains("Tom &amp; Jerry &lt;3"));
    assert!(html.contains("id=\"tabs-0\""));
    assert!(html.contains("id=\"tabs-1\""));
    assert!(html.contains("vgShowTab('tabs-0', 1)"));
}
