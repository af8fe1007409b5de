//! Writes the dashboard layouts page (financial, sales and tabbed panels)
//! to `dashboard_layouts.html` and opens it in the browser.

use anyhow::{Context, Result};
use viz_gallery::gallery::dashboard;

fn main() -> Result<()> {
    env_logger::init();

    let page = dashboard::build_page();
    page.show("dashboard_layouts.html")
        .context("failed to produce dashboard_layouts.html")?;
    println!("Dashboard layouts saved to 'dashboard_layouts.html'");
    Ok(())
}
