//! Writes the advanced plots page (correlation heatmap, network graph) to
//! `advanced_plots.html` and opens it in the browser.

use anyhow::{Context, Result};
use viz_gallery::gallery::advanced;

fn main() -> Result<()> {
    env_logger::init();

    let page = advanced::build_page();
    page.show("advanced_plots.html")
        .context("failed to produce advanced_plots.html")?;
    println!("Advanced plots saved to 'advanced_plots.html'");
    Ok(())
}
