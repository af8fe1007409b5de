//! Writes the basic plots page (line, scatter, bar, area) to
//! `basic_plots.html` and opens it in the browser.

use anyhow::{Context, Result};
use viz_gallery::gallery::basic;

fn main() -> Result<()> {
    env_logger::init();

    let page = basic::build_page();
    page.show("basic_plots.html")
        .context("failed to produce basic_plots.html")?;
    println!("Basic plots saved to 'basic_plots.html'");
    Ok(())
}
