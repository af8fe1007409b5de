//! Writes the interactive plots page (restyle dropdown, selection tools,
//! data table) to `interactive_plots.html` and opens it in the browser.

use anyhow::{Context, Result};
use viz_gallery::gallery::interactive;

fn main() -> Result<()> {
    env_logger::init();

    let page = interactive::build_page();
    page.show("interactive_plots.html")
        .context("failed to produce interactive_plots.html")?;
    println!("Interactive plots saved to 'interactive_plots.html'");
    Ok(())
}
