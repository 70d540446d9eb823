//! list command - Print the sorted country names

use crate::cli::Context;
use crate::directory::Directory;
use anyhow::Result;

/// Print every common name, one per line, in directory order.
///
/// These are exactly the keys `show` accepts.
pub fn list(ctx: &Context) -> Result<()> {
    let directory = super::fetch_directory(ctx)?;
    let rendered = render(&directory);
    if !rendered.is_empty() {
        println!("{}", rendered);
    }
    Ok(())
}

/// Render the name list.
pub(crate) fn render(directory: &Directory) -> String {
    directory.names().collect::<Vec<_>>().join("\n")
}
