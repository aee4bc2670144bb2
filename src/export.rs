//! Headless Markdown export

use std::io::Write;
use std::path::Path;

use vibeparse_app::actions::write_export;
use vibeparse_client::ApiClient;
use vibeparse_core::prelude::*;

/// Fetch a script and render it as Markdown
pub async fn fetch_markdown(client: &ApiClient, script_id: &str) -> Result<String> {
    let script = client.fetch_script(script_id).await.into_result()?;
    Ok(script.to_markdown())
}

/// Export to `output`, or to stdout when no file is given
pub async fn run(client: &ApiClient, script_id: &str, output: Option<&Path>) -> Result<()> {
    let markdown = fetch_markdown(client, script_id).await?;
    match output {
        Some(path) => {
            write_export(path.to_path_buf(), markdown).await?;
            info!("Exported {} to {:?}", script_id, path);
            eprintln!("Exported {} to {}", script_id, path.display());
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout
                .write_all(markdown.as_bytes())
                .and_then(|()| stdout.flush())
                .context("Failed to write Markdown to stdout")?;
        }
    }
    Ok(())
}
