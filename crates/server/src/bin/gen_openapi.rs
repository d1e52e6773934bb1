//! Print the dashboard API's OpenAPI document as JSON.

use anyhow::Context;
use server::openapi::ApiDoc;
use utoipa::OpenApi;

fn main() -> anyhow::Result<()> {
    let spec = ApiDoc::openapi()
        .to_pretty_json()
        .context("failed to serialize OpenAPI document")?;
    println!("{spec}");
    Ok(())
}
