use log::debug;

use passforge::error::Result;
use passforge::generate::generate;
use passforge::render::Style;
use passforge::types::{Context, Request};

/// Returns the rendered text and the recommendation.
pub fn run_generate(ctx: &Context, request: &Request, json: bool, color: bool) -> Result<(String, String)> {
    let generated = generate(ctx, request)?;
    let text = if json {
        generated.render_json(request)?
    } else {
        generated.render(request, Style { color })
    };
    debug!("rendered {} lines for mode {}", text.lines().count(), request.mode);
    Ok((text, generated.recommendation))
}
