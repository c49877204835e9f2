use log::debug;

use crate::error::Result;
use crate::recommend::recommend_from;
use crate::render::{render, render_json, Style};
use crate::types::{Context, EncodingResultSet, Request};

/// Everything computed for one request.
#[derive(Debug, Clone)]
pub struct Generated {
    pub results: EncodingResultSet,
    pub recommendation: String,
}

pub fn generate(ctx: &Context, request: &Request) -> Result<Generated> {
    request.validate()?;
    let results = ctx.registry.encode_all(&request.input, &request.symbol)?;
    let recommendation = recommend_from(&results, request.limit, &request.symbol, request.policy);
    debug!("generated recommendation of {} chars", recommendation.chars().count());
    Ok(Generated {
        results,
        recommendation,
    })
}

impl Generated {
    pub fn render(&self, request: &Request, style: Style) -> String {
        render(request.mode, &self.results, &self.recommendation, &request.symbol, style)
    }

    pub fn render_json(&self, request: &Request) -> Result<String> {
        render_json(
            request.mode,
            &request.input,
            &self.results,
            &self.recommendation,
            &request.symbol,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PassforgeError;
    use crate::recommend::SymbolPolicy;
    use crate::types::OutputMode;

    #[test]
    fn test_generate_rock411gmail() {
        let mut request = Request::new("Rock411Gmail");
        request.limit = Some(12);
        request.symbol = "@!".to_string();
        let generated = generate(&Context::default(), &request).unwrap();
        assert_eq!(generated.results.base64(), "Um9jazQxMUdtYWls@!");
        assert_eq!(generated.recommendation, "Um9jazQxMUdt@!");
    }

    #[test]
    fn test_generate_rejects_empty_input() {
        let result = generate(&Context::default(), &Request::new(""));
        assert!(matches!(result, Err(PassforgeError::InvalidInput { .. })));
    }

    #[test]
    fn test_generate_single_symbol_policy() {
        let mut request = Request::new("Rock411Gmail");
        request.limit = Some(100);
        request.symbol = "#".to_string();
        request.policy = SymbolPolicy::Once;
        request.mode = OutputMode::Recommend;
        let generated = generate(&Context::default(), &request).unwrap();
        assert_eq!(
            generated.render(&request, Style::plain()),
            "✅ Recommended Password: Um9jazQxMUdtYWls#"
        );
    }
}
