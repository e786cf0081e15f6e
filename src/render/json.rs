//! JSON rendering of instruction lists.

use super::RenderInstruction;
use crate::error::{Error, Result};

/// JSON output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JsonFormat {
    /// Pretty-printed JSON with indentation
    #[default]
    Pretty,
    /// Compact JSON without extra whitespace
    Compact,
}

/// Convert instructions to a JSON array.
pub fn to_json(instructions: &[RenderInstruction], format: JsonFormat) -> Result<String> {
    let result = match format {
        JsonFormat::Pretty => serde_json::to_string_pretty(instructions),
        JsonFormat::Compact => serde_json::to_string(instructions),
    };

    result.map_err(|e| Error::Render(format!("JSON serialization error: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_json_pretty() {
        let instructions = vec![RenderInstruction::text("Header")];
        let json = to_json(&instructions, JsonFormat::Pretty).unwrap();

        assert!(json.contains("\"kind\": \"text\""));
        assert!(json.contains("Header"));
        assert!(json.contains('\n'));
    }

    #[test]
    fn test_to_json_compact() {
        let instructions = vec![RenderInstruction::image("x.png"), RenderInstruction::Divider];
        let json = to_json(&instructions, JsonFormat::Compact).unwrap();

        assert!(!json.contains('\n'));
        assert_eq!(
            json,
            r#"[{"kind":"image","path":"x.png","caption":null,"full_width":true},{"kind":"divider"}]"#
        );
    }
}
