//! JSON formatter
//!
//! The AST types derive `Serialize`; this formatter is a thin wrapper over `serde_json`.

use super::registry::{FormatError, Formatter};
use crate::kif::ast::Node;

pub struct JsonFormatter;

impl Formatter for JsonFormatter {
    fn name(&self) -> &str {
        "json"
    }

    fn serialize(&self, nodes: &[Node]) -> Result<String, FormatError> {
        serde_json::to_string_pretty(nodes)
            .map_err(|e| FormatError::SerializationError(e.to_string()))
    }

    fn description(&self) -> &str {
        "AST as pretty-printed JSON"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kif::parsing::parse_source;
    use serde_json::Value;

    #[test]
    fn test_json_shape() {
        let output = parse_source("(age Bob 42)", "t");
        let text = JsonFormatter.serialize(&output.nodes).unwrap();
        let value: Value = serde_json::from_str(&text).unwrap();

        assert_eq!(value[0]["type"], "list");
        assert_eq!(value[0]["closed"], true);
        assert_eq!(value[0]["children"][2]["term"]["kind"], "number");
        assert_eq!(value[0]["children"][2]["term"]["value"], "42");
        assert_eq!(value[0]["range"]["span"]["end"], 12);
    }
}
