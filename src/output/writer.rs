//! Output array serialization

use std::io::Write;

use crate::error::{DockviewError, Result};

/// Serialize one output array as JSON and write it, newline-terminated,
/// to the sink.
pub fn write_array<W: Write>(values: &[serde_json::Value], sink: &mut W) -> Result<()> {
    serde_json::to_writer(&mut *sink, values).map_err(DockviewError::Encode)?;
    sink.write_all(b"\n")?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_empty_array() {
        let mut out = Vec::new();
        write_array(&[], &mut out).unwrap();
        assert_eq!(out, b"[]\n");
    }

    #[test]
    fn test_array_is_newline_terminated() {
        let mut out = Vec::new();
        write_array(&[json!(1), json!("a")], &mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "[1,\"a\"]\n");
    }

    #[test]
    fn test_values_keep_order() {
        let mut out = Vec::new();
        write_array(&[json!({"Id": "a"}), json!({"Id": "b"})], &mut out).unwrap();

        let decoded: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(decoded, json!([{"Id": "a"}, {"Id": "b"}]));
    }
}
