use serde_json::Value;

/// Resolve a client-supplied index against a collection of `len` records
///
/// Integer-valued numbers and canonical digit strings (`"3"`, not `"03"`)
/// resolve to a position; negative, past-the-end, fractional, missing or
/// otherwise typed values resolve to nothing.
pub fn resolve_position(raw: Option<&Value>, len: usize) -> Option<usize> {
    let position = match raw? {
        Value::Number(number) => {
            if let Some(n) = number.as_u64() {
                usize::try_from(n).ok()?
            } else {
                let f = number.as_f64()?;
                if f < 0.0 || f.fract() != 0.0 || f >= len as f64 {
                    return None;
                }
                f as usize
            }
        }
        Value::String(text) => {
            let n: usize = text.parse().ok()?;
            if n.to_string() != *text {
                return None;
            }
            n
        }
        _ => return None,
    };

    (position < len).then_some(position)
}
