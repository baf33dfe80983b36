//! Fixture execution: dispatch a case to the `kernlibc-core` function it
//! names and render the result as text.
//!
//! Byte-buffer inputs are either an array of byte values or a JSON string.
//! A string gets a NUL appended, so `"ab"` and `[97, 98, 0]` are the same
//! input; arrays are taken verbatim and may omit the terminator.
//!
//! Output conventions:
//! - integers and lengths: decimal
//! - positions: decimal index, or `null` when nothing was found
//! - orderings: `-1`, `0` or `1`
//! - raw buffers: Rust debug list (`[1, 2, 0]`)
//! - C strings: the text before the first NUL
//! - a checked operation that refused to run: `None`

use std::cmp::Ordering;

use serde_json::Value;

use kernlibc_core::limits::LongWidth;
use kernlibc_core::{ctype, stdio, stdlib, string};

use crate::error::HarnessError;

/// Fill byte for output buffers, so untouched bytes stay recognizable.
pub const SENTINEL: u8 = 0xA5;

/// Default scratch size for `itoa`: 64 binary digits, sign, NUL and slack.
const ITOA_BUF_LEN: usize = 72;

/// Every function name [`execute_fixture_case`] accepts.
pub const SUPPORTED_FUNCTIONS: &[&str] = &[
    "memcpy", "memmove", "memset", "memclr", "memcmp", "memchr", "strlen", "strcmp", "strncmp",
    "strcpy", "strncpy", "strcat", "strncat", "strchr", "strtok_r", "strsep", "atoi", "itoa",
    "strtol", "strtoul", "snprintf", "isalnum", "isalpha", "isblank", "iscntrl", "isdigit",
    "isgraph", "islower", "isprint", "ispunct", "isspace", "isupper", "isxdigit", "tolower",
    "toupper",
];

/// Outcome of running one fixture case.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Execution {
    /// Rendered result, compared against `expected_output`.
    pub output: String,
    /// Extra observation worth reporting even when the output matches.
    pub note: Option<String>,
}

impl Execution {
    fn plain(output: impl Into<String>) -> Self {
        Self {
            output: output.into(),
            note: None,
        }
    }

    fn with_note(mut self, note: Option<String>) -> Self {
        self.note = note;
        self
    }
}

/// Typed access to a case's JSON inputs.
struct Inputs<'a> {
    function: &'a str,
    values: &'a Value,
}

impl Inputs<'_> {
    fn invalid(&self, field: &str, reason: &'static str) -> HarnessError {
        HarnessError::InvalidInput {
            function: self.function.to_string(),
            field: field.to_string(),
            reason,
        }
    }

    fn field(&self, name: &str) -> Result<&Value, HarnessError> {
        self.values
            .get(name)
            .ok_or_else(|| HarnessError::MissingInput {
                function: self.function.to_string(),
                field: name.to_string(),
            })
    }

    fn bytes(&self, name: &str) -> Result<Vec<u8>, HarnessError> {
        match self.field(name)? {
            Value::String(text) => {
                let mut bytes = text.as_bytes().to_vec();
                bytes.push(0);
                Ok(bytes)
            }
            Value::Array(items) => items
                .iter()
                .map(|item| {
                    item.as_u64()
                        .and_then(|b| u8::try_from(b).ok())
                        .ok_or_else(|| self.invalid(name, "expected byte values 0..=255"))
                })
                .collect(),
            _ => Err(self.invalid(name, "expected a string or an array of bytes")),
        }
    }

    fn int(&self, name: &str) -> Result<i64, HarnessError> {
        self.field(name)?
            .as_i64()
            .ok_or_else(|| self.invalid(name, "expected an integer"))
    }

    fn i32(&self, name: &str) -> Result<i32, HarnessError> {
        i32::try_from(self.int(name)?).map_err(|_| self.invalid(name, "out of int range"))
    }

    fn usize(&self, name: &str) -> Result<usize, HarnessError> {
        usize::try_from(self.int(name)?)
            .map_err(|_| self.invalid(name, "expected a non-negative integer"))
    }

    fn usize_or(&self, name: &str, default: usize) -> Result<usize, HarnessError> {
        if self.values.get(name).is_some() {
            self.usize(name)
        } else {
            Ok(default)
        }
    }

    fn byte(&self, name: &str) -> Result<u8, HarnessError> {
        // C passes the byte as an int and converts it to unsigned char.
        Ok(self.int(name)? as u8)
    }

    fn int_list(&self, name: &str) -> Result<Vec<i32>, HarnessError> {
        let Some(value) = self.values.get(name) else {
            return Ok(Vec::new());
        };
        let items = value
            .as_array()
            .ok_or_else(|| self.invalid(name, "expected an array of integers"))?;
        items
            .iter()
            .map(|item| {
                item.as_i64()
                    .and_then(|v| i32::try_from(v).ok())
                    .ok_or_else(|| self.invalid(name, "expected int values"))
            })
            .collect()
    }

    /// `long` width for the parsers. Fixtures default to 64 bits so results
    /// do not depend on the host.
    fn width(&self) -> Result<LongWidth, HarnessError> {
        match self.values.get("width").map(Value::as_u64) {
            None | Some(Some(64)) => Ok(LongWidth::Bits64),
            Some(Some(32)) => Ok(LongWidth::Bits32),
            Some(_) => Err(self.invalid("width", "expected 32 or 64")),
        }
    }
}

fn c_text(buf: &[u8]) -> String {
    String::from_utf8_lossy(&buf[..string::strlen(buf)]).into_owned()
}

fn bytes_repr(buf: &[u8]) -> String {
    format!("{buf:?}")
}

fn index_repr(index: Option<usize>) -> String {
    index.map_or_else(|| String::from("null"), |i| i.to_string())
}

fn ordering_repr(ordering: Ordering) -> String {
    match ordering {
        Ordering::Less => "-1",
        Ordering::Equal => "0",
        Ordering::Greater => "1",
    }
    .to_string()
}

fn clamp_note(requested: usize, done: usize) -> Option<String> {
    (done < requested).then(|| format!("count clamped from {requested} to {done}"))
}

fn ctype_predicate(function: &str) -> Option<fn(u8) -> bool> {
    Some(match function {
        "isalnum" => ctype::is_alnum,
        "isalpha" => ctype::is_alpha,
        "isblank" => ctype::is_blank,
        "iscntrl" => ctype::is_cntrl,
        "isdigit" => ctype::is_digit,
        "isgraph" => ctype::is_graph,
        "islower" => ctype::is_lower,
        "isprint" => ctype::is_print,
        "ispunct" => ctype::is_punct,
        "isspace" => ctype::is_space,
        "isupper" => ctype::is_upper,
        "isxdigit" => ctype::is_xdigit,
        _ => return None,
    })
}

/// Run the core implementation of `function` on `inputs`.
pub fn execute_fixture_case(function: &str, inputs: &Value) -> Result<Execution, HarnessError> {
    let args = Inputs {
        function,
        values: inputs,
    };

    let execution = match function {
        // ----- memory -----
        "memcpy" => {
            let src = args.bytes("src")?;
            let n = args.usize("n")?;
            let mut dst = vec![0u8; args.usize("dst_len")?];
            let copied = string::memcpy(&mut dst, &src, n);
            Execution::plain(bytes_repr(&dst)).with_note(clamp_note(n, copied))
        }
        "memmove" => {
            let mut buf = args.bytes("buf")?;
            let n = args.usize("n")?;
            let moved = string::memmove(&mut buf, args.usize("dst")?, args.usize("src")?, n);
            Execution::plain(bytes_repr(&buf)).with_note(clamp_note(n, moved))
        }
        "memset" => {
            let mut buf = args.bytes("buf")?;
            let n = args.usize("n")?;
            let filled = string::memset(&mut buf, args.byte("value")?, n);
            Execution::plain(bytes_repr(&buf)).with_note(clamp_note(n, filled))
        }
        "memclr" => {
            let mut buf = args.bytes("buf")?;
            let n = args.usize("n")?;
            let cleared = string::memclr(&mut buf, n);
            Execution::plain(bytes_repr(&buf)).with_note(clamp_note(n, cleared))
        }
        "memcmp" => {
            let ordering = string::memcmp(&args.bytes("a")?, &args.bytes("b")?, args.usize("n")?);
            Execution::plain(ordering_repr(ordering))
        }
        "memchr" => {
            let found = string::memchr(&args.bytes("buf")?, args.byte("value")?, args.usize("n")?);
            Execution::plain(index_repr(found))
        }

        // ----- strings -----
        "strlen" => Execution::plain(string::strlen(&args.bytes("s")?).to_string()),
        "strcmp" => Execution::plain(string::strcmp(&args.bytes("a")?, &args.bytes("b")?).to_string()),
        "strncmp" => Execution::plain(
            string::strncmp(&args.bytes("a")?, &args.bytes("b")?, args.usize("n")?).to_string(),
        ),
        "strcpy" => {
            let mut dst = vec![SENTINEL; args.usize("dst_len")?];
            match string::try_strcpy(&mut dst, &args.bytes("src")?) {
                Some(_) => Execution::plain(c_text(&dst)),
                None => Execution::plain("None"),
            }
        }
        "strncpy" => {
            let mut dst = vec![SENTINEL; args.usize("dst_len")?];
            let n = args.usize("n")?;
            let written = string::strncpy(&mut dst, &args.bytes("src")?, n);
            Execution::plain(bytes_repr(&dst)).with_note(clamp_note(n, written))
        }
        "strcat" => {
            let mut dst = args.bytes("dst")?;
            dst.resize(args.usize("dst_len")?.max(dst.len()), 0);
            match string::try_strcat(&mut dst, &args.bytes("src")?) {
                Some(_) => Execution::plain(c_text(&dst)),
                None => Execution::plain("None"),
            }
        }
        "strncat" => {
            let mut dst = args.bytes("dst")?;
            dst.resize(args.usize("dst_len")?.max(dst.len()), 0);
            let src = args.bytes("src")?;
            let n = args.usize("n")?;
            let needed = string::strlen(&dst) + string::strlen(&src).min(n) + 1;
            if needed > dst.len() {
                Execution::plain("None")
            } else {
                string::strncat(&mut dst, &src, n);
                Execution::plain(c_text(&dst))
            }
        }
        "strchr" => Execution::plain(index_repr(string::strchr(&args.bytes("s")?, args.byte("c")?))),
        "strtok_r" => {
            let mut buf = args.bytes("s")?;
            let delims = args.bytes("delims")?;
            let mut tokens = Vec::new();
            let mut save = 0;
            while let Some((start, len, next)) = string::strtok_r(&mut buf, &delims, save) {
                tokens.push(String::from_utf8_lossy(&buf[start..start + len]).into_owned());
                save = next;
            }
            Execution::plain(format!("{tokens:?}"))
        }
        "strsep" => {
            let mut buf = args.bytes("s")?;
            let delims = args.bytes("delims")?;
            let mut fields = Vec::new();
            let mut cursor = Some(0);
            while let Some((start, len, next)) = string::strsep(&mut buf, &delims, cursor) {
                fields.push(String::from_utf8_lossy(&buf[start..start + len]).into_owned());
                cursor = next;
            }
            Execution::plain(format!("{fields:?}"))
        }

        // ----- numeric conversion -----
        "atoi" => Execution::plain(stdlib::atoi(&args.bytes("s")?).to_string()),
        "itoa" => {
            let base = u32::try_from(args.int("base")?).unwrap_or(0);
            let mut buf = vec![SENTINEL; args.usize_or("buf_len", ITOA_BUF_LEN)?];
            match stdlib::itoa(args.int("value")?, base, &mut buf) {
                Some(_) => Execution::plain(c_text(&buf)),
                None => Execution::plain("None"),
            }
        }
        "strtol" => {
            let (value, consumed, status) =
                stdlib::strtol_width(&args.bytes("s")?, args.i32("base")?, args.width()?);
            Execution::plain(format!("{value},{consumed},{status:?}"))
        }
        "strtoul" => {
            let (value, consumed, status) =
                stdlib::strtoul_width(&args.bytes("s")?, args.i32("base")?, args.width()?);
            Execution::plain(format!("{value},{consumed},{status:?}"))
        }

        // ----- formatted output -----
        "snprintf" => {
            let capacity = args.usize("capacity")?;
            let mut buf = vec![SENTINEL; args.usize_or("buf_len", capacity + 16)?];
            let outcome =
                stdio::format_bounded(&mut buf, capacity, &args.bytes("format")?, &args.int_list("args")?);
            let bound = capacity.min(buf.len());
            if buf[bound..].iter().any(|&b| b != SENTINEL) {
                Execution::plain("overrun")
            } else {
                Execution::plain(format!(
                    "{}:{}",
                    outcome.written,
                    String::from_utf8_lossy(&buf[..outcome.written])
                ))
                .with_note(outcome.truncated.then(|| String::from("truncated at capacity")))
            }
        }

        // ----- ctype -----
        "tolower" | "toupper" => {
            let c = args.int("c")?;
            let mapped = match u8::try_from(c) {
                Ok(byte) if function == "tolower" => i64::from(ctype::to_lower(byte)),
                Ok(byte) => i64::from(ctype::to_upper(byte)),
                Err(_) => c,
            };
            Execution::plain(mapped.to_string())
        }
        other => match ctype_predicate(other) {
            Some(predicate) => {
                let hit = u8::try_from(args.int("c")?).is_ok_and(predicate);
                Execution::plain(if hit { "1" } else { "0" })
            }
            None => return Err(HarnessError::UnsupportedFunction(other.to_string())),
        },
    };
    Ok(execution)
}
