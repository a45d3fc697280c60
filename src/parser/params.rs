//! URL-encoded parameter decoding.

use std::collections::HashMap;

use log::warn;

use crate::parser::error::Error;
use crate::parser::request::ParseMode;

/// Decode an `&`-separated `key=value` string into `params`.
///
/// Later pairs overwrite earlier ones, and anything already in `params` is
/// overwritten on key collision. Pairs without an `=` are skipped in lenient
/// mode and rejected in strict mode.
pub(crate) fn append_url_encoded(
    params: &mut HashMap<String, String>,
    encoded: &str,
    mode: ParseMode,
) -> Result<(), Error> {
    for pair in encoded.split('&') {
        match pair.split_once('=') {
            Some((key, value)) => {
                params.insert(key.to_string(), decode_value(value));
            }
            None => {
                if mode == ParseMode::Strict && !pair.is_empty() {
                    return Err(Error::InvalidParamPair(pair.to_string()));
                }
            }
        }
    }

    Ok(())
}

/// Decode a single parameter value: `+` becomes a space, percent-escapes are
/// reversed, then HTML entities are unescaped. A value whose percent-escapes
/// cannot be decoded falls back to the raw value, still entity-unescaped.
fn decode_value(value: &str) -> String {
    let spaced = value.replace('+', " ");
    match urlencoding::decode(&spaced) {
        Ok(decoded) => html_escape::decode_html_entities(&decoded).into_owned(),
        Err(e) => {
            warn!("Invalid percent-encoding in parameter value {value:?}, using raw value: {e}");
            html_escape::decode_html_entities(value).into_owned()
        }
    }
}
