//! Coefficient reader: three whitespace-delimited numbers, or the exit letter.

use std::io::{self, BufRead};

/// Parsed equation `a*x^2 + b*x + c = 0`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coefficients {
    pub a: f64,
    pub b: f64,
    pub c: f64,
}

/// What the user typed at the prompt.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Input {
    Coefficients(Coefficients),
    /// First non-blank character was `x` or `X`; it is left unread.
    Exit,
    /// Nothing but blanks before end of stream.
    EndOfInput,
    /// Fewer than three numbers could be read.
    Incorrect,
}

fn is_blank(b: u8) -> bool {
    matches!(b, b' ' | b'\t' | b'\n' | b'\r')
}

/// Read one set of coefficients from `reader`.
pub fn read_coefficients<R: BufRead>(reader: &mut R) -> io::Result<Input> {
    let Some(first) = skip_blanks(reader)? else {
        return Ok(Input::EndOfInput);
    };
    if first == b'x' || first == b'X' {
        return Ok(Input::Exit);
    }

    let mut values = [0.0f64; 3];
    for slot in values.iter_mut() {
        let Some(token) = read_token(reader)? else {
            return Ok(Input::Incorrect);
        };
        match token.parse::<f64>() {
            Ok(v) => *slot = v,
            Err(_) => {
                crate::debug_log!("rejected token {token:?}");
                return Ok(Input::Incorrect);
            }
        }
    }
    let [a, b, c] = values;
    Ok(Input::Coefficients(Coefficients { a, b, c }))
}

/// Consume blanks and peek the next byte without consuming it.
fn skip_blanks<R: BufRead>(reader: &mut R) -> io::Result<Option<u8>> {
    loop {
        let buf = reader.fill_buf()?;
        if buf.is_empty() {
            return Ok(None);
        }
        match buf.iter().position(|&b| !is_blank(b)) {
            Some(pos) => {
                let next = buf[pos];
                reader.consume(pos);
                return Ok(Some(next));
            }
            None => {
                let len = buf.len();
                reader.consume(len);
            }
        }
    }
}

/// Next blank-delimited token, or `None` at end of stream.
fn read_token<R: BufRead>(reader: &mut R) -> io::Result<Option<String>> {
    if skip_blanks(reader)?.is_none() {
        return Ok(None);
    }
    let mut token = Vec::new();
    loop {
        let buf = reader.fill_buf()?;
        if buf.is_empty() {
            break;
        }
        let end = buf.iter().position(|&b| is_blank(b));
        let take = end.unwrap_or(buf.len());
        token.extend_from_slice(&buf[..take]);
        reader.consume(take);
        if end.is_some() {
            break;
        }
    }
    Ok(Some(String::from_utf8_lossy(&token).into_owned()))
}
