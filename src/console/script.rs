use std::collections::VecDeque;

use thiserror::Error;

use crate::data::Square;

/// Error when parsing a click script.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("invalid square notation: '{0}'")]
pub struct ParseError(String);

/// A queue of scripted clicks for driving a [`crate::viewer::Viewer`]
/// without a terminal.
///
/// New script can be appended at any time for interactive use.
#[derive(Debug, Clone, Default)]
pub struct ClickScript {
    pending: VecDeque<Square>,
}

impl ClickScript {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of clicks not yet taken.
    #[inline]
    pub fn len(&self) -> usize {
        self.pending.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Parse and queue additional clicks.
    ///
    /// Format:
    /// - Squares are 2 characters (e.g., "e2", "a1")
    /// - Whitespace and periods separate clicks and are otherwise ignored
    ///
    /// Examples:
    /// - `"e2e4."` - Click e2, then e4
    /// - `"e2. e4."` - Same, with one period per click
    ///
    /// On error nothing from `script` is queued.
    pub fn push_script(&mut self, script: &str) -> Result<(), ParseError> {
        let clicks = parse_script(script)?;
        self.pending.extend(clicks);
        Ok(())
    }

    /// Take the next pending click.
    #[inline]
    pub fn next_click(&mut self) -> Option<Square> {
        self.pending.pop_front()
    }

    /// Take all pending clicks, calling the provided callback for each.
    ///
    /// Stops at the first callback error, leaving the remaining clicks queued.
    pub fn drain<F, E>(&mut self, mut on_click: F) -> Result<(), E>
    where
        F: FnMut(Square) -> Result<(), E>,
    {
        while let Some(square) = self.next_click() {
            on_click(square)?;
        }
        Ok(())
    }
}

/// Parse a click script into the squares it names, in order.
fn parse_script(script: &str) -> Result<Vec<Square>, ParseError> {
    let mut clicks = Vec::new();
    let mut current_token = String::new();

    for ch in script.chars() {
        match ch {
            c if c == '.' || c.is_whitespace() => {
                flush_token(&mut current_token, &mut clicks)?;
            }
            _ => {
                current_token.push(ch);

                // Squares are exactly 2 characters (e.g., "e2", "a1")
                if current_token.chars().count() == 2 {
                    flush_token(&mut current_token, &mut clicks)?;
                }
            }
        }
    }

    flush_token(&mut current_token, &mut clicks)?;
    Ok(clicks)
}

/// Parse the current token as a click and clear it.
fn flush_token(token: &mut String, clicks: &mut Vec<Square>) -> Result<(), ParseError> {
    if !token.is_empty() {
        let square: Square = token.parse().map_err(|_| ParseError(token.clone()))?;
        clicks.push(square);
        token.clear();
    }
    Ok(())
}
