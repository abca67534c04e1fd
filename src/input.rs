//! Plain-text operation streams: `n m` followed by `m` pairs `h d`.

use crate::error::{Error, Result};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Input {
    pub items: usize,
    pub ops: Vec<(usize, usize)>,
}

struct Tokens<'a> {
    inner: Box<dyn Iterator<Item = (usize, &'a str)> + 'a>,
    last_line: usize,
}

impl<'a> Tokens<'a> {
    fn new(text: &'a str) -> Self {
        Self {
            inner: Box::new(
                text.lines()
                    .enumerate()
                    .flat_map(|(i, line)| line.split_whitespace().map(move |t| (i + 1, t))),
            ),
            last_line: 1,
        }
    }

    fn next_usize(&mut self, what: &str) -> Result<usize> {
        let (line, tok) = self.inner.next().ok_or_else(|| Error::Malformed {
            line: self.last_line,
            reason: format!("expected {what}, found end of input"),
        })?;
        self.last_line = line;
        tok.parse().map_err(|_| Error::Malformed {
            line,
            reason: format!("expected {what}, found {tok:?}"),
        })
    }
}

/// Parses the whole stream. Anything after the m-th pair is ignored.
pub fn parse(text: &str) -> Result<Input> {
    let mut tokens = Tokens::new(text);
    let items = tokens.next_usize("item count")?;
    let m = tokens.next_usize("operation count")?;
    let ops: Vec<(usize, usize)> = (0..m)
        .map(|_| {
            let h = tokens.next_usize("item id")?;
            let d = tokens.next_usize("item id")?;
            Ok((h, d))
        })
        .collect::<Result<_>>()?;
    log::debug!("parsed {items} items and {m} operations");
    Ok(Input { items, ops })
}
