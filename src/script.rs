//! Text front end over the engine operations.
//!
//! One operation per line, `#` starts a comment. Every input modality
//! (drag-release, click-to-place, a script line) resolves to the same
//! engine call, so a script exercises exactly what an interactive front end
//! would. The script surface validates cells and token ids; the engine, by
//! contract, does not.

use crate::core_types::CellId;
use crate::engine::BoardEngine;
use crate::error::{BoardError, BoardResult};
use std::str::FromStr;
use strum_macros::{Display, EnumString};

/// Keywords accepted at the head of a script line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString)]
#[strum(serialize_all = "lowercase")]
enum Keyword {
    Layout,
    Place,
    Remove,
    Lock,
    Undo,
    Reset,
    Confirm,
    Cancel,
    Show,
}

/// A parsed script operation, 1:1 with the engine's public methods
/// (`Show` excepted; that is a driver-side print request).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScriptOp {
    Layout { rows: u32, cols: u32 },
    Place { cell: CellId, token: String },
    Remove { cell: CellId },
    ToggleLock { cell: CellId },
    Undo,
    Reset,
    Confirm,
    Cancel,
    Show,
}

/// Parses a whole script, skipping blank lines and comments.
pub fn parse_script(text: &str) -> BoardResult<Vec<ScriptOp>> {
    let mut ops = Vec::new();
    for (idx, line) in text.lines().enumerate() {
        if let Some(op) = parse_line(line, idx + 1)? {
            ops.push(op);
        }
    }
    Ok(ops)
}

/// Parses one line; `Ok(None)` for blanks and comments.
pub fn parse_line(line: &str, lineno: usize) -> BoardResult<Option<ScriptOp>> {
    let line = match line.find('#') {
        Some(pos) => &line[..pos],
        None => line,
    };
    let words: Vec<&str> = line.split_whitespace().collect();
    let Some((&head, args)) = words.split_first() else {
        return Ok(None);
    };

    let keyword = Keyword::from_str(head)
        .map_err(|_| script_err(lineno, format!("unknown command '{}'", head)))?;

    let op = match keyword {
        Keyword::Layout => {
            let [rows, cols] = expect_args::<2>(lineno, keyword, args)?;
            ScriptOp::Layout {
                rows: parse_dim(lineno, rows)?,
                cols: parse_dim(lineno, cols)?,
            }
        }
        Keyword::Place => {
            let [cell, token] = expect_args::<2>(lineno, keyword, args)?;
            ScriptOp::Place {
                cell: parse_cell(lineno, cell)?,
                token: token.to_string(),
            }
        }
        Keyword::Remove => {
            let [cell] = expect_args::<1>(lineno, keyword, args)?;
            ScriptOp::Remove {
                cell: parse_cell(lineno, cell)?,
            }
        }
        Keyword::Lock => {
            let [cell] = expect_args::<1>(lineno, keyword, args)?;
            ScriptOp::ToggleLock {
                cell: parse_cell(lineno, cell)?,
            }
        }
        Keyword::Undo => {
            expect_args::<0>(lineno, keyword, args)?;
            ScriptOp::Undo
        }
        Keyword::Reset => {
            expect_args::<0>(lineno, keyword, args)?;
            ScriptOp::Reset
        }
        Keyword::Confirm => {
            expect_args::<0>(lineno, keyword, args)?;
            ScriptOp::Confirm
        }
        Keyword::Cancel => {
            expect_args::<0>(lineno, keyword, args)?;
            ScriptOp::Cancel
        }
        Keyword::Show => {
            expect_args::<0>(lineno, keyword, args)?;
            ScriptOp::Show
        }
    };
    Ok(Some(op))
}

/// Applies one parsed operation, validating the inputs the engine treats as
/// caller contract. `Show` is a no-op here.
pub fn apply(engine: &mut BoardEngine, op: &ScriptOp) -> BoardResult<()> {
    match op {
        ScriptOp::Layout { rows, cols } => engine.set_layout(*rows, *cols),
        ScriptOp::Place { cell, token } => {
            check_bounds(engine, *cell)?;
            if engine.catalog().get(token).is_none() {
                return Err(BoardError::Token(token.clone()));
            }
            engine.place(*cell, token);
        }
        ScriptOp::Remove { cell } => {
            check_bounds(engine, *cell)?;
            engine.remove(*cell);
        }
        ScriptOp::ToggleLock { cell } => {
            check_bounds(engine, *cell)?;
            engine.toggle_lock(*cell);
        }
        ScriptOp::Undo => engine.undo(),
        ScriptOp::Reset => engine.reset(),
        ScriptOp::Confirm => engine.confirm_pending_layout(),
        ScriptOp::Cancel => engine.cancel_pending_layout(),
        ScriptOp::Show => {}
    }
    Ok(())
}

fn check_bounds(engine: &BoardEngine, cell: CellId) -> BoardResult<()> {
    if engine.layout().contains(cell) {
        Ok(())
    } else {
        Err(BoardError::OutOfBounds(cell))
    }
}

fn parse_cell(lineno: usize, word: &str) -> BoardResult<CellId> {
    word.parse()
        .map_err(|_| script_err(lineno, format!("invalid cell '{}'", word)))
}

fn parse_dim(lineno: usize, word: &str) -> BoardResult<u32> {
    word.parse()
        .map_err(|_| script_err(lineno, format!("invalid dimension '{}'", word)))
}

fn expect_args<'a, const N: usize>(
    lineno: usize,
    keyword: Keyword,
    args: &[&'a str],
) -> BoardResult<[&'a str; N]> {
    <[&str; N]>::try_from(args).map_err(|_| {
        script_err(
            lineno,
            format!("'{}' takes {} argument(s), got {}", keyword, N, args.len()),
        )
    })
}

fn script_err(line: usize, message: String) -> BoardError {
    BoardError::Script { line, message }
}
