//! Binary serialization of tree-set expressions.
//!
//! The wire format is big-endian and self-delimiting. Every expression
//! starts with a one-byte tag:
//!
//! | Tag | Variant | Payload |
//! |-----|---------|---------|
//! | 0   | Bot     | — |
//! | 1   | Top     | — |
//! | 2   | Prefix  | 2-byte symbol byte length, UTF-8 bytes, child |
//! | 3   | Product | 4-byte child count, children |
//! | 4   | Sum     | 4-byte child count, children |
//!
//! Top-level arrays use the same 4-byte count prefix.
//!
//! ```
//! use zdd_forest::expr::TreeExpr;
//! use zdd_forest::io::{read_expr, write_expr};
//!
//! let t = TreeExpr::sum([TreeExpr::branch(["a", "b"]), TreeExpr::Top]);
//!
//! let mut buf = Vec::new();
//! write_expr(&mut buf, &t).unwrap();
//! let back = read_expr(&mut buf.as_slice()).unwrap();
//! assert_eq!(back, t);
//! ```

use std::io::{self, Read, Write};
use std::sync::Arc;

use thiserror::Error;

use crate::expr::TreeExpr;
use crate::symbol::Symbol;

const TAG_BOT: u8 = 0;
const TAG_TOP: u8 = 1;
const TAG_PREFIX: u8 = 2;
const TAG_PRODUCT: u8 = 3;
const TAG_SUM: u8 = 4;

/// Errors surfaced while reading or writing expressions.
///
/// Decoding failures leave no trace in any manager: lowering caches only
/// ever see fully constructed expressions.
#[derive(Debug, Error)]
pub enum CodecError {
    #[error("i/o failure: {0}")]
    Io(#[from] io::Error),

    #[error("unknown expression tag {0}")]
    UnknownTag(u8),

    #[error("symbol is not valid utf-8: {0}")]
    Symbol(#[from] std::string::FromUtf8Error),

    #[error("symbol of {0} bytes exceeds the 2-byte length prefix")]
    SymbolTooLong(usize),
}

pub type CodecResult<T> = Result<T, CodecError>;

/// Writes one expression to `w`.
pub fn write_expr<W: Write>(w: &mut W, t: &TreeExpr) -> CodecResult<()> {
    match t {
        TreeExpr::Bot => w.write_all(&[TAG_BOT])?,
        TreeExpr::Top => w.write_all(&[TAG_TOP])?,
        TreeExpr::Prefix(symbol, child) => {
            w.write_all(&[TAG_PREFIX])?;
            write_symbol(w, symbol)?;
            write_expr(w, child)?;
        }
        TreeExpr::Product(children) => {
            w.write_all(&[TAG_PRODUCT])?;
            write_children(w, children)?;
        }
        TreeExpr::Sum(children) => {
            w.write_all(&[TAG_SUM])?;
            write_children(w, children)?;
        }
    }
    Ok(())
}

/// Reads one expression from `r`.
pub fn read_expr<R: Read>(r: &mut R) -> CodecResult<TreeExpr> {
    let tag = read_u8(r)?;
    match tag {
        TAG_BOT => Ok(TreeExpr::Bot),
        TAG_TOP => Ok(TreeExpr::Top),
        TAG_PREFIX => {
            let symbol = read_symbol(r)?;
            let child = read_expr(r)?;
            Ok(TreeExpr::Prefix(symbol, Arc::new(child)))
        }
        TAG_PRODUCT => Ok(TreeExpr::Product(read_children(r)?)),
        TAG_SUM => Ok(TreeExpr::Sum(read_children(r)?)),
        other => Err(CodecError::UnknownTag(other)),
    }
}

/// Writes an array of expressions: 4-byte count, then each element.
pub fn write_forest<W: Write>(w: &mut W, ts: &[TreeExpr]) -> CodecResult<()> {
    w.write_all(&(ts.len() as u32).to_be_bytes())?;
    for t in ts {
        write_expr(w, t)?;
    }
    Ok(())
}

/// Reads an array of expressions written by [`write_forest`].
pub fn read_forest<R: Read>(r: &mut R) -> CodecResult<Vec<TreeExpr>> {
    let len = read_u32(r)?;
    let mut ts = Vec::with_capacity(len.min(1024) as usize);
    for _ in 0..len {
        ts.push(read_expr(r)?);
    }
    Ok(ts)
}

fn write_children<W: Write>(w: &mut W, children: &[Arc<TreeExpr>]) -> CodecResult<()> {
    w.write_all(&(children.len() as u32).to_be_bytes())?;
    for child in children {
        write_expr(w, child)?;
    }
    Ok(())
}

fn read_children<R: Read>(r: &mut R) -> CodecResult<Vec<Arc<TreeExpr>>> {
    let len = read_u32(r)?;
    let mut children = Vec::with_capacity(len.min(1024) as usize);
    for _ in 0..len {
        children.push(Arc::new(read_expr(r)?));
    }
    Ok(children)
}

fn write_symbol<W: Write>(w: &mut W, symbol: &Symbol) -> CodecResult<()> {
    let bytes = symbol.as_bytes();
    if bytes.len() > u16::MAX as usize {
        return Err(CodecError::SymbolTooLong(bytes.len()));
    }
    w.write_all(&(bytes.len() as u16).to_be_bytes())?;
    w.write_all(bytes)?;
    Ok(())
}

fn read_symbol<R: Read>(r: &mut R) -> CodecResult<Symbol> {
    let len = read_u16(r)? as usize;
    let mut bytes = vec![0u8; len];
    r.read_exact(&mut bytes)?;
    let text = String::from_utf8(bytes)?;
    Ok(Symbol::from(text))
}

fn read_u8<R: Read>(r: &mut R) -> CodecResult<u8> {
    let mut buf = [0u8; 1];
    r.read_exact(&mut buf)?;
    Ok(buf[0])
}

fn read_u16<R: Read>(r: &mut R) -> CodecResult<u16> {
    let mut buf = [0u8; 2];
    r.read_exact(&mut buf)?;
    Ok(u16::from_be_bytes(buf))
}

fn read_u32<R: Read>(r: &mut R) -> CodecResult<u32> {
    let mut buf = [0u8; 4];
    r.read_exact(&mut buf)?;
    Ok(u32::from_be_bytes(buf))
}
