//! Textual rendering of expressions
//!
//! Operators render with single spaces and no parentheses, so
//! `(1 + 2) * 3` and `1 + 2 * 3` print the same. Existing traces depend
//! on this exact format.
//!
//! Rendering walks the tree with an explicit worklist, so arbitrarily deep
//! trees print without recursion.

use std::fmt;

use super::*;

/// A pending piece of output.
#[derive(Clone, Copy)]
enum Piece<'a> {
    Node(&'a Expr),
    Symbol(&'static str),
}

/// Write `pieces` in order, expanding composites in place.
fn render<'a>(f: &mut fmt::Formatter<'_>, pieces: &[Piece<'a>]) -> fmt::Result {
    // Stack top is the next piece to write
    let mut pending: Vec<Piece<'a>> = pieces.iter().rev().copied().collect();

    while let Some(piece) = pending.pop() {
        match piece {
            Piece::Symbol(s) => f.write_str(s)?,
            Piece::Node(Expr::Number(n)) => write!(f, "{}", n.value)?,
            Piece::Node(Expr::Boolean(b)) => write!(f, "{}", b.value)?,
            Piece::Node(Expr::Add(a)) => {
                pending.push(Piece::Node(&a.right));
                pending.push(Piece::Symbol(" + "));
                pending.push(Piece::Node(&a.left));
            }
            Piece::Node(Expr::Multiply(m)) => {
                pending.push(Piece::Node(&m.right));
                pending.push(Piece::Symbol(" * "));
                pending.push(Piece::Node(&m.left));
            }
        }
    }
    Ok(())
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

impl fmt::Display for Boolean {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

impl fmt::Display for Add {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        render(
            f,
            &[
                Piece::Node(&self.left),
                Piece::Symbol(" + "),
                Piece::Node(&self.right),
            ],
        )
    }
}

impl fmt::Display for Multiply {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        render(
            f,
            &[
                Piece::Node(&self.left),
                Piece::Symbol(" * "),
                Piece::Node(&self.right),
            ],
        )
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        render(f, &[Piece::Node(self)])
    }
}
