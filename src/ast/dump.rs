//! Indented debug rendering of expression trees.
//!
//! Every node prints one line prefixed by one tab per nesting level. A binary
//! operation prints its left operand, its operator and its right operand one
//! level deeper than itself:
//!
//! ```text
//! BinaryOperation
//! 	IntegerLiteral: 2
//! 	+
//! 	BinaryOperation
//! 		IntegerLiteral: 3
//! 		*
//! 		IntegerLiteral: 4
//! ```

use std::io::{self, Write};

use super::expressions::Expr;

pub fn write_indent<W: Write>(out: &mut W, depth: usize) -> io::Result<()> {
    for _ in 0..depth {
        out.write_all(b"\t")?;
    }
    Ok(())
}

impl Expr {
    /// Writes the tree rooted at `self` to stdout.
    pub fn dump(&self, indent: usize) -> io::Result<()> {
        let stdout = io::stdout();
        let mut handle = stdout.lock();
        self.write_dump(&mut handle, indent)?;
        handle.flush()
    }

    pub fn write_dump<W: Write>(&self, out: &mut W, indent: usize) -> io::Result<()> {
        write_indent(out, indent)?;

        match self {
            Expr::IntegerLiteral { raw, .. } => writeln!(out, "IntegerLiteral: {}", raw),
            Expr::RationalLiteral { raw, .. } => writeln!(out, "RationalLiteral: {}", raw),
            Expr::StringLiteral { value, .. } => writeln!(out, "StringLiteral: {}", value),
            Expr::VariableReference { name } => writeln!(out, "VariableReference: {}", name),
            Expr::BinaryOperation {
                operator,
                left,
                right,
            } => {
                writeln!(out, "BinaryOperation")?;
                left.write_dump(out, indent + 1)?;

                write_indent(out, indent + 1)?;
                writeln!(out, "{}", operator.operator_symbol().unwrap_or("unknown operator"))?;

                right.write_dump(out, indent + 1)
            }
        }
    }

    /// Renders the dump into a string instead of stdout.
    pub fn dump_to_string(&self) -> String {
        let mut buffer = Vec::new();
        self.write_dump(&mut buffer, 0)
            .expect("writing to a Vec cannot fail");
        String::from_utf8_lossy(&buffer).into_owned()
    }
}
