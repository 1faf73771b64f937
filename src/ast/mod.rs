/// AST (Abstract Syntax Tree) module
/// Contains all definitions related to the expression tree
///
/// Submodules:
/// - expressions: The expression node sum type and literal construction
/// - dump: Indented debug rendering of expression trees
pub mod dump;
pub mod expressions;

#[cfg(test)]
mod tests;
