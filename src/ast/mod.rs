/// AST (Abstract Syntax Tree) module
/// Contains the node shapes a parser assembles from the token stream
///
/// Submodules:
/// - ast: The `Expr` enum, its node kinds and traversal helpers
pub mod ast;

#[cfg(test)]
mod tests;
