/// AST (Abstract Syntax Tree) module
/// Contains all definitions related to the AST structure
///
/// Submodules:
/// - ast: Operator tags shared across node kinds
/// - expressions: The closed family of expression nodes
/// - statements: The closed family of statement nodes, blocks and programs
/// - types: Definitions for type representations in the AST
pub mod ast;
pub mod expressions;
pub mod statements;
pub mod types;
