/// AST (Abstract Syntax Tree) module
/// Contains all definitions related to the untyped AST produced by the parser
///
/// Submodules:
/// - ast: The `Expr` and `Stmt` node enums and the pretty printer
/// - expressions: Expression payloads and operator enums
/// - statements: Statement payloads and the program root
/// - types: Static type tags used in annotations and by the type checker
pub mod ast;
pub mod expressions;
pub mod statements;
pub mod types;
