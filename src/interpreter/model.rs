use std::fmt;

use quote::ToTokens;
use syn::{
    Block, Expr, ExprAssign, ExprBlock, ExprLit, ExprParen, ExprPath, ExprReference, ExprUnary,
    Local, LocalInit, Pat, PatIdent, PatType, Stmt, UnOp,
};

use super::environment::Environment;
use super::error::EvalError;
use super::value::{Place, Value};

/// Final state of a program run: the bindings plus the block's value.
#[derive(Debug)]
pub struct Outcome {
    pub environment: Environment,
    pub result: Value,
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.environment)?;
        if self.result != Value::Unit {
            writeln!(f, "result: {}", self.result)?;
        }
        Ok(())
    }
}

pub trait Interpreter {
    fn eval_block(&self, block: &Block, env: &mut Environment) -> Result<Value, EvalError>;

    /// Parses `code` as a single block and runs it in a fresh environment.
    fn interpret(&self, code: &str) -> Result<Outcome, EvalError> {
        let block: Block = syn::parse_str(code)?;
        let mut environment = Environment::default();
        let result = self.eval_block(&block, &mut environment)?;
        Ok(Outcome {
            environment,
            result,
        })
    }
}

/// Places-and-references semantics: variables hold literals or references
/// to other variables, and `*` follows a reference to the place it names.
pub struct ReferenceModel;

fn unsupported(kind: &'static str, node: &impl ToTokens) -> EvalError {
    EvalError::Unsupported {
        kind,
        code: node.to_token_stream().to_string(),
    }
}

fn binding_name(pat: &Pat) -> Result<Place, EvalError> {
    match pat {
        Pat::Ident(PatIdent {
            ident,
            subpat: None,
            ..
        }) => Ok(ident.clone()),
        Pat::Type(PatType { pat, .. }) => binding_name(pat),
        _ => Err(unsupported("pattern", pat)),
    }
}

impl ReferenceModel {
    fn eval_place(&self, expr: &Expr, env: &Environment) -> Result<Place, EvalError> {
        match expr {
            Expr::Path(ExprPath {
                qself: None, path, ..
            }) => path
                .get_ident()
                .cloned()
                .ok_or_else(|| unsupported("path", expr)),
            Expr::Unary(ExprUnary {
                op: UnOp::Deref(_),
                expr: inner,
                ..
            }) => {
                let place = self.eval_place(inner, env)?;
                match env.lookup(&place)? {
                    Value::Ref(target) => Ok(target.clone()),
                    other => Err(EvalError::NotAReference(other.clone())),
                }
            }
            Expr::Paren(ExprParen { expr: inner, .. }) => self.eval_place(inner, env),
            _ => Err(unsupported("place expression", expr)),
        }
    }

    fn eval_expr(&self, expr: &Expr, env: &mut Environment) -> Result<Value, EvalError> {
        match expr {
            Expr::Lit(ExprLit { lit, .. }) => Ok(Value::Lit(lit.to_token_stream().to_string())),
            Expr::Path(_)
            | Expr::Unary(ExprUnary {
                op: UnOp::Deref(_), ..
            }) => {
                let place = self.eval_place(expr, env)?;
                Ok(env.lookup(&place)?.clone())
            }
            Expr::Reference(ExprReference { expr: inner, .. }) => {
                let place = self.eval_place(inner, env)?;
                Ok(Value::Ref(place))
            }
            Expr::Assign(ExprAssign { left, right, .. }) => {
                // Assigning to an undeclared name binds it
                let place = self.eval_place(left, env)?;
                let value = self.eval_expr(right, env)?;
                env.insert(place, value);
                Ok(Value::Unit)
            }
            Expr::Paren(ExprParen { expr: inner, .. }) => self.eval_expr(inner, env),
            Expr::Block(ExprBlock { block, .. }) => self.eval_block(block, env),
            _ => Err(unsupported("expression", expr)),
        }
    }

    fn eval_local(&self, local: &Local, env: &mut Environment) -> Result<(), EvalError> {
        let place = binding_name(&local.pat)?;
        let value = match &local.init {
            Some(LocalInit {
                diverge: Some(_), ..
            }) => return Err(unsupported("let-else", local)),
            Some(LocalInit { expr, .. }) => self.eval_expr(expr, env)?,
            None => Value::Undefined,
        };
        env.insert(place, value);
        Ok(())
    }
}

impl Interpreter for ReferenceModel {
    /// Runs statements in order. The block's value is its trailing
    /// expression, or `()`.
    fn eval_block(&self, block: &Block, env: &mut Environment) -> Result<Value, EvalError> {
        let mut result = Value::Unit;
        for stmt in &block.stmts {
            result = match stmt {
                Stmt::Local(local) => {
                    self.eval_local(local, env)?;
                    Value::Unit
                }
                Stmt::Expr(expr, None) => self.eval_expr(expr, env)?,
                Stmt::Expr(expr, Some(_)) => {
                    self.eval_expr(expr, env)?;
                    Value::Unit
                }
                other => return Err(unsupported("statement", other)),
            };
        }
        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn run(code: &str) -> Result<String, EvalError> {
        ReferenceModel.interpret(code).map(|outcome| outcome.to_string())
    }

    #[test]
    fn test_default_program() {
        let output = run("{let a = 1;\nlet mut b;\nb = &a;\nlet c = *b;}").unwrap();
        assert_eq!(output, "a ↦ 1\nb ↦ &a\nc ↦ 1\n");
    }

    #[test]
    fn test_trailing_expression_is_reported() {
        let output = run("{let x = 5; x}").unwrap();
        assert_eq!(output, "x ↦ 5\nresult: 5\n");
    }

    #[test]
    fn test_empty_block() {
        assert_eq!(run("{}").unwrap(), "");
    }

    #[test]
    fn test_borrowing_undeclared_place() {
        let output = run("{let b = &a;}").unwrap();
        assert_eq!(output, "b ↦ &a\n");
    }

    #[test]
    fn test_assign_through_reference() {
        let output = run("{let mut a = 1; let b = &mut a; *b = 2;}").unwrap();
        assert_eq!(output, "a ↦ 2\nb ↦ &a\n");
    }

    #[test]
    fn test_double_deref() {
        let output = run("{let a = 7; let b = &a; let c = &b; let d = **c;}").unwrap();
        assert_eq!(output, "a ↦ 7\nb ↦ &a\nc ↦ &b\nd ↦ 7\n");
    }

    #[test]
    fn test_typed_binding_and_parens_and_nested_block() {
        let output = run("{let a: i32 = (3); let b = { a };}").unwrap();
        assert_eq!(output, "a ↦ 3\nb ↦ 3\n");
    }

    #[test]
    fn test_literal_tokens_are_kept() {
        let output = run("{let a = 1u8; let t = true;}").unwrap();
        assert_eq!(output, "a ↦ 1u8\nt ↦ true\n");
    }

    #[test]
    fn test_reading_undefined_place_fails() {
        let err = run("{let b; let c = b;}").unwrap_err();
        assert!(matches!(err, EvalError::UndefinedPlace(_)));
        assert_eq!(err.to_string(), "attempting to read undefined place `b`");
    }

    #[test]
    fn test_unknown_place_fails() {
        let err = run("{let c = nope;}").unwrap_err();
        assert_eq!(err.to_string(), "cannot find place `nope`");
    }

    #[test]
    fn test_assigning_undeclared_place_binds_it() {
        assert_eq!(run("{x = 1;}").unwrap(), "x ↦ 1\n");
    }

    #[test]
    fn test_deref_of_non_reference_fails() {
        let err = run("{let a = 1; let b = *a;}").unwrap_err();
        assert_eq!(err.to_string(), "cannot dereference `1`: not a reference");
    }

    #[test]
    fn test_parse_error() {
        let err = run("{let a = ;}").unwrap_err();
        assert!(matches!(err, EvalError::Parse(_)));
        assert!(err.to_string().starts_with("parse error: "));
    }

    #[test]
    fn test_unsupported_expression_is_an_error_not_a_panic() {
        let err = run("{let a = 1 + 2;}").unwrap_err();
        assert!(matches!(
            err,
            EvalError::Unsupported {
                kind: "expression",
                ..
            }
        ));
    }

    #[test]
    fn test_unsupported_statement_and_pattern() {
        assert!(matches!(
            run("{fn f() {}}").unwrap_err(),
            EvalError::Unsupported {
                kind: "statement",
                ..
            }
        ));
        assert!(matches!(
            run("{let (a, b) = (1, 2);}").unwrap_err(),
            EvalError::Unsupported { kind: "pattern", .. }
        ));
    }
}
