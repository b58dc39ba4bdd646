use crate::context::Context;
use crate::expression::{Expression, Or, Terminal};

/// =========================
/// Evaluation entry points
/// =========================

/// Evaluate `expr` against `ctx`.
pub fn evaluate(expr: &dyn Expression, ctx: &Context) -> bool {
    let span = tracing::debug_span!("evaluate", expression = %expr);
    let _guard = span.enter();
    let result = expr.interpret(ctx);
    tracing::debug!(result, "evaluated");
    result
}

/// Owns a context and evaluates expressions against it.
#[derive(Clone, Debug, Default)]
pub struct Evaluator {
    ctx: Context,
}

impl Evaluator {
    pub fn new(ctx: Context) -> Self {
        Self { ctx }
    }

    pub fn context(&self) -> &Context {
        &self.ctx
    }

    pub fn context_mut(&mut self) -> &mut Context {
        &mut self.ctx
    }

    pub fn eval(&self, expr: &dyn Expression) -> bool {
        evaluate(expr, &self.ctx)
    }
}

/// =========================
/// Sample scenario
/// =========================

/// A=true, B=false, C=true.
pub fn sample_context() -> Context {
    [("A", true), ("B", false), ("C", true)].into_iter().collect()
}

/// `A || (B || C)`
pub fn sample_expression() -> Or {
    Or::new(
        Terminal::new("A"),
        Or::new(Terminal::new("B"), Terminal::new("C")),
    )
}

pub fn format_result(result: bool) -> String {
    format!("Expression result: {result}")
}
