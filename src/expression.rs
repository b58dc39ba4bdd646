// src/expression.rs
use crate::context::Context;
use std::fmt;

/// A node that yields a boolean when evaluated against a [`Context`].
///
/// Nodes are immutable once built and never mutate the context, so one tree
/// can be evaluated repeatedly against different contexts.
pub trait Expression: fmt::Debug + fmt::Display + Send + Sync {
    fn interpret(&self, ctx: &Context) -> bool;
}

impl<E: Expression + ?Sized> Expression for Box<E> {
    fn interpret(&self, ctx: &Context) -> bool {
        (**self).interpret(ctx)
    }
}

/// Leaf node: looks up a single named variable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Terminal {
    name: String,
}

impl Terminal {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl Expression for Terminal {
    fn interpret(&self, ctx: &Context) -> bool {
        ctx.get_variable(&self.name)
    }
}

impl fmt::Display for Terminal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

/// Logical or of two owned children.
///
/// The left child is always evaluated first; the right one only when the left
/// yields `false`.
#[derive(Debug)]
pub struct Or {
    left: Box<dyn Expression>,
    right: Box<dyn Expression>,
}

impl Or {
    pub fn new(left: impl Expression + 'static, right: impl Expression + 'static) -> Self {
        Self {
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    /// Build from children that are already boxed, without boxing them again.
    pub fn from_boxed(left: Box<dyn Expression>, right: Box<dyn Expression>) -> Self {
        Self { left, right }
    }
}

impl Expression for Or {
    fn interpret(&self, ctx: &Context) -> bool {
        self.left.interpret(ctx) || self.right.interpret(ctx)
    }
}

impl fmt::Display for Or {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({} || {})", self.left, self.right)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    #[derive(Debug)]
    struct Counting {
        value: bool,
        calls: Arc<AtomicUsize>,
    }

    impl Expression for Counting {
        fn interpret(&self, _ctx: &Context) -> bool {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.value
        }
    }

    impl fmt::Display for Counting {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "counting({})", self.value)
        }
    }

    fn counting(value: bool) -> (Counting, Arc<AtomicUsize>) {
        let calls = Arc::new(AtomicUsize::new(0));
        (Counting { value, calls: calls.clone() }, calls)
    }

    #[test]
    fn terminal_delegates_to_context() {
        let mut ctx = Context::new();
        ctx.set_variable("A", true);
        assert!(Terminal::new("A").interpret(&ctx));
        assert!(!Terminal::new("B").interpret(&ctx));
        assert_eq!(Terminal::new("A").name(), "A");
    }

    #[test]
    fn or_truth_table() {
        for (a, b) in [(false, false), (false, true), (true, false), (true, true)] {
            let ctx: Context = [("a", a), ("b", b)].into_iter().collect();
            let expr = Or::new(Terminal::new("a"), Terminal::new("b"));
            assert_eq!(expr.interpret(&ctx), a || b, "a={a} b={b}");
        }
    }

    #[test]
    fn or_skips_right_when_left_is_true() {
        let (left, left_calls) = counting(true);
        let (right, right_calls) = counting(false);
        let expr = Or::new(left, right);

        assert!(expr.interpret(&Context::new()));
        assert_eq!(left_calls.load(Ordering::SeqCst), 1);
        assert_eq!(right_calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn or_evaluates_right_when_left_is_false() {
        let (left, left_calls) = counting(false);
        let (right, right_calls) = counting(true);
        let expr = Or::new(left, right);

        assert!(expr.interpret(&Context::new()));
        assert_eq!(left_calls.load(Ordering::SeqCst), 1);
        assert_eq!(right_calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn tree_is_reusable_across_contexts() {
        let expr = Or::new(Terminal::new("A"), Terminal::new("B"));
        let on: Context = [("B", true)].into_iter().collect();
        let off = Context::new();
        assert!(expr.interpret(&on));
        assert!(!expr.interpret(&off));
        assert!(expr.interpret(&on));
    }

    #[test]
    fn from_boxed_keeps_short_circuit() {
        let (left, left_calls) = counting(true);
        let (right, right_calls) = counting(false);
        let expr = Or::from_boxed(Box::new(left), Box::new(right));

        assert!(expr.interpret(&Context::new()));
        assert_eq!(left_calls.load(Ordering::SeqCst), 1);
        assert_eq!(right_calls.load(Ordering::SeqCst), 0);
        assert_eq!(expr.to_string(), "(counting(true) || counting(false))");
    }

    #[test]
    fn display_parenthesises_composites() {
        let expr = Or::new(
            Terminal::new("A"),
            Or::new(Terminal::new("B"), Terminal::new("C")),
        );
        assert_eq!(expr.to_string(), "(A || (B || C))");
    }
}
