//! Expression compiler for the bytecode evaluator.
//!
//! This module parses a token stream from [`crate::parser`] and emits postfix
//! bytecode ([`Instruction`]s) plus a constant pool in a single
//! recursive-descent pass. No syntax tree is built.
//!
//! # Grammar
//!
//! Lowest to highest binding:
//!
//! ```text
//! expression := ['+'|'-'] term (('+'|'-') term)*
//! term       := factor (('*'|'/'|'%') factor)*
//! factor     := primary ('^' primary)*
//! primary    := 'x' | constant | function '(' arguments ')'
//!             | number | '(' expression ')'
//! arguments  := expression (',' expression)*
//! ```
//!
//! The number of arguments must match the function's arity exactly.
//!
//! `^` groups to the left: `2^3^2` is `(2^3)^2 = 64`. A leading sign applies
//! to the first term only, so `-x^2 + 1` is `(-(x^2)) + 1`. Operators are
//! never accepted in operand position (`2*-3` is rejected; write `2*(-3)`).
//!
//! # Stack Depth Tracking
//!
//! The compiler tracks stack depth while emitting so that a program whose
//! evaluation stack would exceed the configured limit fails early. The final
//! instruction stream is then re-checked by [`super::stack::max_depth`], which
//! is the authoritative size used by the evaluator.

use super::instruction::{BinaryOp, Instruction, UnaryOp};
use super::stack;
use crate::builder::CompileOptions;
use crate::error::{ParseError, Span};
use crate::functions::{lookup_constant, lookup_function};
use crate::parser::{Token, TokenKind, TokenStream};
use crate::C64;

/// Output of a successful compilation
#[derive(Debug)]
pub(crate) struct CompiledParts {
    pub instructions: Vec<Instruction>,
    pub constants: Vec<C64>,
    pub stack_size: usize,
}

/// Internal compiler state for transforming tokens to bytecode.
pub(crate) struct Compiler<'a> {
    tokens: &'a [Token],
    /// Index of the next unconsumed token
    pos: usize,
    /// Character offset just past the input
    end: usize,
    options: &'a CompileOptions,
    /// Emitted bytecode instructions
    instructions: Vec<Instruction>,
    /// Constant pool for numeric literals, one entry per occurrence
    constants: Vec<C64>,
    /// Current stack depth during compilation
    current_stack: usize,
    /// Maximum stack depth seen during compilation
    max_stack: usize,
    /// Current parenthesis/function-call nesting
    nesting: usize,
}

impl<'a> Compiler<'a> {
    pub(crate) fn new(stream: &'a TokenStream, options: &'a CompileOptions) -> Self {
        Self {
            tokens: &stream.tokens,
            pos: 0,
            end: stream.end,
            options,
            instructions: Vec::with_capacity(stream.tokens.len()),
            constants: Vec::new(),
            current_stack: 0,
            max_stack: 0,
            nesting: 0,
        }
    }

    /// Compile the whole token stream.
    ///
    /// # Errors
    ///
    /// Returns a [`ParseError`] for any syntax error, unknown identifier, or
    /// exceeded limit.
    pub(crate) fn compile(mut self) -> Result<CompiledParts, ParseError> {
        self.expression()?;

        if let Some(token) = self.peek() {
            let last = self.tokens.last().map_or(token.span, |t| t.span);
            return Err(ParseError::TrailingInput {
                span: Span::new(token.span.start, last.end),
            });
        }

        let stack_size = self.verified_stack_size();
        self.instructions.shrink_to_fit();
        self.constants.shrink_to_fit();

        Ok(CompiledParts {
            instructions: self.instructions,
            constants: self.constants,
            stack_size,
        })
    }

    /// Run the static stack pass over the emitted program.
    #[allow(
        clippy::panic,
        reason = "A malformed program here is a compiler defect, not a user error"
    )]
    fn verified_stack_size(&self) -> usize {
        match stack::max_depth(&self.instructions) {
            Ok(depth) => {
                debug_assert_eq!(depth, self.max_stack, "stack tracking diverged");
                depth
            }
            Err(fault) => panic!("compiler emitted a malformed program: {fault}"),
        }
    }

    // ===== Emission =====

    /// Add a literal to the pool and return its index.
    ///
    /// # Errors
    ///
    /// Returns `ParseError::TooManyConstants` if the index does not fit the
    /// instruction operand.
    #[inline]
    fn add_const(&mut self, value: C64) -> Result<u32, ParseError> {
        let idx = u32::try_from(self.constants.len()).map_err(|_| ParseError::TooManyConstants)?;
        self.constants.push(value);
        Ok(idx)
    }

    /// Track a push operation, validating stack depth.
    ///
    /// # Errors
    ///
    /// Returns `ParseError::StackOverflow` if the stack would exceed the
    /// configured limit.
    #[inline]
    fn push(&mut self) -> Result<(), ParseError> {
        self.current_stack += 1;
        if self.current_stack > self.options.max_stack {
            return Err(ParseError::StackOverflow {
                depth: self.current_stack,
                limit: self.options.max_stack,
            });
        }
        self.max_stack = self.max_stack.max(self.current_stack);
        Ok(())
    }

    /// Track a pop operation.
    #[inline]
    const fn pop(&mut self) {
        self.current_stack = self.current_stack.saturating_sub(1);
    }

    /// Emit an instruction, updating the tracked stack depth.
    #[inline]
    fn emit(&mut self, instr: Instruction) -> Result<(), ParseError> {
        for _ in 0..instr.arity() {
            self.pop();
        }
        self.push()?;
        self.instructions.push(instr);
        Ok(())
    }

    fn emit_const(&mut self, value: C64) -> Result<(), ParseError> {
        let idx = self.add_const(value)?;
        self.emit(Instruction::LoadConst(idx))
    }

    // ===== Token cursor =====

    #[inline]
    fn peek(&self) -> Option<&'a Token> {
        self.tokens.get(self.pos)
    }

    #[inline]
    fn advance(&mut self) -> Option<&'a Token> {
        let token = self.tokens.get(self.pos);
        if token.is_some() {
            self.pos += 1;
        }
        token
    }

    /// Consume the next token if it is one of the given binary operators.
    fn next_operator(&mut self, accepted: &[(TokenKind, BinaryOp)]) -> Option<BinaryOp> {
        let token = self.peek()?;
        let op = accepted
            .iter()
            .find(|(kind, _)| *kind == token.kind)
            .map(|(_, op)| *op)?;
        self.pos += 1;
        Some(op)
    }

    fn expect(&mut self, kind: &TokenKind, expected: &str) -> Result<(), ParseError> {
        match self.advance() {
            Some(token) if token.kind == *kind => Ok(()),
            Some(token) => Err(ParseError::UnexpectedToken {
                expected: expected.to_string(),
                got: token.kind.to_string(),
                span: token.span,
            }),
            None => Err(ParseError::UnexpectedEndOfInput { pos: self.end }),
        }
    }

    fn expect_close_paren(&mut self) -> Result<(), ParseError> {
        self.expect(&TokenKind::RightParen, "')'")
    }

    /// Enter a parenthesized group or function call.
    fn enter(&mut self, span: Span) -> Result<(), ParseError> {
        self.nesting += 1;
        if self.nesting > self.options.max_depth {
            return Err(ParseError::MaxDepthExceeded {
                limit: self.options.max_depth,
                span,
            });
        }
        Ok(())
    }

    const fn leave(&mut self) {
        self.nesting -= 1;
    }

    // ===== Grammar =====

    fn expression(&mut self) -> Result<(), ParseError> {
        const ADDITIVE: [(TokenKind, BinaryOp); 2] = [
            (TokenKind::Plus, BinaryOp::Add),
            (TokenKind::Minus, BinaryOp::Sub),
        ];

        let negate = match self.peek().map(|t| &t.kind) {
            Some(TokenKind::Plus) => {
                self.pos += 1;
                false
            }
            Some(TokenKind::Minus) => {
                self.pos += 1;
                true
            }
            _ => false,
        };

        self.term()?;
        if negate {
            self.emit(Instruction::Unary(UnaryOp::Neg))?;
        }

        while let Some(op) = self.next_operator(&ADDITIVE) {
            self.term()?;
            self.emit(Instruction::Binary(op))?;
        }
        Ok(())
    }

    fn term(&mut self) -> Result<(), ParseError> {
        const MULTIPLICATIVE: [(TokenKind, BinaryOp); 3] = [
            (TokenKind::Star, BinaryOp::Mul),
            (TokenKind::Slash, BinaryOp::Div),
            (TokenKind::Percent, BinaryOp::Rem),
        ];

        self.factor()?;
        while let Some(op) = self.next_operator(&MULTIPLICATIVE) {
            self.factor()?;
            self.emit(Instruction::Binary(op))?;
        }
        Ok(())
    }

    fn factor(&mut self) -> Result<(), ParseError> {
        const POWER: [(TokenKind, BinaryOp); 1] = [(TokenKind::Caret, BinaryOp::Pow)];

        self.primary()?;
        while let Some(op) = self.next_operator(&POWER) {
            self.primary()?;
            self.emit(Instruction::Binary(op))?;
        }
        Ok(())
    }

    fn primary(&mut self) -> Result<(), ParseError> {
        let Some(token) = self.advance() else {
            return Err(ParseError::UnexpectedEndOfInput { pos: self.end });
        };

        match &token.kind {
            TokenKind::Number(value) => self.emit_const(C64::real(*value)),
            TokenKind::Identifier(name) => self.identifier(name, token.span),
            TokenKind::LeftParen => {
                self.enter(token.span)?;
                self.expression()?;
                self.expect_close_paren()?;
                self.leave();
                Ok(())
            }
            TokenKind::RightParen => Err(ParseError::UnexpectedToken {
                expected: "a number, 'x', a function or '('".to_string(),
                got: ")".to_string(),
                span: token.span,
            }),
            other => match other.operator_char() {
                Some(op) => Err(ParseError::MisplacedOperator {
                    op,
                    span: token.span,
                }),
                None => Err(ParseError::UnexpectedToken {
                    expected: "an operand".to_string(),
                    got: other.to_string(),
                    span: token.span,
                }),
            },
        }
    }

    /// `x`, a function call, or a named constant, in that order of precedence
    fn identifier(&mut self, name: &str, span: Span) -> Result<(), ParseError> {
        if name.eq_ignore_ascii_case("x") {
            return self.emit(Instruction::LoadX);
        }

        if let Some(def) = lookup_function(name) {
            match self.peek() {
                Some(Token {
                    kind: TokenKind::LeftParen,
                    span: paren,
                }) => {
                    self.pos += 1;
                    self.enter(*paren)?;
                }
                _ => {
                    return Err(ParseError::ExpectedOpenParen {
                        function: name.to_string(),
                        span,
                    });
                }
            }
            for i in 0..def.arity() {
                if i > 0 {
                    self.expect(&TokenKind::Comma, "','")?;
                }
                self.expression()?;
            }
            self.expect_close_paren()?;
            self.leave();
            return self.emit(def.op);
        }

        if self.options.named_constants
            && let Some(constant) = lookup_constant(name)
        {
            return self.emit_const(C64::real(constant.value));
        }

        Err(ParseError::UnknownIdentifier {
            name: name.to_string(),
            span,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser;

    fn compile_with(input: &str, options: &CompileOptions) -> Result<CompiledParts, ParseError> {
        let stream = parser::tokenize(input)?;
        Compiler::new(&stream, options).compile()
    }

    fn compile(input: &str) -> Result<CompiledParts, ParseError> {
        compile_with(input, &CompileOptions::default())
    }

    fn code(input: &str) -> Vec<Instruction> {
        compile(input).unwrap().instructions
    }

    use Instruction::{Binary, LoadConst, LoadX, Unary};

    #[test]
    fn test_compile_simple() {
        let parts = compile("x + 1").unwrap();
        assert_eq!(
            parts.instructions,
            vec![LoadX, LoadConst(0), Binary(BinaryOp::Add)]
        );
        assert_eq!(parts.constants, vec![C64::real(1.0)]);
        assert_eq!(parts.stack_size, 2);
    }

    #[test]
    fn test_precedence() {
        assert_eq!(
            code("1 + 2 * x"),
            vec![
                LoadConst(0),
                LoadConst(1),
                LoadX,
                Binary(BinaryOp::Mul),
                Binary(BinaryOp::Add)
            ]
        );
        assert_eq!(
            code("x * 2 ^ 3"),
            vec![
                LoadX,
                LoadConst(0),
                LoadConst(1),
                Binary(BinaryOp::Pow),
                Binary(BinaryOp::Mul)
            ]
        );
    }

    #[test]
    fn test_power_groups_left() {
        assert_eq!(
            code("2^3^2"),
            vec![
                LoadConst(0),
                LoadConst(1),
                Binary(BinaryOp::Pow),
                LoadConst(2),
                Binary(BinaryOp::Pow)
            ]
        );
    }

    #[test]
    fn test_leading_minus_applies_to_first_term() {
        assert_eq!(
            code("-x^2 + 1"),
            vec![
                LoadX,
                LoadConst(0),
                Binary(BinaryOp::Pow),
                Unary(UnaryOp::Neg),
                LoadConst(1),
                Binary(BinaryOp::Add)
            ]
        );
        assert_eq!(code("+x"), vec![LoadX]);
    }

    #[test]
    fn test_function_call_and_variable_case() {
        assert_eq!(code("SIN(X)"), vec![LoadX, Unary(UnaryOp::Sin)]);
        assert_eq!(code("asin(x)"), vec![LoadX, Unary(UnaryOp::Asin)]);
    }

    #[test]
    fn test_two_argument_calls() {
        assert_eq!(
            code("max(x, 0)"),
            vec![LoadX, LoadConst(0), Binary(BinaryOp::Max)]
        );
        assert_eq!(
            code("MIN(sin(x), -x)"),
            vec![
                LoadX,
                Unary(UnaryOp::Sin),
                LoadX,
                Unary(UnaryOp::Neg),
                Binary(BinaryOp::Min)
            ]
        );
        assert_eq!(code("not(x)"), vec![LoadX, Unary(UnaryOp::Not)]);
        assert_eq!(compile("max(x, max(x, x))").unwrap().stack_size, 3);
    }

    #[test]
    fn test_argument_count_is_checked() {
        assert_eq!(
            compile("max(x)").unwrap_err(),
            ParseError::UnexpectedToken {
                expected: "','".to_string(),
                got: ")".to_string(),
                span: Span::at(5)
            }
        );
        assert_eq!(
            compile("sin(x, x)").unwrap_err(),
            ParseError::UnexpectedToken {
                expected: "')'".to_string(),
                got: ",".to_string(),
                span: Span::at(5)
            }
        );
        assert_eq!(
            compile("max(x, 1, 2)").unwrap_err(),
            ParseError::UnexpectedToken {
                expected: "')'".to_string(),
                got: ",".to_string(),
                span: Span::at(8)
            }
        );
        assert!(matches!(
            compile("(x, 1)").unwrap_err(),
            ParseError::UnexpectedToken { .. }
        ));
        assert!(matches!(
            compile("max(,x)").unwrap_err(),
            ParseError::UnexpectedToken { .. }
        ));
    }

    #[test]
    fn test_literal_pool_is_not_deduplicated() {
        let parts = compile("2 * x + 2").unwrap();
        assert_eq!(parts.constants, vec![C64::real(2.0), C64::real(2.0)]);
    }

    #[test]
    fn test_named_constants() {
        let parts = compile("pi * E").unwrap();
        assert_eq!(
            parts.constants,
            vec![
                C64::real(std::f64::consts::PI),
                C64::real(std::f64::consts::E)
            ]
        );

        let options = CompileOptions::new().named_constants(false);
        assert_eq!(
            compile_with("pi", &options).unwrap_err(),
            ParseError::UnknownIdentifier {
                name: "pi".to_string(),
                span: Span::new(0, 2)
            }
        );
    }

    #[test]
    fn test_stack_size_matches_static_pass() {
        assert_eq!(compile("sin(x)+cos(x)*x").unwrap().stack_size, 3);
        assert_eq!(compile("x").unwrap().stack_size, 1);
        assert_eq!(compile("1+(2+(3+x))").unwrap().stack_size, 4);
    }

    #[test]
    fn test_syntax_errors() {
        assert_eq!(
            compile("2*-3").unwrap_err(),
            ParseError::MisplacedOperator {
                op: '-',
                span: Span::at(2)
            }
        );
        assert_eq!(
            compile("x +").unwrap_err(),
            ParseError::UnexpectedEndOfInput { pos: 3 }
        );
        assert!(matches!(
            compile("()").unwrap_err(),
            ParseError::UnexpectedToken { .. }
        ));
        assert!(matches!(
            compile("(1 2)").unwrap_err(),
            ParseError::UnexpectedToken { .. }
        ));
        assert_eq!(
            compile("sin x").unwrap_err(),
            ParseError::ExpectedOpenParen {
                function: "sin".to_string(),
                span: Span::new(0, 3)
            }
        );
        assert_eq!(
            compile("y + 1").unwrap_err(),
            ParseError::UnknownIdentifier {
                name: "y".to_string(),
                span: Span::at(0)
            }
        );
    }

    #[test]
    fn test_trailing_input() {
        assert_eq!(
            compile("x 2 3").unwrap_err(),
            ParseError::TrailingInput {
                span: Span::new(2, 5)
            }
        );
    }

    #[test]
    fn test_nesting_limit() {
        let options = CompileOptions::new().max_depth(2);
        assert!(compile_with("((x))", &options).is_ok());
        assert!(matches!(
            compile_with("(((x)))", &options).unwrap_err(),
            ParseError::MaxDepthExceeded { limit: 2, .. }
        ));
        assert!(matches!(
            compile_with("sin(cos(tan(x)))", &options).unwrap_err(),
            ParseError::MaxDepthExceeded { limit: 2, .. }
        ));
    }

    #[test]
    fn test_stack_limit() {
        let options = CompileOptions::new().max_stack(2);
        assert!(compile_with("x + x", &options).is_ok());
        assert_eq!(
            compile_with("x + x * x", &options).unwrap_err(),
            ParseError::StackOverflow { depth: 3, limit: 2 }
        );
    }
}
