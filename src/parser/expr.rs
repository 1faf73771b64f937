use log::trace;

use crate::{
    ast::expressions::Expr,
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::TokenKind,
};

use super::{lookups::BindingPower, parser::Parser};

/// Parses one complete expression starting at the current token.
pub fn parse_expr(parser: &mut Parser) -> Result<Expr, Error> {
    let left = parse_primary_expr(parser)?;
    parse_binary_expr(parser, left, BindingPower::Default)
}

pub fn parse_primary_expr(parser: &mut Parser) -> Result<Expr, Error> {
    match parser.current_token_kind() {
        TokenKind::Integer => {
            let expr = Expr::integer_literal(parser.current_token())?;
            parser.advance();
            Ok(expr)
        }
        TokenKind::Rational => {
            let expr = Expr::rational_literal(parser.current_token())?;
            parser.advance();
            Ok(expr)
        }
        TokenKind::String => Ok(Expr::string_literal(parser.advance())),
        TokenKind::OpenParen => parse_grouping_expr(parser),
        _ => Err(Error::new(
            ErrorImpl::UnexpectedToken {
                token: parser.current_token().value.clone(),
            },
            parser.get_position(),
        )),
    }
}

pub fn parse_grouping_expr(parser: &mut Parser) -> Result<Expr, Error> {
    let open = parser.advance().span.start.clone();
    parser.enter_group(open)?;
    let expr = parse_expr(parser);
    parser.leave_group();
    let expr = expr?;

    let token = parser.current_token();
    let error = Error::new(
        ErrorImpl::MissingClosingParen {
            token: token.value.clone(),
        },
        token.span.start.clone(),
    );
    parser.expect_error(TokenKind::CloseParen, Some(error))?;

    trace!("grouped {}", expr);
    Ok(expr)
}

/// Precedence climbing over binary operators.
///
/// Folds operators whose binding power is at least `min_bp` into `left`. The
/// right operand absorbs following operators only while they bind strictly
/// tighter than the operator just consumed, so equal-precedence chains group
/// to the left: `8 - 3 - 2` is `(8 - 3) - 2`.
pub fn parse_binary_expr(
    parser: &mut Parser,
    mut left: Expr,
    min_bp: BindingPower,
) -> Result<Expr, Error> {
    loop {
        let bp = BindingPower::of(parser.current_token_kind());
        if !bp.is_operator() || bp < min_bp {
            break;
        }

        let operator = parser.advance().kind;
        let mut right = parse_primary_expr(parser)?;

        loop {
            let next_bp = BindingPower::of(parser.current_token_kind());
            if !next_bp.is_operator() || next_bp <= bp {
                break;
            }
            right = parse_binary_expr(parser, right, next_bp)?;
        }

        left = Expr::binary(operator, left, right);
        trace!("folded {}", left);
    }

    Ok(left)
}
