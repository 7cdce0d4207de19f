//! The invocation boundary: raw-argument entry points.
//!
//! Each function mirrors one externally registered capability. Arguments
//! arrive as raw byte slices; arity and encoding are validated here, before
//! any parsing happens.

use mdsq_tree::Rows;

use crate::error::InvokeError;

/// Version query. Takes no arguments, returns `v{version}`.
pub fn md_version(args: &[&[u8]]) -> Result<String, InvokeError> {
    check_arity("md_version", 0, args)?;
    Ok(crate::version())
}

/// Debug query. Takes no arguments, returns two lines of build information.
pub fn md_debug(args: &[&[u8]]) -> Result<String, InvokeError> {
    check_arity("md_debug", 0, args)?;
    Ok(crate::debug_info())
}

/// Markdown-to-HTML conversion. Takes one text argument.
pub fn md_to_html(args: &[&[u8]]) -> Result<String, InvokeError> {
    check_arity("md_to_html", 1, args)?;
    let source = text_arg(args, 0)?;
    Ok(crate::to_html(source))
}

/// Markdown-to-AST table interface. Takes one text argument and yields one
/// row per tree node, in id order.
pub fn md_ast(args: &[&[u8]]) -> Result<Rows, InvokeError> {
    check_arity("md_ast", 1, args)?;
    let source = text_arg(args, 0)?;
    Ok(crate::ast(source).into_rows())
}

fn check_arity(
    function: &'static str,
    expected: usize,
    args: &[&[u8]],
) -> Result<(), InvokeError> {
    if args.len() != expected {
        return Err(InvokeError::arity(function, expected, args.len()));
    }
    Ok(())
}

fn text_arg<'x>(args: &[&'x [u8]], index: usize) -> Result<&'x str, InvokeError> {
    std::str::from_utf8(args[index]).map_err(|source| InvokeError::encoding(index, source))
}
