//! Readable signatures for callables, from the textual type of their call operator.

use super::{apply_east_const_typelist, clean_typestring, split_types};
use crate::config::RuleSet;
use crate::errors::{Error, Result};

/// Turns the member-function type of a call operator into `lambda: (PARAMS) -> RET`.
///
/// Accepted shapes look like `std::__1::__mem_fn<RET (OWNER::*)(PARAMS) const>` or
/// `class std::_Mem_fn<RET (__thiscall <lambda_x>::*)(PARAMS)const >`. With
/// `clean_params` every parameter and the return type go through
/// [`clean_typestring`]; otherwise they are only split and re-joined.
///
/// ```
/// use sigtidy::config::RuleSet;
/// use sigtidy::pipeline::lambda_signature;
///
/// let raw = "std::__1::__mem_fn<double (ns::$_1::*)(int, int) const>";
/// let lambda = lambda_signature(raw, &RuleSet::default(), true).unwrap();
/// assert_eq!(lambda, "lambda: (int, int) -> double");
/// ```
pub fn lambda_signature(member_fn_signature: &str, rules: &RuleSet, clean_params: bool) -> Result<String> {
    let _span = tracing::debug_span!("lambda_signature").entered();

    let callable = remove_mem_fn_surround(member_fn_signature)?;

    let (return_and_owner, params_raw) = extract_parenthesis_content_at_end(callable)
        .map_err(|reason| Error::malformed_lambda(member_fn_signature, reason))?;
    let params = clean_params_list(params_raw, rules, clean_params)?;

    let (return_raw, _owner) = extract_parenthesis_content_at_end(return_and_owner)
        .map_err(|reason| Error::malformed_lambda(member_fn_signature, reason))?;
    let mut return_type = if clean_params {
        clean_typestring(return_raw.trim(), rules)?
    } else {
        return_raw.trim().to_string()
    };
    if rules.force_east_const {
        return_type = apply_east_const_typelist(&return_type);
    }

    tracing::trace!(%params, %return_type, "extracted lambda signature");
    Ok(format!("lambda: ({params}) -> {return_type}"))
}

fn clean_params_list(params_raw: &str, rules: &RuleSet, clean_params: bool) -> Result<String> {
    let params = split_types(params_raw)
        .iter()
        .map(|param| {
            if clean_params {
                clean_typestring(param, rules)
            } else {
                Ok(param.clone())
            }
        })
        .collect::<Result<Vec<_>>>()?;

    let mut joined = params.join(", ");
    if joined == "void" {
        joined.clear();
    }
    if rules.force_east_const {
        joined = apply_east_const_typelist(&joined);
    }
    Ok(joined)
}

/// Keeps what follows the first `<`, up to and including the last `)`:
/// `__mem_fn<R (O::*)(P) const>` becomes `R (O::*)(P)`.
fn remove_mem_fn_surround(member_fn_signature: &str) -> Result<&str> {
    let start = member_fn_signature
        .find('<')
        .ok_or_else(|| Error::malformed_lambda(member_fn_signature, "no opening '<'"))?;
    let inner = &member_fn_signature[start + 1..];
    let end = inner
        .rfind(')')
        .ok_or_else(|| Error::malformed_lambda(member_fn_signature, "no closing ')'"))?;
    Ok(&inner[..=end])
}

/// Splits `"ABC(DEF)(GHI)KLM"` into `("ABC(DEF)", "GHI")`.
///
/// Anything after the last `)` is ignored. The text before the group may be empty.
fn extract_parenthesis_content_at_end(s: &str) -> std::result::Result<(&str, &str), &'static str> {
    let close = s.rfind(')').ok_or("missing closing ')'")?;

    let mut depth = 0usize;
    for (idx, c) in s[..=close].char_indices().rev() {
        match c {
            ')' => depth += 1,
            '(' => {
                depth -= 1;
                if depth == 0 {
                    return Ok((&s[..idx], &s[idx + 1..close]));
                }
            }
            _ => {}
        }
    }
    Err("unbalanced parentheses")
}
