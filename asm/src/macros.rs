use crate::{error::Error, line::Line};

/// Expand the indirect memory (`M[x]`) and labeled jump (`;JMP:label`) shorthands.
///
/// Lines that use neither shorthand are returned unchanged. Label declarations and
/// address loads are never expanded.
pub fn expand(line: &Line) -> Result<Vec<Line>, Error> {
    let code = line.code.as_str();
    if code.starts_with('@') || is_label(code) {
        return Ok(vec![line.clone()]);
    }

    let (dest, comp, jump) = split_fields(code);
    let indirect = code.contains(['[', ']']);
    let labeled = jump.contains(':');
    match (indirect, labeled) {
        (false, false) => Ok(vec![line.clone()]),
        (true, false) => expand_indirect(line, dest, comp, jump),
        (false, true) => expand_jump(line, dest, comp, jump),
        (true, true) => Err(Error::format(
            line,
            "Indirect addressing and labeled jump cannot be combined",
        )),
    }
}

pub fn is_label(code: &str) -> bool {
    code.starts_with('(') && code.ends_with(')')
}

/// Split a compute instruction into `(dest, comp, jump)`.
pub fn split_fields(code: &str) -> (&str, &str, &str) {
    let (dest, rest) = code.split_once('=').unwrap_or(("", code));
    let (comp, jump) = rest.split_once(';').unwrap_or((rest, ""));
    (dest, comp, jump)
}

pub fn join_fields(dest: &str, comp: &str, jump: &str) -> String {
    let mut code = String::new();
    if !dest.is_empty() {
        code.push_str(dest);
        code.push('=');
    }
    code.push_str(comp);
    if !jump.is_empty() {
        code.push(';');
        code.push_str(jump);
    }
    code
}

// M[x]=M[x]+1  ->  @x, M=M+1
// M[x]=D       ->  @x, M=D
// D=M[x]       ->  @x, D=M
fn expand_indirect(line: &Line, dest: &str, comp: &str, jump: &str) -> Result<Vec<Line>, Error> {
    if jump.contains(['[', ']']) {
        return Err(Error::format(line, "Indirect addressing in jump field"));
    }
    let to_dest = indirect(line, dest)?;
    let from_comp = indirect(line, comp)?;

    let (addr, dest, comp) = match (to_dest, from_comp) {
        (Some((x, dest)), Some((y, comp))) => {
            if x != y {
                return Err(Error::format(
                    line,
                    format!("Indirect addresses differ: `{x}` and `{y}`"),
                ));
            }
            (x, dest, comp)
        }
        (Some((x, dest)), None) => (x, dest, comp.to_string()),
        (None, Some((x, comp))) => (x, dest.to_string(), comp),
        (None, None) => return Err(Error::format(line, "Malformed indirect addressing")),
    };

    Ok(vec![
        line.derive(format!("@{addr}")),
        line.derive(join_fields(&dest, &comp, jump)),
    ])
}

/// Find a single `M[expr]` operand in `field`.
///
/// Returns the address expression and the field with `M[expr]` rewritten to `M`.
fn indirect(line: &Line, field: &str) -> Result<Option<(String, String)>, Error> {
    let open = field.matches('[').count();
    let close = field.matches(']').count();
    if open == 0 && close == 0 {
        return Ok(None);
    }
    if open != 1 || close != 1 {
        return Err(Error::format(line, "Mismatched brackets"));
    }

    let (head, tail) = field.split_once('[').unwrap_or((field, ""));
    let Some((expr, rest)) = tail.split_once(']') else {
        return Err(Error::format(line, "Mismatched brackets"));
    };
    if expr.is_empty() {
        return Err(Error::format(line, "Empty indirect address"));
    }
    if !head.ends_with(['M', 'm']) {
        return Err(Error::format(line, "Indirect addressing requires `M[...]`"));
    }
    Ok(Some((expr.to_string(), format!("{head}{rest}"))))
}

// 0;JMP:LOOP  ->  @LOOP, 0;JMP
fn expand_jump(line: &Line, dest: &str, comp: &str, jump: &str) -> Result<Vec<Line>, Error> {
    let (cond, label) = jump.split_once(':').unwrap_or((jump, ""));
    if cond.is_empty() || label.is_empty() || label.contains(':') {
        return Err(Error::format(line, "Malformed labeled jump"));
    }
    Ok(vec![
        line.derive(format!("@{label}")),
        line.derive(join_fields(dest, comp, cond)),
    ])
}
