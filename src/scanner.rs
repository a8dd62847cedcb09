use crate::{
    error::MaskError,
    fields::{TimeField, TimeFields},
    predicates::Predicate,
};

/// Check whether a timestamp falls inside the set of times described by a
/// mask such as `W>=1 & W<=5 & h>=9 & h<=18`.
///
/// The mask is scanned once, left to right, with a single reduction stack
/// that is local to the call:
///
/// * a field symbol starts an atomic predicate, consumed greedily up to the
///   next `&`, `|` or `)` and evaluated to a `1` or `0` digit;
/// * `&` and `|` are pushed as the arithmetic markers `*` and `+`;
/// * `)` pops the stack back to the matching `(` (or the bottom of the
///   stack, for tolerance of unbalanced input) and reduces the popped
///   digits to a single boolean digit;
/// * whitespace is skipped and any other character is pushed verbatim,
///   where the reducer will ignore it.
///
/// The mask matches iff the final reduction of the whole stack is non-zero.
/// AND binds tighter than OR because `*` is collapsed before `+` is summed.
pub fn matches(mask: &str, fields: &TimeFields) -> Result<bool, MaskError> {
    let mut stack: Vec<char> = Vec::new();
    let characters: Vec<char> = mask.chars().collect();

    let mut index = 0;
    while index < characters.len() {
        let character = characters[index];
        if TimeField::from_symbol(character).is_some() {
            let end = characters[index..]
                .iter()
                .position(|&c| matches!(c, '&' | '|' | ')'))
                .map_or(characters.len(), |offset| index + offset);
            let expression: String = characters[index..end].iter().collect();
            let result = Predicate::parse(expression.trim())?.evaluate(fields);
            stack.push(if result { '1' } else { '0' });
            // The terminating delimiter is re-examined on the next iteration.
            index = end;
            continue;
        }

        match character {
            '&' => stack.push('*'),
            '|' => stack.push('+'),
            '(' => stack.push('('),
            ')' => {
                let group = pop_until_group_open(&mut stack);
                let reduced = reduce(&group);
                stack.push(if reduced != 0 { '1' } else { '0' });
            }
            c if c.is_whitespace() => {}
            other => stack.push(other),
        }
        index += 1;
    }

    let tokens: String = stack.into_iter().collect();
    Ok(reduce(&tokens) != 0)
}

/// Pop tokens until (and including) a group-open marker, concatenating them
/// in pop order.
///
/// Running out of stack is not an error: an unmatched `)` degrades to
/// "reduce everything popped so far", as if the opening parenthesis sat just
/// before the start of the mask.
fn pop_until_group_open(stack: &mut Vec<char>) -> String {
    let mut group = String::new();
    while let Some(token) = stack.pop() {
        if token == '(' {
            break;
        }
        group.push(token);
    }
    group
}

#[derive(Clone, Copy, Debug, PartialEq)]
enum Entry {
    Digit(u32),
    Or,
    Opaque,
}

/// Reduce a digit/operator string such as `1+0*1*1+0` to its sum.
///
/// First pass collapses every `*` immediately against the previously pushed
/// digit and the next digit in the input; second pass sums the remaining
/// digits. Operands are single digits by construction (booleans are encoded
/// as `0`/`1` before reduction); anything that is not a digit or an operator
/// contributes nothing.
fn reduce(tokens: &str) -> u32 {
    let mut stack: Vec<Entry> = Vec::new();
    let mut characters = tokens.chars();

    while let Some(character) = characters.next() {
        match character {
            '*' => {
                let left = match stack.pop() {
                    Some(Entry::Digit(digit)) => digit,
                    _ => 0,
                };
                let right = loop {
                    match characters.next() {
                        Some(c) if c.is_whitespace() => continue,
                        Some(c) => break c.to_digit(10).unwrap_or(0),
                        None => break 0,
                    }
                };
                stack.push(Entry::Digit(left * right));
            }
            '+' => stack.push(Entry::Or),
            c if c.is_whitespace() => {}
            c => match c.to_digit(10) {
                Some(digit) => stack.push(Entry::Digit(digit)),
                None => stack.push(Entry::Opaque),
            },
        }
    }

    stack
        .iter()
        .map(|entry| match entry {
            Entry::Digit(digit) => *digit,
            _ => 0,
        })
        .sum()
}
