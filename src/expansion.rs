use crate::fields::{TimeField, TimeFields};

/// Rewrite the relative tokens of a mask template against the current time.
///
/// The template is walked left to right while tracking the most recently
/// seen field symbol; every literal `now` is replaced with that field's
/// value from `now`, so `h==now & m==now` at 20:30 becomes `h==20&m==30`.
/// All whitespace is stripped from the output, which the scanner tolerates
/// either way.
///
/// A `now` that appears before any field symbol has been seen is left in
/// place; it then surfaces as a [`crate::MaskError`] when the mask is
/// evaluated, instead of silently turning into a bogus value. Templates
/// without `now` pass through unchanged apart from the whitespace removal.
pub fn expand(template: &str, now: &TimeFields) -> String {
    let mut expanded = String::with_capacity(template.len());
    let characters: Vec<char> = template.chars().collect();
    let mut tracked: Option<TimeField> = None;

    let mut index = 0;
    while index < characters.len() {
        let character = characters[index];
        if let Some(field) = TimeField::from_symbol(character) {
            tracked = Some(field);
            expanded.push(character);
        } else if character == 'n'
            && characters.get(index + 1) == Some(&'o')
            && characters.get(index + 2) == Some(&'w')
        {
            match tracked {
                Some(field) => expanded.push_str(&now.value(field).to_string()),
                None => expanded.push_str("now"),
            }
            index += 3;
            continue;
        } else if !character.is_whitespace() {
            expanded.push(character);
        }
        index += 1;
    }

    expanded
}
