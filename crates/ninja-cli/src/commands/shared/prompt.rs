use std::io::{BufRead, Write};

/// Ask a yes/no question; only `y` or `yes` counts as yes.
pub fn confirm_with<R: BufRead, W: Write>(input: &mut R, output: &mut W, message: &str) -> bool {
    if write!(output, "{message} [y/N] ").and_then(|()| output.flush()).is_err() {
        return false;
    }
    let mut answer = String::new();
    if input.read_line(&mut answer).is_err() {
        return false;
    }
    matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes")
}

/// [`confirm_with`] on the terminal.
pub fn confirm_on_terminal(message: &str) -> bool {
    confirm_with(&mut std::io::stdin().lock(), &mut std::io::stderr(), message)
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use rstest::rstest;

    use super::confirm_with;

    #[rstest]
    #[case("y\n", true)]
    #[case("YES\n", true)]
    #[case("n\n", false)]
    #[case("\n", false)]
    #[case("", false)]
    #[case("maybe\n", false)]
    fn answers(#[case] typed: &str, #[case] expected: bool) {
        let mut out = Vec::new();
        let answer = confirm_with(&mut Cursor::new(typed), &mut out, "Delete?");
        assert_eq!(answer, expected);
        assert_eq!(String::from_utf8(out).unwrap(), "Delete? [y/N] ");
    }
}
