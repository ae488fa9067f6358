use std::io::{self, BufRead, Write};

/// Asks the user a yes/no question before a destructive action.
pub trait Confirm {
    fn confirm(&mut self, question: &str) -> io::Result<bool>;
}

/// Affirmative answers accepted by the prompt. Matching is case-insensitive.
const AFFIRMATIVE: [&str; 2] = ["y", "yes"];

pub fn is_affirmative(answer: &str) -> bool {
    let answer = answer.trim();
    AFFIRMATIVE.iter().any(|yes| answer.eq_ignore_ascii_case(yes))
}

/// Prompts on stdout and reads a single line from stdin.
pub struct StdinConfirm;

impl Confirm for StdinConfirm {
    fn confirm(&mut self, question: &str) -> io::Result<bool> {
        let mut stdout = io::stdout();
        write!(stdout, "{} [Y/N]: ", question)?;
        stdout.flush()?;

        let mut answer = String::new();
        io::stdin().lock().read_line(&mut answer)?;
        Ok(is_affirmative(&answer))
    }
}

/// Answers every question the same way, used for `--yes` and in tests.
pub struct FixedConfirm(pub bool);

impl Confirm for FixedConfirm {
    fn confirm(&mut self, _question: &str) -> io::Result<bool> {
        Ok(self.0)
    }
}
