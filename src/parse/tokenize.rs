/// Tokenize a command segment into words using shlex (POSIX word splitting).
pub fn tokenize(command: &str) -> Vec<String> {
    shlex::split(command).unwrap_or_else(|| {
        // Unbalanced quotes: fall back to whitespace splitting
        command.split_whitespace().map(String::from).collect()
    })
}

/// A word that looks like an option: `-u`, `--force`, `--`.
/// A lone `-` is a positional argument.
pub fn is_flag(word: &str) -> bool {
    word.len() >= 2 && word.starts_with('-')
}
