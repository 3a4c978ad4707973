/// Context for inspecting a single command segment.
#[derive(Debug)]
pub struct CommandContext {
    /// All words in the segment (tokenized via shlex).
    pub words: Vec<String>,
}

impl CommandContext {
    pub fn from_command(segment: &str) -> Self {
        Self {
            words: super::tokenize(segment),
        }
    }

    /// Words following `<program> <subcommand>`, if the segment invokes it.
    ///
    /// `program` matches by basename, so `/usr/bin/git push` counts as `git push`.
    /// Options between the program and the subcommand (`git -C dir push`)
    /// are not understood.
    pub fn subcommand_args(&self, program: &str, subcommand: &str) -> Option<&[String]> {
        let pos = self.words.windows(2).position(|pair| {
            basename(&pair[0]) == program && pair[1] == subcommand
        })?;
        Some(&self.words[pos + 2..])
    }
}

fn basename(word: &str) -> &str {
    match word.rsplit_once('/') {
        Some((_, name)) if !name.is_empty() => name,
        _ => word,
    }
}
