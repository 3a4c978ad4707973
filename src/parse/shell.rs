/// Split a command at shell operators (`&&`, `||`, `;`, `|`, `|&`, newline),
/// respecting single/double quotes and backslash escapes.
///
/// Parentheses are not tracked: a `$(...)` spanning an operator outside of
/// quotes is cut in two.
pub fn split(command: &str) -> Vec<String> {
    let mut segments = Vec::new();
    let mut buf = String::new();

    let chars: Vec<char> = command.chars().collect();
    let len = chars.len();
    let mut i = 0;
    let (mut sq, mut dq, mut esc) = (false, false, false);

    while i < len {
        let c = chars[i];

        if esc {
            buf.push(c);
            esc = false;
            i += 1;
            continue;
        }
        match c {
            '\\' if !sq => esc = true,
            '\'' if !dq => sq = !sq,
            '"' if !sq => dq = !dq,
            _ => {}
        }
        if c == '\\' || c == '\'' || c == '"' || sq || dq {
            buf.push(c);
            i += 1;
            continue;
        }

        let next = chars.get(i + 1).copied();
        let operator_width = match (c, next) {
            ('&', Some('&')) | ('|', Some('|' | '&')) => 2,
            ('|' | ';' | '\n', _) => 1,
            _ => 0,
        };

        if operator_width == 0 {
            buf.push(c);
            i += 1;
        } else {
            push_segment(&mut segments, &buf);
            buf.clear();
            i += operator_width;
        }
    }

    push_segment(&mut segments, &buf);
    segments
}

fn push_segment(segments: &mut Vec<String>, buf: &str) {
    let trimmed = buf.trim();
    if !trimmed.is_empty() {
        segments.push(trimmed.to_string());
    }
}
