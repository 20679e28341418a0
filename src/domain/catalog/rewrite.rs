use std::io::{self, BufRead, Write};

use crate::domain::Slot;

/// What a rewrite changed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RewriteSummary {
    /// Active `KEY=` lines replaced with the new assignment.
    pub replaced: usize,
    /// Sibling assignment lines commented out after a replaced line.
    pub commented: usize,
}

impl RewriteSummary {
    pub fn changed_anything(&self) -> bool {
        self.replaced > 0
    }
}

/// Stream `input` to `output`, switching `slot` to `value`.
///
/// Every line starting with the slot's `KEY=` becomes `KEY=value`. Lines that
/// directly follow it and still carry the token are deactivated with a leading
/// `#` until a blank or unrelated line. Lines that are already comments stay as
/// they are, so repeating the same switch is stable. All other bytes pass through.
pub fn rewrite_slot<R: BufRead, W: Write>(
    mut input: R,
    mut output: W,
    slot: Slot,
    value: &str,
) -> io::Result<RewriteSummary> {
    let prefix = slot.prefix().as_bytes();
    let mut summary = RewriteSummary::default();
    let mut line = Vec::new();

    'lines: loop {
        line.clear();
        if input.read_until(b'\n', &mut line)? == 0 {
            break;
        }

        if !line.starts_with(prefix) {
            output.write_all(&line)?;
            continue;
        }

        output.write_all(prefix)?;
        output.write_all(value.as_bytes())?;
        output.write_all(line_ending(&line))?;
        summary.replaced += 1;

        loop {
            line.clear();
            if input.read_until(b'\n', &mut line)? == 0 {
                break 'lines;
            }
            if is_blank(&line) || !contains(&line, prefix) {
                output.write_all(&line)?;
                continue 'lines;
            }
            if is_comment(&line) {
                output.write_all(&line)?;
            } else {
                output.write_all(b"#")?;
                output.write_all(&line)?;
                summary.commented += 1;
            }
        }
    }

    output.flush()?;
    Ok(summary)
}

fn line_ending(line: &[u8]) -> &'static [u8] {
    if line.ends_with(b"\r\n") {
        b"\r\n"
    } else if line.ends_with(b"\n") {
        b"\n"
    } else {
        b""
    }
}

fn is_blank(line: &[u8]) -> bool {
    line.iter().all(u8::is_ascii_whitespace)
}

fn is_comment(line: &[u8]) -> bool {
    line.iter().find(|b| !matches!(**b, b' ' | b'\t')) == Some(&b'#')
}

fn contains(line: &[u8], token: &[u8]) -> bool {
    line.windows(token.len()).any(|window| window == token)
}
