//! User interaction (version prompt).

use anyhow::{Result, bail};

use super::RealRuntime;

use std::io::{self, BufRead, Write};

/// Prompts on `output` until a line read from `input` exactly matches one of
/// `versions`. Free-standing so tests can drive it without a terminal.
///
/// Only the line terminator is stripped; comparison is case-sensitive.
pub fn choose_version_with_io<R: BufRead, W: Write>(
    versions: &[String],
    input: &mut R,
    output: &mut W,
) -> Result<String> {
    writeln!(output, "Multiple versions found:")?;
    writeln!(output, "{}", versions.join(", "))?;

    loop {
        write!(output, "Which version would you like to use? ")?;
        output.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            bail!("Input closed before a version was chosen");
        }

        let answer = line.trim_end_matches(['\n', '\r']);
        if versions.iter().any(|v| v == answer) {
            return Ok(answer.to_string());
        }

        writeln!(output, "That was NOT one of the choices...")?;
        writeln!(output, "Try again")?;
    }
}

impl RealRuntime {
    pub(crate) fn choose_version_impl(&self, versions: &[String]) -> Result<String> {
        let stdin = io::stdin();
        let mut stdout = io::stdout();
        let mut stdin_lock = stdin.lock();
        choose_version_with_io(versions, &mut stdin_lock, &mut stdout)
    }
}

#[cfg(test)]
mod tests {
    use super::choose_version_with_io;
    use anyhow::Result;
    use std::io::Cursor;

    fn versions() -> Vec<String> {
        vec!["1.0".to_string(), "2.0".to_string(), "2.0rc1".to_string()]
    }

    #[test]
    fn accepts_listed_version() -> Result<()> {
        let mut input = Cursor::new(b"2.0\n".to_vec());
        let mut output = Vec::new();
        let chosen = choose_version_with_io(&versions(), &mut input, &mut output)?;
        assert_eq!(chosen, "2.0");

        let out = String::from_utf8(output)?;
        assert_eq!(
            out,
            "Multiple versions found:\n1.0, 2.0, 2.0rc1\nWhich version would you like to use? "
        );
        Ok(())
    }

    #[test]
    fn reprompts_until_match() -> Result<()> {
        let mut input = Cursor::new(b"3.0\n2.0RC1\n 1.0\n2.0rc1\n".to_vec());
        let mut output = Vec::new();
        let chosen = choose_version_with_io(&versions(), &mut input, &mut output)?;
        assert_eq!(chosen, "2.0rc1");

        let out = String::from_utf8(output)?;
        assert_eq!(out.matches("That was NOT one of the choices...").count(), 3);
        assert_eq!(out.matches("Which version would you like to use? ").count(), 4);
        assert_eq!(out.matches("Multiple versions found:").count(), 1);
        Ok(())
    }

    #[test]
    fn accepts_crlf_line_endings() -> Result<()> {
        let mut input = Cursor::new(b"1.0\r\n".to_vec());
        let mut output = Vec::new();
        assert_eq!(choose_version_with_io(&versions(), &mut input, &mut output)?, "1.0");
        Ok(())
    }

    #[test]
    fn eof_is_an_error() {
        let mut input = Cursor::new(b"nope\n".to_vec());
        let mut output = Vec::new();
        let result = choose_version_with_io(&versions(), &mut input, &mut output);
        assert!(result.is_err());
    }
}
