//! Interactive shell: read an article, print its summary, answer questions.
//!
//! Everything is generic over [`BufRead`] and [`Write`] so the loop can be
//! driven by stdin/stdout or by in-memory buffers.

use crate::config::Config;
use crate::error::{BriefError, Result};
use crate::qa::QuestionAnswerer;
use crate::segmentation::split_sentences;
use crate::summarizer::Summarizer;
use crate::text::clean_text;
use log::{debug, info};
use std::fs;
use std::io::{self, BufRead, Read, Write};
use std::path::Path;

/// Printed when the pasted article is blank.
pub const NO_ARTICLE_MESSAGE: &str = "No article text provided. Exiting.";

/// Returns true for the words that end the question loop.
pub fn is_exit_command(input: &str) -> bool {
    let input = input.trim();
    input.eq_ignore_ascii_case("exit") || input.eq_ignore_ascii_case("quit")
}

/// Reads one line without its line terminator. `None` at end of input.
fn read_line<R: BufRead>(input: &mut R) -> Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    let trimmed = line.trim_end_matches(['\n', '\r']).len();
    line.truncate(trimmed);
    Ok(Some(line))
}

/// Where a chat session gets its article from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArticleSource {
    /// Prompt the user and read the pasted article from the input stream.
    Paste,
    /// Read the article from the input stream without prompting. The
    /// article ends at the first blank line and questions follow it.
    Stream,
    /// Article text loaded up front, e.g. from a file.
    Loaded(String),
}

/// Prompts for an article and reads lines until a blank line or end of input.
///
/// Lines are joined with `\n`; the terminating blank line is not included.
pub fn read_article<R: BufRead, W: Write>(input: &mut R, out: &mut W) -> Result<String> {
    writeln!(out, "Paste your news article below.")?;
    writeln!(out, "When you are done, press ENTER on an empty line.")?;
    writeln!(out)?;
    out.flush()?;

    read_article_lines(input)
}

/// Reads article lines until a blank line or end of input, without prompting.
pub fn read_article_lines<R: BufRead>(input: &mut R) -> Result<String> {
    let mut lines = Vec::new();
    while let Some(line) = read_line(input)? {
        if line.trim().is_empty() {
            break;
        }
        lines.push(line);
    }

    debug!("Read {} article lines", lines.len());
    Ok(lines.join("\n"))
}

/// Loads article text from a file path, `-` for stdin, or literal text.
///
/// A path takes precedence over literal text. `-` reads stdin to the end,
/// so it suits one-shot commands only; chat sessions use
/// [`ArticleSource::Stream`].
pub fn load_article(input: Option<&str>, text: Option<&str>) -> Result<String> {
    match (input, text) {
        (Some("-"), _) => {
            let mut buffer = String::new();
            io::stdin().read_to_string(&mut buffer)?;
            Ok(buffer)
        }
        (Some(path), _) => {
            let path = Path::new(path);
            if !path.exists() {
                return Err(BriefError::FileNotFound(path.to_path_buf()));
            }
            Ok(fs::read_to_string(path)?)
        }
        (None, Some(text)) => Ok(text.to_string()),
        (None, None) => Err(BriefError::EmptyInput(
            "provide an article with --input or --text".to_string(),
        )),
    }
}

/// Runs a full chat session.
///
/// The article comes from `source`; pasted and streamed articles share
/// `input` with the questions that follow. A blank article ends the session
/// right away. Otherwise the summary is printed and questions are answered
/// until `exit`, `quit` or end of input.
pub fn run_chat<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    config: &Config,
    source: ArticleSource,
) -> Result<()> {
    let article = match source {
        ArticleSource::Paste => read_article(input, out)?,
        ArticleSource::Stream => read_article_lines(input)?,
        ArticleSource::Loaded(article) => article,
    };

    if article.trim().is_empty() {
        writeln!(out, "{}", NO_ARTICLE_MESSAGE)?;
        return Ok(());
    }

    let summarizer = Summarizer::with_config(config.summary.clone());
    let summary = summarizer.summarize(&article);
    writeln!(out)?;
    writeln!(out, "--- SUMMARY ---")?;
    writeln!(out)?;
    writeln!(out, "{}", summary)?;
    writeln!(out)?;
    writeln!(out, "----------------")?;
    writeln!(out)?;

    let sentences = split_sentences(&clean_text(&article));
    info!("Article has {} sentences", sentences.len());
    let answerer = QuestionAnswerer::with_config(config.question.clone());

    writeln!(out, "You can now ask questions about this article.")?;
    writeln!(out, "Type 'exit' to quit.")?;
    writeln!(out)?;

    loop {
        write!(out, "Your question: ")?;
        out.flush()?;

        let question = match read_line(input)? {
            Some(line) => line,
            None => {
                // End of input behaves like "exit".
                writeln!(out)?;
                break;
            }
        };
        let question = question.trim();

        if is_exit_command(question) {
            break;
        }
        if question.is_empty() {
            continue;
        }

        let answer = answerer.reply(question, &sentences);
        writeln!(out, "Answer: {} ", answer)?;
        writeln!(out)?;
    }

    writeln!(out, "Goodbye!")?;
    out.flush()?;
    Ok(())
}
