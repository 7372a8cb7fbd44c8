use rustyline::completion::{Completer, Pair};
use rustyline::highlight::Highlighter;
use rustyline::hint::Hinter;
use rustyline::validate::Validator;
use rustyline::{Context, Helper};

use crate::repl::commands::COMMAND_NAMES;

const URL_PREFIX: &str = "https://github.com/";

#[derive(Default)]
pub struct ReplHelper;

impl Helper for ReplHelper {}
impl Validator for ReplHelper {}
impl Highlighter for ReplHelper {}

impl Hinter for ReplHelper {
    type Hint = String;

    fn hint(&self, line: &str, pos: usize, _ctx: &Context<'_>) -> Option<String> {
        if pos < line.len() {
            return None;
        }
        let trimmed = line.trim();
        if !trimmed.starts_with('/') || trimmed.contains(' ') {
            return None;
        }
        for name in COMMAND_NAMES {
            if name.starts_with(trimmed) && *name != trimmed {
                return Some(name[trimmed.len()..].to_string());
            }
        }
        None
    }
}

impl Completer for ReplHelper {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        let prefix = &line[..pos];
        let trimmed = prefix.trim_start();

        if !trimmed.starts_with('/') {
            return Ok((0, vec![]));
        }

        // Past the command name: offer the URL prefix
        if let Some(space_idx) = trimmed.find(' ') {
            let cmd = &trimmed[..space_idx];
            let arg = trimmed[space_idx..].trim_start();
            let arg_start = pos - arg.len();

            let takes_url = matches!(cmd, "/analyze" | "/readme" | "/tests");
            if takes_url && URL_PREFIX.starts_with(arg) {
                return Ok((arg_start, vec![Pair {
                    display: URL_PREFIX.to_string(),
                    replacement: URL_PREFIX.to_string(),
                }]));
            }
            return Ok((arg_start, vec![]));
        }

        let start = pos - trimmed.len();
        let matches: Vec<Pair> = COMMAND_NAMES
            .iter()
            .filter(|name| name.starts_with(trimmed))
            .map(|name| Pair {
                display: name.to_string(),
                replacement: name.to_string(),
            })
            .collect();

        Ok((start, matches))
    }
}
