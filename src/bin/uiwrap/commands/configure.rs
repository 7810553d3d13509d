//! `uiwrap configure` command

use anyhow::Result;

use super::configure_session;
use crate::cli::{ConfigureArgs, GlobalArgs};
use uiwrap::builder::RuleGraph;
use uiwrap::util::diagnostic::{self, Diagnostic};

pub fn execute(global: &GlobalArgs, args: ConfigureArgs) -> Result<()> {
    let session = configure_session(global)?;
    let result = &session.result;

    if args.plan {
        println!("{}", serde_json::to_string_pretty(&result.plan())?);
    } else {
        for command in result.state.commands() {
            println!("{}", command);
            println!("    {}", command.command_line());
        }
    }

    let graph = RuleGraph::new(result.state.commands());
    for (output, count) in graph.duplicate_outputs() {
        let diag = Diagnostic::warning(format!("`{}` is generated by {} rules", output, count))
            .with_context("the same interface file was wrapped more than once")
            .with_suggestion("Set wrap_exclude on the duplicate entry or drop it from a scan list");
        diagnostic::emit(&diag, session.ctx.color());
    }

    session.check_failures()?;

    eprintln!(
        "    Declared {} rule(s), {} generated file(s)",
        graph.len(),
        result.published_files().len()
    );

    Ok(())
}
