//! `uiwrap order` command

use anyhow::Result;

use super::configure_session;
use crate::cli::{GlobalArgs, OrderArgs};
use uiwrap::builder::RuleGraph;
use uiwrap::util::diagnostic::suggestions;

pub fn execute(global: &GlobalArgs, args: OrderArgs) -> Result<()> {
    let session = configure_session(global)?;
    session.check_failures()?;

    let graph = RuleGraph::new(session.result.state.commands());
    let order = graph
        .build_order()
        .map_err(|e| anyhow::anyhow!("{}\n{}", e, suggestions::RULE_CYCLE))?;

    for (i, command) in order.iter().enumerate() {
        println!("{:>3}. {}", i + 1, command);
        if args.depends {
            for dep in &command.depends {
                println!("       <- {}", dep);
            }
            for before in graph.prerequisites(&command.output) {
                println!("       after {}", before.output);
            }
        }
    }

    Ok(())
}
