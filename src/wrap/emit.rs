//! Emission stage: declare generator rules and extend the published list.

use serde::Serialize;

use crate::builder::command::CustomCommand;
use crate::wrap::pair::GeneratedPair;

/// Result of the emission stage for one invocation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Emission {
    /// One rule per pair, in pair order
    pub commands: Vec<CustomCommand>,

    /// Paths generated by this invocation: header then implementation, per pair
    pub generated: Vec<String>,

    /// New value of the published list
    pub published: String,
}

/// Build the generator rule for every pair.
///
/// Each rule depends on the generator and on every header emitted so far in
/// this invocation, its own included, so dependencies grow from one rule to
/// the next. The published value is `prior` followed by this invocation's
/// paths, space separated.
pub fn emit(
    pairs: &[GeneratedPair],
    library: &str,
    generator: &str,
    prior: Option<&str>,
) -> Emission {
    let mut depends = vec![generator.to_string()];
    let mut commands = Vec::with_capacity(pairs.len());
    let mut generated = Vec::with_capacity(pairs.len() * 2);

    for pair in pairs {
        let header = pair.header_path();
        let implementation = pair.implementation_path();

        let args = vec![
            "-h".to_string(),
            header.clone(),
            "-o".to_string(),
            implementation.clone(),
            pair.interface.clone(),
        ];

        depends.push(header.clone());

        let command = CustomCommand {
            trigger: pair.interface.clone(),
            command: generator.to_string(),
            args,
            depends: depends.clone(),
            output: implementation.clone(),
            target: library.to_string(),
        };
        tracing::debug!("declaring rule {}", command);
        commands.push(command);

        generated.push(header);
        generated.push(implementation);
    }

    let published = prior
        .map(str::trim)
        .filter(|prior| !prior.is_empty())
        .into_iter()
        .chain(generated.iter().map(String::as_str))
        .collect::<Vec<_>>()
        .join(" ");

    Emission {
        commands,
        generated,
        published,
    }
}
