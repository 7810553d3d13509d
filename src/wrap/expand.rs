//! Expansion stage: select interface files and register generated sources.

use crate::builder::description::BuildDescription;
use crate::core::request::WrapRequest;
use crate::core::source_list::SourceLists;
use crate::util::flags::is_off;
use crate::wrap::errors::WrapError;
use crate::wrap::pair::GeneratedPair;
use crate::wrap::WrapOptions;

/// Fail unless the enable switch is defined and not a false value.
pub fn check_enabled(
    description: &dyn BuildDescription,
    variable: &str,
) -> Result<(), WrapError> {
    match description.definition(variable) {
        None => Err(WrapError::Undefined {
            variable: variable.to_string(),
        }),
        Some(value) if is_off(value) => Err(WrapError::Disabled {
            variable: variable.to_string(),
            value: value.to_string(),
        }),
        Some(_) => Ok(()),
    }
}

/// Produce one pair per non-excluded file of every scan list.
///
/// Pairs follow scan-list order, then file order within each list. Every
/// scan list is looked up before any pair is built, so an unknown list
/// fails without side effects.
pub fn expand(
    request: &WrapRequest,
    lists: &SourceLists,
    source_dir: &str,
    output_dir: &str,
    options: &WrapOptions,
) -> Result<Vec<GeneratedPair>, WrapError> {
    let scanned = request
        .scan_lists()
        .iter()
        .map(|id| {
            lists.get(id).ok_or_else(|| WrapError::BadList {
                list: id.to_string(),
                known: lists.ids().map(ToString::to_string).collect(),
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    let mut pairs = Vec::new();
    for (id, files) in request.scan_lists().iter().zip(scanned) {
        for file in files {
            if file.wrap_exclude() {
                tracing::debug!("{}: skipping excluded {}", id, file.file_name());
                continue;
            }

            let pair = GeneratedPair::new(
                file,
                source_dir,
                output_dir,
                &options.header_extension,
                &options.impl_extension,
            );
            tracing::debug!(
                "{}: wrapping {} -> {}, {}",
                id,
                pair.interface,
                pair.header.file_name(),
                pair.implementation.file_name()
            );
            pairs.push(pair);
        }
    }

    Ok(pairs)
}

/// Append each pair's header to the header list and its implementation to
/// the source list, in pair order.
pub fn register(
    pairs: &[GeneratedPair],
    request: &WrapRequest,
    description: &mut dyn BuildDescription,
) {
    for pair in pairs {
        description.add_source(pair.header.clone(), request.header_list());
        description.add_source(pair.implementation.clone(), request.source_list());
    }
}
