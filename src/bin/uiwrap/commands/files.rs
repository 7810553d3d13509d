//! `uiwrap files` command

use anyhow::Result;

use super::configure_session;
use crate::cli::{FilesArgs, GlobalArgs};

pub fn execute(global: &GlobalArgs, args: FilesArgs) -> Result<()> {
    let session = configure_session(global)?;
    let files = session.result.published_files();

    if args.raw {
        println!("{}", files.join(" "));
    } else {
        for file in files {
            println!("{}", file);
        }
    }

    session.check_failures()
}
