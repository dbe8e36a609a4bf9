use std::{io, path::PathBuf};

use clap::Args;
use comercify::{
    carts::{merge_carts, table::write_cart_table},
    fixtures::load_cart_file,
};
use tracing::info;

use crate::errors::CliError;

#[derive(Debug, Args)]
pub(crate) struct MergeArgs {
    /// YAML cart to merge into (e.g. the anonymous session's cart)
    base: PathBuf,

    /// YAML cart whose values win on conflict (e.g. the signed-in cart)
    incoming: PathBuf,
}

pub(crate) fn run(args: &MergeArgs, out: impl io::Write) -> Result<(), CliError> {
    let base = load_cart_file(&args.base)?;
    let incoming = load_cart_file(&args.incoming)?;

    let merged = merge_carts(&base, &incoming);

    info!(
        base = base.len(),
        incoming = incoming.len(),
        merged = merged.len(),
        "merged cart files"
    );

    write_cart_table(out, &merged)?;

    Ok(())
}
