//! One output file or directory: compare with the library, then write.

use anyhow::Result;

use super::context::Context;
use super::{ProcessOpts, TaskStats};
use crate::resources::{Resource, ResourceChange, ResourceState};

/// What happened to one resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum Outcome {
    /// Output already matched its source.
    Unchanged,
    /// Output was written, or would be under `--dry-run`.
    Written,
    /// Output was left alone after a lenient failure.
    Skipped,
}

impl std::ops::AddAssign<Outcome> for TaskStats {
    fn add_assign(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::Unchanged => self.already_ok += 1,
            Outcome::Written => self.changed += 1,
            Outcome::Skipped => self.skipped += 1,
        }
    }
}

/// Bring one resource up to date.
pub(super) fn process_single<R: Resource>(
    ctx: &Context,
    resource: &R,
    opts: &ProcessOpts,
) -> Result<Outcome> {
    let desc = resource.description();
    let state = match resource.current_state() {
        Ok(state) => state,
        Err(err) => {
            let err = err.context(format!("cannot inspect {desc}"));
            return failed(ctx, opts, &desc, err);
        }
    };

    let current = match state {
        ResourceState::Correct => {
            ctx.log.debug(&format!("up to date: {desc}"));
            return Ok(Outcome::Unchanged);
        }
        ResourceState::Invalid { reason } => {
            ctx.log.warn(&format!("cannot {} {desc}: {reason}", opts.verb));
            return Ok(Outcome::Skipped);
        }
        ResourceState::Missing => None,
        ResourceState::Incorrect { current } => Some(current),
    };

    if ctx.dry_run {
        ctx.log.dry_run(&match current {
            Some(current) => format!("would {} {desc} (update, currently {current})", opts.verb),
            None => format!("would {} {desc} (create)", opts.verb),
        });
        return Ok(Outcome::Written);
    }

    match resource.apply() {
        Ok(ResourceChange::Applied) => {
            ctx.log.debug(&format!("{}: {desc}", opts.verb));
            Ok(Outcome::Written)
        }
        Ok(ResourceChange::Skipped { reason }) => failed(ctx, opts, &desc, anyhow::anyhow!(reason)),
        Err(err) => failed(ctx, opts, &desc, err),
    }
}

/// Propagate `err` under strict processing; otherwise warn and skip.
fn failed(ctx: &Context, opts: &ProcessOpts, desc: &str, err: anyhow::Error) -> Result<Outcome> {
    let err = err.context(format!("failed to {} {desc}", opts.verb));
    if opts.bail_on_error {
        return Err(err);
    }
    ctx.log.warn(&format!("{err:#}"));
    Ok(Outcome::Skipped)
}
