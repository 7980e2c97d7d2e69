//! Command-line harness for [`segfit_heap::Heap`].
//!
//! Not part of the allocator core: this binary only drives a `Heap` through
//! its public API and logs what happened. Usage:
//!
//! ```text
//! segfit-cli <sizes> <op>...
//! ```
//!
//! `<sizes>` is a comma-separated list of block sizes passed to
//! [`Heap::init`], e.g. `32,64,256,1024`. Each `<op>` is one of:
//!
//! - `alloc:<n>` — allocate `n` bytes; on success the returned block is
//!   appended to an internal handle table, so later ops can refer to it by
//!   its 0-based position.
//! - `release:<handle>` — release the block at that handle.
//!
//! Every op logs at `info` on success and `warn` on failure or no-op, via
//! `log`/`env_logger` (set `RUST_LOG=segfit_cli=info` or higher to see
//! them).

use std::ptr::NonNull;

use segfit_heap::Heap;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    if let Err(message) = run(&args) {
        log::error!("{message}");
        eprintln!("error: {message}");
        std::process::exit(1);
    }
}

/// Parses and executes a command line against a fresh [`Heap`], logging the
/// outcome of each operation. Returns `Err` only for malformed usage, never
/// for an allocator-reported failure (those are logged and the harness
/// continues, matching `allocate`/`release`'s own non-fatal failure modes).
fn run(args: &[String]) -> Result<(), String> {
    let (sizes_arg, ops) = args.split_first().ok_or_else(usage)?;
    let sizes: Vec<usize> = sizes_arg
        .split(',')
        .map(|s| s.trim().parse::<usize>().map_err(|_| usage()))
        .collect::<Result<_, _>>()?;

    let mut heap: Heap = Heap::new();
    if heap.init(&sizes) {
        log::info!("init({sizes:?}) -> true");
    } else {
        log::warn!("init({sizes:?}) -> false (rejected configuration, no pool is usable)");
    }

    let mut handles: Vec<Option<NonNull<u8>>> = Vec::new();
    for op in ops {
        let (verb, arg) = op.split_once(':').ok_or_else(usage)?;
        match verb {
            "alloc" => {
                let n: usize = arg.parse().map_err(|_| usage())?;
                match heap.allocate(n) {
                    Some(p) => {
                        log::info!("allocate({n}) -> handle {} ({p:?})", handles.len());
                        handles.push(Some(p));
                    }
                    None => {
                        log::warn!("allocate({n}) -> null (no pool qualifies)");
                        handles.push(None);
                    }
                }
            }
            "release" => {
                let handle: usize = arg.parse().map_err(|_| usage())?;
                let p = handles.get_mut(handle).ok_or_else(usage)?.take();
                match p {
                    Some(p) => log::info!("release(handle {handle}) -> {p:?}"),
                    None => log::warn!("release(handle {handle}) -> no-op (already released or never allocated)"),
                }
                heap.release(p);
            }
            _ => return Err(usage()),
        }
    }
    Ok(())
}

fn usage() -> String {
    "usage: segfit-cli <comma-separated sizes> [alloc:<n> | release:<handle>]...".to_string()
}
