// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use anyhow::{bail, Context, Result};
use serde_json::Value;
use std::env;
use std::io::{self, BufWriter, Write};
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

use switchyard::config::consts::{DEFAULT_LOG_FILTER, MAX_SIMULATION_ROUNDS};
use switchyard::config::{load_component, load_config, load_configs};
use switchyard::engine::{queue_bindings, PipelineBuilder, Worker};
use switchyard::graph::{build_topology, NodeKind, Topology};
use switchyard::routing::canonicalize;
use switchyard::traits::Transport;
use switchyard::transport::MemoryTransport;

const USAGE: &str = "\
Usage: switchyard stdio <component>
       switchyard graph -r <routing-key> [-r <routing-key> ...] <folder> [<folder> ...]
       switchyard topics <component-file>
       switchyard simulate -r <routing-key> [-p <json-payload>] <folder> [<folder> ...]";

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)),
        )
        .with_writer(io::stderr)
        .init();

    let args: Vec<String> = env::args().skip(1).collect();
    match args.split_first() {
        Some((command, rest)) if command == "stdio" => match rest {
            [path] => run_stdio(path),
            _ => usage(),
        },
        Some((command, rest)) if command == "graph" => run_graph(rest),
        Some((command, rest)) if command == "topics" => match rest {
            [path] => run_topics(path),
            _ => usage(),
        },
        Some((command, rest)) if command == "simulate" => run_simulate(rest).await,
        _ => usage(),
    }
}

fn usage() -> Result<()> {
    eprintln!("{}", USAGE);
    bail!("invalid arguments")
}

/// Run one component over a stream of JSON documents on stdin, printing each
/// output as one JSON line.
fn run_stdio(path: &str) -> Result<()> {
    let config = load_component(path)?;
    let pipeline = PipelineBuilder::new(config)
        .guarded(true)
        .build()
        .with_context(|| format!("building pipeline for '{}'", path))?;

    let stdin = io::stdin();
    let mut out = BufWriter::new(io::stdout().lock());
    for document in serde_json::Deserializer::from_reader(stdin.lock()).into_iter::<Value>() {
        let document = document.context("reading JSON from stdin")?;
        for output in pipeline.run_one(document) {
            serde_json::to_writer(&mut out, &output?)?;
            writeln!(out)?;
        }
        out.flush()?;
    }
    Ok(())
}

/// Derive the topology reachable from the seed keys and print it as DOT.
fn run_graph(args: &[String]) -> Result<()> {
    let mut seeds = Vec::new();
    let mut folders = Vec::new();
    let mut args = args.iter();
    while let Some(arg) = args.next() {
        if arg == "-r" {
            match args.next() {
                Some(key) => seeds.push(key.clone()),
                None => return usage(),
            }
        } else {
            folders.push(arg.clone());
        }
    }
    if seeds.is_empty() || folders.is_empty() {
        return usage();
    }

    let configs = load_configs(&folders)?;
    let topology = build_topology(&seeds, &configs);
    print!("{}", render_dot(&topology));
    Ok(())
}

fn render_dot(topology: &Topology) -> String {
    let mut dot = String::from("digraph components {\n");
    for node in topology.nodes() {
        let attributes = match node.kind() {
            NodeKind::Component if node.is_defined() => "shape=circle, style=solid",
            NodeKind::Component => "shape=circle, style=dashed",
            NodeKind::Edge => "shape=none",
        };
        dot.push_str(&format!("    {:?} [{}];\n", node.name(), attributes));
    }
    for (parent, child) in topology.links() {
        dot.push_str(&format!("    {:?} -> {:?};\n", parent, child));
    }
    dot.push_str("}\n");
    dot
}

/// Print the queue and wire bindings of every component in a file.
fn run_topics(path: &str) -> Result<()> {
    for config in load_config(path)? {
        for pattern in queue_bindings(&config) {
            println!("{} {}", config.queue_name(), pattern);
        }
    }
    Ok(())
}

/// Run every defined component over an in-memory exchange, starting from one
/// seed message, and print each published message as a JSON line.
async fn run_simulate(args: &[String]) -> Result<()> {
    let mut seed = None;
    let mut payload = Value::Null;
    let mut folders = Vec::new();
    let mut args = args.iter();
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-r" => match args.next() {
                Some(key) => seed = Some(canonicalize(key)),
                None => return usage(),
            },
            "-p" => match args.next() {
                Some(json) => payload = serde_json::from_str(json).context("parsing -p payload")?,
                None => return usage(),
            },
            _ => folders.push(arg.clone()),
        }
    }
    let Some(seed) = seed else {
        return usage();
    };
    if folders.is_empty() {
        return usage();
    }

    let transport = Arc::new(MemoryTransport::new());
    let mut workers = Vec::new();
    for config in load_configs(&folders)? {
        if config.procedure().is_none() {
            continue;
        }
        let pipeline = PipelineBuilder::new(config.clone())
            .guarded(true)
            .build()
            .with_context(|| format!("building pipeline for '{}'", config.name()))?;
        let worker = Worker::new(config, pipeline, transport.clone());
        worker.bind().await?;
        workers.push(worker);
    }

    transport.publish(&seed, payload).await?;

    // Each round handles only what was queued when it started.
    for _ in 0..MAX_SIMULATION_ROUNDS {
        let mut batches = Vec::with_capacity(workers.len());
        for worker in &workers {
            batches.push(transport.pending(worker.queue()).await);
        }
        if batches.iter().all(|&pending| pending == 0) {
            break;
        }
        for (worker, pending) in workers.iter().zip(batches) {
            worker.drain(pending).await?;
        }
    }

    for delivery in transport.published().await {
        println!(
            "{}",
            serde_json::json!({"routing_key": delivery.routing_key, "payload": delivery.payload})
        );
    }
    Ok(())
}
