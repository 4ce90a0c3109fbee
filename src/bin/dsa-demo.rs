use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use classic_dsa::{List, Queue, RingBuffer, SearchAlgorithm, SortAlgorithm, Stack};

#[derive(Parser, Debug)]
#[command(version, about = "Walk through the classic data structures and algorithms")]
struct Args {
    /// Log filter used when RUST_LOG is unset (e.g. "debug", "classic_dsa=trace")
    #[arg(long, global = true)]
    log_level: Option<String>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Build a doubly linked list and edit it at both ends and in the middle
    List,
    /// Enqueue and dequeue a few values
    Queue,
    /// Push and pop a few values
    Stack,
    /// Fill a ring buffer past its capacity from both ends
    Ring,
    /// Sort the given values
    Sort {
        #[arg(long, value_enum, default_value_t = SortAlgorithm::Merge)]
        algorithm: SortAlgorithm,
        #[arg(default_values_t = [38, 27, 43, 3, 9, 82, 10])]
        values: Vec<i64>,
    },
    /// Search the given values (sorted first) for a needle
    Search {
        #[arg(long, value_enum, default_value_t = SearchAlgorithm::Binary)]
        algorithm: SearchAlgorithm,
        #[arg(long)]
        needle: i64,
        #[arg(default_values_t = [1, 3, 5, 7, 9, 11, 13, 15, 17])]
        values: Vec<i64>,
    },
}

fn init_logging(log_level: Option<&str>) {
    let env_filter = match log_level {
        Some(level) => EnvFilter::new(level),
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
    };
    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt::layer().with_target(true))
        .init();
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.log_level.as_deref());

    match args.command {
        Command::List => list_demo(),
        Command::Queue => queue_demo(),
        Command::Stack => stack_demo(),
        Command::Ring => ring_demo(),
        Command::Sort {
            algorithm,
            mut values,
        } => {
            info!(%algorithm, len = values.len(), "sorting");
            println!("input:  {:?}", values);
            algorithm.sort(&mut values);
            println!("sorted: {:?}", values);
            Ok(())
        }
        Command::Search {
            algorithm,
            needle,
            mut values,
        } => {
            values.sort_unstable();
            println!("haystack: {:?}", values);
            match algorithm.search(&values, &needle) {
                Some(index) => println!("{} found {} at index {}", algorithm, needle, index),
                None => println!("{} did not find {}", algorithm, needle),
            }
            Ok(())
        }
    }
}

fn list_demo() -> Result<()> {
    let mut list = List::new();
    list.append(10);
    list.append(20);
    list.append(30);
    list.prepend(5);
    list.insert_at(2, 15);
    println!("{}", list);

    let third = list
        .get_value_at(3)
        .context("reading the fourth element of the list")?;
    println!("value at 3: {}", third);

    println!("removed start: {:?}", list.remove_start());
    println!("removed end: {:?}", list.remove_end());
    println!("removed at 1: {:?}", list.remove_at(1));
    println!("removed value 15: {:?}", list.remove_value(&15));
    println!("{} (len {})", list, list.len());

    let backwards: Vec<_> = list.iter().rev().collect();
    println!("backwards: {:?}", backwards);
    Ok(())
}

fn queue_demo() -> Result<()> {
    let mut queue = Queue::new();
    for value in [5, 10, 15] {
        queue.enqueue(value);
    }
    println!("queue: {:?}, front: {:?}", queue, queue.peek());
    while let Some(value) = queue.dequeue() {
        println!("dequeued {} ({} left)", value, queue.len());
    }
    Ok(())
}

fn stack_demo() -> Result<()> {
    let mut stack = Stack::new();
    for value in [1, 2, 3] {
        stack.push(value);
    }
    println!("stack: {:?}, top: {:?}", stack, stack.peek());
    while let Some(value) = stack.pop() {
        println!("popped {} ({} left)", value, stack.len());
    }
    Ok(())
}

fn ring_demo() -> Result<()> {
    let mut ring = RingBuffer::with_capacity(2);
    ring.push_back(2);
    ring.push_back(3);
    ring.push_front(1);
    ring.push_back(4);
    println!("ring: {:?} (capacity {})", ring, ring.capacity());

    let old = ring.set(1, 20).context("overwriting position 1")?;
    println!("replaced {} at 1: {:?}", old, ring);
    println!("pop front: {:?}, pop back: {:?}", ring.pop_front(), ring.pop_back());
    println!("ring: {:?}", ring);
    Ok(())
}
