//! Console harness for the list and queue types.
//!
//! Reads whitespace-separated integers from stdin and dispatches on a leading
//! command code, printing `<len>: <elements>` after every mutation.

use std::fmt::Display;
use std::collections::VecDeque;
use std::io::{self, BufRead};
use std::str::FromStr;

use anyhow::{Context, Result, anyhow};
use clap::{Parser, Subcommand, ValueEnum};
use linear_collections::{BoundedQueue, DoublyLinkedList, Full, ListError, SinglyLinkedList};
use log::{LevelFilter, error, info, warn};

#[derive(ValueEnum, Clone, Copy, Debug)]
enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Log verbosity, written to stderr
    #[arg(long, value_enum, default_value_t = LogLevel::Warn, global = true)]
    log_level: LogLevel,

    #[command(subcommand)]
    mode: Mode,
}

#[derive(Subcommand, Debug)]
enum Mode {
    /// Singly linked list: 1 next, 2 remove, 3 x add-first, 4 remove-first,
    /// 5 x remove-value, 6 i get, 7 i x set, 8 i x insert, 9 i remove
    Singly {
        /// Seed the list with 1..=count
        #[arg(long, default_value_t = 10)]
        count: i64,
    },
    /// Doubly linked list: 1 next, 2 prev, 3 remove, 4 x insert
    Doubly {
        /// Seed the list with 1..=count
        #[arg(long, default_value_t = 10)]
        count: i64,
    },
    /// Bounded queue: 1 x offer, 2 poll, 3 peek, 4 len, 5 is-empty,
    /// 6 clear, 7 snapshot, 8 quit
    Queue {
        /// Queue capacity; read as the first integer on stdin when omitted
        #[arg(long)]
        capacity: Option<usize>,
    },
}

fn init_logger(level: LevelFilter) -> Result<()> {
    fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "[{}][{}] {}",
                record.level(),
                record.target(),
                message
            ))
        })
        .level(level)
        .chain(io::stderr())
        .apply()
        .context("installing logger")
}

/// Whitespace-separated tokens, read one line at a time so each command runs
/// as soon as its line arrives.
struct Tokens<R> {
    lines: io::Lines<R>,
    pending: VecDeque<String>,
}

impl<R: BufRead> Tokens<R> {
    fn new(reader: R) -> Self {
        Self {
            lines: reader.lines(),
            pending: VecDeque::new(),
        }
    }

    /// Next token parsed as `T`, `None` at end of input.
    fn next_token<T>(&mut self) -> Result<Option<T>>
    where
        T: FromStr,
        T::Err: std::error::Error + Send + Sync + 'static,
    {
        let token = loop {
            if let Some(token) = self.pending.pop_front() {
                break token;
            }
            let Some(line) = self.lines.next() else {
                return Ok(None);
            };
            let line = line.context("reading commands from stdin")?;
            self.pending.extend(line.split_whitespace().map(String::from));
        };
        token
            .parse()
            .map(Some)
            .with_context(|| format!("invalid token {token:?}"))
    }

    /// Operand that must follow a command code.
    fn operand<T>(&mut self, command: i64) -> Result<T>
    where
        T: FromStr,
        T::Err: std::error::Error + Send + Sync + 'static,
    {
        self.next_token()?
            .ok_or_else(|| anyhow!("command {command} is missing an operand"))
    }
}

fn report<T: Display>(result: Result<T, ListError>) {
    match result {
        Ok(value) => println!("{value}"),
        Err(err) => error!("{err}"),
    }
}

/// Positional edits the singly driver applies outside the cursor.
enum Edit {
    AddFirst(i64),
    RemoveFirst,
    RemoveValue(i64),
    Set(usize, i64),
    Insert(usize, i64),
    Remove(usize),
}

fn run_singly<R: BufRead>(count: i64, tokens: &mut Tokens<R>) -> Result<()> {
    let mut list: SinglyLinkedList<i64> = (1..=count).collect();
    println!("{list}");

    'session: loop {
        let mut cursor = list.cursor();
        let edit = loop {
            let Some(code) = tokens.next_token::<i64>()? else {
                break 'session;
            };
            match code {
                1 => {
                    if !cursor.has_next() {
                        break 'session;
                    }
                    println!("{}", cursor.move_next()?);
                }
                2 => {
                    if let Err(err) = cursor.remove() {
                        error!("{err}");
                    }
                    println!("{}", cursor.list());
                }
                3 => break Edit::AddFirst(tokens.operand(code)?),
                4 => break Edit::RemoveFirst,
                5 => break Edit::RemoveValue(tokens.operand(code)?),
                6 => report(cursor.list().get(tokens.operand(code)?)),
                7 => break Edit::Set(tokens.operand(code)?, tokens.operand(code)?),
                8 => break Edit::Insert(tokens.operand(code)?, tokens.operand(code)?),
                9 => break Edit::Remove(tokens.operand(code)?),
                _ => break 'session,
            }
        };

        // Positional edits reshape the list under the cursor, so iteration
        // restarts from the front afterwards.
        info!("cursor reset after positional edit");
        match edit {
            Edit::AddFirst(value) => list.add_first(value),
            Edit::RemoveFirst => report(list.remove_first()),
            Edit::RemoveValue(value) => report(list.remove_value(&value)),
            Edit::Set(index, value) => {
                if let Err(err) = list.set(index, value) {
                    error!("{err}");
                }
            }
            Edit::Insert(index, value) => {
                if let Err(err) = list.insert(index, value) {
                    error!("{err}");
                }
            }
            Edit::Remove(index) => {
                if let Err(err) = list.remove(index) {
                    error!("{err}");
                }
            }
        }
        println!("{list}");
    }

    println!("{list}");
    list.unzip();
    println!("{list}");
    Ok(())
}

fn run_doubly<R: BufRead>(count: i64, tokens: &mut Tokens<R>) -> Result<()> {
    let mut list: DoublyLinkedList<i64> = (1..=count).collect();
    println!("{list}");

    {
        let mut cursor = list.cursor();
        while let Some(code) = tokens.next_token::<i64>()? {
            match code {
                1 => {
                    if !cursor.has_next() {
                        break;
                    }
                    println!("{}", cursor.move_next()?);
                }
                2 => {
                    if !cursor.has_prev() {
                        break;
                    }
                    if let Some(value) = cursor.move_prev()? {
                        println!("{value}");
                    }
                }
                3 => {
                    if let Err(err) = cursor.remove() {
                        error!("{err}");
                    }
                    println!("{}", cursor.list());
                }
                4 => {
                    cursor.insert(tokens.operand(code)?);
                    println!("{}", cursor.list());
                }
                _ => break,
            }
        }
    }

    println!("{list}");
    Ok(())
}

fn run_queue<R: BufRead>(capacity: Option<usize>, tokens: &mut Tokens<R>) -> Result<()> {
    let capacity = match capacity {
        Some(capacity) => capacity,
        None => tokens
            .next_token()?
            .ok_or_else(|| anyhow!("expected the queue capacity on stdin"))?,
    };
    let mut queue: BoundedQueue<i64> = BoundedQueue::new(capacity);

    while let Some(code) = tokens.next_token::<i64>()? {
        match code {
            1 => {
                if let Err(Full(value)) = queue.offer(tokens.operand(code)?) {
                    warn!("queue full, dropped {value}");
                }
                println!("{queue}");
            }
            2 => {
                match queue.poll() {
                    Some(value) => println!("{value}"),
                    None => println!("none"),
                }
                println!("{queue}");
            }
            3 => match queue.peek() {
                Some(value) => println!("{value}"),
                None => println!("none"),
            },
            4 => println!("{}", queue.len()),
            5 => println!("{}", queue.is_empty()),
            6 => {
                queue.clear();
                println!("{queue}");
            }
            7 => println!("{:?}", queue.to_vec()),
            _ => break,
        }
    }
    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logger(args.log_level.into())?;

    let mut tokens = Tokens::new(io::stdin().lock());
    match args.mode {
        Mode::Singly { count } => run_singly(count, &mut tokens),
        Mode::Doubly { count } => run_doubly(count, &mut tokens),
        Mode::Queue { capacity } => run_queue(capacity, &mut tokens),
    }
}
