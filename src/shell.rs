//! A line-oriented front end routing commands to the tree selected by the
//! user.

use std::{
    fmt::{Debug, Display, Write},
    str::FromStr,
};

use tracing::debug;

use crate::{
    error::{Error, Result},
    forest::{Forest, TreeKind},
    input::{parse_key, parse_keys},
    tree::TreeView,
};

pub const HELP: &str = "\
commands:
  mode avl|balanced   select the tree to operate on
  insert <keys..>     insert keys into the AVL tree
  delete <key>        delete a key from the AVL tree
  generate <keys..>   rebuild the balanced tree from keys
  reset               empty the selected tree
  reset-all           empty both trees
  show                print the selected tree's statistics and keys
  dot                 print the selected tree as a Graphviz digraph
  help                print this message
  quit                exit";

/// A single parsed input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command<K> {
    Mode(TreeKind),
    Insert(Vec<K>),
    Delete(K),
    Generate(Vec<K>),
    Reset,
    ResetAll,
    Show,
    Dot,
    Help,
    Quit,
}

impl<K> FromStr for Command<K>
where
    K: FromStr,
{
    type Err = Error;

    fn from_str(line: &str) -> Result<Self> {
        let line = line.trim();
        let (name, args) = line.split_once(char::is_whitespace).unwrap_or((line, ""));

        Ok(match name {
            "mode" => match args.trim() {
                "avl" => Self::Mode(TreeKind::Avl),
                "balanced" => Self::Mode(TreeKind::Balanced),
                _ => return Err(Error::UnknownCommand(line.to_string())),
            },
            "insert" => Self::Insert(parse_keys(args)?),
            "delete" => Self::Delete(parse_key(args)?),
            "generate" => Self::Generate(parse_keys(args)?),
            "reset" => Self::Reset,
            "reset-all" => Self::ResetAll,
            "show" => Self::Show,
            "dot" => Self::Dot,
            "help" => Self::Help,
            "quit" | "exit" => Self::Quit,
            _ => return Err(Error::UnknownCommand(line.to_string())),
        })
    }
}

/// The outcome of executing a [`Command`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    /// Text to show the user.
    pub message: String,

    /// The trees whose contents the command changed.
    pub changed: Vec<TreeKind>,
}

impl Outcome {
    fn message(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            changed: vec![],
        }
    }

    fn changed(message: impl Into<String>, changed: &[TreeKind]) -> Self {
        Self {
            message: message.into(),
            changed: changed.to_vec(),
        }
    }
}

/// The trees, and which of them commands currently apply to.
#[derive(Debug)]
pub struct Session<K> {
    forest: Forest<K>,
    mode: Option<TreeKind>,
}

impl<K> Default for Session<K> {
    fn default() -> Self {
        Self {
            forest: Forest::default(),
            mode: None,
        }
    }
}

impl<K> Session<K>
where
    K: Ord + Debug + Display,
{
    pub fn mode(&self) -> Option<TreeKind> {
        self.mode
    }

    pub fn forest(&self) -> &Forest<K> {
        &self.forest
    }

    pub fn execute(&mut self, cmd: Command<K>) -> Result<Outcome> {
        debug!(?cmd, mode = ?self.mode, "execute");

        let outcome = match cmd {
            Command::Mode(kind) => {
                self.mode = Some(kind);
                Outcome::message(self.report(&format!("{kind} tree selected"), kind))
            }
            Command::Insert(keys) => {
                let kind = self.selected()?;
                match self.forest.insert(kind, keys)? {
                    0 => Outcome::message("no keys inserted (already present)"),
                    n => Outcome::changed(
                        self.report(&format!("inserted {n} key(s)"), kind),
                        &[kind],
                    ),
                }
            }
            Command::Delete(key) => {
                let kind = self.selected()?;
                let title = format!("deleted {key}");
                self.forest.remove(kind, &key)?;
                Outcome::changed(self.report(&title, kind), &[kind])
            }
            Command::Generate(keys) => {
                let kind = self.selected()?;
                let n = self.forest.generate(kind, keys)?;
                Outcome::changed(
                    self.report(&format!("generated tree of {n} key(s)"), kind),
                    &[kind],
                )
            }
            Command::Reset => {
                let kind = self.selected()?;
                if self.forest.reset(kind) {
                    Outcome::changed(self.report(&format!("{kind} tree reset"), kind), &[kind])
                } else {
                    Outcome::message(format!("the {kind} tree is already empty"))
                }
            }
            Command::ResetAll => {
                self.forest.reset_all();
                self.mode = None;
                Outcome::changed("all trees reset", &[TreeKind::Avl, TreeKind::Balanced])
            }
            Command::Show => {
                let kind = self.selected()?;
                Outcome::message(self.report(&format!("{kind} tree"), kind))
            }
            Command::Dot => {
                let kind = self.selected()?;
                Outcome::message(self.forest.view(kind).to_dot())
            }
            Command::Help => Outcome::message(HELP),
            Command::Quit => Outcome::message(""),
        };

        Ok(outcome)
    }

    fn selected(&self) -> Result<TreeKind> {
        self.mode.ok_or(Error::NoModeSelected)
    }

    /// Render the statistics and ordered keys of the `kind` tree under a
    /// `title` heading.
    fn report(&self, title: &str, kind: TreeKind) -> String {
        let mut buf = String::new();

        // Writing to a String cannot fail.
        let _ = write_report(&mut buf, title, kind, self.forest.view(kind));

        buf
    }
}

fn write_report<K, W>(
    buf: &mut W,
    title: &str,
    kind: TreeKind,
    view: &dyn TreeView<K>,
) -> std::fmt::Result
where
    K: Display,
    W: Write,
{
    writeln!(buf, "--- {title} ---")?;

    if view.root().is_none() {
        return write!(buf, "the {kind} tree is empty");
    }

    writeln!(buf, "{}", view.stats())?;
    let keys = view.keys().map(|v| v.to_string()).collect::<Vec<_>>();
    write!(buf, "keys: [{}]", keys.join(", "))
}
