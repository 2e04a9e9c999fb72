//! Graphviz descriptions of automata.
//!
//! Only the textual `digraph` is produced here. Writing it to disk and
//! invoking a layout tool is left to the caller.

use crate::automaton::Automaton;
use crate::state::State;

/// Layout direction of a rendered graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RankDir {
    #[default]
    LeftToRight,
    TopToBottom,
}

impl RankDir {
    fn as_str(&self) -> &'static str {
        match self {
            RankDir::LeftToRight => "LR",
            RankDir::TopToBottom => "TB",
        }
    }
}

/// Tunables for [DotGeneratable::to_dot_with].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DotOptions {
    pub graph_name: String,
    pub rank_dir: RankDir,
}

impl Default for DotOptions {
    fn default() -> Self {
        Self {
            graph_name: "automaton".to_string(),
            rank_dir: RankDir::default(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct DotRepr<T> {
    _kind: std::marker::PhantomData<T>,
    data: String,
}

impl<T> DotRepr<T> {
    pub(crate) fn new(data: String) -> Self {
        Self {
            _kind: std::marker::PhantomData,
            data,
        }
    }
}

impl<T: Sized> std::fmt::Display for DotRepr<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.data)
    }
}

pub trait DotGeneratable: Sized {
    fn to_dot_with(&self, options: &DotOptions) -> DotRepr<Self>;

    fn to_dot(&self) -> DotRepr<Self> {
        self.to_dot_with(&DotOptions::default())
    }
}

impl DotGeneratable for Automaton {
    fn to_dot_with(&self, options: &DotOptions) -> DotRepr<Self> {
        let header = [
            format!("digraph {} {{", quoted(&options.graph_name)),
            format!("    rankdir={};", options.rank_dir.as_str()),
        ];

        let nodes = self.states().iter().map(|state| {
            format!(
                "    s{} [style=\"filled\" fillcolor=\"{}\" label={}];",
                state.id().as_u32(),
                fill_color(state),
                quoted(state.name())
            )
        });

        let edges = self.transitions().iter().map(|transition| {
            format!(
                "    s{} -> s{} [label={}];",
                transition.from().as_u32(),
                transition.to().as_u32(),
                quoted(&transition.symbol().to_string())
            )
        });

        let data = header
            .into_iter()
            .chain(nodes)
            .chain(edges)
            .chain(std::iter::once("}\n".to_string()))
            .collect::<Vec<_>>()
            .join("\n");

        DotRepr::new(data)
    }
}

fn fill_color(state: &State) -> &'static str {
    match (state.is_start(), state.is_end()) {
        (true, true) => "purple",
        (true, false) => "#40b0f0",
        (false, true) => "red",
        (false, false) => "white",
    }
}

fn quoted(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + 2);
    out.push('"');
    for c in text.chars() {
        match c {
            '"' | '\\' => {
                out.push('\\');
                out.push(c);
            }
            '\n' => out.push_str("\\n"),
            _ => out.push(c),
        }
    }
    out.push('"');
    out
}
