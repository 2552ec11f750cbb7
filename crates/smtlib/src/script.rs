use crate::command::Command;

/// An SMT-LIB script: a sequence of commands.
#[derive(Debug, Clone, Default)]
pub struct Script {
    commands: Vec<Command>,
}

impl Script {
    pub fn new() -> Self {
        Self {
            commands: Vec::new(),
        }
    }

    pub fn with_commands(commands: Vec<Command>) -> Self {
        Self { commands }
    }

    pub fn push(&mut self, cmd: Command) {
        self.commands.push(cmd);
    }

    pub fn commands(&self) -> &[Command] {
        &self.commands
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// The single asserted term of the script, when exactly one `assert` is
    /// present. The harness builds one assertion per query, and the model
    /// substitution check needs it back.
    pub fn sole_assertion(&self) -> Option<&crate::term::Term> {
        let mut asserts = self.commands.iter().filter_map(|c| match c {
            Command::Assert(t) => Some(t),
            _ => None,
        });
        let first = asserts.next()?;
        if asserts.next().is_some() {
            return None;
        }
        Some(first)
    }

    /// Declared constants in declaration order, as `(name, sort)` pairs.
    pub fn declarations(&self) -> impl Iterator<Item = (&str, &crate::sort::Sort)> {
        self.commands.iter().filter_map(|c| match c {
            Command::DeclareConst(name, sort) => Some((name.as_str(), sort)),
            _ => None,
        })
    }
}
