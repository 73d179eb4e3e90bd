use crate::command::CommandFactory;
use std::collections::HashMap;

/// Factory allows creating instances of ExecutableCommand.
///
/// Only supports the builtins defined in this crate.
pub(crate) struct Factory<T> {
    _phantom: std::marker::PhantomData<T>,
}

impl<T> Default for Factory<T> {
    fn default() -> Self {
        Self {
            _phantom: std::marker::PhantomData,
        }
    }
}

/// Immutable table of built-in commands, keyed by the name they are invoked by.
///
/// Built once before the interactive loop starts. A name that is not in the
/// table is run as an external program.
pub struct CommandRegistry {
    by_name: HashMap<&'static str, Box<dyn CommandFactory>>,
    order: Vec<&'static str>,
}

impl CommandRegistry {
    /// Build a registry from `factories`, keeping their order for [`names`](Self::names).
    ///
    /// Fails if two factories share a name.
    pub fn new(factories: Vec<Box<dyn CommandFactory>>) -> anyhow::Result<Self> {
        let mut by_name = HashMap::with_capacity(factories.len());
        let mut order = Vec::with_capacity(factories.len());
        for factory in factories {
            let name = factory.name();
            if by_name.insert(name, factory).is_some() {
                anyhow::bail!("duplicate command name: {name}");
            }
            order.push(name);
        }
        Ok(Self { by_name, order })
    }

    /// Exact-match lookup of a command name.
    pub fn lookup(&self, name: &str) -> Option<&dyn CommandFactory> {
        self.by_name.get(name).map(|factory| factory.as_ref())
    }

    /// Registered names, in registration order.
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.order.iter().copied()
    }
}

impl Default for CommandRegistry {
    /// The shell's builtins: `cdir`, `help`, `ext`, `cwd` and `list`.
    fn default() -> Self {
        use crate::builtin::*;
        let factories: Vec<Box<dyn CommandFactory>> = vec![
            Box::new(Factory::<Cdir>::default()),
            Box::new(Factory::<Help>::default()),
            Box::new(Factory::<Ext>::default()),
            Box::new(Factory::<Cwd>::default()),
            Box::new(Factory::<List>::default()),
        ];
        Self::new(factories).unwrap_or_else(|err| unreachable!("builtin names clash: {err}"))
    }
}
