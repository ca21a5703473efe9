pub mod create_transaction;

/// Name and summary a command announces itself with.
#[derive(Clone, Copy, Debug)]
pub struct CommandDefinition {
    pub name: &'static str,
    pub description: &'static str,
}

impl CommandDefinition {
    pub const fn new(name: &'static str, description: &'static str) -> Self {
        Self { name, description }
    }
}
